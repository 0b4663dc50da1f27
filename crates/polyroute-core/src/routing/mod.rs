//! Specialist routing on top of detection

mod router;

pub use router::{RoutingOutcome, SpecialistRouter, specialist_key};
