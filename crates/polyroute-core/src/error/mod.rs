//! Error types for polyroute
//!
//! Every fallible operation in the core returns [`PolyrouteResult`]. Variants carry a
//! human-readable message and an optional context describing where the failure happened.
//! Only registry and configuration errors ever reach a caller of the public API; strategy
//! failures are contained inside the detector and degrade to "no evidence".

mod constructors;
mod conversions;
mod types;

pub use types::{PolyrouteError, PolyrouteResult, ResultExt};
