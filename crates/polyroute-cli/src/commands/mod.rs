//! CLI commands

pub mod config;
pub mod demo;
pub mod detect;
pub mod languages;
pub mod route;
