//! Gradient Lab Library
//!
//! This library provides the colour and gradient engine behind the Gradient
//! Lab CLI: hex/RGB/HSL conversion, colour notation, CSS gradient assembly,
//! share links, showcase stylesheets and configuration persistence.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod engine;
pub mod logging;
pub mod models;
pub mod share;
pub mod showcase;
