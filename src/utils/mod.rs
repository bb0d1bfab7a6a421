//! Utility functions shared by the services and handlers.
//!
//! - [`code_generator`] - Random short code generation
//! - [`target_url`] - `http(s)://` scheme check
//! - [`public_origin`] - Origin resolution for short URLs

pub mod code_generator;
pub mod public_origin;
pub mod target_url;
