//! Backend communication services.
//!
//! # Services
//!
//! - [`upload`] - file submission to the analysis endpoint
//! - [`health`] - backend liveness probe for the header indicator

pub mod health;
pub mod upload;

pub use health::*;
pub use upload::*;
