//! UI Components for the Dashgen application.
//!
//! # Layout Components
//! - [`Header`] - top bar with backend status indicator
//! - [`Hero`] - main title and description
//! - [`Footer`] - page footer
//!
//! # Feature Components
//! - [`UploadSection`] - file chooser, submit control and error banner
//! - [`ResultsSection`] - the five analysis result panels

mod footer;
mod header;
mod hero;
mod results;
mod upload;

pub use footer::*;
pub use header::*;
pub use hero::*;
pub use results::*;
pub use upload::*;
