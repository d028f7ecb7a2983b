//! Youth education and skill gap analysis.
//!
//! The [`dashboard`] module holds the demand dataset, the update rules that
//! turn a control selection into charts and messages, and the HTTP router
//! serving the interactive page. [`config`], [`error`], and [`telemetry`]
//! carry the service plumbing shared with the API binary.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod telemetry;
