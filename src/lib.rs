//! Energy dashboard front-end.
//!
//! Fetches precomputed JSON documents from the local data server and binds
//! their fields into the page, either as raw HTML or as Plotly charts.
//! Built as a `cdylib` for the browser and as an `rlib` for the headless
//! runner and tests.
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use application::binder::{BindOutcome, DashboardBinder, PipelineStage};
pub use domain::binding::{Binding, RenderMode};
pub use domain::error::DashboardError;
pub use domain::section::Section;
