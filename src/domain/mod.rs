// Domain layer - Bindings, chart specs and endpoint payloads
pub mod binding;
pub mod chart;
pub mod error;
pub mod response;
pub mod section;
