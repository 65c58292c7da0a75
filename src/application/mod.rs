// Application layer - Use cases and the seams they depend on
pub mod binder;
pub mod json_source;
pub mod surface;
