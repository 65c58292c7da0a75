// Infrastructure layer - External dependencies and adapters
#[cfg(target_arch = "wasm32")]
pub mod browser_surface;
pub mod config;
pub mod http_source;
pub mod snapshot_surface;
