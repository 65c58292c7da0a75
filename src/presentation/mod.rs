// Presentation layer - What the page and the terminal see
pub mod report;
#[cfg(target_arch = "wasm32")]
pub mod wasm_api;
