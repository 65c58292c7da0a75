// Binding domain model - declarative field → element updates
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Write the value into the element as raw HTML
    Replace,
    /// Treat the value as a JSON-encoded chart spec and render it
    Plot,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Binding {
    pub element_id: String,
    pub field: String,
    pub mode: RenderMode,
}

impl Binding {
    pub fn new(element_id: impl Into<String>, field: impl Into<String>, mode: RenderMode) -> Self {
        Self {
            element_id: element_id.into(),
            field: field.into(),
            mode,
        }
    }

    pub fn replace(id: &str) -> Self {
        Self::new(id, id, RenderMode::Replace)
    }

    pub fn plot(id: &str) -> Self {
        Self::new(id, id, RenderMode::Plot)
    }
}
