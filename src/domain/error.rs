//! Error taxonomy for the fetch → decode → bind pipeline

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    /// The request never produced a usable response: transport failure or a
    /// non-success status from the data server.
    #[error("network failure for {url}: {message}")]
    Network { url: String, message: String },

    /// A body or chart payload was not valid JSON, or did not match the
    /// expected shape.
    #[error("decode failure in {context}: {message}")]
    Decode { context: String, message: String },

    /// A binding referenced an element or field that does not exist.
    #[error("binding failure for #{element_id}: {reason}")]
    Binding { element_id: String, reason: String },

    /// The page accepted the binding but the write itself threw.
    #[error("render failure for #{element_id}: {message}")]
    Render { element_id: String, message: String },

    /// There is no page to bind into at all.
    #[error("page unavailable: {0}")]
    PageUnavailable(String),
}

impl DashboardError {
    pub fn decode(context: impl Into<String>, err: impl std::fmt::Display) -> Self {
        DashboardError::Decode {
            context: context.into(),
            message: err.to_string(),
        }
    }

    pub fn missing_element(element_id: &str) -> Self {
        DashboardError::Binding {
            element_id: element_id.to_string(),
            reason: "element not found".to_string(),
        }
    }

    pub fn missing_field(element_id: &str, field: &str) -> Self {
        DashboardError::Binding {
            element_id: element_id.to_string(),
            reason: format!("field '{}' absent from response", field),
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
