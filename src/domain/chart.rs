// Chart specification domain model
use crate::domain::error::{DashboardError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A plotting-library figure: a list of traces plus a layout object.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChartSpec {
    pub data: Vec<Value>,
    #[serde(default)]
    pub layout: Map<String, Value>,
}

/// Options passed alongside every render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenderConfig {
    pub responsive: bool,
}

pub const RENDER_CONFIG: RenderConfig = RenderConfig { responsive: true };

impl ChartSpec {
    /// Parse a JSON-encoded figure as shipped by the data server.
    ///
    /// Members other than `data` and `layout` (the server also embeds
    /// `config`) are ignored; the render configuration is fixed client-side.
    pub fn parse(element_id: &str, chart_json: &str) -> Result<Self> {
        serde_json::from_str(chart_json)
            .map_err(|e| DashboardError::decode(format!("chart for #{}", element_id), e))
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
