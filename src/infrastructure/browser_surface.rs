// Browser page surface - web-sys DOM writes and the global Plotly object
use crate::application::surface::Surface;
use crate::domain::chart::{ChartSpec, RenderConfig};
use crate::domain::error::{DashboardError, Result};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

#[wasm_bindgen]
extern "C" {
    /// `Plotly.react` reuses an existing plot in the element when present.
    #[wasm_bindgen(js_namespace = Plotly, js_name = react, catch)]
    fn plotly_react(
        element: &Element,
        data: &JsValue,
        layout: &JsValue,
        config: &JsValue,
    ) -> std::result::Result<JsValue, JsValue>;
}

pub struct BrowserSurface {
    document: Document,
}

impl BrowserSurface {
    pub fn new() -> Result<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| DashboardError::PageUnavailable("no document available".to_string()))?;
        Ok(Self { document })
    }

    fn element(&self, element_id: &str) -> Result<Element> {
        self.document
            .get_element_by_id(element_id)
            .ok_or_else(|| DashboardError::missing_element(element_id))
    }
}

/// Hand a serializable value to JavaScript by round-tripping through JSON.
fn to_js<T: serde::Serialize>(element_id: &str, value: &T) -> Result<JsValue> {
    let text = serde_json::to_string(value).map_err(|e| DashboardError::decode(format!("chart for #{}", element_id), e))?;
    js_sys::JSON::parse(&text).map_err(|e| render_error(element_id, e))
}

fn render_error(element_id: &str, err: JsValue) -> DashboardError {
    DashboardError::Render {
        element_id: element_id.to_string(),
        message: err.as_string().unwrap_or_else(|| format!("{:?}", err)),
    }
}

impl Surface for BrowserSurface {
    fn has_element(&self, element_id: &str) -> bool {
        self.document.get_element_by_id(element_id).is_some()
    }

    fn set_inner_html(&self, element_id: &str, html: &str) -> Result<()> {
        self.element(element_id)?.set_inner_html(html);
        Ok(())
    }

    fn react(&self, element_id: &str, spec: &ChartSpec, config: &RenderConfig) -> Result<()> {
        let element = self.element(element_id)?;
        let data = to_js(element_id, &spec.data)?;
        let layout = to_js(element_id, &spec.layout)?;
        let config = to_js(element_id, config)?;

        plotly_react(&element, &data, &layout, &config).map_err(|e| render_error(element_id, e))?;
        Ok(())
    }
}
