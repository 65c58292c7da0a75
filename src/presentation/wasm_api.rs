// JavaScript entry points for the dashboard page
use crate::application::binder::DashboardBinder;
use crate::domain::binding::Binding;
use crate::domain::error::DashboardError;
use crate::domain::section::Section;
use crate::infrastructure::browser_surface::BrowserSurface;
use crate::infrastructure::config::{embedded_dashboard_config, DashboardConfig};
use crate::infrastructure::http_source::HttpJsonSource;
use std::cell::OnceCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

fn to_js_error(err: DashboardError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

fn config_error(err: anyhow::Error) -> JsValue {
    js_sys::Error::new(&format!("{:#}", err)).into()
}

/// Configuration and binder shared by every export on the page.
#[derive(Clone)]
struct Dashboard {
    config: DashboardConfig,
    binder: DashboardBinder,
}

thread_local! {
    static DASHBOARD: OnceCell<Dashboard> = const { OnceCell::new() };
}

fn dashboard() -> Result<Dashboard, JsValue> {
    if let Some(dashboard) = DASHBOARD.with(|cell| cell.get().cloned()) {
        return Ok(dashboard);
    }

    let config = embedded_dashboard_config().map_err(config_error)?;
    let surface = BrowserSurface::new().map_err(to_js_error)?;
    let binder = DashboardBinder::new(
        Rc::new(HttpJsonSource::new()),
        Rc::new(surface),
        config.server.base_url.clone(),
    );
    let dashboard = Dashboard { config, binder };
    DASHBOARD.with(|cell| {
        let _ = cell.set(dashboard.clone());
    });
    Ok(dashboard)
}

async fn load(section: Section) -> Result<(), JsValue> {
    dashboard()?
        .binder
        .load_section(section)
        .await
        .map(|_| ())
        .map_err(to_js_error)
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Route tracing events to the browser console; a second call keeps the first subscriber.
    let _ = tracing_wasm::try_set_as_global_default();
}

#[wasm_bindgen(js_name = loadingData)]
pub async fn loading_data() -> Result<(), JsValue> {
    load(Section::StartPage).await
}

#[wasm_bindgen]
pub async fn starttimes() -> Result<(), JsValue> {
    load(Section::StartTimes).await
}

#[wasm_bindgen]
pub async fn consumption() -> Result<(), JsValue> {
    load(Section::Consumption).await
}

/// Load every configured section concurrently. Rejects with the first
/// failure once all sections have settled.
#[wasm_bindgen(js_name = loadDashboard)]
pub async fn load_dashboard() -> Result<(), JsValue> {
    let dashboard = dashboard()?;
    let results = dashboard.binder.load_sections(&dashboard.config.sections).await;
    match results.into_iter().find_map(|(_, result)| result.err()) {
        Some(err) => Err(to_js_error(err)),
        None => Ok(()),
    }
}

/// Fetch `url` and apply bindings given as a JSON array of
/// `{element_id, field, mode}` objects.
#[wasm_bindgen(js_name = loadAndBind)]
pub async fn load_and_bind(url: String, bindings_json: String) -> Result<(), JsValue> {
    let bindings: Vec<Binding> = serde_json::from_str(&bindings_json)
        .map_err(|e| to_js_error(DashboardError::decode("binding list", e)))?;
    dashboard()?
        .binder
        .load_and_bind(&url, &bindings)
        .await
        .map(|_| ())
        .map_err(to_js_error)
}

#[wasm_bindgen]
pub fn plotme(loc: &str, data: &str) -> Result<(), JsValue> {
    dashboard()?.binder.render_chart(loc, data).map_err(to_js_error)
}

#[wasm_bindgen(js_name = replaceMe)]
pub fn replace_me(loc: &str, data: &str) -> Result<(), JsValue> {
    dashboard()?.binder.replace_content(loc, data).map_err(to_js_error)
}
