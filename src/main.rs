// Headless runner - loads every configured section into an in-memory page and prints it
#[cfg(not(target_arch = "wasm32"))]
use std::rc::Rc;

#[cfg(not(target_arch = "wasm32"))]
use energy_dashboard::{
    infrastructure::{
        config::load_dashboard_config, http_source::HttpJsonSource, snapshot_surface::SnapshotSurface,
    },
    presentation::report::DashboardReport,
    DashboardBinder,
};

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays a clean JSON document
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_dashboard_config()?;

    let surface = Rc::new(SnapshotSurface::for_sections(&config.sections));
    for endpoint in &config.endpoints {
        for binding in &endpoint.bindings {
            surface.add_element(&binding.element_id);
        }
    }

    let binder = DashboardBinder::new(
        Rc::new(HttpJsonSource::new()),
        surface.clone(),
        config.server.base_url.clone(),
    );

    tracing::info!(
        "Loading {} sections and {} endpoints from {}",
        config.sections.len(),
        config.endpoints.len(),
        config.server.base_url
    );

    let mut report = DashboardReport::default();
    for (section, result) in binder.load_sections(&config.sections).await {
        report.record(section.name(), &binder.section_url(section), &result);
    }

    for endpoint in &config.endpoints {
        let url = config.endpoint_url(&endpoint.path);
        let result = binder.load_and_bind(&url, &endpoint.bindings).await;
        if let Err(e) = &result {
            tracing::warn!(endpoint = %endpoint.path, error = %e, "endpoint failed to update");
        }
        report.record(&endpoint.path, &url, &result);
    }

    report.elements = surface.snapshot();
    println!("{}", serde_json::to_string_pretty(&report)?);

    let failures = report.failures();
    if failures > 0 {
        anyhow::bail!("{} of {} loads failed", failures, report.loads.len());
    }

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
