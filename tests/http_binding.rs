//! End-to-end binding against a local axum server serving fixture payloads.

use axum::{http::StatusCode, routing::get, Json, Router};
use energy_dashboard::infrastructure::http_source::HttpJsonSource;
use energy_dashboard::infrastructure::snapshot_surface::{ElementContent, SnapshotSurface};
use energy_dashboard::{Binding, DashboardBinder, DashboardError, Section};
use serde_json::{json, Value};
use std::rc::Rc;

const EMPTY_CHART: &str = r#"{"data":[],"layout":{}}"#;

fn line_chart(title: &str) -> String {
    json!({
        "data": [{"type": "scatter", "mode": "lines", "y": [0.2, 0.4, 0.3]}],
        "layout": {"title": {"text": title}, "showlegend": false},
        "config": {"plotlyServerURL": "https://plot.ly"}
    })
    .to_string()
}

fn start_times() -> Value {
    json!({
        "WashingMachineEnd": "2024-01-15T04:30:00+00:00",
        "WashingMachineCost": 2.3,
        "WashingMachinePlot": EMPTY_CHART,
        "GentleDishwasherStart": "2024-01-15T02:00:00+00:00",
        "GentleDishwasherCost": 1.1,
        "GentleDishwasherPlot": line_chart("Start Times Gentle Dishwasher"),
        "EcoDishwasherStart": "2024-01-15T01:30:00+00:00",
        "EcoDishwasherCost": 0.9,
        "EcoDishwasherPlot": line_chart("Start Times Eco Dishwasher"),
        "IntenseDishwasherStart": "2024-01-15T03:00:00+00:00",
        "IntenseDishwasherCost": 1.7,
        "IntenseDishwasherPlot": line_chart("Start Times Intense Dishwasher")
    })
}

fn router() -> Router {
    Router::new()
        .route(
            "/startpage",
            get(|| async {
                Json(json!({
                    "missing_gas": "3 days",
                    "missing_electric": "0 days",
                    "recent_gas": "2024-01-14T23:30:00+00:00",
                    "recent_electric": "2024-01-15T00:00:00+00:00"
                }))
            }),
        )
        .route("/starttimes", get(|| async { Json(start_times()) }))
        .route(
            "/consumption",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error") }),
        )
        .route("/broken", get(|| async { "<html>not json</html>" }))
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn binder(base_url: &str, surface: &Rc<SnapshotSurface>) -> DashboardBinder {
    DashboardBinder::new(Rc::new(HttpJsonSource::new()), surface.clone(), base_url)
}

#[tokio::test]
async fn test_startpage_values_replace_content() {
    let base_url = serve(router()).await;
    let surface = Rc::new(SnapshotSurface::for_sections(&[Section::StartPage]));

    let outcome = binder(&base_url, &surface).load_section(Section::StartPage).await.unwrap();

    assert_eq!(outcome.replaced, 4);
    assert_eq!(
        surface.content("missing_gas"),
        Some(ElementContent::Html { html: "3 days".to_string() })
    );
    assert_eq!(
        surface.content("recent_electric"),
        Some(ElementContent::Html {
            html: "2024-01-15T00:00:00+00:00".to_string()
        })
    );
}

#[tokio::test]
async fn test_starttimes_populates_every_element() {
    let base_url = serve(router()).await;
    let surface = Rc::new(SnapshotSurface::for_sections(&[Section::StartTimes]));

    let outcome = binder(&base_url, &surface).load_section(Section::StartTimes).await.unwrap();

    assert_eq!((outcome.replaced, outcome.charts), (8, 4));
    assert!(surface
        .snapshot()
        .values()
        .all(|content| *content != ElementContent::Empty));
    assert_eq!(
        surface.content("WashingMachineCost"),
        Some(ElementContent::Html { html: "2.3".to_string() })
    );
    match surface.content("EcoDishwasherPlot") {
        Some(ElementContent::Chart { spec, config, .. }) => {
            assert_eq!(spec.data.len(), 1);
            assert_eq!(spec.layout["title"]["text"], "Start Times Eco Dishwasher");
            assert!(config.responsive);
        }
        other => panic!("expected a chart, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_is_network_failure() {
    let base_url = serve(router()).await;
    let surface = Rc::new(SnapshotSurface::for_sections(&[Section::Consumption]));

    let err = binder(&base_url, &surface).load_section(Section::Consumption).await.unwrap_err();

    match err {
        DashboardError::Network { url, message } => {
            assert!(url.ends_with("/consumption"));
            assert!(message.contains("500"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(surface.content("gasDailyChart"), Some(ElementContent::Empty));
}

#[tokio::test]
async fn test_non_json_body_is_decode_failure() {
    let base_url = serve(router()).await;
    let surface = Rc::new(SnapshotSurface::with_elements(["missing_gas"]));

    let url = format!("{}/broken", base_url);
    let err = binder(&base_url, &surface)
        .load_and_bind(&url, &[Binding::replace("missing_gas")])
        .await
        .unwrap_err();

    assert!(matches!(err, DashboardError::Decode { .. }));
}

#[tokio::test]
async fn test_unreachable_server_is_network_failure() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let surface = Rc::new(SnapshotSurface::for_sections(&[Section::StartPage]));
    let err = binder(&base_url, &surface).load_section(Section::StartPage).await.unwrap_err();

    assert!(matches!(err, DashboardError::Network { .. }));
}

#[tokio::test]
async fn test_sections_load_independently() {
    let base_url = serve(router()).await;
    let surface = Rc::new(SnapshotSurface::for_sections(&Section::ALL));

    let results = binder(&base_url, &surface).load_sections(&Section::ALL).await;

    let failed: Vec<Section> = results
        .iter()
        .filter(|(_, result)| result.is_err())
        .map(|(section, _)| *section)
        .collect();
    assert_eq!(failed, vec![Section::Consumption]);
    assert_ne!(surface.content("WashingMachinePlot"), Some(ElementContent::Empty));
}
