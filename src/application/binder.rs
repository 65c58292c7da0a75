// Dashboard binder - Use case for fetching an endpoint and binding it into the page
use crate::application::json_source::JsonSource;
use crate::application::surface::Surface;
use crate::domain::binding::{Binding, RenderMode};
use crate::domain::chart::{ChartSpec, RENDER_CONFIG};
use crate::domain::error::{DashboardError, Result};
use crate::domain::response::{display_text, EndpointResponse};
use crate::domain::section::Section;
use futures::future::join_all;
use std::fmt;
use std::rc::Rc;

/// Where a single load pipeline got to. A failure is reported together with
/// the last stage that completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Pending,
    Fetched,
    Parsed,
    Bound,
    Failed,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineStage::Pending => "pending",
            PipelineStage::Fetched => "fetched",
            PipelineStage::Parsed => "parsed",
            PipelineStage::Bound => "bound",
            PipelineStage::Failed => "failed",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindOutcome {
    pub url: String,
    pub replaced: usize,
    pub charts: usize,
}

enum PreparedWrite<'a> {
    Html { element_id: &'a str, text: String },
    Chart { element_id: &'a str, spec: ChartSpec },
}

#[derive(Clone)]
pub struct DashboardBinder {
    source: Rc<dyn JsonSource>,
    surface: Rc<dyn Surface>,
    base_url: String,
}

impl DashboardBinder {
    pub fn new(source: Rc<dyn JsonSource>, surface: Rc<dyn Surface>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            source,
            surface,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn section_url(&self, section: Section) -> String {
        format!("{}{}", self.base_url, section.path())
    }

    /// Parse `chart_json` and render it into `element_id`.
    ///
    /// The JSON is parsed before the page is looked at, so a malformed
    /// payload never touches the surface.
    pub fn render_chart(&self, element_id: &str, chart_json: &str) -> Result<()> {
        let spec = ChartSpec::parse(element_id, chart_json)?;
        self.ensure_element(element_id)?;
        self.surface.react(element_id, &spec, &RENDER_CONFIG)
    }

    pub fn replace_content(&self, element_id: &str, value: &str) -> Result<()> {
        self.ensure_element(element_id)?;
        self.surface.set_inner_html(element_id, value)
    }

    /// Fetch `url` once and apply `bindings` in order.
    ///
    /// Every binding is resolved against the response and the page before
    /// the first write, so a missing field, missing element or bad chart
    /// leaves the page as it was.
    pub async fn load_and_bind(&self, url: &str, bindings: &[Binding]) -> Result<BindOutcome> {
        self.run_pipeline(url, bindings, None).await
    }

    /// Load one of the known sections, validating its payload schema first.
    pub async fn load_section(&self, section: Section) -> Result<BindOutcome> {
        let url = self.section_url(section);
        self.run_pipeline(&url, &section.bindings(), Some(section)).await
    }

    /// Load several sections concurrently on the current task. Results come
    /// back in input order; failures are logged and returned, never retried.
    pub async fn load_sections(&self, sections: &[Section]) -> Vec<(Section, Result<BindOutcome>)> {
        let loads = sections
            .iter()
            .map(|&section| async move { (section, self.load_section(section).await) });
        let results = join_all(loads).await;

        for (section, result) in &results {
            if let Err(e) = result {
                tracing::warn!(section = %section, error = %e, "dashboard section failed to update");
            }
        }

        results
    }

    async fn run_pipeline(
        &self,
        url: &str,
        bindings: &[Binding],
        schema: Option<Section>,
    ) -> Result<BindOutcome> {
        let mut stage = PipelineStage::Pending;
        tracing::debug!(url, stage = %stage, bindings = bindings.len(), "starting load");

        let result = self.advance(url, bindings, schema, &mut stage).await;
        match &result {
            Ok(outcome) => tracing::debug!(
                url,
                stage = %PipelineStage::Bound,
                replaced = outcome.replaced,
                charts = outcome.charts,
                "bindings applied"
            ),
            Err(e) => tracing::debug!(
                url,
                stage = %PipelineStage::Failed,
                after = %stage,
                error = %e,
                "load aborted"
            ),
        }
        result
    }

    async fn advance(
        &self,
        url: &str,
        bindings: &[Binding],
        schema: Option<Section>,
        stage: &mut PipelineStage,
    ) -> Result<BindOutcome> {
        let body = self.source.get_json(url).await?;
        *stage = PipelineStage::Fetched;
        tracing::debug!(url, stage = %stage);

        let response = EndpointResponse::from_value(url, body)?;
        if let Some(section) = schema {
            section.validate(&response)?;
        }
        *stage = PipelineStage::Parsed;
        tracing::debug!(url, stage = %stage, fields = response.len());

        let writes = self.prepare(&response, bindings)?;
        let outcome = self.apply(url, writes)?;
        *stage = PipelineStage::Bound;
        Ok(outcome)
    }

    fn prepare<'a>(&self, response: &EndpointResponse, bindings: &'a [Binding]) -> Result<Vec<PreparedWrite<'a>>> {
        bindings
            .iter()
            .map(|binding| {
                let element_id = binding.element_id.as_str();
                let value = response
                    .get(&binding.field)
                    .ok_or_else(|| DashboardError::missing_field(element_id, &binding.field))?;
                self.ensure_element(element_id)?;

                match binding.mode {
                    RenderMode::Replace => Ok(PreparedWrite::Html {
                        element_id,
                        text: display_text(value),
                    }),
                    RenderMode::Plot => {
                        let chart_json = value.as_str().ok_or_else(|| {
                            DashboardError::decode(
                                format!("chart for #{}", element_id),
                                "expected a JSON-encoded string",
                            )
                        })?;
                        let spec = ChartSpec::parse(element_id, chart_json)?;
                        Ok(PreparedWrite::Chart { element_id, spec })
                    }
                }
            })
            .collect()
    }

    fn apply(&self, url: &str, writes: Vec<PreparedWrite<'_>>) -> Result<BindOutcome> {
        let mut outcome = BindOutcome {
            url: url.to_string(),
            replaced: 0,
            charts: 0,
        };

        for write in writes {
            match write {
                PreparedWrite::Html { element_id, text } => {
                    self.surface.set_inner_html(element_id, &text)?;
                    outcome.replaced += 1;
                }
                PreparedWrite::Chart { element_id, spec } => {
                    self.surface.react(element_id, &spec, &RENDER_CONFIG)?;
                    outcome.charts += 1;
                }
            }
        }

        Ok(outcome)
    }

    fn ensure_element(&self, element_id: &str) -> Result<()> {
        if self.surface.has_element(element_id) {
            Ok(())
        } else {
            Err(DashboardError::missing_element(element_id))
        }
    }
}
