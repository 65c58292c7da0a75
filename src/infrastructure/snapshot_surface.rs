// In-memory page model used by the headless runner and tests
use crate::application::surface::Surface;
use crate::domain::chart::{ChartSpec, RenderConfig};
use crate::domain::error::{DashboardError, Result};
use crate::domain::section::Section;
use serde::Serialize;
use std::cell::RefCell;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ElementContent {
    Empty,
    Html {
        html: String,
    },
    /// `renders` counts react calls against the same chart instance
    Chart {
        spec: ChartSpec,
        config: RenderConfig,
        renders: u32,
    },
}

#[derive(Debug, Default)]
pub struct SnapshotSurface {
    elements: RefCell<BTreeMap<String, ElementContent>>,
}

impl SnapshotSurface {
    pub fn with_elements<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let elements = ids
            .into_iter()
            .map(|id| (id.into(), ElementContent::Empty))
            .collect();
        Self {
            elements: RefCell::new(elements),
        }
    }

    /// A page holding every element the given sections bind to.
    pub fn for_sections(sections: &[Section]) -> Self {
        Self::with_elements(
            sections
                .iter()
                .flat_map(|section| section.bindings())
                .map(|binding| binding.element_id),
        )
    }

    pub fn add_element(&self, element_id: &str) {
        self.elements
            .borrow_mut()
            .entry(element_id.to_string())
            .or_insert(ElementContent::Empty);
    }

    pub fn content(&self, element_id: &str) -> Option<ElementContent> {
        self.elements.borrow().get(element_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.elements.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.borrow().is_empty()
    }

    pub fn snapshot(&self) -> BTreeMap<String, ElementContent> {
        self.elements.borrow().clone()
    }
}

impl Surface for SnapshotSurface {
    fn has_element(&self, element_id: &str) -> bool {
        self.elements.borrow().contains_key(element_id)
    }

    fn set_inner_html(&self, element_id: &str, html: &str) -> Result<()> {
        let mut elements = self.elements.borrow_mut();
        let content = elements
            .get_mut(element_id)
            .ok_or_else(|| DashboardError::missing_element(element_id))?;
        *content = ElementContent::Html {
            html: html.to_string(),
        };
        Ok(())
    }

    fn react(&self, element_id: &str, spec: &ChartSpec, config: &RenderConfig) -> Result<()> {
        let mut elements = self.elements.borrow_mut();
        let content = elements
            .get_mut(element_id)
            .ok_or_else(|| DashboardError::missing_element(element_id))?;

        let renders = match content {
            ElementContent::Chart { renders, .. } => *renders + 1,
            _ => 1,
        };
        *content = ElementContent::Chart {
            spec: spec.clone(),
            config: *config,
            renders,
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_sections_registers_bound_elements() {
        let surface = SnapshotSurface::for_sections(&Section::ALL);
        assert_eq!(surface.len(), 4 + 12 + 6);
        assert!(surface.has_element("IntenseDishwasherPlot"));
        assert!(!surface.has_element("gasConsumption2024BinnedChart"));
    }

    #[test]
    fn test_html_replaces_chart() {
        let surface = SnapshotSurface::with_elements(["x"]);
        let spec = ChartSpec {
            data: Vec::new(),
            layout: Default::default(),
        };
        surface.react("x", &spec, &RenderConfig { responsive: true }).unwrap();
        surface.set_inner_html("x", "gone").unwrap();
        assert_eq!(
            surface.content("x"),
            Some(ElementContent::Html {
                html: "gone".to_string()
            })
        );
    }

    #[test]
    fn test_snapshot_serializes_with_kind_tag() {
        let surface = SnapshotSurface::with_elements(["missing_gas"]);
        surface.set_inner_html("missing_gas", "3 days").unwrap();
        let json = serde_json::to_value(surface.snapshot()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"missing_gas": {"kind": "html", "html": "3 days"}})
        );
    }
}
