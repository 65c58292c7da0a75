// Snapshot report printed by the headless runner
use crate::application::binder::BindOutcome;
use crate::domain::error::Result;
use crate::infrastructure::snapshot_surface::ElementContent;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum LoadStatus {
    Bound { replaced: usize, charts: usize },
    Failed { error: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct LoadReport {
    pub name: String,
    pub url: String,
    #[serde(flatten)]
    pub status: LoadStatus,
}

#[derive(Debug, Default, Serialize)]
pub struct DashboardReport {
    pub loads: Vec<LoadReport>,
    pub elements: BTreeMap<String, ElementContent>,
}

impl DashboardReport {
    pub fn record(&mut self, name: &str, url: &str, result: &Result<BindOutcome>) {
        let status = match result {
            Ok(outcome) => LoadStatus::Bound {
                replaced: outcome.replaced,
                charts: outcome.charts,
            },
            Err(e) => LoadStatus::Failed { error: e.to_string() },
        };
        self.loads.push(LoadReport {
            name: name.to_string(),
            url: url.to_string(),
            status,
        });
    }

    pub fn failures(&self) -> usize {
        self.loads
            .iter()
            .filter(|load| matches!(load.status, LoadStatus::Failed { .. }))
            .count()
    }
}
