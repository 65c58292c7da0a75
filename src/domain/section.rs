// Dashboard sections - the known endpoints, their payload schemas and binding tables
use crate::domain::binding::Binding;
use crate::domain::chart::ChartSpec;
use crate::domain::error::{DashboardError, Result};
use crate::domain::response::EndpointResponse;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    StartPage,
    StartTimes,
    Consumption,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::StartPage, Section::StartTimes, Section::Consumption];

    pub fn name(&self) -> &'static str {
        match self {
            Section::StartPage => "startpage",
            Section::StartTimes => "starttimes",
            Section::Consumption => "consumption",
        }
    }

    pub fn path(&self) -> String {
        format!("/{}", self.name())
    }

    pub fn bindings(&self) -> Vec<Binding> {
        match self {
            Section::StartPage => ["missing_gas", "missing_electric", "recent_gas", "recent_electric"]
                .into_iter()
                .map(Binding::replace)
                .collect(),
            Section::StartTimes => {
                let values = [
                    "WashingMachineEnd",
                    "WashingMachineCost",
                    "GentleDishwasherStart",
                    "GentleDishwasherCost",
                    "EcoDishwasherStart",
                    "EcoDishwasherCost",
                    "IntenseDishwasherStart",
                    "IntenseDishwasherCost",
                ];
                let plots = [
                    "WashingMachinePlot",
                    "GentleDishwasherPlot",
                    "EcoDishwasherPlot",
                    "IntenseDishwasherPlot",
                ];
                values
                    .into_iter()
                    .map(Binding::replace)
                    .chain(plots.into_iter().map(Binding::plot))
                    .collect()
            }
            // The payload also carries the 2023 and 2024 binned charts; the
            // page has no elements for them, so they are validated but not bound.
            Section::Consumption => [
                "electricityDailyChart",
                "electricityRollingChart",
                "gasDailyChart",
                "gasRollingChart",
                "gasConsumptionBinnedChart",
                "gasConsumption2022BinnedChart",
            ]
            .into_iter()
            .map(Binding::plot)
            .collect(),
        }
    }

    /// Check the response against this section's typed record.
    pub fn validate(&self, response: &EndpointResponse) -> Result<()> {
        match self {
            Section::StartPage => decode_as::<StartPage>(*self, response),
            Section::StartTimes => decode_as::<StartTimes>(*self, response),
            Section::Consumption => decode_as::<Consumption>(*self, response),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Section {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        Section::ALL
            .into_iter()
            .find(|section| section.name() == s)
            .ok_or_else(|| DashboardError::decode("section name", format!("unknown section '{}'", s)))
    }
}

fn decode_as<T: DeserializeOwned>(section: Section, response: &EndpointResponse) -> Result<()> {
    serde_json::from_value::<T>(response.as_value())
        .map(|_| ())
        .map_err(|e| DashboardError::decode(format!("{} payload", section), e))
}

/// A display-ready scalar: the server sends counts and costs as numbers,
/// timestamps and labels as strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DisplayValue {
    Number(serde_json::Number),
    Text(String),
}

/// A chart field: a string holding a JSON-encoded figure.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddedChart(pub ChartSpec);

impl<'de> Deserialize<'de> for EmbeddedChart {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        serde_json::from_str(&encoded)
            .map(EmbeddedChart)
            .map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StartPage {
    pub missing_gas: DisplayValue,
    pub missing_electric: DisplayValue,
    pub recent_gas: DisplayValue,
    pub recent_electric: DisplayValue,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartTimes {
    pub washing_machine_end: DisplayValue,
    pub washing_machine_cost: DisplayValue,
    pub washing_machine_plot: EmbeddedChart,
    pub gentle_dishwasher_start: DisplayValue,
    pub gentle_dishwasher_cost: DisplayValue,
    pub gentle_dishwasher_plot: EmbeddedChart,
    pub eco_dishwasher_start: DisplayValue,
    pub eco_dishwasher_cost: DisplayValue,
    pub eco_dishwasher_plot: EmbeddedChart,
    pub intense_dishwasher_start: DisplayValue,
    pub intense_dishwasher_cost: DisplayValue,
    pub intense_dishwasher_plot: EmbeddedChart,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consumption {
    pub electricity_daily_chart: EmbeddedChart,
    pub electricity_rolling_chart: EmbeddedChart,
    pub gas_daily_chart: EmbeddedChart,
    pub gas_rolling_chart: EmbeddedChart,
    pub gas_consumption_binned_chart: EmbeddedChart,
    #[serde(rename = "gasConsumption2022BinnedChart")]
    pub gas_consumption_2022_binned_chart: EmbeddedChart,
    #[serde(rename = "gasConsumption2023BinnedChart")]
    pub gas_consumption_2023_binned_chart: EmbeddedChart,
    #[serde(rename = "gasConsumption2024BinnedChart")]
    pub gas_consumption_2024_binned_chart: EmbeddedChart,
}
