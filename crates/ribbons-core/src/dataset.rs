//! Schema of plotly's Sankey mock documents (e.g. `sankey_energy.json`) and the seam through
//! which figure builders obtain one.

use crate::{Error, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DatasetNodes {
    #[serde(default)]
    pub label: Vec<String>,
    #[serde(default)]
    pub color: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DatasetLinks {
    pub source: Vec<usize>,
    pub target: Vec<usize>,
    pub value: Vec<f64>,
    #[serde(default)]
    pub label: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DatasetTrace {
    pub node: DatasetNodes,
    pub link: DatasetLinks,
    #[serde(default)]
    pub valueformat: Option<String>,
    #[serde(default)]
    pub valuesuffix: Option<String>,
}

/// A plotly figure document whose `data` entries are Sankey traces.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SankeyDataset {
    pub data: Vec<DatasetTrace>,
}

impl SankeyDataset {
    pub fn from_json(text: &str) -> Result<Self> {
        let dataset: SankeyDataset = serde_json::from_str(text)?;
        dataset.validate()?;
        tracing::debug!(traces = dataset.data.len(), "parsed sankey dataset");
        Ok(dataset)
    }

    /// The trace the example figures draw from.
    pub fn first_trace(&self) -> Result<&DatasetTrace> {
        self.data.first().ok_or_else(|| Error::InvalidDataset {
            message: "dataset contains no traces".to_string(),
        })
    }

    /// Checks that link arrays are parallel and every endpoint names an existing node.
    pub fn validate(&self) -> Result<()> {
        for (t, trace) in self.data.iter().enumerate() {
            let link = &trace.link;
            if link.source.len() != link.target.len() || link.source.len() != link.value.len() {
                return Err(Error::InvalidDataset {
                    message: format!(
                        "trace {t}: link arrays differ in length (source {}, target {}, value {})",
                        link.source.len(),
                        link.target.len(),
                        link.value.len()
                    ),
                });
            }
            let node_count = trace.node.label.len();
            if node_count == 0 {
                continue;
            }
            if let Some(&bad) = link
                .source
                .iter()
                .chain(link.target.iter())
                .find(|&&idx| idx >= node_count)
            {
                return Err(Error::InvalidDataset {
                    message: format!(
                        "trace {t}: link endpoint {bad} out of range ({node_count} nodes)"
                    ),
                });
            }
        }
        Ok(())
    }
}

/// Somewhere a [`SankeyDataset`] can be loaded from.
///
/// Each source reports failures in its own error type, so transport errors reach the caller
/// unchanged.
pub trait DatasetSource {
    type Error: std::error::Error + From<Error>;

    fn load(&self) -> std::result::Result<SankeyDataset, Self::Error>;
}

/// A dataset held in memory as JSON text.
#[derive(Debug, Clone)]
pub struct StaticSource {
    json: String,
}

impl StaticSource {
    pub fn new(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }
}

impl DatasetSource for StaticSource {
    type Error = Error;

    fn load(&self) -> Result<SankeyDataset> {
        SankeyDataset::from_json(&self.json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = r#"{
        "data": [{
            "type": "sankey",
            "valueformat": ".0f",
            "node": {"label": ["a", "b", "c"], "color": ["red", "magenta", "blue"]},
            "link": {"source": [0, 1], "target": [2, 2], "value": [1.5, 2], "label": ["x", "y"]}
        }],
        "layout": {"title": "ignored"}
    }"#;

    #[test]
    fn parses_and_ignores_unknown_fields() {
        let ds = StaticSource::new(SMALL).load().unwrap();
        let t = ds.first_trace().unwrap();
        assert_eq!(t.node.label, ["a", "b", "c"]);
        assert_eq!(t.link.value, [1.5, 2.0]);
        assert_eq!(t.valueformat.as_deref(), Some(".0f"));
        assert_eq!(t.valuesuffix, None);
    }

    #[test]
    fn rejects_out_of_range_endpoints() {
        let text = SMALL.replace("\"target\": [2, 2]", "\"target\": [2, 7]");
        let err = SankeyDataset::from_json(&text).unwrap_err();
        assert!(matches!(err, Error::InvalidDataset { .. }));
        assert!(err.to_string().contains("endpoint 7"));
    }

    #[test]
    fn rejects_uneven_link_arrays() {
        let text = SMALL.replace("\"value\": [1.5, 2]", "\"value\": [1.5]");
        assert!(matches!(
            SankeyDataset::from_json(&text),
            Err(Error::InvalidDataset { .. })
        ));
    }

    #[test]
    fn empty_data_has_no_first_trace() {
        let ds = SankeyDataset::from_json(r#"{"data": []}"#).unwrap();
        assert!(ds.first_trace().is_err());
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        assert!(matches!(SankeyDataset::from_json("{"), Err(Error::Json(_))));
    }
}
