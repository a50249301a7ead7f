//! plotly.js figure model for Sankey traces.
//!
//! Field names follow plotly's attribute names so `serde_json` output can be handed to
//! `Plotly.newPlot` unchanged. Unset attributes are omitted and fall back to plotly.js defaults.

use serde::Serialize;
use std::str::FromStr;

/// Either one color for every item or one color per item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Single(String),
    PerItem(Vec<String>),
}

impl From<&str> for ColorSpec {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for ColorSpec {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for ColorSpec {
    fn from(value: Vec<String>) -> Self {
        Self::PerItem(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub color: String,
    pub width: f64,
}

impl Line {
    pub fn new(color: impl Into<String>, width: f64) -> Self {
        Self {
            color: color.into(),
            width,
        }
    }
}

/// Horizontal node alignment used by plotly's layout pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeAlign {
    Left,
    Right,
    Center,
    #[default]
    Justify,
}

impl FromStr for NodeAlign {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "center" => Ok(Self::Center),
            "justify" => Ok(Self::Justify),
            other => Err(format!(
                "unknown node alignment {other:?} (expected left, right, center or justify)"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Arrangement {
    Snap,
    Perpendicular,
    Freeform,
    Fixed,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SankeyNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pad: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thickness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
    pub label: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<NodeAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customdata: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
}

impl SankeyNode {
    pub fn with_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: labels.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn pad(mut self, pad: f64) -> Self {
        self.pad = Some(pad);
        self
    }

    pub fn thickness(mut self, thickness: f64) -> Self {
        self.thickness = Some(thickness);
        self
    }

    pub fn line(mut self, color: impl Into<String>, width: f64) -> Self {
        self.line = Some(Line::new(color, width));
        self
    }

    pub fn color(mut self, color: impl Into<ColorSpec>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Fixed node positions in fractional plot coordinates.
    pub fn positions(mut self, x: Vec<f64>, y: Vec<f64>) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub fn align(mut self, align: NodeAlign) -> Self {
        self.align = Some(align);
        self
    }

    pub fn hover(mut self, customdata: Vec<String>, hovertemplate: impl Into<String>) -> Self {
        self.customdata = Some(customdata);
        self.hovertemplate = Some(hovertemplate.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SankeyLink {
    pub source: Vec<usize>,
    pub target: Vec<usize>,
    pub value: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovercolor: Option<ColorSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customdata: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrowlen: Option<f64>,
}

impl SankeyLink {
    pub fn new(source: Vec<usize>, target: Vec<usize>, value: Vec<f64>) -> Self {
        Self {
            source,
            target,
            value,
            ..Self::default()
        }
    }

    pub fn label(mut self, label: Vec<String>) -> Self {
        self.label = Some(label);
        self
    }

    pub fn color(mut self, color: impl Into<ColorSpec>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn hovercolor(mut self, color: impl Into<ColorSpec>) -> Self {
        self.hovercolor = Some(color.into());
        self
    }

    pub fn hover(mut self, customdata: Vec<String>, hovertemplate: impl Into<String>) -> Self {
        self.customdata = Some(customdata);
        self.hovertemplate = Some(hovertemplate.into());
        self
    }

    pub fn arrowlen(mut self, arrowlen: f64) -> Self {
        self.arrowlen = Some(arrowlen);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SankeyTrace {
    #[serde(rename = "type")]
    trace_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrangement: Option<Arrangement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valueformat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valuesuffix: Option<String>,
    pub node: SankeyNode,
    pub link: SankeyLink,
}

impl SankeyTrace {
    pub fn new(node: SankeyNode, link: SankeyLink) -> Self {
        Self {
            trace_type: "sankey",
            arrangement: None,
            valueformat: None,
            valuesuffix: None,
            node,
            link,
        }
    }

    pub fn arrangement(mut self, arrangement: Arrangement) -> Self {
        self.arrangement = Some(arrangement);
        self
    }

    /// d3-format string and unit suffix for hover values, e.g. `".0f"` and `"TWh"`.
    pub fn value_format(mut self, format: impl Into<String>, suffix: impl Into<String>) -> Self {
        self.valueformat = Some(format.into());
        self.valuesuffix = Some(suffix.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Font {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovermode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_bgcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_bgcolor: Option<String>,
}

/// A plotly figure holding Sankey traces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<SankeyTrace>,
    pub layout: Layout,
}

impl Figure {
    pub fn new(trace: SankeyTrace) -> Self {
        Self {
            data: vec![trace],
            layout: Layout::default(),
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.layout.title.as_ref().map(|t| t.text.as_str())
    }

    pub fn with_title(mut self, text: impl Into<String>) -> Self {
        self.layout.title = Some(Title { text: text.into() });
        self
    }

    pub fn with_font_size(mut self, size: f64) -> Self {
        self.layout.font.get_or_insert_with(Font::default).size = Some(size);
        self
    }

    pub fn with_font_color(mut self, color: impl Into<String>) -> Self {
        self.layout.font.get_or_insert_with(Font::default).color = Some(color.into());
        self
    }

    pub fn with_hovermode(mut self, mode: impl Into<String>) -> Self {
        self.layout.hovermode = Some(mode.into());
        self
    }

    /// Sets both the plot and paper background.
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        let color = color.into();
        self.layout.plot_bgcolor = Some(color.clone());
        self.layout.paper_bgcolor = Some(color);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unset_attributes_are_omitted() {
        let fig = Figure::new(SankeyTrace::new(
            SankeyNode::with_labels(["A", "B"]),
            SankeyLink::new(vec![0], vec![1], vec![3.0]),
        ));
        assert_eq!(
            serde_json::to_value(&fig).unwrap(),
            json!({
                "data": [{
                    "type": "sankey",
                    "node": {"label": ["A", "B"]},
                    "link": {"source": [0], "target": [1], "value": [3.0]},
                }],
                "layout": {},
            })
        );
    }

    #[test]
    fn color_spec_serializes_untagged() {
        assert_eq!(
            serde_json::to_value(ColorSpec::from("blue")).unwrap(),
            json!("blue")
        );
        assert_eq!(
            serde_json::to_value(ColorSpec::from(vec!["a".to_string(), "b".to_string()]))
                .unwrap(),
            json!(["a", "b"])
        );
    }

    #[test]
    fn layout_setters_share_font() {
        let fig = Figure::new(SankeyTrace::new(SankeyNode::default(), SankeyLink::default()))
            .with_title("T")
            .with_font_size(10.0)
            .with_font_color("white")
            .with_background("black")
            .with_hovermode("x");
        assert_eq!(fig.title(), Some("T"));
        assert_eq!(
            serde_json::to_value(&fig.layout).unwrap(),
            json!({
                "title": {"text": "T"},
                "font": {"size": 10.0, "color": "white"},
                "hovermode": "x",
                "plot_bgcolor": "black",
                "paper_bgcolor": "black",
            })
        );
    }

    #[test]
    fn node_align_parses_case_insensitively() {
        assert_eq!("Right".parse::<NodeAlign>(), Ok(NodeAlign::Right));
        assert_eq!(" justify ".parse::<NodeAlign>(), Ok(NodeAlign::Justify));
        assert!("middle".parse::<NodeAlign>().is_err());
    }
}
