//! Flow matrix -> Sankey node/link descriptor.
//!
//! Nodes are laid out as `sources ++ targets`; every link runs from a source category to a
//! target category, so for each link `source < source_count <= target < node_count`.

use crate::color::with_alpha;
use crate::error::Dimension;
use crate::figure::{Figure, SankeyLink, SankeyNode, SankeyTrace};
use crate::matrix::FlowMatrix;
use crate::options::FlowOptions;
use crate::{Error, Result};
use serde::Serialize;

/// Parallel link arrays, index `i` across all four describing link `i`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LinkArrays {
    pub source: Vec<usize>,
    pub target: Vec<usize>,
    pub value: Vec<f64>,
    pub color: Vec<String>,
}

impl LinkArrays {
    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    fn push(&mut self, source: usize, target: usize, value: f64, color: String) {
        self.source.push(source);
        self.target.push(target);
        self.value.push(value);
        self.color.push(color);
    }
}

/// Borrowed view of one link.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link<'a> {
    pub source: usize,
    pub target: usize,
    pub value: f64,
    pub color: &'a str,
}

/// Normalized node/link description of a bipartite flow diagram.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowDiagram {
    pub labels: Vec<String>,
    pub node_colors: Vec<String>,
    pub source_count: usize,
    pub links: LinkArrays,
}

impl FlowDiagram {
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn target_count(&self) -> usize {
        self.labels.len() - self.source_count
    }

    pub fn iter_links(&self) -> impl Iterator<Item = Link<'_>> + '_ {
        let l = &self.links;
        (0..l.len()).map(move |i| Link {
            source: l.source[i],
            target: l.target[i],
            value: l.value[i],
            color: &l.color[i],
        })
    }

    /// Wraps the descriptor in a single-trace Sankey figure styled by `options`.
    pub fn to_figure(&self, options: &FlowOptions) -> Figure {
        let node = SankeyNode::with_labels(self.labels.iter().cloned())
            .pad(18.0)
            .thickness(18.0)
            .line("black", 0.5)
            .color(self.node_colors.clone());
        let link = SankeyLink::new(
            self.links.source.clone(),
            self.links.target.clone(),
            self.links.value.clone(),
        )
        .color(self.links.color.clone());

        let mut fig = Figure::new(SankeyTrace::new(node, link))
            .with_title(options.effective_title())
            .with_font_size(options.font_size);
        if let Some(bg) = options.theme.background() {
            fig = fig.with_background(bg);
        }
        if let Some(color) = options.theme.font_color() {
            fig = fig.with_font_color(color);
        }
        fig
    }
}

/// Builds the node/link descriptor for flows from `sources` to `targets`.
///
/// Zero cells produce no link. Fails without a partial result when the matrix shape does not
/// match the label counts.
pub fn build_flow_diagram<S, T>(
    sources: &[S],
    targets: &[T],
    flows: &FlowMatrix,
    options: &FlowOptions,
) -> Result<FlowDiagram>
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    if flows.row_count() != sources.len() {
        return Err(Error::ShapeMismatch {
            dimension: Dimension::Rows,
            expected: sources.len(),
            found: flows.row_count(),
        });
    }
    if let Some((row, cells)) = flows
        .rows()
        .iter()
        .enumerate()
        .find(|(_, cells)| cells.len() != targets.len())
    {
        return Err(Error::ShapeMismatch {
            dimension: Dimension::Columns { row },
            expected: targets.len(),
            found: cells.len(),
        });
    }

    let palette = options.effective_palette();
    let source_colors: Vec<String> = (0..sources.len())
        .map(|i| palette.color_for(i).to_string())
        .collect();
    let link_color = |i: usize| match options.opacity {
        Some(alpha) => with_alpha(&source_colors[i], alpha),
        None => source_colors[i].clone(),
    };

    let offset = sources.len();
    let mut links = LinkArrays::default();
    for (i, row) in flows.rows().iter().enumerate() {
        for (j, &v) in row.iter().enumerate() {
            if v == 0.0 {
                continue;
            }
            links.push(i, offset + j, v, link_color(i));
        }
    }

    let labels: Vec<String> = sources
        .iter()
        .map(|s| s.as_ref().to_string())
        .chain(targets.iter().map(|t| t.as_ref().to_string()))
        .collect();
    let mut node_colors = source_colors;
    node_colors.extend(std::iter::repeat_n(
        options.target_color.clone(),
        targets.len(),
    ));

    tracing::debug!(
        sources = sources.len(),
        targets = targets.len(),
        links = links.len(),
        "built flow diagram"
    );

    Ok(FlowDiagram {
        labels,
        node_colors,
        source_count: offset,
        links,
    })
}

/// Builds the descriptor and wraps it as a left-to-right concept -> prediction figure.
pub fn concept_prediction_figure<S, T>(
    concepts: &[S],
    predictions: &[T],
    flows: &FlowMatrix,
    options: &FlowOptions,
) -> Result<Figure>
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let diagram = build_flow_diagram(concepts, predictions, flows, options)?;
    Ok(diagram.to_figure(options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Theme;
    use serde_json::json;

    fn opts() -> FlowOptions {
        FlowOptions::new().with_palette(["red", "blue"])
    }

    #[test]
    fn two_by_two_skips_zero_cells() {
        let m = FlowMatrix::from_rows([[1.0, 0.0], [0.0, 2.0]]);
        let d = build_flow_diagram(&["A", "B"], &["X", "Y"], &m, &opts()).unwrap();
        assert_eq!(d.labels, ["A", "B", "X", "Y"]);
        assert_eq!(d.links.source, [0, 1]);
        assert_eq!(d.links.target, [2, 3]);
        assert_eq!(d.links.value, [1.0, 2.0]);
        assert_eq!(d.links.color, ["red", "blue"]);
        assert_eq!(d.node_colors, ["red", "blue", "#111827", "#111827"]);
    }

    #[test]
    fn row_count_mismatch_is_reported() {
        let m = FlowMatrix::from_rows([[1.0, 0.0], [0.0, 2.0], [3.0, 3.0]]);
        let err = build_flow_diagram(&["A", "B"], &["X", "Y"], &m, &opts()).unwrap_err();
        assert!(matches!(
            err,
            Error::ShapeMismatch {
                dimension: Dimension::Rows,
                expected: 2,
                found: 3,
            }
        ));
    }

    #[test]
    fn ragged_row_is_reported_with_its_index() {
        let m = FlowMatrix::from(vec![vec![1.0, 0.0], vec![2.0]]);
        let err = build_flow_diagram(&["A", "B"], &["X", "Y"], &m, &opts()).unwrap_err();
        assert!(matches!(
            err,
            Error::ShapeMismatch {
                dimension: Dimension::Columns { row: 1 },
                expected: 2,
                found: 1,
            }
        ));
        assert!(err.to_string().contains("flow row 1"));
    }

    #[test]
    fn opacity_fades_link_colors_only() {
        let m = FlowMatrix::from_rows([[5.0]]);
        let o = FlowOptions::new().with_palette(["#ff0000"]).with_opacity(0.4);
        let d = build_flow_diagram(&["A"], &["X"], &m, &o).unwrap();
        assert_eq!(d.node_colors[0], "#ff0000");
        assert_eq!(d.links.color, ["rgba(255, 0, 0, 0.4)"]);
    }

    #[test]
    fn empty_inputs_produce_empty_diagram() {
        let m = FlowMatrix::default();
        let d = build_flow_diagram::<&str, &str>(&[], &[], &m, &opts()).unwrap();
        assert_eq!(d.node_count(), 0);
        assert!(d.links.is_empty());
    }

    #[test]
    fn figure_carries_theme_and_title() {
        let m = FlowMatrix::from_rows([[1.0, 0.0], [0.0, 2.0]]);
        let o = opts().with_theme(Theme::Dark).with_title("Flows");
        let fig = concept_prediction_figure(&["A", "B"], &["X", "Y"], &m, &o).unwrap();
        let v = fig.to_value().unwrap();
        assert_eq!(v["layout"]["title"], json!({"text": "Flows"}));
        assert_eq!(v["layout"]["paper_bgcolor"], json!("black"));
        assert_eq!(v["layout"]["font"], json!({"size": 11.0, "color": "white"}));
        assert_eq!(v["data"][0]["node"]["pad"], json!(18.0));
        assert_eq!(v["data"][0]["link"]["color"], json!(["red", "blue"]));
        assert_eq!(
            v["data"][0]["node"]["color"],
            json!(["red", "blue", "#111827", "#111827"])
        );
    }

    #[test]
    fn plotly_theme_leaves_backgrounds_unset() {
        let m = FlowMatrix::from_rows([[1.0]]);
        let o = FlowOptions::new().with_theme(Theme::Plotly);
        let fig = concept_prediction_figure(&["A"], &["X"], &m, &o).unwrap();
        assert_eq!(fig.layout.paper_bgcolor, None);
        assert_eq!(fig.title(), Some("Concept -> Predictions"));
    }
}
