//! Fixed example figures showing the Sankey attributes plotly.js understands.
//!
//! The dataset-driven examples take a [`SankeyDataset`]; pass one loaded with
//! `fetch::load_energy_sankey_data` (feature `fetch`) or from any other [`DatasetSource`].
//!
//! The concept -> prediction figure is built from caller data; see
//! [`concept_prediction_figure`](ribbons_core::concept_prediction_figure).
//!
//! [`DatasetSource`]: ribbons_core::DatasetSource

use ribbons_core::dataset::DatasetTrace;
use ribbons_core::{
    Arrangement, Error, Figure, NodeAlign, Result, SankeyDataset, SankeyLink, SankeyNode,
    SankeyTrace, with_alpha,
};

const BASIC_LABELS: [&str; 6] = ["A1", "A2", "B1", "B2", "C1", "C2"];
const BASIC_SOURCE: [usize; 6] = [0, 1, 0, 2, 3, 3];
const BASIC_TARGET: [usize; 6] = [2, 3, 3, 4, 4, 5];
const BASIC_VALUE: [f64; 6] = [8.0, 4.0, 2.0, 8.0, 4.0, 2.0];

const POSITIONED_LABELS: [&str; 6] = ["A", "B", "C", "D", "E", "F"];
const POSITIONED_X: [f64; 6] = [0.2, 0.1, 0.5, 0.7, 0.3, 0.5];
const POSITIONED_Y: [f64; 6] = [0.7, 0.5, 0.2, 0.4, 0.2, 0.3];
const POSITIONED_SOURCE: [usize; 8] = [0, 0, 1, 2, 5, 4, 3, 5];
const POSITIONED_TARGET: [usize; 8] = [5, 3, 4, 3, 0, 2, 2, 3];
const POSITIONED_VALUE: [f64; 8] = [1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0];

const ENERGY_TITLE: &str = "Energy forecast for 2050";
const MAGENTA_RGBA: &str = "rgba(255,0,255, 0.8)";

fn basic_node() -> SankeyNode {
    SankeyNode::with_labels(BASIC_LABELS)
        .pad(15.0)
        .thickness(20.0)
        .line("black", 0.5)
        .color("blue")
}

fn basic_link() -> SankeyLink {
    SankeyLink::new(
        BASIC_SOURCE.to_vec(),
        BASIC_TARGET.to_vec(),
        BASIC_VALUE.to_vec(),
    )
}

fn basic_figure(node: SankeyNode, link: SankeyLink) -> Figure {
    Figure::new(SankeyTrace::new(node, link))
        .with_title("Basic Sankey Diagram")
        .with_font_size(10.0)
}

fn positioned_node() -> SankeyNode {
    SankeyNode::with_labels(POSITIONED_LABELS)
        .positions(POSITIONED_X.to_vec(), POSITIONED_Y.to_vec())
        .pad(10.0)
}

fn positioned_link() -> SankeyLink {
    SankeyLink::new(
        POSITIONED_SOURCE.to_vec(),
        POSITIONED_TARGET.to_vec(),
        POSITIONED_VALUE.to_vec(),
    )
}

/// Six nodes in three columns, uniformly blue.
pub fn basic_sankey() -> Figure {
    basic_figure(basic_node(), basic_link())
}

fn energy_link(trace: &DatasetTrace) -> SankeyLink {
    let link = SankeyLink::new(
        trace.link.source.clone(),
        trace.link.target.clone(),
        trace.link.value.clone(),
    );
    if trace.link.label.is_empty() {
        link
    } else {
        link.label(trace.link.label.clone())
    }
}

fn energy_node(trace: &DatasetTrace, colors: Vec<String>) -> SankeyNode {
    let node = SankeyNode::with_labels(trace.node.label.iter().cloned())
        .pad(15.0)
        .thickness(15.0)
        .line("black", 0.5);
    if colors.is_empty() {
        node
    } else {
        node.color(colors)
    }
}

/// Energy dataset with each link colored like its source node, faded to `opacity`.
pub fn colored_links_sankey(data: &SankeyDataset, opacity: f64) -> Result<Figure> {
    let trace = data.first_trace()?;
    let node_colors: Vec<String> = trace
        .node
        .color
        .iter()
        .map(|c| {
            if c == "magenta" {
                MAGENTA_RGBA.to_string()
            } else {
                c.clone()
            }
        })
        .collect();

    let link_colors = if node_colors.is_empty() {
        Vec::new()
    } else {
        trace
            .link
            .source
            .iter()
            .map(|&src| {
                node_colors
                    .get(src)
                    .map(|c| with_alpha(c, opacity))
                    .ok_or_else(|| Error::InvalidDataset {
                        message: format!("link source {src} has no node color"),
                    })
            })
            .collect::<Result<Vec<_>>>()?
    };

    let mut link = energy_link(trace);
    if !link_colors.is_empty() {
        link = link.color(link_colors);
    }
    let trace = SankeyTrace::new(energy_node(trace, node_colors), link).value_format(".0f", "TWh");
    Ok(Figure::new(trace)
        .with_title(ENERGY_TITLE)
        .with_font_size(10.0))
}

/// Energy dataset on a black background with x-unified hover.
pub fn styled_sankey(data: &SankeyDataset) -> Result<Figure> {
    let trace = data.first_trace()?;
    let figure = Figure::new(
        SankeyTrace::new(
            energy_node(trace, trace.node.color.clone()),
            energy_link(trace),
        )
        .value_format(".0f", "TWh"),
    );
    Ok(figure
        .with_hovermode("x")
        .with_title(ENERGY_TITLE)
        .with_font_size(10.0)
        .with_font_color("white")
        .with_background("black"))
}

/// The basic diagram with a distinct hover color per link.
pub fn link_hovercolor_sankey() -> Figure {
    let hovercolor = [
        "midnightblue",
        "lightskyblue",
        "gold",
        "mediumturquoise",
        "lightgreen",
        "cyan",
    ]
    .map(String::from)
    .to_vec();
    basic_figure(basic_node(), basic_link().hovercolor(hovercolor))
}

/// The basic diagram with custom hover text built from `customdata`.
pub fn hovertemplate_sankey() -> Figure {
    let node_data = BASIC_LABELS
        .iter()
        .map(|l| format!("Long name {l}"))
        .collect();
    let node = basic_node().hover(
        node_data,
        "Node %{customdata} has total value %{value}<extra></extra>",
    );
    let link_data = ["q", "r", "s", "t", "u", "v"].map(String::from).to_vec();
    let link = basic_link().hover(
        link_data,
        "Link from node %{source.customdata}<br />\
         to node%{target.customdata}<br />\
         has value %{value}<br />\
         and data %{customdata}<extra></extra>",
    );
    basic_figure(node, link)
}

/// Nodes pinned to explicit fractional positions; plotly snaps them on drag.
pub fn positioned_sankey() -> Figure {
    let trace = SankeyTrace::new(positioned_node(), positioned_link());
    Figure::new(trace.arrangement(Arrangement::Snap))
}

/// Positioned nodes, right-aligned, with arrow-headed links.
pub fn arrow_links_sankey() -> Figure {
    Figure::new(
        SankeyTrace::new(
            positioned_node().align(NodeAlign::Right),
            positioned_link().arrowlen(15.0),
        )
        .arrangement(Arrangement::Snap),
    )
}

/// A small chain laid out with the given node alignment.
pub fn alignment_sankey(align: NodeAlign) -> Figure {
    let node = SankeyNode::with_labels(["0", "1", "2", "3", "4", "5"]).align(align);
    let link = SankeyLink::new(
        vec![0, 1, 4, 2, 1],
        vec![1, 4, 5, 4, 3],
        vec![4.0, 2.0, 3.0, 1.0, 2.0],
    )
    .arrowlen(15.0);
    Figure::new(SankeyTrace::new(node, link).arrangement(Arrangement::Snap))
}
