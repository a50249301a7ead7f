#![forbid(unsafe_code)]

//! Sankey (flow diagram) descriptors and plotly.js figures, built headlessly.
//!
//! The core operation is [`build_flow_diagram`]: category labels plus a dense
//! [`FlowMatrix`] become a [`FlowDiagram`] (flat node labels, parallel link arrays, colors).
//! [`FlowDiagram::to_figure`] wraps that in a [`Figure`] whose JSON is what `Plotly.newPlot`
//! expects. Layout and drawing are left to plotly.js.

pub mod builder;
pub mod color;
pub mod dataset;
pub mod error;
pub mod export;
pub mod figure;
pub mod matrix;
pub mod options;

pub use builder::{FlowDiagram, Link, LinkArrays, build_flow_diagram, concept_prediction_figure};
pub use color::{Palette, with_alpha};
pub use dataset::{DatasetSource, SankeyDataset, StaticSource};
pub use error::{Dimension, Error, Result};
pub use export::HtmlOptions;
pub use figure::{
    Arrangement, ColorSpec, Figure, Layout, NodeAlign, SankeyLink, SankeyNode, SankeyTrace,
};
pub use matrix::FlowMatrix;
pub use options::{FlowOptions, Theme};
