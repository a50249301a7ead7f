#![forbid(unsafe_code)]

//! `ribbons` builds plotly.js Sankey figures in Rust.
//!
//! Figures are plain data; serialize them with [`Figure::to_json`] or wrap them in a page with
//! [`Figure::to_html`].
//!
//! # Features
//!
//! - `fetch`: enable [`fetch`], a blocking loader for plotly's demo Sankey dataset

pub use ribbons_core::*;

pub mod gallery;

#[cfg(feature = "fetch")]
pub mod fetch;
