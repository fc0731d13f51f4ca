//! Quadrant line charts from four tab-separated data streams.
//!
//! The data file is split into four streams, adjacent streams are paired
//! into per-quadrant relations, and each relation is mapped to a screen
//! coordinate scaled against the quadrant maxima. See [`pipeline`] for the
//! full sequence.
//!
//! The binary `quadplot` draws the result over a background image, or prints
//! it as JSON.

pub mod color;
pub mod config;
pub mod error;
pub mod mapper;
pub mod model;
pub mod parser;
pub mod pipeline;
pub mod relations;
pub mod render;

// The window lives behind the `egui` feature flag.
#[cfg(feature = "egui")]
pub mod egui_app;

pub use error::{PlotError, Result};
pub use pipeline::{PipelineContext, compute_plot};
