//! brushchart-rs: headless core for a brushed stock area chart.
//!
//! This crate owns the data model, the coordinate scales, the brush-driven
//! range filtering, and the deterministic geometry of a detail/overview chart
//! pair. Drawing is left to an external rendering collaborator that consumes
//! the frame description produced here.

pub mod api;
pub mod brush;
pub mod core;
pub mod data;
pub mod error;
pub mod telemetry;

pub use api::{BrushChartConfig, BrushChartEngine};
pub use error::{ChartError, ChartResult};
