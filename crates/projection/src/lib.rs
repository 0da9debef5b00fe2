//! Data shaping for the growth projection viewer.
//!
//! Loads the static historical and projection tables, then derives the three
//! chart series and the Y axis bound for a given [`Selection`].

pub mod axis;
pub mod dataset;
pub mod domain;
pub mod error;
pub mod records;
pub mod selection;
pub mod series;
pub mod view;

pub use dataset::{Dataset, LoadReport};
pub use domain::{ModelType, Technology};
pub use error::{DataError, FieldError};
pub use selection::Selection;
pub use series::{build_series, ChartSeries, HistoricalPoint, ProjectedPoint};
pub use view::{ChartModel, Control, PlotPoints, ProjectionView, Readout};
