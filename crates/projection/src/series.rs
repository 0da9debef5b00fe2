//! Joins the historical and projection tables into chart-ready series.

use serde::Serialize;

use crate::dataset::Dataset;
use crate::selection::Selection;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistoricalPoint {
    pub year: i32,
    pub actual: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectedPoint {
    pub year: i32,
    pub projected: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartSeries {
    pub historical: Vec<HistoricalPoint>,
    pub out_of_sample: Vec<HistoricalPoint>,
    pub projected: Vec<ProjectedPoint>,
}

impl ChartSeries {
    pub fn is_empty(&self) -> bool {
        self.historical.is_empty() && self.out_of_sample.is_empty() && self.projected.is_empty()
    }

    /// Every present value across the three series.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.historical
            .iter()
            .chain(&self.out_of_sample)
            .filter_map(|point| point.actual)
            .chain(self.projected.iter().filter_map(|point| point.projected))
    }
}

/// Builds the three series for `selection`.
///
/// Historical records split at the training year: `year <= train_year` is
/// in-sample, later years are out-of-sample. Without a training year all
/// records are in-sample and no projection matches.
pub fn build_series(selection: &Selection, dataset: &Dataset) -> ChartSeries {
    let mut series = ChartSeries::default();

    for record in dataset.historical_for(selection.technology) {
        let point = HistoricalPoint {
            year: record.year,
            actual: record.actual.as_percent(),
        };
        match selection.train_year {
            Some(cutoff) if record.year > cutoff => series.out_of_sample.push(point),
            _ => series.historical.push(point),
        }
    }

    if let Some(train_year) = selection.train_year {
        series.projected = dataset
            .projections_for(selection.technology)
            .iter()
            .filter(|record| record.model == selection.model && record.training_year == train_year)
            .map(|record| ProjectedPoint {
                year: record.year,
                projected: record.projected.as_percent(),
            })
            .collect();
    }

    tracing::debug!(
        technology = selection.technology.as_str(),
        model = selection.model.as_str(),
        train_year = ?selection.train_year,
        historical = series.historical.len(),
        out_of_sample = series.out_of_sample.len(),
        projected = series.projected.len(),
        "series rebuilt"
    );

    series
}
