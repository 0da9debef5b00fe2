//! Immutable in-memory copy of the two static tables.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::domain::Technology;
use crate::error::{DataError, Result};
use crate::records::{
    HistoricalRecord, ProjectionRecord, RawHistoricalRecord, RawProjectionRecord,
};

/// What happened while normalizing the source tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub historical_loaded: usize,
    pub projections_loaded: usize,
    pub skipped_records: usize,
    pub invalid_values: usize,
}

/// Historical actuals and precomputed projections, grouped by technology.
///
/// Records keep their source order within each group. Nothing mutates a
/// `Dataset` after construction.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    historical: HashMap<String, Vec<HistoricalRecord>>,
    projections: HashMap<String, Vec<ProjectionRecord>>,
}

impl Dataset {
    pub fn from_json(historical_json: &str, projections_json: &str) -> Result<(Self, LoadReport)> {
        let historical: Vec<RawHistoricalRecord> = serde_json::from_str(historical_json)
            .map_err(|source| DataError::Json {
                dataset: "historical",
                source,
            })?;
        let projections: Vec<RawProjectionRecord> = serde_json::from_str(projections_json)
            .map_err(|source| DataError::Json {
                dataset: "projection",
                source,
            })?;

        Ok(Self::from_records(historical, projections))
    }

    /// Normalizes raw records. Records whose keys cannot be normalized are
    /// skipped and counted rather than failing the whole load.
    pub fn from_records(
        historical: Vec<RawHistoricalRecord>,
        projections: Vec<RawProjectionRecord>,
    ) -> (Self, LoadReport) {
        let mut dataset = Self::default();
        let mut report = LoadReport::default();

        for (index, raw) in historical.into_iter().enumerate() {
            match HistoricalRecord::try_from(raw) {
                Ok(record) => {
                    if record.actual.is_invalid() {
                        tracing::warn!(index, year = record.year, value = ?record.actual, "unparsable historical value");
                        report.invalid_values += 1;
                    }
                    report.historical_loaded += 1;
                    dataset
                        .historical
                        .entry(record.technology.clone())
                        .or_default()
                        .push(record);
                }
                Err(error) => {
                    tracing::warn!(index, %error, "skipping historical record");
                    report.skipped_records += 1;
                }
            }
        }

        for (index, raw) in projections.into_iter().enumerate() {
            match ProjectionRecord::try_from(raw) {
                Ok(record) => {
                    if record.projected.is_invalid() {
                        tracing::warn!(index, year = record.year, value = ?record.projected, "unparsable projected value");
                        report.invalid_values += 1;
                    }
                    report.projections_loaded += 1;
                    dataset
                        .projections
                        .entry(record.technology.clone())
                        .or_default()
                        .push(record);
                }
                Err(error) => {
                    tracing::warn!(index, %error, "skipping projection record");
                    report.skipped_records += 1;
                }
            }
        }

        tracing::info!(
            historical = report.historical_loaded,
            projections = report.projections_loaded,
            skipped = report.skipped_records,
            invalid = report.invalid_values,
            "dataset loaded"
        );

        (dataset, report)
    }

    pub fn historical_for(&self, technology: Technology) -> &[HistoricalRecord] {
        self.historical
            .get(technology.as_str())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn projections_for(&self, technology: Technology) -> &[ProjectionRecord] {
        self.projections
            .get(technology.as_str())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Distinct training years offered for `technology`, ascending.
    pub fn training_years(&self, technology: Technology) -> Vec<i32> {
        self.projections_for(technology)
            .iter()
            .map(|record| record.training_year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ModelType;
    use crate::records::Measurement;
    use crate::selection::Selection;
    use crate::series::build_series;

    const HISTORICAL: &str = r#"[
        {"technology": "wind", "year": 2010, "Actual": "0.05"},
        {"technology": "solar", "year": "2010", "Actual": "0.01"},
        {"technology": "wind", "year": "soon", "Actual": "0.07"},
        {"technology": "wind", "year": 2011, "Actual": "oops"}
    ]"#;

    const PROJECTIONS: &str = r#"[
        {"technology": "wind", "model": "Logistic", "training_year": 2015, "year": 2020, "Projected": "0.15"},
        {"technology": "wind", "model": "Logistic", "training_year": "2010", "year": 2020, "Projected": 0.1},
        {"technology": "wind", "model": "Exponential", "training_year": 2015, "year": 2020, "Projected": "0.2"},
        {"technology": "wind", "model": "Logistic", "training_year": 2015, "year": 2021, "Projected": "0.16"},
        {"technology": "solar", "model": "Logistic", "training_year": 2018, "year": 2020, "Projected": "0.05"},
        {"technology": "solar", "model": "Quadratic", "training_year": 2012, "year": 2020, "Projected": "0.05"}
    ]"#;

    fn load() -> (Dataset, LoadReport) {
        Dataset::from_json(HISTORICAL, PROJECTIONS).unwrap()
    }

    #[test]
    fn load_report_counts_skips_and_invalid_values() {
        let (_, report) = load();
        assert_eq!(
            report,
            LoadReport {
                historical_loaded: 3,
                projections_loaded: 5,
                skipped_records: 2,
                invalid_values: 1,
            }
        );
    }

    #[test]
    fn records_are_grouped_by_technology_in_source_order() {
        let (dataset, _) = load();
        let wind = dataset.historical_for(Technology::Wind);
        assert_eq!(wind.len(), 2);
        assert_eq!(wind[0].year, 2010);
        assert_eq!(wind[1].actual, Measurement::Invalid("oops".into()));

        let projections = dataset.projections_for(Technology::Wind);
        assert_eq!(projections[2].model, ModelType::Exponential);
    }

    #[test]
    fn training_years_are_sorted_and_deduplicated() {
        let (dataset, _) = load();
        assert_eq!(dataset.training_years(Technology::Wind), vec![2010, 2015]);
    }

    #[test]
    fn training_years_are_scoped_to_technology() {
        let (dataset, _) = load();
        let solar = dataset.training_years(Technology::Solar);
        assert_eq!(solar, vec![2018]);
        assert!(!solar.contains(&2015));
    }

    #[test]
    fn unknown_technology_has_no_training_years() {
        let (dataset, _) = Dataset::from_json("[]", "[]").unwrap();
        assert!(dataset.training_years(Technology::Solar).is_empty());
        assert!(dataset.historical_for(Technology::Wind).is_empty());
    }

    #[test]
    fn malformed_json_reports_which_table() {
        let error = Dataset::from_json("[]", "{").unwrap_err();
        assert!(error.to_string().starts_with("failed to decode projection data"));
    }

    #[test]
    fn loosely_spelled_model_rows_are_skipped() {
        let projections = r#"[
            {"technology": "wind", "model": " logistic ", "training_year": 2015, "year": 2020, "Projected": "0.9"}
        ]"#;
        let (dataset, report) = Dataset::from_json("[]", projections).unwrap();
        assert_eq!(report.projections_loaded, 0);
        assert_eq!(report.skipped_records, 1);

        let series = build_series(&Selection::default(), &dataset);
        assert!(series.projected.is_empty());
    }
}
