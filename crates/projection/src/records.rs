//! Source records as shipped in the static JSON files, and their normalized
//! in-memory form.
//!
//! The source tables mix numbers and numeric strings for years and values.
//! Everything is normalized here, once, so the rest of the crate only ever
//! sees `i32` years and [`Measurement`] values.

use crate::domain::ModelType;
use crate::error::FieldError;
use serde::Deserialize;

/// Marker used by the historical table for an unobserved value.
pub const MISSING_SENTINEL: &str = "NA";

/// Source values are fractions; series carry percentages.
pub const PERCENT_SCALE: f64 = 100.0;

/// A JSON scalar that may be either a number or a string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawHistoricalRecord {
    pub technology: String,
    #[serde(default)]
    pub year: Option<RawField>,
    #[serde(default, rename = "Actual")]
    pub actual: Option<RawField>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawProjectionRecord {
    pub technology: String,
    pub model: String,
    #[serde(default)]
    pub training_year: Option<RawField>,
    #[serde(default)]
    pub year: Option<RawField>,
    #[serde(default, rename = "Projected")]
    pub projected: Option<RawField>,
}

/// A decoded value cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Measurement {
    Missing,
    Value(f64),
    Invalid(String),
}

impl Measurement {
    pub fn from_raw(raw: Option<&RawField>) -> Self {
        match raw {
            None => Self::Missing,
            Some(RawField::Number(value)) if value.is_finite() => Self::Value(*value),
            Some(RawField::Number(value)) => Self::Invalid(value.to_string()),
            Some(RawField::Text(text)) => {
                let trimmed = text.trim();
                if trimmed.is_empty() || trimmed == MISSING_SENTINEL {
                    return Self::Missing;
                }
                match trimmed.parse::<f64>() {
                    Ok(value) if value.is_finite() => Self::Value(value),
                    _ => Self::Invalid(text.clone()),
                }
            }
        }
    }

    /// The value scaled to a percentage; missing and invalid cells are absent.
    pub fn as_percent(&self) -> Option<f64> {
        match self {
            Self::Value(value) => Some(value * PERCENT_SCALE),
            Self::Missing | Self::Invalid(_) => None,
        }
    }

    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoricalRecord {
    pub technology: String,
    pub year: i32,
    pub actual: Measurement,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionRecord {
    pub technology: String,
    pub model: ModelType,
    pub training_year: i32,
    pub year: i32,
    pub projected: Measurement,
}

impl TryFrom<RawHistoricalRecord> for HistoricalRecord {
    type Error = FieldError;

    fn try_from(raw: RawHistoricalRecord) -> Result<Self, Self::Error> {
        let year = normalize_year("year", raw.year.as_ref())?;
        Ok(Self {
            technology: raw.technology,
            year,
            actual: Measurement::from_raw(raw.actual.as_ref()),
        })
    }
}

impl TryFrom<RawProjectionRecord> for ProjectionRecord {
    type Error = FieldError;

    fn try_from(raw: RawProjectionRecord) -> Result<Self, Self::Error> {
        let model = ModelType::from_column(&raw.model).ok_or_else(|| FieldError::UnknownModel {
            value: raw.model.clone(),
        })?;
        let training_year = normalize_year("training_year", raw.training_year.as_ref())?;
        let year = normalize_year("year", raw.year.as_ref())?;
        Ok(Self {
            technology: raw.technology,
            model,
            training_year,
            year,
            projected: Measurement::from_raw(raw.projected.as_ref()),
        })
    }
}

/// Accepts integral numbers and integer strings; rejects everything else.
#[allow(clippy::cast_possible_truncation)]
pub fn normalize_year(field: &'static str, raw: Option<&RawField>) -> Result<i32, FieldError> {
    match raw {
        None => Err(FieldError::MissingYear { field }),
        Some(RawField::Number(value)) => {
            let in_range = *value >= f64::from(i32::MIN) && *value <= f64::from(i32::MAX);
            if value.is_finite() && value.fract() == 0.0 && in_range {
                Ok(*value as i32)
            } else {
                Err(FieldError::FractionalYear {
                    field,
                    value: *value,
                })
            }
        }
        Some(RawField::Text(text)) => {
            text.trim()
                .parse::<i32>()
                .map_err(|_| FieldError::InvalidYear {
                    field,
                    value: text.clone(),
                })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> RawField {
        RawField::Text(value.to_string())
    }

    #[test]
    fn sentinel_decodes_to_missing_not_zero() {
        let cell = Measurement::from_raw(Some(&text("NA")));
        assert_eq!(cell, Measurement::Missing);
        assert_eq!(cell.as_percent(), None);
    }

    #[test]
    fn numeric_strings_and_numbers_decode_to_values() {
        assert_eq!(
            Measurement::from_raw(Some(&text(" 0.25 "))),
            Measurement::Value(0.25)
        );
        assert_eq!(
            Measurement::from_raw(Some(&RawField::Number(0.5))),
            Measurement::Value(0.5)
        );
        assert_eq!(Measurement::from_raw(None), Measurement::Missing);
    }

    #[test]
    fn garbage_and_non_finite_text_is_invalid() {
        assert!(Measurement::from_raw(Some(&text("0.1x"))).is_invalid());
        assert!(Measurement::from_raw(Some(&text("NaN"))).is_invalid());
        assert!(Measurement::from_raw(Some(&text("inf"))).is_invalid());
        assert_eq!(Measurement::Invalid("x".into()).as_percent(), None);
    }

    #[test]
    fn years_normalize_from_numbers_and_strings() {
        assert_eq!(normalize_year("year", Some(&RawField::Number(2015.0))), Ok(2015));
        assert_eq!(normalize_year("year", Some(&text(" 2020"))), Ok(2020));
        assert!(matches!(
            normalize_year("year", Some(&RawField::Number(2015.5))),
            Err(FieldError::FractionalYear { .. })
        ));
        assert!(matches!(
            normalize_year("training_year", Some(&text("twenty"))),
            Err(FieldError::InvalidYear { field: "training_year", .. })
        ));
        assert_eq!(
            normalize_year("year", None),
            Err(FieldError::MissingYear { field: "year" })
        );
    }

    #[test]
    fn raw_records_deserialize_mixed_field_types() {
        let json = r#"[
            {"technology": "wind", "year": 2010, "Actual": "0.05"},
            {"technology": "wind", "year": "2011", "Actual": "NA"},
            {"technology": "solar", "year": 2012, "Actual": null}
        ]"#;
        let raw: Vec<RawHistoricalRecord> = serde_json::from_str(json).unwrap();
        let records: Vec<HistoricalRecord> = raw
            .into_iter()
            .map(HistoricalRecord::try_from)
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(records[0].year, 2010);
        assert_eq!(records[0].actual, Measurement::Value(0.05));
        assert_eq!(records[1].year, 2011);
        assert_eq!(records[1].actual, Measurement::Missing);
        assert_eq!(records[2].actual, Measurement::Missing);
    }

    #[test]
    fn projection_with_unknown_model_is_rejected() {
        let raw = RawProjectionRecord {
            technology: "wind".into(),
            model: "Gompertz".into(),
            training_year: Some(RawField::Number(2015.0)),
            year: Some(RawField::Number(2020.0)),
            projected: Some(text("0.1")),
        };
        assert_eq!(
            ProjectionRecord::try_from(raw),
            Err(FieldError::UnknownModel {
                value: "Gompertz".into()
            })
        );
    }

    #[test]
    fn model_column_is_matched_exactly() {
        let raw = RawProjectionRecord {
            technology: "wind".into(),
            model: " logistic ".into(),
            training_year: Some(RawField::Number(2015.0)),
            year: Some(RawField::Number(2020.0)),
            projected: Some(text("0.9")),
        };
        assert_eq!(
            ProjectionRecord::try_from(raw),
            Err(FieldError::UnknownModel {
                value: " logistic ".into()
            })
        );
    }
}
