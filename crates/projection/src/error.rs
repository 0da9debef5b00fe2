use thiserror::Error;

/// A single field of a source record that could not be normalized.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error("{field}: '{value}' is not an integer year")]
    InvalidYear { field: &'static str, value: String },

    #[error("{field}: {value} is not a whole number")]
    FractionalYear { field: &'static str, value: f64 },

    #[error("{field}: value is missing")]
    MissingYear { field: &'static str },

    #[error("model: '{value}' is not a known growth model")]
    UnknownModel { value: String },
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to decode {dataset} data: {source}")]
    Json {
        dataset: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T, E = DataError> = std::result::Result<T, E>;
