use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Technology {
    Wind,
    Solar,
}

impl Technology {
    pub const ALL: [Self; 2] = [Self::Wind, Self::Solar];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wind => "wind",
            Self::Solar => "solar",
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Wind),
            1 => Some(Self::Solar),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Wind => 0,
            Self::Solar => 1,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "wind" => Some(Self::Wind),
            "solar" => Some(Self::Solar),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Wind => "Onshore Wind",
            Self::Solar => "Solar PV",
        }
    }
}

/// Growth-curve family a projection was fitted with.
///
/// The serialized names match the `model` column of the projection table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelType {
    Logistic,
    Exponential,
}

impl ModelType {
    pub const ALL: [Self; 2] = [Self::Logistic, Self::Exponential];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Logistic => "Logistic",
            Self::Exponential => "Exponential",
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Logistic),
            1 => Some(Self::Exponential),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Logistic => 0,
            Self::Exponential => 1,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "logistic" => Some(Self::Logistic),
            "exponential" => Some(Self::Exponential),
            _ => None,
        }
    }

    /// Exact match against the `model` column; no trimming or case folding.
    pub fn from_column(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|model| model.as_str() == value)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Logistic => "Logistic Growth",
            Self::Exponential => "Exponential Growth",
        }
    }

    /// Stroke color of the projection line, as RGB.
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Logistic => (0xB4, 0xBA, 0x39),
            Self::Exponential => (0x9A, 0x60, 0x7F),
        }
    }
}
