//! Department stations and their question banks
//!
//! The catalog is loaded once at startup and stays fixed for the process.
//! It is validated on load so that every station can actually be quizzed.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum answers per question (one hit-region each)
pub const MAX_ANSWERS: usize = 4;

/// Built-in catalog shipped with the game
const BUILTIN_STATIONS: &str = include_str!("../data/stations.json");

/// Durable station identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(pub u32);

impl std::fmt::Display for StationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub answers: Vec<String>,
    /// 0-based index into `answers`
    pub correct: usize,
}

/// One department as described by the data source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationDescriptor {
    pub id: StationId,
    pub title: String,
    /// Asset path of the station sprite
    pub image: String,
    /// X coordinate where the station stops and waits
    pub rest_x: f32,
    /// Top edge of the station sprite
    pub y: f32,
    pub questions: Vec<Question>,
}

/// Errors that can occur while loading the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog has no stations")]
    Empty,

    #[error("station id {0} appears more than once")]
    DuplicateId(StationId),

    #[error("station {0} has no questions")]
    NoQuestions(StationId),

    #[error("station {station}, question {question}: expected between 1 and 4 answers, found {found}")]
    AnswerCount {
        station: StationId,
        question: usize,
        found: usize,
    },

    #[error("station {station}, question {question}: correct index {index} out of range")]
    CorrectIndex {
        station: StationId,
        question: usize,
        index: usize,
    },
}

/// Ordered, validated list of stations
#[derive(Debug, Clone)]
pub struct Catalog {
    stations: Vec<StationDescriptor>,
}

impl Catalog {
    /// Validate and wrap a list of station descriptors
    pub fn new(stations: Vec<StationDescriptor>) -> Result<Self, CatalogError> {
        if stations.is_empty() {
            return Err(CatalogError::Empty);
        }

        for (i, station) in stations.iter().enumerate() {
            if stations[..i].iter().any(|s| s.id == station.id) {
                return Err(CatalogError::DuplicateId(station.id));
            }
            if station.questions.is_empty() {
                return Err(CatalogError::NoQuestions(station.id));
            }
            for (q, question) in station.questions.iter().enumerate() {
                let found = question.answers.len();
                if found == 0 || found > MAX_ANSWERS {
                    return Err(CatalogError::AnswerCount {
                        station: station.id,
                        question: q,
                        found,
                    });
                }
                if question.correct >= found {
                    return Err(CatalogError::CorrectIndex {
                        station: station.id,
                        question: q,
                        index: question.correct,
                    });
                }
            }
        }

        Ok(Self { stations })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let stations: Vec<StationDescriptor> = serde_json::from_str(json)?;
        Self::new(stations)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The catalog compiled into the binary
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_STATIONS)
    }

    pub fn stations(&self) -> &[StationDescriptor] {
        &self.stations
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn get(&self, id: StationId) -> Option<&StationDescriptor> {
        self.stations.iter().find(|s| s.id == id)
    }

    /// Total number of questions across all stations (best possible score)
    pub fn total_questions(&self) -> usize {
        self.stations.iter().map(|s| s.questions.len()).sum()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// A four-answer question whose correct answer is `correct`
    pub fn question(text: &str, correct: usize) -> Question {
        Question {
            text: text.to_string(),
            answers: (0..4).map(|i| format!("answer {i}")).collect(),
            correct,
        }
    }

    pub fn station(id: u32, questions: usize) -> StationDescriptor {
        StationDescriptor {
            id: StationId(id),
            title: format!("Station {id}"),
            image: format!("stations/{id}.png"),
            rest_x: 900.0,
            y: 200.0,
            questions: (0..questions)
                .map(|q| question(&format!("question {q}"), q % 4))
                .collect(),
        }
    }

    /// `count` stations with ids 1..=count, five questions each
    pub fn catalog(count: u32) -> Catalog {
        Catalog::new((1..=count).map(|id| station(id, 5)).collect())
            .expect("test catalog is valid")
    }
}
