use serde::Serialize;

use crate::game::result::{AnytimeValue, RoundSummary};

/// Serializable form of a search result, with each state rendered as a label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultSnapshot {
    pub path: Vec<String>,
    pub score: f64,
    pub evaluations: u64,
}

impl ResultSnapshot {
    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Serializable form of an anytime value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnytimeSnapshot {
    pub value: Option<ResultSnapshot>,
    pub history: Vec<RoundSummary>,
    pub total_evaluations: u64,
}

impl AnytimeSnapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl<G> AnytimeValue<G> {
    /// Printable form of the stored value and round history.
    pub fn snapshot<F>(&self, label: F) -> AnytimeSnapshot
    where
        F: FnMut(&G) -> String,
    {
        AnytimeSnapshot {
            value: self.value().map(|result| result.snapshot(label)),
            history: self.history().to_vec(),
            total_evaluations: self.total_evaluations(),
        }
    }
}
