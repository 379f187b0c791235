use fxhash::FxHashMap;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{PathCalculatorError, Result};

pub const ALGORITHM: &str = "algorithm";
pub const MAX_VISITED_NODES: &str = "max_visited_nodes";
pub const CH_DISABLE: &str = "ch.disable";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmKind {
    Dijkstra,
    #[default]
    BidirectionalDijkstra,
}

impl AlgorithmKind {
    /// Name used in hints and configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            AlgorithmKind::Dijkstra => "dijkstra",
            AlgorithmKind::BidirectionalDijkstra => "bidirectional_dijkstra",
        }
    }
}

/// Loosely typed request hints, keyed by option name
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct OptionMap(FxHashMap<String, Value>);

impl OptionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn has(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.0.get(key).and_then(Value::as_bool).unwrap_or(default)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn get_usize(&self, key: &str) -> Option<usize> {
        self.0
            .get(key)
            .and_then(Value::as_u64)
            .and_then(|value| usize::try_from(value).ok())
    }
}

fn unbounded() -> usize {
    usize::MAX
}

/// Configuration shared by every request of a calculator.
///
/// Only `max_visited_nodes` is read by the calculators themselves, the whole
/// struct is handed to the algorithm factories.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AlgorithmOptions {
    pub algorithm: AlgorithmKind,
    #[serde(default = "unbounded")]
    pub max_visited_nodes: usize,
    pub hints: OptionMap,
}

impl Default for AlgorithmOptions {
    fn default() -> Self {
        AlgorithmOptions {
            algorithm: AlgorithmKind::default(),
            max_visited_nodes: unbounded(),
            hints: OptionMap::default(),
        }
    }
}

impl AlgorithmOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads the known options from `hints`, every hint is kept for the factories
    pub fn from_hints(hints: OptionMap) -> Result<Self> {
        let algorithm = match hints.get(ALGORITHM) {
            Some(value) => AlgorithmKind::deserialize(value).map_err(|error| {
                PathCalculatorError::InvalidOptions(format!("{ALGORITHM}: {error}"))
            })?,
            None => AlgorithmKind::default(),
        };

        let max_visited_nodes = match hints.get(MAX_VISITED_NODES) {
            Some(_) => hints.get_usize(MAX_VISITED_NODES).ok_or_else(|| {
                PathCalculatorError::InvalidOptions(format!(
                    "{MAX_VISITED_NODES} must be a non-negative integer"
                ))
            })?,
            None => unbounded(),
        };

        Ok(AlgorithmOptions {
            algorithm,
            max_visited_nodes,
            hints,
        })
    }

    // Known options already present in `hints` are kept in sync for the factories reading them

    pub fn with_algorithm(mut self, algorithm: AlgorithmKind) -> Self {
        self.algorithm = algorithm;
        if self.hints.has(ALGORITHM) {
            self.hints.insert(ALGORITHM, algorithm.as_str());
        }
        self
    }

    pub fn with_max_visited_nodes(mut self, max_visited_nodes: usize) -> Self {
        self.max_visited_nodes = max_visited_nodes;
        if self.hints.has(MAX_VISITED_NODES) {
            self.hints.insert(MAX_VISITED_NODES, max_visited_nodes);
        }
        self
    }

    pub fn with_hints(mut self, hints: OptionMap) -> Self {
        self.hints = hints;
        self
    }
}
