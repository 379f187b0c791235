pub mod algorithm_factory;
pub mod algorithm_options;
pub mod base_graph;
pub mod ch;
pub mod ch_path_calculator;
pub(crate) mod constants;
pub mod edge_direction;
pub mod edge_restrictions;
pub mod error;
pub mod flexible_path_calculator;
pub mod graph;
pub mod path_calculator;
pub mod router;
pub mod routing;
pub(crate) mod stopwatch;
pub mod types;
pub mod weighting;

#[cfg(test)]
pub(crate) mod test_graph_utils;

pub use error::{PathCalculatorError, Result};
