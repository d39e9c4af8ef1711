pub mod errors;

pub use errors::{ComputeResult, FfsError, FfsErrorCategory, FfsResult, ParserResult};

use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_FILE: &str = "in.data";
pub const DEFAULT_LOG_FILE: &str = "slurm-7648355.out";

/// Role of each file the pipeline reads, used in diagnostics and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputArtifact {
    FfsInput,
    EngineInput,
    JobLog,
    StructureData,
    Trajectory,
}

impl InputArtifact {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FfsInput => "ffs input",
            Self::EngineInput => "MD engine input",
            Self::JobLog => "job log",
            Self::StructureData => "structure data",
            Self::Trajectory => "trajectory summary",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateRequest {
    pub working_dir: PathBuf,
    pub data_file: PathBuf,
    pub log_file: PathBuf,
}

impl RateRequest {
    pub fn new(
        working_dir: impl Into<PathBuf>,
        data_file: impl Into<PathBuf>,
        log_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            working_dir: working_dir.into(),
            data_file: data_file.into(),
            log_file: log_file.into(),
        }
    }

    pub fn with_defaults(working_dir: impl Into<PathBuf>) -> Self {
        Self::new(working_dir, DEFAULT_DATA_FILE, DEFAULT_LOG_FILE)
    }

    /// Absolute or working-directory-relative location of an input.
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.working_dir.join(relative)
    }
}

/// Whitespace-delimited `key value...` parameter file, as read by the FFS engine.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParameterDeck {
    pub cards: Vec<ParameterCard>,
}

impl ParameterDeck {
    /// Last card wins when a key is repeated.
    pub fn last(&self, key: &str) -> Option<&ParameterCard> {
        self.cards.iter().rev().find(|card| card.key == key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterCard {
    pub key: String,
    pub values: Vec<String>,
    pub source_line: usize,
}

impl ParameterCard {
    pub fn new(key: impl Into<String>, values: Vec<String>, source_line: usize) -> Self {
        Self {
            key: key.into(),
            values,
            source_line,
        }
    }

    /// Tokens on the source line, key included.
    pub fn token_count(&self) -> usize {
        self.values.len() + 1
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub equilibrium_steps: f64,
    /// MD timestep in engine time units (ps for LAMMPS metal units).
    pub timestep: f64,
    /// Basin boundary followed by every interface boundary, in ladder order.
    pub lambda_boundaries: Vec<f64>,
    pub num_interfaces: usize,
}

impl SimulationConfig {
    /// Boundary that marks the first interface; universes targeting it are
    /// still sampling the basin flux.
    pub fn first_interface_lambda(&self) -> f64 {
        self.lambda_boundaries[1]
    }

    /// `(from, to)` boundaries of interface `index`.
    pub fn interface_span(&self, index: usize) -> Option<(f64, f64)> {
        let from = *self.lambda_boundaries.get(index + 1)?;
        let to = *self.lambda_boundaries.get(index + 2)?;
        Some((from, to))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CrossingRecord {
    pub success_count: u64,
    pub total_count: u64,
}

impl CrossingRecord {
    pub fn record(&mut self, reached_next: bool) {
        if reached_next {
            self.success_count += 1;
        }
        self.total_count += 1;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniverseStepEntry {
    pub universe_id: u64,
    pub step_count: u64,
    pub target_lambda: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DerivedMetrics {
    pub bulk_volume: f64,
    pub total_steps: f64,
    pub simulated_time_ns: f64,
    pub flux: f64,
    pub growth_probabilities: Vec<f64>,
    pub overall_growth_probability: f64,
    pub nucleation_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::{CrossingRecord, ParameterCard, ParameterDeck, RateRequest, SimulationConfig};
    use std::path::PathBuf;

    #[test]
    fn deck_lookup_prefers_last_card() {
        let deck = ParameterDeck {
            cards: vec![
                ParameterCard::new("equilibrium", vec!["100".to_string()], 1),
                ParameterCard::new("lambda", vec!["5".to_string(), "10".to_string()], 2),
                ParameterCard::new("equilibrium", vec!["250".to_string()], 3),
            ],
        };

        let card = deck.last("equilibrium").expect("equilibrium card should exist");
        assert_eq!(card.values, vec!["250".to_string()]);
        assert_eq!(card.source_line, 3);
        assert!(deck.last("timestep").is_none());
    }

    #[test]
    fn crossing_record_keeps_success_bounded_by_total() {
        let mut record = CrossingRecord::default();
        record.record(true);
        record.record(false);
        record.record(false);

        assert_eq!(record.success_count, 1);
        assert_eq!(record.total_count, 3);
    }

    #[test]
    fn interface_span_pairs_consecutive_boundaries() {
        let config = SimulationConfig {
            equilibrium_steps: 0.0,
            timestep: 0.005,
            lambda_boundaries: vec![5.0, 10.0, 20.0, 40.0],
            num_interfaces: 2,
        };

        assert_eq!(config.first_interface_lambda(), 10.0);
        assert_eq!(config.interface_span(0), Some((10.0, 20.0)));
        assert_eq!(config.interface_span(1), Some((20.0, 40.0)));
        assert_eq!(config.interface_span(2), None);
    }

    #[test]
    fn request_resolves_inputs_against_working_dir() {
        let request = RateRequest::with_defaults("/runs/mw");
        assert_eq!(request.resolve("ffs.input"), PathBuf::from("/runs/mw/ffs.input"));
        assert_eq!(request.data_file, PathBuf::from("in.data"));
        assert_eq!(request.log_file, PathBuf::from("slurm-7648355.out"));
    }
}
