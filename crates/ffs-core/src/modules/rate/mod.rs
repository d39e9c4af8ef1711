mod model;

use super::RateExecutor;
use crate::domain::{
    ComputeResult, CrossingRecord, DerivedMetrics, InputArtifact, RateRequest, SimulationConfig,
};
use crate::modules::config::{parse_parameter_deck, simulation_config};
use crate::modules::input::read_lines;
use crate::modules::joblog::extract_job_log;
use crate::modules::report::render_report;

pub use model::{
    GrowthProbabilities, TIMESTEP_TO_SECONDS, TIMESTEP_UNITS_PER_NANOSECOND, derive_metrics, flux,
    growth_probabilities,
};

pub const FFS_INPUT: &str = "ffs.input";
pub const ENGINE_INPUT: &str = "lammps.input";
pub const TRAJECTORY_INPUT: &str = "trajectory.out.txt";

#[derive(Debug, Clone, PartialEq)]
pub struct RateReport {
    pub config: SimulationConfig,
    pub crossings: Vec<CrossingRecord>,
    pub metrics: DerivedMetrics,
    pub unmatched_lines: usize,
}

impl RateReport {
    pub fn render(&self) -> String {
        render_report(&self.config, &self.crossings, &self.metrics)
    }
}

pub struct NucleationRateModule;

impl RateExecutor for NucleationRateModule {
    fn execute(&self, request: &RateRequest) -> ComputeResult<RateReport> {
        let ffs_lines = read_lines(&request.resolve(FFS_INPUT), InputArtifact::FfsInput)?;
        let engine_lines = read_lines(&request.resolve(ENGINE_INPUT), InputArtifact::EngineInput)?;
        let log_lines = read_lines(&request.resolve(&request.log_file), InputArtifact::JobLog)?;
        let structure_lines = read_lines(
            &request.resolve(&request.data_file),
            InputArtifact::StructureData,
        )?;
        let trajectory_lines =
            read_lines(&request.resolve(TRAJECTORY_INPUT), InputArtifact::Trajectory)?;
        tracing::debug!(
            structure_lines = structure_lines.len(),
            trajectory_lines = trajectory_lines.len(),
            "structure data and trajectory summary are not used by the rate calculation"
        );

        let config = simulation_config(
            &parse_parameter_deck(&ffs_lines),
            FFS_INPUT,
            &parse_parameter_deck(&engine_lines),
            ENGINE_INPUT,
        )?;
        tracing::info!(
            interfaces = config.num_interfaces,
            equilibrium_steps = config.equilibrium_steps,
            timestep = config.timestep,
            "loaded simulation parameters"
        );

        let summary = extract_job_log(&log_lines, config.num_interfaces)?;
        let metrics = derive_metrics(&config, &summary)?;
        tracing::info!(
            flux = metrics.flux,
            overall_growth_probability = metrics.overall_growth_probability,
            nucleation_rate = metrics.nucleation_rate,
            "nucleation rate computed"
        );

        Ok(RateReport {
            config,
            crossings: summary.crossings,
            metrics,
            unmatched_lines: summary.unmatched_lines,
        })
    }
}
