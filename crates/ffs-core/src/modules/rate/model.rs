use crate::domain::{ComputeResult, CrossingRecord, DerivedMetrics, FfsError, SimulationConfig};
use crate::modules::joblog::JobLogSummary;
use crate::modules::steps::{total_steps, universe_steps};
use crate::modules::volume::bulk_volume;

/// Engine time units (ps) to seconds.
pub const TIMESTEP_TO_SECONDS: f64 = 1.0e-12;
/// Engine time units (ps) per nanosecond.
pub const TIMESTEP_UNITS_PER_NANOSECOND: f64 = 1.0e3;

#[derive(Debug, Clone, PartialEq)]
pub struct GrowthProbabilities {
    pub per_interface: Vec<f64>,
    pub overall: f64,
}

/// Success ratio per interface in ladder order. Evaluation stops at the
/// first interface without trials; nothing after it is looked at.
pub fn growth_probabilities(crossings: &[CrossingRecord]) -> GrowthProbabilities {
    let mut per_interface = Vec::with_capacity(crossings.len());
    let mut overall = 1.0;

    for record in crossings {
        if record.total_count == 0 {
            break;
        }
        let probability = record.success_count as f64 / record.total_count as f64;
        overall *= probability;
        per_interface.push(probability);
    }

    GrowthProbabilities {
        per_interface,
        overall,
    }
}

/// Initial crossings per second per m³.
pub fn flux(
    initial_crossings: u64,
    timestep: f64,
    total_steps: f64,
    bulk_volume: f64,
) -> ComputeResult<f64> {
    let denominator = timestep * TIMESTEP_TO_SECONDS * total_steps * bulk_volume;
    if denominator == 0.0 || !denominator.is_finite() {
        return Err(FfsError::computation(
            "RUN.FLUX_DENOMINATOR",
            format!(
                "cannot compute flux: timestep ({timestep}) x total steps ({total_steps}) x bulk volume ({bulk_volume:e}) is {denominator}"
            ),
        ));
    }

    Ok(initial_crossings as f64 / denominator)
}

pub fn derive_metrics(
    config: &SimulationConfig,
    summary: &JobLogSummary,
) -> ComputeResult<DerivedMetrics> {
    let bulk_volume = bulk_volume(&summary.volume_samples)?;

    let steps = universe_steps(&summary.universe_entries, config.first_interface_lambda());
    let total_steps = total_steps(&steps, config.equilibrium_steps);
    tracing::debug!(
        universes = steps.len(),
        total_steps,
        "aggregated post-equilibrium steps"
    );

    let flux = flux(
        summary.initial_crossings,
        config.timestep,
        total_steps,
        bulk_volume,
    )?;

    let growth = growth_probabilities(&summary.crossings);
    if growth.per_interface.len() < summary.crossings.len() {
        tracing::warn!(
            evaluated = growth.per_interface.len(),
            configured = summary.crossings.len(),
            "interface {} has no recorded trials; later interfaces are not evaluated",
            growth.per_interface.len()
        );
    }

    Ok(DerivedMetrics {
        bulk_volume,
        total_steps,
        simulated_time_ns: total_steps * config.timestep / TIMESTEP_UNITS_PER_NANOSECOND,
        flux,
        nucleation_rate: flux * growth.overall,
        overall_growth_probability: growth.overall,
        growth_probabilities: growth.per_interface,
    })
}
