use crate::domain::{CrossingRecord, DerivedMetrics, SimulationConfig};
use crate::numerics::format_scientific;

pub const REPORT_SEPARATOR: &str = "************************************";
const NOT_EVALUATED: &str = "n/a";

/// Fixed-layout summary: timing, one row per interface, then the rates.
pub fn render_report(
    config: &SimulationConfig,
    crossings: &[CrossingRecord],
    metrics: &DerivedMetrics,
) -> String {
    let mut lines = vec![
        format!("    {:<15} {:<10}", "time steps", metrics.total_steps.trunc() as i64),
        format!("    {:<15} {:<10.2}", "time(ns)", metrics.simulated_time_ns),
    ];

    for (index, record) in crossings.iter().enumerate() {
        let Some((from, to)) = config.interface_span(index) else {
            continue;
        };
        let probability = metrics
            .growth_probabilities
            .get(index)
            .map(|value| format_scientific(*value, 2))
            .unwrap_or_else(|| NOT_EVALUATED.to_string());
        lines.push(format!(
            "    {:<4} => {:<4}     {:<4} / {:<7} {:<10}",
            from.trunc() as i64,
            to.trunc() as i64,
            record.success_count,
            record.total_count,
            probability
        ));
    }

    lines.push(REPORT_SEPARATOR.to_string());
    for (label, value) in [
        ("growth prob", metrics.overall_growth_probability),
        ("volume", metrics.bulk_volume),
        ("flux rate", metrics.flux),
        ("nucleation rate", metrics.nucleation_rate),
    ] {
        lines.push(format!("    {:<15} {:<10}", label, format_scientific(value, 2)));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
