use crate::domain::UniverseStepEntry;
use crate::numerics::stable_sum;
use std::collections::BTreeMap;

/// Latest step count per universe among status lines that still target
/// `first_interface_lambda`. Later lines overwrite earlier ones.
pub fn universe_steps(
    entries: &[UniverseStepEntry],
    first_interface_lambda: f64,
) -> BTreeMap<u64, u64> {
    let mut steps = BTreeMap::new();
    for entry in entries
        .iter()
        .filter(|entry| entry.target_lambda == first_interface_lambda)
    {
        steps.insert(entry.universe_id, entry.step_count);
    }
    steps
}

/// Post-equilibration steps summed over universes; a universe still inside
/// equilibration contributes nothing.
pub fn total_steps(steps: &BTreeMap<u64, u64>, equilibrium_steps: f64) -> f64 {
    let contributions = steps
        .values()
        .map(|&step| step as f64)
        .map(|step| {
            if step > equilibrium_steps {
                step - equilibrium_steps
            } else {
                0.0
            }
        })
        .collect::<Vec<_>>();
    stable_sum(&contributions)
}
