use crate::domain::{ComputeResult, FfsError};
use crate::numerics::median;

/// Box volumes are printed in cubic angstrom.
pub const CUBIC_ANGSTROM_TO_CUBIC_METRE: f64 = 1.0e-30;

/// Median box volume in m³.
pub fn bulk_volume(samples: &[f64]) -> ComputeResult<f64> {
    let median = median(samples).ok_or_else(|| {
        FfsError::computation(
            "RUN.NO_BOUNDING_BOX",
            "job log contains no bounding-box lines to estimate the bulk volume from",
        )
    })?;

    Ok(median * CUBIC_ANGSTROM_TO_CUBIC_METRE)
}

#[cfg(test)]
mod tests {
    use super::bulk_volume;
    use crate::domain::FfsErrorCategory;
    use crate::numerics::relatively_close;

    #[test]
    fn odd_sample_count_uses_middle_value() {
        let volume = bulk_volume(&[10.0, 20.0, 30.0]).expect("volume");
        assert!(relatively_close(volume, 20.0e-30, 1.0e-12));
    }

    #[test]
    fn even_sample_count_averages_middle_pair() {
        let volume = bulk_volume(&[40.0, 10.0, 30.0, 20.0]).expect("volume");
        assert!(relatively_close(volume, 25.0e-30, 1.0e-12));
    }

    #[test]
    fn empty_samples_are_a_named_failure() {
        let error = bulk_volume(&[]).expect_err("no samples should fail");
        assert_eq!(error.category(), FfsErrorCategory::Computation);
        assert_eq!(error.placeholder(), "RUN.NO_BOUNDING_BOX");
    }
}
