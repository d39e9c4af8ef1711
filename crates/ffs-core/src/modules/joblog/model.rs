use super::parser::{LineKind, classify_line};
use crate::domain::{CrossingRecord, FfsError, ParserResult, UniverseStepEntry};

/// Everything the rate calculation needs from the job log, folded in log order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JobLogSummary {
    pub universe_entries: Vec<UniverseStepEntry>,
    pub initial_crossings: u64,
    pub crossings: Vec<CrossingRecord>,
    pub volume_samples: Vec<f64>,
    pub classified_lines: usize,
    pub unmatched_lines: usize,
}

impl JobLogSummary {
    pub fn new(num_interfaces: usize) -> Self {
        Self {
            crossings: vec![CrossingRecord::default(); num_interfaces],
            ..Self::default()
        }
    }

    /// Adds one classified line; `line_number` is 1-based and only used in errors.
    pub fn absorb(&mut self, line_number: usize, kind: LineKind) -> ParserResult<()> {
        match kind {
            LineKind::Unmatched => {
                self.unmatched_lines += 1;
                return Ok(());
            }
            LineKind::UniverseStepLambda(entry) => self.universe_entries.push(entry),
            LineKind::InitialCrossing => self.initial_crossings += 1,
            LineKind::InterfaceCrossing {
                interface_index,
                reached_next,
            } => {
                let interface_count = self.crossings.len();
                let record = self.crossings.get_mut(interface_index).ok_or_else(|| {
                    FfsError::input_validation(
                        "INPUT.INTERFACE_OUT_OF_RANGE",
                        format!(
                            "job log line {} records a trial from interface {} but only {} interfaces are configured",
                            line_number, interface_index, interface_count
                        ),
                    )
                })?;
                record.record(reached_next);
            }
            LineKind::BoundingBox { low, high } => {
                self.volume_samples.push(bounding_box_volume(low, high));
            }
        }

        self.classified_lines += 1;
        Ok(())
    }
}

pub fn bounding_box_volume(low: [f64; 3], high: [f64; 3]) -> f64 {
    (high[0] - low[0]) * (high[1] - low[1]) * (high[2] - low[2])
}

pub fn extract_job_log<S: AsRef<str>>(
    lines: &[S],
    num_interfaces: usize,
) -> ParserResult<JobLogSummary> {
    let mut summary = JobLogSummary::new(num_interfaces);

    for (index, line) in lines.iter().enumerate() {
        let kind = classify_line(line.as_ref());
        tracing::trace!(line = index + 1, kind = kind.label(), "classified job log line");
        summary.absorb(index + 1, kind)?;
    }

    tracing::debug!(
        classified = summary.classified_lines,
        unmatched = summary.unmatched_lines,
        universe_entries = summary.universe_entries.len(),
        initial_crossings = summary.initial_crossings,
        volume_samples = summary.volume_samples.len(),
        "job log extracted"
    );
    Ok(summary)
}
