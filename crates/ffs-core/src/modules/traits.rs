use crate::domain::{ComputeResult, RateRequest};
use crate::modules::rate::RateReport;

pub trait RateExecutor {
    fn execute(&self, request: &RateRequest) -> ComputeResult<RateReport>;
}
