pub mod config;
pub mod input;
pub mod joblog;
pub mod rate;
pub mod report;
pub mod steps;
pub mod volume;

mod traits;

pub use rate::{NucleationRateModule, RateReport};
pub use traits::RateExecutor;
