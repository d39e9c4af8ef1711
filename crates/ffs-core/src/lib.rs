//! Forward-flux-sampling nucleation rate from an engine job log.
//!
//! The pipeline reads the FFS parameter file and the MD engine input for the
//! interface ladder and timestep, folds the job log into crossing counts,
//! universe step counts and bounding-box samples, and derives the flux,
//! growth probabilities and nucleation rate.

pub mod domain;
pub mod modules;
pub mod numerics;
