mod parser;

use crate::domain::{FfsError, ParameterDeck, ParserResult, SimulationConfig};

pub use parser::parse_parameter_deck;

pub(crate) const EQUILIBRIUM_KEY: &str = "equilibrium";
pub(crate) const LAMBDA_KEY: &str = "lambda";
pub(crate) const TIMESTEP_KEY: &str = "timestep";

/// Basin boundary plus the first interface boundary.
const MIN_LAMBDA_BOUNDARIES: usize = 2;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParameterError {
    #[error("missing parameter \"{key}\" in {source_name}")]
    Missing {
        key: &'static str,
        source_name: String,
    },
    #[error("parameter \"{key}\" in {source_name} at line {line} has no value")]
    Empty {
        key: &'static str,
        source_name: String,
        line: usize,
    },
    #[error("invalid value '{value}' for parameter \"{key}\" in {source_name} at line {line}")]
    Invalid {
        key: &'static str,
        source_name: String,
        line: usize,
        value: String,
    },
    #[error(
        "parameter \"{key}\" in {source_name} at line {line} needs at least {required} values, found {found}"
    )]
    TooFew {
        key: &'static str,
        source_name: String,
        line: usize,
        required: usize,
        found: usize,
    },
}

impl From<ParameterError> for FfsError {
    fn from(error: ParameterError) -> Self {
        let placeholder = match error {
            ParameterError::Missing { .. } => "INPUT.MISSING_PARAMETER",
            ParameterError::Empty { .. }
            | ParameterError::Invalid { .. }
            | ParameterError::TooFew { .. } => "INPUT.INVALID_PARAMETER",
        };
        FfsError::input_validation(placeholder, error.to_string())
    }
}

/// Builds the run configuration from the FFS deck (`equilibrium`, `lambda`)
/// and the MD engine deck (`timestep`).
pub fn simulation_config(
    ffs_deck: &ParameterDeck,
    ffs_source: &str,
    engine_deck: &ParameterDeck,
    engine_source: &str,
) -> ParserResult<SimulationConfig> {
    let equilibrium_steps = first_f64(ffs_deck, EQUILIBRIUM_KEY, ffs_source)?;
    let timestep = first_f64(engine_deck, TIMESTEP_KEY, engine_source)?;

    let lambda_card = ffs_deck
        .last(LAMBDA_KEY)
        .ok_or_else(|| ParameterError::Missing {
            key: LAMBDA_KEY,
            source_name: ffs_source.to_string(),
        })?;
    if lambda_card.values.len() < MIN_LAMBDA_BOUNDARIES {
        return Err(ParameterError::TooFew {
            key: LAMBDA_KEY,
            source_name: ffs_source.to_string(),
            line: lambda_card.source_line,
            required: MIN_LAMBDA_BOUNDARIES,
            found: lambda_card.values.len(),
        }
        .into());
    }

    let lambda_boundaries = lambda_card
        .values
        .iter()
        .map(|value| {
            parse_f64(value).ok_or_else(|| ParameterError::Invalid {
                key: LAMBDA_KEY,
                source_name: ffs_source.to_string(),
                line: lambda_card.source_line,
                value: value.clone(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    let num_interfaces = lambda_card.token_count() - 3;

    if !lambda_boundaries.windows(2).all(|pair| pair[0] < pair[1]) {
        tracing::warn!(
            line = lambda_card.source_line,
            "lambda boundaries in {ffs_source} are not strictly increasing"
        );
    }

    Ok(SimulationConfig {
        equilibrium_steps,
        timestep,
        lambda_boundaries,
        num_interfaces,
    })
}

fn first_f64(deck: &ParameterDeck, key: &'static str, source_name: &str) -> ParserResult<f64> {
    let card = deck.last(key).ok_or_else(|| ParameterError::Missing {
        key,
        source_name: source_name.to_string(),
    })?;
    let value = card.values.first().ok_or_else(|| ParameterError::Empty {
        key,
        source_name: source_name.to_string(),
        line: card.source_line,
    })?;

    parse_f64(value).ok_or_else(|| {
        ParameterError::Invalid {
            key,
            source_name: source_name.to_string(),
            line: card.source_line,
            value: value.clone(),
        }
        .into()
    })
}

fn parse_f64(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|value| value.is_finite())
}
