use synbtc_types::Address;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RateError {
    #[error("invalid coefficient: denominator must be non-zero")]
    InvalidCoefficient,

    #[error("unknown base token {0}")]
    UnknownBaseToken(Address),
}
