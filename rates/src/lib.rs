//! Base-token registry: per-asset allow/deny status and conversion coefficients.

pub mod error;
pub mod table;

pub use error::RateError;
pub use table::{BaseTokenStatus, Coefficient, RateTable};
