use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeeError {
    #[error("{field} must not be negative (got {value})")]
    NegativeAmount { field: &'static str, value: i64 },

    #[error("Processor rate of {basis_points} bp leaves nothing to gross up against")]
    InvalidProcessorRate { basis_points: u32 },

    #[error("Arithmetic overflow")]
    MathOverflow,
}
