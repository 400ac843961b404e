use thiserror::Error;

/// Snapshot contents that break the caller's side of the contract.
///
/// `evaluate` never checks these; callers run `EvaluationInput::validate`
/// before handing a snapshot over.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("desired temperature range is inverted: low {low} > high {high}")]
    InvertedTemperatureRange { low: f64, high: f64 },

    #[error("energy usage limit must not be negative, got {0}")]
    NegativeUsageLimit(f64),

    #[error("{0} must be a finite number")]
    NonFinite(&'static str),

    #[error("device name must not be empty")]
    EmptyDeviceName,
}
