use thiserror::Error;

use crate::kind::FilterKind;

/// Errors reported by the validating constructors and descriptor parsing.
///
/// The unchecked constructors never produce these; they pass out-of-range
/// parameters straight into the cookbook formulas.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FilterError {
    #[error("sample rate must be finite and positive, got {0}")]
    InvalidSampleRate(f64),
    #[error("frequency {frequency} Hz must lie strictly between 0 and the Nyquist frequency {nyquist} Hz")]
    InvalidFrequency { frequency: f64, nyquist: f64 },
    #[error("q must be finite and positive, got {0}")]
    InvalidQ(f64),
    #[error("bandwidth must be finite and positive, got {0} octaves")]
    InvalidWidth(f64),
    #[error("gain must be finite, got {0} dB")]
    InvalidGain(f64),
    #[error("pi override must be finite and positive, got {0}")]
    InvalidPi(f64),
    #[error("cannot build a filter of kind undefined")]
    UndefinedKind,
    #[error("unknown filter kind '{0}'")]
    UnknownKind(String),
    #[error("{kind} filter requires the '{parameter}' parameter")]
    MissingParameter {
        kind: FilterKind,
        parameter: &'static str,
    },
}
