use serde::{Deserialize, Serialize};

use crate::config::Cookbook;
use crate::error::FilterError;
use crate::filter::Filter;
use crate::kind::FilterKind;

/// Serializable description of a filter: its kind plus the options that
/// kind takes.
///
/// ```json
/// { "kind": "band-pass", "sample_rate": 44100.0, "frequency": 440.0, "width": 0.5 }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FilterParams {
    LowPass {
        sample_rate: f64,
        frequency: f64,
        q: f64,
    },
    HighPass {
        sample_rate: f64,
        frequency: f64,
        q: f64,
    },
    AllPass {
        sample_rate: f64,
        frequency: f64,
        q: f64,
    },
    BandPass {
        sample_rate: f64,
        frequency: f64,
        width: f64,
    },
    BandReject {
        sample_rate: f64,
        frequency: f64,
        width: f64,
    },
    LowShelf {
        sample_rate: f64,
        frequency: f64,
        q: f64,
        gain: f64,
    },
    HighShelf {
        sample_rate: f64,
        frequency: f64,
        q: f64,
        gain: f64,
    },
    Peaking {
        sample_rate: f64,
        frequency: f64,
        width: f64,
        gain: f64,
    },
}

fn require(
    kind: FilterKind,
    parameter: &'static str,
    value: Option<f64>,
) -> Result<f64, FilterError> {
    value.ok_or(FilterError::MissingParameter { kind, parameter })
}

impl FilterParams {
    /// Assembles a descriptor from loosely supplied options.
    ///
    /// Options the kind does not take are ignored.
    pub fn from_parts(
        kind: FilterKind,
        sample_rate: f64,
        frequency: f64,
        q: Option<f64>,
        width: Option<f64>,
        gain: Option<f64>,
    ) -> Result<Self, FilterError> {
        let params = match kind {
            FilterKind::Undefined => return Err(FilterError::UndefinedKind),
            FilterKind::LowPass => FilterParams::LowPass {
                sample_rate,
                frequency,
                q: require(kind, "q", q)?,
            },
            FilterKind::HighPass => FilterParams::HighPass {
                sample_rate,
                frequency,
                q: require(kind, "q", q)?,
            },
            FilterKind::AllPass => FilterParams::AllPass {
                sample_rate,
                frequency,
                q: require(kind, "q", q)?,
            },
            FilterKind::BandPass => FilterParams::BandPass {
                sample_rate,
                frequency,
                width: require(kind, "width", width)?,
            },
            FilterKind::BandReject => FilterParams::BandReject {
                sample_rate,
                frequency,
                width: require(kind, "width", width)?,
            },
            FilterKind::LowShelf => FilterParams::LowShelf {
                sample_rate,
                frequency,
                q: require(kind, "q", q)?,
                gain: require(kind, "gain", gain)?,
            },
            FilterKind::HighShelf => FilterParams::HighShelf {
                sample_rate,
                frequency,
                q: require(kind, "q", q)?,
                gain: require(kind, "gain", gain)?,
            },
            FilterKind::Peaking => FilterParams::Peaking {
                sample_rate,
                frequency,
                width: require(kind, "width", width)?,
                gain: require(kind, "gain", gain)?,
            },
        };
        Ok(params)
    }

    pub fn kind(&self) -> FilterKind {
        match self {
            FilterParams::LowPass { .. } => FilterKind::LowPass,
            FilterParams::HighPass { .. } => FilterKind::HighPass,
            FilterParams::AllPass { .. } => FilterKind::AllPass,
            FilterParams::BandPass { .. } => FilterKind::BandPass,
            FilterParams::BandReject { .. } => FilterKind::BandReject,
            FilterParams::LowShelf { .. } => FilterKind::LowShelf,
            FilterParams::HighShelf { .. } => FilterKind::HighShelf,
            FilterParams::Peaking { .. } => FilterKind::Peaking,
        }
    }

    pub fn sample_rate(&self) -> f64 {
        match *self {
            FilterParams::LowPass { sample_rate, .. }
            | FilterParams::HighPass { sample_rate, .. }
            | FilterParams::AllPass { sample_rate, .. }
            | FilterParams::BandPass { sample_rate, .. }
            | FilterParams::BandReject { sample_rate, .. }
            | FilterParams::LowShelf { sample_rate, .. }
            | FilterParams::HighShelf { sample_rate, .. }
            | FilterParams::Peaking { sample_rate, .. } => sample_rate,
        }
    }

    /// Builds through the unchecked constructors.
    pub fn build(&self, cookbook: &Cookbook) -> Filter {
        match *self {
            FilterParams::LowPass {
                sample_rate,
                frequency,
                q,
            } => cookbook.low_pass(sample_rate, frequency, q),
            FilterParams::HighPass {
                sample_rate,
                frequency,
                q,
            } => cookbook.high_pass(sample_rate, frequency, q),
            FilterParams::AllPass {
                sample_rate,
                frequency,
                q,
            } => cookbook.all_pass(sample_rate, frequency, q),
            FilterParams::BandPass {
                sample_rate,
                frequency,
                width,
            } => cookbook.band_pass(sample_rate, frequency, width),
            FilterParams::BandReject {
                sample_rate,
                frequency,
                width,
            } => cookbook.band_reject(sample_rate, frequency, width),
            FilterParams::LowShelf {
                sample_rate,
                frequency,
                q,
                gain,
            } => cookbook.low_shelf(sample_rate, frequency, q, gain),
            FilterParams::HighShelf {
                sample_rate,
                frequency,
                q,
                gain,
            } => cookbook.high_shelf(sample_rate, frequency, q, gain),
            FilterParams::Peaking {
                sample_rate,
                frequency,
                width,
                gain,
            } => cookbook.peaking(sample_rate, frequency, width, gain),
        }
    }

    /// Builds through the checked `try_*` constructors.
    pub fn try_build(&self, cookbook: &Cookbook) -> Result<Filter, FilterError> {
        match *self {
            FilterParams::LowPass {
                sample_rate,
                frequency,
                q,
            } => cookbook.try_low_pass(sample_rate, frequency, q),
            FilterParams::HighPass {
                sample_rate,
                frequency,
                q,
            } => cookbook.try_high_pass(sample_rate, frequency, q),
            FilterParams::AllPass {
                sample_rate,
                frequency,
                q,
            } => cookbook.try_all_pass(sample_rate, frequency, q),
            FilterParams::BandPass {
                sample_rate,
                frequency,
                width,
            } => cookbook.try_band_pass(sample_rate, frequency, width),
            FilterParams::BandReject {
                sample_rate,
                frequency,
                width,
            } => cookbook.try_band_reject(sample_rate, frequency, width),
            FilterParams::LowShelf {
                sample_rate,
                frequency,
                q,
                gain,
            } => cookbook.try_low_shelf(sample_rate, frequency, q, gain),
            FilterParams::HighShelf {
                sample_rate,
                frequency,
                q,
                gain,
            } => cookbook.try_high_shelf(sample_rate, frequency, q, gain),
            FilterParams::Peaking {
                sample_rate,
                frequency,
                width,
                gain,
            } => cookbook.try_peaking(sample_rate, frequency, width, gain),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_tagged_json() {
        let params: FilterParams = serde_json::from_str(
            r#"{ "kind": "band-pass", "sample_rate": 44100.0, "frequency": 440.0, "width": 0.5 }"#,
        )
        .unwrap();
        assert_eq!(
            params,
            FilterParams::BandPass {
                sample_rate: 44_100.0,
                frequency: 440.0,
                width: 0.5
            }
        );
        assert_eq!(params.kind(), FilterKind::BandPass);
    }

    #[test]
    fn build_dispatches_to_matching_kind() {
        let cookbook = Cookbook::default();
        for kind in FilterKind::ALL {
            let params =
                FilterParams::from_parts(kind, 48_000.0, 1_000.0, Some(0.707), Some(1.0), Some(3.0))
                    .unwrap();
            assert_eq!(params.kind(), kind);
            assert_eq!(params.sample_rate(), 48_000.0);
            let filter = params.build(&cookbook);
            assert_eq!(filter.kind(), kind);
            assert_eq!(params.try_build(&cookbook).unwrap(), filter);
        }
    }

    #[test]
    fn from_parts_reports_missing_options() {
        assert_eq!(
            FilterParams::from_parts(FilterKind::Peaking, 48_000.0, 1_000.0, None, Some(1.0), None),
            Err(FilterError::MissingParameter {
                kind: FilterKind::Peaking,
                parameter: "gain"
            })
        );
        assert_eq!(
            FilterParams::from_parts(FilterKind::LowPass, 48_000.0, 1_000.0, None, Some(1.0), None),
            Err(FilterError::MissingParameter {
                kind: FilterKind::LowPass,
                parameter: "q"
            })
        );
        assert_eq!(
            FilterParams::from_parts(FilterKind::Undefined, 48_000.0, 1_000.0, None, None, None),
            Err(FilterError::UndefinedKind)
        );
    }

    #[test]
    fn try_build_surfaces_validation_errors() {
        let params = FilterParams::HighPass {
            sample_rate: 48_000.0,
            frequency: 1_000.0,
            q: 0.0,
        };
        assert_eq!(params.try_build(&Cookbook::default()), Err(FilterError::InvalidQ(0.0)));
        assert!(!params.build(&Cookbook::default()).coefficients().a0.is_finite());
    }
}
