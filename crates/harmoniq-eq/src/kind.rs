use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FilterError;

/// Identifies which cookbook formula produced a [`Filter`](crate::Filter).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterKind {
    /// Zero-valued filter that no constructor produced.
    #[default]
    Undefined,
    LowPass,
    HighPass,
    AllPass,
    BandPass,
    BandReject,
    LowShelf,
    HighShelf,
    Peaking,
}

impl FilterKind {
    /// Every kind a constructor can produce.
    pub const ALL: [FilterKind; 8] = [
        FilterKind::LowPass,
        FilterKind::HighPass,
        FilterKind::AllPass,
        FilterKind::BandPass,
        FilterKind::BandReject,
        FilterKind::LowShelf,
        FilterKind::HighShelf,
        FilterKind::Peaking,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FilterKind::Undefined => "undefined",
            FilterKind::LowPass => "low-pass",
            FilterKind::HighPass => "high-pass",
            FilterKind::AllPass => "all-pass",
            FilterKind::BandPass => "band-pass",
            FilterKind::BandReject => "band-reject",
            FilterKind::LowShelf => "low-shelf",
            FilterKind::HighShelf => "high-shelf",
            FilterKind::Peaking => "peaking",
        }
    }

    /// Constant-Q shapes and the shelves take a `q` parameter.
    #[inline]
    pub fn uses_q(self) -> bool {
        matches!(
            self,
            FilterKind::LowPass
                | FilterKind::HighPass
                | FilterKind::AllPass
                | FilterKind::LowShelf
                | FilterKind::HighShelf
        )
    }

    /// Bandwidth shapes take a `width` in octaves.
    #[inline]
    pub fn uses_width(self) -> bool {
        matches!(
            self,
            FilterKind::BandPass | FilterKind::BandReject | FilterKind::Peaking
        )
    }

    #[inline]
    pub fn uses_gain(self) -> bool {
        matches!(
            self,
            FilterKind::LowShelf | FilterKind::HighShelf | FilterKind::Peaking
        )
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKind {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        let kind = match normalized.as_str() {
            "undefined" => FilterKind::Undefined,
            "low-pass" | "lowpass" | "lpf" => FilterKind::LowPass,
            "high-pass" | "highpass" | "hpf" => FilterKind::HighPass,
            "all-pass" | "allpass" => FilterKind::AllPass,
            "band-pass" | "bandpass" => FilterKind::BandPass,
            "band-reject" | "bandreject" | "notch" => FilterKind::BandReject,
            "low-shelf" | "lowshelf" => FilterKind::LowShelf,
            "high-shelf" | "highshelf" => FilterKind::HighShelf,
            "peaking" | "peak" | "bell" => FilterKind::Peaking,
            _ => return Err(FilterError::UnknownKind(s.to_owned())),
        };
        Ok(kind)
    }
}
