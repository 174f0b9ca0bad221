//! Construction-time configuration shared by every filter constructor.
//!
//! The only knob is the value used for π in the angular-frequency term.
//! Reference implementations sometimes truncate π differently, and matching
//! them bit for bit requires using the same value. A [`Cookbook`] is read
//! when a filter is built; filters keep their computed coefficients when
//! the cookbook is changed afterwards.

use serde::{Deserialize, Serialize};

/// Default value of π used by [`Cookbook::default`].
#[allow(clippy::excessive_precision)]
pub const REFERENCE_PI: f64 = 3.1415926535897932384626433;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cookbook {
    pi: f64,
}

impl Default for Cookbook {
    fn default() -> Self {
        Self { pi: REFERENCE_PI }
    }
}

impl Cookbook {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_pi(pi: f64) -> Self {
        Self { pi }
    }

    #[inline]
    pub fn pi(&self) -> f64 {
        self.pi
    }

    /// Overrides π for filters built after this call.
    #[inline]
    pub fn set_pi(&mut self, pi: f64) {
        self.pi = pi;
    }

    /// Restores [`REFERENCE_PI`].
    #[inline]
    pub fn reset_pi(&mut self) {
        self.pi = REFERENCE_PI;
    }

    #[inline]
    pub fn is_reference(&self) -> bool {
        self.pi.to_bits() == REFERENCE_PI.to_bits()
    }
}
