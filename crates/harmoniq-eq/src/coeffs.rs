//! Biquad coefficients from Robert Bristow-Johnson's Audio EQ Cookbook.
//!
//! Every constructor is a pure function of its arguments and the
//! [`Cookbook`] it is called on. Parameters are not validated: a
//! non-positive `q` or `width`, or a frequency of 0 or Nyquist, yields
//! non-finite coefficients. Use the `try_*` variants in
//! [`validate`](crate::validate) to reject those up front.
//!
//! Coefficients are stored verbatim; the division by `a0` happens in
//! [`Filter::apply`].

use serde::{Deserialize, Serialize};

use crate::config::Cookbook;
use crate::filter::Filter;
use crate::kind::FilterKind;

/// Raw transfer function coefficients, not normalized by `a0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    pub a0: f64,
    pub a1: f64,
    pub a2: f64,
    pub b0: f64,
    pub b1: f64,
    pub b2: f64,
}

/// Angular frequency terms shared by all shapes.
#[derive(Clone, Copy, Debug)]
struct Omega {
    w0: f64,
    cos: f64,
    sin: f64,
}

impl Omega {
    #[inline]
    fn new(pi: f64, sample_rate: f64, frequency: f64) -> Self {
        let w0 = 2.0 * pi * frequency / sample_rate;
        Self {
            w0,
            cos: w0.cos(),
            sin: w0.sin(),
        }
    }

    #[inline]
    fn alpha_q(&self, q: f64) -> f64 {
        self.sin / (2.0 * q)
    }

    /// Divides by `sin(w0)`, so it is infinite or NaN at 0 Hz and Nyquist.
    #[inline]
    fn alpha_width(&self, width: f64) -> f64 {
        self.sin * (std::f64::consts::LN_2 / 2.0 * width * self.w0 / self.sin).sinh()
    }
}

/// Linear amplitude `A = 10^(gain/40)` used by the shelves and peaking EQ.
#[inline]
pub fn shelf_amplitude(gain_db: f64) -> f64 {
    10.0f64.powf(gain_db / 40.0)
}

impl Cookbook {
    #[inline]
    fn omega(&self, sample_rate: f64, frequency: f64) -> Omega {
        Omega::new(self.pi(), sample_rate, frequency)
    }

    fn build(&self, kind: FilterKind, coeffs: Coefficients) -> Filter {
        log::trace!("built {kind} filter: {coeffs:?} (pi = {})", self.pi());
        Filter::from_coefficients(kind, coeffs)
    }

    /// Second-order low-pass with cutoff `frequency` Hz and resonance `q`.
    pub fn low_pass(&self, sample_rate: f64, frequency: f64, q: f64) -> Filter {
        let w = self.omega(sample_rate, frequency);
        let alpha = w.alpha_q(q);
        self.build(
            FilterKind::LowPass,
            Coefficients {
                a0: 1.0 + alpha,
                a1: -2.0 * w.cos,
                a2: 1.0 - alpha,
                b0: (1.0 - w.cos) / 2.0,
                b1: 1.0 - w.cos,
                b2: (1.0 - w.cos) / 2.0,
            },
        )
    }

    /// Second-order high-pass with cutoff `frequency` Hz and resonance `q`.
    pub fn high_pass(&self, sample_rate: f64, frequency: f64, q: f64) -> Filter {
        let w = self.omega(sample_rate, frequency);
        let alpha = w.alpha_q(q);
        self.build(
            FilterKind::HighPass,
            Coefficients {
                a0: 1.0 + alpha,
                a1: -2.0 * w.cos,
                a2: 1.0 - alpha,
                b0: (1.0 + w.cos) / 2.0,
                b1: -(1.0 + w.cos),
                b2: (1.0 + w.cos) / 2.0,
            },
        )
    }

    /// All-pass centred at `frequency` Hz. Numerator mirrors the denominator.
    pub fn all_pass(&self, sample_rate: f64, frequency: f64, q: f64) -> Filter {
        let w = self.omega(sample_rate, frequency);
        let alpha = w.alpha_q(q);
        self.build(
            FilterKind::AllPass,
            Coefficients {
                a0: 1.0 + alpha,
                a1: -2.0 * w.cos,
                a2: 1.0 - alpha,
                b0: 1.0 - alpha,
                b1: -2.0 * w.cos,
                b2: 1.0 + alpha,
            },
        )
    }

    /// Constant 0 dB peak gain band-pass, `width` in octaves.
    pub fn band_pass(&self, sample_rate: f64, frequency: f64, width: f64) -> Filter {
        let w = self.omega(sample_rate, frequency);
        let alpha = w.alpha_width(width);
        self.build(
            FilterKind::BandPass,
            Coefficients {
                a0: 1.0 + alpha,
                a1: -2.0 * w.cos,
                a2: 1.0 - alpha,
                b0: alpha,
                b1: 0.0,
                b2: -alpha,
            },
        )
    }

    /// Notch at `frequency` Hz, `width` in octaves.
    pub fn band_reject(&self, sample_rate: f64, frequency: f64, width: f64) -> Filter {
        let w = self.omega(sample_rate, frequency);
        let alpha = w.alpha_width(width);
        self.build(
            FilterKind::BandReject,
            Coefficients {
                a0: 1.0 + alpha,
                a1: -2.0 * w.cos,
                a2: 1.0 - alpha,
                b0: 1.0,
                b1: -2.0 * w.cos,
                b2: 1.0,
            },
        )
    }

    /// Boosts or cuts everything below `frequency` Hz by `gain` dB.
    pub fn low_shelf(&self, sample_rate: f64, frequency: f64, q: f64, gain: f64) -> Filter {
        let w = self.omega(sample_rate, frequency);
        let a = shelf_amplitude(gain);
        let beta = a.sqrt() / q;
        self.build(
            FilterKind::LowShelf,
            Coefficients {
                a0: (a + 1.0) + (a - 1.0) * w.cos + beta * w.sin,
                a1: -2.0 * ((a - 1.0) + (a + 1.0) * w.cos),
                a2: (a + 1.0) + (a - 1.0) * w.cos - beta * w.sin,
                b0: a * ((a + 1.0) - (a - 1.0) * w.cos + beta * w.sin),
                b1: 2.0 * a * ((a - 1.0) - (a + 1.0) * w.cos),
                b2: a * ((a + 1.0) - (a - 1.0) * w.cos - beta * w.sin),
            },
        )
    }

    /// Boosts or cuts everything above `frequency` Hz by `gain` dB.
    pub fn high_shelf(&self, sample_rate: f64, frequency: f64, q: f64, gain: f64) -> Filter {
        let w = self.omega(sample_rate, frequency);
        let a = shelf_amplitude(gain);
        let beta = a.sqrt() / q;
        self.build(
            FilterKind::HighShelf,
            Coefficients {
                a0: (a + 1.0) - (a - 1.0) * w.cos + beta * w.sin,
                a1: 2.0 * ((a - 1.0) - (a + 1.0) * w.cos),
                a2: (a + 1.0) - (a - 1.0) * w.cos - beta * w.sin,
                b0: a * ((a + 1.0) + (a - 1.0) * w.cos + beta * w.sin),
                b1: -2.0 * a * ((a - 1.0) + (a + 1.0) * w.cos),
                b2: a * ((a + 1.0) + (a - 1.0) * w.cos - beta * w.sin),
            },
        )
    }

    /// Bell around `frequency` Hz, `width` in octaves, `gain` dB at the centre.
    pub fn peaking(&self, sample_rate: f64, frequency: f64, width: f64, gain: f64) -> Filter {
        let w = self.omega(sample_rate, frequency);
        let alpha = w.alpha_width(width);
        let a = shelf_amplitude(gain);
        self.build(
            FilterKind::Peaking,
            Coefficients {
                a0: 1.0 + alpha / a,
                a1: -2.0 * w.cos,
                a2: 1.0 - alpha / a,
                b0: 1.0 + alpha * a,
                b1: -2.0 * w.cos,
                b2: 1.0 - alpha * a,
            },
        )
    }
}

/// [`Cookbook::low_pass`] with the reference π.
pub fn low_pass(sample_rate: f64, frequency: f64, q: f64) -> Filter {
    Cookbook::default().low_pass(sample_rate, frequency, q)
}

/// [`Cookbook::high_pass`] with the reference π.
pub fn high_pass(sample_rate: f64, frequency: f64, q: f64) -> Filter {
    Cookbook::default().high_pass(sample_rate, frequency, q)
}

/// [`Cookbook::all_pass`] with the reference π.
pub fn all_pass(sample_rate: f64, frequency: f64, q: f64) -> Filter {
    Cookbook::default().all_pass(sample_rate, frequency, q)
}

/// [`Cookbook::band_pass`] with the reference π.
pub fn band_pass(sample_rate: f64, frequency: f64, width: f64) -> Filter {
    Cookbook::default().band_pass(sample_rate, frequency, width)
}

/// [`Cookbook::band_reject`] with the reference π.
pub fn band_reject(sample_rate: f64, frequency: f64, width: f64) -> Filter {
    Cookbook::default().band_reject(sample_rate, frequency, width)
}

/// [`Cookbook::low_shelf`] with the reference π.
pub fn low_shelf(sample_rate: f64, frequency: f64, q: f64, gain: f64) -> Filter {
    Cookbook::default().low_shelf(sample_rate, frequency, q, gain)
}

/// [`Cookbook::high_shelf`] with the reference π.
pub fn high_shelf(sample_rate: f64, frequency: f64, q: f64, gain: f64) -> Filter {
    Cookbook::default().high_shelf(sample_rate, frequency, q, gain)
}

/// [`Cookbook::peaking`] with the reference π.
pub fn peaking(sample_rate: f64, frequency: f64, width: f64, gain: f64) -> Filter {
    Cookbook::default().peaking(sample_rate, frequency, width, gain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_gain_shelf_amplitude_is_unity() {
        assert_eq!(shelf_amplitude(0.0), 1.0);
        assert!((shelf_amplitude(40.0) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn zero_gain_peaking_is_transparent() {
        let filter = peaking(48_000.0, 2_000.0, 1.0, 0.0);
        let c = filter.coefficients();
        assert_eq!(c.a0, c.b0);
        assert_eq!(c.a1, c.b1);
        assert_eq!(c.a2, c.b2);
    }

    #[test]
    fn pi_override_changes_only_new_filters() {
        let mut cookbook = Cookbook::default();
        let reference = cookbook.low_pass(44_100.0, 1_000.0, 0.707);
        cookbook.set_pi(3.0);
        let truncated = cookbook.low_pass(44_100.0, 1_000.0, 0.707);
        assert_ne!(reference.coefficients(), truncated.coefficients());
        assert_eq!(reference, low_pass(44_100.0, 1_000.0, 0.707));
        cookbook.reset_pi();
        assert_eq!(cookbook.low_pass(44_100.0, 1_000.0, 0.707), reference);
    }

    #[test]
    fn band_alpha_is_non_finite_at_dc() {
        let w = Omega::new(std::f64::consts::PI, 44_100.0, 0.0);
        assert!(!w.alpha_width(1.0).is_finite());
    }
}
