use serde::{Deserialize, Serialize};

use crate::coeffs::Coefficients;
use crate::kind::FilterKind;

/// The two most recent inputs and outputs seen by a [`Filter`].
///
/// `in1`/`out1` hold the most recent sample, `in2`/`out2` the one before it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    pub in1: f64,
    pub in2: f64,
    pub out1: f64,
    pub out2: f64,
}

/// Second-order IIR filter with fixed cookbook coefficients.
///
/// A default-constructed filter is unconfigured: its kind is
/// [`FilterKind::Undefined`] and every coefficient is zero. Feeding samples
/// through it yields NaN. Use one of the [`Cookbook`](crate::Cookbook)
/// constructors to get a configured instance.
///
/// Coefficients never change after construction. Non-finite values are not
/// guarded; once the history holds a NaN every later output is NaN, and the
/// instance has to be rebuilt.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Filter {
    kind: FilterKind,
    coeffs: Coefficients,
    history: History,
}

impl Filter {
    #[inline]
    pub(crate) fn from_coefficients(kind: FilterKind, coeffs: Coefficients) -> Self {
        Self {
            kind,
            coeffs,
            history: History::default(),
        }
    }

    /// Filters one sample and advances the history.
    #[inline]
    pub fn apply(&mut self, input: f64) -> f64 {
        let Coefficients {
            a0,
            a1,
            a2,
            b0,
            b1,
            b2,
        } = self.coeffs;
        let h = &mut self.history;

        let output = (b0 / a0) * input + (b1 / a0) * h.in1 + (b2 / a0) * h.in2
            - (a1 / a0) * h.out1
            - (a2 / a0) * h.out2;

        h.in2 = h.in1;
        h.in1 = input;
        h.out2 = h.out1;
        h.out1 = output;

        output
    }

    /// Filters `samples` in place, in order.
    ///
    /// Equivalent to calling [`Filter::apply`] on every element.
    #[inline]
    pub fn process(&mut self, samples: &mut [f64]) {
        for sample in samples.iter_mut() {
            *sample = self.apply(*sample);
        }
    }

    #[inline]
    pub fn kind(&self) -> FilterKind {
        self.kind
    }

    /// Alias of [`Filter::kind`].
    #[inline]
    pub fn name(&self) -> FilterKind {
        self.kind
    }

    /// `true` for a filter that no constructor configured.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.kind == FilterKind::Undefined
    }

    #[inline]
    pub fn coefficients(&self) -> &Coefficients {
        &self.coeffs
    }

    #[inline]
    pub fn history(&self) -> &History {
        &self.history
    }
}
