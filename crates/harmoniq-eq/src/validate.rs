//! Checked constructors.
//!
//! Each `try_*` method rejects parameters outside the physically meaningful
//! range and otherwise delegates to the unchecked constructor, so accepted
//! inputs produce the exact same coefficients. Nothing is clamped.

use crate::config::Cookbook;
use crate::error::FilterError;
use crate::filter::Filter;

fn reject(err: FilterError) -> FilterError {
    log::debug!("rejected filter parameters: {err}");
    err
}

fn check_pi(pi: f64) -> Result<(), FilterError> {
    if pi.is_finite() && pi > 0.0 {
        Ok(())
    } else {
        Err(reject(FilterError::InvalidPi(pi)))
    }
}

fn check_rate(sample_rate: f64, frequency: f64) -> Result<(), FilterError> {
    if !(sample_rate.is_finite() && sample_rate > 0.0) {
        return Err(reject(FilterError::InvalidSampleRate(sample_rate)));
    }
    let nyquist = sample_rate / 2.0;
    if !(frequency.is_finite() && frequency > 0.0 && frequency < nyquist) {
        return Err(reject(FilterError::InvalidFrequency { frequency, nyquist }));
    }
    Ok(())
}

fn check_q(q: f64) -> Result<(), FilterError> {
    if q.is_finite() && q > 0.0 {
        Ok(())
    } else {
        Err(reject(FilterError::InvalidQ(q)))
    }
}

fn check_width(width: f64) -> Result<(), FilterError> {
    if width.is_finite() && width > 0.0 {
        Ok(())
    } else {
        Err(reject(FilterError::InvalidWidth(width)))
    }
}

fn check_gain(gain: f64) -> Result<(), FilterError> {
    if gain.is_finite() {
        Ok(())
    } else {
        Err(reject(FilterError::InvalidGain(gain)))
    }
}

impl Cookbook {
    fn check_base(&self, sample_rate: f64, frequency: f64) -> Result<(), FilterError> {
        check_pi(self.pi())?;
        check_rate(sample_rate, frequency)
    }

    pub fn try_low_pass(
        &self,
        sample_rate: f64,
        frequency: f64,
        q: f64,
    ) -> Result<Filter, FilterError> {
        self.check_base(sample_rate, frequency)?;
        check_q(q)?;
        Ok(self.low_pass(sample_rate, frequency, q))
    }

    pub fn try_high_pass(
        &self,
        sample_rate: f64,
        frequency: f64,
        q: f64,
    ) -> Result<Filter, FilterError> {
        self.check_base(sample_rate, frequency)?;
        check_q(q)?;
        Ok(self.high_pass(sample_rate, frequency, q))
    }

    pub fn try_all_pass(
        &self,
        sample_rate: f64,
        frequency: f64,
        q: f64,
    ) -> Result<Filter, FilterError> {
        self.check_base(sample_rate, frequency)?;
        check_q(q)?;
        Ok(self.all_pass(sample_rate, frequency, q))
    }

    pub fn try_band_pass(
        &self,
        sample_rate: f64,
        frequency: f64,
        width: f64,
    ) -> Result<Filter, FilterError> {
        self.check_base(sample_rate, frequency)?;
        check_width(width)?;
        Ok(self.band_pass(sample_rate, frequency, width))
    }

    pub fn try_band_reject(
        &self,
        sample_rate: f64,
        frequency: f64,
        width: f64,
    ) -> Result<Filter, FilterError> {
        self.check_base(sample_rate, frequency)?;
        check_width(width)?;
        Ok(self.band_reject(sample_rate, frequency, width))
    }

    pub fn try_low_shelf(
        &self,
        sample_rate: f64,
        frequency: f64,
        q: f64,
        gain: f64,
    ) -> Result<Filter, FilterError> {
        self.check_base(sample_rate, frequency)?;
        check_q(q)?;
        check_gain(gain)?;
        Ok(self.low_shelf(sample_rate, frequency, q, gain))
    }

    pub fn try_high_shelf(
        &self,
        sample_rate: f64,
        frequency: f64,
        q: f64,
        gain: f64,
    ) -> Result<Filter, FilterError> {
        self.check_base(sample_rate, frequency)?;
        check_q(q)?;
        check_gain(gain)?;
        Ok(self.high_shelf(sample_rate, frequency, q, gain))
    }

    pub fn try_peaking(
        &self,
        sample_rate: f64,
        frequency: f64,
        width: f64,
        gain: f64,
    ) -> Result<Filter, FilterError> {
        self.check_base(sample_rate, frequency)?;
        check_width(width)?;
        check_gain(gain)?;
        Ok(self.peaking(sample_rate, frequency, width, gain))
    }
}
