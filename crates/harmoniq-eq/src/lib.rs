//! Biquad equalizer filters based on Robert Bristow-Johnson's Audio EQ Cookbook.
//!
//! Eight shapes are available: low-pass, high-pass, all-pass, band-pass,
//! band-reject, low-shelf, high-shelf and peaking. A [`Cookbook`] turns
//! physical parameters into a configured [`Filter`], which is then fed one
//! sample at a time:
//!
//! ```
//! use harmoniq_eq::Cookbook;
//!
//! let mut left = Cookbook::default().band_pass(44_100.0, 440.0, 0.5);
//! let mut right = left.clone();
//! let (l, r) = (left.apply(0.25), right.apply(-0.25));
//! assert_eq!(l, -r);
//! ```
//!
//! A filter owns its history, so every channel needs its own instance.

pub mod coeffs;
pub mod config;
pub mod error;
pub mod filter;
pub mod kind;
pub mod params;
pub mod validate;

pub use coeffs::{
    all_pass, band_pass, band_reject, high_pass, high_shelf, low_pass, low_shelf, peaking,
    shelf_amplitude, Coefficients,
};
pub use config::{Cookbook, REFERENCE_PI};
pub use error::FilterError;
pub use filter::{Filter, History};
pub use kind::FilterKind;
pub use params::FilterParams;
