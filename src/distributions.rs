//! Distributions built on top of [`Engine::next_f64`].
//!
//! Each method documents how many draws it consumes, which is what keeps a
//! stream replayable. None of them validate their arguments: an inverted
//! range, a zero width triangle or a NaN parameter gives whatever the
//! arithmetic gives.

use std::f64::consts::TAU;

use crate::Engine;

/// Default cap on retries for [`Engine::next_normal_bounded`].
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1000;

/// Half the width, in standard deviations, of the window
/// [`Engine::next_normal_bounded`] maps onto its range.
const BOUNDED_SIGMAS: f64 = 3.0;

impl Engine {
    /// An integer in [min, max), or [min, max] if `max_inclusive`, rounded
    /// with the engine's [`Rounding`](crate::Rounding). One draw.
    ///
    /// With [`Rounding::Truncate`](crate::Rounding::Truncate) (the default)
    /// and `min <= max` the excluded maximum is never returned. Other policies
    /// can reach it, e.g. `Ceil` or `Round` may return `max`.
    pub fn next_int(&mut self, min: i64, max: i64, max_inclusive: bool) -> i64 {
        let upper = if max_inclusive {
            max as f64 + 1.0
        } else {
            max as f64
        };
        let value = self.next(min as f64, upper);
        self.rounding().apply(value) as i64
    }

    /// `true` with the given probability. One draw.
    ///
    /// A probability of 0 or less is always `false`, 1 or more always `true`.
    pub fn next_boolean(&mut self, probability_true: f64) -> bool {
        self.next_f64() < probability_true
    }

    /// `1` with the given probability, otherwise `-1`. Never 0. One draw.
    pub fn next_sign(&mut self, probability_positive: f64) -> i32 {
        if self.next_boolean(probability_positive) {
            1
        } else {
            -1
        }
    }

    /// A normally distributed value using the Box-Muller transform. Two draws,
    /// plus one more for every draw that comes out as exactly 0.
    ///
    /// A non zero `skewness` turns the result into a skew normal variate:
    /// positive values lean the distribution to the right, negative to the
    /// left. The result is unbounded.
    pub fn next_normal(&mut self, mean: f64, std_dev: f64, skewness: f64) -> f64 {
        let (x, y) = self.box_muller();
        let z = if skewness == 0.0 {
            x
        } else {
            let correlation = skewness / (1.0 + skewness * skewness).sqrt();
            let k = x * correlation + y * (1.0 - correlation * correlation).sqrt();
            if x >= 0.0 {
                k
            } else {
                -k
            }
        };
        z * std_dev + mean
    }

    /// A standard normal value, `next_normal(0.0, 1.0, 0.0)`
    pub fn next_standard_normal(&mut self) -> f64 {
        self.next_normal(0.0, 1.0, 0.0)
    }

    /// [`Engine::next_normal`] rounded with the engine's
    /// [`Rounding`](crate::Rounding).
    pub fn next_normal_int(&mut self, mean: f64, std_dev: f64, skewness: f64) -> i64 {
        let value = self.next_normal(mean, std_dev, skewness);
        self.rounding().apply(value) as i64
    }

    /// A triangularly distributed value in [min, max] peaking at `mode`. One
    /// draw.
    pub fn next_triangular(&mut self, min: f64, max: f64, mode: f64) -> f64 {
        let w = self.next_f64();
        let width = max - min;
        let inflection = (mode - min) / width;
        if w < inflection {
            min + (w * width * (mode - min)).sqrt()
        } else {
            max - ((1.0 - w) * width * (max - mode)).sqrt()
        }
    }

    /// [`Engine::next_triangular`] with the mode halfway between `min` and `max`.
    pub fn next_triangular_symmetric(&mut self, min: f64, max: f64) -> f64 {
        self.next_triangular(min, max, (min + max) * 0.5)
    }

    /// A normally distributed value confined to [min, max] by rejection.
    ///
    /// A (possibly skewed) standard normal variate is mapped so that
    /// +-3 standard deviations cover the range and redrawn while it falls
    /// outside. This cuts off the tails, so it is a different distribution
    /// from [`Engine::next_normal`]. Returns `None` if no value was accepted
    /// within `max_attempts` tries, which only happens for NaN bounds or
    /// absurdly small attempt counts.
    pub fn next_normal_bounded(
        &mut self,
        min: f64,
        max: f64,
        skewness: f64,
        max_attempts: u32,
    ) -> Option<f64> {
        for _ in 0..max_attempts {
            let z = self.next_normal(0.0, 1.0, skewness);
            let unit = z / (2.0 * BOUNDED_SIGMAS) + 0.5;
            if (0.0..=1.0).contains(&unit) {
                let value = unit * (max - min) + min;
                // NaN bounds never produce an acceptable value
                if !value.is_nan() {
                    return Some(value);
                }
            }
        }
        None
    }

    /// Two independent standard normal values from two non zero uniform draws.
    #[inline]
    fn box_muller(&mut self) -> (f64, f64) {
        let u = self.next_non_zero();
        let v = self.next_non_zero();
        let r = (-2.0 * u.ln()).sqrt();
        let theta = TAU * v;
        (r * theta.cos(), r * theta.sin())
    }

    #[inline]
    fn next_non_zero(&mut self) -> f64 {
        loop {
            let value = self.next_f64();
            if value != 0.0 {
                return value;
            }
        }
    }
}
