//! Linear and band scales that turn data values into chart units.

use std::cmp::Ordering;

/// The default number of ticks a [LinearScale::nice] domain is rounded for.
pub const DEFAULT_TICK_COUNT: u32 = 10;

/// Maps a continuous domain onto a continuous range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    /// Create a scale mapping `domain` linearly onto `range`.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Map `value` from the domain to the range.
    ///
    /// Values outside the domain are extrapolated. If the domain is a single
    /// point every value maps to the start of the range.
    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;

        if d1 == d0 {
            return r0;
        }

        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Extend the domain so both ends are multiples of a round tick step
    /// for roughly `count` ticks, e.g. `[0, 1234]` becomes `[0, 1300]`.
    pub fn nice(self, count: u32) -> Self {
        let (mut start, mut stop) = self.domain;
        let reversed = stop < start;
        if reversed {
            std::mem::swap(&mut start, &mut stop);
        }

        if stop.partial_cmp(&start) != Some(Ordering::Greater) || count == 0 {
            return self;
        }

        let mut previous_step = None;

        for _ in 0..10 {
            let step = tick_increment(start, stop, count);

            if previous_step == Some(step) {
                break;
            } else if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }

            previous_step = Some(step);
        }

        let domain = if reversed { (stop, start) } else { (start, stop) };

        Self { domain, ..self }
    }

    /// The lower and upper end of the domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }
}

/// The distance between round ticks covering `[start, stop]` with about
/// `count` ticks.
///
/// Steps below one are returned as the negated inverse, e.g. `-10` for a step
/// of `0.1`, which keeps the arithmetic exact. `stop` must be greater than
/// `start` and `count` must not be zero.
fn tick_increment(start: f64, stop: f64, count: u32) -> f64 {
    let step = (stop - start) / f64::from(count);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);

    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    if power < 0.0 {
        -(10f64.powf(-power) / factor)
    } else {
        10f64.powf(power) * factor
    }
}

/// Divides a continuous range into `count` equal bands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandScale {
    count: usize,
    range: (f64, f64),
}

impl BandScale {
    /// Create a scale of `count` bands covering `range`, with no padding.
    pub fn new(count: usize, range: (f64, f64)) -> Self {
        Self { count, range }
    }

    /// The width of each band, or zero if there are no bands.
    pub fn bandwidth(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }

        (self.range.1 - self.range.0) / self.count as f64
    }

    /// The start of band `index`.
    pub fn position(&self, index: usize) -> f64 {
        self.range.0 + index as f64 * self.bandwidth()
    }
}
