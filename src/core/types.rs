use serde::{Deserialize, Serialize};

use crate::error::{FigureError, FigureResult};

/// Canvas size of a rendered figure, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(720, 720)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Closed plotting interval `[low, high]` with `low < high`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    low: f64,
    high: f64,
}

impl Domain {
    pub fn new(low: f64, high: f64) -> FigureResult<Self> {
        if !low.is_finite() || !high.is_finite() {
            return Err(FigureError::InvalidConfig(format!(
                "domain bounds must be finite, got ({low}, {high})"
            )));
        }
        if low >= high {
            return Err(FigureError::InvalidConfig(format!(
                "domain lower bound must be strictly less than upper bound, got ({low}, {high})"
            )));
        }
        Ok(Self { low, high })
    }

    /// Builds the domain spanned by two endpoints given in either order.
    pub fn spanning(a: f64, b: f64) -> FigureResult<Self> {
        Self::new(a.min(b), a.max(b))
    }

    #[must_use]
    pub fn low(self) -> f64 {
        self.low
    }

    #[must_use]
    pub fn high(self) -> f64 {
        self.high
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.high - self.low
    }

    #[must_use]
    pub fn contains(self, x: f64) -> bool {
        (self.low..=self.high).contains(&x)
    }

    #[must_use]
    pub fn contains_strictly(self, x: f64) -> bool {
        self.low < x && x < self.high
    }
}

/// A caller-supplied real function of one real variable.
///
/// Implemented for every `Fn(f64) -> f64`. Evaluation is read-only; panics
/// raised by the function unwind to the caller and non-finite results are
/// kept as-is so the rendered curve shows a gap there.
pub trait ScalarFunction {
    fn eval(&self, x: f64) -> f64;
}

impl<F> ScalarFunction for F
where
    F: Fn(f64) -> f64 + ?Sized,
{
    fn eval(&self, x: f64) -> f64 {
        self(x)
    }
}
