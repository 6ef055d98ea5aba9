use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};
use tracing::trace;

use crate::core::{DataPoint, ScalarFunction};
use crate::error::{FigureError, FigureResult};

/// Endpoint rule choosing each rectangle's sample point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiemannMode {
    Left,
    Right,
    #[serde(alias = "midpoint")]
    Center,
}

impl RiemannMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
        }
    }

    #[must_use]
    pub fn sample_point(self, start: f64, end: f64) -> f64 {
        match self {
            Self::Left => start,
            Self::Right => end,
            Self::Center => (start + end) / 2.0,
        }
    }
}

impl fmt::Display for RiemannMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiemannMode {
    type Err = FigureError;

    fn from_str(input: &str) -> FigureResult<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "center" | "midpoint" => Ok(Self::Center),
            other => Err(FigureError::InvalidConfig(format!(
                "riemann mode must be one of `left`, `right`, `center`, got `{other}`"
            ))),
        }
    }
}

/// Sign class of a rectangle's height; zero counts as positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignTag {
    Positive,
    Negative,
}

impl SignTag {
    #[must_use]
    pub fn of(height: f64) -> Self {
        if height < 0.0 {
            Self::Negative
        } else {
            Self::Positive
        }
    }
}

/// One rectangle of a Riemann sum.
///
/// `start` and `end` follow the direction of integration: for `a < b`
/// `start` is the left edge, for `a > b` it is the right edge and `width`
/// is negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// 1-based position within its partition.
    pub index: usize,
    pub start: f64,
    pub end: f64,
    pub sample_x: f64,
    pub height: f64,
    pub sign: SignTag,
}

impl Rectangle {
    #[must_use]
    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    #[must_use]
    pub fn left_edge(&self) -> f64 {
        self.start.min(self.end)
    }

    #[must_use]
    pub fn right_edge(&self) -> f64 {
        self.start.max(self.end)
    }

    /// Signed contribution `height * width` to the sum.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        self.height * self.width()
    }

    /// Closed outline starting and ending at `(start, 0)`.
    #[must_use]
    pub fn corners(&self) -> SmallVec<[DataPoint; 5]> {
        smallvec![
            DataPoint::new(self.start, 0.0),
            DataPoint::new(self.end, 0.0),
            DataPoint::new(self.end, self.height),
            DataPoint::new(self.start, self.height),
            DataPoint::new(self.start, 0.0),
        ]
    }
}

/// Splits `[a, b]` into `partitions` equal pieces and samples `function`
/// on each according to `mode`.
///
/// `a > b` is accepted and walks the interval from `a` down to `b`.
pub fn build_rectangles<F>(
    function: &F,
    a: f64,
    b: f64,
    mode: RiemannMode,
    partitions: usize,
) -> FigureResult<Vec<Rectangle>>
where
    F: ScalarFunction + ?Sized,
{
    if partitions == 0 {
        return Err(FigureError::InvalidConfig(
            "partition count must be >= 1".to_owned(),
        ));
    }
    if !a.is_finite() || !b.is_finite() {
        return Err(FigureError::InvalidConfig(format!(
            "integration bounds must be finite, got a = {a}, b = {b}"
        )));
    }
    if a == b {
        return Err(FigureError::InvalidConfig(format!(
            "integration bounds must differ, got a = b = {a}"
        )));
    }

    let dx = (b - a) / partitions as f64;
    let edge = |k: usize| if k == partitions { b } else { a + k as f64 * dx };

    let rectangles: Vec<Rectangle> = (1..=partitions)
        .map(|index| {
            let start = edge(index - 1);
            let end = edge(index);
            let sample_x = mode.sample_point(start, end);
            let height = function.eval(sample_x);
            Rectangle {
                index,
                start,
                end,
                sample_x,
                height,
                sign: SignTag::of(height),
            }
        })
        .collect();

    trace!(partitions, %mode, dx, "built riemann rectangles");
    Ok(rectangles)
}

/// Sum of signed rectangle areas.
#[must_use]
pub fn riemann_sum(rectangles: &[Rectangle]) -> f64 {
    rectangles.iter().map(Rectangle::signed_area).sum()
}

/// Partition counts `1..=max_partitions` in increasing order.
pub fn partition_range(max_partitions: usize) -> FigureResult<Vec<usize>> {
    if max_partitions == 0 {
        return Err(FigureError::InvalidConfig(
            "maximum partition count must be >= 1".to_owned(),
        ));
    }
    Ok((1..=max_partitions).collect())
}
