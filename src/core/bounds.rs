use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{FigureError, FigureResult};

/// Upper bound on generated tick marks per axis; `dtick` is doubled until it fits.
pub const MAX_TICKS_PER_AXIS: usize = 64;

/// Largest axis end; keeps ranges finite and readable back from JSON.
pub const AXIS_LIMIT: f64 = 1.7e308;

/// Visible range and tick layout of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub start: f64,
    pub end: f64,
    pub tick0: f64,
    pub dtick: f64,
}

impl AxisRange {
    /// Pads `[low, high]` by `margin_ratio` of its width on both sides.
    pub fn padded(low: f64, high: f64, margin_ratio: f64, dtick: f64) -> FigureResult<Self> {
        if !low.is_finite() || !high.is_finite() || low > high {
            return Err(FigureError::InvalidData(format!(
                "axis extent must be finite and ordered, got ({low}, {high})"
            )));
        }
        if !margin_ratio.is_finite() || margin_ratio < 0.0 {
            return Err(FigureError::InvalidConfig(format!(
                "margin ratio must be finite and >= 0, got {margin_ratio}"
            )));
        }
        if !dtick.is_finite() || dtick <= 0.0 {
            return Err(FigureError::InvalidConfig(format!(
                "tick spacing must be finite and > 0, got {dtick}"
            )));
        }

        let (low, high) = if low == high {
            (low - 0.5, high + 0.5)
        } else {
            (low, high)
        };
        // Halved so extents wider than `f64::MAX` still give a finite margin.
        let margin = 2.0 * (margin_ratio * (high * 0.5 - low * 0.5));
        let start = (low - margin).max(-AXIS_LIMIT);
        let end = (high + margin).min(AXIS_LIMIT);
        if !start.is_finite() || !end.is_finite() || start >= end {
            return Err(FigureError::InvalidData(format!(
                "axis extent ({low}, {high}) does not fit a finite range"
            )));
        }
        Ok(Self {
            start,
            end,
            tick0: start.floor(),
            dtick,
        })
    }

    /// Whether both ends are finite and ordered.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.start.is_finite() && self.end.is_finite() && self.start < self.end
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.end - self.start
    }

    /// Grows the range symmetrically around its center to `span`.
    #[must_use]
    pub fn widened_to(self, span: f64) -> Self {
        if !span.is_finite() || span <= self.span() {
            return self;
        }
        let center = self.start * 0.5 + self.end * 0.5;
        let start = center - span / 2.0;
        let end = center + span / 2.0;
        if !start.is_finite() || !end.is_finite() {
            return self;
        }
        Self {
            start,
            end,
            tick0: start.floor(),
            dtick: self.dtick,
        }
    }

    /// Tick positions `tick0 + k * dtick` that fall inside the range.
    #[must_use]
    pub fn ticks(self) -> Vec<f64> {
        if !self.dtick.is_finite() || self.dtick <= 0.0 || !self.span().is_finite() {
            return Vec::new();
        }
        let mut dtick = self.dtick;
        while self.span() / dtick > MAX_TICKS_PER_AXIS as f64 {
            dtick *= 2.0;
        }

        let first = ((self.start - self.tick0) / dtick).ceil() as i64;
        let last = ((self.end - self.tick0) / dtick).floor() as i64;
        (first..=last)
            .map(|k| self.tick0 + k as f64 * dtick)
            .collect()
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        (self.start..=self.end).contains(&value)
    }
}

/// Smallest and largest finite value, ignoring NaN and infinities.
#[must_use]
pub fn finite_extent(values: &[f64]) -> Option<(f64, f64)> {
    let finite = || values.iter().copied().filter(|v| v.is_finite()).map(OrderedFloat);
    let min = finite().min()?;
    let max = finite().max()?;
    Some((min.into_inner(), max.into_inner()))
}

/// Axis ranges of a figure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotBounds {
    pub x: AxisRange,
    pub y: AxisRange,
}

impl PlotBounds {
    /// Fits the x-range `[x_low, x_high]` and the finite extent of `ys`.
    ///
    /// A curve with no finite sample falls back to `[-1, 1]` vertically.
    pub fn fit(
        x_low: f64,
        x_high: f64,
        ys: &[f64],
        margin_ratios: (f64, f64),
        dticks: (f64, f64),
    ) -> FigureResult<Self> {
        let (y_low, y_high) = finite_extent(ys).unwrap_or((-1.0, 1.0));
        Ok(Self {
            x: AxisRange::padded(x_low, x_high, margin_ratios.0, dticks.0)?,
            y: AxisRange::padded(y_low, y_high, margin_ratios.1, dticks.1)?,
        })
    }

    /// Widens one axis so a data unit covers the same number of pixels on both.
    #[must_use]
    pub fn with_square_aspect(self, plot_width_px: f64, plot_height_px: f64) -> Self {
        if plot_width_px <= 0.0
            || plot_height_px <= 0.0
            || !self.x.span().is_finite()
            || !self.y.span().is_finite()
        {
            return self;
        }
        let px_per_unit = (plot_width_px / self.x.span()).min(plot_height_px / self.y.span());
        Self {
            x: self.x.widened_to(plot_width_px / px_per_unit),
            y: self.y.widened_to(plot_height_px / px_per_unit),
        }
    }
}
