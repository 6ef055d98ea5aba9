use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::{
    DEFAULT_SAMPLE_COUNT, DEFAULT_TANGENT_DELTA, Domain, PlotBounds, StepSchedule, Viewport,
};
use crate::error::{FigureError, FigureResult};
use crate::render::{AxisLayout, Color, LineStyle, MarkerStyle, PlotMargins};

pub const DEFAULT_DERIVATIVE_FILENAME: &str = "derivative_defn.html";
pub const DEFAULT_RIEMANN_FILENAME: &str = "riemann_sums.html";
pub const DEFAULT_STEP_COUNT: usize = 40;
pub const DEFAULT_STEP_DECAY: f64 = 0.85;
pub const DEFAULT_MAX_PARTITIONS: usize = 30;

/// Canvas and axis settings shared by both figure kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureStyle {
    pub viewport: Viewport,
    pub margins: PlotMargins,
    /// Keeps one data unit the same pixel length on both axes.
    pub square_aspect: bool,
    pub x_margin_ratio: f64,
    pub y_margin_ratio: f64,
    pub x_dtick: f64,
    pub y_dtick: f64,
    pub axis_line: LineStyle,
    pub x_title: String,
    pub y_title: String,
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            margins: PlotMargins::default(),
            square_aspect: true,
            x_margin_ratio: 0.1,
            y_margin_ratio: 0.1,
            x_dtick: 0.5,
            y_dtick: 0.5,
            axis_line: LineStyle::new(Color::LIGHT_SLATE_GRAY, 2.0),
            x_title: "x".to_owned(),
            y_title: "y".to_owned(),
        }
    }
}

impl FigureStyle {
    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    #[must_use]
    pub fn with_square_aspect(mut self, square_aspect: bool) -> Self {
        self.square_aspect = square_aspect;
        self
    }

    #[must_use]
    pub fn with_ticks(mut self, x_dtick: f64, y_dtick: f64) -> Self {
        self.x_dtick = x_dtick;
        self.y_dtick = y_dtick;
        self
    }

    pub fn validate(&self) -> FigureResult<()> {
        if !self.viewport.is_valid() {
            return Err(FigureError::InvalidConfig(format!(
                "invalid viewport size: width={}, height={}",
                self.viewport.width, self.viewport.height
            )));
        }
        let PlotMargins {
            left,
            right,
            top,
            bottom,
        } = self.margins;
        for (value, name) in [
            (left, "margins.left"),
            (right, "margins.right"),
            (top, "margins.top"),
            (bottom, "margins.bottom"),
            (self.x_margin_ratio, "x_margin_ratio"),
            (self.y_margin_ratio, "y_margin_ratio"),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(FigureError::InvalidConfig(format!(
                    "figure style `{name}` must be finite and >= 0"
                )));
            }
        }
        for (value, name) in [(self.x_dtick, "x_dtick"), (self.y_dtick, "y_dtick")] {
            if !value.is_finite() || value <= 0.0 {
                return Err(FigureError::InvalidConfig(format!(
                    "figure style `{name}` must be finite and > 0"
                )));
            }
        }
        if left + right >= f64::from(self.viewport.width)
            || top + bottom >= f64::from(self.viewport.height)
        {
            return Err(FigureError::InvalidConfig(
                "plot margins leave no room for the plot area".to_owned(),
            ));
        }
        self.axis_line.validate()
    }

    /// Plot area size in pixels.
    #[must_use]
    pub fn plot_area(&self) -> (f64, f64) {
        (
            f64::from(self.viewport.width) - self.margins.left - self.margins.right,
            f64::from(self.viewport.height) - self.margins.top - self.margins.bottom,
        )
    }

    pub fn plot_bounds(&self, x_low: f64, x_high: f64, ys: &[f64]) -> FigureResult<PlotBounds> {
        let bounds = PlotBounds::fit(
            x_low,
            x_high,
            ys,
            (self.x_margin_ratio, self.y_margin_ratio),
            (self.x_dtick, self.y_dtick),
        )?;
        if !self.square_aspect {
            return Ok(bounds);
        }
        let (width, height) = self.plot_area();
        Ok(bounds.with_square_aspect(width, height))
    }

    #[must_use]
    pub fn axes(&self, bounds: PlotBounds) -> (AxisLayout, AxisLayout) {
        (
            AxisLayout::new(self.x_title.clone(), bounds.x, self.axis_line),
            AxisLayout::new(self.y_title.clone(), bounds.y, self.axis_line),
        )
    }
}

/// Options for the secant-line figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DerivativeFigureConfig {
    pub save_figure: bool,
    pub filename: PathBuf,
    pub num_x: usize,
    pub num_h: usize,
    pub h_decay: f64,
    /// Replaces the geometric schedule when set.
    pub step_schedule: Option<StepSchedule>,
    /// Tangent drawn from the start, otherwise listed in the legend only.
    pub tangent_line_always_visible: bool,
    pub tangent_delta: f64,
    pub curve: LineStyle,
    pub anchor_marker: MarkerStyle,
    pub tangent_line: LineStyle,
    pub moving_marker: MarkerStyle,
    pub secant_line: LineStyle,
    pub style: FigureStyle,
}

impl Default for DerivativeFigureConfig {
    fn default() -> Self {
        Self {
            save_figure: false,
            filename: PathBuf::from(DEFAULT_DERIVATIVE_FILENAME),
            num_x: DEFAULT_SAMPLE_COUNT,
            num_h: DEFAULT_STEP_COUNT,
            h_decay: DEFAULT_STEP_DECAY,
            step_schedule: None,
            tangent_line_always_visible: true,
            tangent_delta: DEFAULT_TANGENT_DELTA,
            curve: LineStyle::new(Color::BLUE, 2.0),
            anchor_marker: MarkerStyle::new(Color::BLACK, 10.0),
            tangent_line: LineStyle::new(Color::DEEP_SKY_BLUE, 2.0),
            moving_marker: MarkerStyle::new(Color::FUCHSIA, 10.0),
            secant_line: LineStyle::new(Color::RED, 2.0),
            style: FigureStyle::default(),
        }
    }
}

impl DerivativeFigureConfig {
    /// Enables export to `filename` after the figure is assembled.
    #[must_use]
    pub fn with_save_figure(mut self, filename: impl Into<PathBuf>) -> Self {
        self.save_figure = true;
        self.filename = filename.into();
        self
    }

    #[must_use]
    pub fn with_sample_count(mut self, num_x: usize) -> Self {
        self.num_x = num_x;
        self
    }

    #[must_use]
    pub fn with_geometric_steps(mut self, num_h: usize, h_decay: f64) -> Self {
        self.num_h = num_h;
        self.h_decay = h_decay;
        self.step_schedule = None;
        self
    }

    #[must_use]
    pub fn with_step_schedule(mut self, schedule: StepSchedule) -> Self {
        self.step_schedule = Some(schedule);
        self
    }

    #[must_use]
    pub fn with_tangent_line_always_visible(mut self, visible: bool) -> Self {
        self.tangent_line_always_visible = visible;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: FigureStyle) -> Self {
        self.style = style;
        self
    }

    pub fn validate(&self) -> FigureResult<()> {
        if self.num_x < 2 {
            return Err(FigureError::InvalidConfig(format!(
                "num_x must be >= 2, got {}",
                self.num_x
            )));
        }
        if self.step_schedule.is_none() {
            if self.num_h == 0 {
                return Err(FigureError::InvalidConfig(
                    "num_h must be >= 1".to_owned(),
                ));
            }
            if !self.h_decay.is_finite() || self.h_decay <= 0.0 || self.h_decay >= 1.0 {
                return Err(FigureError::InvalidConfig(format!(
                    "h_decay must lie in (0, 1), got {}",
                    self.h_decay
                )));
            }
        }
        if !self.tangent_delta.is_finite() || self.tangent_delta <= 0.0 {
            return Err(FigureError::InvalidConfig(format!(
                "tangent_delta must be finite and > 0, got {}",
                self.tangent_delta
            )));
        }
        if self.save_figure && self.filename.as_os_str().is_empty() {
            return Err(FigureError::InvalidConfig(
                "filename must not be empty when save_figure is set".to_owned(),
            ));
        }
        self.curve.validate()?;
        self.anchor_marker.validate()?;
        self.tangent_line.validate()?;
        self.moving_marker.validate()?;
        self.secant_line.validate()?;
        self.style.validate()
    }

    /// Explicit schedule, or `h_k = h0 * h_decay^k` starting at the largest
    /// step that keeps `a + h` inside the domain.
    pub fn resolve_step_schedule(&self, a: f64, domain: Domain) -> FigureResult<StepSchedule> {
        if let Some(schedule) = &self.step_schedule {
            return Ok(schedule.clone());
        }
        let to_right_edge = domain.high() - a;
        let initial = if to_right_edge.is_finite() && to_right_edge > 0.0 {
            to_right_edge
        } else {
            domain.width()
        };
        StepSchedule::geometric(initial, self.h_decay, self.num_h)
    }
}

/// Options for the Riemann-sum figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiemannFigureConfig {
    pub save_figure: bool,
    pub filename: PathBuf,
    pub num_x: usize,
    /// Slider runs over `N = 1..=max_n`.
    pub max_n: usize,
    pub curve: LineStyle,
    pub rect_line_width: f64,
    pub positive_color: Color,
    pub negative_color: Color,
    pub style: FigureStyle,
}

impl Default for RiemannFigureConfig {
    fn default() -> Self {
        Self {
            save_figure: false,
            filename: PathBuf::from(DEFAULT_RIEMANN_FILENAME),
            num_x: DEFAULT_SAMPLE_COUNT,
            max_n: DEFAULT_MAX_PARTITIONS,
            curve: LineStyle::new(Color::BLACK, 2.0),
            rect_line_width: 1.0,
            positive_color: Color::BLUE,
            negative_color: Color::RED,
            style: FigureStyle::default(),
        }
    }
}

impl RiemannFigureConfig {
    #[must_use]
    pub fn with_save_figure(mut self, filename: impl Into<PathBuf>) -> Self {
        self.save_figure = true;
        self.filename = filename.into();
        self
    }

    #[must_use]
    pub fn with_sample_count(mut self, num_x: usize) -> Self {
        self.num_x = num_x;
        self
    }

    #[must_use]
    pub fn with_max_partitions(mut self, max_n: usize) -> Self {
        self.max_n = max_n;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, positive: Color, negative: Color) -> Self {
        self.positive_color = positive;
        self.negative_color = negative;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: FigureStyle) -> Self {
        self.style = style;
        self
    }

    pub fn validate(&self) -> FigureResult<()> {
        if self.num_x < 2 {
            return Err(FigureError::InvalidConfig(format!(
                "num_x must be >= 2, got {}",
                self.num_x
            )));
        }
        if self.max_n == 0 {
            return Err(FigureError::InvalidConfig(
                "max_n must be >= 1".to_owned(),
            ));
        }
        if self.save_figure && self.filename.as_os_str().is_empty() {
            return Err(FigureError::InvalidConfig(
                "filename must not be empty when save_figure is set".to_owned(),
            ));
        }
        self.curve.validate()?;
        LineStyle::new(self.positive_color, self.rect_line_width).validate()?;
        self.negative_color.validate()?;
        self.style.validate()
    }
}
