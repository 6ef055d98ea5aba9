use std::ops::Range;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::core::{AxisRange, DataPoint, Viewport};
use crate::error::{FigureError, FigureResult};
use crate::render::{LineStyle, MarkerStyle};

/// Display state of one trace.
///
/// `LegendOnly` traces are listed in the legend but not drawn until the
/// viewer toggles them on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Visible,
    Hidden,
    LegendOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceMode {
    Lines,
    Markers,
}

/// One drawable series of points.
///
/// Non-finite coordinates serialize as `null` and render as a gap; they
/// read back as NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub name: String,
    pub mode: TraceMode,
    #[serde(deserialize_with = "nullable_f64s")]
    pub x: Vec<f64>,
    #[serde(deserialize_with = "nullable_f64s")]
    pub y: Vec<f64>,
    pub visible: Visibility,
    #[serde(default = "default_show_legend")]
    pub show_legend: bool,
    /// Closes the outline and fills its interior.
    #[serde(default)]
    pub fill_to_self: bool,
    #[serde(default)]
    pub line: Option<LineStyle>,
    #[serde(default)]
    pub marker: Option<MarkerStyle>,
    #[serde(default)]
    pub legend_rank: u32,
}

fn default_show_legend() -> bool {
    true
}

fn nullable_f64s<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<Option<f64>>::deserialize(deserializer)?;
    Ok(values
        .into_iter()
        .map(|value| value.unwrap_or(f64::NAN))
        .collect())
}

impl Trace {
    #[must_use]
    pub fn lines(name: impl Into<String>, x: Vec<f64>, y: Vec<f64>, line: LineStyle) -> Self {
        Self {
            name: name.into(),
            mode: TraceMode::Lines,
            x,
            y,
            visible: Visibility::Visible,
            show_legend: true,
            fill_to_self: false,
            line: Some(line),
            marker: None,
            legend_rank: 0,
        }
    }

    #[must_use]
    pub fn markers(name: impl Into<String>, points: &[DataPoint], marker: MarkerStyle) -> Self {
        Self {
            name: name.into(),
            mode: TraceMode::Markers,
            x: points.iter().map(|p| p.x).collect(),
            y: points.iter().map(|p| p.y).collect(),
            visible: Visibility::Visible,
            show_legend: true,
            fill_to_self: false,
            line: None,
            marker: Some(marker),
            legend_rank: 0,
        }
    }

    #[must_use]
    pub fn polyline(name: impl Into<String>, points: &[DataPoint], line: LineStyle) -> Self {
        Self::lines(
            name,
            points.iter().map(|p| p.x).collect(),
            points.iter().map(|p| p.y).collect(),
            line,
        )
    }

    #[must_use]
    pub fn with_visibility(mut self, visible: Visibility) -> Self {
        self.visible = visible;
        self
    }

    #[must_use]
    pub fn with_fill_to_self(mut self) -> Self {
        self.fill_to_self = true;
        self
    }

    #[must_use]
    pub fn without_legend(mut self) -> Self {
        self.show_legend = false;
        self
    }

    #[must_use]
    pub fn with_legend_rank(mut self, legend_rank: u32) -> Self {
        self.legend_rank = legend_rank;
        self
    }

    pub fn validate(&self) -> FigureResult<()> {
        if self.x.len() != self.y.len() {
            return Err(FigureError::InvalidData(format!(
                "trace `{}` has {} x values but {} y values",
                self.name,
                self.x.len(),
                self.y.len()
            )));
        }
        match self.mode {
            TraceMode::Lines => self
                .line
                .ok_or_else(|| {
                    FigureError::InvalidData(format!("line trace `{}` has no line style", self.name))
                })?
                .validate(),
            TraceMode::Markers => self
                .marker
                .ok_or_else(|| {
                    FigureError::InvalidData(format!(
                        "marker trace `{}` has no marker style",
                        self.name
                    ))
                })?
                .validate(),
        }
    }
}

/// Contiguous block of traces that forms one overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceSpan {
    pub start: usize,
    pub len: usize,
}

impl TraceSpan {
    #[must_use]
    pub fn range(self) -> Range<usize> {
        self.start..self.start + self.len
    }

    #[must_use]
    pub fn contains(self, trace_index: usize) -> bool {
        self.range().contains(&trace_index)
    }
}

/// One discrete slider position and the trace visibility it selects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderStep {
    pub label: String,
    /// Parameter value (`h` or `N`) the step stands for.
    pub value: f64,
    pub title: String,
    pub visible: Vec<Visibility>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slider {
    pub active: usize,
    pub prefix: String,
    pub steps: Vec<SliderStep>,
}

/// Pixel padding between the canvas border and the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotMargins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for PlotMargins {
    fn default() -> Self {
        Self {
            left: 60.0,
            right: 20.0,
            top: 20.0,
            bottom: 50.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLayout {
    pub title: String,
    pub range: AxisRange,
    pub ticks: Vec<f64>,
    pub zero_line: LineStyle,
}

impl AxisLayout {
    #[must_use]
    pub fn new(title: impl Into<String>, range: AxisRange, zero_line: LineStyle) -> Self {
        Self {
            title: title.into(),
            range,
            ticks: range.ticks(),
            zero_line,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub title: String,
    pub viewport: Viewport,
    pub margins: PlotMargins,
    pub x_axis: AxisLayout,
    pub y_axis: AxisLayout,
    pub slider: Slider,
}

/// Base traces plus every precomputed overlay, and the slider that picks
/// which overlay is shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
    pub overlays: Vec<TraceSpan>,
    #[serde(default)]
    pub metadata: IndexMap<String, String>,
}

impl Figure {
    #[must_use]
    pub fn trace_count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn step_count(&self) -> usize {
        self.layout.slider.steps.len()
    }

    /// Traces belonging to overlay `index`.
    #[must_use]
    pub fn overlay_traces(&self, index: usize) -> Option<&[Trace]> {
        let span = self.overlays.get(index)?;
        self.data.get(span.range())
    }

    /// Indices of overlays with at least one drawn trace.
    #[must_use]
    pub fn visible_overlays(&self) -> Vec<usize> {
        self.overlays
            .iter()
            .enumerate()
            .filter(|(_, span)| {
                self.data.get(span.range()).is_some_and(|traces| {
                    traces
                        .iter()
                        .any(|trace| trace.visible == Visibility::Visible)
                })
            })
            .map(|(index, _)| index)
            .collect()
    }

    /// Moves the slider to `step`, applying its visibility and title.
    ///
    /// Mirrors what the viewer does on slider input; nothing is recomputed.
    pub fn select_step(&mut self, step: usize) -> FigureResult<()> {
        let slider_step = self.layout.slider.steps.get(step).ok_or_else(|| {
            FigureError::InvalidData(format!(
                "slider step {step} out of range (0..{})",
                self.layout.slider.steps.len()
            ))
        })?;
        if slider_step.visible.len() != self.data.len() {
            return Err(FigureError::InvalidData(format!(
                "slider step {step} covers {} traces, figure has {}",
                slider_step.visible.len(),
                self.data.len()
            )));
        }

        for (trace, &visible) in self.data.iter_mut().zip(&slider_step.visible) {
            trace.visible = visible;
        }
        self.layout.title = slider_step.title.clone();
        self.layout.slider.active = step;
        Ok(())
    }

    pub fn validate(&self) -> FigureResult<()> {
        if !self.layout.viewport.is_valid() {
            return Err(FigureError::InvalidData(format!(
                "invalid viewport size: width={}, height={}",
                self.layout.viewport.width, self.layout.viewport.height
            )));
        }
        for (name, axis) in [("x", &self.layout.x_axis), ("y", &self.layout.y_axis)] {
            if !axis.range.is_valid() {
                return Err(FigureError::InvalidData(format!(
                    "{name} axis range must be finite and ordered, got ({}, {})",
                    axis.range.start, axis.range.end
                )));
            }
        }
        for trace in &self.data {
            trace.validate()?;
        }

        for (index, span) in self.overlays.iter().enumerate() {
            if span.len == 0 || span.range().end > self.data.len() {
                return Err(FigureError::InvalidData(format!(
                    "overlay {index} spans traces {:?}, figure has {}",
                    span.range(),
                    self.data.len()
                )));
            }
        }
        if self
            .overlays
            .windows(2)
            .any(|pair| pair[1].start < pair[0].range().end)
        {
            return Err(FigureError::InvalidData(
                "overlay spans must be ordered and disjoint".to_owned(),
            ));
        }

        let slider = &self.layout.slider;
        if slider.steps.len() != self.overlays.len() {
            return Err(FigureError::InvalidData(format!(
                "slider has {} steps for {} overlays",
                slider.steps.len(),
                self.overlays.len()
            )));
        }
        if slider.active >= slider.steps.len() {
            return Err(FigureError::InvalidData(format!(
                "active slider step {} out of range (0..{})",
                slider.active,
                slider.steps.len()
            )));
        }
        for (index, step) in slider.steps.iter().enumerate() {
            if step.visible.len() != self.data.len() {
                return Err(FigureError::InvalidData(format!(
                    "slider step {index} covers {} traces, figure has {}",
                    step.visible.len(),
                    self.data.len()
                )));
            }
        }

        let visible = self.visible_overlays();
        if visible.len() != 1 {
            return Err(FigureError::InvalidData(format!(
                "exactly one overlay must be visible, found {visible:?}"
            )));
        }
        Ok(())
    }
}
