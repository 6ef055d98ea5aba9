use indexmap::IndexMap;
use tracing::debug;

use crate::core::Viewport;
use crate::error::{FigureError, FigureResult};
use crate::render::{AxisLayout, Figure, Layout, PlotMargins, Trace, TraceSpan, Visibility};

use super::{StepLabel, bind_slider};

/// Overlay shown right after assembly; the slider starts on it too.
pub const INITIAL_OVERLAY: usize = 0;

/// Precomputed traces for one slider position.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub step: StepLabel,
    pub traces: Vec<Trace>,
}

impl Overlay {
    #[must_use]
    pub fn new(step: StepLabel, traces: Vec<Trace>) -> Self {
        Self { step, traces }
    }
}

/// Collects static traces and layout pieces, then combines them with the
/// overlays into a slider-driven [`Figure`].
#[derive(Debug, Clone)]
pub struct FigureAssembler {
    x_axis: AxisLayout,
    y_axis: AxisLayout,
    viewport: Viewport,
    margins: PlotMargins,
    slider_prefix: String,
    static_traces: Vec<Trace>,
    metadata: IndexMap<String, String>,
}

impl FigureAssembler {
    #[must_use]
    pub fn new(x_axis: AxisLayout, y_axis: AxisLayout) -> Self {
        Self {
            x_axis,
            y_axis,
            viewport: Viewport::default(),
            margins: PlotMargins::default(),
            slider_prefix: String::new(),
            static_traces: Vec::new(),
            metadata: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_canvas(mut self, viewport: Viewport, margins: PlotMargins) -> Self {
        self.viewport = viewport;
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_slider_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.slider_prefix = prefix.into();
        self
    }

    /// Adds a trace that stays on screen for every slider position.
    #[must_use]
    pub fn with_static_trace(mut self, trace: Trace) -> Self {
        self.static_traces.push(trace);
        self
    }

    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.metadata.insert(key.into(), value.to_string());
        self
    }

    /// Lays out static traces first, then each overlay's traces in order.
    ///
    /// Overlay [`INITIAL_OVERLAY`] is visible, all others are hidden.
    pub fn assemble(self, overlays: Vec<Overlay>) -> FigureResult<Figure> {
        if overlays.is_empty() {
            return Err(FigureError::InvalidConfig(
                "a figure needs at least one overlay".to_owned(),
            ));
        }
        if let Some(index) = overlays.iter().position(|o| o.traces.is_empty()) {
            return Err(FigureError::InvalidConfig(format!(
                "overlay {index} has no traces"
            )));
        }

        let static_visibility: Vec<Visibility> =
            self.static_traces.iter().map(|t| t.visible).collect();
        let mut data = self.static_traces;
        let mut spans = Vec::with_capacity(overlays.len());
        let mut labels = Vec::with_capacity(overlays.len());

        for (index, overlay) in overlays.into_iter().enumerate() {
            let visible = if index == INITIAL_OVERLAY {
                Visibility::Visible
            } else {
                Visibility::Hidden
            };
            spans.push(TraceSpan {
                start: data.len(),
                len: overlay.traces.len(),
            });
            data.extend(
                overlay
                    .traces
                    .into_iter()
                    .map(|trace| trace.with_visibility(visible)),
            );
            labels.push(overlay.step);
        }

        let title = labels[INITIAL_OVERLAY].title.clone();
        let slider = bind_slider(
            &static_visibility,
            &spans,
            labels,
            self.slider_prefix,
            INITIAL_OVERLAY,
        )?;

        let figure = Figure {
            data,
            layout: Layout {
                title,
                viewport: self.viewport,
                margins: self.margins,
                x_axis: self.x_axis,
                y_axis: self.y_axis,
                slider,
            },
            overlays: spans,
            metadata: self.metadata,
        };
        figure.validate()?;

        debug!(
            traces = figure.trace_count(),
            steps = figure.step_count(),
            "assembled slider figure"
        );
        Ok(figure)
    }
}
