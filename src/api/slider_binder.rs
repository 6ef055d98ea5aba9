use crate::error::{FigureError, FigureResult};
use crate::render::{Slider, SliderStep, TraceSpan, Visibility};

/// Slider position shown to the viewer for one overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct StepLabel {
    pub label: String,
    pub value: f64,
    pub title: String,
}

impl StepLabel {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64, title: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value,
            title: title.into(),
        }
    }
}

/// Visibility vector that shows overlay `selected` and hides every other
/// overlay. Static traces keep their base visibility.
#[must_use]
pub fn step_visibility(
    static_visibility: &[Visibility],
    overlays: &[TraceSpan],
    selected: usize,
) -> Vec<Visibility> {
    let overlay_traces: usize = overlays.iter().map(|span| span.len).sum();
    let mut visible = Vec::with_capacity(static_visibility.len() + overlay_traces);
    visible.extend_from_slice(static_visibility);
    for (index, span) in overlays.iter().enumerate() {
        let state = if index == selected {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
        visible.extend(std::iter::repeat_n(state, span.len));
    }
    visible
}

/// Builds one slider step per overlay, in overlay order.
///
/// Overlay spans must directly follow the static traces and each other.
pub fn bind_slider(
    static_visibility: &[Visibility],
    overlays: &[TraceSpan],
    labels: Vec<StepLabel>,
    prefix: impl Into<String>,
    active: usize,
) -> FigureResult<Slider> {
    if labels.len() != overlays.len() {
        return Err(FigureError::InvalidData(format!(
            "{} step labels for {} overlays",
            labels.len(),
            overlays.len()
        )));
    }
    if active >= overlays.len() {
        return Err(FigureError::InvalidData(format!(
            "active step {active} out of range (0..{})",
            overlays.len()
        )));
    }

    let mut next_start = static_visibility.len();
    for (index, span) in overlays.iter().enumerate() {
        if span.start != next_start {
            return Err(FigureError::InvalidData(format!(
                "overlay {index} starts at trace {}, expected {next_start}",
                span.start
            )));
        }
        next_start = span.range().end;
    }

    let steps = labels
        .into_iter()
        .enumerate()
        .map(|(index, label)| SliderStep {
            label: label.label,
            value: label.value,
            title: label.title,
            visible: step_visibility(static_visibility, overlays, index),
        })
        .collect();

    Ok(Slider {
        active,
        prefix: prefix.into(),
        steps,
    })
}
