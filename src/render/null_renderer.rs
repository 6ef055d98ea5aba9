use crate::error::FigureResult;
use crate::render::{Figure, Renderer};

/// No-op renderer used by tests and headless builds.
///
/// It still validates the figure so tests catch broken slider wiring before
/// anything is written out.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_trace_count: usize,
    pub last_step_count: usize,
    pub render_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, figure: &Figure) -> FigureResult<()> {
        figure.validate()?;
        self.last_trace_count = figure.trace_count();
        self.last_step_count = figure.step_count();
        self.render_count += 1;
        Ok(())
    }
}
