use std::path::Path;

use tracing::{debug, info};

use crate::error::{FigureError, FigureResult};
use crate::render::{Figure, HtmlRenderer};

/// Writes `figure` as a standalone HTML document to `path`, overwriting it.
///
/// On success the figure is handed back. A failed write returns
/// [`FigureError::Export`], which still owns the figure; see
/// [`FigureError::into_figure`]. A figure that fails validation is reported
/// as is and nothing is written.
pub fn export_html(figure: Figure, path: impl AsRef<Path>) -> FigureResult<Figure> {
    let path = path.as_ref();
    let document = HtmlRenderer::render_document(&figure)?;

    match std::fs::write(path, &document) {
        Ok(()) => {
            info!(path = %path.display(), bytes = document.len(), "figure saved");
            Ok(figure)
        }
        Err(source) => Err(FigureError::Export {
            path: path.to_path_buf(),
            source,
            figure: Box::new(figure),
        }),
    }
}

/// Applies the `save_figure` option of an entry point.
pub(crate) fn finish_figure(
    figure: Figure,
    save_figure: bool,
    filename: &Path,
) -> FigureResult<Figure> {
    if save_figure {
        export_html(figure, filename)
    } else {
        debug!("export skipped, returning figure for display");
        Ok(figure)
    }
}
