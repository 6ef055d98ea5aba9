use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{DataPoint, Domain, ScalarFunction};
use crate::error::{FigureError, FigureResult};

/// Default number of samples for a base curve.
pub const DEFAULT_SAMPLE_COUNT: usize = 400;

/// Evenly spaced samples of a function over a domain.
///
/// Values are stored exactly as the function returned them, NaN and
/// infinities included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl Grid {
    #[must_use]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = DataPoint> + '_ {
        self.xs
            .iter()
            .zip(&self.ys)
            .map(|(&x, &y)| DataPoint::new(x, y))
    }
}

/// Returns `count` evenly spaced values from `start` to `end`, both included.
///
/// The last value is pinned to `end` so rounding never leaves the interval.
pub fn linspace(start: f64, end: f64, count: usize) -> FigureResult<Vec<f64>> {
    if count < 2 {
        return Err(FigureError::InvalidConfig(format!(
            "sample count must be >= 2, got {count}"
        )));
    }

    let step = (end - start) / (count - 1) as f64;
    let mut values: Vec<f64> = (0..count).map(|i| start + i as f64 * step).collect();
    values[count - 1] = end;
    Ok(values)
}

/// Samples `function` at `sample_count` evenly spaced points over `domain`.
pub fn sample_function<F>(function: &F, domain: Domain, sample_count: usize) -> FigureResult<Grid>
where
    F: ScalarFunction + ?Sized,
{
    let xs = linspace(domain.low(), domain.high(), sample_count)?;
    let ys: Vec<f64> = xs.iter().map(|&x| function.eval(x)).collect();

    let non_finite = ys.iter().filter(|y| !y.is_finite()).count();
    trace!(
        sample_count,
        non_finite,
        low = domain.low(),
        high = domain.high(),
        "sampled base curve"
    );

    Ok(Grid { xs, ys })
}

#[cfg(test)]
mod tests {
    use super::linspace;

    #[test]
    fn linspace_hits_both_endpoints() {
        let values = linspace(-1.0, 0.3, 7).expect("linspace");
        assert_eq!(values.len(), 7);
        assert_eq!(values[0], -1.0);
        assert_eq!(values[6], 0.3);
    }

    #[test]
    fn linspace_rejects_single_sample() {
        assert!(linspace(0.0, 1.0, 1).is_err());
        assert!(linspace(0.0, 1.0, 0).is_err());
    }
}
