use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{DataPoint, Domain, ScalarFunction};
use crate::error::{FigureError, FigureResult};

/// Step used by [`tangent_line`] for the central difference.
pub const DEFAULT_TANGENT_DELTA: f64 = 1e-6;

/// Ordered step sizes `h` whose magnitudes shrink strictly toward zero.
///
/// No entry is ever zero, so every secant slope is a well-defined quotient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct StepSchedule {
    steps: Vec<f64>,
}

impl StepSchedule {
    /// Builds `h_k = initial * decay^k` for `k` in `0..count`.
    pub fn geometric(initial: f64, decay: f64, count: usize) -> FigureResult<Self> {
        if !decay.is_finite() || decay <= 0.0 || decay >= 1.0 {
            return Err(FigureError::InvalidConfig(format!(
                "step decay must lie in (0, 1), got {decay}"
            )));
        }

        let mut steps = Vec::with_capacity(count);
        let mut h = initial;
        for _ in 0..count {
            steps.push(h);
            h *= decay;
        }
        Self::from_steps(steps)
    }

    pub fn from_steps(steps: Vec<f64>) -> FigureResult<Self> {
        if steps.is_empty() {
            return Err(FigureError::InvalidConfig(
                "step schedule must contain at least one step".to_owned(),
            ));
        }
        for (index, &h) in steps.iter().enumerate() {
            if !h.is_finite() || h == 0.0 {
                return Err(FigureError::InvalidConfig(format!(
                    "step {index} must be finite and non-zero, got {h}"
                )));
            }
        }
        if let Some(index) = steps.windows(2).position(|w| w[1].abs() >= w[0].abs()) {
            return Err(FigureError::InvalidConfig(format!(
                "step magnitudes must strictly decrease, step {} ({}) does not shrink step {index} ({})",
                index + 1,
                steps[index + 1],
                steps[index]
            )));
        }
        Ok(Self { steps })
    }

    #[must_use]
    pub fn steps(&self) -> &[f64] {
        &self.steps
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl TryFrom<Vec<f64>> for StepSchedule {
    type Error = FigureError;

    fn try_from(steps: Vec<f64>) -> FigureResult<Self> {
        Self::from_steps(steps)
    }
}

impl From<StepSchedule> for Vec<f64> {
    fn from(schedule: StepSchedule) -> Self {
        schedule.steps
    }
}

/// Line `y = anchor.y + slope * (x - anchor.x)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineLine {
    pub anchor: DataPoint,
    pub slope: f64,
}

impl AffineLine {
    #[must_use]
    pub fn value_at(self, x: f64) -> f64 {
        self.slope * (x - self.anchor.x) + self.anchor.y
    }

    /// Endpoints of the line restricted to `domain`.
    #[must_use]
    pub fn segment(self, domain: Domain) -> [DataPoint; 2] {
        [
            DataPoint::new(domain.low(), self.value_at(domain.low())),
            DataPoint::new(domain.high(), self.value_at(domain.high())),
        ]
    }
}

/// Secant through `(a, f(a))` and `(a + h, f(a + h))`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Secant {
    pub h: f64,
    pub anchor: DataPoint,
    pub moving: DataPoint,
    pub slope: f64,
    /// Drawn part of the line; the line itself is unbounded.
    pub segment: [DataPoint; 2],
}

impl Secant {
    pub fn through<F>(function: &F, a: f64, h: f64, domain: Domain) -> FigureResult<Self>
    where
        F: ScalarFunction + ?Sized,
    {
        if !h.is_finite() || h == 0.0 {
            return Err(FigureError::InvalidConfig(format!(
                "secant step must be finite and non-zero, got {h}"
            )));
        }

        let fa = function.eval(a);
        let fah = function.eval(a + h);
        let slope = (fah - fa) / h;
        let line = AffineLine {
            anchor: DataPoint::new(a, fa),
            slope,
        };

        Ok(Self {
            h,
            anchor: line.anchor,
            moving: DataPoint::new(a + h, fah),
            slope,
            segment: line.segment(domain),
        })
    }

    #[must_use]
    pub fn line(self) -> AffineLine {
        AffineLine {
            anchor: self.anchor,
            slope: self.slope,
        }
    }
}

/// Builds one secant per schedule entry, in schedule order.
pub fn build_secants<F>(
    function: &F,
    a: f64,
    domain: Domain,
    schedule: &StepSchedule,
) -> FigureResult<Vec<Secant>>
where
    F: ScalarFunction + ?Sized,
{
    let secants = schedule
        .steps()
        .iter()
        .map(|&h| Secant::through(function, a, h, domain))
        .collect::<FigureResult<Vec<_>>>()?;

    debug!(
        a,
        count = secants.len(),
        last_slope = secants.last().map(|s| s.slope),
        "built secant overlays"
    );
    Ok(secants)
}

/// Tangent line at `a` with slope from a central difference of width `2 * delta`.
pub fn tangent_line<F>(function: &F, a: f64, delta: f64) -> FigureResult<AffineLine>
where
    F: ScalarFunction + ?Sized,
{
    if !delta.is_finite() || delta <= 0.0 {
        return Err(FigureError::InvalidConfig(format!(
            "tangent delta must be finite and > 0, got {delta}"
        )));
    }

    let slope = (function.eval(a + delta) - function.eval(a - delta)) / (2.0 * delta);
    Ok(AffineLine {
        anchor: DataPoint::new(a, function.eval(a)),
        slope,
    })
}
