pub mod bounds;
pub mod riemann;
pub mod sampler;
pub mod secant;
pub mod types;

pub use bounds::{AXIS_LIMIT, AxisRange, MAX_TICKS_PER_AXIS, PlotBounds, finite_extent};
pub use riemann::{
    Rectangle, RiemannMode, SignTag, build_rectangles, partition_range, riemann_sum,
};
pub use sampler::{DEFAULT_SAMPLE_COUNT, Grid, linspace, sample_function};
pub use secant::{
    AffineLine, DEFAULT_TANGENT_DELTA, Secant, StepSchedule, build_secants, tangent_line,
};
pub use types::{DataPoint, Domain, ScalarFunction, Viewport};
