//! The fixed catalog of named benchmark scenarios.
//!
//! Each scenario allocates its own output arrays, wires one scalar kernel
//! against its lane-packed twin, and hands both to [`run_comparison`].

use f8_lanes::{f8, SimdVector3};
use glam::Vec3;

use super::inputs::RandomInputs;
use super::kernels::{self, QUADRATIC_RECORD};
use super::runner::{run_comparison, ComparisonReport, Side};
use super::timing::Timed;
use crate::error::BenchError;

pub type ScenarioFn = fn(&RandomInputs, usize) -> Result<ComparisonReport, BenchError>;

pub struct Scenario {
    pub name: &'static str,
    pub about: &'static str,
    pub run: ScenarioFn,
}

pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "normals",
        about: "unit face normal of each triangle",
        run: normals,
    },
    Scenario {
        name: "perimeters",
        about: "sum of the three edge lengths of each triangle",
        run: perimeters,
    },
    Scenario {
        name: "bounds",
        about: "bounding-box min/max over all points",
        run: bounds,
    },
    Scenario {
        name: "quadratic",
        about: "a*x^2 + b*x + c over (a, b, c, x) records",
        run: quadratic,
    },
    Scenario {
        name: "vector-sum",
        about: "sum of all points",
        run: vector_sum,
    },
    Scenario {
        name: "float-sum",
        about: "sum of all floats",
        run: float_sum,
    },
    Scenario {
        name: "fast-normals",
        about: "normalize points with a reciprocal square root",
        run: fast_normals,
    },
    Scenario {
        name: "lerp",
        about: "lerp(a, b, c.x) for each triangle",
        run: lerp,
    },
    Scenario {
        name: "barycentric",
        about: "barycentric point per triangle, reading and writing one point buffer",
        run: barycentric,
    },
];

pub fn find(name: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.name == name)
}

pub fn normals(inputs: &RandomInputs, iterations: usize) -> Result<ComparisonReport, BenchError> {
    let mut scalar_out = vec![Vec3::ZERO; inputs.triangles.len()];
    let mut simd_out = vec![SimdVector3::ZERO; inputs.simd_triangles.len()];
    run_comparison(
        iterations,
        Side::new(&inputs.triangles, &mut scalar_out, kernels::normals),
        Side::new(&inputs.simd_triangles, &mut simd_out, kernels::simd_normals),
    )
}

pub fn perimeters(inputs: &RandomInputs, iterations: usize) -> Result<ComparisonReport, BenchError> {
    let mut scalar_out = vec![0.0f32; inputs.triangles.len()];
    let mut simd_out = vec![f8::ZERO; inputs.simd_triangles.len()];
    run_comparison(
        iterations,
        Side::new(&inputs.triangles, &mut scalar_out, kernels::perimeters),
        Side::new(&inputs.simd_triangles, &mut simd_out, kernels::simd_perimeters),
    )
}

pub fn bounds(inputs: &RandomInputs, iterations: usize) -> Result<ComparisonReport, BenchError> {
    let mut scalar_out = [Vec3::ZERO; 2];
    let mut simd_out = [SimdVector3::ZERO; 2];
    let report = run_comparison(
        iterations,
        Side::new(&inputs.points, &mut scalar_out, kernels::bounds),
        Side::new(&inputs.simd_points, &mut simd_out, kernels::simd_bounds),
    )?;
    log::debug!(
        "bounds: scalar {:?}..{:?}, simd {:?}..{:?}",
        scalar_out[0],
        scalar_out[1],
        simd_out[0].reduce_min(),
        simd_out[1].reduce_max()
    );
    Ok(report)
}

pub fn quadratic(inputs: &RandomInputs, iterations: usize) -> Result<ComparisonReport, BenchError> {
    let mut scalar_out = vec![0.0f32; inputs.floats.len() / QUADRATIC_RECORD];
    let mut simd_out = vec![f8::ZERO; inputs.simd_floats.len() / QUADRATIC_RECORD];
    run_comparison(
        iterations,
        Side::new(&inputs.floats, &mut scalar_out, kernels::quadratic),
        Side::new(&inputs.simd_floats, &mut simd_out, kernels::simd_quadratic),
    )
}

pub fn vector_sum(inputs: &RandomInputs, iterations: usize) -> Result<ComparisonReport, BenchError> {
    let mut scalar_out = [Vec3::ZERO; 1];
    let mut simd_out = [SimdVector3::ZERO; 1];
    let report = run_comparison(
        iterations,
        Side::new(&inputs.points, &mut scalar_out, kernels::vector_sum),
        Side::new(&inputs.simd_points, &mut simd_out, kernels::simd_vector_sum),
    )?;
    log::debug!(
        "vector-sum: scalar {:?}, simd {:?}",
        scalar_out[0],
        simd_out[0].reduce_sum()
    );
    Ok(report)
}

pub fn float_sum(inputs: &RandomInputs, iterations: usize) -> Result<ComparisonReport, BenchError> {
    let mut scalar_out = [0.0f32; 1];
    let mut simd_out = [f8::ZERO; 1];
    let report = run_comparison(
        iterations,
        Side::new(&inputs.floats, &mut scalar_out, kernels::float_sum),
        Side::new(&inputs.simd_floats, &mut simd_out, kernels::simd_float_sum),
    )?;
    log::debug!(
        "float-sum: scalar {}, simd {}",
        scalar_out[0],
        simd_out[0].reduce_sum()
    );
    Ok(report)
}

pub fn fast_normals(inputs: &RandomInputs, iterations: usize) -> Result<ComparisonReport, BenchError> {
    let mut scalar_out = vec![Vec3::ZERO; inputs.points.len()];
    let mut simd_out = vec![SimdVector3::ZERO; inputs.simd_points.len()];
    run_comparison(
        iterations,
        Side::new(&inputs.points, &mut scalar_out, kernels::fast_normals),
        Side::new(&inputs.simd_points, &mut simd_out, kernels::simd_fast_normals),
    )
}

pub fn lerp(inputs: &RandomInputs, iterations: usize) -> Result<ComparisonReport, BenchError> {
    let mut scalar_out = vec![Vec3::ZERO; inputs.triangles.len()];
    let mut simd_out = vec![SimdVector3::ZERO; inputs.simd_triangles.len()];
    run_comparison(
        iterations,
        Side::new(&inputs.triangles, &mut scalar_out, kernels::lerps),
        Side::new(&inputs.simd_triangles, &mut simd_out, kernels::simd_lerps),
    )
}

/// The output buffers start as copies of the random points and are fed
/// back into the kernel on every iteration.
pub fn barycentric(inputs: &RandomInputs, iterations: usize) -> Result<ComparisonReport, BenchError> {
    let mut scalar_points = inputs.points.clone();
    let mut simd_points = inputs.simd_points.clone();
    run_comparison(
        iterations,
        Side::new(&inputs.triangles, &mut scalar_points, kernels::barycentrics),
        Side::new(&inputs.simd_triangles, &mut simd_points, kernels::simd_barycentrics),
    )
}

/// Outcome of a suite run. Failed scenarios are recorded, never fatal.
#[derive(Debug, Default)]
pub struct SuiteSummary {
    pub completed: Vec<(&'static str, ComparisonReport)>,
    pub failed: Vec<(String, BenchError)>,
}

impl SuiteSummary {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Run `scenarios` in order, skipping past any that fail.
pub fn run_scenarios<'a>(
    inputs: &RandomInputs,
    iterations: usize,
    scenarios: impl IntoIterator<Item = &'a Scenario>,
) -> SuiteSummary {
    let mut summary = SuiteSummary::default();
    for scenario in scenarios {
        println!("[{}] {}", scenario.name, scenario.about);
        let _t = Timed::debug(format!("scenario {}", scenario.name));
        match (scenario.run)(inputs, iterations) {
            Ok(report) => summary.completed.push((scenario.name, report)),
            Err(e) => {
                log::warn!("scenario {} failed: {}", scenario.name, e);
                summary.failed.push((scenario.name.to_string(), e));
            }
        }
    }
    summary
}

/// Run the named scenarios, or the whole catalog when `names` is empty.
///
/// Unknown names are reported in the summary and skipped.
pub fn run_suite(inputs: &RandomInputs, iterations: usize, names: &[String]) -> SuiteSummary {
    if names.is_empty() {
        return run_scenarios(inputs, iterations, SCENARIOS);
    }

    let mut selected = Vec::new();
    let mut unknown = Vec::new();
    for name in names {
        match find(name) {
            Some(s) => selected.push(s),
            None => {
                log::error!("unknown scenario '{}'", name);
                unknown.push((name.clone(), BenchError::UnknownScenario(name.clone())));
            }
        }
    }

    let mut summary = run_scenarios(inputs, iterations, selected);
    summary.failed.extend(unknown);
    summary
}
