//! Pearson correlation between mean complexity and defect density.

use crate::core::{CorrelationResult, DataPoint, Direction, ProjectStats, Strength};
use std::collections::BTreeMap;

/// Pearson correlation coefficient over paired observations.
///
/// Callers guarantee at least one pair. Zero variance in either series makes
/// the result non-finite; that degeneracy is surfaced unchanged rather than
/// coerced to zero.
pub fn pearson(pairs: &[(f64, f64)]) -> f64 {
    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let (covariance, variance_x, variance_y) = pairs
        .iter()
        .map(|(x, y)| {
            let diff_x = x - mean_x;
            let diff_y = y - mean_y;
            (diff_x * diff_y, diff_x * diff_x, diff_y * diff_y)
        })
        .fold((0.0, 0.0, 0.0), |acc, (cov, var_x, var_y)| {
            (acc.0 + cov, acc.1 + var_x, acc.2 + var_y)
        });

    covariance / (variance_x.sqrt() * variance_y.sqrt())
}

/// Correlate complexity against defect density across projects.
///
/// Projects without a usable average complexity are excluded from the paired
/// series; the rest enter in map iteration order.
pub fn analyze(stats: &BTreeMap<String, ProjectStats>) -> CorrelationResult {
    let data: Vec<DataPoint> = stats
        .values()
        .filter_map(|project| {
            project.avg_complexity.value().map(|complexity| DataPoint {
                complexity,
                defect_density: project.defect_density,
            })
        })
        .collect();

    let pairs: Vec<(f64, f64)> = data
        .iter()
        .map(|point| (point.complexity, point.defect_density))
        .collect();
    let r = pearson(&pairs);

    CorrelationResult {
        pearson_correlation: r,
        strength: Strength::classify(r),
        direction: Direction::classify(r),
        data,
    }
}
