//! Map sorted relations to screen coordinates.
//!
//! Each value is divided by the maximum of the axis it is drawn along and
//! scaled to that axis' pixel length, so the largest value on an axis lands
//! on the calibration endpoint of that axis.

use crate::config::{Calibration, STREAM_COUNT};
use crate::error::{PlotError, Result};
use crate::model::{Point, QuadrantPlot, Relation};
use crate::relations::RelationSet;

/// Axis indices `(x_axis, y_axis)` that scale quadrant `q`'s `a` and `b`.
///
/// Odd axes are horizontal and even axes vertical; quadrants 0 and 1 share
/// the right axis, quadrants 2 and 3 the left one.
pub fn quadrant_axes(q: usize) -> (usize, usize) {
    match q {
        0 => (1, 0),
        1 => (1, 2),
        2 => (3, 2),
        _ => (3, 0),
    }
}

/// Scale `value` against `max` along an axis of `axis_length` pixels and
/// round half away from zero. Non-finite results saturate (NaN becomes 0).
pub fn scale_to_axis(value: f64, max: f64, axis_length: i32) -> i32 {
    (value / max * f64::from(axis_length)).round() as i32
}

/// Precomputed scale for a whole plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    center: Point,
    axis_lengths: [i32; STREAM_COUNT],
    max_values: [f64; STREAM_COUNT],
}

impl CoordinateMapper {
    pub fn new(calibration: &Calibration, max_values: [f64; STREAM_COUNT]) -> Self {
        Self {
            center: calibration.center,
            axis_lengths: calibration.axis_lengths(),
            max_values,
        }
    }

    pub fn map(&self, quadrant: usize, relation: Relation) -> Point {
        let (xa, ya) = quadrant_axes(quadrant);
        Point::new(
            scale_to_axis(relation.a, self.max_values[xa], self.axis_lengths[xa])
                .saturating_add(self.center.x),
            scale_to_axis(relation.b, self.max_values[ya], self.axis_lengths[ya])
                .saturating_add(self.center.y),
        )
    }
}

/// Sort every quadrant, take the maxima, and map all relations.
///
/// Fails with [`PlotError::MissingData`] if a quadrant has no relations.
pub fn map_all(relations: &mut RelationSet, calibration: &Calibration) -> Result<QuadrantPlot> {
    relations.sort();

    let mut max_values = [0.0; STREAM_COUNT];
    for (q, max) in relations.max_values().into_iter().enumerate() {
        max_values[q] = max.ok_or(PlotError::MissingData { quadrant: q })?;
        if max_values[q] <= 0.0 {
            tracing::warn!("Quadrant {} has non-positive max {}", q, max_values[q]);
        }
    }
    tracing::debug!("Quadrant maxima: {:?}", max_values);

    let mapper = CoordinateMapper::new(calibration, max_values);
    let polylines = std::array::from_fn(|q| {
        relations
            .quadrant(q)
            .iter()
            .map(|r| mapper.map(q, *r))
            .collect()
    });
    Ok(QuadrantPlot {
        max_values,
        polylines,
    })
}
