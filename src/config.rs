//! Fixed plot geometry and file locations.
//!
//! The background image `quad.png` has its four axes drawn at the calibration
//! points below; every mapped coordinate is anchored to [`CENTER`] and scaled
//! so that a quadrant's maximum value lands on its axis endpoint.

use crate::model::Point;

/// Number of data streams (and quadrants).
pub const STREAM_COUNT: usize = 4;

/// Default background image.
pub const GRAPH_FILE: &str = "quad.png";

/// Default input data file.
pub const DATA_FILE: &str = "testtxt.txt";

pub const SCREEN_WIDTH: u32 = 1150;
pub const SCREEN_HEIGHT: u32 = 639;

pub const CENTER: Point = Point::new(498, 299);
/// Top of the vertical axis (quadrant 0).
pub const MAX_POINT_1: Point = Point::new(498, 67);
/// Right end of the horizontal axis (quadrant 1).
pub const MAX_POINT_2: Point = Point::new(862, 299);
/// Bottom of the vertical axis (quadrant 2).
pub const MAX_POINT_3: Point = Point::new(498, 553);
/// Left end of the horizontal axis (quadrant 3).
pub const MAX_POINT_4: Point = Point::new(155, 299);

/// Center point and the four axis endpoints of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calibration {
    pub center: Point,
    pub max_points: [Point; STREAM_COUNT],
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            center: CENTER,
            max_points: [MAX_POINT_1, MAX_POINT_2, MAX_POINT_3, MAX_POINT_4],
        }
    }
}

impl Calibration {
    /// Signed pixel offset of each axis endpoint from the center.
    ///
    /// Even axes are vertical (offset along y), odd axes horizontal (along x).
    pub fn axis_lengths(&self) -> [i32; STREAM_COUNT] {
        let c = self.center;
        let [p1, p2, p3, p4] = self.max_points;
        [p1.y - c.y, p2.x - c.x, p3.y - c.y, p4.x - c.x]
    }
}
