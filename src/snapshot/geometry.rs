use regex::Regex;
use serde::{Deserialize, Serialize};

/// A tap target in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

/// Resolve a bounds description like `[10,20][30,60]` to its centroid.
///
/// The first four integers found in the string are taken as x1,y1,x2,y2
/// (signs allowed, since off-screen elements carry negative coordinates)
/// and averaged with integer division. Returns None when fewer than four
/// integers are present; the caller skips that candidate rather than
/// aborting the run.
pub fn bounds_center(bounds: &str) -> Option<Point> {
    let re = Regex::new(r"-?\d+").unwrap();
    let nums: Vec<i32> = re
        .find_iter(bounds)
        .filter_map(|m| m.as_str().parse().ok())
        .take(4)
        .collect();

    match nums[..] {
        [x1, y1, x2, y2] => Some(Point::new(midpoint(x1, x2), midpoint(y1, y2))),
        _ => None,
    }
}

// Summed in i64 so coordinates near the i32 limits cannot wrap.
fn midpoint(a: i32, b: i32) -> i32 {
    ((i64::from(a) + i64::from(b)) / 2) as i32
}
