use num_traits::{Num, Signed, Float};


/// Grid distance between (x1, y1) and (x2, y2)
/// Admissible for 4-connected grids with unit step cost
pub fn manhattan_distance<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Num + Signed + Copy,
{
    let dx = x2 - x1;
    let dy = y2 - y1;
    dx.abs() + dy.abs()
}

/// Straight-line distance between (x1, y1) and (x2, y2)
pub fn euclidean<T: Float>(x1: T, y1: T, x2: T, y2: T) -> T {
    (x2 - x1).hypot(y2 - y1)
}


/// 2D Point - position of a graph node on a plane
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance, never longer than any path between the two points
    pub fn distance_to(&self, other: &Point) -> f64 {
        euclidean(self.x, self.y, other.x, other.y)
    }

    /// Grid distance for 4-connected movement
    pub fn manhattan_to(&self, other: &Point) -> f64 {
        manhattan_distance(self.x, self.y, other.x, other.y)
    }
}
