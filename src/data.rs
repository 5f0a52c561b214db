pub mod cloud;
mod hull;
pub(crate) mod point;

pub use hull::Hull;
pub use point::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}
