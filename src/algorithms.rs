pub mod convex_hull;

#[doc(inline)]
pub use convex_hull::quickhull::convex_hull;
