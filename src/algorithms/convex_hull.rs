//! Convex hull engines.
//!
//! All engines emit the hull counterclockwise, starting from the
//! lexicographically smallest `(x, y)` vertex. When the predicates are exact
//! (for example integral coordinates of moderate size) they agree on the
//! vertex sequence, not only on the vertex set.
pub mod gift_wrapping;
pub mod parallel;
pub mod pooled;
pub mod quickhull;
