//! Fixed-length math vectors, generic over real and complex element types.
//!
//! The central type is [`Vector<T, N>`], an `N`-element vector of any [`Element`] type `T`: `i32`,
//! `i64`, `f32`, `f64`, or a [`Complex`] number over one of them.
//!
//! # Design
//!
//! - The length is a const generic parameter. Element-wise operations between vectors of
//!   different lengths do not compile. Run-time sized input (slices, element lists) is checked
//!   and rejected with an [`Error`].
//! - Operations mixing element types [promote][promote] their operands to a common type, the same
//!   way for every operation: `vec2(1, 2).add(vec2(0.5, 0.5))` is a `Vector<f64, 2>`.
//! - Vectors are plain [`Copy`] values. Operations never modify their operands, except for the
//!   assigning operators and the explicit element setters.
//! - Anything that can fail on valid-looking input (normalizing a zero vector, a cross product
//!   outside of 3 dimensions, out-of-range indices) returns a [`Result`] instead of panicking.
//!   Arithmetic itself follows the semantics of the element type: floating-point division by
//!   zero yields infinities, integer division by zero panics.
//!
//! The [`geometry`] module builds angles, projections, areas and interpolation on top of the
//! vector operations. [`approx`] provides tolerance-based comparisons.
//!
//! # Logging
//!
//! Decisions made for degenerate input (for example, the angle involving a zero vector) are
//! reported at the `trace` level through the [`log`] crate.
//!
//! # Examples
//!
//! ```
//! use firefly::*;
//!
//! let v1 = vec2(6, 8);
//! let v2 = vec2(-8, 6);
//! assert_eq!(v1 + v2, [-2, 14]);
//! assert_eq!(v1.norm(), 10.0);
//! assert!(geometry::are_orthogonal(v1, v2));
//!
//! let unit = v1.to_normalized()?;
//! assert!(unit.is_normalized());
//! assert_eq!(unit.view_with_precision(2), "[0.60, 0.80]");
//! # Ok::<_, Error>(())
//! ```

pub mod approx;
mod error;
pub mod geometry;
mod options;
pub mod promote;
mod traits;
mod vector;

pub use num_complex::Complex;

pub use error::*;
pub use options::*;
pub use promote::{Promote, Promoted};
pub use traits::*;
pub use vector::*;
