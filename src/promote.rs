//! Type promotion between element types.
//!
//! Whenever two element types meet in an arithmetic operation (vector + vector, vector * scalar,
//! dot products, ...), the result uses their *promoted* type:
//!
//! - Two real types promote to the wider of the two. Integers promote to floating-point types:
//!
//!   | promoted | `i32` | `i64` | `f32` | `f64` |
//!   |---|---|---|---|---|
//!   | **`i32`** | `i32` | `i64` | `f32` | `f64` |
//!   | **`i64`** | `i64` | `i64` | `f32` | `f64` |
//!   | **`f32`** | `f32` | `f32` | `f32` | `f64` |
//!   | **`f64`** | `f64` | `f64` | `f64` | `f64` |
//!
//! - If either side is a [`Complex`] number, the result is a [`Complex`] number over the promoted
//!   component types.
//!
//! The relation is symmetric: `Promoted<T, U>` and `Promoted<U, T>` are always the same type.
//!
//! ```
//! # use firefly::*;
//! use num_complex::Complex;
//!
//! let v: Vector<f64, 2> = vec2(1i32, 2).add(vec2(0.5f64, 0.5));
//! let w: Vector<Complex<f32>, 2> = vec2(1i32, 2).scale(Complex::new(0.0f32, 1.0));
//! assert_eq!(v, [1.5, 2.5]);
//! assert_eq!(w, [Complex::new(0.0, 1.0), Complex::new(0.0, 2.0)]);
//! ```

use num_complex::Complex;

use crate::{Element, Zero};

/// Promotion of `Self` and `Rhs` to a common element type.
pub trait Promote<Rhs: Element>: Element {
    /// The common type of `Self` and `Rhs`.
    type Output: Element;

    /// Converts a left-hand operand to the common type.
    fn promote(self) -> <Self as Promote<Rhs>>::Output;

    /// Converts a right-hand operand to the common type.
    fn promote_rhs(rhs: Rhs) -> <Self as Promote<Rhs>>::Output;
}

/// The common element type of `T` and `U`.
pub type Promoted<T, U> = <T as Promote<U>>::Output;

/// Converts both operands to their common type.
#[inline]
pub fn pair<T: Promote<U>, U: Element>(lhs: T, rhs: U) -> (Promoted<T, U>, Promoted<T, U>) {
    (lhs.promote(), T::promote_rhs(rhs))
}

// Each entry generates the real pairing, and the three pairings involving complex numbers over the
// same component types. A complex result keeps the real operand as its real part.
macro_rules! promote {
    ($($lhs:ty, $rhs:ty => $out:ty;)+) => {
        $(
            impl Promote<$rhs> for $lhs {
                type Output = $out;

                #[inline]
                fn promote(self) -> $out {
                    self as $out
                }

                #[inline]
                fn promote_rhs(rhs: $rhs) -> $out {
                    rhs as $out
                }
            }

            impl Promote<Complex<$rhs>> for $lhs {
                type Output = Complex<$out>;

                #[inline]
                fn promote(self) -> Complex<$out> {
                    Complex::new(self as $out, <$out as Zero>::ZERO)
                }

                #[inline]
                fn promote_rhs(rhs: Complex<$rhs>) -> Complex<$out> {
                    Complex::new(rhs.re as $out, rhs.im as $out)
                }
            }

            impl Promote<$rhs> for Complex<$lhs> {
                type Output = Complex<$out>;

                #[inline]
                fn promote(self) -> Complex<$out> {
                    Complex::new(self.re as $out, self.im as $out)
                }

                #[inline]
                fn promote_rhs(rhs: $rhs) -> Complex<$out> {
                    Complex::new(rhs as $out, <$out as Zero>::ZERO)
                }
            }

            impl Promote<Complex<$rhs>> for Complex<$lhs> {
                type Output = Complex<$out>;

                #[inline]
                fn promote(self) -> Complex<$out> {
                    Complex::new(self.re as $out, self.im as $out)
                }

                #[inline]
                fn promote_rhs(rhs: Complex<$rhs>) -> Complex<$out> {
                    Complex::new(rhs.re as $out, rhs.im as $out)
                }
            }
        )+
    };
}

promote! {
    i32, i32 => i32;
    i32, i64 => i64;
    i32, f32 => f32;
    i32, f64 => f64;

    i64, i32 => i64;
    i64, i64 => i64;
    i64, f32 => f32;
    i64, f64 => f64;

    f32, i32 => f32;
    f32, i64 => f32;
    f32, f32 => f32;
    f32, f64 => f64;

    f64, i32 => f64;
    f64, i64 => f64;
    f64, f32 => f64;
    f64, f64 => f64;
}

#[cfg(test)]
mod tests {
    use std::any::TypeId;

    use super::*;

    fn promoted<T: Promote<U>, U: Element>() -> TypeId {
        TypeId::of::<Promoted<T, U>>()
    }

    fn assert_symmetric<T: Promote<U>, U: Promote<T>>() {
        assert_eq!(promoted::<T, U>(), promoted::<U, T>());
    }

    #[test]
    fn real() {
        assert_eq!(promoted::<i32, i32>(), TypeId::of::<i32>());
        assert_eq!(promoted::<i32, i64>(), TypeId::of::<i64>());
        assert_eq!(promoted::<i32, f32>(), TypeId::of::<f32>());
        assert_eq!(promoted::<i64, f32>(), TypeId::of::<f32>());
        assert_eq!(promoted::<f32, f64>(), TypeId::of::<f64>());
    }

    #[test]
    fn complex() {
        assert_eq!(
            promoted::<i32, Complex<f32>>(),
            TypeId::of::<Complex<f32>>()
        );
        assert_eq!(
            promoted::<Complex<i32>, f64>(),
            TypeId::of::<Complex<f64>>()
        );
        assert_eq!(
            promoted::<Complex<f32>, Complex<i64>>(),
            TypeId::of::<Complex<f32>>()
        );
        assert_eq!(
            promoted::<Complex<i32>, Complex<i32>>(),
            TypeId::of::<Complex<i32>>()
        );
    }

    #[test]
    fn symmetric() {
        assert_symmetric::<i32, f64>();
        assert_symmetric::<i64, f32>();
        assert_symmetric::<f32, Complex<f64>>();
        assert_symmetric::<Complex<i32>, i64>();
        assert_symmetric::<Complex<f32>, Complex<i32>>();
    }

    #[test]
    fn values() {
        assert_eq!(pair(3i32, 0.5f32), (3.0f32, 0.5f32));
        assert_eq!(pair(2i64, 7i32), (2i64, 7i64));
        assert_eq!(
            pair(Complex::new(1i32, 2), 3.5f64),
            (Complex::new(1.0, 2.0), Complex::new(3.5, 0.0))
        );
        assert_eq!(
            pair(4.0f32, Complex::new(1i32, -1)),
            (Complex::new(4.0f32, 0.0), Complex::new(1.0f32, -1.0))
        );
    }
}
