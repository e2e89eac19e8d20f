//! Numeric capability traits for vector elements.
//!
//! The hierarchy is [`Element`] (anything a [`Vector`][crate::Vector] may hold) ⊃ [`Scalar`] (real
//! arithmetic types) ⊃ [`Float`] (floating-point types). Complex numbers over a [`Scalar`] are
//! [`Element`]s, but not [`Scalar`]s.

use std::{fmt, ops};

use num_complex::Complex;

use crate::approx::{ApproxEq, DefaultTolerances};

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// A trait for numeric types that support basic arithmetic operations.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// The floating-point type used for the magnitude of an [`Element`].
pub type NormOf<T> = <<T as Element>::Component as Scalar>::Float;

/// Types that can be stored in a [`Vector`][crate::Vector].
///
/// This is implemented for the real [`Scalar`] types `i32`, `i64`, `f32` and `f64`, and for
/// [`Complex`] numbers over any of them.
pub trait Element: Number + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// The real type of each component. For real types, this is `Self`.
    type Component: Scalar;

    /// Returns the squared modulus `|self|²` as a floating-point value.
    ///
    /// For real numbers this is `self * self`, for complex numbers `re² + im²`.
    fn modulus_squared(self) -> NormOf<Self>;
}

/// Real arithmetic element types.
pub trait Scalar: Element<Component = Self> + num_traits::Num + PartialOrd {
    /// The floating-point type that magnitudes of this type are computed in.
    ///
    /// Integers use [`f64`], floating-point types use themselves.
    type Float: Float;

    fn to_float(self) -> Self::Float;

    /// Converts from an [`f64`] with the semantics of an `as` cast (integers truncate towards zero
    /// and saturate).
    fn from_f64(value: f64) -> Self;

    fn to_f64(self) -> f64;
}

/// Floating-point element types.
pub trait Float: Scalar<Float = Self> + Sqrt + ApproxEq<Tolerance = Self> + DefaultTolerances {}

macro_rules! scalar_impls {
    ($($ty:ty => $float:ty, $zero:literal, $one:literal;)+) => {
        $(
            impl Zero for $ty {
                const ZERO: Self = $zero;
            }

            impl One for $ty {
                const ONE: Self = $one;
            }

            impl Element for $ty {
                type Component = Self;

                #[inline]
                fn modulus_squared(self) -> $float {
                    let f = self as $float;
                    f * f
                }
            }

            impl Scalar for $ty {
                type Float = $float;

                #[inline]
                fn to_float(self) -> $float {
                    self as $float
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $ty
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )+
    };
}

scalar_impls! {
    i32 => f64, 0, 1;
    i64 => f64, 0, 1;
    f32 => f32, 0.0, 1.0;
    f64 => f64, 0.0, 1.0;
}

impl<T: Zero> Zero for Complex<T> {
    const ZERO: Self = Complex {
        re: T::ZERO,
        im: T::ZERO,
    };
}

impl<T: Zero + One> One for Complex<T> {
    const ONE: Self = Complex {
        re: T::ONE,
        im: T::ZERO,
    };
}

impl<S: Scalar> Element for Complex<S> {
    type Component = S;

    #[inline]
    fn modulus_squared(self) -> S::Float {
        let (re, im) = (self.re.to_float(), self.im.to_float());
        re * re + im * im
    }
}

impl Float for f32 {}
impl Float for f64 {}

impl Sqrt for f32 {
    fn sqrt(self) -> Self {
        self.sqrt()
    }
}
impl Sqrt for f64 {
    fn sqrt(self) -> Self {
        self.sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modulus_squared() {
        assert_eq!(3i32.modulus_squared(), 9.0f64);
        assert_eq!((-2.5f32).modulus_squared(), 6.25f32);
        assert_eq!(Complex::new(3.0f64, 4.0).modulus_squared(), 25.0f64);
        assert_eq!(Complex::new(1i64, -2).modulus_squared(), 5.0f64);
    }

    #[test]
    fn complex_identities() {
        assert_eq!(Complex::<f32>::ZERO, Complex::new(0.0, 0.0));
        assert_eq!(Complex::<i32>::ONE, Complex::new(1, 0));
    }

    #[test]
    fn casts() {
        assert_eq!(i32::from_f64(2.9), 2);
        assert_eq!(i32::from_f64(-2.9), -2);
        assert_eq!(7i64.to_float(), 7.0f64);
        assert_eq!(0.5f32.to_f64(), 0.5);
    }
}
