//! Approximate equality of floating-point values, complex numbers and vectors.
//!
//! Exact `==` is the equality [`Vector`][crate::Vector] uses. Results of floating-point
//! computations (normalization, projection, rotation) usually need a tolerance instead, which is
//! what [`ApproxEq`] and the [`assert_approx_eq!`][crate::assert_approx_eq] macro provide.

mod impls;

use std::{fmt, panic::Location};

/// Types that can be compared for *approximate equality*.
///
/// Compound types (complex numbers, arrays, vectors) are approximately equal if all of their
/// components are.
///
/// For background on the trade-offs between the comparison methods, see:
/// <https://randomascii.wordpress.com/2012/02/25/comparing-floating-point-numbers-2012-edition/>
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// Type of the tolerance for absolute and relative comparisons ([`f32`] or [`f64`]).
    type Tolerance: DefaultTolerances + Copy + fmt::Debug;

    /// Returns whether `|self - other| <= abs_tolerance`.
    fn abs_diff_eq(&self, other: &Rhs, abs_tolerance: Self::Tolerance) -> bool;

    /// Returns whether `|self - other| <= max(|self|, |other|) * rel_tolerance`.
    fn rel_diff_eq(&self, other: &Rhs, rel_tolerance: Self::Tolerance) -> bool;

    /// Returns whether at most `ulps_tolerance` representable values lie between `self` and
    /// `other`.
    ///
    /// `NaN` never compares equal. `-0.0` and `+0.0` always compare equal, other values with
    /// differing signs never do.
    fn ulps_diff_eq(&self, other: &Rhs, ulps_tolerance: u32) -> bool;
}

/// Default tolerances used when an assertion does not configure any.
pub trait DefaultTolerances {
    const DEFAULT_ABS_TOLERANCE: Self;
    const DEFAULT_REL_TOLERANCE: Self;
    const DEFAULT_ULPS_TOLERANCE: u32;
}

macro_rules! default_tolerances {
    ($($ty:ty),+) => {
        $(
            impl DefaultTolerances for $ty {
                const DEFAULT_ABS_TOLERANCE: Self = <$ty>::EPSILON;
                const DEFAULT_REL_TOLERANCE: Self = <$ty>::EPSILON;
                const DEFAULT_ULPS_TOLERANCE: u32 = 4;
            }
        )+
    };
}

default_tolerances!(f32, f64);

/// The comparisons an approximate assertion performs.
///
/// Values match if *any* of the configured comparisons accepts them. A comparison with nothing
/// configured falls back to [`DEFAULT_ABS_TOLERANCE`] or [`DEFAULT_REL_TOLERANCE`].
///
/// [`DEFAULT_ABS_TOLERANCE`]: DefaultTolerances::DEFAULT_ABS_TOLERANCE
/// [`DEFAULT_REL_TOLERANCE`]: DefaultTolerances::DEFAULT_REL_TOLERANCE
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison<Tol> {
    pub abs: Option<Tol>,
    pub rel: Option<Tol>,
    pub ulps: Option<u32>,
}

impl<Tol> Default for Comparison<Tol> {
    fn default() -> Self {
        Self {
            abs: None,
            rel: None,
            ulps: None,
        }
    }
}

impl<Tol: DefaultTolerances + Copy> Comparison<Tol> {
    fn is_configured(&self) -> bool {
        self.abs.is_some() || self.rel.is_some() || self.ulps.is_some()
    }

    /// Returns the comparison that is actually performed, filling in the defaults if nothing was
    /// configured.
    pub fn effective(self) -> Self {
        if self.is_configured() {
            self
        } else {
            Self {
                abs: Some(Tol::DEFAULT_ABS_TOLERANCE),
                rel: Some(Tol::DEFAULT_REL_TOLERANCE),
                ulps: None,
            }
        }
    }

    /// Returns whether `left` and `right` match under this comparison.
    pub fn matches<T>(&self, left: &T, right: &T) -> bool
    where
        T: ApproxEq<Tolerance = Tol> + ?Sized,
    {
        let this = self.effective();
        this.abs.map_or(false, |abs| left.abs_diff_eq(right, abs))
            || this.rel.map_or(false, |rel| left.rel_diff_eq(right, rel))
            || this.ulps.map_or(false, |ulps| left.ulps_diff_eq(right, ulps))
    }
}

/// Assertion guard returned by [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne].
///
/// The assertion is checked when the guard is dropped, using the [`Comparison`] built up by
/// [`Asserter::abs`], [`Asserter::rel`] and [`Asserter::ulps`].
pub struct Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    left: &'a T,
    right: &'a T,
    expect_match: bool,
    comparison: Comparison<T::Tolerance>,
    // `#[track_caller]` has no effect on `drop`, so the caller is recorded on creation.
    location: &'static Location<'static>,
    msg: Option<fmt::Arguments<'a>>,
}

impl<'a, T> Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    #[doc(hidden)]
    #[track_caller]
    pub fn new(
        left: &'a T,
        right: &'a T,
        expect_match: bool,
        msg: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            expect_match,
            comparison: Comparison::default(),
            location: Location::caller(),
            msg,
        }
    }

    /// Accepts values whose absolute difference is at most `abs`.
    ///
    /// Works well near zero, including for values with opposing signs.
    pub fn abs(&mut self, abs: T::Tolerance) -> &mut Self {
        self.comparison.abs = Some(abs);
        self
    }

    /// Accepts values whose difference is at most `rel` times the larger magnitude.
    ///
    /// Any non-zero value only matches 0.0 with a relative tolerance of at least 1.0, so prefer
    /// [`Asserter::abs`] near zero.
    pub fn rel(&mut self, rel: T::Tolerance) -> &mut Self {
        self.comparison.rel = Some(rel);
        self
    }

    /// Accepts values with at most `ulps` representable values between them.
    pub fn ulps(&mut self, ulps: u32) -> &mut Self {
        self.comparison.ulps = Some(ulps);
        self
    }
}

impl<'a, T> Drop for Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    fn drop(&mut self) {
        if self.comparison.matches(self.left, self.right) == self.expect_match {
            return;
        }

        let relation = if self.expect_match { "≈" } else { "≉" };
        let comparison = self.comparison.effective();
        let mut tolerances = Vec::new();
        if let Some(abs) = comparison.abs {
            tolerances.push(format!("abs {abs:?}"));
        }
        if let Some(rel) = comparison.rel {
            tolerances.push(format!("rel {rel:?}"));
        }
        if let Some(ulps) = comparison.ulps {
            tolerances.push(format!("ulps {ulps}"));
        }

        let (left, right, location) = (self.left, self.right, self.location);
        let tolerances = tolerances.join(", ");
        match self.msg {
            Some(msg) => panic!(
                "assertion `left {relation} right` failed at {location}: {msg}\n  left: {left:?}\n right: {right:?}\n  with: {tolerances}"
            ),
            None => panic!(
                "assertion `left {relation} right` failed at {location}\n  left: {left:?}\n right: {right:?}\n  with: {tolerances}"
            ),
        }
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! __approx_asserter {
    ($expect:literal, $lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $expect, ::core::option::Option::None)
    };
    ($expect:literal, $lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $expect,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

/// Asserts that two expressions are approximately equal (using [`ApproxEq`]).
///
/// Works like [`assert_eq!`], but returns an [`Asserter`] that can configure the comparison.
///
/// # Examples
///
/// ```
/// # use firefly::*;
/// let unit = vec2(6.0f64, 8.0).to_normalized().unwrap();
/// assert_approx_eq!(unit, vec2(0.6, 0.8));
/// assert_approx_eq!(unit.norm(), 1.0).ulps(2);
/// assert_approx_eq!(100.0, 99.0).rel(0.01);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($($args:tt)+) => {
        $crate::__approx_asserter!(true, $($args)+)
    };
}

/// Asserts that two expressions are *not* approximately equal (using [`ApproxEq`]).
///
/// # Examples
///
/// ```
/// # use firefly::*;
/// assert_approx_ne!(vec2(1.0, 0.0), vec2(0.0, 1.0));
/// assert_approx_ne!(100.0, 99.0).abs(0.5);
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($($args:tt)+) => {
        $crate::__approx_asserter!(false, $($args)+)
    };
}

#[cfg(test)]
mod tests {
    use num_complex::Complex;

    use super::Comparison;

    #[test]
    #[should_panic(expected = "assertion `left ≉ right` failed")]
    fn fail_ne() {
        assert_approx_ne!(1.0, 1.0);
    }

    #[test]
    #[should_panic(expected = "assertion `left ≈ right` failed")]
    fn fail_eq() {
        assert_approx_eq!(1.0, 2.0);
    }

    #[test]
    #[should_panic(expected = "angle is off")]
    fn assertion_message() {
        assert_approx_eq!(1.0, 2.0, "angle is off");
    }

    #[test]
    #[should_panic(expected = "with: abs 0.001")]
    fn reports_tolerances() {
        assert_approx_eq!(1.0, 1.5).abs(0.001);
    }

    #[test]
    fn default_comparison() {
        let unset = Comparison::<f64>::default();
        assert_eq!(
            unset.effective(),
            Comparison {
                abs: Some(f64::EPSILON),
                rel: Some(f64::EPSILON),
                ulps: None,
            }
        );
        assert!(unset.matches(&(0.1f64 + 0.2), &0.3));
        assert!(!unset.matches(&1.0f64, &1.001));

        let ulps = Comparison::<f32> {
            ulps: Some(1),
            ..Comparison::default()
        };
        assert_eq!(ulps.effective(), ulps);
        assert!(ulps.matches(&1.0f32, &(1.0 + f32::EPSILON)));
        assert!(!ulps.matches(&1.0f32, &(1.0 + 2.0 * f32::EPSILON)));
    }

    #[test]
    fn rel() {
        assert_approx_eq!(1.0, 1.001).rel(0.01);
        assert_approx_eq!(1.0, -1.0).rel(2.0);
        assert_approx_eq!(0.0, 0.00001).rel(1.0);
    }

    #[test]
    fn epsilon() {
        assert_approx_eq!(1.0, 1.0 + f32::EPSILON);
        assert_approx_eq!(1.0, 1.0 + f32::EPSILON).ulps(1);
        assert_approx_ne!(1.0, 1.0 + f32::EPSILON).ulps(0);
    }

    #[test]
    fn nan() {
        assert_approx_ne!(f64::NAN, f64::NAN).abs(1.0);
        assert_approx_ne!(f64::NAN, f64::NAN).rel(1.0);
        assert_approx_ne!(f64::NAN, f64::NAN).ulps(100);
        assert_approx_ne!(f32::NAN, 0.0).abs(1.0);
    }

    #[test]
    fn inf() {
        assert_approx_eq!(f64::INFINITY, f64::INFINITY).abs(0.0);
        assert_approx_ne!(f64::INFINITY, f64::NEG_INFINITY).abs(f64::MAX);
        assert_approx_ne!(f64::INFINITY, f64::MAX).abs(10000.0);
        assert_approx_eq!(f64::MAX, f64::INFINITY).ulps(1);
    }

    #[test]
    fn complex() {
        let a = Complex::new(0.1 + 0.2, 1.0);
        assert_approx_eq!(a, Complex::new(0.3, 1.0));
        assert_approx_ne!(a, Complex::new(0.3, 1.1));
        assert_approx_eq!(a, Complex::new(0.3, 1.1)).abs(0.2);
        assert_approx_ne!(Complex::new(f32::NAN, 0.0), Complex::new(f32::NAN, 0.0));
    }

    #[test]
    fn arrays() {
        assert_approx_eq!([0.1 + 0.2, 2.0], [0.3, 2.0]);
        assert_approx_ne!([0.1 + 0.2, 2.0], [0.3, 2.5]);
    }
}
