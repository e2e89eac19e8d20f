//! Implementations of `std::ops`.
//!
//! All operators delegate to the named methods on [`Vector`], and promote their operands the
//! same way.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use num_complex::Complex;

use crate::{
    approx::ApproxEq,
    promote::{self, Promote, Promoted},
    Element, Scalar,
};

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

// More general impl than what the derive generates.
impl<T, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T, const N: usize> Eq for Vector<T, N> where T: Eq {}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U, const N: usize> PartialEq<Vector<U, N>> for [T; N]
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        *self == other.0
    }
}

/// Slices of a different length compare unequal.
impl<T, U, const N: usize> PartialEq<[U]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U, const N: usize> PartialEq<&[U]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.0.eq(*other)
    }
}

impl<T, const N: usize> ApproxEq for Vector<T, N>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.0.abs_diff_eq(&other.0, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.0.rel_diff_eq(&other.0, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.0.ulps_diff_eq(&other.0, ulps_tolerance)
    }
}

/// Element-wise negation.
impl<T: Element, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

/// Element-wise addition, see [`Vector::add`].
impl<T, U, const N: usize> Add<Vector<U, N>> for Vector<T, N>
where
    T: Promote<U>,
    U: Element,
{
    type Output = Vector<Promoted<T, U>, N>;

    fn add(self, rhs: Vector<U, N>) -> Self::Output {
        Vector::add(self, rhs)
    }
}

/// Element-wise subtraction, see [`Vector::subtract`].
impl<T, U, const N: usize> Sub<Vector<U, N>> for Vector<T, N>
where
    T: Promote<U>,
    U: Element,
{
    type Output = Vector<Promoted<T, U>, N>;

    fn sub(self, rhs: Vector<U, N>) -> Self::Output {
        self.subtract(rhs)
    }
}

// The assigning forms keep the type of the left-hand side, so they only accept right-hand sides
// that promote to it.

/// Element-wise addition.
impl<T, U, const N: usize> AddAssign<Vector<U, N>> for Vector<T, N>
where
    T: Promote<U, Output = T>,
    U: Element,
{
    fn add_assign(&mut self, rhs: Vector<U, N>) {
        *self = Vector::add(*self, rhs);
    }
}

/// Element-wise subtraction.
impl<T, U, const N: usize> SubAssign<Vector<U, N>> for Vector<T, N>
where
    T: Promote<U, Output = T>,
    U: Element,
{
    fn sub_assign(&mut self, rhs: Vector<U, N>) {
        *self = self.subtract(rhs);
    }
}

// NB: there is no vector-vector `Mul`, since it is unclear whether it should compute the dot
// product or an element-wise product. A generic `Mul<U> for Vector<T, N>` would also overlap with
// any such impl, so the scalar impls below are generated per scalar type instead.

macro_rules! vector_scalar_ops {
    ($(impl<$($param:ident: $bound:path),*> for $scalar:ty;)+) => {
        $(
            /// Adds a scalar to each element.
            impl<T, $($param: $bound,)* const N: usize> Add<$scalar> for Vector<T, N>
            where
                T: Promote<$scalar>,
            {
                type Output = Vector<Promoted<T, $scalar>, N>;

                fn add(self, rhs: $scalar) -> Self::Output {
                    self.add_scalar(rhs)
                }
            }

            /// Subtracts a scalar from each element.
            impl<T, $($param: $bound,)* const N: usize> Sub<$scalar> for Vector<T, N>
            where
                T: Promote<$scalar>,
            {
                type Output = Vector<Promoted<T, $scalar>, N>;

                fn sub(self, rhs: $scalar) -> Self::Output {
                    self.subtract_scalar(rhs)
                }
            }

            /// Vector-Scalar multiplication (scaling).
            impl<T, $($param: $bound,)* const N: usize> Mul<$scalar> for Vector<T, N>
            where
                T: Promote<$scalar>,
            {
                type Output = Vector<Promoted<T, $scalar>, N>;

                fn mul(self, rhs: $scalar) -> Self::Output {
                    self.scale(rhs)
                }
            }

            /// Vector-Scalar division.
            impl<T, $($param: $bound,)* const N: usize> Div<$scalar> for Vector<T, N>
            where
                T: Promote<$scalar>,
            {
                type Output = Vector<Promoted<T, $scalar>, N>;

                fn div(self, rhs: $scalar) -> Self::Output {
                    self.divide(rhs)
                }
            }

            impl<T, $($param: $bound,)* const N: usize> AddAssign<$scalar> for Vector<T, N>
            where
                T: Promote<$scalar, Output = T>,
            {
                fn add_assign(&mut self, rhs: $scalar) {
                    *self = self.add_scalar(rhs);
                }
            }

            impl<T, $($param: $bound,)* const N: usize> SubAssign<$scalar> for Vector<T, N>
            where
                T: Promote<$scalar, Output = T>,
            {
                fn sub_assign(&mut self, rhs: $scalar) {
                    *self = self.subtract_scalar(rhs);
                }
            }

            impl<T, $($param: $bound,)* const N: usize> MulAssign<$scalar> for Vector<T, N>
            where
                T: Promote<$scalar, Output = T>,
            {
                fn mul_assign(&mut self, rhs: $scalar) {
                    *self = self.scale(rhs);
                }
            }

            impl<T, $($param: $bound,)* const N: usize> DivAssign<$scalar> for Vector<T, N>
            where
                T: Promote<$scalar, Output = T>,
            {
                fn div_assign(&mut self, rhs: $scalar) {
                    *self = self.divide(rhs);
                }
            }
        )+
    };
}

vector_scalar_ops! {
    impl<> for i32;
    impl<> for i64;
    impl<> for f32;
    impl<> for f64;
    impl<C: Scalar> for Complex<C>;
}

// `scalar / vector` is left out: element-wise reciprocals are rarely what is wanted.
macro_rules! scalar_vector_ops {
    ($($scalar:ty),+) => {
        $(
            /// Adds the scalar to each element.
            impl<T: Element, const N: usize> Add<Vector<T, N>> for $scalar
            where
                $scalar: Promote<T>,
            {
                type Output = Vector<Promoted<$scalar, T>, N>;

                fn add(self, rhs: Vector<T, N>) -> Self::Output {
                    rhs.map(|elem| {
                        let (s, e) = promote::pair(self, elem);
                        s + e
                    })
                }
            }

            /// Subtracts each element from the scalar, which is the same as `(-rhs) + self`.
            impl<T: Element, const N: usize> Sub<Vector<T, N>> for $scalar
            where
                $scalar: Promote<T>,
            {
                type Output = Vector<Promoted<$scalar, T>, N>;

                fn sub(self, rhs: Vector<T, N>) -> Self::Output {
                    rhs.map(|elem| {
                        let (s, e) = promote::pair(self, elem);
                        s - e
                    })
                }
            }

            /// Scalar-Vector multiplication (scaling).
            impl<T: Element, const N: usize> Mul<Vector<T, N>> for $scalar
            where
                $scalar: Promote<T>,
            {
                type Output = Vector<Promoted<$scalar, T>, N>;

                fn mul(self, rhs: Vector<T, N>) -> Self::Output {
                    rhs.map(|elem| {
                        let (s, e) = promote::pair(self, elem);
                        s * e
                    })
                }
            }
        )+
    };
}

scalar_vector_ops!(i32, i64, f32, f64);
