use std::{array, fmt, slice};

use num_complex::Complex;

use crate::{
    approx::ApproxEq,
    error::{Error, Result},
    options::{ComplexToReal, Tolerances},
    promote::{self, Promote, Promoted},
    traits::{Element, Number, One, Scalar, Sqrt, Zero},
    NormOf,
};

mod cast;
mod ops;

pub use cast::AsType;

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;

/// An `N`-element vector storing elements of type `T`.
///
/// `T` is any [`Element`]: one of the real types `i32`, `i64`, `f32`, `f64`, or a
/// [`Complex`] number over one of them. Operations mixing element types produce vectors of the
/// [promoted][crate::promote] type.
///
/// # Construction
///
/// - [`Vector::ZERO`] (or [`Vector::zero`], or [`Default`]) is a vector containing all-zeroes.
/// - [`Vector::splat`] copies the given value into each element.
/// - [`Vector::from_list`] takes up to `N` elements and zero-fills the rest.
/// - [`Vector::from_fn`] invokes a closure with the index of each element.
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors from
///   provided values, and arrays of length `N` convert via [`From`]. Slices convert via
///   [`TryFrom`] if their length is exactly `N`.
/// - For vectors with 2 to 4 dimensions, `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W` are
///   the unit vectors along each axis.
///
/// # Element Access
///
/// - The [`Index`] and [`IndexMut`] impls work just like on arrays, and panic when out of bounds.
/// - [`Vector::at`], [`Vector::at_mut`] and [`Vector::set`] are their checked counterparts and
///   return [`Error::Index`] instead.
/// - [`Vector::as_array`], [`Vector::as_slice`] and [`Vector::into_array`] expose the elements
///   directly, [`Vector::iter`] iterates over them.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented when `T` implements them.
///
/// # Arithmetic
///
/// The named methods ([`Vector::add`], [`Vector::subtract`], [`Vector::scale`],
/// [`Vector::divide`], [`Vector::negate`], [`Vector::dot`], ...) define the semantics. The
/// operators `+`, `-`, `*`, `/` and their assigning forms delegate to them.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    pub const ZERO: Self = Self([T::ZERO; N]);

    /// Returns a vector with each element initialized to 0.
    ///
    /// Equivalent to [`Vector::ZERO`].
    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use firefly::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use firefly::*;
    /// let v = Vector::from_fn(|i| i as i64 * 10);
    /// assert_eq!(v, vec3(0, 10, 20));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Creates a vector from a list of at most `N` elements.
    ///
    /// Elements missing from the end of `list` are set to 0. A `list` with more than `N`
    /// elements is rejected with [`Error::Construction`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use firefly::*;
    /// let v = Vector::<i32, 4>::from_list(&[1, 2])?;
    /// assert_eq!(v, [1, 2, 0, 0]);
    ///
    /// let err = Vector::<i32, 2>::from_list(&[1, 2, 3]).unwrap_err();
    /// assert_eq!(err, Error::Construction { capacity: 2, actual: 3 });
    /// # Ok::<_, Error>(())
    /// ```
    pub fn from_list(list: &[T]) -> Result<Self>
    where
        T: Zero + Copy,
    {
        if list.len() > N {
            log::trace!("rejecting {}-element list for a {N}-element vector", list.len());
            return Err(Error::Construction {
                capacity: N,
                actual: list.len(),
            });
        }

        Ok(Self::from_fn(|i| list.get(i).copied().unwrap_or(T::ZERO)))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use firefly::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use firefly::*;
    /// let v = vec2(1, 2).zip(vec2(0.5, 1.5));
    /// assert_eq!(v, vec2((1, 0.5), (2, 1.5)));
    /// ```
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut other = other.0.into_iter();
        Vector(self.0.map(|elem| match other.next() {
            Some(o) => (elem, o),
            None => unreachable!("both arrays have length {N}"),
        }))
    }

    /// Returns the number of elements, `N`.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns whether this vector has no elements at all (`N == 0`).
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use firefly::*;
    /// assert_eq!(vec3(1, 2, 3).as_slice(), &[1, 2, 3]);
    /// ```
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns an iterator over the elements.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Returns an iterator over mutable references to the elements.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.0.iter_mut()
    }

    /// Returns the element at `index`, or [`Error::Index`] if `index >= N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use firefly::*;
    /// let v = vec2(4, 5);
    /// assert_eq!(v.at(1), Ok(5));
    /// assert_eq!(v.at(2), Err(Error::Index { index: 2, len: 2 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<T>
    where
        T: Copy,
    {
        self.0
            .get(index)
            .copied()
            .ok_or(Error::Index { index, len: N })
    }

    /// Returns a mutable reference to the element at `index`, or [`Error::Index`] if
    /// `index >= N`.
    ///
    /// Vectors never grow, so this cannot be used to append elements.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        self.0.get_mut(index).ok_or(Error::Index { index, len: N })
    }

    /// Overwrites the element at `index`, or returns [`Error::Index`] if `index >= N`.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        *self.at_mut(index)? = value;
        Ok(())
    }

    /// Returns whether `self` has exactly the same elements as `other`.
    ///
    /// `other` may be another [`Vector`], an array, or a slice. Differing lengths make the
    /// operands unequal, but are not an error.
    ///
    /// # Examples
    ///
    /// ```
    /// # use firefly::*;
    /// let v = vec2(1, 2);
    /// assert!(v.equals(&vec2(1, 2)));
    /// assert!(!v.equals(&[1, 2, 3]));
    /// assert!(!v.equals(&[] as &[i32]));
    /// ```
    pub fn equals<R>(&self, other: &R) -> bool
    where
        T: PartialEq,
        R: AsRef<[T]> + ?Sized,
    {
        self.as_slice() == other.as_ref()
    }
}

impl<T: Number, const N: usize> Vector<T, N> {
    /// Dot product of two vectors of the same element type.
    pub(crate) fn inner(self, other: Self) -> T {
        self.0
            .into_iter()
            .zip(other.0)
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }
}

impl<T: Element, const N: usize> Vector<T, N> {
    /// Element-wise addition of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use firefly::*;
    /// assert_eq!(vec2(6, 8).add(vec2(-8, 6)), [-2, 14]);
    /// // `i32` and `f64` promote to `f64`
    /// assert_eq!(vec2(6, 8).add(vec2(0.5, 0.25)), [6.5, 8.25]);
    /// ```
    pub fn add<U: Element>(self, other: Vector<U, N>) -> Vector<Promoted<T, U>, N>
    where
        T: Promote<U>,
    {
        self.zip(other).map(|(a, b)| {
            let (a, b) = promote::pair(a, b);
            a + b
        })
    }

    /// Adds `scalar` to each element.
    pub fn add_scalar<U: Element>(self, scalar: U) -> Vector<Promoted<T, U>, N>
    where
        T: Promote<U>,
    {
        let scalar = T::promote_rhs(scalar);
        self.map(|elem| elem.promote() + scalar)
    }

    /// Element-wise subtraction, defined as adding the negation of `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use firefly::*;
    /// assert_eq!(vec3(1, 2, 3).subtract(vec3(1.5, 1.5, 1.5)), [-0.5, 0.5, 1.5]);
    /// ```
    pub fn subtract<U: Element>(self, other: Vector<U, N>) -> Vector<Promoted<T, U>, N>
    where
        T: Promote<U>,
    {
        self.add(other.negate())
    }

    /// Subtracts `scalar` from each element.
    pub fn subtract_scalar<U: Element>(self, scalar: U) -> Vector<Promoted<T, U>, N>
    where
        T: Promote<U>,
    {
        self.add_scalar(-scalar)
    }

    /// Multiplies each element by `scalar`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use firefly::*;
    /// use num_complex::Complex;
    ///
    /// assert_eq!(vec2(1, -2).scale(3), [3, -6]);
    /// assert_eq!(
    ///     vec2(1, -2).scale(Complex::new(0.0, 1.0)),
    ///     [Complex::new(0.0, 1.0), Complex::new(0.0, -2.0)],
    /// );
    /// ```
    pub fn scale<U: Element>(self, scalar: U) -> Vector<Promoted<T, U>, N>
    where
        T: Promote<U>,
    {
        let scalar = T::promote_rhs(scalar);
        self.map(|elem| elem.promote() * scalar)
    }

    /// Divides each element by `scalar`.
    ///
    /// The division happens in the promoted type and follows its native semantics: floating-point
    /// division by zero yields infinities or NaN, integer division truncates and panics on a zero
    /// divisor.
    ///
    /// # Examples
    ///
    /// ```
    /// # use firefly::*;
    /// assert_eq!(vec2(3, 4).divide(2.0), [1.5, 2.0]);
    /// assert_eq!(vec2(3, 4).divide(2), [1, 2]);
    /// assert!(vec2(1.0f64, -1.0).divide(0.0f64).iter().all(|e| e.is_infinite()));
    /// ```
    pub fn divide<U: Element>(self, scalar: U) -> Vector<Promoted<T, U>, N>
    where
        T: Promote<U>,
    {
        let scalar = T::promote_rhs(scalar);
        self.map(|elem| elem.promote() / scalar)
    }

    /// Negates each element.
    #[inline]
    pub fn negate(self) -> Self {
        self.map(|elem| -elem)
    }

    /// Adds one to each element.
    pub fn increment(self) -> Self {
        self.map(|elem| elem + T::ONE)
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// Complex elements are multiplied without conjugating either side.
    ///
    /// Geometrically, for real vectors the sign of the dot product tells the relative angle of
    /// the two vectors:
    /// - If the dot product is greater than zero, the angle is less than 90°.
    /// - If the dot product is equal to zero, the angle is exactly 90°.
    /// - If the dot product is negative, the angle is greater than 90°.
    ///
    /// # Examples
    ///
    /// ```
    /// # use firefly::*;
    /// use num_complex::Complex;
    ///
    /// assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
    /// assert_eq!(vec2(1, 2).dot(vec2(0.5, 0.5)), 1.5);
    ///
    /// let i = Complex::new(0, 1);
    /// assert_eq!(vec2(i, i).dot(vec2(i, i)), Complex::new(-2, 0));
    /// ```
    pub fn dot<U: Element>(self, other: Vector<U, N>) -> Promoted<T, U>
    where
        T: Promote<U>,
    {
        self.map(T::promote).inner(other.map(T::promote_rhs))
    }

    /// Computes the dot product between `self` and a run-time sized slice.
    ///
    /// Returns [`Error::LengthMismatch`] unless `other` has exactly `N` elements.
    pub fn dot_slice<U: Element>(self, other: &[U]) -> Result<Promoted<T, U>>
    where
        T: Promote<U>,
    {
        let other = Vector::<U, N>::try_from(other)?;
        Ok(self.dot(other))
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both `self` and `other`. Swapping the operands inverts its
    /// direction.
    ///
    /// The cross product only exists for 3-dimensional vectors; any other `N` results in
    /// [`Error::Dimension`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use firefly::*;
    /// let x = Vec3::<i32>::X;
    /// let y = Vec3::<i32>::Y;
    /// let z = Vec3::<i32>::Z;
    /// assert_eq!(x.cross(y)?, z);
    /// assert_eq!(y.cross(x)?, -z);
    ///
    /// assert!(vec2(1, 2).cross(vec2(3, 4)).is_err());
    /// # Ok::<_, Error>(())
    /// ```
    pub fn cross<U: Element>(self, other: Vector<U, N>) -> Result<Vector<Promoted<T, U>, N>>
    where
        T: Promote<U>,
    {
        if N != 3 {
            return Err(Error::Dimension {
                operation: "cross product",
                expected: 3,
                actual: N,
            });
        }

        let a = self.map(T::promote);
        let b = other.map(T::promote_rhs);
        Ok(Vector::from_fn(|i| {
            let (j, k) = ((i + 1) % 3, (i + 2) % 3);
            a[j] * b[k] - a[k] * b[j]
        }))
    }

    /// Returns the Euclidean length of this [`Vector`].
    ///
    /// This is the square root of the sum of each element's squared modulus, which for real
    /// vectors equals `self.dot(self).sqrt()`. The result is always a real floating-point value:
    /// [`f64`] for integer and [`f64`]-based elements, [`f32`] for [`f32`]-based elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use firefly::*;
    /// use num_complex::Complex;
    ///
    /// assert_eq!(vec2(6, 8).norm(), 10.0);
    /// assert_eq!(vec2(Complex::new(3.0, 4.0), Complex::new(0.0, 0.0)).norm(), 5.0);
    /// ```
    pub fn norm(&self) -> NormOf<T> {
        self.0
            .iter()
            .fold(<NormOf<T> as Zero>::ZERO, |acc, elem| acc + elem.modulus_squared())
            .sqrt()
    }

    /// Alias of [`Vector::norm`].
    #[inline]
    pub fn magnitude(&self) -> NormOf<T> {
        self.norm()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// The zero vector has no direction, so it results in [`Error::DegenerateVector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use firefly::*;
    /// let z = vec3(0, 0, 4).to_normalized()?;
    /// assert_eq!(z, vec3(0.0, 0.0, 1.0));
    ///
    /// assert!(Vec3::<f32>::ZERO.to_normalized().is_err());
    /// # Ok::<_, Error>(())
    /// ```
    pub fn to_normalized(self) -> Result<Vector<Promoted<T, NormOf<T>>, N>>
    where
        T: Promote<NormOf<T>>,
    {
        let norm = self.norm();
        if norm == <NormOf<T> as Zero>::ZERO {
            log::trace!("refusing to normalize zero vector {}", self);
            return Err(Error::DegenerateVector {
                operation: "normalize",
            });
        }

        Ok(self.scale(<NormOf<T> as One>::ONE / norm))
    }

    /// Returns the sum of all elements. The empty vector sums to 0.
    pub fn element_sum(&self) -> T {
        self.0.iter().fold(T::ZERO, |acc, &elem| acc + elem)
    }

    /// Returns whether every element is 0. This is trivially true for the empty vector.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&elem| elem == T::ZERO)
    }

    /// Returns whether this vector has a length of 1, within [`Tolerances::DEFAULT_UNIT_NORM`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use firefly::*;
    /// let v = vec2(6, 8);
    /// assert!(!v.is_normalized());
    /// assert!(v.to_normalized()?.is_normalized());
    /// # Ok::<_, Error>(())
    /// ```
    pub fn is_normalized(&self) -> bool {
        self.is_normalized_with(Tolerances::default())
    }

    /// Returns whether this vector has a length of 1, within `tolerances.unit_norm`.
    pub fn is_normalized_with(&self, tolerances: Tolerances) -> bool {
        let tolerance = <NormOf<T> as Scalar>::from_f64(tolerances.unit_norm);
        self.norm().abs_diff_eq(&<NormOf<T> as One>::ONE, tolerance)
    }

    /// Returns whether more elements are 0 than not.
    ///
    /// A vector with as many zero as non-zero elements is not sparse. The empty vector has no
    /// meaningful sparsity and results in [`Error::EmptyVector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use firefly::*;
    /// assert_eq!(vec3(0, 0, 1).is_sparse(), Ok(true));
    /// assert_eq!(vec4(0, 0, 1, 1).is_sparse(), Ok(false));
    /// assert!(Vector::<i32, 0>::ZERO.is_sparse().is_err());
    /// ```
    pub fn is_sparse(&self) -> Result<bool> {
        if N == 0 {
            return Err(Error::EmptyVector {
                property: "sparsity",
            });
        }

        let zeros = self.0.iter().filter(|&&elem| elem == T::ZERO).count();
        Ok(zeros > N - zeros)
    }

    /// Converts each element to the element type `U`.
    ///
    /// Real elements can be converted to any other real type (with the semantics of an `as`
    /// cast) or to a complex type (with an imaginary part of 0). Complex elements can be converted
    /// to other complex types. Converting complex elements to a real type is a lossy choice and
    /// needs [`Vector::as_real_with`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use firefly::*;
    /// use num_complex::Complex;
    ///
    /// assert_eq!(vec2(1.9, -1.9).as_type::<i32>(), [1, -1]);
    /// assert_eq!(vec2(1, 2).as_type::<Complex<f32>>(), [Complex::new(1.0, 0.0), Complex::new(2.0, 0.0)]);
    /// ```
    pub fn as_type<U: Element>(self) -> Vector<U, N>
    where
        T: AsType<U>,
    {
        self.map(T::as_type)
    }

    /// Returns the canonical text form of this vector, `[e0, e1, ..., eN-1]`.
    ///
    /// Equivalent to `self.to_string()`. Floating-point elements use their shortest
    /// representation that parses back to the same value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use firefly::*;
    /// assert_eq!(vec3(1.5, -2.0, 0.1).view(), "[1.5, -2, 0.1]");
    /// assert_eq!(Vector::<f64, 0>::ZERO.view(), "[]");
    /// ```
    pub fn view(&self) -> String {
        self.to_string()
    }

    /// Returns the canonical text form, with floating-point components rendered with `precision`
    /// digits after the decimal point.
    ///
    /// Equivalent to `format!("{:.precision$}", self)`. Integers are unaffected.
    ///
    /// # Examples
    ///
    /// ```
    /// # use firefly::*;
    /// assert_eq!(vec2(1.0 / 3.0, 2.0).view_with_precision(3), "[0.333, 2.000]");
    /// assert_eq!(vec2(1, 2).view_with_precision(3), "[1, 2]");
    /// ```
    pub fn view_with_precision(&self, precision: usize) -> String {
        format!("{:.*}", precision, self)
    }
}

impl<S: Scalar, const N: usize> Vector<Complex<S>, N> {
    /// Converts complex elements to the real element type `U`, using the given conversion
    /// `policy`.
    ///
    /// With [`ComplexToReal::ModulusSquared`], `re² + im²` is computed in the component type and
    /// then converted. With [`ComplexToReal::RealPart`], the imaginary part is discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// # use firefly::*;
    /// use num_complex::Complex;
    ///
    /// let v = vec2(Complex::new(1, 2), Complex::new(3, -4));
    /// assert_eq!(v.as_real_with::<f64>(ComplexToReal::ModulusSquared), [5.0, 25.0]);
    /// assert_eq!(v.as_real_with::<i64>(ComplexToReal::RealPart), [1, 3]);
    /// ```
    pub fn as_real_with<U: Scalar>(self, policy: ComplexToReal) -> Vector<U, N>
    where
        S: AsType<U>,
    {
        self.map(|elem| match policy {
            ComplexToReal::ModulusSquared => (elem.re * elem.re + elem.im * elem.im).as_type(),
            ComplexToReal::RealPart => elem.re.as_type(),
        })
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

/// Converts a slice of exactly `N` elements, or fails with [`Error::LengthMismatch`].
impl<T: Copy, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = Error;

    fn try_from(value: &[T]) -> Result<Self> {
        <[T; N]>::try_from(value)
            .map(Self)
            .map_err(|_| Error::LengthMismatch {
                expected: N,
                actual: value.len(),
            })
    }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut Vector<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter_mut()
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.0).finish()
    }
}

/// Renders `[e0, e1, ..., eN-1]`.
///
/// Formatting options such as the precision are applied to every element.
impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(elem, f)?;
        }
        f.write_str("]")
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsRef<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> AsMut<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T; N] {
        &mut self.0
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use num_complex::Complex;

    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn construction() {
        assert_eq!(Vector::<i32, 3>::zero(), [0, 0, 0]);
        assert_eq!(Vector::<f64, 2>::default(), [0.0, 0.0]);
        assert_eq!(Vector::<i64, 3>::splat(7), [7, 7, 7]);
        assert_eq!(Vector::<i32, 3>::from_list(&[]), Ok(vec3(0, 0, 0)));
        assert_eq!(Vector::<i32, 3>::from_list(&[1, 2, 3]), Ok(vec3(1, 2, 3)));
        assert_eq!(
            Vector::<i32, 1>::from_list(&[1, 2]),
            Err(Error::Construction {
                capacity: 1,
                actual: 2
            })
        );

        let original = vec2(1.5, 2.5);
        let mut copy = original;
        copy[0] = 9.0;
        assert_eq!(original, [1.5, 2.5]);
        assert_eq!(copy, [9.0, 2.5]);
    }

    #[test]
    fn try_from_slice() {
        let slice: &[i32] = &[1, 2, 3];
        assert_eq!(Vector::<i32, 3>::try_from(slice), Ok(vec3(1, 2, 3)));
        assert_eq!(
            Vector::<i32, 2>::try_from(slice),
            Err(Error::LengthMismatch {
                expected: 2,
                actual: 3
            })
        );
        assert_eq!(
            Vector::<i32, 4>::try_from(slice),
            Err(Error::LengthMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn access() {
        let mut v = vec3(1i32, 2, 3);
        assert_eq!(v.len(), 3);
        assert!(!v.is_empty());
        assert!(Vector::<i32, 0>::ZERO.is_empty());

        assert_eq!(v.at(0), Ok(1));
        assert_eq!(v.at(3), Err(Error::Index { index: 3, len: 3 }));
        *v.at_mut(1).unwrap() = 20;
        assert_eq!(v.set(2, 30), Ok(()));
        assert_eq!(v.set(3, 40), Err(Error::Index { index: 3, len: 3 }));
        assert_eq!(v, [1, 20, 30]);

        v.iter_mut().for_each(|elem| *elem += 1);
        assert_eq!(v.iter().copied().collect::<Vec<_>>(), [2, 21, 31]);
        assert_eq!(v.into_iter().sum::<i32>(), 54);
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let v = vec2(1, 2);
        let i = v.len();
        let _ = v[i];
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", Vec4::<f32>::W), "[0, 0, 0, 1]");
        assert_eq!(format!("{:?}", Vec4::<f32>::W), "[0.0, 0.0, 0.0, 1.0]");
        assert_eq!(format!("{:.2}", vec2(1.0 / 3.0, 1.0)), "[0.33, 1.00]");
        assert_eq!(
            vec2(Complex::new(1.0, 2.0), Complex::new(-0.5, -1.0)).view(),
            "[1+2i, -0.5-1i]"
        );
        assert_eq!(Vector::<Complex<i32>, 0>::ZERO.view(), "[]");
        assert_eq!(vec2(0.1 + 0.2, 1.0).view(), "[0.30000000000000004, 1]");
    }

    #[test]
    fn add_sub() {
        let v1 = vec2(6, 8);
        let v2 = vec2(-8, 6);
        assert_eq!(v1.add(v2), [-2, 14]);
        assert_eq!(v1.subtract(v2), [14, 2]);
        assert_eq!(v1.add_scalar(1), [7, 9]);
        assert_eq!(v1.subtract_scalar(0.5), [5.5, 7.5]);
        assert_eq!(v1.increment(), [7, 9]);
        assert_eq!(v1.negate(), [-6, -8]);
    }

    #[test]
    fn mixed_types() {
        let ints = vec3(1i32, 2, 3);
        let longs = vec3(1i64 << 40, 0, 0);
        let floats = vec3(0.5f32, 0.5, 0.5);

        let sum: Vec3<i64> = ints.add(longs);
        assert_eq!(sum, [(1 << 40) + 1, 2, 3]);
        let sum: Vec3<f32> = ints.add(floats);
        assert_eq!(sum, [1.5, 2.5, 3.5]);

        let c = vec3(Complex::new(0, 1), Complex::new(1, 0), Complex::new(0, 0));
        let sum: Vec3<Complex<f32>> = c.add(floats);
        assert_eq!(
            sum,
            [
                Complex::new(0.5, 1.0),
                Complex::new(1.5, 0.0),
                Complex::new(0.5, 0.0)
            ]
        );
    }

    #[test]
    fn scale_divide() {
        assert_eq!(vec3(1, 2, 3).scale(2), [2, 4, 6]);
        assert_eq!(vec3(1, 2, 3).scale(0.5), [0.5, 1.0, 1.5]);
        assert_eq!(vec3(2.0, 4.0, 6.0).divide(2), [1.0, 2.0, 3.0]);
        assert_eq!(vec2(7, -7).divide(2), [3, -3]);

        let nan = vec2(0.0f64, 1.0).divide(0.0f64);
        assert!(nan[0].is_nan());
        assert_eq!(nan[1], f64::INFINITY);
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
        assert_eq!(vec3(1, 3, -5).dot(vec3(1, 3, -5)), 35);

        assert_eq!(Vec2::<f64>::X.dot(Vec2::<f64>::X), 1.0);
        assert_eq!(Vec2::<f64>::X.dot(Vec2::<f64>::Y), 0.0);

        // no conjugation: (1+2i)(3+4i) + (5+6i)(7+8i) = (-5+10i) + (-13+82i)
        let a = vec2(Complex::new(1.0, 2.0), Complex::new(5.0, 6.0));
        let b = vec2(Complex::new(3.0, 4.0), Complex::new(7.0, 8.0));
        assert_eq!(a.dot(b), Complex::new(-18.0, 92.0));
        assert_eq!(a.dot(vec2(1, 1)), Complex::new(6.0, 8.0));
    }

    #[test]
    fn dot_slice() {
        assert_eq!(vec2(1, 2).dot_slice(&[3.0, 4.0]), Ok(11.0));
        assert_eq!(
            vec2(1, 2).dot_slice(&[3, 4, 5]),
            Err(Error::LengthMismatch {
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn cross() {
        assert_eq!(vec3(1, 0, 0).cross(vec3(0, 1, 1)), Ok(vec3(0, -1, 1)));
        assert_eq!(
            vec3(1, 2, 3).cross(vec3(4.0, 5.0, 6.0)),
            Ok(vec3(-3.0, 6.0, -3.0))
        );
        assert_eq!(
            vec2(1, 2).cross(vec2(3, 4)),
            Err(Error::Dimension {
                operation: "cross product",
                expected: 3,
                actual: 2
            })
        );
        assert!(vec4(1, 2, 3, 4).cross(vec4(1, 2, 3, 4)).is_err());
    }

    #[test]
    fn norm() {
        assert_eq!(vec2(6, 8).norm(), 10.0);
        assert_eq!(vec2(3.0f32, 4.0).norm(), 5.0f32);
        assert_eq!(Vector::<i32, 0>::ZERO.norm(), 0.0);
        assert_eq!(
            vec2(Complex::new(1, 1), Complex::new(1, 1)).magnitude(),
            2.0
        );
    }

    #[test]
    fn normalize() {
        let unit = vec2(6i32, 8).to_normalized().unwrap();
        assert_approx_eq!(unit, vec2(0.6, 0.8));
        assert!(unit.is_normalized());
        assert!(!vec2(6, 8).is_normalized());

        let c = vec2(Complex::new(3.0, 0.0), Complex::new(0.0, 4.0))
            .to_normalized()
            .unwrap();
        assert_approx_eq!(c, vec2(Complex::new(0.6, 0.0), Complex::new(0.0, 0.8)));
        assert!(c.is_normalized());

        assert_eq!(
            Vec3::<i32>::ZERO.to_normalized(),
            Err(Error::DegenerateVector {
                operation: "normalize"
            })
        );
    }

    #[test]
    fn predicates() {
        assert!(Vector::<f64, 0>::ZERO.is_zero());
        assert!(vec3(0, 0, 0).is_zero());
        assert!(!vec3(0, 1, 0).is_zero());
        assert!(vec2(Complex::new(0.0, 0.0), Complex::new(0.0, 0.0)).is_zero());

        assert_eq!(vec3(1, 2, 3).element_sum(), 6);
        assert_eq!(Vector::<f32, 0>::ZERO.element_sum(), 0.0);

        assert_eq!(vec4(0, 0, 0, 1).is_sparse(), Ok(true));
        assert_eq!(vec2(0, 1).is_sparse(), Ok(false));
        assert_eq!(vec3(1, 0, 1).is_sparse(), Ok(false));
        assert_eq!(
            Vector::<i32, 0>::ZERO.is_sparse(),
            Err(Error::EmptyVector {
                property: "sparsity"
            })
        );
    }

    #[test]
    fn equality() {
        assert!(vec2(1, 2).equals(&vec2(1, 2)));
        assert!(!vec2(1, 2).equals(&vec2(2, 1)));
        assert!(!vec2(1, 2).equals(&[1]));
        assert!(!vec2(1, 2).equals(&vec![1, 2, 0]));
        assert_eq!(vec2(1, 2), [1, 2]);
        assert_ne!(vec2(0.0, -0.0), [0.0, f64::NAN]);
    }

    #[test]
    fn casts() {
        assert_eq!(vec2(1.5f64, -2.5).as_type::<f32>(), [1.5f32, -2.5]);
        assert_eq!(vec2(3i64, 4).as_type::<i32>(), [3, 4]);

        let c = vec2(Complex::new(1.5f64, 2.0), Complex::new(0.0, -1.0));
        assert_eq!(
            c.as_type::<Complex<f32>>(),
            [Complex::new(1.5f32, 2.0), Complex::new(0.0, -1.0)]
        );
        assert_eq!(
            c.as_real_with::<f64>(ComplexToReal::ModulusSquared),
            [6.25, 1.0]
        );
        assert_eq!(c.as_real_with::<i32>(ComplexToReal::RealPart), [1, 0]);
    }

    #[test]
    fn pod() {
        let vecs = [vec2(1.0f32, 2.0), vec2(3.0, 4.0)];
        let floats: &[f32] = bytemuck::cast_slice(&vecs);
        assert_eq!(floats, [1.0, 2.0, 3.0, 4.0]);

        // complex elements are laid out as interleaved `re, im` pairs
        let complex = vec2(Complex::new(1.0f64, -1.0), Complex::new(0.5, 2.0));
        let parts: &[f64] = bytemuck::cast_slice(complex.as_slice());
        assert_eq!(parts, [1.0, -1.0, 0.5, 2.0]);
        let back: &[Vector<Complex<f64>, 2>] = bytemuck::cast_slice(parts);
        assert_eq!(back, [complex]);
    }
}
