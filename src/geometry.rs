//! Geometric utilities on pairs of vectors.
//!
//! All functions are stateless and take their operands by value. Operands of differing element
//! types are [promoted][crate::promote] to a common type first.
//!
//! Functions involving angles or rotations only accept real vectors, and compute in [`f64`].

use std::f64::consts::FRAC_PI_2;

use crate::{
    approx::ApproxEq,
    error::{Error, Result},
    options::Tolerances,
    promote::{self, Promote, Promoted},
    Element, NormOf, One, Scalar, Vector,
};

fn promote_both<T, U, const N: usize>(
    a: Vector<T, N>,
    b: Vector<U, N>,
) -> (Vector<Promoted<T, U>, N>, Vector<Promoted<T, U>, N>)
where
    T: Promote<U>,
    U: Element,
{
    (a.map(T::promote), b.map(T::promote_rhs))
}

fn to_f64<T: Scalar, const N: usize>(v: Vector<T, N>) -> Vector<f64, N> {
    v.map(T::to_f64)
}

fn project<P: Element, const N: usize>(source: Vector<P, N>, target: Vector<P, N>) -> Vector<P, N> {
    let factor = source.inner(target) / target.inner(target);
    target.map(|elem| elem * factor)
}

/// Returns the angle between `v1` and `v2` in radians, in the range `0.0..=π`.
///
/// Uses the default [`Tolerances`]; see [`angle_between_with`].
///
/// # Examples
///
/// ```
/// # use firefly::{*, geometry::angle_between};
/// use std::f64::consts::{FRAC_PI_2, PI};
///
/// assert_approx_eq!(angle_between(vec2(1, 2), vec2(3, 4)), 0.17985349979247847).abs(1e-12);
/// assert_approx_eq!(angle_between(Vec2::<f32>::X, Vec2::<i32>::Y), FRAC_PI_2);
/// assert_approx_eq!(angle_between(vec2(1, 1), vec2(-1, -1)), PI);
/// ```
pub fn angle_between<T: Scalar, U: Scalar, const N: usize>(
    v1: Vector<T, N>,
    v2: Vector<U, N>,
) -> f64 {
    angle_between_with(v1, v2, Tolerances::default())
}

/// Returns the angle between `v1` and `v2` in radians, in the range `0.0..=π`.
///
/// Angles smaller than `tolerances.angle` are returned as exactly 0.0.
///
/// The zero vector has no direction. If either operand is a zero vector, this returns π/2, so
/// that the zero vector counts as orthogonal to everything.
pub fn angle_between_with<T: Scalar, U: Scalar, const N: usize>(
    v1: Vector<T, N>,
    v2: Vector<U, N>,
    tolerances: Tolerances,
) -> f64 {
    let (Ok(a), Ok(b)) = (to_f64(v1).to_normalized(), to_f64(v2).to_normalized()) else {
        log::trace!("angle between {v1} and {v2} involves a zero vector, using π/2");
        return FRAC_PI_2;
    };

    let angle = a.dot(b).clamp(-1.0, 1.0).acos();
    if angle < tolerances.angle {
        0.0
    } else {
        angle
    }
}

/// Returns whether `v1` and `v2` are at a right angle to each other.
///
/// A zero vector is orthogonal to any vector. Uses the default [`Tolerances`].
///
/// # Examples
///
/// ```
/// # use firefly::{*, geometry::are_orthogonal};
/// assert!(are_orthogonal(vec2(1, 2), vec2(-8, 4)));
/// assert!(!are_orthogonal(vec2(1, 2), vec2(8, 4)));
/// assert!(are_orthogonal(vec2(0, 0), vec2(8, 4)));
/// ```
pub fn are_orthogonal<T: Scalar, U: Scalar, const N: usize>(
    v1: Vector<T, N>,
    v2: Vector<U, N>,
) -> bool {
    are_orthogonal_with(v1, v2, Tolerances::default())
}

/// Returns whether the angle between `v1` and `v2` is within `tolerances.angle` of π/2.
pub fn are_orthogonal_with<T: Scalar, U: Scalar, const N: usize>(
    v1: Vector<T, N>,
    v2: Vector<U, N>,
    tolerances: Tolerances,
) -> bool {
    (angle_between_with(v1, v2, tolerances) - FRAC_PI_2).abs() < tolerances.angle
}

fn unit_vectors<T: Scalar, U: Scalar, const N: usize>(
    v1: Vector<T, N>,
    v2: Vector<U, N>,
) -> Result<(Vector<f64, N>, Vector<f64, N>)> {
    Ok((to_f64(v1).to_normalized()?, to_f64(v2).to_normalized()?))
}

/// Returns whether `v1` and `v2` point in the same or in opposite directions.
///
/// The zero vector has no direction, so passing one results in [`Error::DegenerateVector`].
/// Uses the default [`Tolerances`].
///
/// # Examples
///
/// ```
/// # use firefly::{*, geometry::are_parallel};
/// assert_eq!(are_parallel(vec2(1, 2), vec2(3, 6)), Ok(true));
/// assert_eq!(are_parallel(vec2(1, 2), vec2(-2.0, -4.0)), Ok(true));
/// assert_eq!(are_parallel(vec2(1, 2), vec2(2, 1)), Ok(false));
/// assert!(are_parallel(vec2(1, 2), vec2(0, 0)).is_err());
/// ```
pub fn are_parallel<T: Scalar, U: Scalar, const N: usize>(
    v1: Vector<T, N>,
    v2: Vector<U, N>,
) -> Result<bool> {
    are_parallel_with(v1, v2, Tolerances::default())
}

/// Returns whether the unit vectors of `v1` and `v2`, or of `v1` and `-v2`, agree within
/// `tolerances.unit_norm` in every element.
pub fn are_parallel_with<T: Scalar, U: Scalar, const N: usize>(
    v1: Vector<T, N>,
    v2: Vector<U, N>,
    tolerances: Tolerances,
) -> Result<bool> {
    let (a, b) = unit_vectors(v1, v2)?;
    Ok(a.abs_diff_eq(&b, tolerances.unit_norm) || a.abs_diff_eq(&-b, tolerances.unit_norm))
}

/// Returns whether `v1` and `v2` point in opposite directions.
///
/// The zero vector has no direction, so passing one results in [`Error::DegenerateVector`].
/// Uses the default [`Tolerances`].
///
/// # Examples
///
/// ```
/// # use firefly::{*, geometry::are_anti_parallel};
/// assert_eq!(are_anti_parallel(vec2(1, 2), vec2(-3, -6)), Ok(true));
/// assert_eq!(are_anti_parallel(vec2(1, 2), vec2(3, 6)), Ok(false));
/// ```
pub fn are_anti_parallel<T: Scalar, U: Scalar, const N: usize>(
    v1: Vector<T, N>,
    v2: Vector<U, N>,
) -> Result<bool> {
    are_anti_parallel_with(v1, v2, Tolerances::default())
}

/// Returns whether the unit vectors of `v1` and `-v2` agree within `tolerances.unit_norm` in
/// every element.
pub fn are_anti_parallel_with<T: Scalar, U: Scalar, const N: usize>(
    v1: Vector<T, N>,
    v2: Vector<U, N>,
    tolerances: Tolerances,
) -> Result<bool> {
    let (a, b) = unit_vectors(v1, v2)?;
    Ok(a.abs_diff_eq(&-b, tolerances.unit_norm))
}

/// Returns the area of the parallelogram spanned by the 3-dimensional vectors `v1` and `v2`.
///
/// Other dimensions result in [`Error::Dimension`].
///
/// # Examples
///
/// ```
/// # use firefly::{*, geometry::area_parallelogram};
/// assert_approx_eq!(area_parallelogram(vec3(1, 2, 3), vec3(4, 5, 6))?, 7.3484692283495345);
/// assert_eq!(area_parallelogram(Vec3::<f32>::X, Vec3::<f32>::Y)?, 1.0);
/// # Ok::<_, Error>(())
/// ```
pub fn area_parallelogram<T, U, const N: usize>(
    v1: Vector<T, N>,
    v2: Vector<U, N>,
) -> Result<NormOf<Promoted<T, U>>>
where
    T: Promote<U>,
    U: Element,
{
    Ok(v1.cross(v2)?.norm())
}

/// Returns the area of the triangle with the two sides `v1` and `v2`.
///
/// This is half of [`area_parallelogram`], and is likewise restricted to 3 dimensions.
pub fn area_triangle<T, U, const N: usize>(
    v1: Vector<T, N>,
    v2: Vector<U, N>,
) -> Result<NormOf<Promoted<T, U>>>
where
    T: Promote<U>,
    U: Element,
{
    let one = <NormOf<Promoted<T, U>> as One>::ONE;
    Ok(area_parallelogram(v1, v2)? / (one + one))
}

/// Projects `source` onto the line through `target`.
///
/// The computation happens in the promoted element type, so integer vectors use integer
/// division. A zero `target` yields NaN elements for floating-point types and panics for
/// integers.
///
/// # Examples
///
/// ```
/// # use firefly::{*, geometry::projection};
/// assert_approx_eq!(projection(vec2(1.0, 2.0), vec2(3.0, 4.0)), vec2(1.32, 1.76));
/// assert_eq!(projection(vec2(5, 5), vec2(1, 0)), [5, 0]);
/// // 11 / 25 truncates to 0
/// assert_eq!(projection(vec2(1, 2), vec2(3, 4)), [0, 0]);
/// ```
pub fn projection<T, U, const N: usize>(
    source: Vector<T, N>,
    target: Vector<U, N>,
) -> Vector<Promoted<T, U>, N>
where
    T: Promote<U>,
    U: Element,
{
    let (source, target) = promote_both(source, target);
    project(source, target)
}

/// Returns the component of `source` perpendicular to `target`, `source - projection`.
///
/// # Examples
///
/// ```
/// # use firefly::{*, geometry::rejection};
/// assert_approx_eq!(rejection(vec2(1.0, 2.0), vec2(3.0, 4.0)), vec2(-0.32, 0.24));
/// ```
pub fn rejection<T, U, const N: usize>(
    source: Vector<T, N>,
    target: Vector<U, N>,
) -> Vector<Promoted<T, U>, N>
where
    T: Promote<U>,
    U: Element,
{
    let (source, target) = promote_both(source, target);
    source
        .zip(project(source, target))
        .map(|(s, p)| s - p)
}

/// Mirrors `source` across the line through `target`, `2 * projection - source`.
///
/// # Examples
///
/// ```
/// # use firefly::{*, geometry::reflection};
/// assert_eq!(reflection(vec2(1, 1), vec2(1, 0)), [1, -1]);
/// ```
pub fn reflection<T, U, const N: usize>(
    source: Vector<T, N>,
    target: Vector<U, N>,
) -> Vector<Promoted<T, U>, N>
where
    T: Promote<U>,
    U: Element,
{
    let (source, target) = promote_both(source, target);
    let two = <Promoted<T, U> as One>::ONE + <Promoted<T, U> as One>::ONE;
    project(source, target)
        .zip(source)
        .map(|(p, s)| two * p - s)
}

/// Returns the Euclidean distance between the points `a` and `b`.
///
/// # Examples
///
/// ```
/// # use firefly::{*, geometry::distance};
/// assert_eq!(distance(vec2(1, 1), vec2(4, 5)), 5.0);
/// ```
pub fn distance<T, U, const N: usize>(a: Vector<T, N>, b: Vector<U, N>) -> NormOf<Promoted<T, U>>
where
    T: Promote<U>,
    U: Element,
{
    a.subtract(b).norm()
}

/// Returns the signed length of the projection of `source` onto `target`,
/// `source.dot(target) / target.norm()`.
///
/// # Examples
///
/// ```
/// # use firefly::{*, geometry::scalar_projection};
/// assert_approx_eq!(scalar_projection(vec2(1, 2), vec2(3, 4)), 2.2);
/// ```
pub fn scalar_projection<T, U, const N: usize>(
    source: Vector<T, N>,
    target: Vector<U, N>,
) -> Promoted<Promoted<T, U>, NormOf<U>>
where
    T: Promote<U>,
    U: Element,
    Promoted<T, U>: Promote<NormOf<U>>,
{
    let (dot, norm) = promote::pair(source.dot(target), target.norm());
    dot / norm
}

/// Rotates a 2-dimensional vector counterclockwise by `angle` radians.
///
/// The result keeps the element type of `vector`; integer elements are truncated towards zero.
/// Vectors of any other dimension result in [`Error::Dimension`].
///
/// # Examples
///
/// ```
/// # use firefly::{*, geometry::rotate_2d};
/// use std::f64::consts::FRAC_PI_2;
///
/// assert_approx_eq!(rotate_2d(vec2(1.0, 0.0), FRAC_PI_2)?, vec2(0.0, 1.0));
/// assert_eq!(rotate_2d(vec2(0, 2), FRAC_PI_2)?, [-2, 0]);
/// assert!(rotate_2d(vec3(1, 0, 0), FRAC_PI_2).is_err());
/// # Ok::<_, Error>(())
/// ```
pub fn rotate_2d<T: Scalar, const N: usize>(vector: Vector<T, N>, angle: f64) -> Result<Vector<T, N>> {
    if N != 2 {
        return Err(Error::Dimension {
            operation: "2D rotation",
            expected: 2,
            actual: N,
        });
    }

    let (x, y) = (vector[0].to_f64(), vector[1].to_f64());
    let (sin, cos) = angle.sin_cos();
    let rotated = [x * cos - y * sin, x * sin + y * cos];
    Ok(Vector::from_fn(|i| T::from_f64(rotated[i])))
}

/// Linearly interpolates between `a` and `b`, `a * (1 - t) + b * t`.
///
/// `t` is not restricted to `0.0..=1.0`. The result has at least [`f64`] precision.
///
/// # Examples
///
/// ```
/// # use firefly::{*, geometry::lerp};
/// assert_eq!(lerp(vec2(0, 0), vec2(10, 20), 0.25), [2.5, 5.0]);
/// assert_eq!(lerp(vec2(0, 0), vec2(10, 20), 2.0), [20.0, 40.0]);
/// ```
pub fn lerp<T, U, const N: usize>(
    a: Vector<T, N>,
    b: Vector<U, N>,
    t: f64,
) -> Vector<Promoted<Promoted<T, f64>, Promoted<U, f64>>, N>
where
    T: Promote<f64>,
    U: Promote<f64>,
    Promoted<T, f64>: Promote<Promoted<U, f64>>,
{
    a.scale(1.0 - t).add(b.scale(t))
}
