/// Tolerances for the comparisons that cannot sensibly be exact.
///
/// All values are absolute and in [`f64`], so the same settings apply to vectors of any element
/// type.
///
/// # Examples
///
/// ```
/// # use firefly::*;
/// let strict = Tolerances::default().with_unit_norm(0.0);
/// let almost = vec2(0.6, 0.8000001);
/// assert!(almost.is_normalized());
/// assert!(!almost.is_normalized_with(strict));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    /// Angles (in radians) below this are reported as exactly 0, and vectors whose angle is
    /// within this distance of π/2 are orthogonal.
    pub angle: f64,
    /// Maximum distance of a norm from 1 for the vector to count as normalized.
    pub unit_norm: f64,
}

impl Tolerances {
    /// Default for [`Tolerances::angle`].
    pub const DEFAULT_ANGLE: f64 = 1e-6;
    /// Default for [`Tolerances::unit_norm`].
    pub const DEFAULT_UNIT_NORM: f64 = 1e-6;

    pub fn with_angle(self, angle: f64) -> Self {
        Self { angle, ..self }
    }

    pub fn with_unit_norm(self, unit_norm: f64) -> Self {
        Self { unit_norm, ..self }
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            angle: Self::DEFAULT_ANGLE,
            unit_norm: Self::DEFAULT_UNIT_NORM,
        }
    }
}

/// How to convert complex elements to a real element type.
///
/// There is no single obvious conversion, so [`Vector::as_real_with`][crate::Vector::as_real_with]
/// requires picking one explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplexToReal {
    /// `re² + im²`, the squared modulus.
    ModulusSquared,
    /// The real part, discarding the imaginary part.
    RealPart,
}
