use num_complex::Complex;

use crate::{Element, Zero};

/// Lossless or `as`-style conversion of an element to the element type `U`.
///
/// Implemented between all real types, from real to complex types, and between complex types.
/// Complex to real conversions have no single meaning; see
/// [`Vector::as_real_with`][crate::Vector::as_real_with].
pub trait AsType<U: Element>: Element {
    fn as_type(self) -> U;
}

// Each pair also covers real to complex, and complex to complex over the same component types.
macro_rules! casts {
    ($($from:ty => $($to:ty),+;)+) => {
        $(
            $(
                impl AsType<$to> for $from {
                    #[inline]
                    fn as_type(self) -> $to {
                        self as $to
                    }
                }

                impl AsType<Complex<$to>> for $from {
                    #[inline]
                    fn as_type(self) -> Complex<$to> {
                        Complex::new(self as $to, <$to as Zero>::ZERO)
                    }
                }

                impl AsType<Complex<$to>> for Complex<$from> {
                    #[inline]
                    fn as_type(self) -> Complex<$to> {
                        Complex::new(self.re as $to, self.im as $to)
                    }
                }
            )+
        )+
    };
}

casts! {
    i32 => i32, i64, f32, f64;
    i64 => i32, i64, f32, f64;
    f32 => i32, i64, f32, f64;
    f64 => i32, i64, f32, f64;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real() {
        assert_eq!(AsType::<i32>::as_type(2.9f64), 2);
        assert_eq!(AsType::<i32>::as_type(f64::NAN), 0);
        assert_eq!(AsType::<i32>::as_type(i64::MAX), -1);
        assert_eq!(AsType::<f32>::as_type(16777217i32), 16777216.0);
    }

    #[test]
    fn complex() {
        assert_eq!(
            AsType::<Complex<f64>>::as_type(3i32),
            Complex::new(3.0, 0.0)
        );
        assert_eq!(
            AsType::<Complex<i64>>::as_type(Complex::new(1.5f32, -2.5)),
            Complex::new(1, -2)
        );
    }
}
