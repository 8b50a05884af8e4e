//! Label values and coercion from array-like input data.

use crate::error::{Error, Result};

/// The integer value stored in every grid cell.
///
/// Labels need not be contiguous or start at zero; any value is valid and a
/// freshly allocated grid holds `0` everywhere.
pub type Label = i64;

/// Conversion of an input element into a [`Label`].
///
/// Integer conversions are range-checked. Floating-point values follow the
/// usual integer-coercion rule for numeric arrays: truncate toward zero, and
/// reject NaN, infinities and values outside the `i64` range.
pub trait ToLabel {
    /// Coerce `self` to a label, or report a conversion error.
    fn to_label(self) -> Result<Label>;
}

macro_rules! to_label_lossless {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToLabel for $ty {
                fn to_label(self) -> Result<Label> {
                    Ok(Label::from(self))
                }
            }
        )*
    };
}

macro_rules! to_label_checked {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToLabel for $ty {
                fn to_label(self) -> Result<Label> {
                    Label::try_from(self).map_err(|_| Error::Conversion(self.to_string()))
                }
            }
        )*
    };
}

to_label_lossless!(i8, i16, i32, i64, u8, u16, u32);
to_label_checked!(u64, u128, i128, usize, isize);

impl ToLabel for bool {
    fn to_label(self) -> Result<Label> {
        Ok(Label::from(self))
    }
}

impl ToLabel for f64 {
    fn to_label(self) -> Result<Label> {
        // i64::MAX is not exactly representable as f64; the exclusive upper
        // bound 2^63 is.
        if self.is_finite() && self >= -(2f64.powi(63)) && self < 2f64.powi(63) {
            Ok(self.trunc() as Label)
        } else {
            Err(Error::Conversion(self.to_string()))
        }
    }
}

impl ToLabel for f32 {
    fn to_label(self) -> Result<Label> {
        f64::from(self).to_label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers() {
        assert_eq!(5i32.to_label(), Ok(5));
        assert_eq!((-1i8).to_label(), Ok(-1));
        assert_eq!(7usize.to_label(), Ok(7));
        assert_eq!(u64::MAX.to_label(), Err(Error::Conversion(u64::MAX.to_string())));
    }

    #[test]
    fn floats_truncate_toward_zero() {
        assert_eq!(1.9f64.to_label(), Ok(1));
        assert_eq!((-1.9f64).to_label(), Ok(-1));
        assert_eq!(2.0f32.to_label(), Ok(2));
    }

    #[test]
    fn non_finite_floats_rejected() {
        assert!(f64::NAN.to_label().is_err());
        assert!(f64::INFINITY.to_label().is_err());
        assert!(1e300f64.to_label().is_err());
    }

    #[test]
    fn bools() {
        assert_eq!(true.to_label(), Ok(1));
        assert_eq!(false.to_label(), Ok(0));
    }
}
