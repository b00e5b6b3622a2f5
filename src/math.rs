//! Fixed-point mathematics for the no_std simulation core.
//! Avoids floats so every platform reproduces identical frames.

use thiserror::Error;

/// Arithmetic failures that cannot be swallowed into a default value
/// because doing so would silently diverge the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    #[error("division by zero")]
    DivideByZero,
}

/// Fixed-point number with 5-bit precision for optimal storage/performance balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Fixed(i16);

impl Fixed {
    pub const FRACTIONAL_BITS: u32 = 5;
    pub const ONE: Fixed = Fixed(1 << Self::FRACTIONAL_BITS); // 32
    pub const ZERO: Fixed = Fixed(0);
    pub const MAX: Fixed = Fixed(i16::MAX);
    pub const MIN: Fixed = Fixed(i16::MIN);

    pub fn from_int(value: i16) -> Self {
        Fixed(value << Self::FRACTIONAL_BITS)
    }

    pub fn to_int(self) -> i32 {
        (self.0 >> Self::FRACTIONAL_BITS) as i32
    }

    /// Raw fixed-point storage value, used by callers that need ordering or
    /// arithmetic finer-grained than the public integer-facing API.
    pub fn raw(self) -> i16 {
        self.0
    }

    pub fn from_raw(raw: i16) -> Self {
        Fixed(raw)
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub fn abs(self) -> Fixed {
        Fixed(self.0.saturating_abs())
    }

    pub fn neg(self) -> Fixed {
        Fixed(self.0.saturating_neg())
    }

    /// Round up to the next whole unit; used by collision probing to catch
    /// fractional overlaps a plain truncation would miss.
    pub fn ceil(self) -> Fixed {
        let mask = Self::ONE.0 - 1;
        if self.0 & mask == 0 {
            self
        } else {
            Fixed((self.0 & !mask).saturating_add(Self::ONE.0))
        }
    }

    pub fn add(self, other: Fixed) -> Fixed {
        Fixed(self.0.saturating_add(other.0))
    }

    pub fn sub(self, other: Fixed) -> Fixed {
        Fixed(self.0.saturating_sub(other.0))
    }

    pub fn mul(self, other: Fixed) -> Fixed {
        let result = (self.0 as i32 * other.0 as i32) >> Self::FRACTIONAL_BITS;
        Fixed(result as i16)
    }

    /// Infallible divide for call sites where the divisor is a non-zero
    /// compile-time constant (e.g. halving a width). Returns `Fixed::ZERO`
    /// on divide-by-zero rather than raising, since that invariant is
    /// guaranteed by the caller, not by this function.
    pub fn div(self, other: Fixed) -> Fixed {
        if other.0 == 0 {
            return Fixed::ZERO;
        }
        let result = ((self.0 as i32) << Self::FRACTIONAL_BITS) / other.0 as i32;
        Fixed(result as i16)
    }

    /// Divide where the divisor comes from script or definition data and
    /// may legitimately be zero. Used by the `DIV` opcode so a zero divisor
    /// surfaces as a script failure instead of a silently wrong frame.
    pub fn checked_div(self, other: Fixed) -> Result<Fixed, MathError> {
        if other.0 == 0 {
            return Err(MathError::DivideByZero);
        }
        let result = ((self.0 as i32) << Self::FRACTIONAL_BITS) / other.0 as i32;
        Ok(Fixed(result as i16))
    }
}

impl core::ops::Neg for Fixed {
    type Output = Fixed;
    fn neg(self) -> Fixed {
        Fixed::neg(self)
    }
}

impl core::ops::Add for Fixed {
    type Output = Fixed;
    fn add(self, other: Fixed) -> Fixed {
        Fixed::add(self, other)
    }
}

impl core::ops::Sub for Fixed {
    type Output = Fixed;
    fn sub(self, other: Fixed) -> Fixed {
        Fixed::sub(self, other)
    }
}

impl core::ops::Mul for Fixed {
    type Output = Fixed;
    fn mul(self, other: Fixed) -> Fixed {
        Fixed::mul(self, other)
    }
}

/// Wire representation is an explicit `[numerator, denominator]` pair rather
/// than the raw storage value, so a config blob's fixed-point literals
/// (e.g. `[7, 2]` for 3.5) normalize to the internal denominator on load
/// instead of assuming it.
#[cfg(feature = "serialize")]
impl serde::Serialize for Fixed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeTuple;
        let mut tup = serializer.serialize_tuple(2)?;
        tup.serialize_element(&(self.0 as i32))?;
        tup.serialize_element(&(1i32 << Self::FRACTIONAL_BITS))?;
        tup.end()
    }
}

#[cfg(feature = "serialize")]
impl<'de> serde::Deserialize<'de> for Fixed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (numerator, denominator): (i32, i32) = serde::Deserialize::deserialize(deserializer)?;
        if denominator == 0 {
            return Err(serde::de::Error::custom(
                "Fixed denominator must be nonzero",
            ));
        }
        let raw = (numerator * (1i32 << Self::FRACTIONAL_BITS)) / denominator;
        Ok(Fixed(raw.clamp(i16::MIN as i32, i16::MAX as i32) as i16))
    }
}

