//! Sign enum.

use std::fmt;
use std::ops::{Mul, Neg};

/// Positive or negative.
///
/// Facing directions and rotation directions are never zero, so unlike a
/// general-purpose sign type there is no `Zero` variant.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sign {
    /// Negative.
    Neg = -1,
    /// Positive.
    Pos = 1,
}
impl Neg for Sign {
    type Output = Sign;
    fn neg(self) -> Sign {
        match self {
            Sign::Neg => Sign::Pos,
            Sign::Pos => Sign::Neg,
        }
    }
}
impl Mul<Sign> for Sign {
    type Output = Sign;
    fn mul(self, rhs: Sign) -> Sign {
        match self {
            Sign::Neg => -rhs,
            Sign::Pos => rhs,
        }
    }
}
impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sign::Neg => write!(f, "-"),
            Sign::Pos => write!(f, "+"),
        }
    }
}
impl Sign {
    /// Returns an integer representation of the sign (either -1 or 1).
    pub const fn int(self) -> i8 {
        match self {
            Sign::Neg => -1,
            Sign::Pos => 1,
        }
    }
    /// Returns a floating-point representation of the sign (either -1.0 or
    /// 1.0).
    pub const fn float(self) -> f32 {
        self.int() as f32
    }

    /// Returns the sign of an integer, or `None` if it is zero.
    pub const fn from_int(i: i8) -> Option<Sign> {
        match i {
            0 => None,
            i if i < 0 => Some(Sign::Neg),
            _ => Some(Sign::Pos),
        }
    }
    /// Returns the sign of a float, or `None` if it is zero or NaN.
    pub fn from_f32(x: f32) -> Option<Sign> {
        if x > 0.0 {
            Some(Sign::Pos)
        } else if x < 0.0 {
            Some(Sign::Neg)
        } else {
            None
        }
    }

    /// Returns an iterator over both signs, positive first.
    pub fn iter() -> impl Clone + Iterator<Item = Sign> {
        [Sign::Pos, Sign::Neg].into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_arithmetic() {
        assert_eq!(Sign::Neg * Sign::Neg, Sign::Pos);
        assert_eq!(Sign::Neg * Sign::Pos, Sign::Neg);
        assert_eq!(-Sign::Pos, Sign::Neg);
        assert_eq!(Sign::from_f32(-0.0), None);
        assert_eq!(Sign::from_f32(f32::NAN), None);
        assert_eq!(Sign::from_int(-3), Some(Sign::Neg));
    }
}
