use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Triangular fuzzy number (lower, modal, upper).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tfn {
    l: f64,
    m: f64,
    u: f64,
}

impl Tfn {
    /// "Equal or near-equal" judgment. Also used on the diagonal.
    pub const EQUAL: Tfn = Tfn { l: 1.0, m: 1.0, u: 3.0 };
    pub const MODERATE: Tfn = Tfn { l: 1.0, m: 3.0, u: 5.0 };
    pub const STRONG: Tfn = Tfn { l: 3.0, m: 5.0, u: 7.0 };
    pub const VERY_STRONG: Tfn = Tfn { l: 5.0, m: 7.0, u: 9.0 };
    pub const EXTREME: Tfn = Tfn { l: 7.0, m: 9.0, u: 9.0 };

    pub fn new(l: f64, m: f64, u: f64) -> Result<Self, DomainError> {
        let finite = l.is_finite() && m.is_finite() && u.is_finite();
        if !finite || l < 0.0 || l > m || m > u {
            return Err(DomainError::InvalidTfn { l, m, u });
        }
        Ok(Self { l, m, u })
    }

    pub fn lower(&self) -> f64 {
        self.l
    }

    pub fn modal(&self) -> f64 {
        self.m
    }

    pub fn upper(&self) -> f64 {
        self.u
    }

    pub fn components(&self) -> [f64; 3] {
        [self.l, self.m, self.u]
    }

    /// Reciprocal-and-reversed form (1/u, 1/m, 1/l). Components must be positive.
    pub fn reciprocal(&self) -> Tfn {
        Tfn {
            l: 1.0 / self.u,
            m: 1.0 / self.m,
            u: 1.0 / self.l,
        }
    }

    /// Judgment band for an integer score difference. Returns None for 0 (equal).
    pub fn for_difference(diff: u64) -> Option<Tfn> {
        match diff {
            0 => None,
            1 => Some(Tfn::MODERATE),
            2 => Some(Tfn::STRONG),
            3 => Some(Tfn::VERY_STRONG),
            _ => Some(Tfn::EXTREME),
        }
    }
}

/// How a fractional score difference is mapped onto the integer band table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffRounding {
    /// Round half away from zero (1.5 -> 2).
    #[default]
    Round,
    /// Truncate toward zero (1.5 -> 1).
    Floor,
    /// Fractional differences are a DomainError.
    Reject,
}

impl DiffRounding {
    /// Map a non-negative difference to a band index. None means the policy rejects it.
    pub fn apply(self, diff: f64) -> Option<u64> {
        let diff = snap_to_integer(diff.abs());
        match self {
            DiffRounding::Round => Some(diff.round() as u64),
            DiffRounding::Floor => Some(diff.floor() as u64),
            DiffRounding::Reject if diff.fract() == 0.0 => Some(diff as u64),
            DiffRounding::Reject => None,
        }
    }
}

/// Subtracting decimal scores leaves float noise (2.3 - 0.3 = 1.9999999999999998).
/// Differences within 1e-9 (relative) of a whole number are treated as that number.
fn snap_to_integer(diff: f64) -> f64 {
    let nearest = diff.round();
    if (diff - nearest).abs() <= SNAP_TOLERANCE * diff.max(1.0) {
        nearest
    } else {
        diff
    }
}

const SNAP_TOLERANCE: f64 = 1e-9;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_unordered() {
        assert!(Tfn::new(3.0, 1.0, 5.0).is_err());
        assert!(Tfn::new(1.0, 5.0, 3.0).is_err());
        assert!(Tfn::new(-1.0, 1.0, 3.0).is_err());
        assert!(Tfn::new(1.0, f64::NAN, 3.0).is_err());
        assert!(Tfn::new(1.0, 1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_new_accepts_degenerate_point() {
        let tfn = Tfn::new(2.0, 2.0, 2.0).unwrap();
        assert_eq!(tfn.components(), [2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_reciprocal_reverses_bounds() {
        let r = Tfn::STRONG.reciprocal();
        assert!((r.lower() - 1.0 / 7.0).abs() < 1e-12);
        assert!((r.modal() - 1.0 / 5.0).abs() < 1e-12);
        assert!((r.upper() - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_reciprocal_of_equal_is_not_equal() {
        // (1,1,3) is not self-reciprocal
        assert_ne!(Tfn::EQUAL.reciprocal(), Tfn::EQUAL);
    }

    #[test]
    fn test_band_table() {
        assert_eq!(Tfn::for_difference(0), None);
        assert_eq!(Tfn::for_difference(1), Some(Tfn::MODERATE));
        assert_eq!(Tfn::for_difference(2), Some(Tfn::STRONG));
        assert_eq!(Tfn::for_difference(3), Some(Tfn::VERY_STRONG));
        assert_eq!(Tfn::for_difference(4), Some(Tfn::EXTREME));
        assert_eq!(Tfn::for_difference(40), Some(Tfn::EXTREME));
    }

    #[test]
    fn test_rounding_policies() {
        assert_eq!(DiffRounding::Round.apply(1.5), Some(2));
        assert_eq!(DiffRounding::Round.apply(0.4), Some(0));
        assert_eq!(DiffRounding::Floor.apply(1.5), Some(1));
        assert_eq!(DiffRounding::Floor.apply(3.99), Some(3));
        assert_eq!(DiffRounding::Reject.apply(2.0), Some(2));
        assert_eq!(DiffRounding::Reject.apply(2.5), None);
    }

    #[test]
    fn test_near_integer_differences_snap() {
        let diff = 2.3 - 0.3;
        assert!(diff < 2.0);
        assert_eq!(DiffRounding::Floor.apply(diff), Some(2));
        assert_eq!(DiffRounding::Reject.apply(1.4 - 0.4), Some(1));
        assert_eq!(DiffRounding::Reject.apply(1.5 - 0.4), None);
    }

    #[test]
    fn test_rounding_parses_from_yaml() {
        let r: DiffRounding = serde_saphyr::from_str("floor").unwrap();
        assert_eq!(r, DiffRounding::Floor);
        assert_eq!(DiffRounding::default(), DiffRounding::Round);
    }
}
