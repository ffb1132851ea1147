//! Level span: where a creature starts and where it should end up.

use crate::tables::GrowthCurve;

/// A creature's start and goal on its growth curve.
///
/// `exp_in_level` is experience already earned inside `src_level`;
/// `target_exp_in_level` asks for that much experience inside `dst_level`
/// on top of reaching it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelSpan {
    pub curve: GrowthCurve,
    pub src_level: u8,
    pub dst_level: u8,
    pub exp_in_level: u64,
    pub target_exp_in_level: u64,
}

impl LevelSpan {
    pub const fn new(curve: GrowthCurve, src_level: u8, dst_level: u8) -> Self {
        Self {
            curve,
            src_level,
            dst_level,
            exp_in_level: 0,
            target_exp_in_level: 0,
        }
    }

    #[must_use]
    pub const fn with_exp_in_level(mut self, exp: u64) -> Self {
        self.exp_in_level = exp;
        self
    }

    #[must_use]
    pub const fn with_target_exp(mut self, exp: u64) -> Self {
        self.target_exp_in_level = exp;
        self
    }

    /// Whether the span describes a walk the tables can answer.
    ///
    /// Level 0, levels past the cap, and reversed spans are zero-effect.
    pub const fn is_walkable(&self, max_level: u8) -> bool {
        self.src_level >= 1 && self.src_level <= self.dst_level && self.dst_level <= max_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walkable_spans() {
        let span = LevelSpan::new(GrowthCurve::Exp600, 10, 30);
        assert!(span.is_walkable(65));
        assert!(LevelSpan::new(GrowthCurve::Exp600, 30, 30).is_walkable(65));
        assert!(!LevelSpan::new(GrowthCurve::Exp600, 31, 30).is_walkable(65));
        assert!(!LevelSpan::new(GrowthCurve::Exp600, 0, 30).is_walkable(65));
        assert!(!LevelSpan::new(GrowthCurve::Exp600, 10, 66).is_walkable(65));
    }
}
