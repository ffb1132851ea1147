//! Boost rule table: multipliers applied to boost-tagged candy.

use std::collections::BTreeMap;

use crate::config::BoostKind;
use crate::error::TablesError;

/// Experience and shard multipliers for one boost kind.
///
/// Mini and full boosts share the experience multiplier but differ in shard
/// cost, so both values are data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoostRule {
    pub exp_multiplier: u64,
    pub shard_multiplier: u64,
}

impl BoostRule {
    /// Rule applied to normal (untagged) candy.
    pub const UNIT: Self = Self::new(1, 1);

    pub const fn new(exp_multiplier: u64, shard_multiplier: u64) -> Self {
        Self {
            exp_multiplier,
            shard_multiplier,
        }
    }
}

/// Boost rules keyed by kind.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoostRules {
    rules: BTreeMap<BoostKind, BoostRule>,
}

impl BoostRules {
    /// # Errors
    ///
    /// Rejects zero multipliers; a zero experience multiplier would stall
    /// every level walk.
    pub fn new(rules: impl IntoIterator<Item = (BoostKind, BoostRule)>) -> Result<Self, TablesError> {
        let rules: BTreeMap<_, _> = rules.into_iter().collect();
        if let Some((&kind, _)) = rules
            .iter()
            .find(|(_, rule)| rule.exp_multiplier == 0 || rule.shard_multiplier == 0)
        {
            return Err(TablesError::ZeroMultiplier(kind));
        }
        Ok(Self { rules })
    }

    pub(crate) fn from_rules_unchecked(rules: impl IntoIterator<Item = (BoostKind, BoostRule)>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    pub fn get(&self, kind: BoostKind) -> Option<BoostRule> {
        self.rules.get(&kind).copied()
    }

    /// # Errors
    ///
    /// Returns [`TablesError::MissingBoostRule`] if `kind` has no entry.
    pub fn rule(&self, kind: BoostKind) -> Result<BoostRule, TablesError> {
        self.get(kind).ok_or(TablesError::MissingBoostRule(kind))
    }

    pub fn iter(&self) -> impl Iterator<Item = (BoostKind, BoostRule)> + '_ {
        self.rules.iter().map(|(&kind, &rule)| (kind, rule))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_rule_is_reported() {
        let rules = BoostRules::new([(BoostKind::Full, BoostRule::new(2, 5))]).unwrap();
        assert_eq!(rules.rule(BoostKind::Full), Ok(BoostRule::new(2, 5)));
        assert_eq!(
            rules.rule(BoostKind::Mini),
            Err(TablesError::MissingBoostRule(BoostKind::Mini))
        );
    }

    #[test]
    fn zero_multiplier_rejected() {
        assert_eq!(
            BoostRules::new([(BoostKind::Mini, BoostRule::new(2, 0))]),
            Err(TablesError::ZeroMultiplier(BoostKind::Mini))
        );
    }
}
