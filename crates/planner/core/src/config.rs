//! Planner configuration: boost event kind and the two global budgets.

use core::str::FromStr;

use crate::error::TablesError;

/// Candy boost event active for a planning run.
///
/// Selects the experience and shard multipliers applied to boost-tagged candy.
/// The multipliers themselves live in [`crate::tables::BoostRules`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BoostKind {
    /// No boost event; every candy is normal candy.
    #[default]
    None,
    /// Mini candy boost.
    Mini,
    /// Full candy boost.
    Full,
}

impl BoostKind {
    /// Parses a boost kind, reporting unknown names as a table error.
    pub fn parse(name: &str) -> Result<Self, TablesError> {
        Self::from_str(name).map_err(|_| TablesError::UnknownBoostKind(name.to_owned()))
    }

    /// Returns true if candy can carry a boost tag under this kind.
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Global settings for one planning run.
///
/// Limits are shared by every request in the run; `None` means unbounded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlanConfig {
    pub boost_kind: BoostKind,
    /// Total boost-tagged candy usable across all requests.
    pub global_boost_limit: Option<u64>,
    /// Total shards spendable across all requests.
    pub global_shard_limit: Option<u64>,
}

impl PlanConfig {
    pub fn new(boost_kind: BoostKind) -> Self {
        Self {
            boost_kind,
            global_boost_limit: None,
            global_shard_limit: None,
        }
    }

    #[must_use]
    pub fn with_boost_limit(mut self, limit: u64) -> Self {
        self.global_boost_limit = Some(limit);
        self
    }

    #[must_use]
    pub fn with_shard_limit(mut self, limit: u64) -> Self {
        self.global_shard_limit = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_boost_kind_case_insensitively() {
        assert_eq!(BoostKind::parse("FULL"), Ok(BoostKind::Full));
        assert_eq!(BoostKind::parse("mini"), Ok(BoostKind::Mini));
        assert_eq!(
            BoostKind::parse("mega"),
            Err(TablesError::UnknownBoostKind("mega".into()))
        );
    }

    #[test]
    fn default_config_is_unbounded() {
        let config = PlanConfig::default();
        assert_eq!(config.boost_kind, BoostKind::None);
        assert!(config.global_boost_limit.is_none());
        assert!(config.global_shard_limit.is_none());
    }
}
