//! Per-candy rates: experience by level bracket and nature, shard cost by level.

use crate::error::TablesError;

/// Nature effect on experience gained per candy.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Nature {
    /// Nature that raises experience per candy.
    Up,
    #[default]
    Neutral,
    /// Nature that lowers experience per candy.
    Down,
}

/// Experience per candy for every level at or above `min_level`, until the
/// next bracket starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CandyExpBracket {
    pub min_level: u8,
    pub up: u64,
    pub neutral: u64,
    pub down: u64,
}

impl CandyExpBracket {
    pub const fn new(min_level: u8, up: u64, neutral: u64, down: u64) -> Self {
        Self {
            min_level,
            up,
            neutral,
            down,
        }
    }

    pub const fn for_nature(&self, nature: Nature) -> u64 {
        match nature {
            Nature::Up => self.up,
            Nature::Neutral => self.neutral,
            Nature::Down => self.down,
        }
    }
}

/// Level brackets of base experience per candy, before boost multipliers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CandyExpTable {
    brackets: Vec<CandyExpBracket>,
}

impl CandyExpTable {
    /// # Errors
    ///
    /// Brackets must start at level 1, ascend strictly, and carry no zero rate.
    pub fn new(brackets: Vec<CandyExpBracket>) -> Result<Self, TablesError> {
        let Some(first) = brackets.first() else {
            return Err(TablesError::EmptyCandyBrackets);
        };
        if first.min_level != 1 {
            return Err(TablesError::CandyBracketOrder {
                level: first.min_level,
            });
        }
        for pair in brackets.windows(2) {
            if pair[1].min_level <= pair[0].min_level {
                return Err(TablesError::CandyBracketOrder {
                    level: pair[1].min_level,
                });
            }
        }
        if let Some(bracket) = brackets
            .iter()
            .find(|b| b.up == 0 || b.neutral == 0 || b.down == 0)
        {
            return Err(TablesError::ZeroCandyExp {
                level: bracket.min_level,
            });
        }
        Ok(Self { brackets })
    }

    pub(crate) fn from_brackets_unchecked(brackets: Vec<CandyExpBracket>) -> Self {
        Self { brackets }
    }

    /// Base experience one normal candy grants at `level`.
    pub fn base_exp(&self, level: u8, nature: Nature) -> u64 {
        self.brackets
            .iter()
            .rev()
            .find(|bracket| bracket.min_level <= level)
            .unwrap_or(&self.brackets[0])
            .for_nature(nature)
    }

    pub fn brackets(&self) -> &[CandyExpBracket] {
        &self.brackets
    }
}

/// Base shard cost of one candy, by the level it is used at.
///
/// `costs[level - 1]` applies to candy spent while at `level`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShardTable {
    costs: Vec<u64>,
}

impl ShardTable {
    pub fn new(costs: Vec<u64>) -> Self {
        Self { costs }
    }

    pub fn cost_per_candy(&self, level: u8) -> Option<u64> {
        let index = usize::from(level).checked_sub(1)?;
        self.costs.get(index).copied()
    }

    /// Number of levels with a cost entry.
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    pub fn costs(&self) -> &[u64] {
        &self.costs
    }
}
