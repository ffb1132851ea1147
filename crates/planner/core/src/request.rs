//! Level-up requests and the priority queue that carries them.

use core::fmt;

use crate::growth::LevelSpan;
use crate::items::Denomination;
use crate::tables::{GrowthCurve, Nature};

/// Caller-assigned identity of one request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RequestId(pub u32);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Species number; species candy is only usable by its own species.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SpeciesId(pub u16);

impl fmt::Display for SpeciesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Elemental type; type candy is only usable by creatures of that type.
#[derive(
    Clone,
    Copy,
    Debug,
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
pub enum CreatureType {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

/// Which candy a creature may eat: its species and its type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CandyOwner {
    pub species: SpeciesId,
    pub creature_type: CreatureType,
}

impl CandyOwner {
    pub const fn new(species: SpeciesId, creature_type: CreatureType) -> Self {
        Self {
            species,
            creature_type,
        }
    }

    /// Whether a unit of `denomination` held by `self` could be handed to `other`.
    pub fn can_share_with(&self, other: &CandyOwner, denomination: Denomination) -> bool {
        use crate::items::DenominationScope;
        match denomination.scope() {
            DenominationScope::Species => self.species == other.species,
            DenominationScope::Type => self.creature_type == other.creature_type,
            DenominationScope::Universal => true,
        }
    }
}

/// One creature's level-up demand.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelUpRequest {
    pub id: RequestId,
    pub species: SpeciesId,
    pub creature_type: CreatureType,
    pub curve: GrowthCurve,
    pub src_level: u8,
    pub dst_level: u8,
    /// Experience wanted inside `dst_level` on top of reaching it.
    #[cfg_attr(feature = "serde", serde(default))]
    pub target_exp_in_level: u64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub nature: Nature,
    /// Experience already earned inside `src_level`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub exp_in_level: u64,
    /// Boost-tagged candy the caller wants applied before normal candy.
    #[cfg_attr(feature = "serde", serde(default))]
    pub boost_candy_requested: u64,
    /// Hard ceiling on boost plus normal candy for this creature.
    #[cfg_attr(feature = "serde", serde(default))]
    pub candy_count_cap: Option<u64>,
}

impl LevelUpRequest {
    pub fn new(
        id: RequestId,
        species: SpeciesId,
        creature_type: CreatureType,
        curve: GrowthCurve,
        src_level: u8,
        dst_level: u8,
    ) -> Self {
        Self {
            id,
            species,
            creature_type,
            curve,
            src_level,
            dst_level,
            target_exp_in_level: 0,
            nature: Nature::Neutral,
            exp_in_level: 0,
            boost_candy_requested: 0,
            candy_count_cap: None,
        }
    }

    #[must_use]
    pub fn with_nature(mut self, nature: Nature) -> Self {
        self.nature = nature;
        self
    }

    #[must_use]
    pub fn with_exp_in_level(mut self, exp: u64) -> Self {
        self.exp_in_level = exp;
        self
    }

    #[must_use]
    pub fn with_target_exp(mut self, exp: u64) -> Self {
        self.target_exp_in_level = exp;
        self
    }

    #[must_use]
    pub fn with_boost(mut self, boost_candy: u64) -> Self {
        self.boost_candy_requested = boost_candy;
        self
    }

    #[must_use]
    pub fn with_cap(mut self, cap: u64) -> Self {
        self.candy_count_cap = Some(cap);
        self
    }

    pub fn span(&self) -> LevelSpan {
        LevelSpan::new(self.curve, self.src_level, self.dst_level)
            .with_exp_in_level(self.exp_in_level)
            .with_target_exp(self.target_exp_in_level)
    }

    pub fn owner(&self) -> CandyOwner {
        CandyOwner::new(self.species, self.creature_type)
    }
}

/// Requests in priority order.
///
/// Position is the only priority signal: index 0 is served first and the
/// planner never reorders the queue.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RequestQueue(Vec<LevelUpRequest>);

impl RequestQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a request at the lowest priority.
    pub fn push(&mut self, request: LevelUpRequest) {
        self.0.push(request);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[LevelUpRequest] {
        &self.0
    }

    pub fn as_mut_slice(&mut self) -> &mut [LevelUpRequest] {
        &mut self.0
    }

    pub fn iter(&self) -> core::slice::Iter<'_, LevelUpRequest> {
        self.0.iter()
    }
}

impl From<Vec<LevelUpRequest>> for RequestQueue {
    fn from(requests: Vec<LevelUpRequest>) -> Self {
        Self(requests)
    }
}

impl FromIterator<LevelUpRequest> for RequestQueue {
    fn from_iter<I: IntoIterator<Item = LevelUpRequest>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RequestQueue {
    type Item = &'a LevelUpRequest;
    type IntoIter = core::slice::Iter<'a, LevelUpRequest>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_carries_in_level_experience() {
        let request = LevelUpRequest::new(
            RequestId(1),
            SpeciesId(25),
            CreatureType::Electric,
            GrowthCurve::Exp900,
            12,
            30,
        )
        .with_exp_in_level(40)
        .with_target_exp(10);

        let span = request.span();
        assert_eq!((span.src_level, span.dst_level), (12, 30));
        assert_eq!(span.exp_in_level, 40);
        assert_eq!(span.target_exp_in_level, 10);
    }

    #[test]
    fn sharing_respects_scope() {
        let pikachu = CandyOwner::new(SpeciesId(25), CreatureType::Electric);
        let raichu = CandyOwner::new(SpeciesId(26), CreatureType::Electric);
        let eevee = CandyOwner::new(SpeciesId(133), CreatureType::Normal);

        assert!(pikachu.can_share_with(&raichu, Denomination::TypeM));
        assert!(!pikachu.can_share_with(&raichu, Denomination::Species));
        assert!(!pikachu.can_share_with(&eevee, Denomination::TypeS));
        assert!(pikachu.can_share_with(&eevee, Denomination::UniversalL));
    }

    #[test]
    fn queue_keeps_insertion_order() {
        let mut queue = RequestQueue::new();
        for id in [3, 1, 2] {
            queue.push(LevelUpRequest::new(
                RequestId(id),
                SpeciesId(1),
                CreatureType::Grass,
                GrowthCurve::Exp600,
                1,
                5,
            ));
        }
        let ids: Vec<_> = queue.iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}
