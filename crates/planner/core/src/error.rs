//! Common error infrastructure for candy-core.
//!
//! The planner is a closed-world numeric system: out-of-range levels and
//! already-reached targets are answered with zero-effect results, not errors.
//! The errors defined here cover the remaining failure class, inconsistent
//! configuration, which must be rejected before any allocation runs.
//!
//! # Design Principles
//!
//! - **Fail before mutate**: every error is raised at construction or request
//!   validation time, never halfway through an allocation
//! - **Severity Classification**: errors are categorized for callers that log
//!   or surface them differently
//! - **Deterministic**: no error carries non-reproducible data

use crate::config::BoostKind;
use crate::items::Denomination;
use crate::request::RequestId;
use crate::tables::GrowthCurve;

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: invalid input that should be rejected without retry
/// - **Fatal**: data tables are unusable, no plan can be produced with them
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown curve tag on a request, unknown boost kind string
    Validation,

    /// Fatal error - the growth data itself is inconsistent.
    ///
    /// Examples: decreasing cumulative experience, missing boost rule
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error invalidates the data set rather than one input.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Common trait for all candy-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait PlannerError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// This is useful for error categorization, metrics, and testing.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors raised while constructing growth tables.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TablesError {
    /// A curve tag outside the known families.
    #[error("unknown growth curve exp_type {0}")]
    UnknownCurve(u16),

    /// A boost kind string that does not name a known kind.
    #[error("unknown boost kind '{0}'")]
    UnknownBoostKind(String),

    /// A curve table has no level-up entries.
    #[error("curve {0} has an empty level table")]
    EmptyCurve(GrowthCurve),

    /// Curve tables disagree on the level cap.
    #[error("curve {curve} covers {levels} level-ups, expected {expected}")]
    CurveLengthMismatch {
        curve: GrowthCurve,
        levels: usize,
        expected: usize,
    },

    /// A level-up cost of zero would make the level walk degenerate.
    #[error("curve {curve} has zero experience cost at level {level}")]
    ZeroLevelCost { curve: GrowthCurve, level: u8 },

    /// A curve family appears twice in the input.
    #[error("curve {0} defined more than once")]
    DuplicateCurve(GrowthCurve),

    /// No curves were supplied at all.
    #[error("growth tables define no curves")]
    NoCurves,

    /// The shard table does not cover every level a curve can walk through.
    #[error("shard table covers {actual} levels, expected at least {expected}")]
    ShardTableTooShort { actual: usize, expected: usize },

    /// More levels than a `u8` level index can address.
    #[error("level cap {0} exceeds the supported maximum")]
    LevelCapTooLarge(usize),

    /// Candy experience brackets are missing.
    #[error("candy experience table has no brackets")]
    EmptyCandyBrackets,

    /// Candy experience brackets must start at level 1 and ascend strictly.
    #[error("candy experience bracket starting at level {level} is out of order")]
    CandyBracketOrder { level: u8 },

    /// A bracket grants no experience for some nature.
    #[error("candy experience bracket starting at level {level} has a zero rate")]
    ZeroCandyExp { level: u8 },

    /// A boost kind has no rule in the boost table.
    #[error("no boost rule for kind {0}")]
    MissingBoostRule(BoostKind),

    /// A boost rule with a zero multiplier.
    #[error("boost rule for kind {0} has a zero multiplier")]
    ZeroMultiplier(BoostKind),
}

impl PlannerError for TablesError {
    fn severity(&self) -> ErrorSeverity {
        use TablesError::*;
        match self {
            UnknownCurve(_) | UnknownBoostKind(_) => ErrorSeverity::Validation,
            EmptyCurve(_)
            | CurveLengthMismatch { .. }
            | ZeroLevelCost { .. }
            | DuplicateCurve(_)
            | NoCurves
            | ShardTableTooShort { .. }
            | LevelCapTooLarge(_)
            | EmptyCandyBrackets
            | CandyBracketOrder { .. }
            | ZeroCandyExp { .. }
            | MissingBoostRule(_)
            | ZeroMultiplier(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        use TablesError::*;
        match self {
            UnknownCurve(_) => "TABLES_UNKNOWN_CURVE",
            UnknownBoostKind(_) => "TABLES_UNKNOWN_BOOST_KIND",
            EmptyCurve(_) => "TABLES_EMPTY_CURVE",
            CurveLengthMismatch { .. } => "TABLES_CURVE_LENGTH_MISMATCH",
            ZeroLevelCost { .. } => "TABLES_ZERO_LEVEL_COST",
            DuplicateCurve(_) => "TABLES_DUPLICATE_CURVE",
            NoCurves => "TABLES_NO_CURVES",
            ShardTableTooShort { .. } => "TABLES_SHARD_TABLE_TOO_SHORT",
            LevelCapTooLarge(_) => "TABLES_LEVEL_CAP_TOO_LARGE",
            EmptyCandyBrackets => "TABLES_EMPTY_CANDY_BRACKETS",
            CandyBracketOrder { .. } => "TABLES_CANDY_BRACKET_ORDER",
            ZeroCandyExp { .. } => "TABLES_ZERO_CANDY_EXP",
            MissingBoostRule(_) => "TABLES_MISSING_BOOST_RULE",
            ZeroMultiplier(_) => "TABLES_ZERO_MULTIPLIER",
        }
    }
}

/// Errors raised when withdrawing candy from an inventory.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InventoryError {
    /// A withdrawal asked for more units than the inventory holds.
    #[error("cannot withdraw {requested} {denomination} candy: only {available} left")]
    Insufficient {
        denomination: Denomination,
        requested: u64,
        available: u64,
    },
}

impl PlannerError for InventoryError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            InventoryError::Insufficient { .. } => "INVENTORY_INSUFFICIENT",
        }
    }
}

/// Errors raised by the planner before allocation starts.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlanError {
    /// The growth tables were rejected.
    #[error(transparent)]
    Tables(#[from] TablesError),

    /// The configured boost kind has no rule in the tables.
    #[error("boost kind {0} is not configured in the growth tables")]
    BoostKindNotConfigured(BoostKind),

    /// A request names a curve the tables do not carry.
    #[error("request {request} uses curve {curve}, which the growth tables do not define")]
    CurveNotConfigured {
        request: RequestId,
        curve: GrowthCurve,
    },

    /// Two requests share an id, so results could not be told apart.
    #[error("request id {0} appears more than once")]
    DuplicateRequest(RequestId),

    /// The working inventory could not back a committed allocation.
    #[error("inventory accounting failed: {0}")]
    Inventory(#[from] InventoryError),
}

impl PlannerError for PlanError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            PlanError::Tables(inner) => inner.severity(),
            PlanError::BoostKindNotConfigured(_) | PlanError::Inventory(_) => ErrorSeverity::Fatal,
            PlanError::CurveNotConfigured { .. } | PlanError::DuplicateRequest(_) => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            PlanError::Tables(inner) => inner.error_code(),
            PlanError::BoostKindNotConfigured(_) => "PLAN_BOOST_KIND_NOT_CONFIGURED",
            PlanError::CurveNotConfigured { .. } => "PLAN_CURVE_NOT_CONFIGURED",
            PlanError::DuplicateRequest(_) => "PLAN_DUPLICATE_REQUEST",
            PlanError::Inventory(_) => "PLAN_INVENTORY",
        }
    }
}
