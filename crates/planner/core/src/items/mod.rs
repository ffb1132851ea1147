//! The candy item model: denominations, usage breakdowns, and the best-fit
//! search that turns a candy need into concrete units.
//!
//! Every usage row the planner reports, theoretical or committed, comes out
//! of [`best_fit`]; only the need and the stock it is handed differ.
mod denomination;
mod search;
mod usage;

pub use denomination::{Denomination, DenominationCounts, DenominationScope};
pub use search::{best_fit, pad_with_universal_s, splittable_in_range};
pub use usage::ItemUsage;
