//! Priority-ordered best-fit search over a denomination stock.

use core::ops::RangeInclusive;

use super::{Denomination, DenominationCounts, ItemUsage};

/// Picks units from `stock` to cover `need` candy, in priority order.
///
/// Splittable denominations take whole units up to the remaining need and
/// close a remainder below one unit with one more unit of the same
/// denomination, so later denominations never see it. Atomic denominations
/// round up and may overshoot by less than one unit; they only cover what
/// the splittable stock ahead of them cannot. Returns less than `need` only
/// when `stock` is worth less than `need`.
pub fn best_fit(need: u64, stock: &DenominationCounts) -> DenominationCounts {
    let mut taken = DenominationCounts::ZERO;
    let mut remaining = need;

    for d in Denomination::PRIORITY {
        if remaining == 0 {
            break;
        }
        let units = remaining.div_ceil(d.value()).min(stock[d]);
        taken[d] = units;
        remaining = remaining.saturating_sub(units * d.value());
    }

    taken
}

/// Finds splittable units from `stock` worth a value inside `range`.
///
/// Prefers the lowest value, then the fewest universal units, then the fewest
/// type units, so species candy is used first. Meant for the small ranges
/// that cover one atomic unit.
pub fn splittable_in_range(
    range: RangeInclusive<u64>,
    stock: &DenominationCounts,
) -> Option<DenominationCounts> {
    let (lo, hi) = (*range.start(), *range.end());
    if lo > hi {
        return None;
    }
    let type_value = Denomination::TypeS.value();
    let universal_value = Denomination::UniversalS.value();

    let mut best: Option<((u64, u64, u64), DenominationCounts)> = None;
    for type_s in 0..=stock[Denomination::TypeS].min(hi / type_value) {
        let room = hi - type_s * type_value;
        for universal_s in 0..=stock[Denomination::UniversalS].min(room / universal_value) {
            let partial = type_s * type_value + universal_s * universal_value;
            let species = lo.saturating_sub(partial);
            if species > stock[Denomination::Species] {
                continue;
            }
            let key = (partial + species, universal_s, type_s);
            if best.as_ref().is_none_or(|(best_key, _)| key < *best_key) {
                let counts = DenominationCounts::new(species, type_s, 0, universal_s, 0, 0);
                best = Some((key, counts));
            }
        }
    }
    best.map(|(_, counts)| counts)
}

/// Adds universal-S units until the row's supply covers its candy.
pub fn pad_with_universal_s(usage: &ItemUsage) -> ItemUsage {
    let missing = usage.shortfall();
    if missing == 0 {
        return *usage;
    }
    let mut items = usage.items;
    items[Denomination::UniversalS] += missing.div_ceil(Denomination::UniversalS.value());
    usage.with_items(items)
}
