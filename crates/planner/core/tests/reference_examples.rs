//! Worked examples against the built-in reference tables.

use candy_core::{
    BoostKind, CreatureType, Denomination, DenominationCounts, GrowthCurve, Inventory,
    LevelUpRequest, LimitingFactor, PlanConfig, RequestId, RequestQueue, ResourceSnapshot,
    SpeciesId, StopReason, plan,
};

fn request(id: u32, species: u16, creature_type: CreatureType, curve: GrowthCurve, src: u8, dst: u8) -> LevelUpRequest {
    LevelUpRequest::new(
        RequestId(id),
        SpeciesId(species),
        creature_type,
        curve,
        src,
        dst,
    )
}

/// Level 10 to 60 on the 1320 curve runs out of shards before boost candy:
/// level 56 after 1719 boost candy and 1,998,660 shards.
#[test]
fn long_climb_is_limited_by_shards() {
    let queue = RequestQueue::from(vec![
        request(1, 149, CreatureType::Dragon, GrowthCurve::Exp1320, 10, 60).with_boost(2000),
    ]);
    let inventory = Inventory::new()
        .with_species(SpeciesId(149), 500)
        .with_type(CreatureType::Dragon, 0, 1)
        .with_universal(500, 100, 1);
    let config = PlanConfig::new(BoostKind::Full)
        .with_boost_limit(2000)
        .with_shard_limit(2_000_000);

    let result = plan(&queue, &inventory, &config).expect("reference tables configure full boost");
    let creature = &result.creatures[0];

    assert_eq!(creature.reached_level, 56);
    assert_eq!(creature.exp_in_level, 5481);
    assert_eq!(creature.stop, StopReason::Shards);
    assert_eq!(creature.limiting_factor, LimitingFactor::Shards);

    let reachable = &creature.reachable_items;
    assert_eq!(reachable.boost_count, 1719);
    assert_eq!(reachable.normal_count, 0);
    assert_eq!(reachable.shards, 1_998_660);
    assert_eq!(reachable.items, DenominationCounts::new(500, 0, 1, 398, 0, 0));
    assert_eq!(reachable.surplus(), 0);

    assert_eq!(creature.shortage.candy, 0);
    assert_eq!(creature.shortage.boost, 281);
    assert_eq!(creature.shortage.shards, 776_487);
    assert_eq!(creature.target_items, *reachable);

    assert_eq!(
        result.remaining,
        ResourceSnapshot {
            boost_remaining: Some(281),
            shards_remaining: Some(1_340),
        }
    );
    assert_eq!(result.inventory.species[&SpeciesId(149)], 0);
    assert_eq!(result.inventory.universal.s, 102);
    assert_eq!(result.inventory.universal.m, 100);
}

/// Two creatures share a boost pool of 250; the second gets what is left.
#[test]
fn shared_boost_pool_flows_down_the_queue() {
    let queue = RequestQueue::from(vec![
        request(1, 1, CreatureType::Grass, GrowthCurve::Exp600, 1, 10).with_boost(200),
        request(2, 4, CreatureType::Fire, GrowthCurve::Exp600, 1, 10).with_boost(200),
    ]);
    let inventory = Inventory::new().with_universal(1000, 0, 0);
    let config = PlanConfig::new(BoostKind::Full).with_boost_limit(250);

    let result = plan(&queue, &inventory, &config).expect("valid plan");
    let [first, second] = result.creatures.as_slice() else {
        panic!("expected two results");
    };

    assert_eq!(first.shortage.boost, 0);
    assert_eq!(first.reachable_items.boost_count, 200);
    assert_eq!(first.limiting_factor, LimitingFactor::None);

    assert_eq!(second.shortage.boost, 150);
    assert_eq!(second.reachable_items.boost_count, 50);
    assert_eq!(second.snapshot.boost_remaining, Some(50));
    assert_eq!(second.limiting_factor, LimitingFactor::Boost);
    assert_eq!(second.reached_level, 10);

    assert_eq!(result.totals.boost_count, 250);
    assert_eq!(result.remaining.boost_remaining, Some(0));
}

/// Investing candy without changing level still costs shards.
#[test]
fn in_level_investment_reports_its_cost() {
    let queue = RequestQueue::from(vec![
        request(1, 1, CreatureType::Grass, GrowthCurve::Exp600, 30, 30).with_boost(50),
    ]);
    let inventory = Inventory::new().with_universal(100, 0, 0);

    let result = plan(&queue, &inventory, &PlanConfig::new(BoostKind::Full)).expect("valid plan");
    let creature = &result.creatures[0];

    assert_eq!(creature.reached_level, 30);
    assert_eq!(creature.exp_in_level, 2500);
    assert_eq!(creature.reachable_items.boost_count, 50);
    assert_eq!(creature.reachable_items.shards, 30_500);
    assert!(creature.reachable_items.shards > 0);
    assert_eq!(creature.reachable_items.count(Denomination::UniversalS), 17);
    assert_eq!(creature.limiting_factor, LimitingFactor::None);
}

/// Theoretical rows are topped up to their full need; committed rows are not.
#[test]
fn theoretical_rows_are_padded_but_committed_rows_are_not() {
    let queue = RequestQueue::from(vec![
        request(1, 1, CreatureType::Grass, GrowthCurve::Exp600, 1, 30).with_cap(300),
        request(2, 4, CreatureType::Fire, GrowthCurve::Exp1320, 1, 40),
    ]);
    let inventory = Inventory::new().with_universal(300, 0, 0);

    let result = plan(&queue, &inventory, &PlanConfig::default()).expect("valid plan");
    let [capped, starved] = result.creatures.as_slice() else {
        panic!("expected two results");
    };

    let candy_target = capped.candy_target_items.expect("capped request has a candy target");
    assert_eq!(candy_target.normal_count, 300);
    assert_eq!(capped.target_items.normal_count, 359);
    assert_eq!(capped.target_items.count(Denomination::UniversalS), 120);
    assert_eq!(capped.reachable_items.normal_count, 300);
    assert_eq!(capped.reached_level, 27);
    assert_eq!(capped.limiting_factor, LimitingFactor::None);

    assert_eq!(starved.target_items.normal_count, 1503);
    assert_eq!(starved.target_items.count(Denomination::UniversalS), 501);
    assert!(starved.target_items.is_covered());
    assert_eq!(starved.reachable_items.normal_count, 600);
    assert_eq!(starved.reachable_items.count(Denomination::UniversalS), 200);
    assert_eq!(starved.shortage.candy, 903);
    assert_eq!(starved.reached_level, 26);
    assert_eq!(starved.limiting_factor, LimitingFactor::Candy);
    assert_eq!(starved.stop, StopReason::Candy);
}
