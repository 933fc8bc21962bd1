//! Quality Update Engine: ages every item by one day.
//!
//! Per item, strictly in this order:
//! 1. classify by name and adjust quality (using the `sell_in` at the start of
//!    the day),
//! 2. clamp quality to a minimum of zero,
//! 3. decrement `sell_in`, unless the item is Sulfuras.
//!
//! Items are independent; no item's update reads another item's state.

use serde::Serialize;

use gildedrose_core::DomainResult;

use crate::class::ItemClass;
use crate::item::Item;
use crate::quality::{QualityChange, apply_change, decrement_sell_in, floor_quality};
use crate::rules::QualityRules;

// Backstage-pass bands, compared against the start-of-day sell_in.
const BACKSTAGE_TEN_DAYS: i64 = 10;
const BACKSTAGE_FIVE_DAYS: i64 = 6;

/// What one day did to one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItemAged {
    pub class: ItemClass,
    pub sell_in_before: i64,
    pub sell_in_after: i64,
    pub quality_before: i64,
    pub quality_after: i64,
}

impl ItemAged {
    pub fn quality_delta(&self) -> i64 {
        self.quality_after.saturating_sub(self.quality_before)
    }

    /// Whether the item is past its sell-by date after this day.
    pub fn expired(&self) -> bool {
        self.sell_in_after < 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QualityEngine {
    rules: QualityRules,
}

impl QualityEngine {
    pub fn new(rules: QualityRules) -> DomainResult<Self> {
        rules.validate()?;
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &QualityRules {
        &self.rules
    }

    /// Age every item by one day, in place. An empty slice is a no-op.
    pub fn update(&self, items: &mut [Item]) {
        for item in items.iter_mut() {
            self.age(item);
        }
    }

    /// Age a single item by one day and report what changed.
    pub fn age(&self, item: &mut Item) -> ItemAged {
        let class = ItemClass::classify(item.name());
        let sell_in_before = item.sell_in();
        let quality_before = item.quality();

        let change = self.change_for(class, sell_in_before);
        let quality_after = floor_quality(apply_change(
            quality_before,
            change,
            self.rules.quality_ceiling(),
        ));
        let sell_in_after = if class.ages() {
            decrement_sell_in(sell_in_before)
        } else {
            sell_in_before
        };

        // Sulfuras is exempt from the floor as well: it is never touched.
        if class != ItemClass::Sulfuras {
            item.set_quality(quality_after);
            item.set_sell_in(sell_in_after);
        }

        let aged = ItemAged {
            class,
            sell_in_before,
            sell_in_after: item.sell_in(),
            quality_before,
            quality_after: item.quality(),
        };

        tracing::trace!(
            name = item.name(),
            class = %aged.class,
            sell_in = aged.sell_in_after,
            quality = aged.quality_after,
            delta = aged.quality_delta(),
            "item aged"
        );

        aged
    }

    /// Quality change for one day, chosen from the class and the `sell_in`
    /// value before this day's decrement.
    fn change_for(&self, class: ItemClass, sell_in: i64) -> QualityChange {
        let expired = sell_in < 0;
        match class {
            ItemClass::Sulfuras => QualityChange::Unchanged,
            ItemClass::AgedBrie => QualityChange::Adjust(self.rules.maturation(expired)),
            ItemClass::BackstagePass => {
                if sell_in <= 0 {
                    QualityChange::Reset
                } else if sell_in < BACKSTAGE_FIVE_DAYS {
                    QualityChange::Adjust(self.rules.anticipation(3))
                } else if sell_in < BACKSTAGE_TEN_DAYS {
                    QualityChange::Adjust(self.rules.anticipation(2))
                } else {
                    QualityChange::Adjust(self.rules.anticipation(1))
                }
            }
            ItemClass::Conjured => QualityChange::Adjust(-self.rules.decay(true, expired)),
            ItemClass::Normal => QualityChange::Adjust(-self.rules.decay(false, expired)),
        }
    }
}

/// Age every item by one day using the shop's standard rules.
pub fn update_quality(items: &mut [Item]) {
    QualityEngine::default().update(items);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::{AGED_BRIE, BACKSTAGE_PASS, SULFURAS};

    fn aged(name: &str, sell_in: i64, quality: i64) -> Item {
        let mut items = vec![Item::new(name, sell_in, quality)];
        update_quality(&mut items);
        items.remove(0)
    }

    #[test]
    fn normal_item_loses_one_quality_and_one_day() {
        let item = aged("Haunted Shoe", 10, 10);
        assert_eq!(item.sell_in(), 9);
        assert_eq!(item.quality(), 9);
    }

    #[test]
    fn expired_normal_item_degrades_twice_as_fast() {
        assert_eq!(aged("item", -1, 3).quality(), 1);
    }

    #[test]
    fn normal_item_on_sell_by_day_still_degrades_once() {
        let item = aged("item", 0, 3);
        assert_eq!(item.quality(), 2);
        assert_eq!(item.sell_in(), -1);
    }

    #[test]
    fn quality_never_goes_negative() {
        assert_eq!(aged("item", -1, 0).quality(), 0);
        assert_eq!(aged("item", -1, 1).quality(), 0);
        assert_eq!(aged("Conjured Mana Cake", -3, 3).quality(), 0);
    }

    #[test]
    fn negative_constructed_quality_is_floored() {
        assert_eq!(aged("item", 4, -10).quality(), 0);
    }

    #[test]
    fn aged_brie_improves_with_age() {
        assert_eq!(aged(AGED_BRIE, 2, 2).quality(), 3);
        assert_eq!(aged(AGED_BRIE, -2, 33).quality(), 35);
        assert_eq!(aged(AGED_BRIE, 0, 10).quality(), 11);
    }

    #[test]
    fn aged_brie_respects_ceiling() {
        assert_eq!(aged(AGED_BRIE, 50, 50).quality(), 50);
        assert_eq!(aged(AGED_BRIE, -1, 49).quality(), 50);
    }

    #[test]
    fn quality_above_ceiling_is_left_alone_by_increases() {
        let item = aged(AGED_BRIE, 2, 67);
        assert_eq!(item.quality(), 67);
        assert_eq!(item.sell_in(), 1);
    }

    #[test]
    fn quality_above_ceiling_still_degrades() {
        assert_eq!(aged("Haunted Shoe", 5, 67).quality(), 66);
    }

    #[test]
    fn sulfuras_never_changes() {
        let item = aged(SULFURAS, 2, 67);
        assert_eq!(item.sell_in(), 2);
        assert_eq!(item.quality(), 67);

        let item = aged(SULFURAS, -5, -3);
        assert_eq!(item.sell_in(), -5);
        assert_eq!(item.quality(), -3);
    }

    #[test]
    fn backstage_pass_bands_use_start_of_day_sell_in() {
        assert_eq!(aged(BACKSTAGE_PASS, 11, 24).quality(), 25);
        assert_eq!(aged(BACKSTAGE_PASS, 10, 24).quality(), 25);
        assert_eq!(aged(BACKSTAGE_PASS, 9, 24).quality(), 26);
        assert_eq!(aged(BACKSTAGE_PASS, 8, 24).quality(), 26);
        assert_eq!(aged(BACKSTAGE_PASS, 6, 24).quality(), 26);
        assert_eq!(aged(BACKSTAGE_PASS, 5, 24).quality(), 27);
        assert_eq!(aged(BACKSTAGE_PASS, 1, 24).quality(), 27);
    }

    #[test]
    fn backstage_pass_close_to_concert_over_two_days() {
        let mut items = vec![Item::new(BACKSTAGE_PASS, 2, 24)];
        update_quality(&mut items);
        assert_eq!(items[0].quality(), 27);
        assert_eq!(items[0].sell_in(), 1);
        update_quality(&mut items);
        assert_eq!(items[0].quality(), 30);
    }

    #[test]
    fn backstage_pass_is_worthless_from_concert_day() {
        assert_eq!(aged(BACKSTAGE_PASS, 0, 24).quality(), 0);
        assert_eq!(aged(BACKSTAGE_PASS, -3, 80).quality(), 0);
    }

    #[test]
    fn backstage_pass_respects_ceiling() {
        assert_eq!(aged(BACKSTAGE_PASS, 3, 49).quality(), 50);
        assert_eq!(aged(BACKSTAGE_PASS, 3, 50).quality(), 50);
    }

    #[test]
    fn conjured_items_degrade_twice_as_fast() {
        assert_eq!(aged("Conjured mana item", 4, 26).quality(), 24);
        assert_eq!(aged("the CoNjuRed mana item", 14, 22).quality(), 20);
        assert_eq!(aged("Sconjured mana item", -4, 44).quality(), 40);
        assert_eq!(aged("CONJURED_MANA_ITEM", 414, 32).quality(), 30);
    }

    #[test]
    fn update_on_empty_slice_is_noop() {
        let mut items: Vec<Item> = Vec::new();
        update_quality(&mut items);
        assert!(items.is_empty());
    }

    #[test]
    fn items_are_updated_independently() {
        let mut items = vec![
            Item::new("Haunted Shoe", 10, 10),
            Item::new(SULFURAS, 0, 80),
            Item::new(AGED_BRIE, 2, 0),
        ];
        update_quality(&mut items);
        assert_eq!(items[0], Item::new("Haunted Shoe", 9, 9));
        assert_eq!(items[1], Item::new(SULFURAS, 0, 80));
        assert_eq!(items[2], Item::new(AGED_BRIE, 1, 1));
    }

    #[test]
    fn age_reports_the_change() {
        let engine = QualityEngine::default();
        let mut item = Item::new("Conjured Mana Cake", 0, 6);
        let report = engine.age(&mut item);
        assert_eq!(
            report,
            ItemAged {
                class: ItemClass::Conjured,
                sell_in_before: 0,
                sell_in_after: -1,
                quality_before: 6,
                quality_after: 4,
            }
        );
        assert_eq!(report.quality_delta(), -2);
        assert!(report.expired());
    }

    #[test]
    fn new_rejects_invalid_rules() {
        let rules = QualityRules::default().with_expiry_multiplier(0);
        assert!(QualityEngine::new(rules).is_err());
    }

    #[test]
    fn alternate_rules_change_magnitudes() {
        let engine = QualityEngine::new(
            QualityRules::default()
                .with_degradation_rate(2)
                .with_conjured_multiplier(3)
                .with_quality_ceiling(80),
        )
        .unwrap();

        let mut items = vec![
            Item::new("Haunted Shoe", 3, 20),
            Item::new("Conjured Mana Cake", -1, 30),
            Item::new(AGED_BRIE, 1, 70),
            Item::new(BACKSTAGE_PASS, 4, 78),
        ];
        engine.update(&mut items);

        assert_eq!(items[0].quality(), 18);
        assert_eq!(items[1].quality(), 18);
        assert_eq!(items[2].quality(), 72);
        assert_eq!(items[3].quality(), 80);
    }

    #[test]
    fn extreme_values_do_not_panic() {
        let mut items = vec![
            Item::new("Haunted Shoe", i64::MIN, i64::MIN),
            Item::new(AGED_BRIE, i64::MIN, i64::MAX),
            Item::new(BACKSTAGE_PASS, i64::MAX, i64::MIN),
        ];
        update_quality(&mut items);
        assert_eq!(items[0].sell_in(), i64::MIN);
        assert_eq!(items[0].quality(), 0);
        assert_eq!(items[1].quality(), i64::MAX);
        assert_eq!(items[2].sell_in(), i64::MAX - 1);
        assert_eq!(items[2].quality(), 0);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn any_name() -> impl Strategy<Value = String> {
            prop_oneof![
                Just(SULFURAS.to_string()),
                Just(AGED_BRIE.to_string()),
                Just(BACKSTAGE_PASS.to_string()),
                "[A-Za-z ]{0,8}[Cc][Oo][Nn][Jj][Uu][Rr][Ee][Dd][A-Za-z_ ]{0,8}",
                "[A-Za-z+0-9 ]{0,30}",
            ]
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: every item except Sulfuras loses exactly one day.
            #[test]
            fn sell_in_counts_down_by_one(
                name in any_name(),
                sell_in in -1_000i64..1_000,
                quality in -100i64..100
            ) {
                let mut items = vec![Item::new(name.clone(), sell_in, quality)];
                update_quality(&mut items);
                if name == SULFURAS {
                    prop_assert_eq!(items[0].sell_in(), sell_in);
                    prop_assert_eq!(items[0].quality(), quality);
                } else {
                    prop_assert_eq!(items[0].sell_in(), sell_in - 1);
                }
            }

            /// Property: quality is never negative after an update.
            #[test]
            fn quality_is_never_negative(
                name in any_name().prop_filter("not sulfuras", |n| n != SULFURAS),
                sell_in in -1_000i64..1_000,
                quality in -100i64..100
            ) {
                let mut items = vec![Item::new(name, sell_in, quality)];
                update_quality(&mut items);
                prop_assert!(items[0].quality() >= 0);
            }

            /// Property: increases never push quality past the ceiling.
            #[test]
            fn increases_stay_within_ceiling(
                increasing in prop_oneof![Just(AGED_BRIE), Just(BACKSTAGE_PASS)],
                sell_in in -1_000i64..1_000,
                quality in 0i64..=50
            ) {
                let mut items = vec![Item::new(increasing, sell_in, quality)];
                update_quality(&mut items);
                prop_assert!(items[0].quality() <= 50);
            }

            /// Property: conjured items lose twice what a normal item loses,
            /// before the floor.
            #[test]
            fn conjured_loses_double(
                sell_in in -1_000i64..1_000,
                quality in 10i64..100
            ) {
                let mut items = vec![
                    Item::new("Haunted Shoe", sell_in, quality),
                    Item::new("Conjured Haunted Shoe", sell_in, quality),
                ];
                update_quality(&mut items);
                let normal_loss = quality - items[0].quality();
                let conjured_loss = quality - items[1].quality();
                prop_assert_eq!(conjured_loss, normal_loss * 2);
            }

            /// Property: update is deterministic and items do not interact.
            #[test]
            fn update_is_per_item(
                names in proptest::collection::vec(any_name(), 0..8),
                sell_in in -20i64..20,
                quality in -5i64..60
            ) {
                let mut together: Vec<Item> =
                    names.iter().map(|n| Item::new(n.clone(), sell_in, quality)).collect();
                update_quality(&mut together);

                for (name, item) in names.iter().zip(&together) {
                    let mut alone = vec![Item::new(name.clone(), sell_in, quality)];
                    update_quality(&mut alone);
                    prop_assert_eq!(&alone[0], item);
                }
            }
        }
    }
}
