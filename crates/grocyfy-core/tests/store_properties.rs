use grocyfy_core::{ItemPatch, ListStore};
use proptest::prelude::*;

/// Renders millionths as plain decimal text with all six places.
fn micros_text(micros: i64) -> String {
    format!("{}.{:06}", micros / 1_000_000, micros % 1_000_000)
}

/// Half-up to cents.
fn round_to_cents(micros: i128) -> i128 {
    (micros + 5_000) / 10_000
}

proptest! {
    #[test]
    fn prop_total_matches_sum_of_lines(
        entries in proptest::collection::vec((0..1_000_000_000i64, 1..50i64), 0..30)
    ) {
        let mut list = ListStore::new();
        for (i, (micros, qty)) in entries.iter().enumerate() {
            list.add_item_with_quantity(&format!("item {i}"), &micros_text(*micros), *qty)
                .unwrap();
        }

        let exact: i128 = entries
            .iter()
            .map(|(micros, qty)| i128::from(*micros) * i128::from(*qty))
            .sum();
        prop_assert_eq!(i128::from(list.total().cents()), round_to_cents(exact));
        prop_assert_eq!(list.len(), entries.len());
    }

    #[test]
    fn prop_quantity_never_below_one(
        start in 1..1_000i64,
        deltas in proptest::collection::vec(any::<i64>(), 1..20)
    ) {
        let mut list = ListStore::new();
        let id = list.add_item_with_quantity("Rice", "1.99", start).unwrap();

        for delta in deltas {
            let qty = list.change_quantity(id, delta).unwrap();
            prop_assert!(qty >= 1);
            let expected = (199 * i128::from(qty)).min(i128::from(i64::MAX));
            prop_assert_eq!(i128::from(list.total().cents()), expected);
        }
    }

    #[test]
    fn prop_remove_is_idempotent(
        count in 1..10usize,
        pick in any::<prop::sample::Index>()
    ) {
        let mut list = ListStore::new();
        let ids: Vec<_> = (0..count)
            .map(|i| list.add_item(&format!("item {i}"), "1.25").unwrap())
            .collect();
        let target = ids[pick.index(count)];

        list.remove_item(target);
        let once = list.clone();
        list.remove_item(target);

        prop_assert_eq!(list.items(), once.items());
        prop_assert_eq!(list.total(), once.total());
    }

    #[test]
    fn prop_over_budget_is_strict(
        price_micros in 0..100_000_000i64,
        budget_micros in 0..100_000_000i64
    ) {
        let mut list = ListStore::new();
        list.add_item("Basket", &micros_text(price_micros)).unwrap();
        prop_assert!(!list.is_over_budget());

        list.set_budget(&micros_text(budget_micros));
        let total_micros = round_to_cents(i128::from(price_micros)) * 10_000;
        prop_assert_eq!(list.is_over_budget(), total_micros > i128::from(budget_micros));
    }

    #[test]
    fn prop_cancelled_edit_changes_nothing(name in "\\PC*", price in "\\PC*") {
        let mut list = ListStore::new();
        let id = list.add_item_with_quantity("Tea", "4.20", 3).unwrap();
        let before = list.get(id).unwrap().clone();

        list.begin_edit(id);
        list.update_edit(ItemPatch::name(name).with_price(price));
        list.cancel_edit();

        prop_assert_eq!(list.get(id).unwrap(), &before);
        prop_assert_eq!(list.total().cents(), 1260);
    }
}

#[test]
fn scenario_milk_and_bread() {
    let mut list = ListStore::new();
    assert_eq!(list.total().to_string(), "$0.00");
    assert!(!list.is_over_budget());

    let milk = list.add_item_with_quantity("Milk", "2.50", 2).unwrap();
    list.add_item("Bread", "3.00").unwrap();
    assert_eq!(list.items().len(), 2);
    assert_eq!(list.total().to_string(), "$8.00");

    list.set_budget("5");
    assert!(list.is_over_budget());

    list.change_quantity(milk, -5);
    assert_eq!(list.get(milk).unwrap().quantity, 1);
    assert_eq!(list.total().to_string(), "$5.50");

    assert!(list.add_item("", "1.00").is_err());
    assert_eq!(list.items().len(), 2);
}

#[test]
fn scenario_total_is_rounded_after_summing() {
    let mut list = ListStore::new();
    list.add_item_with_quantity("Gum", "0.333", 3).unwrap();
    assert_eq!(list.total().to_string(), "$1.00");

    list.add_item_with_quantity("Bolt", "0.125", 10).unwrap();
    assert_eq!(list.total().to_string(), "$2.25");
}

#[test]
fn scenario_store_serializes_for_frontend() {
    let mut list = ListStore::new();
    list.add_item("Milk", "2.50").unwrap();
    list.set_budget("10");

    let json = serde_json::to_value(&list).unwrap();
    assert_eq!(json["total"], 250);
    assert_eq!(json["budget"], 10_000_000);
    assert_eq!(json["items"][0]["price"], 2_500_000);
    assert_eq!(json["items"][0]["name"], "Milk");
    assert!(json["editing"].is_null());
}
