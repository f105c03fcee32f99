//! End-to-end cart and wishlist mutation sequences.

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use verdant_core::{ProductId, Quantity};
use verdant_integration_tests::{manual_engine, product};

#[test]
fn repeated_adds_merge_into_one_clamped_line() {
    let (mut engine, _clock) = manual_engine();
    let laptop = product("101", "Laptop", 1000);

    for _ in 0..4 {
        engine.add_to_cart(&laptop, Quantity::clamp(300));
    }

    // 4 x 300 requested, clamped at the quantity ceiling
    assert_eq!(engine.line_items().len(), 1);
    assert_eq!(engine.line_items()[0].quantity, Quantity::MAX);
}

#[test]
fn quantity_input_always_lands_in_range() {
    let (mut engine, _clock) = manual_engine();
    engine.add_to_cart(&product("a", "Planter", 80), Quantity::ONE);
    let id = ProductId::new("a");

    for raw in ["0", "-7", "1000000", "3.49", "oops", ""] {
        engine.set_quantity_input(&id, raw);
        let q = engine.line_items()[0].quantity;
        assert!(q >= Quantity::MIN && q <= Quantity::MAX, "raw {raw:?} -> {q}");
    }

    engine.set_quantity_input(&id, "not-a-number");
    assert_eq!(engine.line_items()[0].quantity, Quantity::MIN);
}

#[test]
fn decrease_never_removes_the_line() {
    let (mut engine, _clock) = manual_engine();
    engine.add_to_cart(&product("a", "Planter", 80), Quantity::clamp(3));
    let id = ProductId::new("a");

    for _ in 0..10 {
        engine.decrease_quantity(&id, 1);
    }

    assert_eq!(engine.line_items().len(), 1);
    assert_eq!(engine.line_items()[0].quantity, Quantity::MIN);
}

#[test]
fn readd_after_remove_is_a_fresh_line() {
    let (mut engine, _clock) = manual_engine();
    let throw = product("t-9", "Linen Throw", 2500);

    engine.add_to_cart(&throw, Quantity::clamp(7));
    engine.remove_item(&ProductId::new("t-9"));
    engine.add_to_cart(&throw, Quantity::ONE);

    assert_eq!(engine.line_items().len(), 1);
    assert_eq!(engine.line_items()[0].quantity, Quantity::ONE);
}

#[test]
fn wishlist_readd_keeps_length_and_added_at() {
    let (mut engine, clock) = manual_engine();
    let vase = product("v-1", "Vase", 800);

    engine.add_to_wishlist(&vase);
    let added_at = engine.wishlist()[0].added_at;

    clock.advance_ms(86_400_000);
    engine.add_to_wishlist(&vase);

    assert_eq!(engine.wishlist().len(), 1);
    assert_eq!(engine.wishlist()[0].added_at, added_at);
}

#[test]
fn total_price_is_sum_of_extended_lines() {
    let (mut engine, _clock) = manual_engine();
    engine.add_to_cart(&product("1", "Laptop", 1000), Quantity::clamp(2));
    engine.add_to_cart(&product("2", "Headphones", 2500), Quantity::ONE);

    assert_eq!(engine.total_items(), 3);
    assert_eq!(engine.total_price(), Decimal::from(4500));
}

#[test]
fn collections_are_independent() {
    let (mut engine, _clock) = manual_engine();
    let mug = product("m", "Mug", 25);

    engine.add_to_cart(&mug, Quantity::ONE);
    engine.add_to_wishlist(&mug);
    engine.clear_cart();

    assert!(engine.line_items().is_empty());
    assert_eq!(engine.wishlist().len(), 1);
    assert!(engine.is_in_wishlist(&ProductId::new("m")));
}
