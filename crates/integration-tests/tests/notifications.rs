//! Timed expiry and dismissal, driven through the engine.

#![allow(clippy::unwrap_used)]

use verdant_core::Quantity;
use verdant_integration_tests::{manual_engine, product};

#[test]
fn notification_expires_after_its_duration() {
    let (mut engine, clock) = manual_engine();
    engine.add_to_cart(&product("1", "Laptop", 1000), Quantity::ONE);

    // present immediately after the mutation
    assert_eq!(engine.notifications().active().count(), 1);

    // default lifetime is 3000ms
    clock.advance_ms(3000);
    assert_eq!(engine.notifications().active().count(), 0);
    assert_eq!(engine.notifications_mut().sweep_expired(), 1);
}

#[test]
fn manual_dismissal_beats_the_deadline() {
    let (mut engine, clock) = manual_engine();
    engine.add_to_cart(&product("1", "Laptop", 1000), Quantity::ONE);
    let id = engine.notifications().active().next().unwrap().id;

    clock.advance_ms(1000);
    assert!(engine.notifications_mut().dismiss(id));

    // the deadline passing later must have no residual effect
    clock.advance_ms(2000);
    assert_eq!(engine.notifications_mut().sweep_expired(), 0);
    assert!(!engine.notifications_mut().dismiss(id));
}

#[test]
fn each_mutation_reports_with_the_right_kind() {
    use verdant_cart::NotificationKind;

    let (mut engine, _clock) = manual_engine();
    let mug = product("m", "Mug", 25);

    engine.add_to_cart(&mug, Quantity::ONE);
    engine.remove_item(&verdant_core::ProductId::new("m"));
    engine.add_to_wishlist(&mug);
    engine.add_to_wishlist(&mug);

    let kinds: Vec<_> = engine.notifications().active().map(|n| n.kind).collect();
    assert_eq!(
        kinds,
        vec![
            NotificationKind::Success,
            NotificationKind::Info,
            NotificationKind::Success,
            NotificationKind::Warning,
        ]
    );
}
