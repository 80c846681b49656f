//! Trigger system integration tests.
//!
//! These tests verify that death triggers are found on every board, that
//! APNAP ordering holds for two and three players, and that resolved
//! triggers act for their controller.

use ccg_stack::cards::{CardDef, CardRegistry, Permanent, TriggeredAbility};
use ccg_stack::core::{Board, EngineConfig, GameState, ObjectId, PlayerId};
use ccg_stack::effects::{Effect, TargetKind};
use ccg_stack::stack::{resolve, StackItem, StackItemId, StackItemKind};
use ccg_stack::triggers::{
    GameEvent, TriggerCollector, TriggerCondition, TriggerEvent, TriggerScope,
};

fn player(name: &str) -> PlayerId {
    PlayerId::new(name)
}

/// "Whenever a creature dies, draw a card."
fn watcher(name: &str) -> CardDef {
    CardDef::new(name)
        .with_type("CREATURE")
        .with_stats(1, 1)
        .with_triggered_ability(
            TriggeredAbility::new(TriggerCondition::new(
                TriggerEvent::Dies,
                TriggerScope::AnyCreature,
            ))
            .with_effect(Effect::draw(1))
            .with_text("Whenever a creature dies, draw a card."),
        )
}

fn cards() -> CardRegistry {
    [
        CardDef::new("Lightning Bolt")
            .with_spell_effect(Effect::deal_damage(3, TargetKind::AnyTarget)),
        CardDef::new("Grizzly Bears").with_type("CREATURE").with_stats(2, 2),
        watcher("Alice's Watcher"),
        watcher("Bob's Watcher"),
        watcher("Carol's Watcher"),
    ]
    .into_iter()
    .collect()
}

// =============================================================================
// Death Trigger Tests
// =============================================================================

/// Test that Alice's watcher sees Bob's creature die and Alice draws.
#[test]
fn test_death_trigger_draws_for_controller() {
    let (alice, bob) = (player("Alice"), player("Bob"));
    let state = GameState::new(cards(), alice.clone())
        .with_board(
            alice.clone(),
            Board::default().with_permanent(Permanent::new("a1", "Alice's Watcher", alice.clone())),
        )
        .with_board(
            bob.clone(),
            Board::default().with_permanent(Permanent::new("b1", "Grizzly Bears", bob.clone())),
        )
        .with_stack_item(StackItem::spell("s1", "Lightning Bolt", alice.clone()).targeting("b1"));

    let trace = resolve(state, EngineConfig::default());

    assert_eq!(trace.steps.len(), 2);
    assert_eq!(trace.steps[0].events.len(), 1);
    assert_eq!(trace.steps[0].events[0].kind, TriggerEvent::Dies);
    assert_eq!(trace.steps[1].kind, StackItemKind::TriggeredAbility);
    assert_eq!(
        trace.steps[1].description,
        "Alice's Watcher's trigger: Alice draws 1 card(s)."
    );
    assert_eq!(trace.drawn_by(&alice), 1);
    assert_eq!(trace.drawn_by(&bob), 0);
}

// =============================================================================
// APNAP Ordering Tests
// =============================================================================

/// Test that the non-active player's trigger resolves before the active player's.
#[test]
fn test_apnap_non_active_resolves_first() {
    let (alice, bob) = (player("Alice"), player("Bob"));
    let state = GameState::new(cards(), alice.clone())
        .with_board(
            alice.clone(),
            Board::default().with_permanent(Permanent::new("a1", "Alice's Watcher", alice.clone())),
        )
        .with_board(
            bob.clone(),
            Board::default()
                .with_permanent(Permanent::new("b1", "Grizzly Bears", bob.clone()))
                .with_permanent(Permanent::new("b2", "Bob's Watcher", bob.clone())),
        )
        .with_stack_item(StackItem::spell("s1", "Lightning Bolt", alice.clone()).targeting("b1"));

    let trace = resolve(state, EngineConfig::default());

    let pushed = &trace.steps[0].new_triggers;
    assert_eq!(pushed.len(), 2);
    assert_eq!(pushed[0].controller, alice, "active player's trigger is pushed first");
    assert!(pushed[0].is_active_player);
    assert_eq!(pushed[1].controller, bob);
    assert!(!pushed[1].is_active_player);

    assert_eq!(trace.steps[1].item_id, StackItemId::new("trig_2"));
    assert!(trace.steps[1].description.starts_with("Bob's Watcher's trigger:"));
    assert_eq!(trace.steps[2].item_id, StackItemId::new("trig_1"));
    assert!(trace.steps[2].description.starts_with("Alice's Watcher's trigger:"));
}

/// Test that with three players, non-active triggers keep board order among
/// themselves, so the last board's trigger resolves first.
#[test]
fn test_apnap_three_players() {
    let (alice, bob, carol) = (player("Alice"), player("Bob"), player("Carol"));
    let state = GameState::new(cards(), bob.clone())
        .with_board(
            alice.clone(),
            Board::default().with_permanent(Permanent::new("a1", "Alice's Watcher", alice.clone())),
        )
        .with_board(
            bob.clone(),
            Board::default().with_permanent(Permanent::new("b1", "Bob's Watcher", bob.clone())),
        )
        .with_board(
            carol.clone(),
            Board::default().with_permanent(Permanent::new("c1", "Carol's Watcher", carol.clone())),
        );

    let event = GameEvent::dies(ObjectId::new("x1"), "Grizzly Bears", carol.clone());
    let found = TriggerCollector::find_triggers(&event, &state);
    let discovered: Vec<_> = found.iter().map(|t| t.controller.clone()).collect();
    assert_eq!(discovered, vec![alice.clone(), bob.clone(), carol.clone()]);

    let ordered = TriggerCollector::order_apnap(found);
    let pushed: Vec<_> = ordered.iter().map(|t| t.controller.clone()).collect();
    assert_eq!(pushed, vec![bob, alice, carol]);
    assert_eq!(ordered[0].turn_order, 0);
    assert!(ordered[1..].iter().all(|t| t.turn_order == 1));
}

// =============================================================================
// Scope and Id Tests
// =============================================================================

/// Test that scope decides which permanents answer an event.
#[test]
fn test_scope_filtering() {
    let (alice, bob) = (player("Alice"), player("Bob"));
    let ability = |scope| {
        TriggeredAbility::new(TriggerCondition::new(TriggerEvent::Dies, scope))
            .with_effect(Effect::draw(1))
    };
    let cards: CardRegistry = [
        CardDef::new("Mine").with_triggered_ability(ability(TriggerScope::CreatureYouControl)),
        CardDef::new("Theirs").with_triggered_ability(ability(TriggerScope::CreatureOpponentControls)),
        CardDef::new("Others").with_triggered_ability(ability(TriggerScope::AnotherCreature)),
        CardDef::new("Own").with_triggered_ability(ability(TriggerScope::Self_)),
    ]
    .into_iter()
    .collect();

    let state = GameState::new(cards, alice.clone()).with_board(
        alice.clone(),
        Board::default()
            .with_permanent(Permanent::new("m", "Mine", alice.clone()))
            .with_permanent(Permanent::new("t", "Theirs", alice.clone()))
            .with_permanent(Permanent::new("o", "Others", alice.clone()))
            .with_permanent(Permanent::new("s", "Own", alice.clone())),
    );

    let event = GameEvent::dies(ObjectId::new("x"), "Grizzly Bears", bob);
    let names: Vec<_> = TriggerCollector::find_triggers(&event, &state)
        .into_iter()
        .map(|t| t.source_name)
        .collect();
    assert_eq!(names, vec!["Theirs", "Others"]);

    let event = GameEvent::dies(ObjectId::new("s"), "Own", alice);
    let names: Vec<_> = TriggerCollector::find_triggers(&event, &state)
        .into_iter()
        .map(|t| t.source_name)
        .collect();
    assert_eq!(names, vec!["Mine", "Others", "Own"]);
}

/// Test that triggers get increasing ids across the whole run.
#[test]
fn test_trigger_ids_count_up() {
    let alice = player("Alice");
    let bob = player("Bob");
    let state = GameState::new(cards(), alice.clone())
        .with_board(
            alice.clone(),
            Board::default().with_permanent(Permanent::new("a1", "Alice's Watcher", alice.clone())),
        )
        .with_board(
            bob.clone(),
            Board::default()
                .with_permanent(Permanent::new("b1", "Grizzly Bears", bob.clone()))
                .with_permanent(Permanent::new("b2", "Grizzly Bears", bob.clone())),
        )
        .with_stack_item(StackItem::spell("s1", "Lightning Bolt", alice.clone()).targeting("b1"))
        .with_stack_item(StackItem::spell("s2", "Lightning Bolt", alice.clone()).targeting("b2"));

    let trace = resolve(state, EngineConfig::default());
    let ids: Vec<_> = trace.steps.iter().map(|s| s.item_id.as_str()).collect();

    assert_eq!(ids, vec!["s2", "trig_1", "s1", "trig_2"]);
    assert_eq!(trace.drawn_by(&alice), 2);
    assert_eq!(trace.all_triggers().count(), 2);
}
