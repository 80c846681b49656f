//! Benchmarks for rules text classification and stack resolution

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use ccg_stack::cards::{CardDef, CardRegistry, Permanent, TriggeredAbility};
use ccg_stack::core::{Board, EngineConfig, GameState, PlayerId};
use ccg_stack::effects::{Effect, TargetKind};
use ccg_stack::stack::{resolve, StackItem};
use ccg_stack::text::classify;
use ccg_stack::triggers::{TriggerCondition, TriggerEvent, TriggerScope};

const TEXTS: &[&str] = &[
    "Lightning Bolt deals 3 damage to any target.",
    "Whenever this creature attacks, you gain 1 life.",
    "Whenever another creature you control dies, draw a card and each opponent loses 1 life.",
    "At the beginning of your upkeep, target creature gets +2/-1.",
    "Counter target spell.",
];

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    for text in TEXTS {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(&text[..12]), text, |b, text| {
            b.iter(|| black_box(classify(black_box(text))));
        });
    }
    group.finish();
}

/// `n` bolts aimed at `n` bears, with death watchers on both sides.
fn bolt_chain(n: usize) -> GameState {
    let alice = PlayerId::new("Alice");
    let bob = PlayerId::new("Bob");

    let watcher = TriggeredAbility::new(TriggerCondition::new(
        TriggerEvent::Dies,
        TriggerScope::AnyCreature,
    ))
    .with_effect(Effect::lose_life(1, TargetKind::EachOpponent));

    let cards: CardRegistry = [
        CardDef::new("Lightning Bolt").with_spell_effect(Effect::deal_damage(3, TargetKind::AnyTarget)),
        CardDef::new("Grizzly Bears").with_type("CREATURE").with_stats(2, 2),
        CardDef::new("Blood Artist")
            .with_type("CREATURE")
            .with_stats(0, 1)
            .with_triggered_ability(watcher),
    ]
    .into_iter()
    .collect();

    let mut bob_board = Board::default().with_permanent(Permanent::new("b0", "Blood Artist", bob.clone()));
    let mut state = GameState::new(cards, alice.clone())
        .with_board(alice.clone(), Board::default().with_permanent(Permanent::new("a0", "Blood Artist", alice.clone())));

    for i in 0..n {
        let id = format!("bear{i}");
        bob_board = bob_board.with_permanent(Permanent::new(id.as_str(), "Grizzly Bears", bob.clone()));
        state = state.with_stack_item(
            StackItem::spell(format!("s{i}"), "Lightning Bolt", alice.clone()).targeting(id),
        );
    }
    state.with_board(bob, bob_board)
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_bolt_chain");
    for n in [1, 10, 50] {
        let state = bolt_chain(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &state, |b, state| {
            b.iter(|| black_box(resolve(state.clone(), EngineConfig::default())));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_classify, bench_resolve);
criterion_main!(benches);
