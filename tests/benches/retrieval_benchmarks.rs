//! # Retrieval and Policy Benchmarks
//!
//! Performance validation for the hot paths:
//!
//! | Crate | Claim | Target |
//! |-------|-------|--------|
//! | lk-01 Access Policy | Pure in-memory decision | < 1µs |
//! | lk-03 Retrieval | Plan a 10k-word deck | < 10ms |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lk_01_access_policy::{evaluate, Action, Resource};
use lk_03_retrieval::{reorder, RetrievalStrategy};
use shared_types::{Actor, Deck, DeckId, Genus, ShareState, UserId, UserRole, Word, WordId};

fn test_deck(owner: UserId) -> Deck {
    Deck {
        id: DeckId::new(),
        name: "Benchmark".into(),
        owner_id: owner,
        is_public: false,
        sharing: ShareState::Unshared,
        created_at: 0,
        updated_at: 0,
    }
}

fn test_words(deck: DeckId, count: usize) -> Vec<Word> {
    (0..count)
        .map(|i| Word {
            id: WordId::new(),
            deck_id: deck,
            term: format!("Wort {i}"),
            meaning: format!("word {i}"),
            genus: Some(Genus::Neuter),
            plural: None,
            audio_url: None,
            is_learned: false,
            created_at: i as u64,
            updated_at: i as u64,
        })
        .collect()
}

// ============================================================================
// lk-01: Policy evaluation
// ============================================================================

fn bench_policy_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("lk-01-access-policy");

    let owner = UserId::new();
    let deck = test_deck(owner);
    let actor = Actor::new(owner, UserRole::Learner);
    let stranger = Actor::new(UserId::new(), UserRole::Learner);

    group.bench_function("evaluate_owner_read", |b| {
        b.iter(|| black_box(evaluate(&actor, &Resource::Deck(&deck), Action::Read)))
    });
    group.bench_function("evaluate_stranger_write", |b| {
        b.iter(|| black_box(evaluate(&stranger, &Resource::Deck(&deck), Action::Write)))
    });

    group.finish();
}

// ============================================================================
// lk-03: Retrieval planning and batch reordering
// ============================================================================

fn bench_retrieval_planning(c: &mut Criterion) {
    let mut group = c.benchmark_group("lk-03-retrieval");
    let strategy = RetrievalStrategy::default();

    for size in [200usize, 1_000, 10_000] {
        let ids: Vec<WordId> = (0..size).map(|_| WordId::new()).collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("plan", size), &ids, |b, ids| {
            b.iter(|| black_box(strategy.plan(ids.clone())))
        });
    }

    let deck = DeckId::new();
    let words = test_words(deck, 1_000);
    let requested: Vec<WordId> = words.iter().rev().map(|w| w.id).collect();
    group.bench_function("reorder_1000", |b| {
        b.iter(|| black_box(reorder(&requested, words.clone())))
    });

    group.finish();
}

criterion_group!(benches, bench_policy_evaluation, bench_retrieval_planning);
criterion_main!(benches);
