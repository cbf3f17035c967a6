//! Stress harness: random families checked against layout and resolver invariants

use kin_graph::{PersonGraph, PersonId};
use kin_layout::{Layout, LayoutConfig, LayoutEngine};
use kin_resolver::{RelationshipCode, RelationshipResolver};
use kin_test_utils::random_family;
use serde::Serialize;
use std::time::Instant;

/// Outcome of one stress run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StressReport {
    /// People in the generated family
    pub people: usize,
    /// People that received a position
    pub placed: usize,
    /// Pairs of cards overlapping on the same row
    pub overlaps: usize,
    /// Whether two layout runs produced identical output
    pub deterministic: bool,
    /// People the root could not reach through the resolver
    pub unrelated: usize,
    /// Wall time in milliseconds
    pub elapsed_ms: u128,
}

impl StressReport {
    /// No invariant was violated
    #[must_use]
    pub fn passed(&self) -> bool {
        self.placed == self.people && self.overlaps == 0 && self.deterministic && self.unrelated == 0
    }
}

/// Build a seeded random family of `people` and check it
#[must_use]
pub fn run_stress(people: usize, seed: u64, config: &LayoutConfig) -> StressReport {
    let start = Instant::now();
    let graph = random_family(seed, people);

    let engine = LayoutEngine::new(*config);
    let first = engine.layout(&graph);
    let second = engine.layout(&graph);

    let report = StressReport {
        people: graph.len(),
        placed: first.positions.len(),
        overlaps: count_overlaps(&first, config),
        deterministic: first == second,
        unrelated: count_unrelated(&graph),
        elapsed_ms: start.elapsed().as_millis(),
    };

    if report.passed() {
        tracing::debug!("Stress run passed: {:?}", report);
    } else {
        tracing::warn!("Stress run failed: {:?}", report);
    }
    report
}

/// Pairs of cards sharing a row whose centres are closer than one card width
#[must_use]
pub fn count_overlaps(layout: &Layout, config: &LayoutConfig) -> usize {
    let cards: Vec<_> = layout.positions.values().collect();
    let mut overlaps = 0;
    for (i, a) in cards.iter().enumerate() {
        for b in &cards[i + 1..] {
            if (a.y - b.y).abs() < f64::EPSILON && (a.x - b.x).abs() < config.card_width - 1e-9 {
                overlaps += 1;
            }
        }
    }
    overlaps
}

fn count_unrelated(graph: &PersonGraph) -> usize {
    let Some(root) = graph.root() else {
        return 0;
    };
    let resolver = RelationshipResolver::new(graph);
    graph
        .ids()
        .filter(|&id: &PersonId| resolver.resolve(root, id).code == RelationshipCode::Unrelated)
        .count()
}
