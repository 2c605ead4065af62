//! Property tests for meridian-search ranking: total order, boost bounds,
//! uniqueness, and scope containment.

use std::collections::HashSet;

use proptest::prelude::*;

use meridian_core::config::SearchConfig;
use meridian_core::models::{RawHit, RelationKind, SearchScope};
use meridian_search::{EligibleProject, EligibleSet, RankingEngine};

const KINDS: [RelationKind; 4] = [
    RelationKind::SelfProject,
    RelationKind::Dependency,
    RelationKind::Related,
    RelationKind::Unrelated,
];

fn build_eligible(projects: &[(usize, f64)]) -> EligibleSet {
    let mut set = EligibleSet::new(SearchScope::Workspace, None);
    for (i, &(kind, weight)) in projects.iter().enumerate() {
        set.insert(EligibleProject {
            project_id: format!("p{i}"),
            relation_kind: KINDS[kind % KINDS.len()],
            edge_weight: weight,
        });
    }
    set
}

fn build_hits(n_projects: usize, raw: &[(usize, usize, f64)]) -> Vec<RawHit> {
    raw.iter()
        .map(|&(p, d, score)| RawHit::new(format!("p{}", p % n_projects), format!("d{d}"), score))
        .collect()
}

fn projects_strategy() -> impl Strategy<Value = Vec<(usize, f64)>> {
    prop::collection::vec((0..4_usize, 0.0_f64..=1.0), 1..8)
}

// Few distinct document ids and coarse scores so duplicates and ties are common.
fn hits_strategy() -> impl Strategy<Value = Vec<(usize, usize, f64)>> {
    let score = (0..10_u32).prop_map(|s| s as f64 / 10.0);
    prop::collection::vec((0..8_usize, 0..6_usize, score), 0..60)
}

fn config(boost: f64, enabled: bool) -> SearchConfig {
    SearchConfig {
        relationship_boost: boost,
        cross_project_ranking: enabled,
        ..SearchConfig::default()
    }
}

proptest! {
    #[test]
    fn output_is_totally_ordered(
        projects in projects_strategy(),
        raw in hits_strategy(),
        boost in 1.0_f64..3.0,
    ) {
        let eligible = build_eligible(&projects);
        let ranked = RankingEngine::new(&config(boost, true))
            .rank(&eligible, build_hits(projects.len(), &raw))
            .unwrap();

        for pair in ranked.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let key_a = (&a.relation_kind, &a.project_id, &a.document_id);
            let key_b = (&b.relation_kind, &b.project_id, &b.document_id);
            prop_assert!(
                a.final_score > b.final_score
                    || (a.final_score == b.final_score && key_a < key_b),
                "{:?} before {:?}", a, b
            );
        }
        for (i, r) in ranked.iter().enumerate() {
            prop_assert_eq!(r.rank, i + 1);
        }
    }
}

proptest! {
    #[test]
    fn results_are_unique(
        projects in projects_strategy(),
        raw in hits_strategy(),
    ) {
        let eligible = build_eligible(&projects);
        let hits = build_hits(projects.len(), &raw);
        let distinct: HashSet<(String, String)> = hits
            .iter()
            .map(|h| (h.project_id.clone(), h.document_id.clone()))
            .collect();
        let ranked = RankingEngine::default().rank(&eligible, hits).unwrap();

        let mut seen = HashSet::new();
        for r in &ranked {
            prop_assert!(seen.insert((r.project_id.clone(), r.document_id.clone())));
        }
        prop_assert_eq!(seen, distinct);
    }
}

proptest! {
    #[test]
    fn boost_stays_within_bounds(
        projects in projects_strategy(),
        raw in hits_strategy(),
        boost in 0.0_f64..10.0,
        enabled in any::<bool>(),
    ) {
        let eligible = build_eligible(&projects);
        let ranked = RankingEngine::new(&config(boost, enabled))
            .rank(&eligible, build_hits(projects.len(), &raw))
            .unwrap();
        let ceiling = boost.clamp(1.0, 3.0);

        for r in &ranked {
            prop_assert!(r.boost_applied >= 1.0 && r.boost_applied <= ceiling + 1e-12);
            let neutral =
                matches!(r.relation_kind, RelationKind::SelfProject | RelationKind::Unrelated);
            if !enabled || neutral {
                prop_assert_eq!(r.boost_applied, 1.0);
            }
        }
    }
}

proptest! {
    #[test]
    fn every_result_comes_from_the_eligible_set(
        projects in projects_strategy(),
        raw in hits_strategy(),
    ) {
        let eligible = build_eligible(&projects);
        let ranked = RankingEngine::default()
            .rank(&eligible, build_hits(projects.len(), &raw))
            .unwrap();
        for r in &ranked {
            let project = eligible.get(&r.project_id);
            prop_assert!(project.is_some());
            prop_assert_eq!(project.map(|p| p.relation_kind), Some(r.relation_kind));
        }
    }
}

proptest! {
    #[test]
    fn input_order_does_not_matter(
        projects in projects_strategy(),
        raw in hits_strategy(),
    ) {
        let eligible = build_eligible(&projects);
        let hits = build_hits(projects.len(), &raw);
        let mut reversed = hits.clone();
        reversed.reverse();
        let engine = RankingEngine::default();
        prop_assert_eq!(
            engine.rank(&eligible, hits).unwrap(),
            engine.rank(&eligible, reversed).unwrap()
        );
    }
}
