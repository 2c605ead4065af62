//! Property tests for meridian-graph traversals over arbitrary, possibly
//! cyclic, workspaces.

use std::collections::HashSet;
use std::path::PathBuf;

use proptest::prelude::*;

use meridian_core::config::WorkspaceConfig;
use meridian_core::models::{Project, Relationship, RelationshipType};
use meridian_graph::{RelationshipGraph, WorkspaceModel};

const N: usize = 12;

/// Build a random workspace with `n` projects. Self loops and cycles allowed.
fn build_random_workspace(
    n: usize,
    deps: &[(usize, usize)],
    edges: &[(usize, usize, usize, f64)],
) -> (WorkspaceModel, RelationshipGraph) {
    let mut projects: Vec<Project> = (0..n)
        .map(|i| Project::new(format!("p{i}"), format!("P{i}"), PathBuf::from(format!("./p{i}"))))
        .collect();
    for &(from, to) in deps {
        if from != to {
            projects[from].dependencies.insert(format!("p{to}"));
        }
    }
    let relationships = edges
        .iter()
        .map(|&(from, to, kind, weight)| {
            Relationship::new(
                format!("p{from}"),
                format!("p{to}"),
                RelationshipType::ALL[kind % RelationshipType::ALL.len()],
            )
            .with_weight(weight)
        })
        .collect();

    let config = WorkspaceConfig::new("random", projects).with_relationships(relationships);
    let model = WorkspaceModel::from_config(config).unwrap();
    let graph = RelationshipGraph::build(&model);
    (model, graph)
}

fn deps_strategy(n: usize) -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..n, 0..n), 0..n * 2)
}

fn edge_strategy(n: usize) -> impl Strategy<Value = Vec<(usize, usize, usize, f64)>> {
    prop::collection::vec((0..n, 0..n, 0..6_usize, 0.0_f64..1.0_f64), 0..n * 3)
}

// =============================================================================
// Related traversal: bounded, anchor-free, weights in [0, 1]
// =============================================================================
proptest! {
    #[test]
    fn related_respects_hop_limit(
        deps in deps_strategy(N),
        edges in edge_strategy(N),
        anchor in 0..N,
        max_hops in 0..5_usize,
    ) {
        let (_, graph) = build_random_workspace(N, &deps, &edges);
        let anchor = format!("p{anchor}");
        let reached = graph.related_projects(&anchor, max_hops);

        let mut seen = HashSet::new();
        for r in &reached {
            prop_assert!(r.project_id != anchor, "anchor must not be reached");
            prop_assert!(r.hops >= 1 && r.hops <= max_hops);
            prop_assert!((0.0..=1.0).contains(&r.weight), "weight {} out of range", r.weight);
            prop_assert!(seen.insert(r.project_id.clone()), "{} reached twice", r.project_id);
        }
    }
}

proptest! {
    #[test]
    fn related_is_sorted_by_hops_then_id(
        deps in deps_strategy(N),
        edges in edge_strategy(N),
        anchor in 0..N,
    ) {
        let (_, graph) = build_random_workspace(N, &deps, &edges);
        let reached = graph.related_projects(&format!("p{anchor}"), N);
        for pair in reached.windows(2) {
            prop_assert!(
                (pair[0].hops, &pair[0].project_id) < (pair[1].hops, &pair[1].project_id)
            );
        }
    }
}

// =============================================================================
// Increasing the hop limit only ever adds projects
// =============================================================================
proptest! {
    #[test]
    fn related_is_monotone_in_hops(
        deps in deps_strategy(N),
        edges in edge_strategy(N),
        anchor in 0..N,
        max_hops in 0..4_usize,
    ) {
        let (_, graph) = build_random_workspace(N, &deps, &edges);
        let anchor = format!("p{anchor}");
        let near: HashSet<String> = graph
            .related_projects(&anchor, max_hops)
            .into_iter()
            .map(|r| r.project_id)
            .collect();
        let far: HashSet<String> = graph
            .related_projects(&anchor, max_hops + 1)
            .into_iter()
            .map(|r| r.project_id)
            .collect();
        prop_assert!(near.is_subset(&far));
    }
}

// =============================================================================
// Dependency closure: only dependency/imports edges, subset of full reach
// =============================================================================
proptest! {
    #[test]
    fn closure_follows_dependency_edges_only(
        deps in deps_strategy(N),
        edges in edge_strategy(N),
        anchor in 0..N,
    ) {
        let (_, graph) = build_random_workspace(N, &deps, &edges);
        let anchor = format!("p{anchor}");
        let closure = graph.dependency_closure(&anchor);
        let members: HashSet<&str> = closure.iter().map(|r| r.project_id.as_str()).collect();

        prop_assert!(!members.contains(anchor.as_str()));
        prop_assert_eq!(members.len(), closure.len());

        // Every member has a dependency edge from the anchor or another member.
        for r in &closure {
            let has_parent = std::iter::once(anchor.as_str())
                .chain(members.iter().copied())
                .any(|src| {
                    graph.outgoing(src).iter().any(|e| {
                        e.to == r.project_id && e.relationship_type.is_dependency_edge()
                    })
                });
            prop_assert!(has_parent, "{} has no dependency parent", r.project_id);
        }

        let reach: HashSet<String> = graph
            .related_projects(&anchor, N)
            .into_iter()
            .map(|r| r.project_id)
            .collect();
        for id in members {
            prop_assert!(reach.contains(id));
        }
    }
}
