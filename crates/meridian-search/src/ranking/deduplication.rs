//! Collapse repeated (project_id, document_id) pairs.

use std::collections::HashSet;

use super::scorer::ScoredHit;

/// Keep the first occurrence of each (project_id, document_id) pair.
///
/// Input must already be sorted, so the survivor is the best-ranked copy.
pub fn deduplicate(sorted: Vec<ScoredHit>) -> Vec<ScoredHit> {
    let mut seen: HashSet<(String, String)> = HashSet::with_capacity(sorted.len());
    sorted
        .into_iter()
        .filter(|s| seen.insert((s.hit.project_id.clone(), s.hit.document_id.clone())))
        .collect()
}
