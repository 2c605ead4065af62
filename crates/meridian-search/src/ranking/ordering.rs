//! Total order over scored hits.
//!
//! final_score descending, then relation kind (self, dependency, related,
//! unrelated), then project id ascending, then document id ascending.

use std::cmp::Ordering;

use super::scorer::ScoredHit;

pub fn compare(a: &ScoredHit, b: &ScoredHit) -> Ordering {
    b.final_score
        .total_cmp(&a.final_score)
        .then_with(|| a.relation_kind.cmp(&b.relation_kind))
        .then_with(|| a.hit.project_id.cmp(&b.hit.project_id))
        .then_with(|| a.hit.document_id.cmp(&b.hit.document_id))
}

pub fn sort(hits: &mut [ScoredHit]) {
    hits.sort_by(compare);
}
