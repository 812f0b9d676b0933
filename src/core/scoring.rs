use std::cmp::Ordering;
use crate::models::{Match, RecipientOrg};

/// Unmet need of a recipient: `totalCapacity - currentFoodStock`
///
/// Zero or negative values are kept; an over-supplied recipient still ranks,
/// just last.
#[inline]
pub fn calculate_need_score(ngo: &RecipientOrg) -> i64 {
    ngo.need_score()
}

/// Ranking order for matches: highest need first
///
/// Equal needs compare `Equal` so a stable sort keeps input order.
#[inline]
pub fn rank_by_need(a: &Match, b: &Match) -> Ordering {
    b.need_score.cmp(&a.need_score)
}
