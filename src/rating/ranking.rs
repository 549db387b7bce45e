use anyhow::Result;
use log::warn;
use std::cmp::Ordering;

use crate::domain::{DayIndex, Gender, RankingCandidate, RankingEntry};

use super::round2;
use super::uncertainty::current_estimate;

/// Ranks players by their latest rating, carrying each error forward to `today`.
///
/// Candidates are expected to be the latest evaluation per player inside the
/// recency window; anything evaluated on or before `today - recency_days` is
/// dropped here as well.
pub fn derive_ranking(
    candidates: &[RankingCandidate],
    gender: Gender,
    today: DayIndex,
    recency_days: i64,
) -> Result<Vec<RankingEntry>> {
    let cutoff = today - recency_days;
    let mut recent: Vec<&RankingCandidate> = candidates
        .iter()
        .filter(|c| c.point.date > cutoff)
        .collect();
    recent.sort_by(|a, b| compare_candidates(a, b));

    let mut entries = Vec::with_capacity(recent.len());
    for (idx, candidate) in recent.into_iter().enumerate() {
        let estimate = current_estimate(&candidate.point, gender, today)?;
        entries.push(RankingEntry {
            rank: (idx + 1) as u32,
            id: candidate.id,
            name: display_name(candidate),
            name_zh: Some(
                candidate
                    .name_zh
                    .clone()
                    .unwrap_or_else(|| display_name(candidate)),
            ),
            yob: candidate.yob.clone(),
            association: candidate.association.clone(),
            association_zh: Some(candidate.association_zh.clone().unwrap_or_default()),
            rating: round2(estimate.rating),
            error: estimate.error,
            adjusted_rating: Some(round2(estimate.rating - estimate.error)),
        });
    }

    Ok(entries)
}

fn compare_candidates(a: &RankingCandidate, b: &RankingCandidate) -> Ordering {
    b.point
        .rating
        .total_cmp(&a.point.rating)
        .then_with(|| a.id.cmp(&b.id))
}

fn display_name(candidate: &RankingCandidate) -> String {
    match &candidate.name {
        Some(name) => name.clone(),
        None => {
            warn!("Player {} has no profile, using id as name", candidate.id);
            candidate.id.to_string()
        }
    }
}
