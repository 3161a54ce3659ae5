//! Additive candidate scoring and top-3 ranking
//!
//! Every signal contributes only when its magnitude parses out of the record's
//! text field; unparseable fields contribute nothing. The function is pure:
//! identical inputs always produce identical scores.

use crate::catalog::PhoneRecord;
use crate::query::{CriteriaSet, Focus};

/// How many records a ranked shortlist may contain
pub const SHORTLIST_SIZE: usize = 3;

/// A record paired with its score; transient ranking artifact
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub record: PhoneRecord,
    pub score: f64,
}

/// Score one record against a focus and criteria set.
///
/// Base signals: battery mAh / 1000, camera MP / 50, RAM GB / 4. The focus
/// adds a weighted bonus on its dimension, and a price ceiling adds +3 under
/// budget or -5 over it (only when the record's price parses).
pub fn score(record: &PhoneRecord, focus: Option<Focus>, criteria: &CriteriaSet) -> f64 {
    let mut total = 0.0;

    let battery = record.battery_mah();
    let camera = record.camera_mp();

    if let Some(mah) = battery {
        total += mah as f64 / 1000.0;
    }
    if let Some(mp) = camera {
        total += mp as f64 / 50.0;
    }
    if let Some(gb) = record.ram_gb() {
        total += gb as f64 / 4.0;
    }

    match focus {
        Some(Focus::Battery) => {
            if let Some(mah) = battery {
                total += mah as f64 / 500.0;
            }
        }
        Some(Focus::Camera) => {
            if let Some(mp) = camera {
                total += mp as f64 / 25.0;
            }
        }
        Some(Focus::Display) => {
            let display = record.display.to_lowercase();
            if display.contains("120hz") || display.contains("120 hz") {
                total += 2.0;
            }
            if display.contains("amoled") {
                total += 1.0;
            }
        }
        None => {}
    }

    if let Some(max) = criteria.price_max {
        if let Some(price) = record.price_usd() {
            if price <= max {
                total += 3.0;
            } else {
                total -= 5.0;
            }
        }
    }

    total
}

/// Rank records descending by score and keep the top 3. The sort is stable:
/// equal scores keep their input order.
pub fn rank(records: &[PhoneRecord], focus: Option<Focus>, criteria: &CriteriaSet) -> Vec<PhoneRecord> {
    let mut scored: Vec<ScoredCandidate> = records
        .iter()
        .map(|record| ScoredCandidate {
            score: score(record, focus, criteria),
            record: record.clone(),
        })
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(SHORTLIST_SIZE);
    scored.into_iter().map(|c| c.record).collect()
}
