//! Property-based tests for scoring and ranking invariants

use phonesage::catalog::PhoneRecord;
use phonesage::query::{CriteriaSet, Focus};
use phonesage::retrieval::{rank, score};
use quickcheck_macros::quickcheck;

fn record(name: &str, battery_mah: u32) -> PhoneRecord {
    PhoneRecord {
        model_name: name.to_string(),
        battery: format!("{battery_mah} mAh"),
        camera: "50 MP main".to_string(),
        ram: "8GB".to_string(),
        price: "$799".to_string(),
        ..Default::default()
    }
}

#[quickcheck]
fn score_monotonic_in_battery(a: u16, b: u16, battery_focus: bool, budget: Option<u16>) -> bool {
    let (lo, hi) = (a.min(b), a.max(b));
    let focus = if battery_focus {
        Some(Focus::Battery)
    } else {
        None
    };
    let criteria = CriteriaSet {
        price_max: budget.map(f64::from),
        focus,
    };

    let lo_score = score(&record("X", u32::from(lo)), focus, &criteria);
    let hi_score = score(&record("X", u32::from(hi)), focus, &criteria);

    // Raising battery capacity with everything else fixed never hurts
    hi_score >= lo_score
}

#[quickcheck]
fn rank_never_exceeds_three(batteries: Vec<u16>) -> bool {
    let records: Vec<PhoneRecord> = batteries
        .iter()
        .enumerate()
        .map(|(i, mah)| record(&format!("P{i}"), u32::from(*mah)))
        .collect();

    let ranked = rank(&records, None, &CriteriaSet::default());
    ranked.len() <= 3 && ranked.len() <= records.len()
}

#[quickcheck]
fn rank_is_stable_on_equal_scores(count: u8) -> bool {
    // Identical records tie exactly; ranking must keep input order
    let count = usize::from(count % 12);
    let records: Vec<PhoneRecord> = (0..count)
        .map(|i| record(&format!("P{i}"), 4500))
        .collect();

    let ranked = rank(&records, None, &CriteriaSet::default());
    ranked
        .iter()
        .enumerate()
        .all(|(i, r)| r.model_name == format!("P{i}"))
}

#[quickcheck]
fn score_is_deterministic(battery: u16, battery_focus: bool) -> bool {
    let focus = if battery_focus {
        Some(Focus::Battery)
    } else {
        Some(Focus::Camera)
    };
    let criteria = CriteriaSet {
        price_max: Some(1000.0),
        focus,
    };
    let r = record("X", u32::from(battery));

    score(&r, focus, &criteria) == score(&r, focus, &criteria)
}
