//! Deterministic per-intent answer templates
//!
//! The infallible tail of the generation chain. Rendering never errors:
//! unparseable magnitudes degrade to whatever text the record carries, and a
//! zero-record result short-circuits to the fixed not-found message before
//! any intent dispatch.

use crate::catalog::PhoneRecord;
use crate::query::{Focus, Intent};
use crate::retrieval::RetrievalResult;

/// Fixed message for queries that matched nothing in the catalog
pub fn no_phones_message() -> String {
    "I couldn't find any Samsung phones matching your query. Please try rephrasing \
     your question or ask about specific models like Galaxy S24 Ultra, S23, A54, etc."
        .to_string()
}

/// Render a retrieval result into prose, per intent
pub fn render(result: &RetrievalResult) -> String {
    if result.records.is_empty() {
        return no_phones_message();
    }

    match result.intent {
        Intent::Specs => render_specs(result),
        Intent::Comparison => render_comparison(result),
        Intent::Recommendation => render_recommendation(result),
        Intent::General => render_general(result),
    }
}

fn render_specs(result: &RetrievalResult) -> String {
    let phone = &result.records[0];
    format!(
        "{} specifications:\n\n\
         • Display: {}\n\
         • Battery: {}\n\
         • Camera: {}\n\
         • RAM: {}\n\
         • Storage: {}\n\
         • Chipset: {}\n\
         • OS: {}\n\
         • Price: {}\n\
         • Released: {}",
        phone.model_name,
        phone.display,
        phone.battery,
        phone.camera,
        phone.ram,
        phone.storage,
        phone.chipset,
        phone.os,
        phone.price,
        phone.release_date,
    )
}

fn render_comparison(result: &RetrievalResult) -> String {
    if result.records.len() < 2 {
        // One record still renders; the engine only builds comparison
        // payloads from two.
        return render_specs(result);
    }

    let a = &result.records[0];
    let b = &result.records[1];

    let mut out = format!("Comparing {} vs {}:\n\n", a.model_name, b.model_name);

    let sections: [(&str, fn(&PhoneRecord) -> &str); 4] = [
        ("Display", |p| &p.display),
        ("Battery", |p| &p.battery),
        ("Camera", |p| &p.camera),
        ("Price", |p| &p.price),
    ];
    for (label, value) in sections {
        out.push_str(&format!(
            "{}:\n  • {}: {}\n  • {}: {}\n\n",
            label,
            a.model_name,
            value(a),
            b.model_name,
            value(b),
        ));
    }

    out.push_str("Recommendation:\n");
    out.push_str(&comparison_verdict(result, a, b));
    out
}

/// One-line verdict keyed off the focus dimension. Falls back to the
/// newer/first-listed line whenever the magnitudes needed don't parse.
fn comparison_verdict(result: &RetrievalResult, a: &PhoneRecord, b: &PhoneRecord) -> String {
    let camera_focused = result.criteria.focus == Some(Focus::Camera)
        || result.query.to_lowercase().contains("photo");

    if camera_focused {
        if let (Some(mp_a), Some(mp_b)) = (a.camera_mp(), b.camera_mp()) {
            return if mp_a > mp_b {
                format!(
                    "{} has a better camera ({}MP vs {}MP) and is recommended for photography.",
                    a.model_name, mp_a, mp_b
                )
            } else if mp_b > mp_a {
                format!(
                    "{} has a better camera ({}MP vs {}MP) and is recommended for photography.",
                    b.model_name, mp_b, mp_a
                )
            } else {
                "Both phones have similar camera capabilities. Consider other factors like \
                 price and features."
                    .to_string()
            };
        }
    } else if result.criteria.focus == Some(Focus::Battery) {
        if let (Some(mah_a), Some(mah_b)) = (a.battery_mah(), b.battery_mah()) {
            return if mah_a > mah_b {
                format!(
                    "{} has better battery life ({}mAh vs {}mAh).",
                    a.model_name, mah_a, mah_b
                )
            } else if mah_b > mah_a {
                format!(
                    "{} has better battery life ({}mAh vs {}mAh).",
                    b.model_name, mah_b, mah_a
                )
            } else {
                "Both phones have similar battery capacity.".to_string()
            };
        }
    }

    format!(
        "{} is the newer model with improved overall performance and features.",
        a.model_name
    )
}

fn render_recommendation(result: &RetrievalResult) -> String {
    let picks: Vec<&PhoneRecord> = if result.top_picks.is_empty() {
        result.records.iter().take(3).collect()
    } else {
        result.top_picks.iter().collect()
    };

    if picks.is_empty() {
        return "I couldn't find phones matching your criteria.".to_string();
    }

    // Title precedence: focus beats budget beats the generic lead-in
    let mut title = "Based on your requirements, here are my recommendations:".to_string();
    if let Some(max) = result.criteria.price_max {
        title = format!("Best Samsung phones under ${}:", max as i64);
    }
    match result.criteria.focus {
        Some(Focus::Battery) => title = "Best Samsung phones for battery life:".to_string(),
        Some(Focus::Camera) => title = "Best Samsung phones for photography:".to_string(),
        _ => {}
    }

    let mut out = format!("{title}\n\n");
    for (index, phone) in picks.iter().take(3).enumerate() {
        out.push_str(&format!(
            "{}. {}\n   • Price: {}\n   • Battery: {}\n   • Camera: {}\n   • Display: {}\n\n",
            index + 1,
            phone.model_name,
            phone.price,
            phone.battery,
            phone.camera,
            phone.display,
        ));
    }

    out.push_str(&format!(
        "Top recommendation: {} offers the best value for your needs.",
        picks[0].model_name
    ));
    out
}

fn render_general(result: &RetrievalResult) -> String {
    match result.records.len() {
        0 => "Please ask about specific Samsung phone models or describe what you're \
              looking for."
            .to_string(),
        1 => render_specs(result),
        _ => render_recommendation(result),
    }
}
