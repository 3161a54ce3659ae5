//! Prompt context for generative backends
//!
//! Carries the question, classification, and at most five records' attribute
//! blocks. Rendering produces the single prompt string every LLM strategy
//! shares.

use crate::catalog::PhoneRecord;
use crate::query::{CriteriaSet, Intent};
use crate::retrieval::RetrievalResult;

/// Records included in a prompt, at most
const MAX_PROMPT_RECORDS: usize = 5;

/// Structured input to a [`super::ReviewGenerator`]
#[derive(Debug, Clone)]
pub struct PromptContext {
    pub question: String,
    pub intent: Intent,
    pub criteria: CriteriaSet,
    pub records: Vec<PhoneRecord>,
}

impl PromptContext {
    /// Build a context from a retrieval result, truncating to the record cap
    pub fn from_retrieval(result: &RetrievalResult) -> Self {
        Self {
            question: result.query.clone(),
            intent: result.intent,
            criteria: result.criteria.clone(),
            records: result
                .records
                .iter()
                .take(MAX_PROMPT_RECORDS)
                .cloned()
                .collect(),
        }
    }

    /// Render the full prompt sent to a generative backend
    pub fn render_prompt(&self) -> String {
        let mut phones_block = String::new();
        for record in &self.records {
            phones_block.push_str(&format!(
                "\nPhone: {}\n\
                 - Release: {}\n\
                 - Display: {}\n\
                 - Battery: {}\n\
                 - Camera: {}\n\
                 - RAM: {}\n\
                 - Storage: {}\n\
                 - Chipset: {}\n\
                 - Price: {}\n",
                record.model_name,
                record.release_date,
                record.display,
                record.battery,
                record.camera,
                record.ram,
                record.storage,
                record.chipset,
                record.price,
            ));
        }

        format!(
            "You are a Samsung phone expert assistant. Based on the following phone data, \
             answer the user's question.\n\n\
             User Question: {}\n\
             Query Type: {}\n\
             Criteria: {}\n\n\
             Available Phone Data:\n{}\n\
             Provide a helpful, concise response that:\n\
             1. Directly answers the user's question\n\
             2. Includes relevant specifications\n\
             3. Gives clear recommendations if asked\n\
             4. Highlights key differences in comparisons\n\
             Keep the response under 200 words and focus on the most relevant information.",
            self.question,
            self.intent.as_str(),
            self.describe_criteria(),
            phones_block,
        )
    }

    fn describe_criteria(&self) -> String {
        let mut parts = Vec::new();
        if let Some(max) = self.criteria.price_max {
            parts.push(format!("price_max={max}"));
        }
        if let Some(focus) = self.criteria.focus {
            parts.push(format!("focus={}", focus.as_str()));
        }
        if parts.is_empty() {
            "none".to_string()
        } else {
            parts.join(", ")
        }
    }
}
