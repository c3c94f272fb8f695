//! Budget allocation - greedy admission of candidates under a token ceiling.

use super::activation::Candidate;

/// Approximate token count of a piece of content.
///
/// The engine's size metric is whitespace-delimited word count. It is an
/// approximation of model tokenization, chosen for determinism, and is
/// applied consistently to every entry.
pub fn estimate_tokens(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Admit candidates under the budget.
///
/// Admission order: highest effective priority first (absent priority is
/// most protected), then lower `insertion_order`, then authoring index.
/// Accumulation stops at the first candidate that would overflow the
/// budget; earlier admissions are final and are never evicted. A candidate
/// larger than the entire budget is dropped, never truncated.
pub fn allocate(mut candidates: Vec<Candidate<'_>>, token_budget: usize) -> Vec<Candidate<'_>> {
    candidates.sort_by(|a, b| {
        b.entry
            .effective_priority()
            .cmp(&a.entry.effective_priority())
            .then_with(|| a.entry.insertion_order.cmp(&b.entry.insertion_order))
            .then_with(|| a.index.cmp(&b.index))
    });

    let mut admitted = Vec::new();
    let mut spent = 0usize;
    for candidate in candidates {
        let size = estimate_tokens(&candidate.entry.content);
        if spent + size > token_budget {
            break;
        }
        spent += size;
        admitted.push(candidate);
    }
    admitted
}
