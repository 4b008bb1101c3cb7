//! Extractive summarizer: keeps the leading share of sentences and pulls the
//! first clause out of every substantial paragraph.

use crate::models::summary::{SummaryOptions, TextSummary};

const WORDS_PER_MINUTE: usize = 200;
const MIN_KEY_POINT_PARAGRAPH_LEN: usize = 20;
const MAX_KEY_POINTS: usize = 5;

pub fn summarize_text(text: &str, options: SummaryOptions) -> TextSummary {
    let sentences = split_sentences(text);
    let keep = sentences_to_keep(sentences.len(), options.length.ratio());
    let summary = sentences[..keep].join(" ");

    let word_count = text.split_whitespace().count();

    TextSummary {
        summary,
        key_points: key_points(text),
        word_count,
        reading_time: reading_time(word_count),
    }
}

/// Minutes needed to read `word_count` words.
pub fn reading_time(word_count: usize) -> u32 {
    word_count.div_ceil(WORDS_PER_MINUTE) as u32
}

fn sentences_to_keep(total: usize, ratio: f64) -> usize {
    if total == 0 {
        return 0;
    }
    ((total as f64 * ratio).ceil() as usize).clamp(1, total)
}

/// Sentences end at `.`, `!` or `?`; a trailing unterminated run also counts.
fn split_sentences(text: &str) -> Vec<&str> {
    text.split_inclusive(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

fn key_points(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|p| p.chars().count() > MIN_KEY_POINT_PARAGRAPH_LEN)
        .filter_map(|p| {
            let clause = p.split(['.', '!', '?', ';']).next().unwrap_or(p).trim();
            (!clause.is_empty()).then(|| clause.to_string())
        })
        .take(MAX_KEY_POINTS)
        .collect()
}
