use lazy_static::lazy_static;
use std::collections::HashSet;

lazy_static! {
    static ref ABBREVIATIONS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "mr", "mrs", "ms", "dr", "prof", "rev", "sr", "jr", "st",
            "vs", "etc", "al", "inc", "ltd", "co", "fig", "e.g", "i.e", "cf",
        ];
        words.iter().copied().collect()
    };
}

/// Split a paragraph of prose into sentence spans.
///
/// A sentence ends at a run of `.` `!` `?` followed by whitespace or the end
/// of input. Closing quotes and brackets after the terminator stay with the
/// sentence. A period after a known abbreviation or a single initial does not
/// end a sentence; decimals like `3.14` never split because the terminator is
/// not followed by whitespace. Spans are trimmed and empty spans dropped.
pub fn split_sentences(paragraph: &str) -> Vec<String> {
    let chars: Vec<char> = paragraph.chars().collect();
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];
        current.push(ch);
        if matches!(ch, '.' | '!' | '?') {
            while i + 1 < chars.len() && matches!(chars[i + 1], '.' | '!' | '?') {
                i += 1;
                current.push(chars[i]);
            }
            while i + 1 < chars.len() && matches!(chars[i + 1], '"' | '\'' | ')' | ']' | '\u{201d}' | '\u{2019}') {
                i += 1;
                current.push(chars[i]);
            }
            let at_break = i + 1 >= chars.len() || chars[i + 1].is_whitespace();
            if at_break && !(ch == '.' && ends_with_abbreviation(&current)) {
                push_trimmed(&mut sentences, &mut current);
            }
        }
        i += 1;
    }
    push_trimmed(&mut sentences, &mut current);
    sentences
}

fn ends_with_abbreviation(current: &str) -> bool {
    let Some(word) = current.split_whitespace().last() else { return false };
    let word = word
        .trim_end_matches(|c: char| matches!(c, '.' | '"' | '\'' | ')' | ']' | '\u{201d}' | '\u{2019}'))
        .to_lowercase();
    // single letters guard initials like "J. Smith"
    ABBREVIATIONS.contains(word.as_str()) || (word.chars().count() == 1 && word.chars().all(|c| c.is_alphabetic()))
}

fn push_trimmed(sentences: &mut Vec<String>, current: &mut String) {
    let span = current.trim();
    if !span.is_empty() {
        sentences.push(span.to_string());
    }
    current.clear();
}
