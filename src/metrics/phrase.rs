//! Phrase lengths from bracketed chunk markup.
//!
//! The markup is flat: `[np_nm` and `/np_nm]` rows interleaved with word
//! rows. One running word counter is kept per open nesting level of the
//! category of interest. Closing a level appends its count and folds it into
//! the enclosing level, so an outer phrase's length includes the words of
//! the phrases nested in it.

use crate::core::PhraseEvent;
use crate::diagnostics::{Diagnostic, Diagnostics};

/// Word count of every completed `category` phrase, in closing order.
///
/// Unbalanced markup never fails: a close with nothing open is reported and
/// ignored, phrases still open at the end are reported and dropped.
pub fn phrase_lengths(
    events: &[PhraseEvent],
    category: &str,
    diagnostics: &mut Diagnostics,
) -> Vec<usize> {
    let mut lengths = Vec::new();
    let mut open: Vec<usize> = Vec::new();

    for event in events {
        match event {
            PhraseEvent::Open(c) if c == category => open.push(0),
            PhraseEvent::Close(c) if c == category => match open.pop() {
                Some(length) => {
                    lengths.push(length);
                    if let Some(parent) = open.last_mut() {
                        *parent += length;
                    }
                }
                None => diagnostics.report(Diagnostic::MalformedMarkup {
                    category: category.to_string(),
                    reason: "end of phrase without a matching start".to_string(),
                }),
            },
            PhraseEvent::Word => {
                if let Some(innermost) = open.last_mut() {
                    *innermost += 1;
                }
            }
            _ => {}
        }
    }

    if !open.is_empty() {
        diagnostics.report(Diagnostic::MalformedMarkup {
            category: category.to_string(),
            reason: format!("{} phrase(s) never closed", open.len()),
        });
    }

    lengths
}

/// Number of `category` phrases opened
pub fn phrase_count(events: &[PhraseEvent], category: &str) -> usize {
    events.iter().filter(|event| event.opens(category)).count()
}

/// Mean of a length list, 0 when empty
pub fn mean_phrase_length(lengths: &[usize]) -> f64 {
    super::dependency::mean(lengths.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(category: &str) -> PhraseEvent {
        PhraseEvent::Open(category.to_string())
    }

    fn close(category: &str) -> PhraseEvent {
        PhraseEvent::Close(category.to_string())
    }

    fn words(count: usize) -> Vec<PhraseEvent> {
        vec![PhraseEvent::Word; count]
    }

    fn stream(parts: Vec<Vec<PhraseEvent>>) -> Vec<PhraseEvent> {
        parts.into_iter().flatten().collect()
    }

    #[test]
    fn test_single_balanced_phrase() {
        let events = stream(vec![vec![open("np_nm")], words(4), vec![close("np_nm")]]);
        let mut diagnostics = Diagnostics::new();
        assert_eq!(phrase_lengths(&events, "np_nm", &mut diagnostics), vec![4]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_sequential_phrases() {
        let events = stream(vec![
            vec![open("vg")],
            words(2),
            vec![close("vg")],
            words(3),
            vec![open("vg")],
            words(1),
            vec![close("vg")],
        ]);
        let mut diagnostics = Diagnostics::new();
        assert_eq!(phrase_lengths(&events, "vg", &mut diagnostics), vec![2, 1]);
    }

    #[test]
    fn test_nested_phrase_counts_into_outer() {
        let events = stream(vec![
            vec![open("cl")],
            words(1),
            vec![open("cl")],
            words(3),
            vec![close("cl")],
            words(1),
            vec![close("cl")],
        ]);
        let mut diagnostics = Diagnostics::new();
        assert_eq!(phrase_lengths(&events, "cl", &mut diagnostics), vec![3, 5]);
    }

    #[test]
    fn test_other_categories_and_events_are_ignored() {
        let events = stream(vec![
            vec![open("np_nm"), open("pp")],
            words(2),
            vec![PhraseEvent::Other, close("pp")],
            words(1),
            vec![close("np_nm")],
        ]);
        let mut diagnostics = Diagnostics::new();
        assert_eq!(phrase_lengths(&events, "np_nm", &mut diagnostics), vec![3]);
        assert_eq!(phrase_lengths(&events, "pp", &mut diagnostics), vec![2]);
    }

    #[test]
    fn test_stray_close_is_reported_and_ignored() {
        let events = stream(vec![
            vec![close("np_ac")],
            vec![open("np_ac")],
            words(2),
            vec![close("np_ac")],
        ]);
        let mut diagnostics = Diagnostics::new();
        assert_eq!(phrase_lengths(&events, "np_ac", &mut diagnostics), vec![2]);
        assert_eq!(diagnostics.count_kind("malformed_markup"), 1);
    }

    #[test]
    fn test_unclosed_phrase_is_dropped() {
        let events = stream(vec![vec![open("advp")], words(2)]);
        let mut diagnostics = Diagnostics::new();
        assert!(phrase_lengths(&events, "advp", &mut diagnostics).is_empty());
        assert_eq!(diagnostics.count_kind("malformed_markup"), 1);
    }

    #[test]
    fn test_phrase_count_and_mean() {
        let events = stream(vec![
            vec![open("pp")],
            words(2),
            vec![close("pp"), open("pp")],
            words(4),
            vec![close("pp")],
        ]);
        let mut diagnostics = Diagnostics::new();
        assert_eq!(phrase_count(&events, "pp"), 2);
        let lengths = phrase_lengths(&events, "pp", &mut diagnostics);
        assert_eq!(mean_phrase_length(&lengths), 3.0);
        assert_eq!(mean_phrase_length(&[]), 0.0);
    }
}
