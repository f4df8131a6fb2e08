//! Turn raw annotation rows into sentences, dependency tables and phrase
//! events.
//!
//! Chunk rows carry `[id, category, surface-or-marker, lemma, tag]`;
//! CoNLL rows carry the position in field 0, the head in field 6 and the
//! relation label in field 7.

use crate::core::{DependencyRow, PhraseEvent, Sentence, Token};
use crate::diagnostics::{Diagnostic, Diagnostics};

use super::reader::Row;

pub const SENTENCE_START: &str = "(SENT";
pub const SENTENCE_END: &str = ")SENT";
pub const SYNTAX_MARKER: &str = "SYN";

const CATEGORY_FIELD: usize = 1;
const SURFACE_FIELD: usize = 2;
const LEMMA_FIELD: usize = 3;
const TAG_FIELD: usize = 4;

const POSITION_FIELD: usize = 0;
const HEAD_FIELD: usize = 6;
const RELATION_FIELD: usize = 7;

/// Token categories counted as words
pub fn default_word_categories() -> Vec<String> {
    ["TOK", "ABBR", "DIG"].iter().map(|c| c.to_string()).collect()
}

fn is_word(row: &Row, word_categories: &[String]) -> bool {
    let category = row.field(CATEGORY_FIELD);
    word_categories.iter().any(|c| c == category)
}

fn token_from_row(row: &Row) -> Token {
    Token::new(
        row.field(SURFACE_FIELD),
        row.field(LEMMA_FIELD),
        row.field(TAG_FIELD),
    )
}

/// Group word rows into sentences delimited by `(SENT` / `)SENT`.
///
/// A sentence with no words still counts. Broken delimiting never loses
/// words: words outside any sentence open an implicit one, a `(SENT` inside
/// an open sentence closes it first, and a trailing open sentence is kept.
pub fn segment_sentences(
    rows: &[Row],
    word_categories: &[String],
    diagnostics: &mut Diagnostics,
) -> Vec<Sentence> {
    let mut sentences = Vec::new();
    let mut current: Option<(usize, Vec<Token>)> = None;

    for row in rows {
        match row.field(CATEGORY_FIELD) {
            SENTENCE_START => {
                if let Some((line, tokens)) = current.take() {
                    diagnostics.report(Diagnostic::UnterminatedSentence { line });
                    sentences.push(Sentence::new(tokens));
                }
                current = Some((row.line, Vec::new()));
            }
            SENTENCE_END => match current.take() {
                Some((_, tokens)) => sentences.push(Sentence::new(tokens)),
                None => diagnostics.report(Diagnostic::UnexpectedSentenceEnd { line: row.line }),
            },
            _ if is_word(row, word_categories) => {
                current
                    .get_or_insert_with(|| {
                        diagnostics.report(Diagnostic::UnterminatedSentence { line: row.line });
                        (row.line, Vec::new())
                    })
                    .1
                    .push(token_from_row(row));
            }
            _ => {}
        }
    }

    if let Some((line, tokens)) = current {
        diagnostics.report(Diagnostic::UnterminatedSentence { line });
        sentences.push(Sentence::new(tokens));
    }

    sentences
}

/// Rows that are neither sentence delimiters nor syntax markers
pub fn count_all_tokens(rows: &[Row]) -> usize {
    rows.iter()
        .filter(|row| {
            !matches!(
                row.field(CATEGORY_FIELD),
                SENTENCE_START | SENTENCE_END | SYNTAX_MARKER
            )
        })
        .count()
}

/// Parse CoNLL rows; rows without integer position and head are skipped
pub fn dependency_rows(rows: &[Row], diagnostics: &mut Diagnostics) -> Vec<DependencyRow> {
    rows.iter()
        .filter_map(|row| {
            let position = row.field(POSITION_FIELD).trim().parse::<usize>();
            let head = row.field(HEAD_FIELD).trim().parse::<usize>();
            match (position, head) {
                (Ok(position), Ok(head)) if position > 0 => Some(
                    DependencyRow::new(position, head).with_relation(row.field(RELATION_FIELD)),
                ),
                _ => {
                    diagnostics.report(Diagnostic::MalformedRow {
                        line: row.line,
                        reason: format!(
                            "expected integer position and head, found '{}' and '{}'",
                            row.field(POSITION_FIELD),
                            row.field(HEAD_FIELD)
                        ),
                    });
                    None
                }
            }
        })
        .collect()
}

/// Split a flat dependency table into sentences wherever position 1 restarts
pub fn dependency_sentences(rows: &[DependencyRow]) -> Vec<Vec<DependencyRow>> {
    let mut sentences: Vec<Vec<DependencyRow>> = Vec::new();
    for row in rows {
        match sentences.last_mut() {
            Some(sentence) if row.position != 1 => sentence.push(row.clone()),
            _ => sentences.push(vec![row.clone()]),
        }
    }
    sentences
}

/// Classify chunk rows for the phrase bracket parser
pub fn phrase_events(rows: &[Row], word_categories: &[String]) -> Vec<PhraseEvent> {
    rows.iter()
        .map(|row| {
            if is_word(row, word_categories) {
                return PhraseEvent::Word;
            }
            let marker = row.field(SURFACE_FIELD);
            if let Some(category) = marker.strip_prefix('[') {
                PhraseEvent::Open(category.to_string())
            } else if let Some(category) = marker
                .strip_prefix('/')
                .and_then(|rest| rest.strip_suffix(']'))
            {
                PhraseEvent::Close(category.to_string())
            } else {
                PhraseEvent::Other
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(lines: &[&str]) -> Vec<Row> {
        lines
            .iter()
            .enumerate()
            .map(|(i, line)| Row::from_tabbed(i + 1, line))
            .collect()
    }

    #[test]
    fn test_segment_well_formed_text() {
        let input = rows(&[
            "0\t(SENT",
            "1\tTOK\tΗ\tο\tAtDfFeSgNm",
            "2\tTOK\tγάτα\tγάτα\tNoCmFeSgNm",
            "3\tPUNCT\t.\t.\tPTERM_P",
            "0\t)SENT",
            "0\t(SENT",
            "4\tDIG\t2015\t2015\tDIG",
            "0\t)SENT",
        ]);
        let mut diagnostics = Diagnostics::new();
        let sentences = segment_sentences(&input, &default_word_categories(), &mut diagnostics);

        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].len(), 2);
        assert_eq!(sentences[0].tokens[0].word_type, "η");
        assert_eq!(sentences[1].tokens[0].tag, "DIG");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_missing_end_marker_flushes_sentence() {
        let input = rows(&["0\t(SENT", "1\tTOK\tα\tα\tNo", "0\t(SENT", "2\tTOK\tβ\tβ\tVb"]);
        let mut diagnostics = Diagnostics::new();
        let sentences = segment_sentences(&input, &default_word_categories(), &mut diagnostics);

        assert_eq!(sentences.len(), 2);
        assert_eq!(diagnostics.count_kind("unterminated_sentence"), 2);
    }

    #[test]
    fn test_word_before_start_opens_implicit_sentence() {
        let input = rows(&["1\tTOK\tα\tα\tNo", "0\t)SENT", "0\t)SENT"]);
        let mut diagnostics = Diagnostics::new();
        let sentences = segment_sentences(&input, &default_word_categories(), &mut diagnostics);

        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].len(), 1);
        assert_eq!(diagnostics.count_kind("unterminated_sentence"), 1);
        assert_eq!(diagnostics.count_kind("unexpected_sentence_end"), 1);
    }

    #[test]
    fn test_custom_word_categories() {
        let input = rows(&["0\t(SENT", "1\tTOK\tα\tα\tNo", "2\tABBR\tκ.\tκ.\tAb", "0\t)SENT"]);
        let mut diagnostics = Diagnostics::new();
        let sentences = segment_sentences(&input, &["TOK".to_string()], &mut diagnostics);
        assert_eq!(sentences[0].len(), 1);
    }

    #[test]
    fn test_count_all_tokens_excludes_markers() {
        let input = rows(&[
            "0\t(SENT",
            "1\tTOK\tα\tα\tNo",
            "0\tSYN\t[np_nm",
            "2\tPUNCT\t.\t.\tPTERM_P",
            "0\t)SENT",
        ]);
        assert_eq!(count_all_tokens(&input), 2);
    }

    #[test]
    fn test_dependency_rows_and_sentences() {
        let input = rows(&[
            "1\tΗ\tο\tAt\tAt\t_\t2\tAtr",
            "2\tγάτα\tγάτα\tNo\tNo\t_\t0\tSb",
            "1\tΚοιμάται\tκοιμάμαι\tVb\tVb\t_\t0\tPred",
            "2\t.\t.\tPUNCT\tPUNCT\t_\t1\tAuxK",
        ]);
        let mut diagnostics = Diagnostics::new();
        let parsed = dependency_rows(&input, &mut diagnostics);
        assert_eq!(parsed.len(), 4);
        assert_eq!(parsed[1].relation, "Sb");

        let sentences = dependency_sentences(&parsed);
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[1][1].head, 1);
    }

    #[test]
    fn test_malformed_dependency_row_is_skipped() {
        let input = rows(&["1\tα\tα\tNo\tNo\t_\tx\tSb", "2\tβ\tβ\tVb\tVb\t_\t0\tPred"]);
        let mut diagnostics = Diagnostics::new();
        let parsed = dependency_rows(&input, &mut diagnostics);
        assert_eq!(parsed.len(), 1);
        assert_eq!(diagnostics.count_kind("malformed_row"), 1);
    }

    #[test]
    fn test_rows_before_first_position_one_form_a_sentence() {
        let parsed = vec![DependencyRow::new(2, 0), DependencyRow::new(1, 0)];
        assert_eq!(dependency_sentences(&parsed).len(), 2);
        assert!(dependency_sentences(&[]).is_empty());
    }

    #[test]
    fn test_phrase_events() {
        let input = rows(&[
            "0\tSYN\t[np_nm",
            "1\tTOK\tα\tα\tNo",
            "0\tSYN\t/np_nm]",
            "2\tPUNCT\t.\t.\tPTERM_P",
        ]);
        let events = phrase_events(&input, &default_word_categories());
        assert_eq!(
            events,
            vec![
                PhraseEvent::Open("np_nm".into()),
                PhraseEvent::Word,
                PhraseEvent::Close("np_nm".into()),
                PhraseEvent::Other,
            ]
        );
    }
}
