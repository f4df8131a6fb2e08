// Shared fixtures for featext integration tests
#![allow(dead_code)]

use featext::core::{DependencyRow, Sentence, Token};
use featext::TextData;
use indoc::indoc;
use std::fs;
use std::path::Path;

/// Two sentences with phrase markup: "Η γάτα κάθισε." and "Ο σκύλος τρέχει γρήγορα."
pub const CHUNK: &str = indoc! {"
    0\t(SENT
    0\tSYN\t[cl
    0\tSYN\t[np_nm
    1\tTOK\tΗ\tο\tAtDfFeSgNm
    2\tTOK\tγάτα\tγάτα\tNoCmFeSgNm
    0\tSYN\t/np_nm]
    0\tSYN\t[vg
    3\tTOK\tκάθισε\tκάθομαι\tVbMnIdPa03SgXxPeAvXx
    0\tSYN\t/vg]
    0\tSYN\t/cl]
    4\tPUNCT\t.\t.\tPTERM_P
    0\t)SENT
    0\t(SENT
    0\tSYN\t[np_nm
    1\tTOK\tΟ\tο\tAtDfMaSgNm
    2\tTOK\tσκύλος\tσκύλος\tNoCmMaSgNm
    0\tSYN\t/np_nm]
    0\tSYN\t[vg
    3\tTOK\tτρέχει\tτρέχω\tVbMnIdPr03SgXxIpAvXx
    0\tSYN\t/vg]
    0\tSYN\t[advp
    4\tTOK\tγρήγορα\tγρήγορα\tAdBaXxXx
    0\tSYN\t/advp]
    5\tPUNCT\t.\t.\tPTERM_P
    0\t)SENT
"};

/// Dependency rows for [`CHUNK`]
pub const CONLL: &str = indoc! {"
    1\tΗ\tο\tAt\tAt\t_\t2\tAtr
    2\tγάτα\tγάτα\tNo\tNo\t_\t3\tSb
    3\tκάθισε\tκάθομαι\tVb\tVb\t_\t0\tPred
    4\t.\t.\tPUNCT\tPUNCT\t_\t3\tAuxK
    1\tΟ\tο\tAt\tAt\t_\t2\tAtr
    2\tσκύλος\tσκύλος\tNo\tNo\t_\t3\tSb
    3\tτρέχει\tτρέχω\tVb\tVb\t_\t0\tPred
    4\tγρήγορα\tγρήγορα\tAd\tAd\t_\t3\tAdv
    5\t.\t.\tPUNCT\tPUNCT\t_\t3\tAuxK
"};

/// `[[the/Det cat/Noun sat/Verb]]`
pub fn cat_sat_text() -> TextData {
    TextData::from_sentences(vec![Sentence::new(vec![
        Token::new("the", "the", "AtDfXxSgXx"),
        Token::new("cat", "cat", "NoCmXxSgNm"),
        Token::new("sat", "sit", "VbMnIdPa03SgXxPeAvXx"),
    ])])
}

pub fn rows(pairs: &[(usize, usize)]) -> Vec<DependencyRow> {
    pairs
        .iter()
        .map(|&(position, head)| DependencyRow::new(position, head))
        .collect()
}

/// Write `<id>.chunk` and `<id>.conll` for every text
pub fn write_corpus(dir: &Path, texts: &[(&str, &str, &str)]) {
    for (id, chunk, conll) in texts {
        fs::write(dir.join(format!("{id}.chunk")), chunk).unwrap();
        fs::write(dir.join(format!("{id}.conll")), conll).unwrap();
    }
}
