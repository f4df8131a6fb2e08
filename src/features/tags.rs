//! Part-of-speech classes as patterns over ILSP morphosyntactic tags.
//!
//! Tags are positional (`NoCmMaSgNm`, `VbMnIdPr03SgXxPeAvXx`, ...), so every
//! class is a pattern anchored at the start of the tag.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::Token;

/// Feature name and tag pattern of every counted word class
pub const TAG_CLASSES: &[(&str, &str)] = &[
    ("Noun", "No"),
    ("NoPr", "NoPr"),
    ("Dig", "DIG"),
    ("RgFw", "RgFw"),
    ("Verb", "Vb"),
    ("Adj", "Aj"),
    ("Adv", "Ad"),
    ("Prn", "Pn"),
    ("PnPe", "PnPe"),
    ("PnPe1", "PnPe..01"),
    ("PnPe2", "PnPe..02"),
    ("PnRe", "PnRe"),
    ("PnRi", "PnRi"),
    ("PnIr", "PnIr"),
    ("Cnj", "Cj"),
    ("Prep", "AsPp"),
    ("Pt", "Pt"),
    ("PtSj", "PtSj"),
    ("PVerb", "Vb(..){7}Pv"),
    ("Vb1", "Vb(..){3}01"),
    ("Vb2", "Vb(..){3}02"),
    ("VbPr", "Vb(..){2}Pr"),
    ("VbPa", "Vb(..){2}Pa"),
    ("Pp", "VbMnPp"),
    ("PpPv", "VbMnPp(..){5}Pv"),
    ("CjCo", "CjCo"),
    ("CjSb", "CjSb"),
    ("NoGe", "No.*Ge"),
];

static COMPILED: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    TAG_CLASSES
        .iter()
        .map(|(name, pattern)| (*name, Regex::new(&format!("^(?:{})", pattern)).unwrap()))
        .collect()
});

/// Compiled pattern for a word class, if the name is one
pub fn tag_pattern(class: &str) -> Option<&'static Regex> {
    COMPILED
        .iter()
        .find(|(name, _)| *name == class)
        .map(|(_, regex)| regex)
}

/// Whether a token's tag starts with the class pattern
pub fn matches_class(pattern: &Regex, token: &Token) -> bool {
    pattern.is_match(&token.tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(tag: &str) -> Token {
        Token::new("x", "x", tag)
    }

    #[test]
    fn test_every_class_compiles() {
        for (name, _) in TAG_CLASSES {
            assert!(tag_pattern(name).is_some(), "{} has no pattern", name);
        }
        assert!(tag_pattern("Interjection").is_none());
    }

    #[test]
    fn test_patterns_anchor_at_tag_start() {
        let noun = tag_pattern("Noun").unwrap();
        assert!(matches_class(noun, &tagged("NoCmFeSgNm")));
        assert!(!matches_class(noun, &tagged("AjBaFeSgNo")));
    }

    #[test]
    fn test_positional_classes() {
        let first_person = tag_pattern("Vb1").unwrap();
        assert!(matches_class(first_person, &tagged("VbMnIdPr01SgXxIpAvXx")));
        assert!(!matches_class(first_person, &tagged("VbMnIdPr03SgXxIpAvXx")));

        let passive = tag_pattern("PVerb").unwrap();
        assert!(matches_class(passive, &tagged("VbMnIdPa03SgXxPePvXx")));
        assert!(!matches_class(passive, &tagged("VbMnIdPa03SgXxPeAvXx")));

        let pronoun = tag_pattern("PnPe2").unwrap();
        assert!(matches_class(pronoun, &tagged("PnPeFe02SgNmSt")));
    }

    #[test]
    fn test_genitive_noun() {
        let genitive = tag_pattern("NoGe").unwrap();
        assert!(matches_class(genitive, &tagged("NoCmMaSgGe")));
        assert!(!matches_class(genitive, &tagged("NoCmMaSgAc")));
    }
}
