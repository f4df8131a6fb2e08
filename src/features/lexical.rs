//! Word and sentence based features: counts, word classes, ratios and
//! lexical diversity.

use std::collections::HashSet;

use crate::core::errors::{FeatureError, FeatureResult};
use crate::core::Token;
use crate::metrics::spectrum::{
    bucket_name, diversity_d, ratio, relative_entropy, shannon_entropy, yule_k,
};

use super::catalog::{FeatureCatalog, FeatureKind};
use super::tags::{matches_class, tag_pattern, TAG_CLASSES};

const KIND: FeatureKind = FeatureKind::Lexical;

/// `SL` features: sentences longer than the threshold
const SENTENCE_LENGTHS: &[(&str, usize)] = &[("SL10", 10), ("SL20", 20), ("SL30", 30)];

/// Ratio features: (name, summed numerators, denominator)
const RATIOS: &[(&str, &[&str], &str)] = &[
    ("m_TTR", &["T"], "N"),
    ("m_AWL", &["Char"], "N"),
    ("m_SL10toS", &["SL10"], "S"),
    ("m_SL20toS", &["SL20"], "S"),
    ("m_SL30toS", &["SL30"], "S"),
    ("m_ASL", &["N"], "S"),
    ("m_TTRLem", &["LemT"], "N"),
    ("m_NounToN", &["Noun"], "N"),
    ("m_NoPrToN", &["NoPr"], "N"),
    ("m_DigToN", &["Dig"], "N"),
    ("m_RgFwToN", &["RgFw"], "N"),
    ("m_VerbToN", &["Verb"], "N"),
    ("m_VerbToS", &["Verb"], "S"),
    ("m_NounToVerb", &["Noun"], "Verb"),
    ("m_AdjToN", &["Adj"], "N"),
    ("m_AdjToNoun", &["Adj"], "Noun"),
    ("m_AdjToS", &["Adj"], "S"),
    ("m_AdvToN", &["Adv"], "N"),
    ("m_AdvToVerb", &["Adv"], "Verb"),
    ("m_AdvToS", &["Adv"], "S"),
    ("m_PrnToN", &["Prn"], "N"),
    ("m_PrnToNoun", &["Prn"], "Noun"),
    ("m_PrnToS", &["Prn"], "S"),
    ("m_PnPeToPrn", &["PnPe"], "Prn"),
    ("m_PnPeToN", &["PnPe"], "N"),
    ("m_PnPe1ToN", &["PnPe1"], "N"),
    ("m_PnPe2ToN", &["PnPe2"], "N"),
    ("m_PnReToPrn", &["PnRe"], "Prn"),
    ("m_PnReToN", &["PnRe"], "N"),
    ("m_PnRiToPrn", &["PnRi"], "Prn"),
    ("m_PnRiToN", &["PnRi"], "N"),
    ("m_PnReRiToPrn", &["PnRe", "PnRi"], "Prn"),
    ("m_PnReRiToN", &["PnRe", "PnRi"], "N"),
    ("m_PnIrToPrn", &["PnIr"], "Prn"),
    ("m_PnIrToN", &["PnIr"], "N"),
    ("m_CnjToS", &["Cnj"], "S"),
    ("m_PrepToS", &["Prep"], "S"),
    ("m_PtToS", &["Pt"], "S"),
    ("m_PtSjToS", &["PtSj"], "S"),
    ("m_PtSjToVerb", &["PtSj"], "Verb"),
    ("m_PVerbToVerb", &["PVerb"], "Verb"),
    ("m_PVerbToS", &["PVerb"], "S"),
    ("m_Vb1ToVerb", &["Vb1"], "Verb"),
    ("m_Vb2ToVerb", &["Vb2"], "Verb"),
    ("m_VbPrToVerb", &["VbPr"], "Verb"),
    ("m_VbPaToVerb", &["VbPa"], "Verb"),
    ("m_PpToS", &["Pp"], "S"),
    ("m_PpPvToS", &["PpPv"], "S"),
    ("m_AdjPpPvToS", &["Adj", "PpPv"], "S"),
    ("m_AdjPpPvToNoun", &["Adj", "PpPv"], "Noun"),
    ("m_CjCoToS", &["CjCo"], "S"),
    ("m_CjCoToN", &["CjCo"], "N"),
    ("m_CjSbToS", &["CjSb"], "S"),
    ("m_CjSbToN", &["CjSb"], "N"),
    ("m_CjCoCjSbToS", &["CjCo", "CjSb"], "S"),
    ("m_CjCoCjSbToN", &["CjCo", "CjSb"], "N"),
    ("m_NoGeToNoun", &["NoGe"], "Noun"),
    ("m_AdVar", &["TAdj", "TAdv"], "Nlex"),
    ("m_Density1", &["FuncT"], "Nlex"),
    ("m_Density2", &["Nlex"], "N"),
];

/// What makes two words of a class the same type
#[derive(Clone, Copy)]
enum TypeKey {
    WordForm,
    Lemma,
}

impl TypeKey {
    fn of(self, token: &Token) -> &str {
        match self {
            TypeKey::WordForm => &token.word_type,
            TypeKey::Lemma => &token.lemma,
        }
    }
}

/// Type-count features, the word class they count and how types are told apart
const TYPE_CLASSES: &[(&str, &str, TypeKey)] = &[
    ("TNoun", "Noun", TypeKey::WordForm),
    ("TVerb", "Verb", TypeKey::WordForm),
    ("TAdj", "Adj", TypeKey::Lemma),
    ("TAdv", "Adv", TypeKey::Lemma),
];

fn distinct<'t>(items: impl Iterator<Item = &'t str>) -> usize {
    items.collect::<HashSet<_>>().len()
}

fn log10_of(value: f64) -> FeatureResult<f64> {
    if value > 0.0 {
        Ok(value.log10())
    } else {
        Err(FeatureError::undefined(format!("log10 of {}", value)))
    }
}

pub(crate) fn register(catalog: &mut FeatureCatalog) {
    register_counts(catalog);
    register_word_classes(catalog);
    register_type_classes(catalog);
    register_spectrum(catalog);
    register_diversity(catalog);

    for (name, numerators, denominator) in RATIOS {
        catalog.ratio(*name, KIND, numerators, denominator);
    }
}

fn register_counts(catalog: &mut FeatureCatalog) {
    catalog.count("All_tokens", KIND, |e| e.text().all_tokens);
    catalog.count("N", KIND, |e| e.text().word_count());
    catalog.count("T", KIND, |e| distinct(e.word_types().iter().copied()));
    catalog.count("Char", KIND, |e| e.text().words().map(|t| t.char_len()).sum());
    catalog.count("S", KIND, |e| e.text().sentences.len());
    catalog.count("LemT", KIND, |e| {
        distinct(e.text().words().map(|t| t.lemma.as_str()))
    });

    for &(name, threshold) in SENTENCE_LENGTHS {
        catalog.count(name, KIND, move |e| {
            e.text()
                .sentences
                .iter()
                .filter(|s| s.len() > threshold)
                .count()
        });
    }

    catalog.count("FuncT", KIND, |e| {
        let types: HashSet<&str> = e.word_types().iter().copied().collect();
        e.settings()
            .functional_words
            .iter()
            .filter(|word| types.contains(word.as_str()))
            .count()
    });
    catalog.scalar("Nlex", KIND, &["N", "FuncT"], |e| {
        Ok(e.value("N")? - e.value("FuncT")?)
    });
}

fn register_word_classes(catalog: &mut FeatureCatalog) {
    for &(name, _) in TAG_CLASSES {
        if let Some(pattern) = tag_pattern(name) {
            catalog.count(name, KIND, move |e| {
                e.text().words().filter(|t| matches_class(pattern, t)).count()
            });
        }
    }
}

fn register_type_classes(catalog: &mut FeatureCatalog) {
    for &(name, class, key) in TYPE_CLASSES {
        let Some(pattern) = tag_pattern(class) else {
            continue;
        };
        catalog.count(name, KIND, move |e| {
            distinct(
                e.text()
                    .words()
                    .filter(|t| matches_class(pattern, t))
                    .map(|t| key.of(t)),
            )
        });

        catalog.ratio(format!("m_{}ToN", name), KIND, &[name], "N");
        catalog.ratio(format!("m_{}To{}", name, class), KIND, &[name], class);
        catalog.ratio(format!("m_{}ToNlex", name), KIND, &[name], "Nlex");
        catalog.scalar(format!("m_Sq{}", name), KIND, &[name, class], move |e| {
            let types = e.value(name)?;
            ratio(types * types, e.value(class)?)
        });
        catalog.scalar(format!("m_Cor{}", name), KIND, &[name, class], move |e| {
            let types = e.value(name)?;
            ratio(types, (2.0 * e.value(class)?).sqrt())
        });
    }
}

fn register_spectrum(catalog: &mut FeatureCatalog) {
    catalog.expanded("FreqT", KIND, &[], |e| {
        let buckets = e.settings().type_frequency_buckets;
        e.frequency_table()
            .iter()
            .take(buckets)
            .enumerate()
            .map(|(i, &count)| (bucket_name(i + 1), Ok(count as f64)))
            .collect()
    });

    catalog.expanded("m_FreqTpc", KIND, &["N"], |e| {
        let n = e.value("N");
        let buckets = e.settings().type_frequency_buckets;
        e.frequency_table()
            .iter()
            .take(buckets)
            .enumerate()
            .map(|(i, &count)| {
                let value = n.clone().and_then(|n| ratio(count as f64, n));
                (format!("m_{}pc", bucket_name(i + 1)), value)
            })
            .collect()
    });

    catalog.scalar("m_DisToHapax", KIND, &[], |e| {
        let table = e.frequency_table();
        let hapax = table.first().copied().unwrap_or(0);
        let dis = table.get(1).copied().unwrap_or(0);
        ratio(dis as f64, hapax as f64)
    });
}

fn register_diversity(catalog: &mut FeatureCatalog) {
    catalog.scalar("m_YuleK", KIND, &[], |e| yule_k(e.word_types()));
    catalog.scalar("m_Entr", KIND, &[], |e| Ok(shannon_entropy(e.word_types())));
    catalog.scalar("m_RelEntr", KIND, &[], |e| relative_entropy(e.word_types()));

    catalog.scalar("m_D", KIND, &["N", "T"], |e| {
        let tokens = e.value("N")? as usize;
        let types = e.value("T")? as usize;
        diversity_d(tokens, types)
    });
    catalog.scalar("m_Uber", KIND, &["N", "T"], |e| {
        let log_n = log10_of(e.value("N")?)?;
        let log_t = log10_of(e.value("T")?)?;
        ratio(log_n * log_n, log_n - log_t)
    });
    catalog.scalar("m_Herdan", KIND, &["N", "T"], |e| {
        let log_t = log10_of(e.value("T")?)?;
        ratio(log_t, log10_of(e.value("N")?)?)
    });
    catalog.scalar("m_Guiraud", KIND, &["N", "T"], |e| {
        ratio(e.value("T")?, e.value("N")?.sqrt())
    });
}
