//! Phrase markup features: phrase counts and mean phrase lengths.

use crate::metrics::phrase::{mean_phrase_length, phrase_count};

use super::catalog::{FeatureCatalog, FeatureKind};

const KIND: FeatureKind = FeatureKind::Phrase;

/// Features backed by exactly one markup category (`Np_nm` ↔ `np_nm`)
const PHRASES: &[&str] = &[
    "Np_nm", "Np_ac", "Np_ge", "Np_da", "Adjp_nm", "Adjp_ac", "Adjp_ge", "Adjp_da", "Advp", "Vg",
    "Vg_s", "Vg_g", "Cl", "Cl_r", "Cl_ri", "Cl_q", "Cl_o", "Cl_t", "Cl_c",
];

const NOUN_PHRASES: &[&str] = &["np_nm", "np_ac", "np_ge", "np_da"];
const ADJECTIVE_PHRASES: &[&str] = &["adjp_nm", "adjp_ac", "adjp_ge", "adjp_da"];
const CLAUSES: &[&str] = &["cl", "cl_r", "cl_ri", "cl_q", "cl_o", "cl_t", "cl_c"];
const VERB_GROUPS: &[&str] = &["vg", "vg_s", "vg_g"];
const PREPOSITIONAL: &[&str] = &["pp"];
const POU_NOUN_PHRASES: &[&str] = &["pou_np_nm", "pou_np_ac", "pou_np_ge", "pou_np_da"];

/// Count features pooling several categories
const COUNT_GROUPS: &[(&str, &[&str])] = &[
    ("Np_all", NOUN_PHRASES),
    ("Adjp_all", ADJECTIVE_PHRASES),
    ("Cl_all", CLAUSES),
    ("Prp", PREPOSITIONAL),
    ("Pou_np", POU_NOUN_PHRASES),
];

/// Mean length features pooling the length lists of several categories
const LENGTH_GROUPS: &[(&str, &[&str])] = &[
    ("L_Prp", PREPOSITIONAL),
    ("L_Pou_np", POU_NOUN_PHRASES),
    ("L_Np_all", NOUN_PHRASES),
    ("L_Adjp_all", ADJECTIVE_PHRASES),
    ("L_Vg_all", VERB_GROUPS),
    ("L_Cl_all", CLAUSES),
];

fn register_count(catalog: &mut FeatureCatalog, name: String, categories: Vec<String>) {
    catalog.count(name, KIND, move |e| {
        let events = &e.text().phrase_events;
        categories
            .iter()
            .map(|category| phrase_count(events, category))
            .sum()
    });
}

fn register_mean_length(catalog: &mut FeatureCatalog, name: String, categories: Vec<String>) {
    catalog.scalar(name, KIND, &[], move |e| {
        let mut pooled = Vec::new();
        for category in &categories {
            pooled.extend_from_slice(e.phrase_lengths(category));
        }
        Ok(mean_phrase_length(&pooled))
    });
}

fn owned(categories: &[&str]) -> Vec<String> {
    categories.iter().map(|c| c.to_string()).collect()
}

pub(crate) fn register(catalog: &mut FeatureCatalog) {
    for &phrase in PHRASES {
        register_count(catalog, phrase.to_string(), vec![phrase.to_lowercase()]);
    }
    for &(name, categories) in COUNT_GROUPS {
        register_count(catalog, name.to_string(), owned(categories));
    }
    for &phrase in PHRASES {
        register_mean_length(catalog, format!("L_{}", phrase), vec![phrase.to_lowercase()]);
    }
    for &(name, categories) in LENGTH_GROUPS {
        register_mean_length(catalog, name.to_string(), owned(categories));
    }
}
