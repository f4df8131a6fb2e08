//! Meta-features: formulas over the results of the primitive pass.
//!
//! Prerequisites are looked up by name among the results, never computed
//! here. A prerequisite that was not requested is a configuration problem:
//! it is reported and the meta-feature is left out.

use crate::core::FeatureMap;
use crate::diagnostics::{Diagnostic, Diagnostics};

use super::catalog::{Compute, FeatureCatalog};

/// Features normalized per sentence as `m_<X>ToS`
const PER_SENTENCE: &[&str] = &[
    "Sb", "Obj", "Pnom", "Np_nm", "Np_ac", "Np_ge", "Np_da", "Np_all", "Pou_np", "Adjp_nm",
    "Adjp_ac", "Adjp_ge", "Adjp_da", "Adjp_all", "Advp", "Prp", "Vg", "Vg_s", "Vg_g", "Cl", "Cl_r",
    "Cl_ri", "Cl_q", "Cl_o", "Cl_t", "Cl_c", "Cl_all",
];

/// Relations normalized per verb as `m_<X>ToVerb`
const PER_VERB: &[&str] = &["Sb", "Obj", "Pnom"];

/// Punctuation relations normalized per character as `m_<X>ToChar`
const PER_CHAR: &[&str] = &["AuxX", "AuxK", "AuxG"];

pub(crate) fn register(catalog: &mut FeatureCatalog) {
    for &name in PER_SENTENCE {
        catalog.formula(format!("m_{}ToS", name), &[name], "S");
    }
    for &name in PER_VERB {
        catalog.formula(format!("m_{}ToVerb", name), &[name], "Verb");
    }
    catalog.formula("m_CoToAp", &["Coord"], "Apos");
    for &name in PER_CHAR {
        catalog.formula(format!("m_{}ToChar", name), &[name], "Char");
    }
    catalog.formula("m_AuxToChar", PER_CHAR, "Char");
}

/// Resolve meta-features in request order against `primitives`.
///
/// Earlier meta results are visible to later ones. Every absent
/// prerequisite is reported once per requesting feature.
pub fn resolve_meta<S: AsRef<str>>(
    catalog: &FeatureCatalog,
    names: &[S],
    primitives: &FeatureMap,
    diagnostics: &mut Diagnostics,
) -> FeatureMap {
    let mut resolved = FeatureMap::new();

    for name in names {
        let name = name.as_ref();
        let formula = match catalog.get(name).map(|d| &d.compute) {
            Some(Compute::Formula(formula)) => formula,
            _ => {
                diagnostics.report(Diagnostic::UnknownFeature {
                    feature: name.to_string(),
                });
                continue;
            }
        };

        let value = {
            let lookup = |dependency: &str| {
                primitives
                    .get(dependency)
                    .or_else(|| resolved.get(dependency))
            };

            let missing: Vec<&str> = formula
                .dependencies()
                .filter(|&dependency| lookup(dependency).is_none())
                .collect();
            if !missing.is_empty() {
                for prerequisite in missing {
                    diagnostics.report(Diagnostic::MissingPrerequisite {
                        feature: name.to_string(),
                        prerequisite: prerequisite.to_string(),
                    });
                }
                continue;
            }

            formula.evaluate(lookup)
        };
        resolved.insert(name, value);
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FeatureValue;

    fn primitives(entries: &[(&str, FeatureValue)]) -> FeatureMap {
        let mut map = FeatureMap::new();
        for (name, value) in entries {
            map.insert(*name, *value);
        }
        map
    }

    fn resolve(names: &[&str], results: &FeatureMap) -> (FeatureMap, Diagnostics) {
        let mut diagnostics = Diagnostics::new();
        let meta = resolve_meta(FeatureCatalog::standard(), names, results, &mut diagnostics);
        (meta, diagnostics)
    }

    #[test]
    fn test_per_sentence_ratio() {
        let results = primitives(&[
            ("S", FeatureValue::Number(4.0)),
            ("Sb", FeatureValue::Number(6.0)),
            ("Np_all", FeatureValue::Number(10.0)),
        ]);
        let (meta, diagnostics) = resolve(&["m_SbToS", "m_Np_allToS"], &results);

        assert_eq!(meta.get("m_SbToS"), Some(FeatureValue::Number(1.5)));
        assert_eq!(meta.get("m_Np_allToS"), Some(FeatureValue::Number(2.5)));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_missing_prerequisite_omits_feature() {
        let results = primitives(&[("S", FeatureValue::Number(4.0))]);
        let (meta, diagnostics) = resolve(&["m_ObjToS"], &results);

        assert!(meta.is_empty());
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics.entries()[0],
            Diagnostic::MissingPrerequisite {
                feature: "m_ObjToS".to_string(),
                prerequisite: "Obj".to_string(),
            }
        );
    }

    #[test]
    fn test_zero_denominator_and_sentinel_inputs() {
        let results = primitives(&[
            ("Coord", FeatureValue::Number(3.0)),
            ("Apos", FeatureValue::Number(0.0)),
            ("S", FeatureValue::DivisionByZero),
            ("Sb", FeatureValue::Number(1.0)),
        ]);
        let (meta, _) = resolve(&["m_CoToAp", "m_SbToS"], &results);

        assert_eq!(meta.get("m_CoToAp"), Some(FeatureValue::DivisionByZero));
        assert_eq!(meta.get("m_SbToS"), Some(FeatureValue::Missing));
    }

    #[test]
    fn test_combined_punctuation_ratio() {
        let results = primitives(&[
            ("AuxX", FeatureValue::Number(2.0)),
            ("AuxK", FeatureValue::Number(1.0)),
            ("AuxG", FeatureValue::Number(1.0)),
            ("Char", FeatureValue::Number(40.0)),
        ]);
        let (meta, _) = resolve(&["m_AuxToChar", "m_AuxXToChar"], &results);
        assert_eq!(meta.get("m_AuxToChar"), Some(FeatureValue::Number(0.1)));
        assert_eq!(meta.get("m_AuxXToChar"), Some(FeatureValue::Number(0.05)));
    }

    #[test]
    fn test_primitive_name_is_not_a_meta_feature() {
        let results = primitives(&[("N", FeatureValue::Number(1.0))]);
        let (meta, diagnostics) = resolve(&["N", "m_Unheard"], &results);
        assert!(meta.is_empty());
        assert_eq!(diagnostics.count_kind("unknown_feature"), 2);
    }
}
