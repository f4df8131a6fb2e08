//! Dependency based features.

use crate::metrics::dependency::dependency_distance;

use super::catalog::{FeatureCatalog, FeatureKind};

const KIND: FeatureKind = FeatureKind::Syntax;

/// Analytic functions counted by exact relation label
const RELATIONS: &[&str] = &[
    "AuxS", "Pred", "Sb", "Obj", "IObj", "Pnom", "Atv", "Atr", "AuxP", "AuxC", "Coord", "Apos",
    "AuxX", "AuxK", "AuxG", "ExD", "AuxY", "AuxV",
];

/// Features counting every label with a member suffix (`Sb_Co`, `Obj_Co`, ...)
const SUFFIX_GROUPS: &[(&str, &str)] = &[("all_Co", "_Co"), ("all_Ap", "_Ap"), ("all_Pa", "_Pa")];

pub(crate) fn register(catalog: &mut FeatureCatalog) {
    for &relation in RELATIONS {
        catalog.count(relation, KIND, move |e| {
            e.text()
                .dependency_rows
                .iter()
                .filter(|row| row.relation == relation)
                .count()
        });
    }

    for &(name, suffix) in SUFFIX_GROUPS {
        catalog.count(name, KIND, move |e| {
            e.text()
                .dependency_rows
                .iter()
                .filter(|row| row.relation.ends_with(suffix))
                .count()
        });
    }

    catalog.count("Trees", KIND, |e| e.text().dependency_sentences.len());
    catalog.scalar("DepDist", KIND, &[], |e| {
        Ok(dependency_distance(&e.text().dependency_rows))
    });
    catalog.count("HeadsSum", KIND, |e| e.tree_summary().heads_sum);
    catalog.scalar("HeadsAv", KIND, &[], |e| Ok(e.tree_summary().heads_avg));
    catalog.count("LeavesSum", KIND, |e| e.tree_summary().leaves_sum);
    catalog.scalar("LeavesAv", KIND, &[], |e| Ok(e.tree_summary().leaves_avg));
    catalog.scalar("DepHeight", KIND, &[], |e| Ok(e.tree_summary().depth_avg));
    catalog.scalar("DepWidth", KIND, &[], |e| Ok(e.tree_summary().width_avg));
}
