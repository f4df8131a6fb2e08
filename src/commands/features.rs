use crate::features::{FeatureCatalog, FeatureKind};
use anyhow::Result;
use std::fmt::Write;

/// Print the catalog, one section per kind
pub fn list_features(kind: Option<FeatureKind>) -> Result<()> {
    let kinds = match kind {
        Some(kind) => vec![kind],
        None => FeatureKind::ALL.to_vec(),
    };
    print!("{}", format_feature_list(FeatureCatalog::standard(), &kinds)?);
    Ok(())
}

pub fn format_feature_list(catalog: &FeatureCatalog, kinds: &[FeatureKind]) -> Result<String> {
    let mut out = String::new();
    for &kind in kinds {
        let descriptors: Vec<_> = catalog.of_kind(kind).collect();
        writeln!(out, "{} ({})", kind, descriptors.len())?;
        for descriptor in descriptors {
            if descriptor.dependencies.is_empty() {
                writeln!(out, "  {}", descriptor.name)?;
            } else {
                writeln!(
                    out,
                    "  {}  <- {}",
                    descriptor.name,
                    descriptor.dependencies.join(", ")
                )?;
            }
        }
    }
    Ok(out)
}
