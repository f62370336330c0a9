//! Feature naming: one short label per requirement
//!
//! Walks the feature-name pattern table in order; the first matching entry
//! supplies an ordered name list and the assessed complexity picks from it
//! (simple names sit at the front, elaborate ones at the back).

use crate::catalog::{self, PatternCatalog};
use crate::schema::{Analysis, Complexity};

/// Derive the FS feature/function label for one requirement
pub fn feature_name(description: &str, analysis: &Analysis, catalog: &PatternCatalog) -> String {
    let description = description.to_lowercase();

    for rule in &catalog.feature_names {
        if rule.pattern.is_match(&description) {
            let index = match analysis.complexity {
                Complexity::Simple => 0,
                Complexity::Moderate => rule.names.len() / 2,
                Complexity::Complex => rule.names.len() - 1,
            };
            return rule.names[index].to_string();
        }
    }

    catalog::default_feature(analysis.primary_intent).to_string()
}
