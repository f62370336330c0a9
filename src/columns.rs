//! Column reconciliation between uploaded sheet headers and the canonical
//! URS schema
//!
//! The engine itself only ever sees [`RequirementRecord`]s with all six
//! canonical fields present as strings. This module is the upstream
//! collaborator that guarantees the invariant: exact header matches first,
//! then keyword containment, then positional defaults for anything left.

use std::collections::HashMap;

use crate::schema::RequirementRecord;

/// The six canonical URS fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    RequirementId,
    RequirementType,
    LinkToProcess,
    RequirementDescription,
    Comment,
    RequirementActive,
}

impl Field {
    /// All fields in canonical column order
    pub const ALL: [Field; 6] = [
        Field::RequirementId,
        Field::RequirementType,
        Field::LinkToProcess,
        Field::RequirementDescription,
        Field::Comment,
        Field::RequirementActive,
    ];

    /// The canonical column header
    pub fn canonical_name(&self) -> &'static str {
        match self {
            Self::RequirementId => "Requirement ID",
            Self::RequirementType => "Requirement Type",
            Self::LinkToProcess => "Link to process",
            Self::RequirementDescription => "Requirement Description",
            Self::Comment => "Comment",
            Self::RequirementActive => "Requirement Active?",
        }
    }

    /// Keywords a foreign header may contain, checked in order
    fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::RequirementId => {
                &["id", "req_id", "reqid", "requirement_id", "req id", "number", "no"]
            }
            Self::RequirementType => &["type", "req_type", "reqtype", "category", "kind"],
            Self::LinkToProcess => &["process", "link", "workflow", "procedure", "step"],
            Self::RequirementDescription => {
                &["description", "desc", "details", "requirement", "text", "summary"]
            }
            Self::Comment => &["comment", "comments", "note", "notes", "remark", "remarks"],
            Self::RequirementActive => {
                &["active", "status", "enabled", "valid", "current", "state"]
            }
        }
    }

    /// Positional default for an unmapped field (1-based row index)
    fn default_value(&self, row_index: usize) -> String {
        match self {
            Self::RequirementId => format!("REQ-{:03}", row_index),
            Self::RequirementType => "Functional".to_string(),
            Self::LinkToProcess => "N/A".to_string(),
            Self::RequirementDescription => "Description not provided".to_string(),
            Self::Comment => "Auto-generated from incomplete data".to_string(),
            Self::RequirementActive => "Yes".to_string(),
        }
    }
}

/// Result of reconciling a header row against the canonical schema
#[derive(Debug, Clone, Default)]
pub struct ColumnMapping {
    /// Canonical field -> source header, for fields that found a match
    pub mapping: HashMap<Field, String>,
    /// Canonical fields with no usable source header
    pub unmapped: Vec<Field>,
    /// True when any field needed a fuzzy match or a default
    pub needs_mapping: bool,
}

/// Reconcile sheet headers against the canonical schema
pub fn map_columns(headers: &[String]) -> ColumnMapping {
    let mut result = ColumnMapping::default();

    for field in Field::ALL {
        let canonical = field.canonical_name().to_lowercase();
        let exact = headers
            .iter()
            .find(|h| h.to_lowercase().trim() == canonical);

        if let Some(header) = exact {
            result.mapping.insert(field, header.clone());
            continue;
        }

        if let Some(header) = find_best_match(field, headers) {
            result.mapping.insert(field, header.clone());
            result.needs_mapping = true;
        } else {
            result.unmapped.push(field);
            result.needs_mapping = true;
        }
    }

    result
}

/// First header containing one of the field's keywords
fn find_best_match<'a>(field: Field, headers: &'a [String]) -> Option<&'a String> {
    for keyword in field.keywords() {
        if let Some(header) = headers
            .iter()
            .find(|h| h.to_lowercase().contains(keyword))
        {
            return Some(header);
        }
    }
    None
}

impl ColumnMapping {
    /// Apply the mapping to raw rows, producing canonical records.
    ///
    /// Unmapped fields get positional defaults, so every record reaches the
    /// engine with all six fields present. An exact "Priority" column is
    /// carried through when the sheet has one.
    pub fn apply(&self, rows: &[HashMap<String, String>]) -> Vec<RequirementRecord> {
        rows.iter()
            .enumerate()
            .map(|(index, row)| {
                let value = |field: Field| -> String {
                    self.mapping
                        .get(&field)
                        .and_then(|header| row.get(header))
                        .cloned()
                        .unwrap_or_else(|| field.default_value(index + 1))
                };

                let priority = row
                    .iter()
                    .find(|(key, _)| key.to_lowercase().trim() == "priority")
                    .map(|(_, v)| v.clone());

                RequirementRecord {
                    requirement_id: value(Field::RequirementId),
                    requirement_type: value(Field::RequirementType),
                    link_to_process: value(Field::LinkToProcess),
                    requirement_description: value(Field::RequirementDescription),
                    comment: value(Field::Comment),
                    requirement_active: value(Field::RequirementActive),
                    priority,
                }
            })
            .collect()
    }
}

/// Reconcile and apply in one step, reading headers from the first row
pub fn reconcile(rows: &[HashMap<String, String>]) -> Vec<RequirementRecord> {
    let headers: Vec<String> = rows
        .first()
        .map(|row| row.keys().cloned().collect())
        .unwrap_or_default();
    map_columns(&headers).apply(rows)
}
