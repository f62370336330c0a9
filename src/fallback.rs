//! Reduced rule-based generator used when the advanced path downgrades
//!
//! A deliberately small keyword/template engine: no analysis, no rewrite
//! pipeline, no data-dependent branches that can fail. Its tables are
//! self-contained so the downgrade path never touches the main catalog.

use crate::schema::{FsRecord, RequirementRecord};

/// Keyword checks for the feature label, evaluated in order
const FEATURE_KEYWORDS: &[(&[&str], &str)] = &[
    (&["login", "authentication"], "User Authentication Module"),
    (&["report", "dashboard"], "Reporting and Analytics Dashboard"),
    (&["search", "filter"], "Advanced Search and Filter System"),
    (&["notification", "alert"], "Notification Management System"),
    (&["backup", "restore"], "Data Backup and Recovery Module"),
    (&["export", "import"], "Data Import/Export Functionality"),
    (&["validation", "verify"], "Data Validation Framework"),
    (&["configuration", "setting"], "System Configuration Interface"),
];

/// Per-type feature templates; the first entry is the deterministic pick
const FEATURE_TEMPLATES: &[(&str, &[&str])] = &[
    (
        "functional",
        &[
            "User Interface Module",
            "Data Processing Engine",
            "Business Logic Controller",
            "Validation Framework",
            "Workflow Management System",
        ],
    ),
    (
        "non-functional",
        &[
            "Performance Optimization",
            "Security Framework",
            "Scalability Module",
            "Reliability System",
            "Usability Enhancement",
        ],
    ),
    (
        "interface",
        &[
            "API Integration Layer",
            "External System Interface",
            "Data Exchange Module",
            "Communication Protocol",
            "Integration Gateway",
        ],
    ),
    (
        "data",
        &[
            "Data Management System",
            "Database Interface",
            "Data Validation Module",
            "Information Repository",
            "Data Processing Pipeline",
        ],
    ),
    (
        "security",
        &[
            "Authentication Module",
            "Authorization Framework",
            "Security Validation System",
            "Access Control Module",
            "Data Protection System",
        ],
    ),
];

const DEFAULT_FEATURES: &[&str] = &[
    "System Component",
    "Application Module",
    "Processing Unit",
    "Control System",
    "Management Interface",
];

/// Modal-verb enhancement substitutions for untyped requirements
const DESCRIPTION_ENHANCEMENTS: &[(&str, &str)] = &[
    ("shall", "The system shall implement"),
    ("must", "The application must provide"),
    ("should", "The platform should include"),
    ("will", "The solution will feature"),
    ("can", "The system can support"),
    ("may", "The application may offer"),
];

/// Feature label from keyword checks, else the type's first template
pub fn feature_name(req_type: &str, description: &str) -> String {
    let lower = description.to_lowercase();
    for (keywords, feature) in FEATURE_KEYWORDS {
        if keywords.iter().any(|k| lower.contains(k)) {
            return (*feature).to_string();
        }
    }

    let req_type = req_type.to_lowercase();
    let templates = FEATURE_TEMPLATES
        .iter()
        .find(|(t, _)| *t == req_type)
        .map(|(_, names)| *names)
        .unwrap_or(DEFAULT_FEATURES);
    templates[0].to_string()
}

/// Templated description by requirement type
pub fn description(original: &str, req_type: &str) -> String {
    if original.trim().is_empty() {
        return "Functional specification to be defined".to_string();
    }

    let lower = original.to_lowercase();
    let mut enhanced = match req_type.to_lowercase().as_str() {
        "functional" => format!(
            "This functional requirement specifies that {}. The implementation shall include proper error handling, data validation, and user feedback mechanisms.",
            lower
        ),
        "non-functional" => format!(
            "This non-functional requirement defines performance criteria where {}. The system must meet specified benchmarks for response time, throughput, and resource utilization.",
            lower
        ),
        "interface" => format!(
            "This interface requirement establishes that {}. The implementation shall ensure secure data exchange, proper protocol adherence, and error recovery procedures.",
            lower
        ),
        "security" => format!(
            "This security requirement mandates that {}. The implementation must incorporate encryption, access controls, and audit logging capabilities.",
            lower
        ),
        _ => enhance_untyped(original),
    };

    if enhanced.chars().count() > 500 {
        enhanced = enhanced.chars().take(497).collect::<String>();
        enhanced.push_str("...");
    }
    enhanced
}

/// First matching modal verb is expanded into its implementation phrasing
fn enhance_untyped(original: &str) -> String {
    let lower = original.to_lowercase();
    for (trigger, enhancement) in DESCRIPTION_ENHANCEMENTS {
        if lower.contains(trigger) {
            return replace_word_all(original, trigger, enhancement);
        }
    }
    original.to_string()
}

/// Case-insensitive replacement of every occurrence of `trigger`
fn replace_word_all(text: &str, trigger: &str, replacement: &str) -> String {
    let lower = text.to_lowercase();
    // Byte offsets into `text` are only valid while lowercasing is
    // length-preserving; bail out for the exotic cases where it is not.
    if lower.len() != text.len() {
        return text.to_string();
    }
    let trigger = trigger.to_lowercase();
    let mut result = String::with_capacity(text.len());
    let mut cursor = 0;
    while let Some(found) = lower[cursor..].find(&trigger) {
        let start = cursor + found;
        result.push_str(&text[cursor..start]);
        result.push_str(replacement);
        cursor = start + trigger.len();
    }
    result.push_str(&text[cursor..]);
    result
}

/// Comment assembly: original comment, implementation note, priority note
pub fn comments(record: &RequirementRecord) -> String {
    let mut parts = Vec::new();

    if !record.comment.trim().is_empty() {
        parts.push(format!("Original: {}", record.comment));
    }

    match record.requirement_type.to_lowercase().as_str() {
        "functional" => {
            parts.push("Implementation: Requires UI components and business logic validation".to_string())
        }
        "non-functional" => {
            parts.push("Implementation: Requires performance monitoring and optimization".to_string())
        }
        "interface" => {
            parts.push("Implementation: Requires API design and integration testing".to_string())
        }
        "security" => {
            parts.push("Implementation: Requires security testing and compliance validation".to_string())
        }
        _ => {}
    }

    if record.requirement_active.to_lowercase() == "yes" {
        parts.push("Priority: High - Active requirement".to_string());
    } else {
        parts.push("Priority: Low - Inactive requirement".to_string());
    }

    parts.join("; ")
}

/// Assemble the full fallback FS record
pub fn generate(record: &RequirementRecord, fs_id: String) -> FsRecord {
    FsRecord {
        fs_id,
        reference_urs_id: record.requirement_id.clone(),
        feature: feature_name(&record.requirement_type, &record.requirement_description),
        description: description(&record.requirement_description, &record.requirement_type),
        comments: comments(record),
        requirement_active: record.requirement_active.clone(),
    }
}
