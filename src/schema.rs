//! Data model for URS input rows, derived analyses, and FS output rows

use serde::{Deserialize, Serialize};

/// One User Requirement Specification row, reconciled to the canonical
/// column schema.
///
/// All fields are guaranteed present as strings (possibly empty) by the
/// upstream column mapping; the engine never sees a missing field. The
/// optional `priority` column is carried when the source sheet has one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementRecord {
    /// Requirement identifier, e.g. "URS-001"
    #[serde(rename = "Requirement ID", default)]
    pub requirement_id: String,

    /// Requirement category, e.g. "Functional", "Security"
    #[serde(rename = "Requirement Type", default)]
    pub requirement_type: String,

    /// Business process reference
    #[serde(rename = "Link to process", default)]
    pub link_to_process: String,

    /// The requirement sentence itself
    #[serde(rename = "Requirement Description", default)]
    pub requirement_description: String,

    /// Free-form author comment
    #[serde(rename = "Comment", default)]
    pub comment: String,

    /// Active flag, copied verbatim to the output
    #[serde(rename = "Requirement Active?", default)]
    pub requirement_active: String,

    /// Explicit priority column, when the source sheet carries one
    #[serde(rename = "Priority", default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

/// One derived Functional Specification row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FsRecord {
    /// Sequential identifier, "FS-NNN" zero-padded to 3 digits
    #[serde(rename = "FS ID")]
    pub fs_id: String,

    /// The source requirement's identifier
    #[serde(rename = "Reference URS ID")]
    pub reference_urs_id: String,

    /// Short feature/function label
    #[serde(rename = "Feature/Function")]
    pub feature: String,

    /// Synthesized functional description
    #[serde(rename = "Description")]
    pub description: String,

    /// Passthrough comment, or the literal "N/A"
    #[serde(rename = "Comments")]
    pub comments: String,

    /// Active flag, copied verbatim from the input
    #[serde(rename = "Requirement Active?")]
    pub requirement_active: String,
}

/// Classified functional category of a requirement's text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Intent {
    Authentication,
    Authorization,
    /// Default intent when no vocabulary matches
    #[default]
    DataProcessing,
    Reporting,
    Search,
    Notification,
    Integration,
    Storage,
    Security,
    Performance,
    UserInterface,
    Workflow,
}

impl Intent {
    /// All intents in canonical catalog order.
    ///
    /// This order is the documented tie-break for intent scoring: when two
    /// intents have equal match counts, the one earlier in this list wins.
    pub const ALL: [Intent; 12] = [
        Intent::Authentication,
        Intent::Authorization,
        Intent::DataProcessing,
        Intent::Reporting,
        Intent::Search,
        Intent::Notification,
        Intent::Integration,
        Intent::Storage,
        Intent::Security,
        Intent::Performance,
        Intent::UserInterface,
        Intent::Workflow,
    ];

    /// Position of this intent in [`Intent::ALL`]
    pub const fn canonical_index(self) -> usize {
        match self {
            Self::Authentication => 0,
            Self::Authorization => 1,
            Self::DataProcessing => 2,
            Self::Reporting => 3,
            Self::Search => 4,
            Self::Notification => 5,
            Self::Integration => 6,
            Self::Storage => 7,
            Self::Security => 8,
            Self::Performance => 9,
            Self::UserInterface => 10,
            Self::Workflow => 11,
        }
    }

    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Authentication => "authentication",
            Self::Authorization => "authorization",
            Self::DataProcessing => "dataProcessing",
            Self::Reporting => "reporting",
            Self::Search => "search",
            Self::Notification => "notification",
            Self::Integration => "integration",
            Self::Storage => "storage",
            Self::Security => "security",
            Self::Performance => "performance",
            Self::UserInterface => "userInterface",
            Self::Workflow => "workflow",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Assessed implementation complexity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    #[default]
    Moderate,
    Complex,
}

impl Complexity {
    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Moderate => "moderate",
            Self::Complex => "complex",
        }
    }
}

/// Three-step scale used for priority, business value, and user impact
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    High,
    #[default]
    Medium,
    Low,
}

impl Level {
    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Technical requirement tags, emitted in this fixed order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TechRequirement {
    #[serde(rename = "Security compliance")]
    SecurityCompliance,
    #[serde(rename = "Performance optimization")]
    PerformanceOptimization,
    #[serde(rename = "System integration")]
    SystemIntegration,
    #[serde(rename = "Real-time processing")]
    RealTimeProcessing,
}

impl TechRequirement {
    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SecurityCompliance => "Security compliance",
            Self::PerformanceOptimization => "Performance optimization",
            Self::SystemIntegration => "System integration",
            Self::RealTimeProcessing => "Real-time processing",
        }
    }
}

/// Structured analysis of one requirement, a pure function of the record's
/// textual fields plus the explicit priority column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    /// Best-scoring intent; `dataProcessing` when nothing matches
    pub primary_intent: Intent,

    /// Up to two further intents, ranked by match count descending
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub secondary_intents: Vec<Intent>,

    /// Assessed complexity
    pub complexity: Complexity,

    /// Priority from the explicit column, else from description keywords
    pub priority: Level,

    /// Independent technical requirement tags, in fixed order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub technical_requirements: Vec<TechRequirement>,

    /// Business value from the high/low lexicon duel
    pub business_value: Level,

    /// User impact from the high/low lexicon duel
    pub user_impact: Level,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_serde_names() {
        let json = serde_json::to_string(&Intent::DataProcessing).unwrap();
        assert_eq!(json, "\"dataProcessing\"");
        let json = serde_json::to_string(&Intent::UserInterface).unwrap();
        assert_eq!(json, "\"userInterface\"");
    }

    #[test]
    fn test_record_canonical_column_names() {
        let rec = RequirementRecord {
            requirement_id: "URS-001".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["Requirement ID"], "URS-001");
        assert!(json.get("Requirement Description").is_some());
    }

    #[test]
    fn test_defaults_match_expected_baseline() {
        let analysis = Analysis::default();
        assert_eq!(analysis.primary_intent, Intent::DataProcessing);
        assert_eq!(analysis.complexity, Complexity::Moderate);
        assert_eq!(analysis.priority, Level::Medium);
        assert_eq!(analysis.business_value, Level::Medium);
        assert_eq!(analysis.user_impact, Level::Medium);
    }
}
