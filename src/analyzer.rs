//! Requirement analysis: heuristic scoring of one URS row
//!
//! Every assessment is a pure function of the record's textual fields and
//! the pattern catalog. There is no failure mode: absent or empty text
//! degrades to the default category of each scale.

use crate::catalog::PatternCatalog;
use crate::schema::{
    Analysis, Complexity, Intent, Level, RequirementRecord, TechRequirement,
};

/// Analyze one requirement record into its structured form.
///
/// Scans the concatenation of description, type, and comment; priority
/// additionally consults the explicit priority column when present.
pub fn analyze(record: &RequirementRecord, catalog: &PatternCatalog) -> Analysis {
    let description = record.requirement_description.to_lowercase();
    let req_type = record.requirement_type.to_lowercase();
    let comment = record.comment.to_lowercase();
    let full_text = format!("{} {} {}", description, req_type, comment);

    Analysis {
        primary_intent: detect_primary_intent(&full_text, catalog),
        secondary_intents: detect_secondary_intents(&full_text, catalog),
        complexity: assess_complexity(&full_text, catalog),
        priority: assess_priority(record),
        technical_requirements: extract_technical_requirements(&full_text, catalog),
        business_value: assess_business_value(&full_text, catalog),
        user_impact: assess_user_impact(&full_text, catalog),
    }
}

/// Count vocabulary matches for every intent, in canonical order
fn intent_scores(text: &str, catalog: &PatternCatalog) -> Vec<(Intent, usize)> {
    catalog
        .intents
        .iter()
        .map(|(intent, pattern)| (*intent, pattern.find_iter(text).count()))
        .collect()
}

/// Intent with the strictly greatest match count.
///
/// Ties keep the earlier intent in canonical order; a zero-score board
/// yields the `dataProcessing` default.
pub fn detect_primary_intent(text: &str, catalog: &PatternCatalog) -> Intent {
    let mut best = Intent::DataProcessing;
    let mut best_count = 0usize;
    for (intent, count) in intent_scores(text, catalog) {
        if count > best_count {
            best = intent;
            best_count = count;
        }
    }
    if best_count > 0 {
        best
    } else {
        Intent::DataProcessing
    }
}

/// Up to two further intents, ranked by match count descending.
///
/// The top scorer is dropped (it is the primary); equal counts keep
/// canonical order, which the stable sort preserves.
pub fn detect_secondary_intents(text: &str, catalog: &PatternCatalog) -> Vec<Intent> {
    let mut scored: Vec<(Intent, usize)> = intent_scores(text, catalog)
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.into_iter().skip(1).take(2).map(|(i, _)| i).collect()
}

/// Complexity from indicator counts.
///
/// The complex check dominates the simple check; more than one real-time
/// mention also counts as complex.
pub fn assess_complexity(text: &str, catalog: &PatternCatalog) -> Complexity {
    let complex_count = catalog.complex.find_iter(text).count();
    let simple_count = catalog.simple.find_iter(text).count();
    let real_time_count = catalog.real_time.find_iter(text).count();

    if complex_count > 0 || real_time_count > 1 {
        Complexity::Complex
    } else if simple_count > 0 {
        Complexity::Simple
    } else {
        Complexity::Moderate
    }
}

/// Priority from the explicit column, else from description keywords
pub fn assess_priority(record: &RequirementRecord) -> Level {
    let priority = record
        .priority
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();
    let description = record.requirement_description.to_lowercase();

    if priority.contains("high") || priority.contains("critical") || priority.contains("urgent") {
        Level::High
    } else if priority.contains("low")
        || description.contains("nice to have")
        || description.contains("optional")
    {
        Level::Low
    } else {
        Level::Medium
    }
}

/// Independent boolean checks for the four technical requirement tags,
/// emitted in fixed tag order
pub fn extract_technical_requirements(
    text: &str,
    catalog: &PatternCatalog,
) -> Vec<TechRequirement> {
    let mut requirements = Vec::new();

    if catalog.intent_pattern(Intent::Security).is_match(text) {
        requirements.push(TechRequirement::SecurityCompliance);
    }
    if catalog.intent_pattern(Intent::Performance).is_match(text) {
        requirements.push(TechRequirement::PerformanceOptimization);
    }
    if catalog.intent_pattern(Intent::Integration).is_match(text) {
        requirements.push(TechRequirement::SystemIntegration);
    }
    if catalog.real_time.is_match(text) {
        requirements.push(TechRequirement::RealTimeProcessing);
    }

    requirements
}

fn lexicon_duel(text: &str, high: &regex::Regex, low: &regex::Regex) -> Level {
    let high_count = high.find_iter(text).count();
    let low_count = low.find_iter(text).count();

    if high_count > low_count && high_count > 0 {
        Level::High
    } else if low_count > 0 {
        Level::Low
    } else {
        Level::Medium
    }
}

/// Business value from the high/low value lexicons
pub fn assess_business_value(text: &str, catalog: &PatternCatalog) -> Level {
    lexicon_duel(text, &catalog.value_high, &catalog.value_low)
}

/// User impact from the high/low impact lexicons
pub fn assess_user_impact(text: &str, catalog: &PatternCatalog) -> Level {
    lexicon_duel(text, &catalog.impact_high, &catalog.impact_low)
}
