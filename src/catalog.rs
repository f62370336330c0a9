//! Pattern catalog: every regex and lookup table the engine consults
//!
//! Pure data, compiled once. The catalog is an immutable value constructed
//! by [`PatternCatalog::new`] and passed by reference into the analyzer,
//! namer, and synthesizer, so the transformation logic itself carries no
//! pattern literals and no hidden global state.
//!
//! Ordering is semantically significant throughout: every rule table is
//! evaluated first-match-wins in declaration order, and the intent table's
//! declaration order doubles as the documented tie-break for intent scoring.

use regex::Regex;

use crate::error::{FsForgeError, Result};
use crate::schema::{Intent, Level};

// ============================================
// Raw vocabulary tables
// ============================================

/// Intent vocabulary, in canonical (tie-break) order.
const INTENT_VOCABULARY: [(Intent, &str); 12] = [
    (
        Intent::Authentication,
        r"(?i)\b(login|authenticate|sign[- ]?in|credentials|password|username|access control)\b",
    ),
    (
        Intent::Authorization,
        r"(?i)\b(permission|role|access level|privilege|rights|authorize)\b",
    ),
    (
        Intent::DataProcessing,
        r"(?i)\b(process|calculate|compute|transform|convert|validate|parse)\b",
    ),
    (
        Intent::Reporting,
        r"(?i)\b(report|dashboard|analytics|chart|graph|export|print)\b",
    ),
    (
        Intent::Search,
        r"(?i)\b(search|filter|find|query|lookup|retrieve)\b",
    ),
    (
        Intent::Notification,
        r"(?i)\b(notify|alert|email|message|notification|inform)\b",
    ),
    (
        Intent::Integration,
        r"(?i)\b(integrate|API|interface|connect|external|third[- ]?party)\b",
    ),
    (
        Intent::Storage,
        r"(?i)\b(store|save|database|persist|backup|archive)\b",
    ),
    (
        Intent::Security,
        r"(?i)\b(encrypt|secure|protect|firewall|SSL|TLS|hash)\b",
    ),
    (
        Intent::Performance,
        r"(?i)\b(fast|quick|speed|response time|performance|optimize)\b",
    ),
    (
        Intent::UserInterface,
        r"(?i)\b(UI|interface|screen|form|button|menu|display)\b",
    ),
    (
        Intent::Workflow,
        r"(?i)\b(workflow|process|step|approval|review|routing)\b",
    ),
];

const SIMPLE_INDICATORS: &str = r"(?i)\b(simple|basic|straightforward|easy)\b";
const COMPLEX_INDICATORS: &str = r"(?i)\b(complex|advanced|sophisticated|multi[- ]?step)\b";
const REAL_TIME_INDICATORS: &str = r"(?i)\b(real[- ]?time|instant|immediate|live)\b";
const BATCH_INDICATORS: &str = r"(?i)\b(batch|scheduled|periodic|bulk)\b";

const VALUE_HIGH: &str = r"(?i)\b(critical|essential|core|primary|key|strategic|important)\b";
const VALUE_LOW: &str = r"(?i)\b(nice to have|optional|minor|secondary|convenience)\b";
const IMPACT_HIGH: &str =
    r"(?i)\b(user experience|efficiency|productivity|workflow|daily|frequent)\b";
const IMPACT_LOW: &str = r"(?i)\b(admin|administrative|backend|internal|system)\b";

// ============================================
// Feature naming tables
// ============================================

/// Feature-name pattern table, evaluated in order, first match wins.
/// Name lists run simple -> elaborate; the namer indexes by complexity.
const FEATURE_NAME_TABLE: &[(&str, &[&str])] = &[
    // Login/Authentication
    (r"(?i)login|log in|sign in|authenticate", &["Login", "SignIn", "Access", "Entry"]),
    (
        r"(?i)password|credential|verification",
        &["Password", "Credentials", "Verification", "Security"],
    ),
    // User management
    (r"(?i)user.*creat|add.*user|register", &["Registration", "Enrollment", "Signup"]),
    (
        r"(?i)user.*manag|edit.*user|update.*user",
        &["UserManagement", "Profile", "Account"],
    ),
    // Data operations
    (r"(?i)save|store|persist", &["Save", "Storage", "Persistence"]),
    (r"(?i)search|find|lookup", &["Search", "Finder", "Lookup"]),
    (r"(?i)filter|sort|order", &["Filter", "Sorting", "Organization"]),
    (r"(?i)export|download|extract", &["Export", "Download", "Extraction"]),
    (r"(?i)import|upload|load", &["Import", "Upload", "Loading"]),
    (r"(?i)delete|remove|purge", &["Delete", "Removal", "Cleanup"]),
    (r"(?i)edit|modify|update|change", &["Edit", "Update", "Modification"]),
    (r"(?i)view|display|show|present", &["View", "Display", "Presentation"]),
    // Business processes
    (r"(?i)calculat|comput|process", &["Calculator", "Processor", "Engine"]),
    (r"(?i)validat|check|verify", &["Validator", "Checker", "Verification"]),
    (
        r"(?i)generat.*report|report.*generat",
        &["ReportGenerator", "Reports", "Analytics"],
    ),
    (r"(?i)approv|review|confirm", &["Approval", "Review", "Confirmation"]),
    (r"(?i)assign|allocat|distribut", &["Assignment", "Allocation", "Distribution"]),
    (r"(?i)track|monitor|watch", &["Tracker", "Monitor", "Surveillance"]),
    // Communication
    (r"(?i)notif|alert|inform", &["Notifications", "Alerts", "Messaging"]),
    (r"(?i)email|mail|send.*message", &["Email", "Messaging", "Communication"]),
    (r"(?i)remind|schedul.*notif", &["Reminders", "Scheduler", "Alerts"]),
    // Integration
    (r"(?i)integrat|connect|link", &["Integration", "Connector", "Bridge"]),
    (r"(?i)sync|synchroniz", &["Sync", "Synchronizer", "Harmony"]),
    (r"(?i)api|interface|endpoint", &["API", "Interface", "Gateway"]),
    // Dashboard/UI
    (r"(?i)dashboard|summary|overview", &["Dashboard", "Overview", "Summary"]),
    (r"(?i)menu|navigat|browse", &["Navigation", "Menu", "Browser"]),
    (r"(?i)form|input|entry", &["Forms", "Input", "DataEntry"]),
    (r"(?i)chart|graph|visual", &["Charts", "Visualization", "Graphics"]),
    // Workflow
    (r"(?i)workflow|process|flow", &["Workflow", "Process", "Pipeline"]),
    (r"(?i)automat|schedul", &["Automation", "Scheduler", "Robot"]),
    (r"(?i)queue|batch|bulk", &["Queue", "BatchProcessor", "BulkHandler"]),
];

/// Per-intent fallback feature name when no table pattern matches
pub fn default_feature(intent: Intent) -> &'static str {
    match intent {
        Intent::Authentication => "Login",
        Intent::Authorization => "Permissions",
        Intent::DataProcessing => "Processor",
        Intent::Reporting => "Reports",
        Intent::Search => "Search",
        Intent::Notification => "Notifications",
        Intent::Integration => "Integration",
        Intent::Storage => "Storage",
        Intent::Security => "Security",
        Intent::Performance => "Optimizer",
        Intent::UserInterface => "Interface",
        Intent::Workflow => "Workflow",
    }
}

// ============================================
// Description cleaning and rewriting tables
// ============================================

/// Modal-subject cleaning rules, applied in order to the whole description
const CLEAN_RULES: &[(&str, &str)] = &[
    (
        r"(?i)\b(the system|system|application|app)\s+(shall|must|should|will|needs? to|has to)\s+",
        "",
    ),
    (r"(?i)\b(user|users)\s+(shall|must|should|will|can|may)\s+", "User "),
    (r"(?i)\b(shall|must|should|will|needs? to|has to)\s+", ""),
];

/// Per-sentence rewrite rules, first match wins.
///
/// Subject-specific rules come first so that e.g. "login process" resolves
/// to its curated phrase before the generic verb-object rules see it.
const SENTENCE_REWRITES: &[(&str, &str)] = &[
    // Subject-specific
    (
        r"(?i)\blogin\s+(process|procedure|functionality)",
        "User authentication and access control",
    ),
    (
        r"(?i)\bpassword\s+(management|handling|processing)",
        "Password security and credential management",
    ),
    (
        r"(?i)\bdata\s+(entry|input|capture)",
        "Information capture and data entry system",
    ),
    (
        r"(?i)\bfile\s+(upload|download|transfer)",
        "File transfer and document management",
    ),
    (
        r"(?i)\breport\s+(generation|creation|production)",
        "Dynamic report generation and analytics",
    ),
    (
        r"(?i)\bemail\s+(sending|delivery|transmission)",
        "Email communication and message delivery",
    ),
    (
        r"(?i)\bnotification\s+(system|service|mechanism)",
        "Alert notification and communication system",
    ),
    (
        r"(?i)\bsearch\s+(functionality|capability|feature)",
        "Advanced search and information discovery",
    ),
    (
        r"(?i)\bdashboard\s+(display|presentation|interface)",
        "Interactive dashboard and data visualization",
    ),
    (
        r"(?i)\bworkflow\s+(management|control|processing)",
        "Business workflow orchestration and automation",
    ),
    (
        r"(?i)\buser\s+(interface|experience|interaction)",
        "User interface design and interaction management",
    ),
    (
        r"(?i)\bdatabase\s+(operations|management|handling)",
        "Database operations and data persistence",
    ),
    (
        r"(?i)\bapi\s+(integration|connectivity|interface)",
        "API integration and external system connectivity",
    ),
    (
        r"(?i)\bsecurity\s+(measures|controls|protocols)",
        "Security framework and protection protocols",
    ),
    (
        r"(?i)\bvalidation\s+(rules|logic|processing)",
        "Data validation and integrity assurance",
    ),
    (
        r"(?i)\baudit\s+(trail|logging|tracking)",
        "Audit trail and activity monitoring system",
    ),
    (
        r"(?i)\bbackup\s+(procedures|processes|operations)",
        "Data backup and recovery management",
    ),
    (
        r"(?i)\bperformance\s+(optimization|monitoring|management)",
        "System performance optimization and monitoring",
    ),
    (
        r"(?i)\berror\s+(handling|management|processing)",
        "Error handling and exception management",
    ),
    (
        r"(?i)\bconfiguration\s+(management|settings|options)",
        "System configuration and settings management",
    ),
    // Generic verb-object
    (
        r"(?i)\b(allow|enable|permit)\s+(users?|user)\s+to\s+(\w+)",
        "User ${3} capability",
    ),
    (
        r"(?i)\b(users?|user)\s+(can|may|shall be able to|should be able to)\s+(\w+)",
        "User ${3} functionality",
    ),
    (
        r"(?i)\b(system|application)\s+(shall|must|should|will)\s+(\w+)",
        "System ${3} processing",
    ),
    (r"(?i)\b(provide|offer|deliver)\s+(\w+)", "${2} delivery service"),
    (r"(?i)\b(ensure|guarantee)\s+(\w+)", "${2} assurance mechanism"),
    (r"(?i)\b(maintain|preserve)\s+(\w+)", "${2} maintenance system"),
    (r"(?i)\b(support|facilitate)\s+(\w+)", "${2} support framework"),
    (r"(?i)\b(manage|control)\s+(\w+)", "${2} management system"),
    (r"(?i)\b(monitor|track)\s+(\w+)", "${2} monitoring capability"),
    (r"(?i)\b(validate|verify|check)\s+(\w+)", "${2} validation system"),
    (r"(?i)\b(process|handle)\s+(\w+)", "${2} processing engine"),
    (r"(?i)\b(store|save|persist)\s+(\w+)", "${2} storage mechanism"),
    (r"(?i)\b(retrieve|fetch|get)\s+(\w+)", "${2} retrieval system"),
    (r"(?i)\b(display|show|present)\s+(\w+)", "${2} presentation interface"),
    (r"(?i)\b(calculate|compute)\s+(\w+)", "${2} calculation engine"),
    (r"(?i)\b(generate|create|produce)\s+(\w+)", "${2} generation system"),
    (r"(?i)\b(send|transmit|deliver)\s+(\w+)", "${2} transmission service"),
    (r"(?i)\b(receive|accept)\s+(\w+)", "${2} reception mechanism"),
    (r"(?i)\b(update|modify|change)\s+(\w+)", "${2} modification system"),
    (r"(?i)\b(delete|remove)\s+(\w+)", "${2} removal capability"),
    (r"(?i)\b(search|find|lookup)\s+(\w+)", "${2} search functionality"),
    (r"(?i)\b(filter|sort)\s+(\w+)", "${2} filtering system"),
    (r"(?i)\b(export|extract)\s+(\w+)", "${2} export capability"),
    (r"(?i)\b(import|load)\s+(\w+)", "${2} import mechanism"),
    (r"(?i)\b(backup|archive)\s+(\w+)", "${2} backup system"),
    (r"(?i)\b(restore|recover)\s+(\w+)", "${2} recovery mechanism"),
    (r"(?i)\b(configure|setup)\s+(\w+)", "${2} configuration system"),
    (r"(?i)\b(integrate|connect)\s+(\w+)", "${2} integration capability"),
    (r"(?i)\b(synchronize|sync)\s+(\w+)", "${2} synchronization system"),
    (r"(?i)\b(notify|alert|inform)\s+(\w+)", "${2} notification service"),
    (r"(?i)\b(approve|authorize)\s+(\w+)", "${2} approval workflow"),
    (r"(?i)\b(assign|allocate)\s+(\w+)", "${2} assignment system"),
    (r"(?i)\b(schedule|plan)\s+(\w+)", "${2} scheduling capability"),
    (r"(?i)\b(report|summarize)\s+(\w+)", "${2} reporting system"),
    (r"(?i)\b(analyze|evaluate)\s+(\w+)", "${2} analysis engine"),
];

/// Paraphrase normalization rules for the direct-paraphrase fallback path
const PARAPHRASE_RULES: &[(&str, &str)] = &[
    (
        r"(?i)\b(shall|must|should|will|can|may|needs? to|has to|is required to)\s+",
        "",
    ),
    (r"(?i)\b(user|users|end user|end users)\s+", "User "),
    (r"(?i)\b(system|application|software)\s+", "System "),
];

/// Nouns that already mark a text as a capability statement
const CAPABILITY_NOUN: &str = r"(?i)\b(system|capability|functionality|service|mechanism|engine|framework|interface|management|processing|delivery|generation|creation|handling|control)\b";

/// Words a functional description may lead with; anything else gets a
/// capability prefix prepended
const CAPABILITY_LEAD: &str = r"(?i)^(User|System|Data|Information|Business|Application|Service|Interface|Processing|Management|Security|Performance|Integration|Communication|Workflow|Report|Analytics|Dashboard|Search|Validation|Authentication|Authorization|Notification|Configuration|Monitoring|Backup|Recovery|Export|Import|Storage|Retrieval|Calculation|Generation|Transmission|Reception|Modification|Display|Presentation)";

/// Per-intent capability phrase used when prefixing a paraphrased text
pub fn capability_prefix(intent: Intent) -> &'static str {
    match intent {
        Intent::Authentication => "User authentication",
        Intent::Authorization => "Access control",
        Intent::DataProcessing => "Data processing",
        Intent::Reporting => "Report generation",
        Intent::Search => "Search capability",
        Intent::Notification => "Notification service",
        Intent::Integration => "System integration",
        Intent::Storage => "Data storage",
        Intent::Security => "Security framework",
        Intent::Performance => "Performance optimization",
        Intent::UserInterface => "User interface",
        Intent::Workflow => "Workflow management",
    }
}

// ============================================
// Colon structuring and grammar cleanup tables
// ============================================

/// Colon insertion patterns, first match wins
const COLON_RULES: &[(&str, &str)] = &[
    (
        r"(?i)^(.*interface.*?)(\s+(?:provides?|enables?|allows?|supports?|delivers?|manages?).*)",
        "${1}: ${2}",
    ),
    (
        r"(?i)^(.*system.*?)(\s+(?:provides?|enables?|allows?|supports?|delivers?|manages?).*)",
        "${1}: ${2}",
    ),
    (
        r"(?i)^(.*application.*?)(\s+(?:provides?|enables?|allows?|supports?|delivers?|manages?).*)",
        "${1}: ${2}",
    ),
    (
        r"(?i)^(.*platform.*?)(\s+(?:provides?|enables?|allows?|supports?|delivers?|manages?).*)",
        "${1}: ${2}",
    ),
    (
        r"(?i)^(.*service.*?)(\s+(?:provides?|enables?|allows?|supports?|delivers?|manages?).*)",
        "${1}: ${2}",
    ),
    (r"(?i)^(.*functionality.*?)(\s+(?:that|which|to).*)", "${1}: ${2}"),
    (r"(?i)^(.*capability.*?)(\s+(?:that|which|to).*)", "${1}: ${2}"),
    (r"(?i)^(.*mechanism.*?)(\s+(?:that|which|to).*)", "${1}: ${2}"),
    (r"(?i)^(.*framework.*?)(\s+(?:that|which|to).*)", "${1}: ${2}"),
    (r"(?i)^(.*engine.*?)(\s+(?:that|which|to).*)", "${1}: ${2}"),
    (r"(?i)^(User.*?)(\s+(?:can|may|will|shall|must).*)", "${1}: ${2}"),
    (r"(?i)^(Business.*?)(\s+(?:requires?|needs?|enables?).*)", "${1}: ${2}"),
    (r"(?i)^(Data.*?)(\s+(?:processing|management|handling).*)", "${1}: ${2}"),
    (r"(?i)^(Report.*?)(\s+(?:generation|creation|delivery).*)", "${1}: ${2}"),
    (r"(?i)^(Security.*?)(\s+(?:framework|protocol|measures?).*)", "${1}: ${2}"),
    (
        r"(?i)^(.*processing.*?)(\s+(?:includes?|involves?|encompasses?).*)",
        "${1}: ${2}",
    ),
    (
        r"(?i)^(.*management.*?)(\s+(?:includes?|involves?|encompasses?).*)",
        "${1}: ${2}",
    ),
    (
        r"(?i)^(.*workflow.*?)(\s+(?:includes?|involves?|encompasses?).*)",
        "${1}: ${2}",
    ),
    (
        r"(?i)^([A-Z][^:]*?)(\s+(?:must|should|will|shall|can|may|enables?|provides?|allows?|supports?|delivers?|manages?|includes?|involves?|encompasses?|that|which|to)\b.*)",
        "${1}: ${2}",
    ),
];

/// Colon cleanup: collapse duplicate or misplaced colons left by insertion
const COLON_CLEANUP: &[(&str, &str)] = &[(r":\s*:", ":"), (r"\s+:", ":"), (r":\s+", ": ")];

/// A lower-case letter following a colon, to be upper-cased
const COLON_CASE: &str = r":(\s*)([a-z])";

/// Runs of whitespace to collapse
const WHITESPACE: &str = r"\s{2,}";

/// Grammar and flow artifact substitutions, applied in order
const GRAMMAR_RULES: &[(&str, &str)] = &[
    (r"(?i)\bprovides be\b", "provides"),
    (r"(?i)\b(must|should|will|can|may) be be\b", "${1} be"),
    (r"(?i)\bprovides provides\b", "provides"),
    (r"(?i)\bprovides (must|should|will|can|may)\b", "${1} provide"),
    (r"(?i)\bprovides (is|are|was|were|has|have|had)\b", "${1}"),
    // Collapse doubled capability nouns; "management system" and friends
    // are legitimate phrases and must survive, so "management" is only
    // collapsed against itself.
    (
        r"(?i)\b(functionality|capability|system|mechanism|service)\s+(functionality|capability|system|mechanism|service)\b",
        "${1}",
    ),
    (r"(?i)\bmanagement\s+management\b", "management"),
    (r"(?i)\bwith\s+with\b", "with"),
    (r"(?i)\band\s+and\b", "and"),
    (r"(?i)\bfor\s+for\b", "for"),
    (r"(?i)\bwith\s+for\b", "for"),
    (r"(?i)\bfor\s+with\b", "with"),
    (r"(?i)\bfeaturing\s+with\b", "featuring"),
    (r"(?i)\bsupporting\s+for\b", "supporting"),
    (r"(?i)\bincluding\s+with\b", "including"),
];

// ============================================
// Uniqueness extraction tables
// ============================================

/// Specific business/technical/industry term families
const SPECIFIC_TERM_PATTERNS: &[&str] = &[
    // Business
    r"(?i)\b(invoice|receipt|purchase\s*order|contract|agreement|policy|procedure)\w*",
    r"(?i)\b(customer\s*service|help\s*desk|support\s*ticket|incident|request)\w*",
    r"(?i)\b(inventory|stock|warehouse|shipping|delivery|logistics)\w*",
    r"(?i)\b(payroll|salary|benefits|vacation|leave|attendance)\w*",
    r"(?i)\b(budget|forecast|revenue|expense|cost\s*center|profit)\w*",
    r"(?i)\b(project|milestone|deadline|timeline|gantt|schedule)\w*",
    r"(?i)\b(quality\s*assurance|testing|validation|verification|compliance)\w*",
    r"(?i)\b(marketing|campaign|promotion|advertisement|lead|prospect)\w*",
    // Technical
    r"(?i)\b(database|table|schema|query|index|trigger)\w*",
    r"(?i)\b(api|endpoint|json|xml|rest|soap|http|https)\w*",
    r"(?i)\b(encryption|certificate|token|session|cookie|cache)\w*",
    r"(?i)\b(workflow|pipeline|queue|batch|scheduler|cron)\w*",
    r"(?i)\b(mobile|tablet|responsive|android|ios|app)\w*",
    r"(?i)\b(excel|csv|pdf|word|powerpoint|format)\w*",
    // Industry
    r"(?i)\b(patient|medical|healthcare|hospital|clinic|doctor)\w*",
    r"(?i)\b(student|teacher|course|curriculum|grade|academic)\w*",
    r"(?i)\b(loan|mortgage|credit|debit|banking|financial)\w*",
    r"(?i)\b(manufacturing|production|assembly|quality|defect)\w*",
    r"(?i)\b(retail|sales|pos|checkout|payment|transaction)\w*",
    r"(?i)\b(legal|court|case|attorney|law|regulation)\w*",
];

/// Quantitative mention families: numbers, time periods, frequencies
const QUANTITY_PATTERNS: &[&str] = &[
    r"(?i)\b\d+\s*(percent|%|percentage|hours?|minutes?|seconds?|days?|weeks?|months?|years?)",
    r"(?i)\b(within|after|before|up\s*to|at\s*least|maximum|minimum)\s+\d+\s*\w*",
    r"(?i)\b\d+\s*(users?|records?|items?|files?|documents?|entries?)",
    r"(?i)\b(first|second|third|last|\d+(?:st|nd|rd|th))\s+\w*",
    r"(?i)\b(daily|weekly|monthly|quarterly|annually|hourly)\b",
    r"(?i)\b(real[\s-]?time|immediate|instant|batch|scheduled)\b",
];

/// Business domain a requirement's vocabulary places it in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Finance,
    Hr,
    Healthcare,
    Education,
    Manufacturing,
    Legal,
}

impl Domain {
    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Finance => "finance",
            Self::Hr => "hr",
            Self::Healthcare => "healthcare",
            Self::Education => "education",
            Self::Manufacturing => "manufacturing",
            Self::Legal => "legal",
        }
    }

    /// Fixed context clause woven into descriptions for this domain
    pub fn context_clause(&self) -> &'static str {
        match self {
            Self::Finance => "for financial operations and accounting processes",
            Self::Hr => "for human resources and employee management",
            Self::Healthcare => "for healthcare operations and patient management",
            Self::Education => "for educational administration and student services",
            Self::Manufacturing => "for production management and quality control",
            Self::Legal => "for legal compliance and regulatory management",
        }
    }
}

/// Domain vocabulary, checked in this order
const DOMAIN_PATTERNS: [(Domain, &str); 6] = [
    (
        Domain::Finance,
        r"(?i)\b(accounting|ledger|journal|balance|asset|liability|equity|revenue|expense|depreciation|amortization|accrual|cash\s*flow|roi|npv|irr)\b",
    ),
    (
        Domain::Hr,
        r"(?i)\b(employee|staff|personnel|recruitment|hiring|onboarding|performance\s*review|appraisal|benefits|compensation|termination)\b",
    ),
    (
        Domain::Healthcare,
        r"(?i)\b(patient|diagnosis|treatment|prescription|medical\s*record|insurance|claim|provider|physician|nurse)\b",
    ),
    (
        Domain::Education,
        r"(?i)\b(student|enrollment|curriculum|syllabus|assignment|grade|transcript|diploma|certificate|academic)\b",
    ),
    (
        Domain::Manufacturing,
        r"(?i)\b(production|assembly|quality\s*control|inspection|defect|batch|lot|inventory|bom|work\s*order)\b",
    ),
    (
        Domain::Legal,
        r"(?i)\b(contract|agreement|compliance|regulation|policy|procedure|audit|risk|liability|intellectual\s*property)\b",
    ),
];

/// Technical-detail clauses keyed by substring families in the original text
pub const TECH_DETAIL_RULES: &[(&[&str], &str)] = &[
    (&["encryption", "secure", "ssl", "https"], "with security encryption"),
    (&["real-time", "immediate", "instant"], "with real-time processing"),
    (&["validation", "verify", "check"], "including data validation"),
    (&["api", "external", "third party"], "with external system integration"),
    (&["email", "sms", "notification"], "with automated notifications"),
    (&["audit", "log", "track"], "including audit trail capabilities"),
    (&["backup", "recovery", "restore"], "with backup and recovery features"),
    (&["excel", "pdf", "csv"], "supporting multiple export formats"),
];

/// Tier phrases keyed by the last character of the requirement id.
/// Keeps textually-similar rows from collapsing to identical output.
pub fn tier_phrase(last_char: char) -> Option<&'static str> {
    match last_char {
        '1' => Some("with primary operational focus"),
        '2' => Some("with secondary workflow support"),
        '3' => Some("with tertiary process integration"),
        '4' => Some("with fourth-tier functionality"),
        '5' => Some("with fifth-level capabilities"),
        '6' => Some("with sixth-generation features"),
        '7' => Some("with seventh-tier processing"),
        '8' => Some("with eighth-level automation"),
        '9' => Some("with ninth-tier optimization"),
        '0' => Some("with foundational system support"),
        _ => None,
    }
}

/// Generic filler descriptions for blank-description rows.
/// The pick among these is the engine's single documented random step.
pub const FILLER_DESCRIPTIONS: [&str; 8] = [
    "Business process functionality",
    "System operation and management",
    "User workflow support",
    "Data handling and processing",
    "Application feature set",
    "Service delivery mechanism",
    "Information management tool",
    "Operational capability",
];

/// Enhancement clause appended to under-length descriptions, by business value
pub fn enhancement_clause(business_value: Level) -> &'static str {
    match business_value {
        Level::High => "with comprehensive enterprise-grade capabilities",
        Level::Medium => "with integrated business functionality",
        Level::Low => "with essential operational features",
    }
}

// ============================================
// Compiled catalog
// ============================================

/// One compiled substitution rule
#[derive(Debug)]
pub struct RewriteRule {
    pub pattern: Regex,
    pub replacement: &'static str,
}

/// One compiled feature-name rule
#[derive(Debug)]
pub struct FeatureNameRule {
    pub pattern: Regex,
    pub names: &'static [&'static str],
}

/// The compiled, immutable pattern catalog
#[derive(Debug)]
pub struct PatternCatalog {
    /// Intent vocabulary in canonical (tie-break) order
    pub intents: Vec<(Intent, Regex)>,
    pub simple: Regex,
    pub complex: Regex,
    pub real_time: Regex,
    pub batch: Regex,
    pub value_high: Regex,
    pub value_low: Regex,
    pub impact_high: Regex,
    pub impact_low: Regex,
    pub feature_names: Vec<FeatureNameRule>,
    pub clean_rules: Vec<RewriteRule>,
    pub sentence_rewrites: Vec<RewriteRule>,
    pub paraphrase_rules: Vec<RewriteRule>,
    pub capability_noun: Regex,
    pub capability_lead: Regex,
    pub colon_rules: Vec<RewriteRule>,
    pub colon_cleanup: Vec<RewriteRule>,
    pub colon_case: Regex,
    pub whitespace: Regex,
    pub grammar_rules: Vec<RewriteRule>,
    pub specific_terms: Vec<Regex>,
    pub quantities: Vec<Regex>,
    pub domains: Vec<(Domain, Regex)>,
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| FsForgeError::InvalidPattern {
        message: e.to_string(),
    })
}

fn compile_rules(table: &[(&str, &'static str)]) -> Result<Vec<RewriteRule>> {
    table
        .iter()
        .map(|(pattern, replacement)| {
            Ok(RewriteRule {
                pattern: compile(pattern)?,
                replacement,
            })
        })
        .collect()
}

impl PatternCatalog {
    /// Compile the built-in tables into an immutable catalog.
    ///
    /// Construction is the only point where a pattern error can surface;
    /// every later engine operation is infallible with respect to patterns.
    pub fn new() -> Result<Self> {
        Ok(Self {
            intents: INTENT_VOCABULARY
                .iter()
                .map(|(intent, pattern)| Ok((*intent, compile(pattern)?)))
                .collect::<Result<_>>()?,
            simple: compile(SIMPLE_INDICATORS)?,
            complex: compile(COMPLEX_INDICATORS)?,
            real_time: compile(REAL_TIME_INDICATORS)?,
            batch: compile(BATCH_INDICATORS)?,
            value_high: compile(VALUE_HIGH)?,
            value_low: compile(VALUE_LOW)?,
            impact_high: compile(IMPACT_HIGH)?,
            impact_low: compile(IMPACT_LOW)?,
            feature_names: FEATURE_NAME_TABLE
                .iter()
                .map(|(pattern, names)| {
                    Ok(FeatureNameRule {
                        pattern: compile(pattern)?,
                        names,
                    })
                })
                .collect::<Result<_>>()?,
            clean_rules: compile_rules(CLEAN_RULES)?,
            sentence_rewrites: compile_rules(SENTENCE_REWRITES)?,
            paraphrase_rules: compile_rules(PARAPHRASE_RULES)?,
            capability_noun: compile(CAPABILITY_NOUN)?,
            capability_lead: compile(CAPABILITY_LEAD)?,
            colon_rules: compile_rules(COLON_RULES)?,
            colon_cleanup: compile_rules(COLON_CLEANUP)?,
            colon_case: compile(COLON_CASE)?,
            whitespace: compile(WHITESPACE)?,
            grammar_rules: compile_rules(GRAMMAR_RULES)?,
            specific_terms: SPECIFIC_TERM_PATTERNS
                .iter()
                .map(|p| compile(p))
                .collect::<Result<_>>()?,
            quantities: QUANTITY_PATTERNS
                .iter()
                .map(|p| compile(p))
                .collect::<Result<_>>()?,
            domains: DOMAIN_PATTERNS
                .iter()
                .map(|(domain, pattern)| Ok((*domain, compile(pattern)?)))
                .collect::<Result<_>>()?,
        })
    }

    /// Vocabulary pattern for one intent.
    ///
    /// The intent table is built in canonical order, so the canonical index
    /// is also the table index.
    pub fn intent_pattern(&self, intent: Intent) -> &Regex {
        &self.intents[intent.canonical_index()].1
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::CATALOG;
    use super::*;

    #[test]
    fn test_catalog_compiles() {
        let catalog = PatternCatalog::new().unwrap();
        assert_eq!(catalog.intents.len(), 12);
        assert_eq!(catalog.domains.len(), 6);
        assert!(!catalog.sentence_rewrites.is_empty());
    }

    #[test]
    fn test_intent_order_is_canonical() {
        let order: Vec<Intent> = CATALOG.intents.iter().map(|(i, _)| *i).collect();
        assert_eq!(order, Intent::ALL.to_vec());
    }

    #[test]
    fn test_authentication_vocabulary_matches() {
        let (_, re) = &CATALOG.intents[0];
        assert_eq!(re.find_iter("login with username and password").count(), 3);
        assert!(re.is_match("Sign-in"));
        assert!(!re.is_match("logistics"));
    }

    #[test]
    fn test_subject_rules_precede_generic_rules() {
        // "login process" must hit the curated subject rule, not the
        // generic "(process|handle) (\w+)" verb rule further down.
        let first_match = CATALOG
            .sentence_rewrites
            .iter()
            .find(|rule| rule.pattern.is_match("the login process"))
            .unwrap();
        assert_eq!(
            first_match.replacement,
            "User authentication and access control"
        );
    }

    #[test]
    fn test_tier_phrase_covers_all_digits() {
        for d in '0'..='9' {
            assert!(tier_phrase(d).is_some());
        }
        assert!(tier_phrase('X').is_none());
    }
}
