//! fsforge: deterministic URS to FS requirement transformation
//!
//! This library turns User Requirement Specification rows into derived
//! Functional Specification rows by pattern-matching and rewriting
//! natural-language text. There is no model and no learning: the "AI" is
//! a rule engine over regular expressions and lookup tables, and identical
//! input produces identical output. The single documented exception is the
//! filler pick for blank descriptions, which is random unless the engine
//! is seeded.
//!
//! # Pipeline
//!
//! raw record -> analyzer -> (namer, synthesizer, comment passthrough)
//! -> orchestrator -> FS record
//!
//! # Example
//!
//! ```
//! use fsforge::{Engine, RequirementRecord};
//!
//! let engine = Engine::new()?.with_seed(42);
//! let rows = vec![RequirementRecord {
//!     requirement_id: "URS-001".to_string(),
//!     requirement_description:
//!         "The system shall allow users to login with username and password.".to_string(),
//!     requirement_active: "Yes".to_string(),
//!     ..Default::default()
//! }];
//!
//! let output = engine.transform_all(&rows);
//! assert_eq!(output[0].fs_id, "FS-001");
//! assert_eq!(output[0].reference_urs_id, "URS-001");
//! # Ok::<(), fsforge::FsForgeError>(())
//! ```

pub mod analyzer;
pub mod catalog;
pub mod cli;
pub mod columns;
pub mod error;
pub mod fallback;
pub mod namer;
pub mod schema;
pub mod synthesis;
pub mod transform;

// Re-export commonly used types
pub use analyzer::analyze;
pub use catalog::PatternCatalog;
pub use cli::{Cli, Commands, OutputFormat};
pub use columns::{map_columns, reconcile, ColumnMapping, Field};
pub use error::{FsForgeError, Result};
pub use namer::feature_name;
pub use schema::{
    Analysis, Complexity, FsRecord, Intent, Level, RequirementRecord, TechRequirement,
};
pub use synthesis::synthesize;
pub use transform::{format_fs_id, normalize_comment, Engine};
