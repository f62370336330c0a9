//! fsforge CLI entry point

use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;

use fsforge::cli::{AnalyzeArgs, MapArgs, TransformArgs};
use fsforge::{
    analyze, columns, feature_name, Analysis, Cli, Commands, Engine, FsForgeError, FsRecord,
    OutputFormat, PatternCatalog, RequirementRecord,
};

fn main() -> ExitCode {
    match run() {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

fn run() -> fsforge::Result<String> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("fsforge=debug")),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    match &cli.command {
        Commands::Transform(args) => run_transform(&cli, args),
        Commands::Analyze(args) => run_analyze(&cli, args),
        Commands::Map(args) => run_map(&cli, args),
    }
}

/// One output row plus its optional diagnostic analysis
#[derive(Serialize)]
struct TransformRow<'a> {
    #[serde(flatten)]
    record: &'a FsRecord,

    #[serde(rename = "_analysis", skip_serializing_if = "Option::is_none")]
    analysis: Option<&'a Analysis>,
}

fn run_transform(cli: &Cli, args: &TransformArgs) -> fsforge::Result<String> {
    let rows = read_rows(&args.input)?;
    let records = columns::reconcile(&rows);

    let mut engine = Engine::new()?.with_basic_only(args.basic);
    if let Some(seed) = args.seed {
        engine = engine.with_seed(seed);
    }

    let results = engine.transform_with_analysis(&records);

    match cli.format {
        OutputFormat::Json => {
            let output: Vec<TransformRow> = results
                .iter()
                .map(|(record, analysis)| TransformRow {
                    record,
                    analysis: args.analysis.then_some(analysis),
                })
                .collect();
            Ok(serde_json::to_string_pretty(&output)? + "\n")
        }
        OutputFormat::Text => {
            let mut out = String::new();
            for (record, analysis) in &results {
                out.push_str(&format!(
                    "{}  {}  [{}]\n  Description: {}\n  Comments: {}\n  Active: {}\n",
                    record.fs_id,
                    record.reference_urs_id,
                    record.feature,
                    record.description,
                    record.comments,
                    record.requirement_active,
                ));
                if args.analysis {
                    out.push_str(&format_analysis_line(analysis));
                }
                out.push('\n');
            }
            out.push_str(&format!("{} requirements transformed\n", results.len()));
            Ok(out)
        }
    }
}

fn run_analyze(cli: &Cli, args: &AnalyzeArgs) -> fsforge::Result<String> {
    let catalog = PatternCatalog::new()?;
    let record = RequirementRecord {
        requirement_id: "URS-000".to_string(),
        requirement_type: args.requirement_type.clone().unwrap_or_default(),
        requirement_description: args.description.clone(),
        comment: args.comment.clone().unwrap_or_default(),
        priority: args.priority.clone(),
        ..Default::default()
    };

    let analysis = analyze(&record, &catalog);
    let feature = feature_name(&record.requirement_description, &analysis, &catalog);

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "analysis": analysis,
                "feature": feature,
            });
            Ok(serde_json::to_string_pretty(&output)? + "\n")
        }
        OutputFormat::Text => {
            let mut out = format_analysis_line(&analysis);
            out.push_str(&format!("  Feature: {}\n", feature));
            Ok(out)
        }
    }
}

fn run_map(cli: &Cli, args: &MapArgs) -> fsforge::Result<String> {
    let mapping = columns::map_columns(&args.headers);

    match cli.format {
        OutputFormat::Json => {
            let mapped: serde_json::Map<String, serde_json::Value> = columns::Field::ALL
                .iter()
                .filter_map(|field| {
                    mapping.mapping.get(field).map(|header| {
                        (
                            field.canonical_name().to_string(),
                            serde_json::Value::String(header.clone()),
                        )
                    })
                })
                .collect();
            let unmapped: Vec<&str> = mapping
                .unmapped
                .iter()
                .map(|f| f.canonical_name())
                .collect();
            let output = serde_json::json!({
                "mapping": mapped,
                "unmapped": unmapped,
                "needsMapping": mapping.needs_mapping,
            });
            Ok(serde_json::to_string_pretty(&output)? + "\n")
        }
        OutputFormat::Text => {
            let mut out = String::new();
            for field in columns::Field::ALL {
                match mapping.mapping.get(&field) {
                    Some(header) => out.push_str(&format!(
                        "{} <- {}\n",
                        field.canonical_name(),
                        header
                    )),
                    None => out.push_str(&format!(
                        "{} <- (default values)\n",
                        field.canonical_name()
                    )),
                }
            }
            Ok(out)
        }
    }
}

fn format_analysis_line(analysis: &Analysis) -> String {
    let secondary: Vec<&str> = analysis
        .secondary_intents
        .iter()
        .map(|i| i.as_str())
        .collect();
    let tags: Vec<&str> = analysis
        .technical_requirements
        .iter()
        .map(|t| t.as_str())
        .collect();
    format!(
        "  Intent: {} (secondary: {})\n  Complexity: {}  Priority: {}  Value: {}  Impact: {}\n  Technical: {}\n",
        analysis.primary_intent,
        if secondary.is_empty() {
            "none".to_string()
        } else {
            secondary.join(", ")
        },
        analysis.complexity.as_str(),
        analysis.priority.as_str(),
        analysis.business_value.as_str(),
        analysis.user_impact.as_str(),
        if tags.is_empty() {
            "none".to_string()
        } else {
            tags.join(", ")
        },
    )
}

/// Read a JSON array of rows from a file or stdin, stringifying values
fn read_rows(input: &str) -> fsforge::Result<Vec<HashMap<String, String>>> {
    let raw = if input == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        if !std::path::Path::new(input).exists() {
            return Err(FsForgeError::FileNotFound {
                path: input.to_string(),
            });
        }
        fs::read_to_string(input)?
    };

    let rows: Vec<HashMap<String, serde_json::Value>> = serde_json::from_str(&raw)?;
    Ok(rows
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|(key, value)| (key, stringify(value)))
                .collect()
        })
        .collect())
}

/// Cell values arrive as arbitrary JSON scalars; the engine wants strings
fn stringify(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}
