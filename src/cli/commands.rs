//! CLI command implementations
//!
//! Each command writes exactly one JSON response to stdout. Log lines go to
//! stderr. Semantic mismatches end the process with a non-zero exit code only
//! under the `reject` policy.

use std::path::Path;

use serde_json::{json, Value};

use crate::class::{CheckReport, SchemaChecker, SchemaLoader};
use crate::observability::{log_event, log_event_at, log_event_with_fields, Event, Severity};
use crate::semantic::{
    DeclaredProperty, ElementType, FloatPrecision, SemanticCatalog, SemanticValidator,
    ValidationOutcome,
};

use super::args::Command;
use super::config::{Config, MismatchPolicy};
use super::errors::{CliError, CliErrorCode, CliResult};
use super::io::{write_error, write_response};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    let result = run_command(cli.command);

    // Rejections already produced their report.
    if let Err(ref e) = result {
        if e.code() != &CliErrorCode::Rejected {
            write_error(e.code_str(), e.message())?;
        }
    }

    result
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    log_event(Event::CommandBegin);

    let result = match cmd {
        Command::List => list(),
        Command::Lookup { name } => lookup(&name),
        Command::Validate {
            semantic,
            element,
            count,
            variable,
            precision,
            config,
        } => {
            let config = load_config(config.as_deref())?;
            let declared = declared_from_args(element, count, variable, precision)?;
            validate(&semantic, &declared, &config)
        }
        Command::Check { schema, config } => {
            let config = load_config(config.as_deref())?;
            check(&schema, &config)
        }
    };

    log_event_with_fields(
        Event::CommandComplete,
        &[("ok", if result.is_ok() { "true" } else { "false" })],
    );
    result
}

/// List every reserved semantic
pub fn list() -> CliResult<()> {
    write_response(catalog_json())
}

/// Show the definition of one semantic
pub fn lookup(name: &str) -> CliResult<()> {
    write_response(lookup_json(name))
}

/// Validate one declared property against a semantic
pub fn validate(semantic: &str, declared: &DeclaredProperty, config: &Config) -> CliResult<()> {
    let validator = SemanticValidator::default();
    let governed = validator.catalog().contains(semantic);
    let outcome = validator.validate(semantic, declared);

    log_outcome(config, "", "", semantic, governed, &outcome);

    write_response(json!({
        "semantic": semantic,
        "governed": governed,
        "declared": declared,
        "result": outcome,
    }))?;

    if outcome.is_accepted() {
        Ok(())
    } else {
        apply_policy(config.mismatch_policy, 1)
    }
}

/// Check every semantic-tagged property in a schema file
pub fn check(schema_path: &Path, config: &Config) -> CliResult<()> {
    let report = check_schema(schema_path, config)?;

    write_response(serde_json::to_value(&report)?)?;

    apply_policy(config.mismatch_policy, report.rejected)
}

/// Loads a schema file and checks it, logging each outcome.
pub fn check_schema(schema_path: &Path, config: &Config) -> CliResult<CheckReport> {
    let path = schema_path.display().to_string();
    let mut loader = SchemaLoader::new();

    let schema = match loader.load_file(schema_path) {
        Ok(schema) => schema,
        Err(e) => {
            log_event_with_fields(
                Event::SchemaLoadFailed,
                &[("path", path.as_str()), ("code", e.code())],
            );
            return Err(e.into());
        }
    };
    log_event_with_fields(
        Event::SchemaLoaded,
        &[("path", path.as_str()), ("schema_id", schema.id.as_str())],
    );

    let report = SchemaChecker::default().check(schema)?;
    for check in &report.checks {
        log_outcome(
            config,
            &check.class,
            &check.property,
            &check.semantic,
            check.governed,
            &check.outcome,
        );
    }

    let accepted = report.accepted.to_string();
    let rejected = report.rejected.to_string();
    let unknown = report.unknown.to_string();
    log_event_with_fields(
        Event::CheckComplete,
        &[
            ("accepted", accepted.as_str()),
            ("rejected", rejected.as_str()),
            ("schema_id", report.schema_id.as_str()),
            ("unknown", unknown.as_str()),
        ],
    );

    Ok(report)
}

/// Catalog as a JSON array, in catalog order
pub fn catalog_json() -> Value {
    let definitions: Vec<_> = SemanticCatalog::global().iter().collect();
    json!(definitions)
}

/// One definition, or a not-governed marker for names outside the catalog
pub fn lookup_json(name: &str) -> Value {
    match SemanticCatalog::global().lookup(name) {
        Some(definition) => json!({
            "governed": true,
            "definition": definition,
        }),
        None => json!({
            "governed": false,
            "name": name,
        }),
    }
}

/// Builds a declared property from `validate` arguments
pub fn declared_from_args(
    element: ElementType,
    count: u32,
    variable: bool,
    precision: Option<u8>,
) -> CliResult<DeclaredProperty> {
    let precision = precision
        .map(FloatPrecision::try_from)
        .transpose()
        .map_err(CliError::invalid_argument)?;

    if count == 0 {
        return Err(CliError::invalid_argument("count must be at least 1"));
    }

    if variable {
        Ok(DeclaredProperty::variable_array(element, precision))
    } else {
        Ok(DeclaredProperty::new(element, count, precision))
    }
}

fn load_config(path: Option<&Path>) -> CliResult<Config> {
    let config = Config::load_or_default(path)?;
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("log_accepted", if config.log_accepted { "true" } else { "false" }),
            ("mismatch_policy", config.mismatch_policy.as_str()),
        ],
    );
    Ok(config)
}

fn apply_policy(policy: MismatchPolicy, rejected: usize) -> CliResult<()> {
    match policy {
        MismatchPolicy::Reject if rejected > 0 => Err(CliError::rejected(rejected)),
        _ => Ok(()),
    }
}

fn log_outcome(
    config: &Config,
    class: &str,
    property: &str,
    semantic: &str,
    governed: bool,
    outcome: &ValidationOutcome,
) {
    match outcome.rejection() {
        Some(rejection) => {
            let severity = match config.mismatch_policy {
                MismatchPolicy::Reject => Severity::Error,
                MismatchPolicy::Warn => Severity::Warn,
                MismatchPolicy::Ignore => return,
            };
            log_event_at(
                severity,
                Event::SemanticRejected,
                &[
                    ("actual", rejection.actual()),
                    ("class", class),
                    ("expected", rejection.expected()),
                    ("property", property),
                    ("reason", rejection.reason().code()),
                    ("semantic", semantic),
                ],
            );
        }
        None if !governed => log_event_at(
            Severity::Trace,
            Event::SemanticUngoverned,
            &[("class", class), ("property", property), ("semantic", semantic)],
        ),
        None if config.log_accepted => log_event_with_fields(
            Event::SemanticAccepted,
            &[("class", class), ("property", property), ("semantic", semantic)],
        ),
        None => {}
    }
}
