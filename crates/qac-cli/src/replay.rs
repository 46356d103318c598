//! # Replay Subcommand
//!
//! Builds a form session from the CLI configuration, dispatches every
//! action of a recorded script, and prints the result.
//!
//! A script is a list of actions in the same shape the session logs them:
//!
//! ```yaml
//! - type: setBrandType
//!   payload: Brand
//! - type: setSelectedBrand
//!   payload: KFC
//! - type: setQuestionComment
//!   payload: { questionId: "3.12", comment: batch label torn }
//! - type: recalculateMetrics
//! ```
//!
//! Files ending in `.json` are read as JSON, everything else as YAML.
//!
//! ## Exit codes
//!
//! - `0` replay succeeded
//! - `1` the script or configuration could not be read
//! - `2` `--submit` was given and required answers are missing

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use qac_core::schema::QUESTIONS;
use qac_core::temporal::display_answer_date;
use qac_core::{AnswerKind, SectionKey};
use qac_state::{Answer, FormAction, FormSession, FormState, ValidationReport};

use crate::config::CliConfig;

/// Exit code when `--submit` finds missing answers.
pub const EXIT_INCOMPLETE: u8 = 2;

/// Arguments for the `qac replay` subcommand.
#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// Path to the action script (YAML, or JSON with a `.json` extension).
    pub script: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
    pub format: OutputFormat,

    /// Mark the form as submitted after the script and fail when required
    /// answers are missing.
    #[arg(long)]
    pub submit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Metrics, answers and missing required fields.
    Summary,
    /// The full form document as JSON.
    Json,
}

/// Execute the replay subcommand.
pub fn run_replay(args: &ReplayArgs, config: &CliConfig) -> Result<u8> {
    let actions = load_script(&args.script)?;
    tracing::info!(script = %args.script.display(), actions = actions.len(), "replaying script");

    let session = replay(&actions, config);
    let report = if args.submit {
        session.submit()
    } else {
        session.validation_report()
    };

    let state = session.snapshot();
    match args.format {
        OutputFormat::Summary => print!("{}", Summary::new(&state, &report)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&state).context("serializing form state")?;
            println!("{json}");
        }
    }

    if args.submit && !report.is_complete() {
        tracing::warn!(missing = report.issues.len(), "submitted form is incomplete");
        return Ok(EXIT_INCOMPLETE);
    }
    Ok(0)
}

/// Read an action script from disk.
pub fn load_script(path: &Path) -> Result<Vec<FormAction>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading action script: {}", path.display()))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    parse_script(&content, is_json)
        .with_context(|| format!("parsing action script: {}", path.display()))
}

/// Parse script text. An empty YAML document is an empty script.
pub fn parse_script(content: &str, is_json: bool) -> Result<Vec<FormAction>> {
    if is_json {
        return Ok(serde_json::from_str(content)?);
    }
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_yaml::from_str(content)?)
}

/// A fresh session for the configured store with `actions` applied.
pub fn replay(actions: &[FormAction], config: &CliConfig) -> FormSession {
    let session = FormSession::new(config.store_info());
    session.dispatch_all(actions);
    session
}

fn answer_text(kind: AnswerKind, answer: Answer<'_>) -> Option<String> {
    match answer {
        Answer::Text(Some(value)) if !value.trim().is_empty() => Some(match kind {
            AnswerKind::Date => display_answer_date(value),
            _ => value.to_string(),
        }),
        Answer::Text(_) => None,
        Answer::Files(files) if files.is_empty() => None,
        Answer::Files(files) => Some(
            files
                .iter()
                .map(|f| f.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        ),
    }
}

/// Human-readable summary of a replayed form.
pub struct Summary<'a> {
    pub state: &'a FormState,
    pub report: &'a ValidationReport,
}

impl<'a> Summary<'a> {
    pub fn new(state: &'a FormState, report: &'a ValidationReport) -> Self {
        Self { state, report }
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state;
        let metrics = &state.process_metrics;

        writeln!(f, "Store:               {}", state.store_info)?;
        writeln!(f, "Overall completion:  {:.1}%", state.overall_completion)?;
        writeln!(f, "Remaining mandatory: {}", metrics.remaining_mandatory_qs)?;
        writeln!(f, "Process score:       {}", metrics.process_score)?;
        writeln!(f, "Process compliance:  {:.1}%", metrics.process_compliance)?;
        if !state.email.is_empty() {
            writeln!(f, "Email:               {}", state.email)?;
        }

        writeln!(f, "\nSections:")?;
        for key in SectionKey::all() {
            let expanded = if state.sections.is_expanded(*key) {
                "expanded"
            } else {
                "collapsed"
            };
            writeln!(
                f,
                "  {:<22} {:<9} remaining {}",
                key.title(),
                expanded,
                state.sections.metrics(*key).remaining_mandatory_questions
            )?;
        }

        writeln!(f, "\nAnswers:")?;
        let mut answered = 0;
        for spec in QUESTIONS {
            let Some(text) = state.answer(spec.id).and_then(|a| answer_text(spec.kind, a)) else {
                continue;
            };
            answered += 1;
            let mut notes = Vec::new();
            if state.is_question_na(spec.id) {
                notes.push("N/A".to_string());
            }
            let files = state.question_files(spec.id);
            if !files.is_empty() {
                notes.push(format!("{} file(s)", files.len()));
            }
            write!(f, "  {:<5} {}: {text}", spec.id, spec.label)?;
            if !notes.is_empty() {
                write!(f, " [{}]", notes.join(", "))?;
            }
            writeln!(f)?;
        }
        if answered == 0 {
            writeln!(f, "  (none)")?;
        }

        let comments: Vec<_> = state
            .annotations
            .comments
            .values()
            .filter(|c| c.is_visible || !c.comment.is_empty())
            .collect();
        if !comments.is_empty() {
            writeln!(f, "\nComments:")?;
            for comment in comments {
                writeln!(f, "  {:<5} {}", comment.question_id.as_str(), comment.comment)?;
            }
        }

        let na: Vec<&str> = state
            .annotations
            .na_states
            .values()
            .filter(|s| s.is_na)
            .map(|s| s.question_id.as_str())
            .collect();
        if !na.is_empty() {
            writeln!(f, "\nNot applicable: {}", na.join(", "))?;
        }

        if self.report.is_complete() {
            writeln!(f, "\nAll required questions answered.")
        } else {
            writeln!(f, "\nMissing required answers ({}):", self.report.issues.len())?;
            for issue in &self.report.issues {
                writeln!(f, "  {:<5} {}", issue.question_id, issue.label)?;
            }
            Ok(())
        }
    }
}
