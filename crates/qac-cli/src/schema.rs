//! # Schema Subcommand
//!
//! Prints the question table: id, answer kind, annotations offered, when
//! the question is shown, and its label.

use std::fmt;

use anyhow::Result;
use clap::Args;

use qac_core::schema::in_section;
use qac_core::{AnswerKind, QuestionSpec, SectionKey, Visibility};

/// Arguments for the `qac schema` subcommand.
#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Only print one section (`restaurantDetails`, `brandNames`, `whDc`,
    /// `otherComplaintType`).
    #[arg(long)]
    pub section: Option<String>,
}

/// Execute the schema subcommand.
pub fn run_schema(args: &SchemaArgs) -> Result<u8> {
    let sections: Vec<SectionKey> = match &args.section {
        Some(key) => vec![key.parse()?],
        None => SectionKey::all().to_vec(),
    };
    print!("{}", SchemaTable(&sections));
    Ok(0)
}

fn kind_label(kind: AnswerKind) -> &'static str {
    match kind {
        AnswerKind::Choice => "choice",
        AnswerKind::ShortText => "text",
        AnswerKind::LongText => "long text",
        AnswerKind::Date => "date",
        AnswerKind::Time => "time",
        AnswerKind::Photos => "photos",
    }
}

fn visibility_label(visibility: Visibility) -> String {
    match visibility {
        Visibility::Always => "always".to_string(),
        Visibility::Branch(branch) => format!("when {branch}"),
        Visibility::ProductLine(line) => format!("when 3.2 = {}", line.label()),
    }
}

fn flags(spec: &QuestionSpec) -> String {
    let mut flags = Vec::new();
    if spec.required {
        flags.push("required");
    }
    if spec.allows_na {
        flags.push("n/a");
    }
    if spec.accepts_files {
        flags.push("files");
    }
    flags.join(",")
}

/// The question table for a list of sections, one block per section.
pub struct SchemaTable<'a>(pub &'a [SectionKey]);

impl fmt::Display for SchemaTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in self.0 {
            writeln!(f, "{}", section.title())?;
            let mut any = false;
            for spec in in_section(*section) {
                any = true;
                writeln!(
                    f,
                    "  {:<5} {:<9} {:<21} {:<22} {}",
                    spec.id,
                    kind_label(spec.kind),
                    flags(spec),
                    visibility_label(spec.visibility),
                    spec.label
                )?;
            }
            if !any {
                writeln!(f, "  (no questions)")?;
            }
        }
        Ok(())
    }
}
