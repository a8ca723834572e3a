use std::path::Path;

use clap::ValueEnum;
use longword_core::analyze::{analyze_file, AnalyzeError, Report};
use longword_core::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error(transparent)]
    Analyze(#[from] AnalyzeError),
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Analyze `file` and print the report to stdout.
pub fn report_cmd(
    file: &str,
    format: OutputFormat,
    list: bool,
    settings: &Settings,
) -> Result<(), ReportError> {
    let mut settings = settings.clone();
    settings.report.list_matches |= list;

    let report = analyze_file(Path::new(file), &settings)?;
    print!("{}", render(&report, format)?);
    Ok(())
}

pub fn render(report: &Report, format: OutputFormat) -> Result<String, ReportError> {
    Ok(match format {
        OutputFormat::Text => {
            let mut out = format!("{report}\n");
            for m in &report.matches {
                out.push_str(&format!("{}\t{}\n", m.word, m.len));
            }
            out
        }
        OutputFormat::Json => serde_json::to_string_pretty(report)? + "\n",
    })
}
