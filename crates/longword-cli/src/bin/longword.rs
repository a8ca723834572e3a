use std::process;

use clap::{CommandFactory, Parser};

use longword_cli::commands::config_ops;
use longword_cli::commands::report_ops::{self, OutputFormat, ReportError};
use longword_cli::trace_init;
use longword_core::analyze::AnalyzeError;

#[derive(Parser)]
#[command(
    name = "longword",
    about = "Find the longest words made of other words in a word list"
)]
struct Cli {
    /// File with one lowercase word per line
    file: String,
    /// Custom settings TOML
    #[arg(long)]
    settings: Option<String>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Also print every concatenated word, in resolution order
    #[arg(long)]
    list: bool,
    /// Write JSON trace logs to this directory
    #[cfg(feature = "trace")]
    #[arg(long)]
    log_dir: Option<String>,
}

fn main() {
    let cli = Cli::try_parse().unwrap_or_else(|e| {
        let code = if e.use_stderr() { 1 } else { 0 };
        let _ = e.print();
        process::exit(code);
    });

    #[cfg(feature = "trace")]
    let _guard = match cli.log_dir.as_deref() {
        Some(dir) => Some(trace_init::init_tracing(std::path::Path::new(dir))),
        None => {
            trace_init::init_stderr();
            None
        }
    };
    #[cfg(not(feature = "trace"))]
    trace_init::init_stderr();

    let settings = config_ops::load_settings(cli.settings.as_deref());
    match report_ops::report_cmd(&cli.file, cli.format, cli.list, settings) {
        Ok(()) => {}
        Err(e @ ReportError::Analyze(AnalyzeError::Open { .. })) => {
            eprintln!("Error: {e}");
            eprintln!("{}", Cli::command().render_usage());
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
