use clap::{Parser, Subcommand};

use longword_cli::commands::{config_ops, word_ops};
use longword_cli::trace_init;

#[derive(Parser)]
#[command(name = "lwtool", about = "Longword word list inspection tool")]
struct Cli {
    /// Custom settings TOML
    #[arg(long, global = true)]
    settings: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show word, candidate and trie node counts for a word list
    Stats {
        /// Word list file
        file: String,
    },
    /// Check whether a word, or a prefix of one, is in the word list
    Lookup {
        /// Word list file
        file: String,
        /// Word or prefix to look up
        word: String,
    },
    /// Split a word into other words of the word list
    Segment {
        /// Word list file
        file: String,
        /// Word to split (need not be in the list)
        word: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    trace_init::init_stderr();

    match cli.command {
        Command::Stats { file } => {
            let settings = config_ops::load_settings(cli.settings.as_deref());
            word_ops::stats(&file, settings);
        }
        Command::Lookup { file, word } => {
            let settings = config_ops::load_settings(cli.settings.as_deref());
            word_ops::lookup(&file, &word, settings);
        }
        Command::Segment { file, word } => {
            let settings = config_ops::load_settings(cli.settings.as_deref());
            word_ops::segment(&file, &word, settings);
        }
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
