use std::fs;

use longword_core::settings::{self, Settings};

/// Install the TOML at `path` (if any) as the global settings and return them.
pub fn load_settings(path: Option<&str>) -> &'static Settings {
    if let Some(path) = path {
        let content = die!(fs::read_to_string(path), "Error reading {path}: {}");
        die!(settings::init_custom(content), "Error in {path}: {}");
    }
    settings::settings()
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: input.min_word_len={}, input.on_invalid={:?}, resolve.order={:?}, report.list_matches={}",
        s.input.min_word_len, s.input.on_invalid, s.resolve.order, s.report.list_matches
    );
}
