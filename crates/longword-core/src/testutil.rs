use crate::index::PrefixIndex;
use crate::settings::{parse_settings_toml, Settings, DEFAULT_SETTINGS_TOML};

/// Index with `words` inserted in the given order.
pub fn index_of(words: &[&str]) -> PrefixIndex {
    let mut index = PrefixIndex::new();
    for w in words {
        index.insert(w).unwrap();
    }
    index
}

pub fn default_settings() -> Settings {
    parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap()
}
