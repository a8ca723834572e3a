fn main() {
    println!("cargo:rerun-if-changed=src/default_settings.toml");
    check_settings_toml(
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
    );
}

fn check_settings_toml(path: &str, content: &str) {
    let table: toml::Table = match content.parse() {
        Ok(table) => table,
        Err(e) => panic!("{path}: {e}"),
    };
    for section in ["input", "resolve", "report"] {
        if !table.get(section).is_some_and(toml::Value::is_table) {
            panic!("{path}: missing [{section}] table");
        }
    }
}
