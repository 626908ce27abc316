//! Table formatting for CLI output

use coffeeshop_env::Environment;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "Key")]
    key: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

/// Render the environment as a key/value table in declaration order
pub fn environment_table(env: &Environment) -> String {
    let rows: Vec<EntryRow> = env
        .entries()
        .into_iter()
        .map(|(key, value)| EntryRow {
            key,
            value: if value.is_empty() {
                "<unset>".to_string()
            } else {
                value
            },
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::modern());
    table.to_string()
}

/// Display the environment in table format
pub fn display_environment(env: &Environment) {
    println!("{}", environment_table(env));
}
