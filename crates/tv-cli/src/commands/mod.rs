pub mod ask;
pub mod check;
pub mod fields;
pub mod list;
pub mod play;

use tv_quiz::{Quiz, SessionConfig};

/// Resolve an optional quiz name against the catalog.
fn resolve(name: Option<&str>) -> Result<Option<&'static Quiz>, String> {
    name.map(tv_quiz::find)
        .transpose()
        .map_err(|e| e.to_string())
}

/// Session configuration with an optional seed.
fn config(seed: Option<u64>) -> SessionConfig {
    match seed {
        Some(seed) => SessionConfig::default().with_seed(seed),
        None => SessionConfig::default(),
    }
}
