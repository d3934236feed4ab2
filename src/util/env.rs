//! Environment helpers: centralized dotenv loading and ergonomic getters.
//! Call `init_env()` once early in each binary (or rely on lazy Once).
use std::sync::Once;

use tracing::info;

static INIT: Once = Once::new();

/// Load .env exactly once. Safe to call many times.
pub fn init_env() {
    INIT.call_once(|| {
        let _ = dotenv::dotenv();
    });
}

/// Common bootstrap for CLI binaries: initialize dotenv/env once and log the
/// resolved store path so operators can see which file is about to change.
pub fn bootstrap_cli(bin_name: &str) {
    init_env();
    info!(
        target = "bootstrap",
        bin = bin_name,
        path = %store_path(),
        "store path resolved"
    );
}

/// Get optional env var (None if unset or empty).
pub fn env_opt(key: &str) -> Option<String> {
    init_env();
    match std::env::var(key) {
        Ok(v) if !v.trim().is_empty() => Some(v),
        _ => None,
    }
}

/// Boolean flag; accepts 1/true/on/yes (case-insensitive) as true.
pub fn env_flag(key: &str, default: bool) -> bool {
    init_env();
    match std::env::var(key) {
        Ok(raw) => {
            let v = raw.trim().to_ascii_lowercase();
            matches!(v.as_str(), "1" | "true" | "on" | "yes")
        }
        Err(_) => default,
    }
}

/// Default location of the miniatures store relative to the repository root.
pub const DEFAULT_STORE_PATH: &str = "backend/slic.db";

/// Store file path: `SLIC_DB_PATH` when set, the fixed default otherwise.
pub fn store_path() -> String {
    env_opt("SLIC_DB_PATH").unwrap_or_else(|| DEFAULT_STORE_PATH.to_string())
}
