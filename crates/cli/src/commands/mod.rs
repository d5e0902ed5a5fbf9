//! CLI subcommands.

pub mod admin;
pub mod migrate;

use secrecy::SecretString;

/// Read the admin database URL (`ADMIN_DATABASE_URL`, then `DATABASE_URL`).
///
/// Loads `.env` first if present.
fn database_url() -> Option<SecretString> {
    dotenvy::dotenv().ok();

    ["ADMIN_DATABASE_URL", "DATABASE_URL"]
        .into_iter()
        .find_map(|key| std::env::var(key).ok().filter(|v| !v.trim().is_empty()))
        .map(SecretString::from)
}
