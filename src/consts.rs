// src/consts.rs
//! Shared constants — 2FAuth schema and Bitwarden import layout

/// The one query the exporters run. `twofaccounts` holds one row per
/// TOTP/HOTP account; the remaining columns are ignored.
pub const ACCOUNTS_QUERY: &str = "SELECT service, account, secret FROM twofaccounts";

/// Default database location, relative to the executable
pub const DEFAULT_DATABASE_PATH: &str = "data/database.sqlite";

pub const DEFAULT_CSV_OUTPUT: &str = "2fauth_export_bitwarden.csv";
pub const DEFAULT_JSON_OUTPUT: &str = "2fauth_export_bitwarden.json";

/// Config file looked up next to the executable
pub const CONFIG_FILE_NAME: &str = "export-config.toml";

/// Overrides the config file location
pub const CONFIG_ENV_VAR: &str = "TFA_EXPORT_CONFIG";

/// Written into the `notes` field of every exported item
pub const EXPORT_NOTE: &str = "Exported from 2FAuth";

/// Bitwarden CSV header, in column order
pub const BITWARDEN_CSV_HEADERS: [&str; 10] = [
    "folder",
    "favorite",
    "type",
    "name",
    "notes",
    "fields",
    "login_uri",
    "login_username",
    "login_password",
    "login_totp",
];

/// Bitwarden item type for logins (CSV spells it out, JSON uses the number)
pub const BITWARDEN_LOGIN_TYPE: &str = "login";
pub const BITWARDEN_LOGIN_TYPE_ID: u8 = 1;
