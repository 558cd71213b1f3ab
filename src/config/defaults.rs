// src/config/defaults.rs
use crate::consts::{DEFAULT_CSV_OUTPUT, DEFAULT_DATABASE_PATH, DEFAULT_JSON_OUTPUT};

pub fn default_database() -> String {
    DEFAULT_DATABASE_PATH.into()
}

pub fn default_csv_output() -> String {
    DEFAULT_CSV_OUTPUT.into()
}

pub fn default_json_output() -> String {
    DEFAULT_JSON_OUTPUT.into()
}
