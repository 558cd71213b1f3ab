// src/export/bitwarden.rs
//! Bitwarden item shapes and the mapping from 2FAuth accounts
//!
//! Everything borrows from the [`SourceRecord`] so the seed is never copied
//! out of its zeroizing wrapper.

use serde::Serialize;

use crate::consts::{BITWARDEN_LOGIN_TYPE, BITWARDEN_LOGIN_TYPE_ID, EXPORT_NOTE};
use crate::core::SourceRecord;

/// One row of a Bitwarden CSV import. Field order is column order.
#[derive(Serialize)]
pub struct CsvLoginRow<'a> {
    pub folder: &'a str,
    pub favorite: &'a str,
    #[serde(rename = "type")]
    pub item_type: &'a str,
    pub name: &'a str,
    pub notes: &'a str,
    pub fields: &'a str,
    pub login_uri: &'a str,
    pub login_username: &'a str,
    pub login_password: &'a str,
    pub login_totp: &'a str,
}

impl<'a> From<&'a SourceRecord> for CsvLoginRow<'a> {
    fn from(record: &'a SourceRecord) -> Self {
        Self {
            folder: "",
            favorite: "0",
            item_type: BITWARDEN_LOGIN_TYPE,
            name: &record.service,
            notes: EXPORT_NOTE,
            fields: "",
            login_uri: "",
            login_username: &record.account,
            login_password: "",
            login_totp: record.secret(),
        }
    }
}

/// Top level of a Bitwarden JSON import
#[derive(Serialize)]
pub struct JsonExport<'a> {
    pub items: Vec<JsonItem<'a>>,
}

impl<'a> JsonExport<'a> {
    pub fn from_records(records: &'a [SourceRecord]) -> Self {
        Self {
            items: records.iter().map(JsonItem::from).collect(),
        }
    }
}

#[derive(Serialize)]
pub struct JsonItem<'a> {
    #[serde(rename = "type")]
    pub item_type: u8,
    pub name: &'a str,
    pub notes: &'a str,
    pub login: JsonLogin<'a>,
}

#[derive(Serialize)]
pub struct JsonLogin<'a> {
    pub username: &'a str,
    pub totp: &'a str,
}

impl<'a> From<&'a SourceRecord> for JsonItem<'a> {
    fn from(record: &'a SourceRecord) -> Self {
        Self {
            item_type: BITWARDEN_LOGIN_TYPE_ID,
            name: &record.service,
            notes: EXPORT_NOTE,
            login: JsonLogin {
                username: &record.account,
                totp: record.secret(),
            },
        }
    }
}
