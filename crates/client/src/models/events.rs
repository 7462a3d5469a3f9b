//! Event retrieval models.
//!
//! A [`ResultBatch`] is one page of records read from
//! `GET /services/search/jobs/{sid}/events` starting at a cursor offset.
//! Records are passed through to the caller uninterpreted.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::common::SplunkMessage;
use crate::serde_helpers::{opt_string_from_number_or_string, u64_from_string_or_number};

/// Records returned by one events fetch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultBatch {
    /// Cursor offset the batch was requested at.
    #[serde(
        rename = "init_offset",
        default,
        deserialize_with = "u64_from_string_or_number"
    )]
    pub offset: u64,
    /// Informational messages attached by Splunk.
    #[serde(default)]
    pub messages: Vec<SplunkMessage>,
    /// Records in cursor order.
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

impl ResultBatch {
    /// Number of records in this batch.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// True when the fetch produced no new records.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Offset of the first record after this batch.
    pub fn next_offset(&self) -> u64 {
        self.offset + self.results.len() as u64
    }
}

/// A single event record.
///
/// The well-known Splunk fields are named; any other field is kept verbatim
/// in [`SearchResult::fields`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The raw event text.
    #[serde(rename = "_raw", default)]
    pub raw: String,
    #[serde(rename = "_time", default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(
        rename = "_indextime",
        default,
        deserialize_with = "opt_string_from_number_or_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub index_time: Option<String>,
    #[serde(
        rename = "_serial",
        default,
        deserialize_with = "opt_string_from_number_or_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub serial: Option<String>,
    #[serde(rename = "_confstr", default, skip_serializing_if = "Option::is_none")]
    pub conf_str: Option<String>,
    #[serde(rename = "_sourcetype", default, skip_serializing_if = "Option::is_none")]
    pub source_type_raw: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
    #[serde(
        rename = "linecount",
        default,
        deserialize_with = "opt_string_from_number_or_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub line_count: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(rename = "sourcetype", default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub splunk_server: Option<String>,
    /// Every other field on the record.
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
}
