//! Search job submission models.
//!
//! # What this module handles:
//! - Options forwarded with a search job submission
//! - The submit response shape
//!
//! # What this module does NOT handle:
//! - Query normalization and identifier generation (see [`crate::client`])

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Search mode for search jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    #[default]
    Normal,
    Realtime,
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SearchMode::Normal => "normal",
            SearchMode::Realtime => "realtime",
        };
        write!(f, "{}", s)
    }
}

/// Options for submitting a search job.
///
/// The named fields cover the options this client knows about; anything
/// else goes in `extra` and is sent to Splunk untouched. No values are
/// validated here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchParams {
    /// `search_mode` (normal or realtime).
    pub search_mode: Option<SearchMode>,
    /// `timeout`: seconds the job is kept after the last access.
    pub timeout: Option<u64>,
    /// `auto_cancel`: seconds of inactivity after which Splunk cancels the job.
    pub auto_cancel: Option<u64>,
    /// `earliest_time` (e.g. "rt-5m", "-24h").
    pub earliest_time: Option<String>,
    /// `latest_time` (e.g. "rt", "now").
    pub latest_time: Option<String>,
    /// Additional fields forwarded verbatim.
    pub extra: BTreeMap<String, String>,
}

impl SearchParams {
    /// Empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parameters for a real-time search.
    pub fn realtime() -> Self {
        Self {
            search_mode: Some(SearchMode::Realtime),
            ..Self::default()
        }
    }

    pub fn with_search_mode(mut self, mode: SearchMode) -> Self {
        self.search_mode = Some(mode);
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout = Some(secs);
        self
    }

    pub fn with_auto_cancel(mut self, secs: u64) -> Self {
        self.auto_cancel = Some(secs);
        self
    }

    pub fn with_earliest_time(mut self, earliest: impl Into<String>) -> Self {
        self.earliest_time = Some(earliest.into());
        self
    }

    pub fn with_latest_time(mut self, latest: impl Into<String>) -> Self {
        self.latest_time = Some(latest.into());
        self
    }

    /// Add a field that is forwarded without interpretation.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// True when these parameters request a real-time search.
    ///
    /// A `search_mode` entry in `extra` counts as well, since callers may
    /// pass every option through the open-ended map.
    pub fn is_realtime(&self) -> bool {
        self.search_mode == Some(SearchMode::Realtime)
            || self.extra.get("search_mode").map(String::as_str) == Some("realtime")
    }

    /// Form fields for these parameters, named fields first.
    pub fn to_form_fields(&self) -> Vec<(String, String)> {
        let mut fields: Vec<(String, String)> = Vec::new();
        if let Some(mode) = self.search_mode {
            fields.push(("search_mode".to_string(), mode.to_string()));
        }
        if let Some(timeout) = self.timeout {
            fields.push(("timeout".to_string(), timeout.to_string()));
        }
        if let Some(auto_cancel) = self.auto_cancel {
            fields.push(("auto_cancel".to_string(), auto_cancel.to_string()));
        }
        if let Some(earliest) = &self.earliest_time {
            fields.push(("earliest_time".to_string(), earliest.clone()));
        }
        if let Some(latest) = &self.latest_time {
            fields.push(("latest_time".to_string(), latest.clone()));
        }
        fields.extend(self.extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        fields
    }
}

/// Body of a successful job submission.
///
/// Splunk can return either `{ "sid": "<sid>" }` or
/// `{ "entry": [ { "content": { "sid": "<sid>" } } ] }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SubmitJobResponse {
    Sid { sid: String },
    Entry { entry: Vec<SubmitJobEntry> },
}

#[derive(Debug, Deserialize)]
pub struct SubmitJobEntry {
    pub content: SubmitJobContent,
}

#[derive(Debug, Deserialize)]
pub struct SubmitJobContent {
    pub sid: String,
}

impl SubmitJobResponse {
    /// The job identifier, if the response carried one.
    pub fn into_sid(self) -> Option<String> {
        match self {
            Self::Sid { sid } => Some(sid),
            Self::Entry { entry } => entry.into_iter().next().map(|e| e.content.sid),
        }
    }
}
