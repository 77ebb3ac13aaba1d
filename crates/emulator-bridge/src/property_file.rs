//! Property File
//!
//! Parses flat `key=value` files such as `build.prop` and `config.ini`.
//! Each line is split on its first `=`; lines without one are ignored,
//! and a repeated key takes the value of its last occurrence. There is no
//! comment, quoting or escape syntax.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::file_data::FileData;

/// Outcome of a typed property lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchResult {
    /// Key present and value valid
    Found,
    /// Key absent
    NotFound,
    /// Key present but the value could not be used
    Invalid,
}

impl SearchResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchResult::Found => "found",
            SearchResult::NotFound => "not-found",
            SearchResult::Invalid => "invalid",
        }
    }
}

/// Integer lookup result: the value to use and how it was obtained.
///
/// `value` is the caller's default unless `result` is `Found`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntField {
    pub value: i32,
    pub result: SearchResult,
}

/// Parsed property file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyFile {
    entries: IndexMap<String, String>,
}

impl PropertyFile {
    /// Parse raw bytes. Invalid UTF-8 is replaced, never rejected.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut entries = IndexMap::new();

        for line in data.split(|&b| b == b'\n') {
            let line = line.strip_suffix(b"\r").unwrap_or(line);

            let Some(eq) = line.iter().position(|&b| b == b'=') else {
                continue;
            };
            let (key, value) = (&line[..eq], &line[eq + 1..]);
            if key.is_empty() {
                continue;
            }

            entries.insert(
                String::from_utf8_lossy(key).into_owned(),
                String::from_utf8_lossy(value).into_owned(),
            );
        }

        debug!("Parsed {} properties", entries.len());
        Self { entries }
    }

    /// Parse property text
    pub fn parse_str(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }

    pub fn from_file_data(data: &FileData) -> Self {
        Self::from_bytes(data.as_bytes())
    }

    /// Raw value of `key`; an empty value is `Some("")`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Read `key` as a signed 32-bit decimal integer.
    ///
    /// The whole value must parse; empty, non-numeric and out-of-range
    /// values are `Invalid` and yield `default`.
    pub fn get_int(&self, key: &str, default: i32) -> IntField {
        let Some(raw) = self.get(key) else {
            return IntField { value: default, result: SearchResult::NotFound };
        };

        match raw.parse::<i64>().map(i32::try_from) {
            Ok(Ok(value)) => IntField { value, result: SearchResult::Found },
            Ok(Err(_)) => {
                debug!("Property {} out of int32 range: {:?}", key, raw);
                IntField { value: default, result: SearchResult::Invalid }
            }
            Err(_) => {
                debug!("Property {} is not an integer: {:?}", key, raw);
                IntField { value: default, result: SearchResult::Invalid }
            }
        }
    }

    /// Like [`get_int`](Self::get_int) without the status
    pub fn get_int_or(&self, key: &str, default: i32) -> i32 {
        self.get_int(key, default).value
    }

    /// Entries in order of first appearance
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<&FileData> for PropertyFile {
    fn from(data: &FileData) -> Self {
        Self::from_file_data(data)
    }
}
