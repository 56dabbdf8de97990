//! Record classification shared by the model, the schema layer and logging
//!
//! Both enums parse from the lowercase spellings used on the command line and
//! in serialized records.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four kinds of line a sudoers file is made of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// `Defaults` statement, optionally scoped
    Default,
    /// `Cmnd_Alias`, `Host_Alias`, `User_Alias` or `Runas_Alias` definition
    Alias,
    /// User specification rule (`users hosts=commands`)
    UserSpec,
    /// Comment line
    Comment,
}

impl RecordKind {
    /// Stable lowercase name, as accepted by `from_str`
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Default => "default",
            RecordKind::Alias => "alias",
            RecordKind::UserSpec => "user_spec",
            RecordKind::Comment => "comment",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A string that did not name any known variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownValue {
    pub what: &'static str,
    pub value: String,
}

impl fmt::Display for UnknownValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unexpected sudoers {} {}", self.what, self.value)
    }
}

impl std::error::Error for UnknownValue {}

impl FromStr for RecordKind {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(RecordKind::Default),
            "alias" => Ok(RecordKind::Alias),
            "user_spec" => Ok(RecordKind::UserSpec),
            "comment" => Ok(RecordKind::Comment),
            other => Err(UnknownValue {
                what: "type",
                value: other.to_string(),
            }),
        }
    }
}

/// Whether a record should exist in its target file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ensure {
    #[default]
    Present,
    Absent,
}

impl Ensure {
    pub fn as_str(&self) -> &'static str {
        match self {
            Ensure::Present => "present",
            Ensure::Absent => "absent",
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Ensure::Present)
    }
}

impl fmt::Display for Ensure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Ensure {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "present" => Ok(Ensure::Present),
            "absent" => Ok(Ensure::Absent),
            other => Err(UnknownValue {
                what: "ensure value",
                value: other.to_string(),
            }),
        }
    }
}
