use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::SudoersError;

/// Alias keyword of an alias definition
///
/// Serialized and displayed as the canonical `*_Alias` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AliasKind {
    #[serde(rename = "Cmnd_Alias")]
    Cmnd,
    #[serde(rename = "Host_Alias")]
    Host,
    #[serde(rename = "User_Alias")]
    User,
    #[serde(rename = "Runas_Alias")]
    Runas,
}

impl AliasKind {
    pub const ALL: [AliasKind; 4] = [
        AliasKind::Cmnd,
        AliasKind::Host,
        AliasKind::User,
        AliasKind::Runas,
    ];

    /// The keyword as written in a sudoers file
    pub fn as_str(&self) -> &'static str {
        match self {
            AliasKind::Cmnd => "Cmnd_Alias",
            AliasKind::Host => "Host_Alias",
            AliasKind::User => "User_Alias",
            AliasKind::Runas => "Runas_Alias",
        }
    }

    /// Recognize the exact keyword only (`Cmnd_Alias`, not `Cmnd`)
    pub fn from_keyword(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == word)
    }
}

impl fmt::Display for AliasKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonicalizes `Cmnd`/`Cmnd_Alias` (and the other three) to one value
impl FromStr for AliasKind {
    type Err = SudoersError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let base = s.strip_suffix("_Alias").unwrap_or(s);
        match base {
            "Cmnd" => Ok(AliasKind::Cmnd),
            "Host" => Ok(AliasKind::Host),
            "User" => Ok(AliasKind::User),
            "Runas" => Ok(AliasKind::Runas),
            _ => Err(SudoersError::UnknownAliasKind {
                value: s.to_string(),
            }),
        }
    }
}
