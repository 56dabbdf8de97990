use serde::{Deserialize, Serialize};
use sudoers_core_types::{Ensure, RecordKind};

use super::alias::AliasKind;

/// Prefix of the names the resolver invents for unnamed user specs
pub const SYNTHETIC_NAME_PREFIX: &str = "fake_namevar_";

/// Record - one logical line of a sudoers file
///
/// The kind-specific fields live in [`RecordBody`], so a record can only ever
/// carry the field group that matches its kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Identifier; meaning depends on the kind
    ///
    /// Defaults: the scope prefix as written. Alias: the alias name.
    /// UserSpec: assigned by the resolver. Comment: empty.
    pub name: String,

    /// Free comment text
    pub comment: String,

    /// Owning file, stamped by whoever loaded the record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    /// Absent records are dropped on serialization
    #[serde(default)]
    pub ensure: Ensure,

    #[serde(flatten)]
    pub body: RecordBody,
}

/// Kind-specific field group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RecordBody {
    Default {
        parameters: Vec<String>,
    },
    Alias {
        alias_kind: AliasKind,
        items: Vec<String>,
    },
    UserSpec {
        users: Vec<String>,
        hosts: Vec<String>,
        commands: Vec<String>,
    },
    Comment {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        declared_name: Option<String>,
    },
}

impl Record {
    fn with_body(name: String, body: RecordBody) -> Self {
        Self {
            name,
            comment: String::new(),
            target: None,
            ensure: Ensure::Present,
            body,
        }
    }

    /// Create a Defaults record; `scope` is the prefix, e.g. `Defaults@host`
    pub fn defaults(scope: impl Into<String>, parameters: Vec<String>) -> Self {
        Self::with_body(scope.into(), RecordBody::Default { parameters })
    }

    pub fn alias(alias_kind: AliasKind, name: impl Into<String>, items: Vec<String>) -> Self {
        Self::with_body(name.into(), RecordBody::Alias { alias_kind, items })
    }

    /// Create a user spec; the name is empty until resolved or set
    pub fn user_spec(users: Vec<String>, hosts: Vec<String>, commands: Vec<String>) -> Self {
        Self::with_body(
            String::new(),
            RecordBody::UserSpec {
                users,
                hosts,
                commands,
            },
        )
    }

    /// Create a plain comment; `text` is everything after the `#`
    pub fn comment(text: impl Into<String>) -> Self {
        let mut record = Self::with_body(
            String::new(),
            RecordBody::Comment {
                declared_name: None,
            },
        );
        record.comment = text.into();
        record
    }

    /// Create a marker comment declaring the name of the next user spec
    pub fn marker(declared_name: impl Into<String>) -> Self {
        Self::with_body(
            String::new(),
            RecordBody::Comment {
                declared_name: Some(declared_name.into()),
            },
        )
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_ensure(mut self, ensure: Ensure) -> Self {
        self.ensure = ensure;
        self
    }

    pub fn kind(&self) -> RecordKind {
        match self.body {
            RecordBody::Default { .. } => RecordKind::Default,
            RecordBody::Alias { .. } => RecordKind::Alias,
            RecordBody::UserSpec { .. } => RecordKind::UserSpec,
            RecordBody::Comment { .. } => RecordKind::Comment,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn comment_text(&self) -> &str {
        &self.comment
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn ensure(&self) -> Ensure {
        self.ensure
    }

    pub fn is_present(&self) -> bool {
        self.ensure.is_present()
    }

    pub fn parameters(&self) -> Option<&[String]> {
        match &self.body {
            RecordBody::Default { parameters } => Some(parameters),
            _ => None,
        }
    }

    pub fn alias_kind(&self) -> Option<AliasKind> {
        match &self.body {
            RecordBody::Alias { alias_kind, .. } => Some(*alias_kind),
            _ => None,
        }
    }

    pub fn items(&self) -> Option<&[String]> {
        match &self.body {
            RecordBody::Alias { items, .. } => Some(items),
            _ => None,
        }
    }

    pub fn users(&self) -> Option<&[String]> {
        match &self.body {
            RecordBody::UserSpec { users, .. } => Some(users),
            _ => None,
        }
    }

    pub fn hosts(&self) -> Option<&[String]> {
        match &self.body {
            RecordBody::UserSpec { hosts, .. } => Some(hosts),
            _ => None,
        }
    }

    pub fn commands(&self) -> Option<&[String]> {
        match &self.body {
            RecordBody::UserSpec { commands, .. } => Some(commands),
            _ => None,
        }
    }

    /// Name carried by a marker comment, if this is one
    pub fn declared_name(&self) -> Option<&str> {
        match &self.body {
            RecordBody::Comment { declared_name } => declared_name.as_deref(),
            _ => None,
        }
    }

    /// Check if the name was invented by the resolver
    pub fn has_synthetic_name(&self) -> bool {
        is_synthetic_name(&self.name)
    }
}

/// `fake_namevar_<digits>`
pub fn is_synthetic_name(name: &str) -> bool {
    name.strip_prefix(SYNTHETIC_NAME_PREFIX)
        .map(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
        .unwrap_or(false)
}
