use super::ValidationError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

lazy_static! {
    /// URL-safe slug: starts with an alphanumeric, then alphanumerics and `-_.~`.
    static ref UID_PATTERN: Regex =
        Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._~-]*$").expect("uid pattern is valid");

    /// Custom type API ids are lower snake/kebab case in practice; we only
    /// reject characters that would break a query predicate.
    static ref DOCUMENT_TYPE_PATTERN: Regex =
        Regex::new(r"^[A-Za-z0-9_-]+$").expect("document type pattern is valid");
}

/// A post's user-facing identifier (the slug in `/post/<uid>`).
///
/// Validated on construction because it ends up in filesystem paths and in
/// query predicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PostUid(String);

impl PostUid {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::InvalidUid {
                uid: input.to_string(),
                reason: "uid cannot be empty".to_string(),
            });
        }

        if !UID_PATTERN.is_match(trimmed) {
            return Err(ValidationError::InvalidUid {
                uid: input.to_string(),
                reason: "uid may only contain letters, digits and -_.~".to_string(),
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PostUid {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PostUid> for String {
    fn from(uid: PostUid) -> Self {
        uid.0
    }
}

impl fmt::Display for PostUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The custom type whose documents make up the blog (`publication` by default).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentType(String);

impl DocumentType {
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if !DOCUMENT_TYPE_PATTERN.is_match(&name) {
            return Err(ValidationError::InvalidDocumentType(name));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Predicate matching every document of this type.
    pub fn type_predicate(&self) -> String {
        format!("[[at(document.type,\"{}\")]]", self.0)
    }

    /// Predicate matching the single document of this type with `uid`.
    pub fn uid_predicate(&self, uid: &PostUid) -> String {
        format!("[[at(my.{}.uid,\"{}\")]]", self.0, uid.as_str())
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
