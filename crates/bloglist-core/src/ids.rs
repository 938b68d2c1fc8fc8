//! Identifier newtypes.
//!
//! Ids are UUIDs on the inside; their canonical string form is the
//! lowercase hyphenated rendering. Any representation `uuid` understands
//! is accepted on the way in.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Canonical string form of a raw identifier.
///
/// Strings that parse as UUIDs are normalised; anything else is returned
/// verbatim so it can still be compared.
pub fn canonical_id(raw: &str) -> String {
    let trimmed = raw.trim();
    match Uuid::parse_str(trimmed) {
        Ok(uuid) => uuid.to_string(),
        Err(_) => trimmed.to_string(),
    }
}

macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Fresh random id.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Parse from any accepted representation.
            pub fn parse(raw: &str) -> Result<Self, CoreError> {
                Uuid::parse_str(raw.trim())
                    .map(Self)
                    .map_err(|_| CoreError::InvalidReference(raw.to_string()))
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

uuid_id!(
    /// Identifier of a stored blog.
    BlogId
);

uuid_id!(
    /// Identifier of a registered user.
    UserId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_other_representations() {
        let id = BlogId::new();
        let simple = id.as_uuid().simple().to_string();
        let braced = id.as_uuid().braced().to_string();
        let upper = id.to_string().to_uppercase();

        assert_eq!(BlogId::parse(&simple).unwrap(), id);
        assert_eq!(BlogId::parse(&braced).unwrap(), id);
        assert_eq!(BlogId::parse(&upper).unwrap(), id);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = BlogId::parse("invalid_id").unwrap_err();
        assert_eq!(err, CoreError::InvalidReference("invalid_id".to_string()));
        assert!(UserId::parse("").is_err());
    }

    #[test]
    fn test_canonical_id() {
        let id = UserId::new();
        let upper = id.to_string().to_uppercase();
        assert_eq!(canonical_id(&upper), id.to_string());
        assert_eq!(canonical_id(" root "), "root");
    }

    #[test]
    fn test_serde_is_transparent() {
        let id = UserId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
        let back: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
