//! Ownership guard for mutating blog operations.
//!
//! Existence is decided before ownership: a missing record is always
//! `NotFound`, never a denial. A record with no owner can't be mutated
//! by anyone.

use crate::error::CoreError;
use crate::ids::canonical_id;
use crate::models::BlogRecord;

/// Why a caller was refused. Both reasons answer with the same
/// [`CoreError::Authorization`] message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// The blog has no recorded owner.
    NoOwner,
    /// The caller is absent or is someone else.
    NotCreator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(DenyReason),
    NotFound,
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }

    pub fn into_result(self) -> Result<(), CoreError> {
        match self {
            Decision::Allow => Ok(()),
            Decision::Deny(_) => Err(CoreError::Authorization),
            Decision::NotFound => Err(CoreError::blog_not_found()),
        }
    }
}

/// Decide whether `caller` may mutate `blog`.
///
/// Ids are compared by canonical string form, so a caller id in another
/// UUID representation still matches its owner.
pub fn authorize(caller: Option<&str>, blog: Option<&BlogRecord>) -> Decision {
    let Some(blog) = blog else {
        return Decision::NotFound;
    };

    let Some(owner) = blog.owner else {
        return Decision::Deny(DenyReason::NoOwner);
    };

    match caller {
        Some(caller) if canonical_id(caller) == owner.to_string() => Decision::Allow,
        _ => Decision::Deny(DenyReason::NotCreator),
    }
}

/// [`authorize`] as a `Result`, handing back the record on success.
pub fn ensure_owner<'a>(
    caller: Option<&str>,
    blog: Option<&'a BlogRecord>,
) -> Result<&'a BlogRecord, CoreError> {
    authorize(caller, blog).into_result()?;
    blog.ok_or_else(CoreError::blog_not_found)
}
