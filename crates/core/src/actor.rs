//! Caller identity attached to every mutating operation.

use serde::{Deserialize, Serialize};

use crate::roles::{ROLE_ADMIN, ROLE_USER};
use crate::types::DbId;

/// The authenticated identity performing an operation.
///
/// Supplied by the authentication middleware in the API crate. Anonymous
/// callers get `id: None` and the default role; attribution columns
/// (`created_by` / `updated_by` / `deleted_by`) are stamped with the id,
/// or left NULL for anonymous actors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub id: Option<DbId>,
    pub role: String,
}

impl Actor {
    /// An unauthenticated caller.
    pub fn anonymous() -> Self {
        Self {
            id: None,
            role: ROLE_USER.to_string(),
        }
    }

    /// A caller with the `admin` role.
    pub fn admin(id: DbId) -> Self {
        Self {
            id: Some(id),
            role: ROLE_ADMIN.to_string(),
        }
    }

    /// A caller with the default `user` role.
    pub fn user(id: DbId) -> Self {
        Self {
            id: Some(id),
            role: ROLE_USER.to_string(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_actor_has_no_id_and_is_not_admin() {
        let actor = Actor::anonymous();
        assert!(actor.id.is_none());
        assert!(!actor.is_admin());
    }

    #[test]
    fn admin_actor_is_admin() {
        let actor = Actor::admin(uuid::Uuid::new_v4());
        assert!(actor.is_admin());
    }
}
