//! Session user and the provider seam
//!
//! The helper never reaches into ambient request state. Whatever owns the
//! session hands it a [`UserProvider`], which is asked for the current user on
//! every check.

use super::role::GrantedRoleSet;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Role claim as stored in the session
///
/// Sessions written by other stacks keep the roles as a JSON-encoded string;
/// native ones may keep a list directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoleClaim {
    /// Serialized list, decoded on every check (e.g. `"[\"ADMIN\"]"`)
    Encoded(String),
    /// Already-decoded list
    List(Vec<String>),
}

impl RoleClaim {
    /// Decode the claim into a granted role set
    ///
    /// # Errors
    ///
    /// Returns `InvalidRoleClaim` if an encoded claim is not a JSON array of strings.
    pub fn decode(&self) -> Result<GrantedRoleSet> {
        match self {
            RoleClaim::Encoded(raw) => GrantedRoleSet::from_claim(raw),
            RoleClaim::List(names) => Ok(names.iter().collect()),
        }
    }
}

/// Authenticated user as stored in the session
///
/// Only `roles` is interpreted; every other field is carried through as-is
/// for callers that want general user info.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Role claim, absent if the user record carries none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<RoleClaim>,

    /// Remaining user fields (id, username, email, ...)
    #[serde(flatten)]
    pub info: HashMap<String, serde_json::Value>,
}

impl SessionUser {
    /// User with an encoded role claim
    pub fn with_encoded_roles(claim: impl Into<String>) -> Self {
        SessionUser {
            roles: Some(RoleClaim::Encoded(claim.into())),
            info: HashMap::new(),
        }
    }

    /// User with a role list
    pub fn with_roles<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SessionUser {
            roles: Some(RoleClaim::List(roles.into_iter().map(Into::into).collect())),
            info: HashMap::new(),
        }
    }

    /// Parse a user record from session JSON
    ///
    /// # Examples
    ///
    /// ```
    /// use hierauth::SessionUser;
    ///
    /// let user = SessionUser::from_json(
    ///     r#"{"id": 7, "username": "ada", "roles": "[\"ADMIN\"]"}"#,
    /// ).unwrap();
    /// assert_eq!(user.info["username"], "ada");
    /// assert!(user.granted_roles().unwrap().unwrap().contains("admin"));
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Add a general info field
    pub fn with_info(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.info.insert(key.into(), value.into());
        self
    }

    /// Decode the role claim
    ///
    /// `Ok(None)` when the record has no role claim at all.
    pub fn granted_roles(&self) -> Result<Option<GrantedRoleSet>> {
        self.roles.as_ref().map(RoleClaim::decode).transpose()
    }
}

/// Supplies the current authenticated user, if any
pub trait UserProvider {
    /// Current user, `None` when nobody is signed in
    fn current_user(&self) -> Option<SessionUser>;
}

impl<F> UserProvider for F
where
    F: Fn() -> Option<SessionUser>,
{
    fn current_user(&self) -> Option<SessionUser> {
        self()
    }
}

impl UserProvider for Option<SessionUser> {
    fn current_user(&self) -> Option<SessionUser> {
        self.clone()
    }
}

/// Provider that always returns the same user (or nobody)
#[derive(Debug, Clone, Default)]
pub struct StaticUserProvider {
    user: Option<SessionUser>,
}

impl StaticUserProvider {
    /// Provider for a fixed signed-in user
    pub fn new(user: SessionUser) -> Self {
        StaticUserProvider { user: Some(user) }
    }

    /// Provider with nobody signed in
    pub fn anonymous() -> Self {
        StaticUserProvider { user: None }
    }
}

impl UserProvider for StaticUserProvider {
    fn current_user(&self) -> Option<SessionUser> {
        self.user.clone()
    }
}
