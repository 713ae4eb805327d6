//! Role identifiers and the granted role set
//!
//! Roles are opaque, case-insensitive identifiers. They are stored in their
//! canonical upper-case form so equality and hashing never need to care about
//! how the caller spelled them.

use crate::error::{HierAuthError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A single role identifier in canonical (upper-case) form
///
/// # Examples
///
/// ```
/// use hierauth::Role;
///
/// assert_eq!(Role::new("admin"), Role::new("ADMIN"));
/// assert_eq!(Role::new("Manager").as_str(), "MANAGER");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Role(String);

impl Role {
    /// Create a role, normalizing ASCII letters to upper case
    pub fn new(name: impl AsRef<str>) -> Self {
        Role(name.as_ref().to_ascii_uppercase())
    }

    /// Canonical identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the empty identifier, which can never be granted
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Role {
    fn from(name: String) -> Self {
        Role::new(name)
    }
}

impl From<&str> for Role {
    fn from(name: &str) -> Self {
        Role::new(name)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.0
    }
}

impl AsRef<str> for Role {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Roles currently held by the acting principal
///
/// Read-only from the checker's point of view. Empty identifiers are dropped
/// on construction so they can never satisfy a requested role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrantedRoleSet {
    roles: HashSet<Role>,
}

impl GrantedRoleSet {
    /// Create an empty set (the fail-closed set)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Decode a serialized role claim
    ///
    /// The claim must be a JSON array of strings, e.g. `["ADMIN","MANAGER"]`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRoleClaim` for invalid JSON or any other JSON shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use hierauth::GrantedRoleSet;
    ///
    /// let granted = GrantedRoleSet::from_claim(r#"["admin","manager"]"#).unwrap();
    /// assert!(granted.contains("ADMIN"));
    /// assert!(GrantedRoleSet::from_claim("not json").is_err());
    /// ```
    pub fn from_claim(raw: &str) -> Result<Self> {
        let names: Vec<String> = serde_json::from_str(raw)
            .map_err(|e| HierAuthError::InvalidRoleClaim(e.to_string()))?;
        Ok(names.into_iter().collect())
    }

    /// Check whether a role is granted (case-insensitive)
    pub fn contains(&self, role: impl AsRef<str>) -> bool {
        self.roles.contains(&Role::new(role))
    }

    /// Check membership for an already-normalized role
    pub fn contains_role(&self, role: &Role) -> bool {
        self.roles.contains(role)
    }

    /// Number of granted roles
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// True when nothing is granted
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Iterate over granted roles in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &Role> {
        self.roles.iter()
    }
}

impl<S: AsRef<str>> FromIterator<S> for GrantedRoleSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let roles = iter
            .into_iter()
            .map(Role::new)
            .filter(|role| !role.is_empty())
            .collect();
        GrantedRoleSet { roles }
    }
}
