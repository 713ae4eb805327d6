//! Role intersection check
//!
//! Pure function over a granted set and a requested list: count how many
//! distinct requested roles are granted and compare against the minimum.
//! An absent principal (`None`) is always a deny.

use super::predicate::RolePredicate;
use super::role::{GrantedRoleSet, Role};
use std::collections::HashSet;

/// Stateless role checker
pub struct RoleChecker;

impl RoleChecker {
    /// Decide access for an explicit role list and minimum match count
    ///
    /// # Arguments
    ///
    /// * `granted` - Roles held by the principal, `None` if there is no principal
    /// * `requested` - Roles the check asks about
    /// * `min_match` - How many distinct requested roles must be granted
    ///
    /// # Examples
    ///
    /// ```
    /// use hierauth::{GrantedRoleSet, Role, RoleChecker};
    ///
    /// let granted: GrantedRoleSet = ["admin"].into_iter().collect();
    /// let requested = [Role::new("ADMIN"), Role::new("MANAGER")];
    ///
    /// assert!(RoleChecker::evaluate(Some(&granted), &requested, 1));
    /// assert!(!RoleChecker::evaluate(Some(&granted), &requested, 2));
    /// assert!(!RoleChecker::evaluate(None, &requested, 1));
    /// ```
    pub fn evaluate(granted: Option<&GrantedRoleSet>, requested: &[Role], min_match: usize) -> bool {
        let Some(granted) = granted else {
            return false;
        };

        Self::matched(granted, requested) >= min_match
    }

    /// Decide access for a predicate
    pub fn evaluate_predicate(granted: Option<&GrantedRoleSet>, predicate: &RolePredicate) -> bool {
        Self::evaluate(granted, predicate.roles(), predicate.min_match())
    }

    /// Intersection cardinality of granted and requested roles
    pub fn matched(granted: &GrantedRoleSet, requested: &[Role]) -> usize {
        requested
            .iter()
            .collect::<HashSet<_>>()
            .into_iter()
            .filter(|role| granted.contains_role(role))
            .count()
    }
}
