//! Role predicates and the predicate-name grammar
//!
//! A predicate is an ordered list of requested roles plus the minimum number
//! of them the principal must hold. Predicates are built directly, or decoded
//! from a symbolic call name such as `userHasRoleAdminOrManager`.
//!
//! Name grammar (after [`underscore`](super::inflect::underscore)):
//!
//! ```text
//! <prefix>_<PAYLOAD>        prefix defaults to "user_has_role"
//! PAYLOAD := ROLE                      -> ANY, min 1
//!          | ROLE _OR_ ROLE ...        -> ANY, min 1
//!          | ROLE _AND_ ROLE ...       -> ALL
//! ```
//!
//! `_OR_` is checked before `_AND_`, so a payload containing both splits on
//! `_OR_` only.

use super::inflect::underscore;
use super::role::Role;
use crate::error::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Default name prefix (`userHasRole...`)
pub const DEFAULT_PREFIX: &str = "user_has_role";

const OR_SEPARATOR: &str = "_OR_";
const AND_SEPARATOR: &str = "_AND_";

/// How many of the requested roles must be granted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchPolicy {
    /// At least one requested role
    Any,
    /// Several requested roles (see [`AllMatchMode`])
    All,
}

/// Required match count for the ALL policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AllMatchMode {
    /// Fixed at two, however many roles were requested
    #[default]
    Pair,
    /// Every distinct requested role
    Every,
}

/// A role check: requested roles plus a minimum match count
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RolePredicate {
    roles: Vec<Role>,
    policy: MatchPolicy,
    min_match: usize,
}

impl RolePredicate {
    /// Pass if any requested role is granted
    pub fn any<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        RolePredicate {
            roles: roles.into_iter().map(Role::new).collect(),
            policy: MatchPolicy::Any,
            min_match: 1,
        }
    }

    /// Pass if the requested roles are granted, counted per `mode`
    ///
    /// # Examples
    ///
    /// ```
    /// use hierauth::{AllMatchMode, RolePredicate};
    ///
    /// let pair = RolePredicate::all(["A", "B", "C"], AllMatchMode::Pair);
    /// assert_eq!(pair.min_match(), 2);
    ///
    /// let every = RolePredicate::all(["A", "B", "C"], AllMatchMode::Every);
    /// assert_eq!(every.min_match(), 3);
    /// ```
    pub fn all<I, S>(roles: I, mode: AllMatchMode) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let roles: Vec<Role> = roles.into_iter().map(Role::new).collect();
        let min_match = match mode {
            AllMatchMode::Pair => 2,
            AllMatchMode::Every => roles.iter().collect::<HashSet<_>>().len(),
        };
        RolePredicate {
            roles,
            policy: MatchPolicy::All,
            min_match,
        }
    }

    /// Explicit role list and minimum count
    pub fn with_min_match<I, S>(roles: I, min_match: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let policy = if min_match <= 1 {
            MatchPolicy::Any
        } else {
            MatchPolicy::All
        };
        RolePredicate {
            roles: roles.into_iter().map(Role::new).collect(),
            policy,
            min_match,
        }
    }

    /// Requested roles in the order they were given
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// Match policy
    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Minimum number of requested roles that must be granted
    pub fn min_match(&self) -> usize {
        self.min_match
    }
}

/// Decodes symbolic call names into [`RolePredicate`]s
#[derive(Debug, Clone)]
pub struct PredicateNameParser {
    pattern: Regex,
    all_match: AllMatchMode,
}

impl PredicateNameParser {
    /// Create a parser for names starting with `prefix` (snake_case)
    ///
    /// # Errors
    ///
    /// Returns `Pattern` if the grammar cannot be compiled.
    pub fn new(prefix: &str, all_match: AllMatchMode) -> Result<Self> {
        let pattern = Regex::new(&format!(r"^{}_((?-u:\w)+)$", regex::escape(prefix)))?;
        Ok(PredicateNameParser { pattern, all_match })
    }

    /// Parser for the default `userHasRole...` grammar
    pub fn standard() -> Result<Self> {
        Self::new(DEFAULT_PREFIX, AllMatchMode::default())
    }

    /// Parse a call name
    ///
    /// Returns `None` if the name is not part of the grammar.
    ///
    /// # Examples
    ///
    /// ```
    /// use hierauth::{MatchPolicy, PredicateNameParser};
    ///
    /// let parser = PredicateNameParser::standard().unwrap();
    ///
    /// let pred = parser.parse("userHasRoleAdminOrManager").unwrap();
    /// assert_eq!(pred.policy(), MatchPolicy::Any);
    /// assert_eq!(pred.roles().len(), 2);
    ///
    /// assert!(parser.parse("doSomethingElse").is_none());
    /// ```
    pub fn parse(&self, name: &str) -> Option<RolePredicate> {
        let snake = underscore(name);
        let captures = self.pattern.captures(&snake)?;
        let payload = captures.get(1)?.as_str().to_ascii_uppercase();

        let predicate = if payload.contains(OR_SEPARATOR) {
            RolePredicate::any(payload.split(OR_SEPARATOR))
        } else if payload.contains(AND_SEPARATOR) {
            RolePredicate::all(payload.split(AND_SEPARATOR), self.all_match)
        } else {
            RolePredicate::any([payload.as_str()])
        };

        Some(predicate)
    }

    /// ALL-policy mode this parser applies
    pub fn all_match(&self) -> AllMatchMode {
        self.all_match
    }
}
