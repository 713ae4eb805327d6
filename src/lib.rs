//! # hierauth - Role checks for view code
//!
//! `hierauth` answers "does the current user hold role X" for templates and
//! handlers, either through an explicit role list or through symbolic
//! predicate names:
//!
//! - **Explicit checks**: `has_role(&["ADMIN", "MANAGER"], 1)`
//! - **Predicate names**: `check("userHasRoleAdminOrManager")`, decoded on
//!   the fly, no per-role method needed
//! - **Fail closed**: no user, a malformed role claim or an unknown predicate
//!   name all evaluate to `false`
//!
//! ## Quick Start
//!
//! ```rust
//! use hierauth::{AuthHelper, SessionUser, StaticUserProvider};
//!
//! # fn main() -> hierauth::Result<()> {
//! let user = SessionUser::with_encoded_roles(r#"["MANAGER"]"#);
//! let auth = AuthHelper::new(StaticUserProvider::new(user))?;
//!
//! assert!(auth.check("userHasRoleAdminOrManager"));
//! assert!(!auth.check("userHasRoleAdminAndManager"));
//! assert!(!auth.check("doSomethingElse"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom Configuration
//!
//! ```rust
//! use hierauth::{AllMatchMode, AuthHelperBuilder, SessionUser};
//!
//! # fn main() -> hierauth::Result<()> {
//! let auth = AuthHelperBuilder::new()
//!     .provider(|| Some(SessionUser::with_roles(["A", "B"])))
//!     .all_match(AllMatchMode::Every)
//!     .cache_capacity(64)
//!     .build()?;
//!
//! assert!(!auth.check("userHasRoleAAndBAndC"));
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod error;

pub use crate::core::{
    cache::PredicateCache,
    checker::RoleChecker,
    config::HelperConfig,
    predicate::{AllMatchMode, MatchPolicy, PredicateNameParser, RolePredicate},
    role::{GrantedRoleSet, Role},
    session::{RoleClaim, SessionUser, StaticUserProvider, UserProvider},
};
pub use crate::error::{HierAuthError, Result};

use parking_lot::Mutex;
use tracing::{debug, info, trace};

/// Role-check helper bound to a user provider
///
/// Every check asks the provider for the current user and decodes its role
/// claim afresh. Only the parse of predicate names is cached.
///
/// # Examples
///
/// ```rust
/// use hierauth::{AuthHelper, SessionUser, StaticUserProvider};
///
/// # fn main() -> hierauth::Result<()> {
/// let auth = AuthHelper::new(StaticUserProvider::new(
///     SessionUser::with_roles(["ADMIN", "MANAGER"]),
/// ))?;
///
/// assert!(auth.has_role(&["admin"], 1));
/// assert!(auth.has_role(&["ADMIN", "MANAGER", "EDITOR"], 2));
/// assert!(auth.check("userHasRoleAdminAndManager"));
/// # Ok(())
/// # }
/// ```
pub struct AuthHelper<P> {
    provider: P,
    parser: PredicateNameParser,
    cache: Mutex<PredicateCache>,
}

impl<P: UserProvider> AuthHelper<P> {
    /// Create a helper with the default configuration
    pub fn new(provider: P) -> Result<Self> {
        Self::with_config(provider, HelperConfig::default())
    }

    /// Create a helper with an explicit configuration
    ///
    /// # Errors
    ///
    /// Returns `Config` if the configuration does not validate.
    pub fn with_config(provider: P, config: HelperConfig) -> Result<Self> {
        config.validate()?;
        let parser = PredicateNameParser::new(&config.predicate_prefix, config.all_match)?;

        Ok(AuthHelper {
            provider,
            parser,
            cache: Mutex::new(PredicateCache::new(config.predicate_cache_capacity)),
        })
    }

    /// General info for the current user, `None` when nobody is signed in
    pub fn user(&self) -> Option<SessionUser> {
        self.provider.current_user()
    }

    /// Roles granted to the current user
    ///
    /// `None` when there is no user, the user has no role claim, or the claim
    /// fails to decode.
    pub fn granted_roles(&self) -> Option<GrantedRoleSet> {
        let user = self.provider.current_user()?;
        match user.granted_roles() {
            Ok(granted) => granted,
            Err(e) => {
                debug!("Role claim rejected, denying: {}", e);
                None
            }
        }
    }

    /// Check that at least `min_match` of the requested roles are granted
    pub fn has_role<S: AsRef<str>>(&self, requested: &[S], min_match: usize) -> bool {
        self.evaluate(&RolePredicate::with_min_match(requested, min_match))
    }

    /// Check that any of the requested roles is granted
    pub fn has_any_role<S: AsRef<str>>(&self, requested: &[S]) -> bool {
        self.has_role(requested, 1)
    }

    /// Evaluate a predicate against the current user
    pub fn evaluate(&self, predicate: &RolePredicate) -> bool {
        let granted = self.granted_roles();
        RoleChecker::evaluate_predicate(granted.as_ref(), predicate)
    }

    /// Evaluate a symbolic predicate name such as `userHasRoleAdminOrManager`
    ///
    /// Names outside the grammar evaluate to `false`.
    pub fn check(&self, name: &str) -> bool {
        match self.predicate(name) {
            Some(predicate) => self.evaluate(&predicate),
            None => false,
        }
    }

    /// Parse a predicate name, using the cache
    pub fn predicate(&self, name: &str) -> Option<RolePredicate> {
        let mut cache = self.cache.lock();
        if let Some(cached) = cache.get(name) {
            trace!("Predicate cache hit for {}", name);
            return cached;
        }

        let parsed = self.parser.parse(name);
        if parsed.is_none() {
            debug!("{} is not a role predicate", name);
        }
        cache.put(name, parsed.clone());
        parsed
    }

    /// Clear the predicate cache
    pub fn clear_cache(&self) {
        self.cache.lock().clear();
    }

    /// Number of cached predicate names
    pub fn cache_size(&self) -> usize {
        self.cache.lock().len()
    }
}

/// Builder for [`AuthHelper`]
///
/// # Examples
///
/// ```rust
/// use hierauth::{AuthHelperBuilder, HelperConfig, StaticUserProvider};
///
/// # fn main() -> hierauth::Result<()> {
/// let config = HelperConfig::from_toml("predicate_prefix = \"can_act_as\"")?;
/// let auth = AuthHelperBuilder::new()
///     .provider(StaticUserProvider::anonymous())
///     .config(config)
///     .build()?;
///
/// assert!(auth.predicate("canActAsAuditor").is_some());
/// # Ok(())
/// # }
/// ```
pub struct AuthHelperBuilder<P> {
    provider: Option<P>,
    config: HelperConfig,
}

impl<P: UserProvider> AuthHelperBuilder<P> {
    /// Create a builder with the default configuration
    pub fn new() -> Self {
        AuthHelperBuilder {
            provider: None,
            config: HelperConfig::default(),
        }
    }

    /// Set the user provider (required)
    pub fn provider(mut self, provider: P) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: HelperConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the predicate cache capacity
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.config.predicate_cache_capacity = capacity;
        self
    }

    /// Set the ALL-policy mode for `...And...` predicates
    pub fn all_match(mut self, mode: AllMatchMode) -> Self {
        self.config.all_match = mode;
        self
    }

    /// Set the predicate name prefix (snake_case)
    pub fn prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.config.predicate_prefix = prefix.into();
        self
    }

    /// Build the helper
    pub fn build(self) -> Result<AuthHelper<P>> {
        let provider = self
            .provider
            .ok_or_else(|| HierAuthError::Config("provider must be set".to_string()))?;

        info!(
            "Building auth helper (prefix '{}', all_match {:?}, cache {})",
            self.config.predicate_prefix,
            self.config.all_match,
            self.config.predicate_cache_capacity
        );

        AuthHelper::with_config(provider, self.config)
    }
}

impl<P: UserProvider> Default for AuthHelperBuilder<P> {
    fn default() -> Self {
        Self::new()
    }
}
