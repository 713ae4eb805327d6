//! Case normalization for predicate names
//!
//! Turns camelCase / PascalCase call names into snake_case so a single
//! grammar can match them. ASCII rules only:
//! - `-` becomes `_`
//! - an upper-case letter preceded by a word character (`[A-Za-z0-9_]`) gets
//!   an `_` in front of it
//! - the result is lower-cased
//!
//! Runs of capitals split per letter (`SAAS` -> `s_a_a_s`).

/// Convert a call name to its underscored form
///
/// # Examples
///
/// ```
/// use hierauth::core::inflect::underscore;
///
/// assert_eq!(underscore("userHasRoleAdmin"), "user_has_role_admin");
/// assert_eq!(underscore("UserHasRoleAdminOrManager"), "user_has_role_admin_or_manager");
/// ```
pub fn underscore(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 8);
    let mut prev: Option<char> = None;

    for c in name.chars() {
        let c = if c == '-' { '_' } else { c };
        if c.is_ascii_uppercase() && prev.is_some_and(is_word_char) {
            out.push('_');
        }
        out.push(c);
        prev = Some(c);
    }

    out.to_lowercase()
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case() {
        assert_eq!(underscore("userHasRoleAdmin"), "user_has_role_admin");
        assert_eq!(
            underscore("userHasRoleAdminAndManager"),
            "user_has_role_admin_and_manager"
        );
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(underscore("UserHasRoleEditor"), "user_has_role_editor");
    }

    #[test]
    fn test_already_snake() {
        assert_eq!(underscore("user_has_role_admin"), "user_has_role_admin");
    }

    #[test]
    fn test_hyphens() {
        assert_eq!(underscore("user-has-role-admin"), "user_has_role_admin");
    }

    #[test]
    fn test_capital_runs_split() {
        assert_eq!(underscore("userHasRoleSAAS"), "user_has_role_s_a_a_s");
    }

    #[test]
    fn test_capital_after_underscore() {
        // Underscore counts as a word character
        assert_eq!(underscore("user_Has"), "user__has");
    }

    #[test]
    fn test_digits() {
        assert_eq!(underscore("userHasRoleLevel2Admin"), "user_has_role_level2_admin");
    }

    #[test]
    fn test_empty() {
        assert_eq!(underscore(""), "");
    }
}
