//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// Only braced references are expanded. A bare `$` (as in `$VAR` or a
/// literal dollar sign in a URL) is copied through unchanged, as is an
/// unterminated `${`.
///
/// `field` names the configuration key for error messages.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    // Fast path: no expansion needed
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let mut expanded = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let end = start + len + 1;
        expanded.push_str(&rest[..start]);
        expanded.push_str(&expand_reference(&rest[start..end], field)?);
        rest = &rest[end..];
    }
    expanded.push_str(rest);

    Ok(expanded)
}

/// Expand a single `${...}` reference.
fn expand_reference(reference: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env(reference)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.var_name),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_literal_unchanged() {
        assert_eq!(
            expand_env("https://github.com/example", "site").unwrap(),
            "https://github.com/example"
        );
    }

    #[test]
    fn test_expand_set_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("FOLIO_EXPAND_TEST_HOST", "docs.example.com");
        }

        let expanded = expand_env("https://${FOLIO_EXPAND_TEST_HOST}/", "site").unwrap();

        assert_eq!(expanded, "https://docs.example.com/");

        unsafe {
            std::env::remove_var("FOLIO_EXPAND_TEST_HOST");
        }
    }

    #[test]
    fn test_expand_default_value() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("FOLIO_EXPAND_TEST_BASE");
        }

        let expanded = expand_env("${FOLIO_EXPAND_TEST_BASE:-/docs}", "base").unwrap();

        assert_eq!(expanded, "/docs");
    }

    #[test]
    fn test_expand_missing_var_names_field() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("FOLIO_EXPAND_TEST_MISSING");
        }

        let err = expand_env("${FOLIO_EXPAND_TEST_MISSING}", "social[0].url").unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("FOLIO_EXPAND_TEST_MISSING"), "got: {msg}");
        assert!(msg.contains("social[0].url"), "got: {msg}");
    }

    #[test]
    fn test_expand_keeps_bare_dollar() {
        assert_eq!(
            expand_env("https://example.com/price$usd", "social[0].url").unwrap(),
            "https://example.com/price$usd"
        );
    }

    #[test]
    fn test_expand_braced_next_to_bare_dollar() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("FOLIO_EXPAND_TEST_SHOP", "shop.example.com");
        }

        let expanded = expand_env("https://${FOLIO_EXPAND_TEST_SHOP}/price$usd", "site").unwrap();

        assert_eq!(expanded, "https://shop.example.com/price$usd");

        unsafe {
            std::env::remove_var("FOLIO_EXPAND_TEST_SHOP");
        }
    }

    #[test]
    fn test_expand_unterminated_reference_unchanged() {
        assert_eq!(
            expand_env("https://example.com/${oops", "site").unwrap(),
            "https://example.com/${oops"
        );
    }
}
