//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// Strings without a `$` are returned unchanged. `field` names the config
/// key in error messages.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains('$') {
        return Ok(value.to_owned());
    }
    shellexpand::env(value)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.var_name),
        })
}

/// Like [`expand_env`], but an unset variable without a default yields an
/// empty string.
///
/// Used for secrets that only some commands need; absence is reported
/// later by the command that requires them.
pub(crate) fn expand_env_lenient(value: &str) -> String {
    expand_env(value, "").unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_string_unchanged() {
        assert_eq!(expand_env("127.0.0.1", "server.host").unwrap(), "127.0.0.1");
    }

    #[test]
    fn test_default_value_used_when_unset() {
        let value = expand_env("${LP_TEST_SURELY_UNSET_A:-fallback}", "genai.model").unwrap();
        assert_eq!(value, "fallback");
    }

    #[test]
    fn test_missing_var_reports_field() {
        let err = expand_env("${LP_TEST_SURELY_UNSET_B}", "github.api_url").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("github.api_url"), "{message}");
        assert!(message.contains("LP_TEST_SURELY_UNSET_B"), "{message}");
    }

    #[test]
    fn test_lenient_expansion_yields_empty() {
        assert_eq!(expand_env_lenient("${LP_TEST_SURELY_UNSET_C}"), "");
        assert_eq!(expand_env_lenient("literal-key"), "literal-key");
    }

    #[test]
    fn test_lenient_expansion_honours_default() {
        assert_eq!(
            expand_env_lenient("${LP_TEST_SURELY_UNSET_D:-fallback}"),
            "fallback"
        );
    }
}
