use std::collections::HashMap;

use planfit_domain::ConfigurationError;

pub const URL: &str = "PLANFIT_REMOTE_URL";
pub const ANON_KEY: &str = "PLANFIT_REMOTE_ANON_KEY";
/// Accepted names of the privileged key, in order of precedence.
pub const SERVICE_ROLE_KEYS: [&str; 3] = [
    "PLANFIT_REMOTE_SERVICE_ROLE_KEY",
    "PLANFIT_REMOTE_SERVICE_KEY",
    "PLANFIT_REMOTE_SECRET_KEY",
];

/// Source of configuration values.
pub trait Environment {
    fn var(&self, name: &str) -> Option<String>;
}

/// Values baked into the binary at compile time.
///
/// The browser has no process environment, so the build has to provide the public
/// configuration.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuildEnvironment;

impl Environment for BuildEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        match name {
            "PLANFIT_REMOTE_URL" => option_env!("PLANFIT_REMOTE_URL"),
            "PLANFIT_REMOTE_ANON_KEY" => option_env!("PLANFIT_REMOTE_ANON_KEY"),
            _ => None,
        }
        .map(String::from)
    }
}

/// Values of the current process, used for the privileged role.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    pub url: String,
    pub key: String,
}

impl RemoteConfig {
    /// Configuration with the public key, safe to ship to the browser.
    pub fn browser(environment: &impl Environment) -> Result<Self, ConfigurationError> {
        Ok(Self {
            url: url(environment)?,
            key: value(environment, ANON_KEY).ok_or(ConfigurationError::Missing(ANON_KEY))?,
        })
    }

    /// Configuration with the privileged key.
    pub fn server(environment: &impl Environment) -> Result<Self, ConfigurationError> {
        Ok(Self {
            url: url(environment)?,
            key: SERVICE_ROLE_KEYS
                .iter()
                .find_map(|name| value(environment, name))
                .ok_or(ConfigurationError::Missing(SERVICE_ROLE_KEYS[0]))?,
        })
    }
}

fn url(environment: &impl Environment) -> Result<String, ConfigurationError> {
    value(environment, URL)
        .map(|url| url.trim_end_matches('/').to_string())
        .ok_or(ConfigurationError::Missing(URL))
}

/// Blank values count as missing.
fn value(environment: &impl Environment, name: &str) -> Option<String> {
    environment
        .var(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn environment(vars: &[(&str, &str)]) -> HashMap<String, String> {
        vars.iter()
            .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
            .collect()
    }

    #[test]
    fn test_browser() {
        assert_eq!(
            RemoteConfig::browser(&environment(&[
                (URL, "https://example.org/"),
                (ANON_KEY, "anon"),
            ])),
            Ok(RemoteConfig {
                url: "https://example.org".to_string(),
                key: "anon".to_string(),
            })
        );
    }

    #[rstest]
    #[case::no_values(&[], URL)]
    #[case::no_key(&[(URL, "https://example.org")], ANON_KEY)]
    #[case::blank_key(&[(URL, "https://example.org"), (ANON_KEY, " ")], ANON_KEY)]
    #[case::blank_url(&[(URL, ""), (ANON_KEY, "anon")], URL)]
    fn test_browser_missing(#[case] vars: &[(&str, &str)], #[case] missing: &'static str) {
        assert_eq!(
            RemoteConfig::browser(&environment(vars)),
            Err(ConfigurationError::Missing(missing))
        );
    }

    #[rstest]
    #[case::service_role(
        &[
            (SERVICE_ROLE_KEYS[0], "a"),
            (SERVICE_ROLE_KEYS[1], "b"),
            (SERVICE_ROLE_KEYS[2], "c"),
        ],
        "a"
    )]
    #[case::service(&[(SERVICE_ROLE_KEYS[1], "b"), (SERVICE_ROLE_KEYS[2], "c")], "b")]
    #[case::secret(&[(SERVICE_ROLE_KEYS[2], "c")], "c")]
    #[case::blank_service_role(&[(SERVICE_ROLE_KEYS[0], ""), (SERVICE_ROLE_KEYS[2], "c")], "c")]
    fn test_server_key_precedence(#[case] keys: &[(&str, &str)], #[case] expected: &str) {
        let mut vars = vec![(URL, "https://example.org")];
        vars.extend_from_slice(keys);
        assert_eq!(
            RemoteConfig::server(&environment(&vars)).map(|config| config.key),
            Ok(expected.to_string())
        );
    }

    #[test]
    fn test_server_missing_key() {
        assert_eq!(
            RemoteConfig::server(&environment(&[
                (URL, "https://example.org"),
                (ANON_KEY, "anon"),
            ])),
            Err(ConfigurationError::Missing(SERVICE_ROLE_KEYS[0]))
        );
    }
}
