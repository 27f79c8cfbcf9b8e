use std::fmt;

use url::{ParseError, Url};

/// Credentials of the logged-in administrator.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    pub user: Option<String>,
    pub password: Option<String>,
}

impl Session {
    pub fn new(user: Option<String>, password: Option<String>) -> Self {
        Self { user, password }
    }

    pub fn user_name(&self) -> &str {
        self.user.as_deref().unwrap_or("")
    }

    pub fn password(&self) -> &str {
        self.password.as_deref().unwrap_or("")
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum OriginError {
    #[error("server URL must start with http:// or https://: {0}")]
    UnsupportedScheme(String),
    #[error("server URL has no host: {0}")]
    MissingHost(String),
    #[error("invalid port in server URL: {0}")]
    InvalidPort(String),
    #[error("malformed server URL {url}: {reason}")]
    Malformed { url: String, reason: String },
}

/// `scheme://host:port` of the server the UI talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerOrigin {
    pub scheme: String,
    pub host: String,
    pub port: u16,
}

impl ServerOrigin {
    /// Path, query and userinfo are dropped; credentials come from the session.
    pub fn parse(url: &str) -> Result<Self, OriginError> {
        let parsed = Url::parse(url.trim()).map_err(|e| match e {
            ParseError::EmptyHost => OriginError::MissingHost(url.to_string()),
            ParseError::InvalidPort => OriginError::InvalidPort(url.to_string()),
            ParseError::RelativeUrlWithoutBase => OriginError::UnsupportedScheme(url.to_string()),
            other => OriginError::Malformed {
                url: url.to_string(),
                reason: other.to_string(),
            },
        })?;

        let scheme = parsed.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(OriginError::UnsupportedScheme(url.to_string()));
        }
        let host = parsed
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| OriginError::MissingHost(url.to_string()))?;
        let port = parsed
            .port_or_known_default()
            .ok_or_else(|| OriginError::InvalidPort(url.to_string()))?;

        Ok(Self {
            scheme: scheme.to_string(),
            host: host.to_string(),
            port,
        })
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self, path.trim_start_matches('/'))
    }
}

impl Default for ServerOrigin {
    fn default() -> Self {
        Self {
            scheme: "http".to_string(),
            host: "127.0.0.1".to_string(),
            port: 5984,
        }
    }
}

impl fmt::Display for ServerOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}:{}", self.scheme, self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    mod parse {
        use super::*;

        #[rstest]
        #[case("http://127.0.0.1:5984", "http", "127.0.0.1", 5984)]
        #[case("https://couch.example.com", "https", "couch.example.com", 443)]
        #[case("http://couch.example.com/", "http", "couch.example.com", 80)]
        #[case("http://admin:pw@localhost:5984/_utils", "http", "localhost", 5984)]
        #[case("  http://localhost:15984  ", "http", "localhost", 15984)]
        #[case("http://[::1]:5984", "http", "[::1]", 5984)]
        fn splits_scheme_host_and_port(
            #[case] url: &str,
            #[case] scheme: &str,
            #[case] host: &str,
            #[case] port: u16,
        ) {
            let origin = ServerOrigin::parse(url).unwrap();

            assert_eq!(origin.scheme, scheme);
            assert_eq!(origin.host, host);
            assert_eq!(origin.port, port);
        }

        #[test]
        fn rejects_other_schemes() {
            assert_eq!(
                ServerOrigin::parse("ftp://host"),
                Err(OriginError::UnsupportedScheme("ftp://host".to_string()))
            );
        }

        #[test]
        fn rejects_missing_host() {
            assert!(matches!(
                ServerOrigin::parse("http://:5984"),
                Err(OriginError::MissingHost(_))
            ));
        }

        #[rstest]
        #[case("http://localhost:abc")]
        #[case("http://localhost:5984:80")]
        #[case("http://localhost:70000")]
        fn rejects_bad_port(#[case] url: &str) {
            assert_eq!(
                ServerOrigin::parse(url),
                Err(OriginError::InvalidPort(url.to_string()))
            );
        }

        #[rstest]
        #[case("http://ho st:5984")]
        #[case("http://[::1")]
        fn rejects_malformed_host(#[case] url: &str) {
            assert!(matches!(
                ServerOrigin::parse(url),
                Err(OriginError::Malformed { .. })
            ));
        }

        #[test]
        fn rejects_missing_scheme() {
            assert!(matches!(
                ServerOrigin::parse("couch.example.com:5984/db"),
                Err(OriginError::UnsupportedScheme(_))
            ));
        }
    }

    #[test]
    fn display_always_includes_port() {
        let origin = ServerOrigin::parse("https://couch.example.com").unwrap();
        assert_eq!(origin.to_string(), "https://couch.example.com:443");
    }

    #[test]
    fn url_for_joins_with_single_slash() {
        let origin = ServerOrigin::default();
        assert_eq!(origin.url_for("/_all_dbs"), "http://127.0.0.1:5984/_all_dbs");
    }

    #[test]
    fn session_without_user_has_empty_name() {
        assert_eq!(Session::default().user_name(), "");
    }
}
