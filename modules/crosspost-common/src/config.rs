use std::env;

use tracing::info;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // WordPress target site
    /// API root ending in `/wp-json/wp/v2`.
    pub wordpress_base_url: String,
    pub wordpress_username: String,
    /// Application password, not the account login password.
    pub wordpress_app_password: String,

    // Post store
    pub database_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    /// Panics with a clear message if required vars are missing.
    pub fn from_env() -> Self {
        Self {
            wordpress_base_url: required_env("WORDPRESS_BASE_URL"),
            wordpress_username: required_env("WORDPRESS_USERNAME"),
            wordpress_app_password: required_env("WORDPRESS_APP_PASSWORD"),
            database_url: required_env("DATABASE_URL"),
        }
    }

    /// Log the loaded configuration with secrets masked.
    pub fn log_redacted(&self) {
        info!(
            wordpress_base_url = self.wordpress_base_url.as_str(),
            wordpress_username = self.wordpress_username.as_str(),
            wordpress_app_password = "***",
            database_url = redact_url(&self.database_url).as_str(),
            "Config loaded"
        );
    }
}

fn required_env(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| panic!("{key} environment variable is required"))
}

/// Strip the password from a connection URL for logging.
fn redact_url(url: &str) -> String {
    match url.split_once('@') {
        Some((creds, rest)) => match creds.rsplit_once(':') {
            Some((user, _password)) => format!("{user}:***@{rest}"),
            None => format!("{creds}@{rest}"),
        },
        None => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::redact_url;

    #[test]
    fn redacts_password_in_connection_url() {
        assert_eq!(
            redact_url("postgres://app:hunter2@db:5432/posts"),
            "postgres://app:***@db:5432/posts"
        );
    }

    #[test]
    fn leaves_urls_without_credentials_alone() {
        assert_eq!(redact_url("postgres://db:5432/posts"), "postgres://db:5432/posts");
    }
}
