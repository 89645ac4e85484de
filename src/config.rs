use std::env;

use secrecy::{ExposeSecret, SecretString};

use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: Option<SecretString>,
    pub database_user: String,
    pub database_password: SecretString,
    pub database_host: String,
    pub database_port: u16,
    pub database_name: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub auth_domain: Option<String>,
    pub auth_issuer: Option<String>,
    pub api_audience: String,
    pub jwt_secret: Option<SecretString>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any variable source, applying the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            database_url: non_empty("DATABASE_URL").map(SecretString::from),
            database_user: lookup("DATABASE_USER").unwrap_or_default(),
            database_password: SecretString::from(lookup("DATABASE_PASSWORD").unwrap_or_default()),
            database_host: lookup("DATABASE_HOST").unwrap_or_else(|| "localhost".to_string()),
            database_port: lookup("DATABASE_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(5432),
            database_name: lookup("DATABASE_NAME").unwrap_or_else(|| "trivia".to_string()),
            web_server_host: lookup("WEB_SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            web_server_port: lookup("WEB_SERVER_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            auth_domain: non_empty("AUTH_DOMAIN"),
            auth_issuer: non_empty("AUTH_ISSUER"),
            api_audience: lookup("API_AUDIENCE").unwrap_or_else(|| "trivia".to_string()),
            jwt_secret: non_empty("JWT_SECRET").map(SecretString::from),
        }
    }

    /// Connection string; `DATABASE_URL` wins over the individual parts.
    pub fn database_url(&self) -> String {
        if let Some(url) = &self.database_url {
            return url.expose_secret().to_string();
        }

        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.database_user,
            self.database_password.expose_secret(),
            self.database_host,
            self.database_port,
            self.database_name
        )
    }

    pub fn issuer(&self) -> Option<String> {
        self.auth_issuer.clone().or_else(|| {
            self.auth_domain
                .as_ref()
                .map(|domain| format!("https://{}/", domain))
        })
    }

    /// Refuse to start without a way to verify tokens.
    pub fn validate(&self) -> AppResult<()> {
        if self.auth_domain.is_some() {
            return Ok(());
        }

        match &self.jwt_secret {
            None => Err(AppError::InternalError(
                "Neither AUTH_DOMAIN nor JWT_SECRET is set; protected routes could never authorize"
                    .to_string(),
            )),
            Some(secret) if secret.expose_secret().len() < 32 => Err(AppError::InternalError(
                format!(
                    "JWT_SECRET is too short ({}). Must be at least 32 characters.",
                    secret.expose_secret().len()
                ),
            )),
            Some(_) => Ok(()),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            database_url: None,
            database_user: "postgres".to_string(),
            database_password: SecretString::from("postgres".to_string()),
            database_host: "localhost".to_string(),
            database_port: 5432,
            database_name: "trivia_test".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            auth_domain: None,
            auth_issuer: Some(crate::test_utils::tokens::TEST_ISSUER.to_string()),
            api_audience: crate::test_utils::tokens::TEST_AUDIENCE.to_string(),
            jwt_secret: Some(crate::test_utils::tokens::test_secret()),
        }
    }
}
