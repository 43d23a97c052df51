use crate::{completion_client::CompletionClient, speaker::Speaker, speech_client::SpeechClient};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;
use sqlx::{
    postgres::{PgConnectOptions, PgSslMode},
    ConnectOptions,
};
use std::{str::FromStr, time::Duration};
use tower_sessions::Expiry;
use tracing_log::log::LevelFilter;

#[derive(Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub database: DatabaseSettings,
    pub completion_client: CompletionClientSettings,
    pub speech: SpeechSettings,
}

#[derive(Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub hmac_secret: Secret<String>,
    pub require_onboarding: bool,
    pub secure_cookies: bool,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub session_idle_minutes: i64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub max_sessions: u64,
}

impl ApplicationSettings {
    /// Sessions hold whole datasets, so they end after a period of inactivity.
    pub fn session_expiry(&self) -> Expiry {
        Expiry::OnInactivity(time::Duration::minutes(self.session_idle_minutes))
    }
}

#[derive(Deserialize)]
pub struct DatabaseSettings {
    pub url: Option<Secret<String>>,
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub username: String,
    pub password: Secret<String>,
    pub database_name: String,
    pub require_ssl: bool,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub acquire_timeout_milliseconds: u64,
}

impl DatabaseSettings {
    /// Connection options for the application database. `url` wins over the
    /// individual fields when present.
    pub fn with_db(&self) -> Result<PgConnectOptions, sqlx::Error> {
        let options = match &self.url {
            Some(url) => PgConnectOptions::from_str(url.expose_secret())?.ssl_mode(self.ssl_mode()),
            None => self.without_db().database(&self.database_name),
        };

        Ok(options.log_statements(LevelFilter::Trace))
    }

    pub fn without_db(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .password(self.password.expose_secret())
            .ssl_mode(self.ssl_mode())
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_millis(self.acquire_timeout_milliseconds)
    }

    fn ssl_mode(&self) -> PgSslMode {
        if self.require_ssl {
            PgSslMode::Require
        } else {
            PgSslMode::Prefer
        }
    }
}

#[derive(Deserialize)]
pub struct CompletionClientSettings {
    pub base_url: String,
    pub model: String,
    pub api_key: Option<Secret<String>>,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
}

impl CompletionClientSettings {
    /// `None` when no API key is configured.
    pub fn client(&self) -> Result<Option<CompletionClient>, reqwest::Error> {
        let Some(api_key) = self
            .api_key
            .as_ref()
            .filter(|key| !key.expose_secret().trim().is_empty())
        else {
            return Ok(None);
        };

        CompletionClient::new(
            self.base_url.clone(),
            self.model.clone(),
            api_key.clone(),
            self.timeout(),
        )
        .map(Some)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }
}

#[derive(Deserialize)]
pub struct SpeechSettings {
    pub base_url: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
    pub speaker_command: Option<String>,
}

impl SpeechSettings {
    pub fn client(&self) -> Result<SpeechClient, reqwest::Error> {
        SpeechClient::new(self.base_url.clone(), self.timeout())
    }

    pub fn speaker(&self) -> Speaker {
        Speaker::new(self.speaker_command.clone())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let config_dir = std::env::current_dir()
        .map(|dir| dir.join("configuration"))
        .map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;

    let env_config = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(config_dir.join("base.yaml")))
        .add_source(config::File::from(config_dir.join(env_config)))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
        .set_override_option(
            "completion_client.api_key",
            std::env::var("OPENAI_API_KEY").ok(),
        )?
        .build()?;

    settings.try_deserialize()
}

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            other => Err(format!(
                "Unknown environment `{other}`, expected `local` or `production`"
            )),
        }
    }
}
