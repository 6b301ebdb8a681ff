use secrecy::Secret;

use crate::domain::credentials::Credentials;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub log_level: String,
    pub foody: FoodySettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct FoodySettings {
    pub base_url: String,
    pub username: String,
    pub password: Secret<String>,
}

impl FoodySettings {
    pub fn credentials(&self) -> Credentials {
        Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}

/// Reads `configuration/base.yaml` from the working directory, then lets
/// `APP_`-prefixed environment variables override it (`APP_FOODY__BASE_URL`).
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| config::ConfigError::Message(format!("No working directory: {e}")))?;
    let configuration_directory = base_path.join("configuration");

    config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?
        .try_deserialize::<Settings>()
}
