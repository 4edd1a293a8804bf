use super::api_config::ApiConfig;

pub struct AppConfig {
    pub api: ApiConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            api: ApiConfig::from_env(),
        }
    }
}
