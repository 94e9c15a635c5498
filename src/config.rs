use std::env;

#[derive(Debug, Clone)]
pub struct Settings {
    // App
    pub app_name: String,
    pub app_version: String,
    pub environment: String,
    pub host: String,
    pub port: u16,

    // OpenAI-compatible platform. The user's API key is not part of the
    // environment: it arrives with each submission and is held only for the
    // lifetime of that request.
    pub openai_api_base: String,
    pub openai_model: String,
    pub moderation_enabled: bool,

    // CORS
    pub cors_origins: String,

    // Logging
    pub log_level: String,
    pub log_format: String,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            app_name: env::var("APP_NAME").unwrap_or("Sentiment Analyzer API".into()),
            app_version: env::var("APP_VERSION").unwrap_or("1.0.0".into()),
            environment: env::var("ENVIRONMENT").unwrap_or("development".into()),
            host: env::var("HOST").unwrap_or("0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or("8000".into())
                .parse()
                .unwrap_or(8000),

            openai_api_base: env::var("OPENAI_API_BASE")
                .unwrap_or("https://api.openai.com/v1".into()),
            openai_model: env::var("OPENAI_MODEL").unwrap_or("gpt-3.5-turbo".into()),
            moderation_enabled: env::var("MODERATION_ENABLED")
                .unwrap_or("true".into())
                .parse()
                .unwrap_or(true),

            cors_origins: env::var("CORS_ORIGINS").unwrap_or("*".into()),

            log_level: env::var("LOG_LEVEL").unwrap_or("info".into()),
            log_format: env::var("LOG_FORMAT").unwrap_or("json".into()),
        }
    }

    pub fn cors_origins_list(&self) -> Vec<String> {
        if self.cors_origins == "*" {
            return vec!["*".to_string()];
        }
        self.cors_origins
            .split(',')
            .map(|s| s.trim().to_string())
            .collect()
    }
}
