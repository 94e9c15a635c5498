use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AnalyzeRequest {
    /// Session credential for the completion platform. Forwarded as a bearer
    /// token on the outbound calls and dropped when the request ends.
    #[schema(example = "sk-...")]
    pub api_key: String,

    #[validate(length(min = 1, message = "text is required"))]
    #[schema(example = "I love this product!")]
    pub text: String,
}

impl AnalyzeRequest {
    /// Surface shape of an OpenAI-style key. Not a validity check; the
    /// platform still rejects revoked or fabricated keys.
    pub fn credential_is_well_formed(&self) -> bool {
        self.api_key.starts_with("sk-")
    }

    pub fn validate_content(&self) -> Result<(), String> {
        if self.text.trim().is_empty() {
            return Err("text is required".into());
        }
        Ok(())
    }
}
