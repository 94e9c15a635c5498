use serde::{Deserialize, Deserializer, Serialize};

use crate::error::AppError;

/// Sentinel category reported when no category flag is set.
pub const NO_CATEGORY: &str = "Nothing";

#[derive(Clone)]
pub struct ModerationGate {
    http: reqwest::Client,
    api_base: String,
}

/// Outcome of screening one submission.
#[derive(Debug, Clone, PartialEq)]
pub struct ModerationVerdict {
    pub flagged: bool,
    pub category: String,
}

impl ModerationVerdict {
    pub fn clear() -> Self {
        Self {
            flagged: false,
            category: NO_CATEGORY.to_string(),
        }
    }
}

#[derive(Serialize)]
struct ModerationRequest<'a> {
    input: &'a str,
}

#[derive(Deserialize)]
struct ModerationResponse {
    results: Vec<ModerationOutcome>,
}

#[derive(Debug, Deserialize)]
struct ModerationOutcome {
    flagged: bool,
    // Category flags in the order the classifier returned them, not keyed.
    #[serde(deserialize_with = "category_flags_in_order")]
    categories: Vec<(String, bool)>,
}

impl ModerationOutcome {
    /// First truthy category in returned order wins; a clean outcome, or a
    /// flagged one with no truthy flag, reports the sentinel.
    fn into_verdict(self) -> ModerationVerdict {
        if !self.flagged {
            return ModerationVerdict::clear();
        }

        let category = self
            .categories
            .into_iter()
            .find(|(_, hit)| *hit)
            .map(|(name, _)| name)
            .unwrap_or_else(|| NO_CATEGORY.to_string());

        ModerationVerdict {
            flagged: true,
            category,
        }
    }
}

impl ModerationGate {
    pub fn new(http: reqwest::Client, api_base: &str) -> Self {
        Self {
            http,
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    /// Screen one submission against the hosted moderation classifier.
    pub async fn screen(&self, api_key: &str, text: &str) -> Result<ModerationVerdict, AppError> {
        let url = format!("{}/moderations", self.api_base);

        let resp = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(&ModerationRequest { input: text })
            .send()
            .await
            .map_err(|e| AppError::upstream(format!("Moderation API error: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            tracing::error!(status = %status, body = %body, "Moderation API error");
            return Err(AppError::upstream(format!(
                "Moderation API returned {status}"
            )));
        }

        let parsed: ModerationResponse = resp.json().await.map_err(|e| {
            AppError::upstream(format!("Failed to parse moderation response: {e}"))
        })?;

        let outcome = parsed
            .results
            .into_iter()
            .next()
            .ok_or_else(|| AppError::upstream("Empty response from moderation API"))?;

        Ok(outcome.into_verdict())
    }
}

fn category_flags_in_order<'de, D>(deserializer: D) -> Result<Vec<(String, bool)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct OrderedFlags;

    impl<'de> serde::de::Visitor<'de> for OrderedFlags {
        type Value = Vec<(String, bool)>;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("a map of category names to booleans")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: serde::de::MapAccess<'de>,
        {
            let mut flags = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some(entry) = access.next_entry::<String, bool>()? {
                flags.push(entry);
            }
            Ok(flags)
        }
    }

    deserializer.deserialize_map(OrderedFlags)
}
