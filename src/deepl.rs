use anyhow::{Context, Result, anyhow};
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::locale::TargetLanguage;

pub const FREE_BASE_URL: &str = "https://api-free.deepl.com/";
pub const PRO_BASE_URL: &str = "https://api.deepl.com/";

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    text: [&'a str; 1],
    source_lang: String,
    target_lang: &'static str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
struct Translation {
    text: String,
}

pub struct DeeplClient {
    http: Client,
    base_url: Url,
    auth_key: String,
}

impl DeeplClient {
    /// Free-tier keys (suffix `:fx`) are served from a separate host.
    pub fn new(auth_key: impl Into<String>) -> Result<Self> {
        let auth_key = auth_key.into();
        let http = Client::builder()
            .user_agent(concat!("asc-translate/", env!("CARGO_PKG_VERSION")))
            .use_rustls_tls()
            .build()?;
        let base_url = Url::parse(default_base_url(&auth_key))?;
        Ok(Self {
            http,
            base_url,
            auth_key,
        })
    }

    /// Overrides the base URL for API requests. Useful for tests with a mock server.
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Translates `text` from `source_lang` into `target`, one request per call.
    pub async fn translate_text(
        &self,
        text: &str,
        source_lang: &str,
        target: TargetLanguage,
    ) -> Result<String> {
        let url = self.base_url.join("v2/translate")?;
        let body = TranslateRequest {
            text: [text],
            source_lang: source_lang.to_uppercase(),
            target_lang: target.code(),
        };
        let res = self
            .http
            .post(url)
            .header("Authorization", format!("DeepL-Auth-Key {}", self.auth_key))
            .json(&body)
            .send()
            .await?;
        let status = res.status();
        let text = res.text().await?;
        if !status.is_success() {
            return Err(anyhow!("DeepL translate failed {}: {}", status, text));
        }
        let parsed: TranslateResponse =
            serde_json::from_str(&text).context("Failed to parse DeepL response")?;
        debug!(target_lang = target.code(), bytes = text.len(), "translate ok");
        parsed
            .translations
            .into_iter()
            .next()
            .map(|t| t.text)
            .ok_or_else(|| anyhow!("DeepL returned no translations"))
    }
}

pub fn default_base_url(auth_key: &str) -> &'static str {
    if auth_key.trim_end().ends_with(":fx") {
        FREE_BASE_URL
    } else {
        PRO_BASE_URL
    }
}
