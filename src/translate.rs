//! Translation backends.
//!
//! The pipeline only sees the [`TranslationClient`] trait; network failure,
//! non-2xx status, and malformed payloads all collapse into a failed call.

use std::time::Duration;

use anyhow::{bail, Context};

use crate::settings::{ApiType, Settings};

#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub text: String,
    /// `"auto"` or an ISO language code.
    pub source_lang: String,
    pub target_lang: String,
}

pub trait TranslationClient {
    fn translate(&self, request: &TranslationRequest) -> anyhow::Result<String>;
}

const GOOGLE_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Google's unauthenticated web endpoint (the `gtx` client). The payload is a
/// nested array whose first element lists translated segments.
pub struct GoogleTranslate {
    http: reqwest::blocking::Client,
}

impl GoogleTranslate {
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        Ok(Self {
            http: reqwest::blocking::Client::builder().timeout(timeout).build()?,
        })
    }
}

impl TranslationClient for GoogleTranslate {
    fn translate(&self, request: &TranslationRequest) -> anyhow::Result<String> {
        let response = self
            .http
            .get(GOOGLE_ENDPOINT)
            .query(&[
                ("client", "gtx"),
                ("sl", request.source_lang.as_str()),
                ("tl", request.target_lang.as_str()),
                ("dt", "t"),
                ("q", request.text.trim()),
            ])
            .send()
            .context("translation request failed")?;
        if !response.status().is_success() {
            bail!("translation request returned {}", response.status());
        }
        let body: serde_json::Value =
            serde_json::from_str(&response.text()?).context("malformed translation payload")?;
        let segments = body
            .get(0)
            .and_then(|v| v.as_array())
            .context("malformed translation payload")?;
        let translated: String = segments
            .iter()
            .filter_map(|item| item.get(0).and_then(|s| s.as_str()))
            .collect();
        if translated.trim().is_empty() {
            bail!("translation returned no text");
        }
        Ok(translated)
    }
}

/// A locally running Pot instance (`POST /translate`).
pub struct PotApi {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl PotApi {
    pub fn new(base_url: String, timeout: Duration) -> anyhow::Result<Self> {
        Ok(Self {
            base_url,
            http: reqwest::blocking::Client::builder().timeout(timeout).build()?,
        })
    }
}

impl TranslationClient for PotApi {
    fn translate(&self, request: &TranslationRequest) -> anyhow::Result<String> {
        let payload = serde_json::json!({
            "text": request.text,
            "from": request.source_lang,
            "to": request.target_lang,
        });
        let response = self
            .http
            .post(format!("{}/translate", self.base_url.trim_end_matches('/')))
            .header("content-type", "application/json")
            .body(payload.to_string())
            .send()
            .context("translation request failed")?;
        if !response.status().is_success() {
            bail!("translation request returned {}", response.status());
        }
        let body: serde_json::Value =
            serde_json::from_str(&response.text()?).context("malformed translation payload")?;
        let translated = body
            .get("result")
            .and_then(|v| v.as_str())
            .context("malformed translation payload")?;
        if translated.trim().is_empty() {
            bail!("translation returned no text");
        }
        Ok(translated.to_string())
    }
}

/// Build the backend selected by `api_type`.
pub fn client_from_settings(settings: &Settings) -> anyhow::Result<Box<dyn TranslationClient>> {
    let timeout = settings.request_timeout();
    match settings.api_type {
        ApiType::Google => Ok(Box::new(GoogleTranslate::new(timeout)?)),
        ApiType::Pot => Ok(Box::new(PotApi::new(settings.pot_url.clone(), timeout)?)),
    }
}
