//! ElevenLabs TTS client for Crowvox
//!
//! One `POST /v1/text-to-speech/{voice_id}` per synthesis call, no
//! retries. Failures are classified into [`TtsError`] kinds so the
//! playback layer can tell a rejected key from a rate limit from an
//! environment that blocks outbound traffic entirely.

use async_trait::async_trait;
use crowvox_tts::{
    normalize_api_key, AudioAsset, SpeechSynthesizer, TtsError, TtsResult, VoiceSettings,
};
use reqwest::header::ACCEPT;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};


pub const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io";

/// Fixed model identifier sent with every request.
pub const MODEL_ID: &str = "eleven_multilingual_v2";

/// Cap on the provider detail surfaced in error messages.
const DETAIL_LIMIT: usize = 60;

pub struct ElevenLabsClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for ElevenLabsClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ElevenLabsClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the client at a different endpoint (proxies, test servers).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }
}

#[derive(Serialize)]
struct SynthesisRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: &'a VoiceSettings,
}

/// Error body shape: `{ "detail": { "message": ..., "status": ... } }`
#[derive(Deserialize, Default)]
struct ErrorBody {
    detail: Option<ErrorDetail>,
}

#[derive(Deserialize, Default)]
struct ErrorDetail {
    message: Option<String>,
    status: Option<String>,
}

/// Map a non-success HTTP response to an error kind.
fn classify_failure(status: u16, body: &str) -> TtsError {
    match status {
        401 => TtsError::InvalidCredential,
        429 => TtsError::QuotaExceeded,
        _ => {
            let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
            let detail = parsed
                .detail
                .and_then(|d| d.message.or(d.status))
                .filter(|m| !m.is_empty())
                .map(|m| truncate_detail(&m))
                .unwrap_or_else(|| "unexpected response".to_string());
            TtsError::Provider { status, detail }
        }
    }
}

fn truncate_detail(detail: &str) -> String {
    detail.chars().take(DETAIL_LIMIT).collect()
}

#[async_trait]
impl SpeechSynthesizer for ElevenLabsClient {
    async fn synthesize(
        &self,
        text: &str,
        voice_id: &str,
        api_key: &str,
        settings: &VoiceSettings,
    ) -> TtsResult<AudioAsset> {
        let key = normalize_api_key(api_key);
        if key.is_empty() {
            return Err(TtsError::InvalidCredential);
        }

        let url = format!("{}/v1/text-to-speech/{}", self.base_url, voice_id);
        let body = SynthesisRequest {
            text,
            model_id: MODEL_ID,
            voice_settings: settings,
        };

        debug!(voice = voice_id, chars = text.len(), "requesting synthesis");

        // A transport-level failure means no response ever existed; the
        // environment itself is refusing the call, which callers must be
        // able to tell apart from an HTTP error.
        let response = match self
            .http
            .post(&url)
            .header("xi-api-key", &key)
            .header(ACCEPT, "audio/mpeg")
            .json(&body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "synthesis request never reached the provider");
                return Err(TtsError::OutboundBlocked);
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = classify_failure(status.as_u16(), &body);
            warn!(status = status.as_u16(), error = %err, "synthesis rejected");
            return Err(err);
        }

        let bytes = response.bytes().await.map_err(|e| {
            warn!(error = %e, "synthesis response body truncated");
            TtsError::Provider {
                status: status.as_u16(),
                detail: "response body could not be read".to_string(),
            }
        })?;

        debug!(bytes = bytes.len(), voice = voice_id, "synthesis complete");
        Ok(AudioAsset::new(bytes.to_vec()))
    }
}
