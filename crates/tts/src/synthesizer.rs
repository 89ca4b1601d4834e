use std::{borrow::Cow, sync::Arc};

use base64::{Engine as _, engine::general_purpose::STANDARD};
use seewrite_config::SpeechConfig;
use seewrite_core::truncate_with_ellipsis;

use crate::{
    provider::TtsProvider,
    types::{SpeechRequest, SynthesisResult, SynthesizedAudio},
    voice::resolve_voice,
};

/// Longest text, in characters, sent to the provider before the ellipsis
pub const MAX_TEXT_CHARS: usize = 2900;

/// Content type reported for synthesized audio
pub const MP3_MIME_TYPE: &str = "audio/mp3";

/// Applies voice and length policy, then calls the provider
pub struct SpeechSynthesizer {
    provider: Arc<dyn TtsProvider>,
    default_voice: String,
    sample_rate: u32,
}

impl SpeechSynthesizer {
    pub fn new(provider: Arc<dyn TtsProvider>, config: &SpeechConfig) -> Self {
        Self {
            provider,
            default_voice: config.default_voice.clone(),
            sample_rate: config.sample_rate,
        }
    }

    pub fn default_voice(&self) -> &str {
        &self.default_voice
    }

    /// Synthesize `text` with `voice`, falling back to the default voice.
    ///
    /// Text longer than [`MAX_TEXT_CHARS`] is cut and suffixed with `...`.
    /// Provider errors are reported as [`SynthesisResult::Failed`].
    pub async fn synthesize(&self, text: &str, voice: Option<&str>) -> SynthesisResult {
        let voice = resolve_voice(voice, &self.default_voice).to_owned();
        let prepared = truncate_with_ellipsis(text, MAX_TEXT_CHARS);
        let truncated = matches!(prepared, Cow::Owned(_));

        if truncated {
            tracing::info!(original_chars = text.chars().count(), "speech text truncated to provider limit");
        }

        let text_length = prepared.chars().count();

        let request = SpeechRequest {
            text: prepared.into_owned(),
            voice: voice.clone(),
            sample_rate: self.sample_rate,
        };

        match self.provider.synthesize(request).await {
            Ok(response) => {
                tracing::debug!(
                    provider = self.provider.name(),
                    voice = %voice,
                    audio_bytes = response.audio.len(),
                    "speech synthesized"
                );

                SynthesisResult::Audio(SynthesizedAudio {
                    audio_base64: STANDARD.encode(&response.audio),
                    content_type: MP3_MIME_TYPE.to_owned(),
                    voice_id: voice,
                    text_length,
                    truncated,
                })
            }
            Err(e) => {
                let reason = e.failure();
                tracing::warn!(provider = self.provider.name(), error = %e, retryable = reason.is_retryable(), "speech synthesis failed");

                SynthesisResult::Failed { reason }
            }
        }
    }
}
