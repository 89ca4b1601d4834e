use seewrite_config::NEURAL_VOICES;

/// Whether `voice` is one of the supported neural voices
pub fn is_supported_voice(voice: &str) -> bool {
    NEURAL_VOICES.contains(&voice)
}

/// Return `requested` when supported, else `default`
///
/// Unknown voices are replaced, never rejected.
pub fn resolve_voice<'a>(requested: Option<&'a str>, default: &'a str) -> &'a str {
    match requested {
        Some(voice) if is_supported_voice(voice) => voice,
        Some(voice) => {
            tracing::debug!(requested = voice, fallback = default, "unsupported voice, using default");
            default
        }
        None => default,
    }
}
