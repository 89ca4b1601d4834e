use serde::Deserialize;

/// Neural voices accepted by the synthesizer
pub const NEURAL_VOICES: &[&str] = &[
    "Joanna", "Matthew", "Amy", "Emma", "Brian", "Olivia", "Aria", "Ayanda", "Ivy", "Kendra", "Kimberly", "Salli",
    "Joey", "Justin", "Kevin", "Ruth",
];

/// Voice used when the requested one is unknown
pub const DEFAULT_VOICE: &str = "Joanna";

/// Speech synthesis configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpeechConfig {
    /// Fallback voice, must be one of [`NEURAL_VOICES`]
    #[serde(default = "default_voice")]
    pub default_voice: String,
    /// Output sample rate in Hz
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            default_voice: default_voice(),
            sample_rate: default_sample_rate(),
        }
    }
}

fn default_voice() -> String {
    DEFAULT_VOICE.to_owned()
}

#[allow(clippy::missing_const_for_fn)]
fn default_sample_rate() -> u32 {
    24_000
}
