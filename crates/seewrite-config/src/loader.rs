use std::path::Path;

use crate::{Config, NEURAL_VOICES};

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::parse(&raw)
    }

    /// Load from `path` when it exists, otherwise use built-in defaults
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file fails to load
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            return Self::load(path);
        }

        tracing::debug!(config_path = %path.display(), "config file not found, using defaults");
        Ok(Self::default())
    }

    /// Parse configuration from raw TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing, or validation fails
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the inference or speech sections are invalid
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_aws_config()?;
        self.validate_inference_config()?;
        self.validate_speech_config()?;
        Ok(())
    }

    /// Static credentials must come as a pair
    fn validate_aws_config(&self) -> anyhow::Result<()> {
        if self.aws.region.trim().is_empty() {
            anyhow::bail!("aws.region must not be empty");
        }

        if self.aws.access_key_id.is_some() != self.aws.secret_access_key.is_some() {
            anyhow::bail!("aws.access_key_id and aws.secret_access_key must be set together");
        }

        Ok(())
    }

    fn validate_inference_config(&self) -> anyhow::Result<()> {
        if let Some(timeout) = self.inference.attempt_timeout()?
            && timeout.is_zero()
        {
            anyhow::bail!("inference.attempt_timeout must be greater than 0");
        }

        if self.inference.backends.keys().any(|id| id.trim().is_empty()) {
            anyhow::bail!("inference backend ids must not be empty");
        }

        Ok(())
    }

    fn validate_speech_config(&self) -> anyhow::Result<()> {
        if !NEURAL_VOICES.contains(&self.speech.default_voice.as_str()) {
            anyhow::bail!(
                "speech.default_voice '{}' is not a supported neural voice",
                self.speech.default_voice
            );
        }

        if self.speech.sample_rate == 0 {
            anyhow::bail!("speech.sample_rate must be greater than 0");
        }

        Ok(())
    }
}
