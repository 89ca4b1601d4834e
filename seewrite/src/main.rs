#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;

use anyhow::Context;
use args::{Args, Command};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use clap::Parser;
use seewrite_config::Config;
use seewrite_core::ImagePayload;
use seewrite_pipeline::{DescriptionResponse, FollowUpRequest, Pipeline, SpeechRequest};
use serde::Serialize;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = Config::load_or_default(&args.config)?;

    let _telemetry_guard = seewrite_telemetry::init(config.telemetry.as_ref(), &args.log_filter)?;

    tracing::info!(config_path = %args.config.display(), "starting seewrite");

    let pipeline = Pipeline::from_config(&config).await?;

    match args.command {
        Command::Describe { image, narrate, voice } => {
            let bytes = tokio::fs::read(&image)
                .await
                .with_context(|| format!("Failed to read image {}", image.display()))?;

            anyhow::ensure!(!bytes.is_empty(), "Image {} is empty", image.display());

            let image = ImagePayload::new(bytes);

            if narrate {
                print_json(&pipeline.describe_and_narrate(&image, voice.as_deref()).await?)
            } else {
                print_json(&DescriptionResponse {
                    description: pipeline.describe_image(&image).await,
                })
            }
        }
        Command::Ask {
            description,
            question,
            narrate,
            voice,
        } => {
            let request = FollowUpRequest {
                question,
                original_description: description,
            };

            if narrate {
                print_json(&pipeline.handle_follow_up_narrated(&request, voice.as_deref()).await?)
            } else {
                print_json(&pipeline.handle_follow_up(&request).await?)
            }
        }
        Command::Speak { text, voice, output } => {
            let request = SpeechRequest {
                text,
                voice_id: voice.unwrap_or_else(|| config.speech.default_voice.clone()),
            };

            let response = pipeline.handle_speech(&request).await?;

            if let Some(path) = output {
                let audio = STANDARD
                    .decode(&response.audio_base64)
                    .context("Synthesized audio is not valid base64")?;

                tokio::fs::write(&path, audio)
                    .await
                    .with_context(|| format!("Failed to write audio to {}", path.display()))?;

                tracing::info!(path = %path.display(), "audio written");
            }

            print_json(&response)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
