mod harness;

use std::time::Duration;

use harness::capabilities::{ScriptedInvoker, ScriptedSpeech};
use harness::pipeline::PipelineBuilder;
use seewrite_pipeline::{FollowUpRequest, PipelineError};
use serde_json::json;
use tts::SynthesisFailure;

const LLAMA_8B: &str = "meta.llama3-8b-instruct-v1:0";
const COHERE_R: &str = "cohere.command-r-v1:0";

#[tokio::test]
async fn exhausted_follow_up_quotes_the_question() {
    let test = PipelineBuilder::new().build();

    let answer = test
        .pipeline
        .answer_follow_up("Diagram of a heart.", "What pumps blood?")
        .await;

    assert!(answer.starts_with("Thank you for your question about 'What pumps blood?'. "));
    assert!(answer.contains("What pumps blood?"));
    assert_eq!(test.invoker.calls().len(), 9);
}

#[tokio::test]
async fn follow_up_prompt_carries_description_and_question() {
    let test = PipelineBuilder::new()
        .with_invoker(ScriptedInvoker::new().reply(COHERE_R, json!({ "text": "The heart does." })))
        .build();

    let answer = test
        .pipeline
        .answer_follow_up("Diagram of a heart.", "What pumps blood?")
        .await;

    assert_eq!(answer, "The heart does.");

    let body = test.invoker.body_for(COHERE_R).unwrap();
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("Original content description: Diagram of a heart."));
    assert!(message.contains("Student's question: What pumps blood?"));
    assert_eq!(body["max_tokens"], 800);
}

#[tokio::test(start_paused = true)]
async fn slow_backend_is_skipped_after_timeout() {
    let test = PipelineBuilder::new()
        .with_invoker(
            ScriptedInvoker::new()
                .reply(LLAMA_8B, json!({ "generation": "too late" }))
                .delay(LLAMA_8B, Duration::from_secs(60))
                .reply("meta.llama3-70b-instruct-v1:0", json!({ "generation": "on time" })),
        )
        .with_attempt_timeout(Duration::from_secs(5))
        .build();

    let answer = test.pipeline.answer_follow_up("", "Why?").await;

    assert_eq!(answer, "on time");
}

#[tokio::test]
async fn blank_question_is_rejected_before_dispatch() {
    let test = PipelineBuilder::new().build();

    let request = FollowUpRequest {
        question: String::new(),
        original_description: "Diagram of a heart.".to_owned(),
    };
    let error = test.pipeline.handle_follow_up(&request).await.unwrap_err();

    assert!(matches!(error, PipelineError::MissingInput { field: "question" }));
    assert!(test.invoker.calls().is_empty());
}

#[tokio::test]
async fn narrated_answer_returns_text_and_audio() {
    let test = PipelineBuilder::new()
        .with_invoker(ScriptedInvoker::new().reply(LLAMA_8B, json!({ "generation": "The heart pumps blood." })))
        .build();

    let narration = test
        .pipeline
        .answer_and_narrate("Diagram of a heart.", "What pumps blood?", Some("Matthew"))
        .await
        .unwrap();

    assert_eq!(narration.text, "The heart pumps blood.");
    assert_eq!(narration.audio.voice_id, "Matthew");
    assert_eq!(narration.audio.content_type, "audio/mp3");

    let requests = test.speech.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].text, "The heart pumps blood.");
}

#[tokio::test]
async fn narration_failure_is_fatal_even_with_fallback_text() {
    let test = PipelineBuilder::new()
        .with_speech(ScriptedSpeech::failing_with("ServiceFailureException"))
        .build();

    let error = test
        .pipeline
        .answer_and_narrate("Diagram of a heart.", "What pumps blood?", None)
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        PipelineError::Synthesis(SynthesisFailure::ServiceUnavailable)
    ));
    assert!(error.is_retryable());

    let requests = test.speech.requests();
    assert!(requests[0].text.starts_with("Thank you for your question about 'What pumps blood?'."));
}
