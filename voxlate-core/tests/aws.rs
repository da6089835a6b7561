//! Live tests against AWS Translate and Polly
//!
//! # Running AWS tests
//!
//! These tests require AWS credentials with `translate:TranslateText` and
//! `polly:SynthesizeSpeech`. They are marked #[ignore] by default and won't
//! run in normal CI.
//!
//! To run:
//! ```sh
//! cargo test -p voxlate-core --test aws -- --ignored
//! ```

use std::env;

use voxlate_core::{
    language::{self, Language},
    settings::AwsSettings,
    speech::{aws_polly::AwsPolly, AudioFormat, SpeechSynthesizer, SynthesisRequest},
    translate::{aws_translate::AwsTranslate, TranslationRequest, Translator},
    GatewayErrorKind,
};

fn live_settings() -> AwsSettings {
    AwsSettings {
        profile: env::var("AWS_PROFILE").ok(),
        region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
        ..AwsSettings::default()
    }
}

#[tokio::test]
#[ignore] // Requires AWS credentials
async fn test_translate_good_morning_to_german() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let translator = AwsTranslate::new(&live_settings()).await;
    let request = TranslationRequest::new("Good morning", Language::German.entry());

    let text = translator
        .translate(&request)
        .await
        .expect("TranslateText failed");

    println!("Translated: {}", text);
    assert!(
        text.to_lowercase().contains("morgen"),
        "unexpected translation: {text}"
    );
}

#[tokio::test]
#[ignore] // Requires AWS credentials
async fn test_synthesize_every_registry_voice() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let polly = AwsPolly::new(&live_settings()).await;

    for entry in language::all() {
        let request = SynthesisRequest::new("Hello", entry);
        let audio = polly
            .synthesize(&request)
            .await
            .unwrap_or_else(|e| panic!("SynthesizeSpeech failed for {}: {e}", entry.voice_id));

        println!("{}: {} bytes", entry.voice_id, audio.len());
        assert_eq!(audio.format, AudioFormat::Mp3);
        assert!(!audio.is_empty());
    }
}

#[tokio::test]
#[ignore] // Requires network access
async fn test_bad_profile_is_reported_as_auth_or_network() {
    let settings = AwsSettings {
        profile: Some("voxlate-profile-that-does-not-exist".to_string()),
        ..live_settings()
    };
    let translator = AwsTranslate::new(&settings).await;
    let request = TranslationRequest::new("Hello", Language::French.entry());

    let err = translator.translate(&request).await.unwrap_err();

    println!("{:?}: {}", err.kind, err);
    assert!(matches!(
        err.kind,
        GatewayErrorKind::Auth | GatewayErrorKind::Network
    ));
}
