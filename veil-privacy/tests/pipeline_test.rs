use test_fixtures::{ScriptedNoise, SeededNoise, CLINICAL_NOTE};
use veil_core::config::PrivacyConfig;
use veil_core::errors::PrivacyError;
use veil_core::models::Mode;
use veil_privacy::PrivacyPipeline;

fn pipeline() -> PrivacyPipeline {
    PrivacyPipeline::new(PrivacyConfig::default()).unwrap()
}

// ── Mode validation ────────────────────────────────────────────────────────

#[test]
fn unknown_mode_fails_with_invalid_mode() {
    let pipeline = pipeline();
    for text in ["", "some text", CLINICAL_NOTE] {
        let err = pipeline
            .apply(text, "bogus_mode", &mut ScriptedNoise::silent())
            .unwrap_err();
        assert!(matches!(err, PrivacyError::InvalidMode { ref mode } if mode == "bogus_mode"));
    }
}

#[test]
fn invalid_config_rejected_at_construction() {
    let config = PrivacyConfig {
        epsilon: -1.0,
        ..Default::default()
    };
    assert!(matches!(
        PrivacyPipeline::new(config),
        Err(PrivacyError::InvalidConfig { .. })
    ));
}

// ── Stage selection per mode ───────────────────────────────────────────────

#[test]
fn redaction_always_runs_first() {
    let pipeline = pipeline();
    for mode in ["token_dropping", "differential_privacy", "combined"] {
        let out = pipeline
            .apply(CLINICAL_NOTE, mode, &mut ScriptedNoise::silent())
            .unwrap();
        assert!(!out.contains("John Smith"), "{mode}: name leaked: {out}");
        assert!(!out.contains("$500"), "{mode}: amount leaked: {out}");
    }
}

#[test]
fn silent_noise_preserves_redacted_text_modulo_whitespace() {
    let pipeline = pipeline();
    let out = pipeline
        .apply(
            "I am happy today but John Doe is worried about $500",
            "combined",
            &mut ScriptedNoise::silent(),
        )
        .unwrap();
    assert_eq!(out, "I am happy today but [NAME] is worried about [MONEY]");
}

#[test]
fn combined_drops_before_perturbing() {
    // Uniform 0.0 drops every non-sentiment token; with zero Laplace noise
    // the rewriter must then see only the sentiment words.
    let config = PrivacyConfig {
        token_drop_rate: 0.5,
        ..Default::default()
    };
    let pipeline = PrivacyPipeline::new(config).unwrap();
    let mut noise = ScriptedNoise::new(vec![0.0], vec![0.0]);
    let out = pipeline.apply_mode(
        "I am happy today but John Doe is worried about $500",
        Mode::Combined,
        &mut noise,
    );
    assert_eq!(out, "happy worried");
}

#[test]
fn default_mode_comes_from_config() {
    let config = PrivacyConfig {
        mode: Mode::TokenDropping,
        ..Default::default()
    };
    let pipeline = PrivacyPipeline::new(config).unwrap();
    let out = pipeline.apply_default("John Doe was happy", &mut ScriptedNoise::silent());
    assert_eq!(out, "[NAME] was happy");
}

// ── End-to-end scenario ────────────────────────────────────────────────────

#[test]
fn combined_mode_keeps_sentiment_words_and_masks_entities() {
    let pipeline = pipeline();
    // Mixed draws: one non-sentiment token falls under the default drop
    // rate, every Laplace sample stays above the -0.5 removal threshold.
    let mut noise = ScriptedNoise::new(vec![0.37, 0.92, 0.05, 0.81], vec![-0.4, 1.7, 0.2]);
    let out = pipeline
        .apply(
            "I am happy today but John Doe is worried about $500",
            "combined",
            &mut noise,
        )
        .unwrap();
    assert!(!out.is_empty());
    assert!(out.contains("happy"), "sentiment word dropped: {out}");
    assert!(out.contains("worried"), "sentiment word dropped: {out}");
    assert!(!out.contains("John Doe"));
    assert!(!out.contains("$500"));
}

#[test]
fn entities_stay_masked_under_arbitrary_noise() {
    let pipeline = pipeline();
    for seed in 0..20 {
        let out = pipeline.apply_mode(CLINICAL_NOTE, Mode::Combined, &mut SeededNoise::new(seed));
        assert!(!out.contains("John Smith"), "seed {seed}: name leaked: {out}");
        assert!(!out.contains("$500"), "seed {seed}: amount leaked: {out}");
        assert!(!out.contains("Baker Street"), "seed {seed}: address leaked: {out}");
    }
}

#[test]
fn empty_input_is_valid_for_every_mode() {
    let pipeline = pipeline();
    for mode in [Mode::TokenDropping, Mode::DifferentialPrivacy, Mode::Combined] {
        let out = pipeline.apply_mode("", mode, &mut SeededNoise::new(3));
        assert!(out.is_empty());
    }
}
