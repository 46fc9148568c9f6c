//! End-to-end checks of the design specification engine through its public API.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use affirmation_studio::domain::foundation::{LayoutArchetype, MoodSlug, ThemeSlug};
use affirmation_studio::domain::keywords::{KeywordCategory, KeywordDetector};
use affirmation_studio::domain::registry::Registry;
use affirmation_studio::domain::sequence::{Seed, SeedOrigin};
use affirmation_studio::domain::spec::{
    BuildSpecRequest, DesignSpecification, SpecBuilder, SpecError, VariantKnobs, VariantOverrides,
    SPEC_VERSION,
};
use affirmation_studio::ports::Clock;

struct FixedClock(i64);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(self.0).unwrap()
    }
}

fn builder() -> SpecBuilder {
    SpecBuilder::new(
        Registry::shared(),
        KeywordDetector::default(),
        Arc::new(FixedClock(1_700_000_000_000)),
    )
}

fn assert_contract(spec: &DesignSpecification) {
    assert_eq!(spec.spec_version(), SPEC_VERSION);
    assert_eq!(spec.palette().hex.len(), 3);
    assert_eq!(spec.supporting_phrases().len(), 4);
    assert!(spec.accents().len() <= 7);
    assert!(!spec.headline().trim().is_empty());
    assert!(spec.variants().in_range());
    assert!(spec.validate().is_ok());
}

#[test]
fn every_theme_and_mood_combination_builds() {
    let builder = builder();
    for theme in ThemeSlug::all() {
        for mood in MoodSlug::all() {
            let request = BuildSpecRequest::new(theme.to_string(), mood.to_string())
                .with_seed(format!("{}-{}", theme, mood).as_str());
            let spec = builder
                .build(&request)
                .unwrap_or_else(|e| panic!("{} x {} failed: {}", theme, mood, e));

            assert_eq!(spec.theme(), *theme);
            assert_eq!(spec.mood(), *mood);
            assert!(LayoutArchetype::all().contains(&spec.layout_archetype()));
            assert_contract(&spec);
        }
    }
}

#[test]
fn identical_explicit_seeds_build_identical_specs() {
    let builder = builder();
    let request = BuildSpecRequest::new("abundance", "bohemian")
        .with_keywords("sunflowers and a teacup")
        .with_seed("golden hour");

    let first = builder.build(&request).unwrap();
    let second = builder.build(&request).unwrap();

    assert_eq!(first, second);
}

#[test]
fn separate_builders_agree_on_the_same_seed() {
    let request = BuildSpecRequest::new("healing", "celestial").with_seed(2024u64);
    assert_eq!(builder().build(&request).unwrap(), builder().build(&request).unwrap());
}

#[test]
fn fully_overridden_request_ignores_the_seed() {
    let request = BuildSpecRequest::new("balance", "earthy")
        .with_keywords("moon")
        .with_layout("window-arch")
        .with_palette(["#112233", "#445566", "#778899"])
        .with_headline("I AM STEADY")
        .with_phrases(["Rooted", "Level", "Calm", "Whole"]);
    let builder = builder();

    let mut specs = [1u64, 999, 0xDEAD_BEEF].map(|seed| {
        let spec = builder.build(&request.clone().with_seed(seed)).unwrap();
        let mut json = serde_json::to_value(spec).unwrap();
        json.as_object_mut().unwrap().remove("seed");
        json
    });
    let unseeded = {
        let mut json = serde_json::to_value(builder.build(&request).unwrap()).unwrap();
        let object = json.as_object_mut().unwrap();
        object.remove("seed");
        object.remove("seedOrigin");
        json
    };

    assert_eq!(specs[0], specs[1]);
    assert_eq!(specs[0], specs[2]);
    assert_eq!(specs[0]["layoutArchetype"], "window-arch");
    assert_eq!(specs[0]["styleVariant"], 0);
    assert_eq!(specs[0]["textureVariant"], 0);
    specs[0].as_object_mut().unwrap().remove("seedOrigin");
    assert_eq!(specs[0], unseeded);
}

#[test]
fn fixed_knobs_survive_full_overrides() {
    let request = BuildSpecRequest::new("balance", "earthy")
        .with_layout("window-arch")
        .with_palette(["#112233", "#445566", "#778899"])
        .with_headline("I AM STEADY")
        .with_phrases(["Rooted", "Level", "Calm", "Whole"])
        .with_variants(VariantOverrides::fixed(VariantKnobs {
            style: 1,
            accent: 2,
            palette: 0,
            copy: 3,
            texture: 1,
        }))
        .with_seed(7u64);

    let spec = builder().build(&request).unwrap();

    assert_eq!(spec.variants().copy, 3);
    assert_eq!(spec.variants().accent, 2);
}

#[test]
fn json_round_trip_preserves_the_specification() {
    let spec = builder()
        .build(
            &BuildSpecRequest::new("passion", "romantic")
                .with_keywords("roses and red wine")
                .with_seed(77u64),
        )
        .unwrap();

    let json = serde_json::to_string(&spec).unwrap();
    let parsed: DesignSpecification = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, spec);
}

#[test]
fn confidence_minimalist_seed_42() {
    let registry = Registry::shared();
    let spec = builder()
        .build(&BuildSpecRequest::new("confidence", "minimalist").with_seed(42u64))
        .unwrap();

    let theme = registry.theme(ThemeSlug::Confidence);
    let mood = registry.mood(MoodSlug::Minimalist);
    assert!(theme.headline_lexicon.contains(&spec.headline()));
    assert!(theme.default_layouts.contains(&spec.layout_archetype()));
    assert!(mood.allowed_layouts.contains(&spec.layout_archetype()));
    assert_eq!(spec.palette().hex[0].as_str(), "#1a1a1a");
}

#[test]
fn wine_by_candlelight_detects_beverages() {
    let result = KeywordDetector::default().detect("a glass of red wine by candlelight");

    assert!(result.objects[0].contains("wine glass"));
    assert!(result.objects.iter().any(|m| m.contains("candle")));
    assert_eq!(result.category, Some(KeywordCategory::Beverages));
}

#[test]
fn keyword_motifs_lead_the_accents() {
    let spec = builder()
        .build(
            &BuildSpecRequest::new("peace", "coastal")
                .with_keywords("a glass of red wine by candlelight")
                .with_seed(5u64),
        )
        .unwrap();

    assert!(spec.accents()[0].contains("wine glass"));
    assert_eq!(spec.palette().hex.len(), 3);
}

#[test]
fn two_color_custom_palette_is_malformed() {
    let err = builder()
        .build(&BuildSpecRequest::new("joy", "vibrant").with_palette(["#111", "#222"]))
        .unwrap_err();
    assert!(matches!(err, SpecError::MalformedOverride { .. }));
}

#[test]
fn unseeded_build_records_the_clock_seed() {
    let spec = builder()
        .build(&BuildSpecRequest::new("freedom", "sunset"))
        .unwrap();

    assert_eq!(spec.seed(), &Seed::Number(1_700_000_000_000));
    assert_eq!(spec.seed_origin(), SeedOrigin::Clock);
}

#[test]
fn unseeded_builds_at_the_same_instant_agree() {
    let request = BuildSpecRequest::new("focus", "monochrome");
    assert_eq!(builder().build(&request).unwrap(), builder().build(&request).unwrap());
}

#[test]
fn request_json_builds_like_the_typed_request() {
    let json = r##"{"theme":"Gratitude","mood":"boho","keywords":"coffee","seed":"morning"}"##;
    let from_json: BuildSpecRequest = serde_json::from_str(json).unwrap();
    let builder = builder();

    let spec = builder.build(&from_json).unwrap();

    assert_eq!(spec.theme(), ThemeSlug::Gratitude);
    assert_eq!(spec.mood(), MoodSlug::Bohemian);
    assert_eq!(spec.seed(), &Seed::Text("morning".to_string()));
}
