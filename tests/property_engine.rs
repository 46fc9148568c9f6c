//! Property tests for keyword detection and the specification contract.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;

use affirmation_studio::domain::foundation::{MoodSlug, ThemeSlug};
use affirmation_studio::domain::keywords::{KeywordDetector, MatchMode, MAX_MOTIFS};
use affirmation_studio::domain::registry::Registry;
use affirmation_studio::domain::spec::{BuildSpecRequest, SpecBuilder};
use affirmation_studio::ports::Clock;

struct EpochClock;

impl Clock for EpochClock {
    fn now(&self) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(0).unwrap()
    }
}

fn builder() -> SpecBuilder {
    SpecBuilder::new(Registry::shared(), KeywordDetector::default(), Arc::new(EpochClock))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Any input yields at most three motifs, in either matching mode.
    #[test]
    fn keywords_never_exceed_three_motifs(text in ".{0,600}") {
        for mode in [MatchMode::Substring, MatchMode::WordBoundary] {
            let result = KeywordDetector::new(500, mode).detect(&text);
            prop_assert!(result.objects.len() <= MAX_MOTIFS);
            prop_assert_eq!(result.objects.is_empty(), result.category.is_none());
        }
    }

    /// Detection is a pure function of its input.
    #[test]
    fn keyword_detection_is_idempotent(text in "[a-z ]{0,80}") {
        let detector = KeywordDetector::default();
        prop_assert_eq!(detector.detect(&text), detector.detect(&text));
    }

    /// Every integer seed satisfies the output contract.
    #[test]
    fn any_integer_seed_satisfies_the_contract(
        seed in any::<u64>(),
        theme in 0usize..15,
        mood in 0usize..13,
        keywords in "[a-z ]{0,40}",
    ) {
        let theme = ThemeSlug::all()[theme];
        let mood = MoodSlug::all()[mood];
        let request = BuildSpecRequest::new(theme.to_string(), mood.to_string())
            .with_keywords(keywords)
            .with_seed(seed);

        let spec = builder().build(&request).expect("build must succeed");

        prop_assert!(spec.validate().is_ok());
        prop_assert_eq!(spec.palette().hex.len(), 3);
        prop_assert_eq!(spec.supporting_phrases().len(), 4);
        prop_assert!(spec.accents().len() <= 7);
        prop_assert!(spec.variants().in_range());

        let registry = Registry::shared();
        let theme_def = registry.theme(theme);
        let mood_def = registry.mood(mood);
        let candidates: Vec<_> = theme_def
            .default_layouts
            .iter()
            .copied()
            .filter(|layout| mood_def.allows(*layout))
            .collect();
        if candidates.is_empty() {
            prop_assert_eq!(spec.layout_archetype(), theme_def.default_layouts[0]);
        } else {
            prop_assert!(candidates.contains(&spec.layout_archetype()));
        }
    }

    /// Same seed, same specification.
    #[test]
    fn builds_are_deterministic(seed in any::<u64>()) {
        let request = BuildSpecRequest::new("clarity", "modern-serif").with_seed(seed);
        let builder = builder();
        prop_assert_eq!(builder.build(&request).unwrap(), builder.build(&request).unwrap());
    }
}
