//! Brief renderer - turns a specification into plain-text art direction.

use crate::domain::palette::ColorAnalysis;
use crate::domain::registry::Registry;

use super::DesignSpecification;

const SLOT_NAMES: [&str; 3] = ["Primary", "Secondary", "Accent"];

/// Renders the art-direction brief handed to the image generator.
///
/// The registry supplies the layout and mood descriptions; everything else
/// comes from the specification itself.
pub fn render_brief(spec: &DesignSpecification, registry: &Registry) -> String {
    let theme = registry.theme(spec.theme());
    let mood = registry.mood(spec.mood());
    let typography = spec.typography();
    let constraints = spec.constraints();

    let mut brief = String::new();
    brief.push_str(&format!(
        "Create a gallery-quality affirmation art print: \"{}\"\n\n",
        spec.headline()
    ));

    brief.push_str("DESIGN DIRECTION:\n");
    brief.push_str(&format!(
        "- Theme: {} ({}), {} energy\n",
        spec.theme(),
        theme.emotion,
        spec.energy_level()
    ));
    brief.push_str(&format!("- Mood: {}, {}\n", spec.mood(), mood.description));
    brief.push_str(&format!(
        "- Layout: {}, {}\n",
        spec.layout_archetype(),
        registry.describe_layout(spec.layout_archetype())
    ));
    let headline_case = if spec.energy_level().is_assertive() {
        "uppercase with generous tracking"
    } else {
        "sentence case"
    };
    brief.push_str(&format!(
        "- Headline typography: {}, {}\n",
        typography.headline.description(),
        headline_case
    ));
    brief.push_str(&format!(
        "- Supporting typography: {}\n\n",
        typography.support.description()
    ));

    let palette = spec.palette();
    brief.push_str(&format!(
        "PALETTE ({}, {} contrast):\n",
        palette.name, palette.contrast
    ));
    for (slot, color) in SLOT_NAMES.iter().zip(palette.hex.iter()) {
        brief.push_str(&format!(
            "- {}: {} ({}, {})\n",
            slot,
            color,
            ColorAnalysis::describe(color),
            ColorAnalysis::temperature(color)
        ));
    }
    brief.push('\n');

    if !spec.accents().is_empty() {
        brief.push_str("VISUAL ACCENTS:\n");
        for accent in spec.accents() {
            brief.push_str(&format!("- {}\n", accent));
        }
        brief.push('\n');
    }

    brief.push_str("SUPPORTING COPY:\n");
    for line in spec.supporting_phrases() {
        brief.push_str(&format!("- {}\n", line));
    }
    brief.push('\n');

    let variants = spec.variants();
    brief.push_str(&format!(
        "VARIANTS: style {}, accent {}, palette {}, copy {}, texture {}\n\n",
        variants.style, variants.accent, variants.palette, variants.copy, variants.texture
    ));

    brief.push_str("OUTPUT REQUIREMENTS:\n");
    brief.push_str(&format!(
        "- {} aspect ratio at {} DPI, edge-to-edge\n",
        constraints.ratio, constraints.dpi
    ));
    brief.push_str("- The affirmation text must be clearly legible\n");
    brief.push_str(&format!("- Avoid: {}", constraints.ban.join(", ")));

    brief
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::keywords::KeywordDetector;
    use crate::domain::spec::{BuildSpecRequest, SpecBuilder};
    use crate::ports::Clock;
    use chrono::{DateTime, TimeZone, Utc};
    use std::sync::Arc;

    struct FixedClock;

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            Utc.timestamp_millis_opt(1_700_000_000_000).unwrap()
        }
    }

    fn build(request: BuildSpecRequest) -> (DesignSpecification, Arc<Registry>) {
        let registry = Registry::shared();
        let builder = SpecBuilder::new(
            registry.clone(),
            KeywordDetector::default(),
            Arc::new(FixedClock),
        );
        (builder.build(&request).unwrap(), registry)
    }

    #[test]
    fn brief_names_headline_layout_and_palette() {
        let (spec, registry) = build(
            BuildSpecRequest::new("confidence", "minimalist")
                .with_seed(42u64)
                .with_headline("I AM READY"),
        );
        let brief = render_brief(&spec, &registry);

        assert!(brief.starts_with("Create a gallery-quality affirmation art print: \"I AM READY\""));
        assert!(brief.contains(registry.describe_layout(spec.layout_archetype())));
        for color in &spec.palette().hex {
            assert!(brief.contains(color.as_str()));
        }
        assert!(brief.contains("- Primary: #1a1a1a"));
    }

    #[test]
    fn brief_lists_every_supporting_line_and_accent() {
        let (spec, registry) = build(
            BuildSpecRequest::new("peace", "coastal")
                .with_seed("tide")
                .with_keywords("sea shells and a lighthouse"),
        );
        let brief = render_brief(&spec, &registry);

        for line in spec.supporting_phrases() {
            assert!(brief.contains(&format!("- {}", line)));
        }
        for accent in spec.accents() {
            assert!(brief.contains(accent.as_str()));
        }
    }

    #[test]
    fn brief_ends_with_constraints() {
        let (spec, registry) = build(BuildSpecRequest::new("joy", "vibrant").with_seed(1u64));
        let brief = render_brief(&spec, &registry);

        assert!(brief.contains("- 4:5 aspect ratio at 300 DPI, edge-to-edge"));
        assert!(brief.ends_with("- Avoid: neon, low_legibility, overcrowded_layout"));
    }

    #[test]
    fn assertive_energy_sets_uppercase_headline() {
        let (spec, registry) = build(BuildSpecRequest::new("strength", "monochrome").with_seed(3u64));
        let brief = render_brief(&spec, &registry);
        assert!(spec.energy_level().is_assertive());
        assert!(brief.contains("uppercase with generous tracking"));
    }

    #[test]
    fn brief_sections_follow_a_fixed_order() {
        let (spec, registry) = build(
            BuildSpecRequest::new("peace", "coastal")
                .with_seed(9u64)
                .with_keywords("sea shells"),
        );
        let brief = render_brief(&spec, &registry);

        let positions: Vec<usize> = [
            "DESIGN DIRECTION:\n",
            "PALETTE (",
            "VISUAL ACCENTS:\n",
            "SUPPORTING COPY:\n",
            "VARIANTS: style",
            "OUTPUT REQUIREMENTS:\n",
        ]
        .iter()
        .map(|heading| brief.find(heading).unwrap())
        .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(brief.contains("\"\n\nDESIGN DIRECTION:\n- Theme: peace"));
        assert!(!brief.contains("\n\n\n"));
    }
}
