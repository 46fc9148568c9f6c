//! Knowledge registries - themes, moods and the layout catalog.
//!
//! The built-in tables are validated once by [`Registry::load`] and are
//! read-only afterwards. Every closed slug has exactly one entry, so the
//! typed getters cannot miss.

mod errors;
mod layouts;
mod moods;
mod palette_entry;
mod themes;

pub use errors::RegistryError;
pub use layouts::LayoutDefinition;
pub use moods::MoodDefinition;
pub use themes::{PhraseTemplate, ThemeDefinition, PHRASE_TEMPLATE_LINES};

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

use crate::domain::foundation::{LayoutArchetype, MoodSlug, ThemeSlug, UnknownSlug};

use layouts::LAYOUT_ENTRIES;
use moods::MOOD_ENTRIES;
use themes::THEME_ENTRIES;

const THEME_PALETTE_COLORS: std::ops::RangeInclusive<usize> = 3..=4;
const LAYOUT_PALETTE_COLORS: std::ops::RangeInclusive<usize> = 2..=3;

static SHARED: Lazy<Arc<Registry>> = Lazy::new(|| match Registry::load() {
    Ok(registry) => Arc::new(registry),
    Err(err) => panic!("built-in registry tables are defective: {}", err),
});

/// Immutable lookup tables for themes, moods and layouts.
#[derive(Debug, Clone)]
pub struct Registry {
    themes: HashMap<ThemeSlug, ThemeDefinition>,
    moods: HashMap<MoodSlug, MoodDefinition>,
    layouts: HashMap<LayoutArchetype, LayoutDefinition>,
}

impl Registry {
    /// Builds and validates the registry from the built-in tables.
    pub fn load() -> Result<Self, RegistryError> {
        let themes = THEME_ENTRIES
            .iter()
            .map(|entry| {
                entry.to_definition().map_err(|e| RegistryError::InvalidColor {
                    kind: "theme",
                    slug: entry.slug.to_string(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let moods = MOOD_ENTRIES
            .iter()
            .map(|entry| {
                entry
                    .to_definition()
                    .map_err(|e| RegistryError::invalid("mood", entry.slug, e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let layouts = LAYOUT_ENTRIES
            .iter()
            .map(|entry| {
                entry.to_definition().map_err(|e| RegistryError::InvalidColor {
                    kind: "layout",
                    slug: entry.archetype.to_string(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_definitions(themes, moods, layouts)
    }

    /// Builds a registry from arbitrary definitions, applying the same checks as `load`.
    pub fn from_definitions(
        themes: Vec<ThemeDefinition>,
        moods: Vec<MoodDefinition>,
        layouts: Vec<LayoutDefinition>,
    ) -> Result<Self, RegistryError> {
        for theme in &themes {
            Self::validate_theme(theme)?;
        }
        for mood in &moods {
            if mood.allowed_layouts.is_empty() {
                return Err(RegistryError::invalid("mood", mood.slug, "no allowed layouts"));
            }
        }
        for layout in &layouts {
            Self::validate_layout(layout)?;
        }

        Ok(Self {
            themes: index("theme", ThemeSlug::all(), themes, |t| t.slug)?,
            moods: index("mood", MoodSlug::all(), moods, |m| m.slug)?,
            layouts: index("layout", LayoutArchetype::all(), layouts, |l| l.archetype)?,
        })
    }

    /// Process-wide registry built from the built-in tables.
    ///
    /// # Panics
    ///
    /// Panics on first use if the built-in tables fail validation.
    pub fn shared() -> Arc<Registry> {
        Arc::clone(&SHARED)
    }

    pub fn theme(&self, slug: ThemeSlug) -> &ThemeDefinition {
        self.themes
            .get(&slug)
            .expect("registry validated at load: every theme has a definition")
    }

    pub fn mood(&self, slug: MoodSlug) -> &MoodDefinition {
        self.moods
            .get(&slug)
            .expect("registry validated at load: every mood has a definition")
    }

    pub fn layout(&self, archetype: LayoutArchetype) -> &LayoutDefinition {
        self.layouts
            .get(&archetype)
            .expect("registry validated at load: every layout has a definition")
    }

    /// Resolves a theme from a user-facing slug.
    pub fn lookup_theme(&self, slug: &str) -> Result<&ThemeDefinition, UnknownSlug> {
        Ok(self.theme(slug.parse()?))
    }

    /// Resolves a mood from a user-facing slug.
    pub fn lookup_mood(&self, slug: &str) -> Result<&MoodDefinition, UnknownSlug> {
        Ok(self.mood(slug.parse()?))
    }

    /// Returns the catalog description of a layout.
    pub fn describe_layout(&self, archetype: LayoutArchetype) -> &'static str {
        self.layout(archetype).description
    }

    fn validate_theme(theme: &ThemeDefinition) -> Result<(), RegistryError> {
        let slug = theme.slug;
        if !THEME_PALETTE_COLORS.contains(&theme.palette.len()) {
            return Err(RegistryError::invalid(
                "theme",
                slug,
                format!("palette must have 3-4 colors, has {}", theme.palette.len()),
            ));
        }
        if theme.default_layouts.is_empty() {
            return Err(RegistryError::invalid("theme", slug, "no default layouts"));
        }
        if theme.headline_lexicon.iter().all(|h| h.trim().is_empty()) {
            return Err(RegistryError::invalid("theme", slug, "empty headline lexicon"));
        }
        if theme.phrase_templates.is_empty() {
            return Err(RegistryError::invalid("theme", slug, "no phrase templates"));
        }
        if theme
            .phrase_templates
            .iter()
            .flatten()
            .any(|line| line.trim().is_empty())
        {
            return Err(RegistryError::invalid("theme", slug, "blank phrase template line"));
        }
        Ok(())
    }

    fn validate_layout(layout: &LayoutDefinition) -> Result<(), RegistryError> {
        let archetype = layout.archetype;
        if !LAYOUT_PALETTE_COLORS.contains(&layout.palette.len()) {
            return Err(RegistryError::invalid(
                "layout",
                archetype,
                format!("palette must have 2-3 colors, has {}", layout.palette.len()),
            ));
        }
        if layout.accents.is_empty() {
            return Err(RegistryError::invalid("layout", archetype, "no accents"));
        }
        if layout.description.trim().is_empty() {
            return Err(RegistryError::invalid("layout", archetype, "empty description"));
        }
        Ok(())
    }
}

/// Keys definitions by slug, rejecting duplicates and gaps.
fn index<K, V>(
    kind: &'static str,
    members: &[K],
    definitions: Vec<V>,
    key: impl Fn(&V) -> K,
) -> Result<HashMap<K, V>, RegistryError>
where
    K: Copy + Eq + Hash + std::fmt::Display,
{
    let mut map = HashMap::with_capacity(definitions.len());
    for definition in definitions {
        let slug = key(&definition);
        if map.insert(slug, definition).is_some() {
            return Err(RegistryError::DuplicateEntry {
                kind,
                slug: slug.to_string(),
            });
        }
    }
    if let Some(missing) = members.iter().find(|m| !map.contains_key(*m)) {
        return Err(RegistryError::MissingEntry {
            kind,
            slug: missing.to_string(),
        });
    }
    Ok(map)
}
