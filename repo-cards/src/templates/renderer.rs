//! Template renderer.

use super::{card_file_name, split_description, TemplateError};
use crate::cards::{RepositoryInfo, Showcase};
use crate::config::{Settings, Theme};
use handlebars::Handlebars;
use serde_json::{json, Value};

const CARD_TEMPLATE: &str = include_str!("card.svg.hbs");
const SECTION_TEMPLATE: &str = include_str!("section.md.hbs");

const CARD_WIDTH: u32 = 400;
const CARD_HEIGHT: u32 = 140;

/// Extra height for cards with an embedded image.
const IMAGE_EXTENSION: u32 = 170;

/// Right edge of the dev-state pill.
const DEV_STATE_RIGHT: u32 = 380;

/// Separator between tags on a card.
const TAG_SEPARATOR: &str = " • ";

/// Creates a configured Handlebars registry.
///
/// The registry is configured with:
/// - XML escaping (output is SVG or inline HTML)
/// - Strict mode (catches missing variables)
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();
    hbs.register_escape_fn(xml_escape);
    hbs.set_strict_mode(true);
    hbs
}

/// Escapes the five XML special characters.
fn xml_escape(data: &str) -> String {
    let mut escaped = String::with_capacity(data.len());
    for c in data.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Width of the dev-state pill: 7px per character plus padding.
fn dev_state_pill_width(state: &str) -> u32 {
    u32::try_from(state.chars().count())
        .unwrap_or(u32::MAX)
        .saturating_mul(7)
        .saturating_add(16)
}

/// Colours for one card theme.
fn theme_palette(theme: Theme) -> Value {
    match theme {
        Theme::Light => json!({
            "background": "#ffffff",
            "border": "#e1e4e8",
            "title": "#0366d6",
            "text": "#586069",
            "muted": "#6a737d"
        }),
        Theme::Dark => json!({
            "background": "#0d1117",
            "border": "#30363d",
            "title": "#58a6ff",
            "text": "#c9d1d9",
            "muted": "#8b949e"
        }),
    }
}

/// Renderer for repository cards and the README section.
pub struct TemplateRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    /// Creates a new template renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlebars: create_handlebars_registry(),
        }
    }

    /// Renders the SVG card for one repository.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_card(
        &self,
        info: &RepositoryInfo,
        settings: &Settings,
    ) -> Result<String, TemplateError> {
        let (description_first, description_second) = split_description(&info.description);

        let tags = (settings.show_tags && !info.tags.is_empty())
            .then(|| info.tags.join(TAG_SEPARATOR));

        let height = if info.image_url.is_some() {
            CARD_HEIGHT + IMAGE_EXTENSION
        } else {
            CARD_HEIGHT
        };

        let dev_state_width = info.dev_state.as_deref().map_or(0, dev_state_pill_width);

        let data = json!({
            "width": CARD_WIDTH,
            "height": height,
            "url": info.url,
            "name": info.name,
            "dev_state": info.dev_state,
            "dev_state_width": dev_state_width,
            "dev_state_x": DEV_STATE_RIGHT.saturating_sub(dev_state_width),
            "dev_state_text_x": DEV_STATE_RIGHT.saturating_sub(dev_state_width / 2),
            "tags": tags,
            "description_first": description_first,
            "description_second": description_second,
            "language": info.language,
            "language_color": info.language_color,
            "stars": info.stars,
            "forks": info.forks,
            "accent_color": info.accent_color,
            "image_url": info.image_url,
            "theme": theme_palette(settings.theme),
        });

        let svg = self.render_template(CARD_TEMPLATE, &data)?;
        Ok(svg.trim().to_string())
    }

    /// Renders the markdown section listing every card.
    ///
    /// `card_base` is the path prefix, relative to the document, under which
    /// card files are published.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_section(
        &self,
        showcase: &Showcase,
        settings: &Settings,
        card_base: &str,
    ) -> Result<String, TemplateError> {
        let card_entries = |repositories: &[RepositoryInfo]| -> Vec<Value> {
            repositories
                .iter()
                .map(|info| {
                    json!({
                        "name": info.name,
                        "url": info.url,
                        "src": card_path(card_base, &info.name),
                    })
                })
                .collect()
        };

        let data = match showcase {
            Showcase::Flat(repositories) => json!({
                "categories": [],
                "cards": card_entries(repositories),
            }),
            Showcase::Categorized(groups) => {
                let categories: Vec<Value> = groups
                    .iter()
                    .map(|group| {
                        let description = if settings.show_category_descriptions {
                            group.config.description.as_deref()
                        } else {
                            None
                        };
                        json!({
                            "name": group.name,
                            "icon": group.config.icon,
                            "description": description,
                            "cards": card_entries(&group.repositories),
                        })
                    })
                    .collect();
                json!({
                    "categories": categories,
                    "cards": [],
                })
            }
        };

        let section = self.render_template(SECTION_TEMPLATE, &data)?;
        Ok(section.trim().to_string())
    }

    /// Renders a template with the given data.
    fn render_template(&self, template: &str, data: &Value) -> Result<String, TemplateError> {
        Ok(self.handlebars.render_template(template, data)?)
    }
}

/// Joins the card base path and the card file name with a forward slash.
fn card_path(card_base: &str, name: &str) -> String {
    let base = card_base.trim_end_matches(['/', '\\']);
    if base.is_empty() {
        card_file_name(name)
    } else {
        format!("{}/{}", base.replace('\\', "/"), card_file_name(name))
    }
}
