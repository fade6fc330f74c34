//! Card and README section rendering using Handlebars.
//!
//! Both templates are compiled into the binary. Layout decisions that need
//! arithmetic (description split, card height, pill width) are made here and
//! passed in as plain values.

mod error;
mod renderer;

pub use error::TemplateError;
pub use renderer::{create_handlebars_registry, TemplateRenderer};

/// Characters per description line on a card.
pub const DESCRIPTION_LINE_CHARS: usize = 50;

/// Returns the file name of a repository's card.
///
/// Format: "{name}-card.svg"
#[must_use]
pub fn card_file_name(name: &str) -> String {
    format!("{name}-card.svg")
}

/// Splits a description into the two card lines.
///
/// Line one holds characters 1-50, line two characters 51-100. Anything
/// beyond is dropped. Counting is by `char`, not rendered width.
#[must_use]
pub fn split_description(description: &str) -> (String, String) {
    let first = description.chars().take(DESCRIPTION_LINE_CHARS).collect();
    let second = description
        .chars()
        .skip(DESCRIPTION_LINE_CHARS)
        .take(DESCRIPTION_LINE_CHARS)
        .collect();
    (first, second)
}
