//! Markup dialects for rendering reports.
//!
//! A [`ReportFormatter`] turns a caption and labeled items into one markup
//! dialect. Formatters are pure string templates without state.
//!
//! | Dialect      | Caption              | Item                           | List          |
//! |--------------|----------------------|--------------------------------|---------------|
//! | [`Html`]     | `<h1>{caption}</h1>` | `<li><b>{label}</b>: {value}`  | `<ul>`/`</ul>`|
//! | [`Markdown`] | `## {caption}\n\n`   | ` * **{label}**: {value}\n\n`  | none          |

use std::{fmt::Debug, str::FromStr};

use serde::{Deserialize, Serialize, de::IntoDeserializer};

/// String templating rules for one markup dialect.
pub trait ReportFormatter: Debug + Send + Sync {
    /// Renders the report heading.
    fn make_caption(&self, caption: &str) -> String;

    /// Renders one labeled list item.
    fn make_item(&self, label: &str, value: &str) -> String;

    /// Markup opening the item list.
    fn begin_list(&self) -> &'static str;

    /// Markup closing the item list.
    fn end_list(&self) -> &'static str;
}

/// HTML fragment dialect.
///
/// Items are emitted as `<li>` without a closing `</li>`. Existing consumers
/// rely on this exact byte layout, so the tag stays unclosed.
///
/// ```
/// use weather_report::formatter::{Html, ReportFormatter};
///
/// assert_eq!(Html.make_caption("Median"), "<h1>Median</h1>");
/// assert_eq!(Html.make_item("Humidity", "20"), "<li><b>Humidity</b>: 20");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Html;

impl ReportFormatter for Html {
    fn make_caption(&self, caption: &str) -> String {
        format!("<h1>{caption}</h1>")
    }

    // TODO: close the <li> once downstream consumers accept `</li>`
    fn make_item(&self, label: &str, value: &str) -> String {
        format!("<li><b>{label}</b>: {value}")
    }

    fn begin_list(&self) -> &'static str {
        "<ul>"
    }

    fn end_list(&self) -> &'static str {
        "</ul>"
    }
}

/// Markdown fragment dialect.
///
/// ```
/// use weather_report::formatter::{Markdown, ReportFormatter};
///
/// assert_eq!(Markdown.make_caption("Median"), "## Median\n\n");
/// assert_eq!(Markdown.make_item("Humidity", "20"), " * **Humidity**: 20\n\n");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Markdown;

impl ReportFormatter for Markdown {
    fn make_caption(&self, caption: &str) -> String {
        format!("## {caption}\n\n")
    }

    fn make_item(&self, label: &str, value: &str) -> String {
        format!(" * **{label}**: {value}\n\n")
    }

    fn begin_list(&self) -> &'static str {
        ""
    }

    fn end_list(&self) -> &'static str {
        ""
    }
}

/// Selects one of the available formatters by name.
///
/// Parsed and (de)serialized under the same `snake_case` names
/// (`"html"`, `"markdown"`).
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatKind {
    #[default]
    Html,
    Markdown,
}

impl FormatKind {
    /// All selectable formatters.
    pub const ALL: [Self; 2] = [Self::Html, Self::Markdown];

    /// Returns the shared instance of the selected formatter.
    #[must_use]
    pub fn formatter(self) -> &'static dyn ReportFormatter {
        match self {
            Self::Html => &Html,
            Self::Markdown => &Markdown,
        }
    }
}

impl FromStr for FormatKind {
    type Err = serde::de::value::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::deserialize(s.into_deserializer())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_templates() {
        assert_eq!(Html.make_caption("Mean and Std"), "<h1>Mean and Std</h1>");
        assert_eq!(
            Html.make_item("Temperature", "4±2"),
            "<li><b>Temperature</b>: 4±2"
        );
        assert_eq!(Html.begin_list(), "<ul>");
        assert_eq!(Html.end_list(), "</ul>");
    }

    #[test]
    fn test_html_item_is_unclosed() {
        assert!(!Html.make_item("Humidity", "1").contains("</li>"));
    }

    #[test]
    fn test_markdown_templates() {
        assert_eq!(Markdown.make_caption("Median"), "## Median\n\n");
        assert_eq!(
            Markdown.make_item("Temperature", "2"),
            " * **Temperature**: 2\n\n"
        );
        assert_eq!(Markdown.begin_list(), "");
        assert_eq!(Markdown.end_list(), "");
    }

    #[test]
    fn test_kind_resolves_formatter() {
        assert_eq!(FormatKind::Html.formatter().begin_list(), "<ul>");
        assert_eq!(FormatKind::Markdown.formatter().make_caption("x"), "## x\n\n");
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("html".parse::<FormatKind>().ok(), Some(FormatKind::Html));
        assert_eq!(
            "markdown".parse::<FormatKind>().ok(),
            Some(FormatKind::Markdown)
        );
        assert!("Html".parse::<FormatKind>().is_err());
        assert!("latex".parse::<FormatKind>().is_err());
    }

    #[test]
    fn test_kind_from_str_matches_serde_name() {
        for kind in FormatKind::ALL {
            let serialized = serde_json::to_string(&kind).unwrap();
            let name = serialized.trim_matches('"');
            assert_eq!(name.parse::<FormatKind>().ok(), Some(kind));
        }
    }

    #[test]
    fn test_formatter_debug_name() {
        assert_eq!(format!("{:?}", FormatKind::Html.formatter()), "Html");
        assert_eq!(format!("{:?}", FormatKind::Markdown.formatter()), "Markdown");
    }

    #[test]
    fn test_kind_serde() {
        assert_eq!(
            serde_json::to_string(&FormatKind::Markdown).unwrap(),
            "\"markdown\""
        );
        assert_eq!(
            serde_json::from_str::<FormatKind>("\"html\"").unwrap(),
            FormatKind::Html
        );
    }
}
