//! Query-string parameters that configure an embedded widget.
//!
//! # Design
//! - Parameters are derived from the raw query on every render; nothing here is cached.
//! - Parsing never fails: absent or malformed values fall back to defaults.

use crate::core::theme::ThemeMode;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode};

/// `mode` value that triggers the initial asset load.
pub const WIDGET_MODE: &str = "widget";

/// Presentation selected through the `type` parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ViewType {
    /// Responsive grid of cards.
    #[default]
    Grid,
    /// Table with a favorites column.
    Table,
    /// Horizontally scrolling strip of compact chips.
    Strip,
}

impl ViewType {
    /// Interpret a raw `type` value. Absent or empty selects the grid; unknown values fall
    /// through to the strip.
    #[must_use]
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            None | Some("" | "grid") => Self::Grid,
            Some("table") => Self::Table,
            Some(_) => Self::Strip,
        }
    }
}

/// View parameters derived from the host page URL.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct WidgetParams {
    /// Raw `mode` value, if present.
    pub mode: Option<String>,
    /// Selected presentation.
    pub view: ViewType,
    /// Asset ids to display, in the order given.
    pub requested_ids: Vec<String>,
    /// Color theme.
    pub theme: ThemeMode,
    /// Locale for copy and number formatting.
    pub locale: LocaleCode,
}

impl WidgetParams {
    /// Parse a `location.search` style query. The leading `?` is optional.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let pairs = parse_pairs(query);
        let get = |key: &str| {
            pairs
                .iter()
                .find(|(name, _)| name == key)
                .map(|(_, value)| value.as_str())
        };

        Self {
            mode: get("mode").map(ToString::to_string),
            view: ViewType::from_param(get("type")),
            requested_ids: get("assets").map(split_ids).unwrap_or_default(),
            theme: ThemeMode::from_param(get("theme")),
            locale: get("lang")
                .and_then(LocaleCode::from_lang_tag)
                .unwrap_or(DEFAULT_LOCALE),
        }
    }

    /// Whether the initial load should run for this mount.
    #[must_use]
    pub fn should_load(&self) -> bool {
        self.mode.as_deref() == Some(WIDGET_MODE)
    }
}

/// Split a comma-separated id list, dropping empty segments. Segments are not trimmed.
#[must_use]
pub fn split_ids(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter(|segment| !segment.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Decode `key=value` pairs the way `URLSearchParams` does. Repeated keys are all kept in
/// order so lookups can take the first occurrence.
#[must_use]
pub fn parse_pairs(query: &str) -> Vec<(String, String)> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    let bytes = urlencoding::decode_binary(spaced.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_for_empty_query() {
        let params = WidgetParams::from_query("");
        assert_eq!(params.view, ViewType::Grid);
        assert_eq!(params.theme, ThemeMode::Light);
        assert!(params.requested_ids.is_empty());
        assert_eq!(params.mode, None);
        assert_eq!(params.locale, LocaleCode::Fa);
        assert!(!params.should_load());
    }

    #[test]
    fn full_query_is_parsed() {
        let params = WidgetParams::from_query("?mode=widget&type=table&assets=a1,a3&theme=dark");
        assert!(params.should_load());
        assert_eq!(params.view, ViewType::Table);
        assert_eq!(
            params.requested_ids,
            vec!["a1".to_string(), "a3".to_string()]
        );
        assert_eq!(params.theme, ThemeMode::Dark);
    }

    #[test]
    fn view_type_falls_through_to_strip() {
        assert_eq!(ViewType::from_param(None), ViewType::Grid);
        assert_eq!(ViewType::from_param(Some("")), ViewType::Grid);
        assert_eq!(ViewType::from_param(Some("grid")), ViewType::Grid);
        assert_eq!(ViewType::from_param(Some("table")), ViewType::Table);
        assert_eq!(ViewType::from_param(Some("strip")), ViewType::Strip);
        assert_eq!(ViewType::from_param(Some("TABLE")), ViewType::Strip);
    }

    #[test]
    fn mode_must_match_exactly() {
        assert!(!WidgetParams::from_query("mode=Widget").should_load());
        assert!(!WidgetParams::from_query("mode=embed").should_load());
        assert!(WidgetParams::from_query("mode=widget").should_load());
    }

    #[test]
    fn first_occurrence_wins() {
        let params = WidgetParams::from_query("type=table&type=grid&theme=dark&theme=light");
        assert_eq!(params.view, ViewType::Table);
        assert_eq!(params.theme, ThemeMode::Dark);
    }

    #[test]
    fn ids_are_percent_decoded_and_empty_segments_dropped() {
        let params = WidgetParams::from_query("assets=a%2C1,,b+2,");
        assert_eq!(
            params.requested_ids,
            vec!["a".to_string(), "1".to_string(), "b 2".to_string()]
        );
        assert!(WidgetParams::from_query("assets=").requested_ids.is_empty());
    }

    #[test]
    fn ids_keep_surrounding_whitespace() {
        assert_eq!(split_ids("a1, a3"), vec!["a1".to_string(), " a3".to_string()]);
    }

    #[test]
    fn malformed_escape_keeps_raw_text() {
        let pairs = parse_pairs("theme=%zz&mode");
        assert_eq!(pairs[0], ("theme".to_string(), "%zz".to_string()));
        assert_eq!(pairs[1], ("mode".to_string(), String::new()));
    }

    #[test]
    fn invalid_utf8_escape_becomes_replacement_char() {
        let pairs = parse_pairs("assets=a%FFb&type=%E2%82");
        assert_eq!(pairs[0], ("assets".to_string(), "a\u{FFFD}b".to_string()));
        assert_eq!(pairs[1], ("type".to_string(), "\u{FFFD}".to_string()));
        assert_eq!(
            WidgetParams::from_query("assets=a%FF").requested_ids,
            vec!["a\u{FFFD}".to_string()]
        );
    }

    #[test]
    fn utf8_escapes_decode() {
        let pairs = parse_pairs("name=%D8%AF%D9%84%D8%A7%D8%B1");
        assert_eq!(pairs[0].1, "دلار");
    }

    #[test]
    fn lang_selects_locale() {
        assert_eq!(WidgetParams::from_query("lang=en").locale, LocaleCode::En);
        assert_eq!(WidgetParams::from_query("lang=en-US").locale, LocaleCode::En);
        assert_eq!(WidgetParams::from_query("lang=xx").locale, LocaleCode::Fa);
    }
}
