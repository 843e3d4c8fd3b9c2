//! Theme tokens for the widget surfaces.
//!
//! Tokens are utility class names; the host page supplies the stylesheet.

/// Light or dark theme preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light theme mode.
    #[default]
    Light,
    /// Dark theme mode.
    Dark,
}

impl ThemeMode {
    /// String identifier used in CSS datasets.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Interpret a raw `theme` value; anything but `dark` is light.
    #[must_use]
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// Token set for this mode.
    #[must_use]
    pub const fn tokens(self) -> &'static ThemeTokens {
        match self {
            Self::Light => &LIGHT,
            Self::Dark => &DARK,
        }
    }
}

/// Class tokens swapped between light and dark surfaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeTokens {
    /// Background and foreground of the widget root.
    pub surface: &'static str,
    /// Card and chip background.
    pub raised: &'static str,
    /// Secondary text (prices, captions).
    pub muted: &'static str,
    /// Table borders and row dividers.
    pub border: &'static str,
}

/// Light surface tokens.
pub const LIGHT: ThemeTokens = ThemeTokens {
    surface: "bg-white text-slate-900",
    raised: "bg-slate-100",
    muted: "text-slate-600",
    border: "border-slate-200",
};

/// Dark surface tokens.
pub const DARK: ThemeTokens = ThemeTokens {
    surface: "bg-slate-950 text-white",
    raised: "bg-slate-900",
    muted: "text-slate-400",
    border: "border-slate-800",
};

/// Class for a price change: green when rising, red when falling, muted when flat.
#[must_use]
pub fn change_class(change_percent: f64) -> &'static str {
    if change_percent > 0.0 {
        "text-emerald-600"
    } else if change_percent < 0.0 {
        "text-rose-600"
    } else {
        "text-slate-500"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_mode_to_str() {
        assert_eq!(ThemeMode::Light.as_str(), "light");
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
    }

    #[test]
    fn only_dark_selects_dark() {
        assert_eq!(ThemeMode::from_param(Some("dark")), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_param(Some("light")), ThemeMode::Light);
        assert_eq!(ThemeMode::from_param(Some("Dark")), ThemeMode::Light);
        assert_eq!(ThemeMode::from_param(None), ThemeMode::Light);
    }

    #[test]
    fn dark_swaps_surface_tokens() {
        assert_eq!(ThemeMode::Dark.tokens().surface, "bg-slate-950 text-white");
        assert_eq!(ThemeMode::Light.tokens().surface, "bg-white text-slate-900");
        assert_ne!(ThemeMode::Dark.tokens().raised, ThemeMode::Light.tokens().raised);
    }

    #[test]
    fn change_class_tracks_sign() {
        assert_eq!(change_class(1.2), "text-emerald-600");
        assert_eq!(change_class(-0.1), "text-rose-600");
        assert_eq!(change_class(0.0), "text-slate-500");
    }
}
