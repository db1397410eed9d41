//! Color theme for rendered pages

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Page color theme, applied as the `<body>` class.
///
/// Stored values are read leniently through [`Theme::from_preference`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Interpret a stored preference: only "dark" selects the dark theme
    pub fn from_preference(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("dark") {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// CSS class name used on the page body
    pub fn css_class(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

/// `localStorage` key holding a reader's theme choice in built pages
pub const PREFERENCE_KEY: &str = "darkModePreference";

/// Inline script that wires the toggle button `id` to the `<body>` class.
///
/// A stored preference is read the same way as [`Theme::from_preference`];
/// without one the page keeps `fallback`, the theme it was built with.
pub fn toggle_script(id: &str, fallback: Theme) -> String {
    format!(
        "(function(){{var key='{key}';var body=document.body;var stored=null;\
        try{{stored=localStorage.getItem(key);}}catch(e){{}}\
        var theme=stored===null?'{fallback}':(stored.trim().toLowerCase()==='dark'?'dark':'light');\
        body.className=theme;var button=document.getElementById('{id}');if(!button)return;\
        button.addEventListener('click',function(){{theme=theme==='dark'?'light':'dark';\
        body.className=theme;try{{localStorage.setItem(key,theme);}}catch(e){{}}}});}})();",
        key = PREFERENCE_KEY,
        fallback = fallback.css_class(),
    )
}

impl From<String> for Theme {
    fn from(value: String) -> Self {
        Theme::from_preference(&value)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            _ => Err(format!(
                "Invalid theme: '{}'. Valid themes are: dark, light",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle().toggle(), Theme::Dark);
    }

    #[test]
    fn test_from_preference() {
        assert_eq!(Theme::from_preference("dark"), Theme::Dark);
        assert_eq!(Theme::from_preference("DARK"), Theme::Dark);
        assert_eq!(Theme::from_preference("light"), Theme::Light);
        assert_eq!(Theme::from_preference(""), Theme::Light);
        assert_eq!(Theme::from_preference("sepia"), Theme::Light);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Theme::from_str("Light").unwrap(), Theme::Light);
        assert_eq!(Theme::from_str("dark").unwrap(), Theme::Dark);
        let err = Theme::from_str("blue").unwrap_err();
        assert!(err.contains("Invalid theme"));
    }

    #[test]
    fn test_toggle_script() {
        let script = toggle_script("theme-toggle", Theme::Light);
        assert!(script.contains("localStorage.getItem(key)"));
        assert!(script.contains("localStorage.setItem(key,theme)"));
        assert!(script.contains("var key='darkModePreference'"));
        assert!(script.contains("getElementById('theme-toggle')"));
        assert!(script.contains("stored===null?'light'"));
        assert!(script.contains("==='dark'?'dark':'light'"));
    }

    #[test]
    fn test_display_matches_css_class() {
        assert_eq!(Theme::Dark.to_string(), "dark");
        assert_eq!(Theme::Light.to_string(), "light");
    }
}
