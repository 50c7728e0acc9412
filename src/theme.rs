use leptos::prelude::*;
use serde::{Deserialize, Serialize};

pub const THEME_COOKIE: &str = "portfolio-theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    #[default]
    Dark,
}

impl ColorMode {
    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, ColorMode::Dark)
    }

    /// Find the theme cookie in a `Cookie` header (or `document.cookie`).
    pub fn from_cookie_header(header: &str) -> Option<Self> {
        header
            .split(';')
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == THEME_COOKIE)
            .and_then(|(_, value)| value.trim().parse().ok())
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorMode::Light => write!(f, "light"),
            ColorMode::Dark => write!(f, "dark"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color mode: {0}")]
pub struct UnknownColorMode(pub String);

impl std::str::FromStr for ColorMode {
    type Err = UnknownColorMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            _ => Err(UnknownColorMode(s.to_string())),
        }
    }
}

/// Page-wide color mode. Readers subscribe through `mode`; their
/// subscription ends when the reading owner is disposed.
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    pub mode: ReadSignal<ColorMode>,
    pub set_mode: WriteSignal<ColorMode>,
}

/// Create the theme signal from the request cookie (server) or
/// `document.cookie` (browser) and provide it to the tree.
pub fn provide_theme() -> ThemeContext {
    let (mode, set_mode) = signal(initial_mode());
    let ctx = ThemeContext { mode, set_mode };
    provide_context(ctx);
    ctx
}

#[cfg(feature = "ssr")]
fn initial_mode() -> ColorMode {
    use axum::http::{header::COOKIE, request::Parts};

    use_context::<Parts>()
        .and_then(|parts| {
            parts
                .headers
                .get_all(COOKIE)
                .iter()
                .filter_map(|v| v.to_str().ok())
                .find_map(ColorMode::from_cookie_header)
        })
        .unwrap_or_default()
}

#[cfg(all(not(feature = "ssr"), target_arch = "wasm32"))]
fn initial_mode() -> ColorMode {
    ColorMode::from_cookie_header(&cookie::read()).unwrap_or_default()
}

#[cfg(all(not(feature = "ssr"), not(target_arch = "wasm32")))]
fn initial_mode() -> ColorMode {
    ColorMode::default()
}

/// Remember the choice for a year.
pub fn persist(mode: ColorMode) {
    #[cfg(target_arch = "wasm32")]
    cookie::write(&format!(
        "{THEME_COOKIE}={mode}; path=/; max-age=31536000; SameSite=Lax"
    ));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = mode;
}

#[cfg(target_arch = "wasm32")]
mod cookie {
    use leptos::wasm_bindgen::prelude::wasm_bindgen;

    #[wasm_bindgen(inline_js = "
        export function read_cookie() { return document.cookie; }
        export function write_cookie(value) { document.cookie = value; }
    ")]
    extern "C" {
        #[wasm_bindgen(js_name = read_cookie)]
        pub fn read() -> String;
        #[wasm_bindgen(js_name = write_cookie)]
        pub fn write(value: &str);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_mode_from_str_case_insensitive() {
        assert_eq!("light".parse::<ColorMode>().unwrap(), ColorMode::Light);
        assert_eq!("DARK".parse::<ColorMode>().unwrap(), ColorMode::Dark);
        assert_eq!(
            "sepia".parse::<ColorMode>(),
            Err(UnknownColorMode("sepia".to_string()))
        );
    }

    #[test]
    fn color_mode_display_roundtrip() {
        for mode in [ColorMode::Light, ColorMode::Dark] {
            assert_eq!(mode.to_string().parse::<ColorMode>().unwrap(), mode);
        }
    }

    #[test]
    fn default_is_dark() {
        assert_eq!(ColorMode::default(), ColorMode::Dark);
        assert!(ColorMode::default().is_dark());
    }

    #[test]
    fn toggle_flips() {
        assert_eq!(ColorMode::Dark.toggled(), ColorMode::Light);
        assert_eq!(ColorMode::Light.toggled().toggled(), ColorMode::Light);
    }

    #[test]
    fn cookie_header_parsing() {
        assert_eq!(
            ColorMode::from_cookie_header("session=abc; portfolio-theme=light; x=1"),
            Some(ColorMode::Light)
        );
        assert_eq!(
            ColorMode::from_cookie_header("portfolio-theme=dark"),
            Some(ColorMode::Dark)
        );
        assert_eq!(ColorMode::from_cookie_header("other-theme=light"), None);
        assert_eq!(ColorMode::from_cookie_header("portfolio-theme=neon"), None);
        assert_eq!(ColorMode::from_cookie_header(""), None);
    }

    #[test]
    fn context_signal_notifies_readers() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = provide_theme();
            assert_eq!(ctx.mode.get_untracked(), ColorMode::Dark);
            ctx.set_mode.set(ColorMode::Light);
            assert_eq!(ctx.mode.get_untracked(), ColorMode::Light);
            assert_eq!(
                use_context::<ThemeContext>().map(|t| t.mode.get_untracked()),
                Some(ColorMode::Light)
            );
        });
    }
}
