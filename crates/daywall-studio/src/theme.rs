//! Light/dark resolution.

use std::fmt;

/// Environment variable consulted by [`ThemeSetting::System`].
pub const SYSTEM_THEME_VAR: &str = "DAYWALL_SYSTEM_THEME";

/// Decides whether the next wallpaper is dark.
pub trait ThemeResolver {
    fn is_dark(&self) -> bool;
}

/// User theme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeSetting {
    Dark,
    Light,
    /// Follow the host: `DAYWALL_SYSTEM_THEME=dark|light`, dark when unset.
    #[default]
    System,
}

impl ThemeSetting {
    /// Resolves against an explicit system value instead of the environment.
    pub fn resolve_with(self, system: Option<&str>) -> bool {
        match self {
            ThemeSetting::Dark => true,
            ThemeSetting::Light => false,
            ThemeSetting::System => match system.map(str::trim) {
                Some(v) if v.eq_ignore_ascii_case("light") => false,
                Some(v) if v.eq_ignore_ascii_case("dark") => true,
                Some(other) => {
                    log::warn!("{SYSTEM_THEME_VAR}={other:?} is not `dark` or `light`; using dark");
                    true
                }
                None => true,
            },
        }
    }
}

impl ThemeResolver for ThemeSetting {
    fn is_dark(&self) -> bool {
        let system = std::env::var(SYSTEM_THEME_VAR).ok();
        self.resolve_with(system.as_deref())
    }
}

impl fmt::Display for ThemeSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ThemeSetting::Dark => "dark",
            ThemeSetting::Light => "light",
            ThemeSetting::System => "system",
        })
    }
}
