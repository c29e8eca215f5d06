// SPDX-License-Identifier: MPL-2.0
//! Theme mode preference and its mapping onto Iced themes.

use iced::Theme;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Default to dark when detection fails
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    #[must_use]
    pub fn theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_map_to_matching_theme() {
        assert!(matches!(ThemeMode::Light.theme(), Theme::Light));
        assert!(matches!(ThemeMode::Dark.theme(), Theme::Dark));
    }

    #[test]
    fn default_mode_follows_system() {
        assert_eq!(ThemeMode::default(), ThemeMode::System);
    }
}
