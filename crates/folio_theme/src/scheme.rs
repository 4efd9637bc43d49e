//! Light/dark color scheme

use std::fmt::{Display, Formatter};

/// The two appearance states of the application
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    /// The opposite scheme
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Whether this is the dark scheme
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Build a scheme from the persisted dark-mode flag
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Stable id for logging and serialization
    pub fn id(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl Display for ColorScheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_both_ways() {
        assert_eq!(ColorScheme::Light.toggle(), ColorScheme::Dark);
        assert_eq!(ColorScheme::Dark.toggle(), ColorScheme::Light);
    }

    #[test]
    fn dark_flag_round_trip() {
        assert_eq!(ColorScheme::from_dark_flag(true), ColorScheme::Dark);
        assert_eq!(ColorScheme::from_dark_flag(false), ColorScheme::Light);
        assert!(ColorScheme::Dark.is_dark());
        assert!(!ColorScheme::Light.is_dark());
    }
}
