//! The fixed catalogue of art mediums the helper knows about.
//!
//! The enum keeps the public API free of loose strings: front-ends pass a
//! `Medium` around and only ever render the canonical lowercase name at the
//! edges (menu rows, JSON payloads, the prompt itself). A completion request
//! is issued exclusively for one of these five values, so parsing happens
//! *before* anything touches the network.
//!
//! # Example
//!
//! ```rust
//! use art_helper_core::medium::Medium;
//!
//! assert_eq!("Watercolor".parse::<Medium>().unwrap(), Medium::Watercolor);
//! assert_eq!(Medium::from_index(4), Some(Medium::ColoredPencils));
//! assert_eq!(Medium::ColoredPencils.to_string(), "colored pencils");
//! ```

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the five supported art mediums, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Medium {
    Watercolor,
    Acrylic,
    Markers,
    #[serde(rename = "colored pencils")]
    ColoredPencils,
    Oil,
}

/// Error returned when a string names none of the five mediums.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown medium: {0}")]
pub struct UnknownMedium(pub String);

impl Medium {
    /// Every medium, in the order the interactive menu lists them.
    pub const ALL: [Medium; 5] = [
        Medium::Watercolor,
        Medium::Acrylic,
        Medium::Markers,
        Medium::ColoredPencils,
        Medium::Oil,
    ];

    /// Canonical lowercase name, exactly as it appears in menus, payloads
    /// and the prompt text.
    pub fn name(&self) -> &'static str {
        match self {
            Medium::Watercolor => "watercolor",
            Medium::Acrylic => "acrylic",
            Medium::Markers => "markers",
            Medium::ColoredPencils => "colored pencils",
            Medium::Oil => "oil",
        }
    }

    /// Look up a medium by its **1-based** menu position.
    pub fn from_index(index: usize) -> Option<Medium> {
        Medium::ALL.get(index.checked_sub(1)?).copied()
    }
}

impl Display for Medium {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Medium {
    type Err = UnknownMedium;

    /// Case-insensitive lookup against the canonical names.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Medium::ALL
            .into_iter()
            .find(|medium| medium.name() == lowered)
            .ok_or_else(|| UnknownMedium(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_is_five_mediums_in_menu_order() {
        assert_eq!(Medium::ALL.len(), 5);
        assert_eq!(Medium::ALL[0], Medium::Watercolor);
        assert_eq!(Medium::ALL[4], Medium::Oil);
    }

    #[test]
    fn from_index_is_one_based() {
        assert_eq!(Medium::from_index(1), Some(Medium::Watercolor));
        assert_eq!(Medium::from_index(5), Some(Medium::Oil));
        assert_eq!(Medium::from_index(0), None);
        assert_eq!(Medium::from_index(6), None);
    }

    #[test]
    fn parse_accepts_any_casing() {
        assert_eq!("oil".parse::<Medium>().unwrap(), Medium::Oil);
        assert_eq!("OIL".parse::<Medium>().unwrap(), Medium::Oil);
        assert_eq!(
            "Colored Pencils".parse::<Medium>().unwrap(),
            Medium::ColoredPencils
        );
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "crayon".parse::<Medium>().unwrap_err();
        assert_eq!(err, UnknownMedium("crayon".into()));
    }

    #[test]
    fn serde_uses_canonical_names() {
        let json = serde_json::to_value(Medium::ColoredPencils).unwrap();
        assert_eq!(json, serde_json::json!("colored pencils"));

        let medium: Medium = serde_json::from_value(serde_json::json!("watercolor")).unwrap();
        assert_eq!(medium, Medium::Watercolor);

        assert!(serde_json::from_value::<Medium>(serde_json::json!("gouache")).is_err());
    }

    #[test]
    fn display_matches_name() {
        for medium in Medium::ALL {
            assert_eq!(medium.to_string(), medium.name());
        }
    }
}
