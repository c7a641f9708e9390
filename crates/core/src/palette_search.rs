//! Hex-code search over palette colors.
//!
//! The search is a substring scan done in the handler layer: every stored
//! palette is fetched and kept when any of its colors contains the query.

use crate::error::CoreError;

/// Shortest accepted search code, in characters.
pub const MIN_HEXCODE_LEN: usize = 5;
/// Longest accepted search code, in characters.
pub const MAX_HEXCODE_LEN: usize = 6;

/// Check that a search code is 5 or 6 characters long.
pub fn validate_hexcode(code: &str) -> Result<(), CoreError> {
    let len = code.chars().count();
    if (MIN_HEXCODE_LEN..=MAX_HEXCODE_LEN).contains(&len) {
        Ok(())
    } else {
        Err(CoreError::InvalidHexcode)
    }
}

/// Whether any color contains `code` as a substring. Case-sensitive.
pub fn colors_match<S: AsRef<str>>(colors: &[S], code: &str) -> bool {
    colors.iter().any(|color| color.as_ref().contains(code))
}

/// Error for a search run against an empty palette table.
pub fn no_saved_palettes() -> CoreError {
    CoreError::NoMatch("There are currently no saved pallets".to_string())
}

/// Error for a search whose code matched no color.
pub fn no_matching_palettes(code: &str) -> CoreError {
    CoreError::NoMatch(format!("No palettes with the hexcode of {code} exist"))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn five_and_six_character_codes_are_valid() {
        assert!(validate_hexcode("47850").is_ok());
        assert!(validate_hexcode("#47850").is_ok());
    }

    #[test]
    fn other_lengths_are_rejected() {
        for code in ["", "4785", "#478501", "#4785012"] {
            assert_matches!(validate_hexcode(code), Err(CoreError::InvalidHexcode));
        }
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert!(validate_hexcode("ééééé").is_ok());
    }

    #[test]
    fn substring_anywhere_in_any_color_matches() {
        let colors = ["#000000", "#abcdef", "#123456", "#fedcba", "#ffffff"];
        assert!(colors_match(&colors, "23456"));
        assert!(colors_match(&colors, "#abcd"));
        assert!(colors_match(&colors, "fffff"));
    }

    #[test]
    fn missing_substring_does_not_match() {
        let colors = ["#000000", "#abcdef", "#123456", "#fedcba", "#ffffff"];
        assert!(!colors_match(&colors, "99999"));
        assert!(!colors_match(&colors, "ABCDE"));
    }

    #[test]
    fn no_match_messages() {
        assert_eq!(
            no_saved_palettes().to_string(),
            "There are currently no saved pallets"
        );
        assert_eq!(
            no_matching_palettes("#4785").to_string(),
            "No palettes with the hexcode of #4785 exist"
        );
    }
}
