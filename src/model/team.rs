//! Franchise name normalization

use lazy_static::lazy_static;
use std::collections::HashMap;

/// Retired franchise labels and the name each one is reported under today
pub const LEGACY_TEAM_NAMES: [(&str, &str); 2] = [
    ("Delhi Daredevils", "Delhi Capitals"),
    ("Deccan Chargers", "Sunrisers Hyderabad"),
];

lazy_static! {
    static ref RENAMES: HashMap<&'static str, &'static str> =
        LEGACY_TEAM_NAMES.iter().copied().collect();
}

/// Map user-typed team input to its current franchise name.
///
/// Legacy labels match case-insensitively; anything else comes back trimmed.
pub fn canonical_team_name(input: &str) -> &str {
    let input = input.trim();
    LEGACY_TEAM_NAMES
        .iter()
        .find(|(legacy, _)| legacy.eq_ignore_ascii_case(input))
        .map_or(input, |(_, current)| *current)
}

/// Normalize an owned team label in place
pub fn normalize_team(name: &mut String) {
    if let Some(current) = RENAMES.get(name.as_str()) {
        *name = current.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_names_map_to_current() {
        assert_eq!(canonical_team_name("Delhi Daredevils"), "Delhi Capitals");
        assert_eq!(canonical_team_name("Deccan Chargers"), "Sunrisers Hyderabad");
    }

    #[test]
    fn test_legacy_input_any_case() {
        assert_eq!(canonical_team_name("deccan chargers"), "Sunrisers Hyderabad");
        assert_eq!(canonical_team_name("  DELHI DAREDEVILS "), "Delhi Capitals");
        assert_eq!(canonical_team_name("mumbai indians"), "mumbai indians");
    }

    #[test]
    fn test_current_names_untouched() {
        assert_eq!(canonical_team_name("Mumbai Indians"), "Mumbai Indians");
        assert_eq!(canonical_team_name("Delhi Capitals"), "Delhi Capitals");
        assert_eq!(canonical_team_name("Delhi Daredevils XI"), "Delhi Daredevils XI");
    }

    #[test]
    fn test_normalize_in_place() {
        let mut name = "Deccan Chargers".to_string();
        normalize_team(&mut name);
        assert_eq!(name, "Sunrisers Hyderabad");

        // Stored labels are renamed on an exact match only
        let mut name = "deccan chargers".to_string();
        normalize_team(&mut name);
        assert_eq!(name, "deccan chargers");
    }
}
