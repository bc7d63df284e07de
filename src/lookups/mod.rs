//! Process-wide frozen lookup tables and the shared chart palette.
//!
//! Defined once for every dashboard module and read-only for the lifetime
//! of the process.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

/// US state name (plus District of Columbia) to 2-letter postal code
pub static STATE_ABBREVIATIONS: LazyLock<FxHashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        STATE_ABBREVIATION_PAIRS.iter().copied().collect()
    });

const STATE_ABBREVIATION_PAIRS: &[(&str, &str)] = &[
    ("Alabama", "AL"),
    ("Alaska", "AK"),
    ("Arizona", "AZ"),
    ("Arkansas", "AR"),
    ("California", "CA"),
    ("Colorado", "CO"),
    ("Connecticut", "CT"),
    ("Delaware", "DE"),
    ("District of Columbia", "DC"),
    ("Florida", "FL"),
    ("Georgia", "GA"),
    ("Hawaii", "HI"),
    ("Idaho", "ID"),
    ("Illinois", "IL"),
    ("Indiana", "IN"),
    ("Iowa", "IA"),
    ("Kansas", "KS"),
    ("Kentucky", "KY"),
    ("Louisiana", "LA"),
    ("Maine", "ME"),
    ("Maryland", "MD"),
    ("Massachusetts", "MA"),
    ("Michigan", "MI"),
    ("Minnesota", "MN"),
    ("Mississippi", "MS"),
    ("Missouri", "MO"),
    ("Montana", "MT"),
    ("Nebraska", "NE"),
    ("Nevada", "NV"),
    ("New Hampshire", "NH"),
    ("New Jersey", "NJ"),
    ("New Mexico", "NM"),
    ("New York", "NY"),
    ("North Carolina", "NC"),
    ("North Dakota", "ND"),
    ("Ohio", "OH"),
    ("Oklahoma", "OK"),
    ("Oregon", "OR"),
    ("Pennsylvania", "PA"),
    ("Rhode Island", "RI"),
    ("South Carolina", "SC"),
    ("South Dakota", "SD"),
    ("Tennessee", "TN"),
    ("Texas", "TX"),
    ("Utah", "UT"),
    ("Vermont", "VT"),
    ("Virginia", "VA"),
    ("Washington", "WA"),
    ("West Virginia", "WV"),
    ("Wisconsin", "WI"),
    ("Wyoming", "WY"),
];

/// General-health label to ordinal rank (Poor = 0 .. Excellent = 4)
pub static HEALTH_RANKS: LazyLock<FxHashMap<&'static str, u8>> = LazyLock::new(|| {
    [
        ("Poor", 0),
        ("Fair", 1),
        ("Good", 2),
        ("Very Good", 3),
        ("Excellent", 4),
    ]
    .into_iter()
    .collect()
});

/// Pastel palette shared by every chart, indexed with wrap-around
pub const PALETTE: [&str; 8] = [
    "#D9C4F2", "#C6A8EB", "#B28EE4", "#9D73DC", "#8958D4", "#7342C7", "#5F32B2", "#49259E",
];

/// Look up the 2-letter postal code for a state name.
///
/// Names absent from the table (e.g. territories) yield `None`; the caller
/// keeps the record and simply has no derived abbreviation for it.
#[must_use]
pub fn state_abbr(name: &str) -> Option<&'static str> {
    STATE_ABBREVIATIONS.get(name).copied()
}

/// Look up the ordinal rank for a general-health label.
#[must_use]
pub fn health_rank(label: &str) -> Option<u8> {
    HEALTH_RANKS.get(label).copied()
}

/// Palette color for an index, wrapping past the end
#[must_use]
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// One palette color per category, wrapping when there are more than eight
#[must_use]
pub fn palette_cycle(count: usize) -> Vec<&'static str> {
    (0..count).map(palette_color).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_state_lookup() {
        assert_eq!(state_abbr("California"), Some("CA"));
        assert_eq!(state_abbr("District of Columbia"), Some("DC"));
        assert_eq!(state_abbr("Puerto Rico"), None);
        assert_eq!(state_abbr(""), None);
    }

    #[test]
    fn test_state_table_is_injective() {
        assert_eq!(STATE_ABBREVIATIONS.len(), 51);
        let codes: HashSet<&str> = STATE_ABBREVIATIONS.values().copied().collect();
        assert_eq!(codes.len(), 51);
        assert!(codes.iter().all(|code| code.len() == 2));
    }

    #[test]
    fn test_health_ranks() {
        assert_eq!(health_rank("Poor"), Some(0));
        assert_eq!(health_rank("Excellent"), Some(4));
        assert_eq!(health_rank("Unknown"), None);
    }

    #[test]
    fn test_palette_wraps() {
        assert_eq!(palette_color(0), PALETTE[0]);
        assert_eq!(palette_color(8), PALETTE[0]);
        assert_eq!(palette_color(13), PALETTE[5]);

        let colors = palette_cycle(11);
        assert_eq!(colors.len(), 11);
        assert_eq!(colors[8], PALETTE[0]);
    }
}
