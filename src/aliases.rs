use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Feed providers spell the same club several ways (full legal names,
/// abbreviations, diacritics). This table collapses every observed spelling
/// onto one canonical id; names without an entry pass through unchanged.
static TEAM_ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("1. FC Heidenheim 1846", "Heidenheim"),
        ("1. FC Köln", "FC Koln"),
        ("1. FC Union Berlin", "Union Berlin"),
        ("1. FSV Mainz 05", "Mainz"),
        ("Athletic Club", "Ath Bilbao"),
        ("Atlético de Madrid", "Ath Madrid"),
        ("Bayer 04 Leverkusen", "Leverkusen"),
        ("Birmingham City", "Birmingham"),
        ("Blackburn Rovers", "Blackburn"),
        ("Borussia Dortmund", "Dortmund"),
        ("Borussia Mönchengladbach", "Mönchengladbach"),
        ("CA Osasuna", "Osasuna"),
        ("Cádiz CF", "Cadiz"),
        ("Cardiff City", "Cardiff"),
        ("Coventry City", "Coventry"),
        ("Deportivo Alavés", "Alaves"),
        ("Eintracht Frankfurt", "Ein Frankfurt"),
        ("FC Augsburg", "Augsburg"),
        ("FC Barcelona", "Barcelona"),
        ("FC Bayern München", "Bayern Munich"),
        ("Getafe CF", "Getafe"),
        ("Girona FC", "Girona"),
        ("Granada CF", "Granada"),
        ("Hellas Verona", "Verona"),
        ("Huddersfield Town", "Huddersfield"),
        ("Hull City", "Hull"),
        ("Ipswich Town", "Ipswich"),
        ("Leeds United", "Leeds"),
        ("Leicester City", "Leicester"),
        ("M'gladbach", "Mönchengladbach"),
        ("Man United", "Man Utd"),
        ("Milton Keynes Dons", "Milton Keynes"),
        ("Norwich City", "Norwich"),
        ("Nott'm Forest", "Nottingham Forest"),
        ("Plymouth Argyle", "Plymouth"),
        ("Preston North End", "Preston"),
        ("Queens Park Rangers", "QPR"),
        ("Rayo Vallecano", "Vallecano"),
        ("RC Celta", "Celta"),
        ("RCD Mallorca", "Mallorca"),
        ("Real Betis", "Betis"),
        ("Real Sociedad", "Sociedad"),
        ("Rotherham United", "Rotherham"),
        ("Sevilla FC", "Sevilla"),
        ("Sheffield United", "Sheffield Utd"),
        ("Sheffield Wednesday", "Sheffield Weds"),
        ("Sport-Club Freiburg", "Freiburg"),
        ("Spurs", "Tottenham"),
        ("Stoke City", "Stoke"),
        ("SV Darmstadt 98", "Darmstadt"),
        ("SV Werder Bremen", "Werder Bremen"),
        ("Swansea City", "Swansea"),
        ("TSG Hoffenheim", "Hoffenheim"),
        ("UD Almería", "Almeria"),
        ("UD Las Palmas", "Las Palmas"),
        ("Valencia CF", "Valencia"),
        ("VfB Stuttgart", "Stuttgart"),
        ("VfL Bochum 1848", "Bochum"),
        ("VfL Wolfsburg", "Wolfsburg"),
        ("Villarreal CF", "Villarreal"),
        ("West Bromwich Albion", "West Brom"),
    ])
});

/// Canonical team id for a raw feed spelling.
pub fn canonical(raw: &str) -> &str {
    let trimmed = raw.trim();
    TEAM_ALIASES.get(trimmed).copied().unwrap_or(trimmed)
}
