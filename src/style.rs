//! Team display styles for downstream renderers.
//!
//! This is an explicit read-only configuration mapping: looking up an
//! unknown team returns a computed fallback value and never mutates the
//! table.

use std::collections::HashMap;

use once_cell::sync::Lazy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamStyle {
    /// Line colour.
    pub primary: &'static str,
    /// Marker edge / label colour.
    pub secondary: &'static str,
    /// Marker letter.
    pub marker: char,
}

const FALLBACK_PRIMARY: &str = "#808080";
const FALLBACK_SECONDARY: &str = "#ffffff";

/// Style for a canonical team id, falling back to grey/white and the
/// team's initial when the team has no entry.
pub fn team_style(team: &str) -> TeamStyle {
    if let Some(style) = STYLES.get(team) {
        return *style;
    }
    TeamStyle {
        primary: FALLBACK_PRIMARY,
        secondary: FALLBACK_SECONDARY,
        marker: team.chars().next().map(|c| c.to_ascii_uppercase()).unwrap_or('?'),
    }
}

static STYLES: Lazy<HashMap<&'static str, TeamStyle>> = Lazy::new(|| {
    let entries: &[(&str, &str, &str, char)] = &[
        // England
        ("Arsenal", "#EF0107", "#FFFFFF", 'A'),
        ("Aston Villa", "#95BFE5", "#670E36", 'A'),
        ("Birmingham", "#183b90", "#FFFFFF", 'B'),
        ("Blackburn", "#009EE0", "#FFFFFF", 'B'),
        ("Bournemouth", "#DA291C", "#000000", 'B'),
        ("Brentford", "#e30613", "#fbb800", 'B'),
        ("Brighton", "#0057B8", "#FFCD00", 'B'),
        ("Bristol City", "#e3131e", "#ffffff", 'B'),
        ("Burnley", "#6C1D45", "#ede939", 'B'),
        ("Cardiff", "#0070B5", "#D11524", 'C'),
        ("Chelsea", "#034694", "#DBA111", 'C'),
        ("Coventry", "#87beef", "#cbd7de", 'C'),
        ("Crystal Palace", "#1B458F", "#C4122E", 'C'),
        ("Derby", "#0f0f0f", "#FFFFFF", 'D'),
        ("Everton", "#003399", "#FFFFFF", 'E'),
        ("Fulham", "#0f0f0f", "#CC0000", 'F'),
        ("Huddersfield", "#0E63AD", "#FFFFFF", 'H'),
        ("Hull", "#F18A01", "#000000", 'H'),
        ("Ipswich", "#3764a4", "#df2834", 'I'),
        ("Leeds", "#ffe100", "#0060aa", 'L'),
        ("Leicester", "#003090", "#FDBE11", 'L'),
        ("Liverpool", "#C8102E", "#00B2A9", 'L'),
        ("Luton", "#002e62", "#fb861f", 'L'),
        ("Man City", "#6CABDD", "#1C2C5B", 'M'),
        ("Man Utd", "#DA020E", "#FBE122", 'M'),
        ("Middlesbrough", "#DE1B22", "#FFFFFF", 'M'),
        ("Millwall", "#00337b", "#90a4a3", 'M'),
        ("Newcastle", "#241F20", "#FFFFFF", 'N'),
        ("Norwich", "#00A650", "#FFF200", 'N'),
        ("Nottingham Forest", "#DD0000", "#FFFFFF", 'N'),
        ("Plymouth", "#003c2b", "#d5a44d", 'P'),
        ("Preston", "#f4f4f4", "#000055", 'P'),
        ("QPR", "#175ba5", "#ffffff", 'Q'),
        ("Reading", "#004494", "#FFFFFF", 'R'),
        ("Rotherham", "#e31720", "#ffffff", 'R'),
        ("Sheffield Utd", "#EE2737", "#000000", 'S'),
        ("Sheffield Weds", "#4482d0", "#eab202", 'S'),
        ("Southampton", "#D71920", "#130C0E", 'S'),
        ("Stoke", "#E03A3E", "#1B449C", 'S'),
        ("Sunderland", "#eb172b", "#211e1e", 'S'),
        ("Swansea", "#0f0f0f", "#FFFFFF", 'S'),
        ("Tottenham", "#132257", "#FFFFFF", 'T'),
        ("Watford", "#FBEE23", "#ED2127", 'W'),
        ("West Brom", "#122F67", "#FFFFFF", 'W'),
        ("West Ham", "#7A263A", "#1BB1E7", 'W'),
        ("Wigan", "#1d59af", "#FFFFFF", 'W'),
        ("Wolves", "#FDB913", "#231F20", 'W'),
        // Scotland
        ("Aberdeen", "#e30013", "#ffffff", 'A'),
        ("Celtic", "#009d4a", "#fefffe", 'C'),
        ("Dundee", "#152142", "#ffffff", 'D'),
        ("Dundee United", "#fd6701", "#121212", 'D'),
        ("Hearts", "#a1122d", "#d1d3d4", 'H'),
        ("Hibernian", "#007638", "#f8f9fa", 'H'),
        ("Kilmarnock", "#2b3390", "#c07634", 'K'),
        ("Livingston", "#fbc905", "#000000", 'L'),
        ("Motherwell", "#f6b800", "#9e0000", 'M'),
        ("Rangers", "#002ea1", "#ffffff", 'R'),
        ("Ross County", "#00065b", "#ee1b24", 'R'),
        ("St Johnstone", "#0052a2", "#ddd3af", 'S'),
        ("St Mirren", "#0f0f0f", "#ffffff", 'S'),
        // Germany
        ("Augsburg", "#bb342f", "#44724c", 'A'),
        ("Bayern Munich", "#dd0029", "#0066b3", 'B'),
        ("Bochum", "#1b2b56", "#8dcbff", 'B'),
        ("Darmstadt", "#004ea0", "#ffffff", 'D'),
        ("Dortmund", "#ffda00", "#000000", 'D'),
        ("Ein Frankfurt", "#0f0f0f", "#ff0000", 'E'),
        ("FC Koln", "#fbfbfb", "#fb0000", 'F'),
        ("Freiburg", "#ff0000", "#000000", 'F'),
        ("Heidenheim", "#e30013", "#00387a", 'H'),
        ("Hoffenheim", "#1261b6", "#ffffff", 'H'),
        ("Leverkusen", "#141115", "#e32221", 'L'),
        ("Mainz", "#ff0000", "#f2f2f2", 'M'),
        ("Mönchengladbach", "#0f0f0f", "#008b43", 'M'),
        ("RB Leipzig", "#de013f", "#001945", 'R'),
        ("Stuttgart", "#d5011d", "#ffffff", 'S'),
        ("Union Berlin", "#ec121d", "#fddd00", 'U'),
        ("Werder Bremen", "#169152", "#ffffff", 'W'),
        ("Wolfsburg", "#51a700", "#f8f9fa", 'W'),
        // Italy
        ("Atalanta", "#1d191a", "#295cb0", 'A'),
        ("Bologna", "#04043d", "#d50e0e", 'B'),
        ("Cagliari", "#282846", "#d10125", 'C'),
        ("Empoli", "#0055ff", "#15134b", 'E'),
        ("Fiorentina", "#61328c", "#de2e1f", 'F'),
        ("Genoa", "#b01212", "#00213c", 'G'),
        ("Inter", "#001d9d", "#000000", 'I'),
        ("Juventus", "#0f0f0f", "#efefef", 'J'),
        ("Lazio", "#86d9f8", "#d9aa00", 'L'),
        ("Lecce", "#ffee00", "#e30013", 'L'),
        ("Milan", "#e50027", "#000000", 'M'),
        ("Monza", "#ee0e36", "#ffffff", 'M'),
        ("Napoli", "#12a0d7", "#003c82", 'N'),
        ("Roma", "#980228", "#fbbb00", 'R'),
        ("Salernitana", "#68130a", "#c49a29", 'S'),
        ("Sassuolo", "#2fb75b", "#1d191a", 'S'),
        ("Torino", "#800000", "#f5f5dc", 'T'),
        ("Udinese", "#808080", "#000000", 'U'),
        ("Verona", "#002b6c", "#fee21d", 'V'),
        // Spain
        ("Alaves", "#002ea1", "#ffffff", 'A'),
        ("Almeria", "#e40008", "#ffd000", 'A'),
        ("Ath Bilbao", "#ef201d", "#ffffff", 'A'),
        ("Ath Madrid", "#f60000", "#212b61", 'A'),
        ("Barcelona", "#00009f", "#ba002f", 'B'),
        ("Betis", "#00964b", "#ffffff", 'B'),
        ("Cadiz", "#fde701", "#0043a9", 'C'),
        ("Celta", "#80bfff", "#e6204d", 'C'),
        ("Getafe", "#0082c4", "#d3d4d6", 'G'),
        ("Girona", "#d00424", "#0042ff", 'G'),
        ("Granada", "#c40e2e", "#0000ff", 'G'),
        ("Las Palmas", "#ffe500", "#004a9e", 'L'),
        ("Mallorca", "#ee141e", "#fff700", 'M'),
        ("Osasuna", "#00003c", "#cd0000", 'O'),
        ("Real Madrid", "#fbfbfb", "#fcc000", 'R'),
        ("Sevilla", "#f8f9fa", "#d8061b", 'S'),
        ("Sociedad", "#0c398c", "#e7a70c", 'S'),
        ("Valencia", "#ef321f", "#ffe015", 'V'),
        ("Vallecano", "#c0b02c", "#e43215", 'V'),
        ("Villarreal", "#ffe767", "#e80000", 'V'),
    ];
    entries
        .iter()
        .map(|&(team, primary, secondary, marker)| {
            (
                team,
                TeamStyle {
                    primary,
                    secondary,
                    marker,
                },
            )
        })
        .collect()
});
