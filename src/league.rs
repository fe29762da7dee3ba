use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::standings::PenaltyMap;

/// A qualification/relegation cut-off line. `position` indexes the
/// worst-to-best ranked table; negative values count down from the top,
/// matching how leagues are usually described ("top 4", "bottom 3").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Band {
    pub label: String,
    pub position: i32,
}

/// Per-league configuration. Bands are data, not code, so a caller can load
/// a different set from JSON instead of editing the built-ins.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeagueSpec {
    pub code: String,
    pub name: String,
    /// Times each pair of teams meets over a full season (2 for the usual
    /// home-and-away double round-robin, 4 for the Scottish Premiership).
    pub rounds: u8,
    pub bands: Vec<Band>,
}

impl LeagueSpec {
    /// Scheduled games per team over the whole season.
    pub fn total_games(&self, num_teams: usize) -> usize {
        self.rounds as usize * num_teams.saturating_sub(1)
    }

    /// Resolve a band to a concrete row in a table of `num_teams` rows,
    /// 0 = worst.
    pub fn band_row(band: &Band, num_teams: usize) -> usize {
        if band.position < 0 {
            (num_teams as i32 + band.position).max(0) as usize
        } else {
            (band.position as usize).min(num_teams.saturating_sub(1))
        }
    }
}

/// Built-in specification for a league code.
pub fn lookup(code: &str) -> Result<LeagueSpec> {
    builtin_specs()
        .into_iter()
        .find(|spec| spec.code == code)
        .ok_or_else(|| Error::UnknownLeague(code.to_string()))
}

pub fn builtin_specs() -> Vec<LeagueSpec> {
    vec![
        spec("E0", "Premier League", 2, &[("Champions League", -4), ("Relegation", 2)]),
        spec(
            "E1",
            "EFL Championship",
            2,
            &[("Automatic", -2), ("Playoffs", -6), ("Relegation", 2)],
        ),
        spec(
            "E2",
            "EFL League One",
            2,
            &[("Automatic", -2), ("Playoffs", -6), ("Relegation", 3)],
        ),
        spec("SP1", "La Liga", 2, &[("Champions League", -4), ("Relegation", 2)]),
        spec("I1", "Serie A", 2, &[("Champions League", -4), ("Relegation", 2)]),
        spec(
            "D1",
            "Bundesliga",
            2,
            &[("Champions League", -4), ("Relegation", 1), ("Playoff", 2)],
        ),
        // Quadruple round-robin: 12 teams meeting four times.
        spec("SC0", "Scottish Premiership", 4, &[("Champions League", -2), ("Relegation", 0)]),
    ]
}

fn spec(code: &str, name: &str, rounds: u8, bands: &[(&str, i32)]) -> LeagueSpec {
    LeagueSpec {
        code: code.to_string(),
        name: name.to_string(),
        rounds,
        bands: bands
            .iter()
            .map(|(label, position)| Band {
                label: label.to_string(),
                position: *position,
            })
            .collect(),
    }
}

/// fixturedownload identifies leagues by slug rather than by the
/// football-data code; only a subset of leagues exists there.
pub fn fixturedownload_alias(code: &str) -> Option<&'static str> {
    match code {
        "E0" => Some("epl"),
        "E1" => Some("championship"),
        "SP1" => Some("la-liga"),
        "I1" => Some("serie-a"),
        "D1" => Some("bundesliga"),
        _ => None,
    }
}

/// Historical points deductions that are not encoded in the result feeds.
pub fn known_penalties(year: u16, code: &str) -> PenaltyMap {
    let mut penalties = PenaltyMap::new();
    if year == 2023 && code == "E0" {
        penalties.insert("Everton".to_string(), 6);
        penalties.insert("Nottingham Forest".to_string(), 4);
    }
    penalties
}

/// Load league specs from a JSON file, keyed by code.
pub fn load_specs(path: &Path) -> anyhow::Result<HashMap<String, LeagueSpec>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read league specs {}", path.display()))?;
    serde_json::from_str(&raw).context("parse league specs")
}

/// Save league specs as JSON, atomically (write-then-rename).
pub fn save_specs(path: &Path, specs: &HashMap<String, LeagueSpec>) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let tmp = path.with_extension("json.tmp");
    let json = serde_json::to_string_pretty(specs).context("serialize league specs")?;
    fs::write(&tmp, json).context("write league specs")?;
    fs::rename(&tmp, path).context("swap league specs")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_robin_constants() {
        let premier = lookup("E0").unwrap();
        assert_eq!(premier.total_games(20), 38);
        let scottish = lookup("SC0").unwrap();
        assert_eq!(scottish.total_games(12), 44);
    }

    #[test]
    fn unknown_league_is_an_error() {
        assert!(matches!(lookup("F1"), Err(Error::UnknownLeague(_))));
    }

    #[test]
    fn band_rows_resolve_from_either_end() {
        let premier = lookup("E0").unwrap();
        let top4 = &premier.bands[0];
        let releg = &premier.bands[1];
        assert_eq!(LeagueSpec::band_row(top4, 20), 16);
        assert_eq!(LeagueSpec::band_row(releg, 20), 2);
    }

    #[test]
    fn penalties_only_for_known_seasons() {
        let p = known_penalties(2023, "E0");
        assert_eq!(p.get("Everton"), Some(&6));
        assert_eq!(p.get("Nottingham Forest"), Some(&4));
        assert!(known_penalties(2022, "E0").is_empty());
        assert!(known_penalties(2023, "SP1").is_empty());
    }
}
