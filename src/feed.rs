use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};

use crate::aliases;
use crate::error::{Error, Result};

pub type TeamId = String;

/// One completed fixture. Produced only by the parser, never mutated.
/// The match date is consumed for ordering and then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub home_team: TeamId,
    pub away_team: TeamId,
    pub home_goals: u32,
    pub away_goals: u32,
}

/// The two feed layouts seen across providers. Both are header-driven;
/// column order is never assumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `Date, Home Team, Away Team, Result` with a combined `"H - A"` score.
    FixtureDownload,
    /// `Date, HomeTeam, AwayTeam, FTHG, FTAG` with separate goal columns.
    FootballData,
}

impl FromStr for Layout {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixturedownload" => Ok(Layout::FixtureDownload),
            "footballdata" => Ok(Layout::FootballData),
            other => Err(Error::UnknownLayout(other.to_string())),
        }
    }
}

/// Parse raw feed text into a date-ordered match list.
///
/// Rows without a usable score are unplayed fixtures and are dropped.
/// A row that does carry a score but whose date matches neither accepted
/// format fails the whole parse with [`Error::MalformedDate`].
pub fn parse_feed(contents: &str, layout: Layout) -> Result<Vec<MatchRecord>> {
    match layout {
        Layout::FixtureDownload => parse_fixturedownload(contents),
        Layout::FootballData => parse_footballdata(contents),
    }
}

fn parse_fixturedownload(contents: &str) -> Result<Vec<MatchRecord>> {
    let mut lines = non_empty_lines(contents);
    let header = split_record(lines.next().unwrap_or_default());
    let date_col = column_index(&header, "Date")?;
    let home_col = column_index(&header, "Home Team")?;
    let away_col = column_index(&header, "Away Team")?;
    let result_col = column_index(&header, "Result")?;

    let mut rows: Vec<(NaiveDateTime, MatchRecord)> = Vec::new();
    for line in lines {
        let fields = split_record(line);
        let Some((home_goals, away_goals)) = field(&fields, result_col).and_then(parse_score_pair)
        else {
            continue;
        };
        let date = parse_kickoff(field(&fields, date_col).unwrap_or_default())?;
        rows.push((
            date,
            MatchRecord {
                home_team: canonical_field(&fields, home_col),
                away_team: canonical_field(&fields, away_col),
                home_goals,
                away_goals,
            },
        ));
    }
    Ok(sort_by_date(rows))
}

fn parse_footballdata(contents: &str) -> Result<Vec<MatchRecord>> {
    let mut lines = non_empty_lines(contents);
    let header = split_record(lines.next().unwrap_or_default());
    let date_col = column_index(&header, "Date")?;
    let home_col = column_index(&header, "HomeTeam")?;
    let away_col = column_index(&header, "AwayTeam")?;
    let fthg_col = column_index(&header, "FTHG")?;
    let ftag_col = column_index(&header, "FTAG")?;

    let mut rows: Vec<(NaiveDate, MatchRecord)> = Vec::new();
    for line in lines {
        let fields = split_record(line);
        let home_goals = field(&fields, fthg_col).and_then(parse_goals);
        let away_goals = field(&fields, ftag_col).and_then(parse_goals);
        let (Some(home_goals), Some(away_goals)) = (home_goals, away_goals) else {
            continue;
        };
        let date = parse_match_date(field(&fields, date_col).unwrap_or_default())?;
        rows.push((
            date,
            MatchRecord {
                home_team: canonical_field(&fields, home_col),
                away_team: canonical_field(&fields, away_col),
                home_goals,
                away_goals,
            },
        ));
    }
    Ok(sort_by_date(rows))
}

/// Stable sort keeps feed order for fixtures on the same date, so output is
/// byte-for-byte deterministic for identical input. All downstream cumulative
/// arithmetic assumes this chronological order.
fn sort_by_date<K: Ord>(mut rows: Vec<(K, MatchRecord)>) -> Vec<MatchRecord> {
    rows.sort_by(|a, b| a.0.cmp(&b.0));
    rows.into_iter().map(|(_, m)| m).collect()
}

fn non_empty_lines(contents: &str) -> impl Iterator<Item = &str> {
    contents
        .trim_start_matches('\u{feff}')
        .lines()
        .filter(|line| !line.trim().is_empty())
}

fn column_index(header: &[String], name: &'static str) -> Result<usize> {
    header
        .iter()
        .position(|col| col.trim() == name)
        .ok_or(Error::MissingColumn(name))
}

fn field<'a>(fields: &'a [String], idx: usize) -> Option<&'a str> {
    fields.get(idx).map(|f| f.trim())
}

fn canonical_field(fields: &[String], idx: usize) -> TeamId {
    aliases::canonical(field(fields, idx).unwrap_or_default()).to_string()
}

/// Minimal CSV record splitter: honours double-quoted fields and `""`
/// escapes, which is all either feed provider ever emits.
fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fields.push(current);
    fields
}

/// Extract a numeric score pair from a combined result string such as
/// `"2 - 1"`. Tolerant of whitespace around the separator; anything without
/// two numbers (empty cell, "postponed", ...) is not a score.
fn parse_score_pair(raw: &str) -> Option<(u32, u32)> {
    let mut nums = raw
        .split(|ch: char| !ch.is_ascii_digit())
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse::<u32>().ok());
    let home = nums.next()?;
    let away = nums.next()?;
    Some((home, away))
}

fn parse_goals(raw: &str) -> Option<u32> {
    raw.parse::<u32>().ok()
}

/// football-data dates: 2-digit year first, 4-digit year as fallback.
fn parse_match_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%d/%m/%y")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%d/%m/%Y"))
        .map_err(|_| Error::MalformedDate {
            raw: raw.to_string(),
        })
}

/// fixturedownload kickoffs carry a time component.
fn parse_kickoff(raw: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%d/%m/%Y %H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%d/%m/%y %H:%M"))
        .map_err(|_| Error::MalformedDate {
            raw: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_pair_tolerates_spacing() {
        assert_eq!(parse_score_pair("2 - 1"), Some((2, 1)));
        assert_eq!(parse_score_pair("2-1"), Some((2, 1)));
        assert_eq!(parse_score_pair("10 -  0"), Some((10, 0)));
        assert_eq!(parse_score_pair(""), None);
        assert_eq!(parse_score_pair("postponed"), None);
        assert_eq!(parse_score_pair("3"), None);
    }

    #[test]
    fn split_record_handles_quotes() {
        assert_eq!(split_record("a,b,c"), vec!["a", "b", "c"]);
        assert_eq!(split_record(r#""x, y",z"#), vec!["x, y", "z"]);
        assert_eq!(
            split_record(r#""he said ""hi""",1"#),
            vec![r#"he said "hi""#, "1"]
        );
    }

    #[test]
    fn match_date_falls_back_to_long_year() {
        let short = parse_match_date("05/08/23").expect("2-digit year should parse");
        let long = parse_match_date("05/08/2023").expect("4-digit year should parse");
        assert_eq!(short, long);
        assert!(matches!(
            parse_match_date("2023-08-05"),
            Err(Error::MalformedDate { .. })
        ));
    }

    #[test]
    fn layout_selector_rejects_unknown() {
        assert_eq!(
            "fixturedownload".parse::<Layout>().unwrap(),
            Layout::FixtureDownload
        );
        assert!(matches!(
            "xml".parse::<Layout>(),
            Err(Error::UnknownLayout(_))
        ));
    }
}
