use std::fs;
use std::path::PathBuf;

use league_progress::feed::{Layout, parse_feed};
use league_progress::Error;

fn read_fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("read {}: {e}", path.display()))
}

#[test]
fn footballdata_feed_parses_sorted_and_canonical() {
    let raw = read_fixture("footballdata_sample.csv");
    let matches = parse_feed(&raw, Layout::FootballData).unwrap();

    // The unplayed Chelsea v Luton row is dropped.
    assert_eq!(matches.len(), 4);

    // Rows come back date-sorted; same-date rows keep feed order.
    let pairs: Vec<(&str, &str)> = matches
        .iter()
        .map(|m| (m.home_team.as_str(), m.away_team.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("Everton", "Fulham"),
            ("Arsenal", "Nottingham Forest"),
            ("Chelsea", "Liverpool"),
            ("Brighton", "Wolves"),
        ]
    );

    // "Nott'm Forest" was canonicalised; goals carried through.
    let arsenal = &matches[1];
    assert_eq!(arsenal.home_goals, 2);
    assert_eq!(arsenal.away_goals, 1);
}

#[test]
fn fixturedownload_feed_parses_sorted_and_canonical() {
    let raw = read_fixture("fixturedownload_sample.csv");
    let matches = parse_feed(&raw, Layout::FixtureDownload).unwrap();

    // The score-less final-day row is an unplayed fixture.
    assert_eq!(matches.len(), 4);
    assert_eq!(matches[0].home_team, "Burnley");
    assert_eq!(matches[0].away_goals, 3);

    // "Spurs" canonicalises despite a quoted, comma-bearing location column.
    let spurs = matches.last().unwrap();
    assert_eq!(spurs.home_team, "Tottenham");
    assert_eq!((spurs.home_goals, spurs.away_goals), (2, 0));
}

#[test]
fn parsing_is_deterministic() {
    let raw = read_fixture("footballdata_sample.csv");
    let first = parse_feed(&raw, Layout::FootballData).unwrap();
    let second = parse_feed(&raw, Layout::FootballData).unwrap();
    assert_eq!(first, second);
}

#[test]
fn malformed_date_on_a_played_row_fails_the_parse() {
    let raw = "Date,HomeTeam,AwayTeam,FTHG,FTAG\n2023-08-12,Arsenal,Fulham,2,1\n";
    assert!(matches!(
        parse_feed(raw, Layout::FootballData),
        Err(Error::MalformedDate { .. })
    ));
}

#[test]
fn missing_column_is_reported_by_name() {
    let raw = "Date,HomeTeam,AwayTeam,FTHG\n12/08/23,Arsenal,Fulham,2\n";
    assert!(matches!(
        parse_feed(raw, Layout::FootballData),
        Err(Error::MissingColumn("FTAG"))
    ));
}
