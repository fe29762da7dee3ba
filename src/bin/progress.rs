use std::str::FromStr;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use league_progress::fetch::{self, FeedCache, Source};
use league_progress::form;
use league_progress::league;
use league_progress::{compute_standings, parse_feed};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();
    let year: u16 = args
        .get(1)
        .map(|s| s.parse().context("year must be a number"))
        .transpose()?
        .unwrap_or(2023);
    let code = args.get(2).map(String::as_str).unwrap_or("E0");
    let source = match args.get(3) {
        Some(raw) => Source::from_str(raw)?,
        None => Source::auto(year, code),
    };

    let spec = league::lookup(code)?;
    info!(league = %spec.name, year, ?source, "loading season");

    let mut cache = match FeedCache::default_path() {
        Some(path) => FeedCache::at_path(path),
        None => FeedCache::in_memory(),
    };
    let raw = fetch::fetch_feed(&mut cache, year, code, source)?;
    let matches = parse_feed(&raw, source.layout())?;
    let penalties = league::known_penalties(year, code);
    let snapshot = compute_standings(&matches, &penalties, &spec)?;

    println!(
        "{} {}/{}  ({} teams, {} of {} rounds of games)",
        spec.name,
        year,
        year + 1,
        snapshot.num_teams,
        snapshot.max_games,
        snapshot.total_games,
    );
    println!("{:>3}  {:<22} {:>3} {:>4} {:>4} {:>4}  {:>5}", "#", "team", "pld", "pts", "gd", "gs", "form");

    // ranked_teams is worst-to-best; the table reads best-first.
    for (i, team) in snapshot.ranked_teams.iter().rev().enumerate() {
        let ppg = form::exponential_form(&snapshot.points_series[team], form::DEFAULT_WINDOW)?
            .last()
            .copied()
            .unwrap_or(0.0);
        println!(
            "{:>3}  {:<22} {:>3} {:>4} {:>4} {:>4}  {:>5.2}",
            i + 1,
            team,
            snapshot.games_played(team),
            snapshot.current_points(team),
            snapshot.current_goal_diff(team),
            snapshot.current_goals_scored(team),
            ppg,
        );
    }

    Ok(())
}
