use std::cmp::Ordering;
use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::feed::{MatchRecord, TeamId};
use crate::league::LeagueSpec;

/// Points deductions by team, applied once after folding, before ranking.
pub type PenaltyMap = HashMap<TeamId, i64>;

/// Aggregate view of a season so far. Built once per request, never mutated.
///
/// Cumulative arrays have one more element than games played: index 0 is the
/// pre-season baseline 0, index i the value after i games.
#[derive(Debug, Clone)]
pub struct StandingsSnapshot {
    /// Every team that appears in any match, in canonical sorted order.
    pub teams: Vec<TeamId>,
    /// Per-game points earned (3/1/0), chronological.
    pub points_series: HashMap<TeamId, Vec<u8>>,
    pub cum_points: HashMap<TeamId, Vec<i64>>,
    pub cum_goal_diff: HashMap<TeamId, Vec<i64>>,
    pub cum_goals_scored: HashMap<TeamId, Vec<i64>>,
    pub games_played: HashMap<TeamId, usize>,
    /// Worst-to-best by (points, goal diff, goals scored, team id).
    /// Consumers display it reversed.
    pub ranked_teams: Vec<TeamId>,
    pub num_teams: usize,
    /// Most games played by any single team.
    pub max_games: usize,
    /// Scheduled games per team over the full season.
    pub total_games: usize,
}

/// Fold a date-ordered match list into per-team series and rankings.
///
/// Matches are processed strictly in the given order; an empty list is a
/// caller error and fails fast rather than producing empty aggregates.
pub fn compute_standings(
    matches: &[MatchRecord],
    penalties: &PenaltyMap,
    league: &LeagueSpec,
) -> Result<StandingsSnapshot> {
    if matches.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut series: HashMap<TeamId, Series> = HashMap::new();
    for m in matches {
        let (home_pts, away_pts) = match_points(m.home_goals, m.away_goals);
        let goal_diff = m.home_goals as i64 - m.away_goals as i64;
        series
            .entry(m.home_team.clone())
            .or_default()
            .push_game(home_pts, goal_diff, m.home_goals as i64);
        series
            .entry(m.away_team.clone())
            .or_default()
            .push_game(away_pts, -goal_diff, m.away_goals as i64);
    }

    // Retrospective deductions: visible in every cumulative-points sample
    // from the first game onward, not just the final total. Goal columns
    // are unaffected.
    for (team, penalty) in penalties {
        if let Some(s) = series.get_mut(team) {
            for sample in s.cum_points.iter_mut().skip(1) {
                *sample -= penalty;
            }
        }
    }

    let mut teams: Vec<TeamId> = series.keys().cloned().collect();
    teams.sort();

    let mut points_series = HashMap::new();
    let mut cum_points = HashMap::new();
    let mut cum_goal_diff = HashMap::new();
    let mut cum_goals_scored = HashMap::new();
    let mut games_played = HashMap::new();
    for (team, s) in series {
        games_played.insert(team.clone(), s.points.len());
        points_series.insert(team.clone(), s.points);
        cum_points.insert(team.clone(), s.cum_points);
        cum_goal_diff.insert(team.clone(), s.cum_goal_diff);
        cum_goals_scored.insert(team, s.cum_goals_scored);
    }

    let num_teams = teams.len();
    let max_games = games_played.values().copied().max().unwrap_or(0);
    let total_games = league.total_games(num_teams);

    let mut snapshot = StandingsSnapshot {
        teams,
        points_series,
        cum_points,
        cum_goal_diff,
        cum_goals_scored,
        games_played,
        ranked_teams: Vec::new(),
        num_teams,
        max_games,
        total_games,
    };
    snapshot.ranked_teams = snapshot.ranking_after(usize::MAX);
    Ok(snapshot)
}

/// 3 points for a win, 1 each for a draw.
pub fn match_points(home_goals: u32, away_goals: u32) -> (u8, u8) {
    if home_goals > away_goals {
        (3, 0)
    } else if away_goals > home_goals {
        (0, 3)
    } else {
        (1, 1)
    }
}

impl StandingsSnapshot {
    /// Final points total, after any penalty deduction.
    pub fn current_points(&self, team: &str) -> i64 {
        last(&self.cum_points, team)
    }

    pub fn current_goal_diff(&self, team: &str) -> i64 {
        last(&self.cum_goal_diff, team)
    }

    pub fn current_goals_scored(&self, team: &str) -> i64 {
        last(&self.cum_goals_scored, team)
    }

    pub fn max_points(&self) -> i64 {
        self.teams
            .iter()
            .map(|t| self.current_points(t))
            .max()
            .unwrap_or(0)
    }

    pub fn games_played(&self, team: &str) -> usize {
        self.games_played.get(team).copied().unwrap_or(0)
    }

    /// Table place per team, 0 = worst (same orientation as `ranked_teams`).
    pub fn places(&self) -> HashMap<TeamId, usize> {
        self.ranked_teams
            .iter()
            .enumerate()
            .map(|(i, team)| (team.clone(), i))
            .collect()
    }

    /// Points after a team's first `n` games; teams with fewer than `n`
    /// games keep their full-history value.
    pub fn points_after(&self, team: &str, n: usize) -> i64 {
        clamped(&self.cum_points, team, n)
    }

    pub fn goal_diff_after(&self, team: &str, n: usize) -> i64 {
        clamped(&self.cum_goal_diff, team, n)
    }

    pub fn goals_scored_after(&self, team: &str, n: usize) -> i64 {
        clamped(&self.cum_goals_scored, team, n)
    }

    /// Full ranking using only each team's first `n` games, worst-to-best.
    /// The 4-key tie-break resolves every tie: equal records fall back to
    /// the team id, so the order is a strict total order.
    pub fn ranking_after(&self, n: usize) -> Vec<TeamId> {
        let mut order = self.teams.clone();
        order.sort_by(|a, b| self.compare_at(a, b, n));
        order
    }

    fn compare_at(&self, a: &str, b: &str, n: usize) -> Ordering {
        (
            self.points_after(a, n),
            self.goal_diff_after(a, n),
            self.goals_scored_after(a, n),
            a,
        )
            .cmp(&(
                self.points_after(b, n),
                self.goal_diff_after(b, n),
                self.goals_scored_after(b, n),
                b,
            ))
    }

    /// Table-position trajectory per team: an independent full ranking at
    /// every elapsed-game count 0..=max_games, position 0 = worst.
    ///
    /// Quadratic in teams × games, which is fine at league sizes; the
    /// cumulative lookups are already O(1) per step.
    pub fn positions_over_time(&self) -> HashMap<TeamId, Vec<usize>> {
        let mut positions: HashMap<TeamId, Vec<usize>> = self
            .teams
            .iter()
            .map(|t| (t.clone(), Vec::with_capacity(self.max_games + 1)))
            .collect();
        for n in 0..=self.max_games {
            for (i, team) in self.ranking_after(n).iter().enumerate() {
                if let Some(track) = positions.get_mut(team) {
                    track.push(i);
                }
            }
        }
        positions
    }

    /// Highest cumulative-points total achieved by any team through each
    /// elapsed-game count 0..=max_games.
    pub fn best_points_by_round(&self) -> Vec<i64> {
        (0..=self.max_games)
            .map(|n| {
                self.teams
                    .iter()
                    .map(|t| self.points_after(t, n))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Per team: cumulative points as a fraction of the per-round leader
    /// value, for each elapsed-game count i >= 1.
    pub fn relative_performance(&self) -> HashMap<TeamId, Vec<f64>> {
        let best = self.best_points_by_round();
        self.teams
            .iter()
            .map(|team| {
                let cum = &self.cum_points[team];
                let fractions = (1..cum.len())
                    .map(|i| cum[i] as f64 / best[i] as f64)
                    .collect();
                (team.clone(), fractions)
            })
            .collect()
    }
}

fn last(map: &HashMap<TeamId, Vec<i64>>, team: &str) -> i64 {
    map.get(team)
        .and_then(|cum| cum.last())
        .copied()
        .unwrap_or(0)
}

fn clamped(map: &HashMap<TeamId, Vec<i64>>, team: &str, n: usize) -> i64 {
    map.get(team)
        .map(|cum| cum[n.min(cum.len() - 1)])
        .unwrap_or(0)
}

#[derive(Debug, Default)]
struct Series {
    points: Vec<u8>,
    cum_points: Vec<i64>,
    cum_goal_diff: Vec<i64>,
    cum_goals_scored: Vec<i64>,
}

impl Series {
    fn push_game(&mut self, pts: u8, goal_diff: i64, goals_scored: i64) {
        if self.cum_points.is_empty() {
            self.cum_points.push(0);
            self.cum_goal_diff.push(0);
            self.cum_goals_scored.push(0);
        }
        self.points.push(pts);
        self.cum_points
            .push(self.cum_points.last().copied().unwrap_or(0) + pts as i64);
        self.cum_goal_diff
            .push(self.cum_goal_diff.last().copied().unwrap_or(0) + goal_diff);
        self.cum_goals_scored
            .push(self.cum_goals_scored.last().copied().unwrap_or(0) + goals_scored);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league;

    fn record(home: &str, away: &str, hg: u32, ag: u32) -> MatchRecord {
        MatchRecord {
            home_team: home.to_string(),
            away_team: away.to_string(),
            home_goals: hg,
            away_goals: ag,
        }
    }

    #[test]
    fn points_rule_assigns_three_one_zero() {
        for hg in 0..6u32 {
            for ag in 0..6u32 {
                let (h, a) = match_points(hg, ag);
                if hg > ag {
                    assert_eq!((h, a), (3, 0));
                } else if ag > hg {
                    assert_eq!((h, a), (0, 3));
                } else {
                    assert_eq!((h, a), (1, 1));
                }
                assert!(h + a == 2 || h + a == 3);
            }
        }
    }

    #[test]
    fn empty_input_is_an_error() {
        let spec = league::lookup("E0").unwrap();
        assert!(matches!(
            compute_standings(&[], &PenaltyMap::new(), &spec),
            Err(Error::EmptyInput)
        ));
    }

    #[test]
    fn tiebreak_falls_back_to_team_id() {
        // Mirror fixtures: identical points, goal difference, goals scored.
        let matches = vec![record("Zeta", "Alpha", 1, 1), record("Alpha", "Zeta", 2, 2)];
        let spec = league::lookup("E0").unwrap();
        let snap = compute_standings(&matches, &PenaltyMap::new(), &spec).unwrap();
        assert_eq!(snap.ranked_teams, vec!["Alpha", "Zeta"]);
    }

    #[test]
    fn cumulative_invariant_holds() {
        let matches = vec![
            record("A", "B", 2, 0),
            record("B", "C", 1, 1),
            record("C", "A", 3, 1),
        ];
        let spec = league::lookup("E0").unwrap();
        let snap = compute_standings(&matches, &PenaltyMap::new(), &spec).unwrap();
        for team in &snap.teams {
            let cum = &snap.cum_points[team];
            let pts = &snap.points_series[team];
            assert_eq!(cum[0], 0);
            for i in 1..cum.len() {
                assert_eq!(cum[i] - cum[i - 1], pts[i - 1] as i64);
            }
        }
    }

    #[test]
    fn clamped_lookup_uses_full_history_for_short_seasons() {
        // B has played twice, C once.
        let matches = vec![
            record("B", "C", 2, 0),
            record("A", "B", 0, 1),
            record("A", "D", 1, 1),
        ];
        let spec = league::lookup("E0").unwrap();
        let snap = compute_standings(&matches, &PenaltyMap::new(), &spec).unwrap();
        assert_eq!(snap.points_after("B", 5), 6);
        assert_eq!(snap.points_after("C", 5), 0);
        assert_eq!(snap.points_after("B", 0), 0);
    }

    #[test]
    fn positions_cover_every_round_and_end_at_final_order() {
        let matches = vec![
            record("A", "B", 2, 0),
            record("B", "C", 1, 1),
            record("C", "A", 3, 1),
        ];
        let spec = league::lookup("E0").unwrap();
        let snap = compute_standings(&matches, &PenaltyMap::new(), &spec).unwrap();
        let positions = snap.positions_over_time();
        let places = snap.places();
        for team in &snap.teams {
            assert_eq!(positions[team].len(), snap.max_games + 1);
            assert_eq!(positions[team].last().copied(), Some(places[team]));
        }
    }

    #[test]
    fn relative_performance_is_leader_normalized() {
        let matches = vec![
            record("A", "B", 2, 0),
            record("B", "C", 1, 1),
            record("C", "A", 3, 1),
        ];
        let spec = league::lookup("E0").unwrap();
        let snap = compute_standings(&matches, &PenaltyMap::new(), &spec).unwrap();
        let rel = snap.relative_performance();
        for team in &snap.teams {
            assert_eq!(rel[team].len(), snap.games_played(team));
            for v in &rel[team] {
                assert!((0.0..=1.0).contains(v), "{team}: {v}");
            }
        }
        // The per-round leader sits at exactly 1.0 somewhere.
        assert!(rel.values().flatten().any(|v| (v - 1.0).abs() < 1e-12));
    }
}
