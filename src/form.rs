//! Smoothed recent-performance series and season extrapolation.
//!
//! Both smoothers are pure functions of a team's per-game points series and
//! the window size; callers pick whichever reads better for their chart.

use crate::error::{Error, Result};

/// Default smoothing window, in games.
pub const DEFAULT_WINDOW: usize = 5;

/// A-priori points per game: the seed for exponential form before any
/// results exist. 1.5 is the long-run average across a balanced league.
const PRIOR_POINTS_PER_GAME: f64 = 1.5;

/// Simple moving average over a fixed window. Valid-mode: no output until
/// the window fills, so the result is `window - 1` shorter than the input
/// (empty when the team has played fewer games than the window).
pub fn window_form(points: &[u8], window: usize) -> Result<Vec<f64>> {
    if window == 0 {
        return Err(Error::WindowTooSmall);
    }
    if points.len() < window {
        return Ok(Vec::new());
    }
    Ok(points
        .windows(window)
        .map(|w| w.iter().map(|&p| p as f64).sum::<f64>() / window as f64)
        .collect())
}

/// Exponential moving average of points per game, seeded at the league
/// prior so form is well-defined from game 1:
///
/// `f[i] = ((w-1)/w) * f[i-1] + (1/w) * points[i]`, `f[-1] = 1.5`
pub fn exponential_form(points: &[u8], window: usize) -> Result<Vec<f64>> {
    if window == 0 {
        return Err(Error::WindowTooSmall);
    }
    let w = window as f64;
    let mut form = Vec::with_capacity(points.len());
    let mut prev = PRIOR_POINTS_PER_GAME;
    for &p in points {
        let next = (w - 1.0) / w * prev + p as f64 / w;
        form.push(next);
        prev = next;
    }
    Ok(form)
}

/// Final points assuming the team keeps earning at its rate so far:
/// `3 * total_games * cum_points[i] / (3 * i)` for each elapsed-game count
/// `i >= 1`. Undefined at i = 0, so the output is one shorter than the
/// cumulative array.
pub fn extrapolated_points(cum_points: &[i64], total_games: usize) -> Vec<f64> {
    cum_points
        .iter()
        .enumerate()
        .skip(1)
        .map(|(i, &pts)| 3.0 * total_games as f64 * pts as f64 / (3.0 * i as f64))
        .collect()
}
