//! Feed download with an explicit, caller-owned cache.
//!
//! The cache is keyed by `(source, league, year)` so repeated requests for
//! the same season never re-fetch; the caller decides when to invalidate.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use once_cell::sync::OnceCell;
use reqwest::blocking::Client;
use tracing::debug;

use crate::error::Error;
use crate::feed::Layout;
use crate::league;

const REQUEST_TIMEOUT_SECS: u64 = 10;
const CACHE_DIR: &str = "league_progress";
const CACHE_FILE: &str = "feeds.json";

static CLIENT: OnceCell<Client> = OnceCell::new();

fn http_client() -> Result<&'static Client> {
    CLIENT.get_or_try_init(|| {
        Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("failed to build http client")
    })
}

/// Which feed provider to pull a season from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    FootballData,
    FixtureDownload,
}

impl Source {
    /// Provider auto-selection: fixturedownload only carries current
    /// seasons for a handful of leagues; everything else comes from
    /// football-data.
    pub fn auto(year: u16, league_code: &str) -> Source {
        if year >= 2023 && league::fixturedownload_alias(league_code).is_some() {
            Source::FixtureDownload
        } else {
            Source::FootballData
        }
    }

    /// The CSV layout this provider emits.
    pub fn layout(self) -> Layout {
        match self {
            Source::FootballData => Layout::FootballData,
            Source::FixtureDownload => Layout::FixtureDownload,
        }
    }

    fn key_part(self) -> &'static str {
        match self {
            Source::FootballData => "footballdata",
            Source::FixtureDownload => "fixturedownload",
        }
    }
}

impl FromStr for Source {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "footballdata" => Ok(Source::FootballData),
            "fixturedownload" => Ok(Source::FixtureDownload),
            other => Err(Error::UnknownLayout(other.to_string())),
        }
    }
}

/// football-data keys a season by the two 2-digit years it spans.
pub fn footballdata_url(year: u16, league_code: &str) -> String {
    format!(
        "https://www.football-data.co.uk/mmz4281/{:02}{:02}/{league_code}.csv",
        year % 100,
        (year + 1) % 100
    )
}

pub fn fixturedownload_url(year: u16, league_code: &str) -> Result<String> {
    let slug = league::fixturedownload_alias(league_code)
        .ok_or_else(|| anyhow!("league {league_code} not available from fixturedownload"))?;
    Ok(format!(
        "https://fixturedownload.com/download/{slug}-{year}-UTC.csv"
    ))
}

/// Caller-owned feed cache with optional JSON persistence. Construct with
/// [`FeedCache::in_memory`] or [`FeedCache::at_path`]; nothing here holds
/// process-wide state.
#[derive(Debug, Default)]
pub struct FeedCache {
    entries: HashMap<String, String>,
    path: Option<PathBuf>,
}

impl FeedCache {
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Cache backed by a JSON file; loads any existing content, ignores a
    /// missing or unreadable file.
    pub fn at_path(path: PathBuf) -> Self {
        let entries = fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_json::from_str::<HashMap<String, String>>(&raw).ok())
            .unwrap_or_default();
        Self {
            entries,
            path: Some(path),
        }
    }

    /// Default on-disk location, preferring `XDG_CACHE_HOME`.
    pub fn default_path() -> Option<PathBuf> {
        if let Ok(base) = std::env::var("XDG_CACHE_HOME")
            && !base.trim().is_empty()
        {
            return Some(PathBuf::from(base).join(CACHE_DIR).join(CACHE_FILE));
        }
        let home = std::env::var("HOME").ok()?;
        if home.trim().is_empty() {
            return None;
        }
        Some(
            PathBuf::from(home)
                .join(".cache")
                .join(CACHE_DIR)
                .join(CACHE_FILE),
        )
    }

    pub fn invalidate(&mut self, year: u16, league_code: &str, source: Source) {
        self.entries.remove(&cache_key(year, league_code, source));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn persist(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        let tmp = path.with_extension("json.tmp");
        let json = serde_json::to_string(&self.entries).context("serialize feed cache")?;
        fs::write(&tmp, json).context("write feed cache")?;
        fs::rename(&tmp, path).context("swap feed cache")?;
        Ok(())
    }
}

fn cache_key(year: u16, league_code: &str, source: Source) -> String {
    format!("{}:{league_code}:{year}", source.key_part())
}

/// Fetch one season's raw feed text, going to the network only on a cache
/// miss.
pub fn fetch_feed(
    cache: &mut FeedCache,
    year: u16,
    league_code: &str,
    source: Source,
) -> Result<String> {
    let key = cache_key(year, league_code, source);
    if let Some(body) = cache.entries.get(&key) {
        debug!(%key, "feed cache hit");
        return Ok(body.clone());
    }

    let url = match source {
        Source::FootballData => footballdata_url(year, league_code),
        Source::FixtureDownload => fixturedownload_url(year, league_code)?,
    };
    debug!(%key, %url, "fetching feed");

    let client = http_client()?;
    let resp = client.get(&url).send().context("feed request failed")?;
    let status = resp.status();
    let body = resp.text().context("failed reading feed body")?;
    if !status.is_success() {
        return Err(anyhow!("http {status} fetching {url}"));
    }

    cache.entries.insert(key, body.clone());
    cache.persist()?;
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footballdata_url_spans_two_years() {
        assert_eq!(
            footballdata_url(2023, "E0"),
            "https://www.football-data.co.uk/mmz4281/2324/E0.csv"
        );
        assert_eq!(
            footballdata_url(2009, "SC0"),
            "https://www.football-data.co.uk/mmz4281/0910/SC0.csv"
        );
    }

    #[test]
    fn fixturedownload_url_uses_slug() {
        assert_eq!(
            fixturedownload_url(2023, "E0").unwrap(),
            "https://fixturedownload.com/download/epl-2023-UTC.csv"
        );
        assert!(fixturedownload_url(2023, "SC0").is_err());
    }

    #[test]
    fn auto_source_prefers_fixturedownload_when_available() {
        assert_eq!(Source::auto(2023, "E0"), Source::FixtureDownload);
        assert_eq!(Source::auto(2023, "SC0"), Source::FootballData);
        assert_eq!(Source::auto(2015, "E0"), Source::FootballData);
    }

    #[test]
    fn invalidate_forces_refetch_key() {
        let mut cache = FeedCache::in_memory();
        cache
            .entries
            .insert(cache_key(2023, "E0", Source::FootballData), "body".into());
        cache.invalidate(2023, "E0", Source::FootballData);
        assert!(cache.entries.is_empty());
    }
}
