use thiserror::Error;

/// Failures the core surfaces to callers.
///
/// Rows that merely lack a score are not represented here: an unplayed
/// fixture is expected data and the parser drops the row silently.
#[derive(Debug, Error)]
pub enum Error {
    /// A row with a valid score whose date matches neither accepted format.
    /// This aborts the whole parse; it indicates a structurally broken feed.
    #[error("malformed date {raw:?}: matches neither accepted date format")]
    MalformedDate { raw: String },

    /// The feed header is missing a column the selected layout requires.
    #[error("feed is missing required column {0:?}")]
    MissingColumn(&'static str),

    /// The caller asked for a layout or source selector we do not know.
    #[error("unknown layout {0:?}")]
    UnknownLayout(String),

    /// No built-in league specification for this code.
    #[error("unknown league {0:?}")]
    UnknownLeague(String),

    /// The aggregator was handed no completed fixtures at all.
    #[error("no completed fixtures in input")]
    EmptyInput,

    /// Form smoothing needs a window of at least one game.
    #[error("window size must be at least 1")]
    WindowTooSmall,
}

pub type Result<T> = std::result::Result<T, Error>;
