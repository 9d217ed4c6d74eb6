//! Top-level dashboard panels.
//!
//! Each builder returns one element tagged with a stable id so the page can
//! be inspected (and styled) panel by panel.

mod discussion;
mod emotion;
mod header;
mod recording;
mod suggestions;
mod trends;

pub use discussion::{discussion_grid, fact_checking_section, transcription_section};
pub use emotion::emotion_detection_section;
pub use header::header;
pub use recording::recording_section;
pub use suggestions::mediator_suggestions_section;
pub use trends::{trend_graph, trend_legend, trends_section};

pub const HEADER_ID: &str = "header";
pub const RECORDING_ID: &str = "recording";
pub const DISCUSSION_GRID_ID: &str = "discussion-grid";
pub const TRANSCRIPTION_ID: &str = "transcription";
pub const FACT_CHECKING_ID: &str = "fact-checking";
pub const EMOTION_ID: &str = "emotion-detection";
pub const SUGGESTIONS_ID: &str = "mediator-suggestions";
pub const TRENDS_ID: &str = "trends";

// Inner containers, addressable for tests and page scripts.
pub const TRANSCRIPT_LOG_ID: &str = "transcript-log";
pub const FACT_CHECK_LIST_ID: &str = "fact-check-list";
pub const MOOD_LIST_ID: &str = "mood-list";
pub const SUGGESTION_LIST_ID: &str = "suggestion-list";
pub const EMOTION_SERIES_ID: &str = "emotion-series";
pub const PRODUCTIVITY_SERIES_ID: &str = "productivity-series";
pub const MOOD_SCALE_ID: &str = "mood-scale";
pub const TIME_AXIS_ID: &str = "time-axis";
pub const TREND_LEGEND_ID: &str = "trend-legend";
