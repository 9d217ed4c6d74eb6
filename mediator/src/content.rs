//! Mock copy shown on the dashboard.
//!
//! Array lengths fix how many entries each panel shows.

use webdom::Color;

use crate::theme::{AMBER_400, AMBER_600, EMERALD_400, ORANGE_400, ORANGE_600};

pub const TITLE: &str = "Discussion Mediator";

/// `(label, line)` pairs of the live transcript.
pub const TRANSCRIPT: [(&str, &str); 4] = [
    (
        "Speaker 1:",
        " I believe we should increase funding for education.",
    ),
    (
        "Speaker 2:",
        " But where would that money come from? We're already facing budget constraints.",
    ),
    (
        "Speaker 1:",
        " We could reallocate funds from other areas, such as defense spending.",
    ),
    (
        "Speaker 2:",
        " That's a sensitive topic. We need to ensure our national security isn't compromised.",
    ),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Claim {
    pub claim: &'static str,
    pub status: &'static str,
    pub status_color: Color,
    pub explanation: &'static str,
}

pub const CLAIMS: [Claim; 2] = [
    Claim {
        claim: "Education funding is insufficient",
        status: "Partially True",
        status_color: AMBER_600,
        explanation: "While education funding varies by region, many areas report underfunding issues.",
    },
    Claim {
        claim: "Reallocating defense funds is viable",
        status: "Debatable",
        status_color: ORANGE_600,
        explanation: "This is a complex issue with various economic and security implications.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mood {
    pub speaker: &'static str,
    pub mood: &'static str,
    pub icon: &'static str,
}

pub const MOODS: [Mood; 2] = [
    Mood {
        speaker: "Speaker 1",
        mood: "Calm",
        icon: "smile",
    },
    Mood {
        speaker: "Speaker 2",
        mood: "Concerned",
        icon: "frown",
    },
];

pub const SUGGESTIONS: [&str; 3] = [
    "Encourage speakers to provide specific data to support their claims.",
    "Suggest exploring compromise solutions that address both education and security concerns.",
    "Remind participants to maintain a respectful tone and consider each other's perspectives.",
];

/// Bar color and height (percent) of the emotion series.
pub const EMOTION_SERIES: [(Color, f64); 5] = [
    (EMERALD_400, 25.0),
    (AMBER_400, 50.0),
    (ORANGE_400, 75.0),
    (AMBER_400, 50.0),
    (EMERALD_400, 33.333333),
];

/// Bar heights (percent) of the productivity series.
pub const PRODUCTIVITY_SERIES: [f64; 5] = [33.333333, 50.0, 25.0, 60.0, 66.666667];

pub const MOOD_SCALE: [&str; 3] = ["Calm", "Concerned", "Frustrated"];

pub const TIME_AXIS: [&str; 5] = ["0:00", "1:15", "2:30", "3:45", "5:00"];

pub const RECORDING_START: &str = "0:00";
pub const RECORDING_END: &str = "5:00";
/// How much of the recording track is filled.
pub const RECORDING_PROGRESS: f64 = 33.333333;

pub const SUGGESTIONS_HEADING: &str = "Mediator Suggestions";
pub const TRANSCRIPTION_HEADING: &str = "Live Transcription";
pub const FACT_CHECK_HEADING: &str = "Fact-Checking";
pub const EMOTION_HEADING: &str = "Emotion Detection";
pub const TRENDS_HEADING: &str = "Emotion and Productivity Trends";
