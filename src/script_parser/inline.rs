// WHY: Inline dialect - single "Act 1 Scene 2" header lines, bare all-caps speaker lines,
// scene locations sniffed from the lines around the header

use anyhow::Result;
use regex_automata::meta::Regex;

use super::{capture_groups, Cursor, Dialect, LineWindow, Transition};
use crate::numerals::int_to_roman;

pub const HEADER_PATTERN: &str = r"(?i)^Act\s+([0-9]+)\s+Scene\s+([0-9]+)\s*$";
const ACT_PREFIX_PATTERN: &str = r"(?i)^Act\s+[0-9]+";
const ENTRANCE_PATTERN: &str = r"(?i)^(?:Enter|Exit)";
const STAGE_DIRECTION_PATTERN: &str = r"(?i)^(?:Enter|Exit|Exeunt|Re-enter|Aside|Within)\b";
const NOT_A_SPEAKER_PATTERN: &str = r"(?i)^(?:Enter|Exit|Exeunt|Re-enter|Aside|Within|Alarum|Flourish)";

/// Speaker lines are shorter than this many characters
pub const MAX_SPEAKER_CHARS: usize = 30;

pub struct InlineDialect {
    header: Regex,
    act_prefix: Regex,
    entrance: Regex,
    stage_direction: Regex,
    not_a_speaker: Regex,
    /// The first header has been seen; everything earlier is discarded
    started: bool,
}

/// Has at least one cased letter and no lower-case letters
fn is_all_upper(line: &str) -> bool {
    line.chars().any(char::is_uppercase) && !line.chars().any(char::is_lowercase)
}

impl InlineDialect {
    pub fn new() -> Result<Self> {
        Ok(Self {
            header: Regex::new(HEADER_PATTERN)?,
            act_prefix: Regex::new(ACT_PREFIX_PATTERN)?,
            entrance: Regex::new(ENTRANCE_PATTERN)?,
            stage_direction: Regex::new(STAGE_DIRECTION_PATTERN)?,
            not_a_speaker: Regex::new(NOT_A_SPEAKER_PATTERN)?,
            started: false,
        })
    }

    /// Previous line unless it is itself a header, else next line unless it is an entrance
    fn sniff_location(&self, window: &LineWindow<'_>) -> String {
        if let Some(previous) = window.previous() {
            if !previous.is_empty() && !self.act_prefix.is_match(previous) {
                return previous.to_string();
            }
        }
        if let Some(next) = window.next() {
            if !next.is_empty() && !self.entrance.is_match(next) {
                return next.to_string();
            }
        }
        String::new()
    }

    fn is_speaker(&self, line: &str) -> bool {
        is_all_upper(line) && line.chars().count() < MAX_SPEAKER_CHARS && !self.not_a_speaker.is_match(line)
    }

    fn header(&self, window: &LineWindow<'_>, cursor: Cursor) -> Option<Vec<Transition>> {
        let groups = capture_groups(&self.header, window.current())?;
        let act: u32 = groups.get(1).copied().flatten()?.parse().ok()?;
        let scene: u32 = groups.get(2).copied().flatten()?.parse().ok()?;

        let mut transitions = Vec::with_capacity(2);
        if cursor.act_number != Some(act) {
            transitions.push(Transition::OpenAct {
                number: act,
                title: format!("ACT {}", int_to_roman(act)),
            });
        }

        let location = self.sniff_location(window);
        let title = if location.is_empty() {
            format!("Scene {}", int_to_roman(scene))
        } else {
            format!("Scene {}. {}", int_to_roman(scene), location)
        };
        transitions.push(Transition::OpenScene {
            number: scene,
            title,
            location: location.to_uppercase(),
        });
        Some(transitions)
    }
}

impl Dialect for InlineDialect {
    fn name(&self) -> &'static str {
        "inline"
    }

    fn classify(&mut self, window: &LineWindow<'_>, cursor: Cursor) -> Vec<Transition> {
        if let Some(transitions) = self.header(window, cursor) {
            self.started = true;
            return transitions;
        }

        let line = window.current();
        if !self.started || line.is_empty() {
            return vec![Transition::Skip];
        }

        if self.stage_direction.is_match(line) {
            return vec![Transition::Interjection(line.to_string())];
        }

        if self.is_speaker(line) {
            return vec![Transition::SetSpeaker(line.to_string())];
        }

        if cursor.speaker_set {
            vec![Transition::Dialogue(line.to_string())]
        } else {
            vec![Transition::Unclaimed]
        }
    }
}
