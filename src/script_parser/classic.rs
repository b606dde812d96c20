// WHY: Classic dialect - "ACT I" / "SCENE II" header lines, period-terminated speaker
// labels (optionally italicised with underscores), Enter/Exit stage directions

use anyhow::Result;
use regex_automata::meta::Regex;
use tracing::debug;

use super::{capture_groups, Cursor, Dialect, LineWindow, Transition};
use crate::numerals::roman_to_int;

pub const ACT_HEADER_PATTERN: &str = r"(?i)^ACT\s+([IVXLCDM]+)\.?\s*$";
const SCENE_HEADER_PATTERN: &str = r"(?i)^SCENE\s+([IVXLCDM]+)\b\.?\s*(.*)$";
const REDUNDANT_HEADER_PATTERN: &str = r"(?i)^Act\s+[0-9]+\s+Scene\s+[0-9]+\s*$";
const ENTER_MARKER_PATTERN: &str = r"(?i)(?:^|_)\s*Enter\s+";
/// Keyword anywhere in the line on a word boundary, so a speech ending "...enter." also
/// counts as a direction
const STAGE_DIRECTION_PATTERN: &str = r"(?i)(?:^|[_\s\[(])(?:Enter|Exit|Exeunt|Re-enter)\b";
const SPEAKER_PATTERN: &str = r"^_?([A-Z][A-Za-z\s'\-]+)\._?\s*$";
// Lines that look like another header or an all-caps "NAME." label are never a location
const NON_LOCATION_PATTERN: &str = r"^(?:(?i:ACT|SCENE)|[A-Z\s]+\.)";
const FRONT_MATTER_PATTERN: &str = r"(?i)^(?:DRAMATIS|CHARACTERS|SCENE\.)";

/// How far past an act header to look for an "Enter" line before content has begun
pub const ENTRY_LOOKAHEAD_LINES: usize = 10;

pub struct ClassicDialect {
    act_header: Regex,
    scene_header: Regex,
    redundant_header: Regex,
    enter_marker: Regex,
    stage_direction: Regex,
    speaker: Regex,
    non_location: Regex,
    front_matter: Regex,
    /// An "Enter" line has been seen, so act headers are no longer table-of-contents entries
    entered_content: bool,
    /// The first real act header has been accepted
    started: bool,
    /// Between a scene header and the first stage direction
    in_scene_header: bool,
}

impl ClassicDialect {
    pub fn new() -> Result<Self> {
        Ok(Self {
            act_header: Regex::new(ACT_HEADER_PATTERN)?,
            scene_header: Regex::new(SCENE_HEADER_PATTERN)?,
            redundant_header: Regex::new(REDUNDANT_HEADER_PATTERN)?,
            enter_marker: Regex::new(ENTER_MARKER_PATTERN)?,
            stage_direction: Regex::new(STAGE_DIRECTION_PATTERN)?,
            speaker: Regex::new(SPEAKER_PATTERN)?,
            non_location: Regex::new(NON_LOCATION_PATTERN)?,
            front_matter: Regex::new(FRONT_MATTER_PATTERN)?,
            entered_content: false,
            started: false,
            in_scene_header: false,
        })
    }

    fn act_number(&self, line: &str) -> Option<u32> {
        let groups = capture_groups(&self.act_header, line)?;
        groups.get(1).copied().flatten().map(roman_to_int)
    }

    /// An act header before any "Enter" line still counts when an "Enter" line follows
    /// closely. A second scene header or another act header first means a contents listing.
    fn entry_follows(&self, window: &LineWindow<'_>) -> bool {
        let mut scene_headers = 0;
        for line in window.ahead(ENTRY_LOOKAHEAD_LINES) {
            if self.act_header.is_match(line) {
                return false;
            }
            if self.scene_header.is_match(line) {
                scene_headers += 1;
                if scene_headers > 1 {
                    return false;
                }
            }
            if self.enter_marker.is_match(line) {
                return true;
            }
        }
        false
    }

    fn scene_header(&self, window: &LineWindow<'_>) -> Option<Transition> {
        let line = window.current();
        let groups = capture_groups(&self.scene_header, line)?;
        let number = roman_to_int(groups.get(1).copied().flatten()?);
        let mut location = groups.get(2).copied().flatten().unwrap_or("").trim().to_string();

        if location.is_empty() {
            if let Some(next) = window.next() {
                if !next.is_empty() && !self.non_location.is_match(next) {
                    location = next.to_string();
                }
            }
        }

        Some(Transition::OpenScene {
            number,
            title: line.to_string(),
            location,
        })
    }
}

impl Dialect for ClassicDialect {
    fn name(&self) -> &'static str {
        "classic"
    }

    fn classify(&mut self, window: &LineWindow<'_>, cursor: Cursor) -> Vec<Transition> {
        let line = window.current();

        if !self.entered_content && self.enter_marker.is_match(line) {
            self.entered_content = true;
        }

        if !self.started {
            let opens_play = self.act_header.is_match(line)
                && (self.entered_content || self.entry_follows(window));
            if !opens_play {
                return vec![Transition::Skip];
            }
            debug!(line = window.index() + 1, "Play content begins");
            self.started = true;
        }

        if let Some(number) = self.act_number(line) {
            return vec![Transition::OpenAct {
                number,
                title: line.to_string(),
            }];
        }

        if cursor.act_open() {
            if let Some(transition) = self.scene_header(window) {
                self.in_scene_header = true;
                return vec![transition];
            }
        }

        if self.redundant_header.is_match(line) {
            self.in_scene_header = false;
            return vec![Transition::Skip];
        }

        if cursor.scene_open && self.stage_direction.is_match(line) {
            self.in_scene_header = false;
            return vec![Transition::StageDirection(line.to_string())];
        }

        if line.is_empty() {
            return vec![Transition::Skip];
        }

        if !cursor.scene_open {
            return vec![Transition::Unclaimed];
        }

        if self.in_scene_header {
            return vec![Transition::Skip];
        }

        if let Some(groups) = capture_groups(&self.speaker, line) {
            if let Some(name) = groups.get(1).copied().flatten() {
                return vec![Transition::SetSpeaker(name.trim().to_uppercase())];
            }
        }

        if line.starts_with('[') || line.starts_with('(') {
            return vec![Transition::StageDirection(line.to_string())];
        }

        if cursor.speaker_set {
            vec![Transition::Dialogue(line.to_string())]
        } else if self.front_matter.is_match(line) {
            vec![Transition::Skip]
        } else {
            vec![Transition::Unclaimed]
        }
    }
}
