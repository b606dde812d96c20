// WHY: Locate a passage in a raw transcript either by "Act N Scene M" reference or by a
// quoted fragment, reporting which act and scene the fragment falls in

use anyhow::Result;
use regex_automata::meta::Regex;
use std::fmt;
use thiserror::Error;

use crate::numerals::{int_to_roman, parse_numeral};
use crate::script_parser::capture_groups;

/// Lines searched after an act header for the requested scene header
pub const SCENE_SEARCH_LINES: usize = 10;
pub const DEFAULT_SEGMENT_LINES: usize = 500;

const REFERENCE_PATTERN: &str = r"(?i)^act\s+([0-9]+)(?:\s+scene\s+([0-9]+))?";
const SCENE_MARKER_PATTERN: &str = r"(?i)\bSCENE\s+([IVXLCDM]+|[0-9]+)\b";
const ACT_MARKER_PATTERN: &str = r"(?i)\bACT\s+([IVXLCDM]+|[0-9]+)\b";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PassageError {
    #[error("Could not find {0}")]
    NotFound(String),
}

/// An "Act N" or "Act N Scene M" reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActSceneRef {
    pub act: u32,
    pub scene: Option<u32>,
}

impl fmt::Display for ActSceneRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.scene {
            Some(scene) => write!(f, "Act {}, Scene {}", self.act, scene),
            None => write!(f, "Act {}", self.act),
        }
    }
}

/// Where a text fragment was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassageLocation {
    pub line_index: usize,
    pub act: Option<u32>,
    pub scene: Option<u32>,
}

impl fmt::Display for PassageLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.act, self.scene) {
            (Some(act), Some(scene)) => write!(f, "Act {act}, Scene {scene}"),
            (Some(act), None) => write!(f, "Act {act}"),
            _ => write!(f, "Unknown location"),
        }
    }
}

/// Parse "Act 2" or "Act 2 Scene 3"; anything else is treated as a text search by callers
pub fn parse_reference(reference: &str) -> Result<Option<ActSceneRef>> {
    let regex = Regex::new(REFERENCE_PATTERN)?;
    let Some(groups) = capture_groups(&regex, reference.trim()) else {
        return Ok(None);
    };
    let act = groups.get(1).copied().flatten().and_then(|n| n.parse().ok());
    let scene = groups.get(2).copied().flatten().and_then(|n| n.parse().ok());
    Ok(act.map(|act| ActSceneRef { act, scene }))
}

fn numbered_marker(word: &str, number: u32) -> Result<Regex> {
    let pattern = format!(r"(?i)\b{word}\s+(?:{number}|{roman})\b", roman = int_to_roman(number));
    Ok(Regex::new(&pattern)?)
}

/// Index of the line where the referenced act (and scene, if given) begins
pub fn find_act_scene_line(lines: &[String], reference: ActSceneRef) -> Result<usize> {
    let act_marker = numbered_marker("ACT", reference.act)?;
    let scene_marker = match reference.scene {
        Some(scene) => Some(numbered_marker("SCENE", scene)?),
        None => None,
    };

    for (index, line) in lines.iter().enumerate() {
        if !act_marker.is_match(line.as_str()) {
            continue;
        }
        let Some(scene_marker) = &scene_marker else {
            return Ok(index);
        };
        let end = (index + SCENE_SEARCH_LINES).min(lines.len());
        if let Some(offset) = lines[index..end]
            .iter()
            .position(|candidate| scene_marker.is_match(candidate.as_str()))
        {
            return Ok(index + offset);
        }
    }

    Err(PassageError::NotFound(reference.to_string()).into())
}

fn marker_number(regex: &Regex, line: &str) -> Option<u32> {
    let groups = capture_groups(regex, line)?;
    parse_numeral(groups.get(1).copied().flatten()?)
}

/// Find the first line containing `needle` (case-insensitive) and the act and scene
/// markers nearest above it
pub fn find_text_context(lines: &[String], needle: &str) -> Result<PassageLocation> {
    let needle_lower = needle.trim().to_lowercase();
    let line_index = lines
        .iter()
        .position(|line| line.to_lowercase().contains(&needle_lower))
        .ok_or_else(|| PassageError::NotFound(format!("text: '{}'", needle.trim())))?;

    let scene_marker = Regex::new(SCENE_MARKER_PATTERN)?;
    let act_marker = Regex::new(ACT_MARKER_PATTERN)?;

    let mut location = PassageLocation {
        line_index,
        act: None,
        scene: None,
    };
    for line in lines[..=line_index].iter().rev() {
        if location.scene.is_none() {
            location.scene = marker_number(&scene_marker, line);
        }
        if location.act.is_none() {
            location.act = marker_number(&act_marker, line);
        }
        if location.act.is_some() && location.scene.is_some() {
            break;
        }
    }
    Ok(location)
}

/// Up to `count` lines starting at `start`
pub fn extract_segment(lines: &[String], start: usize, count: usize) -> &[String] {
    let start = start.min(lines.len());
    let end = start.saturating_add(count).min(lines.len());
    &lines[start..end]
}
