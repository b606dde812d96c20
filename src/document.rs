// WHY: Owned Act -> Scene -> Entry tree produced by the script parser and serialized
// as the JSON output shape consumed by the reader front end

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

/// Speaker value written for entries that are not dialogue
pub const STAGE_DIRECTION_SPEAKER: &str = "STAGE_DIRECTION";

/// A whole play: metadata plus acts in encounter order
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct PlayDocument {
    pub title: String,
    pub author: String,
    pub acts: Vec<Act>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Act {
    /// Number taken verbatim from the header line, never renumbered
    pub act_number: u32,
    /// Display form, e.g. "ACT I"
    pub act_title: String,
    pub scenes: Vec<Scene>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    pub scene_number: u32,
    pub scene_title: String,
    /// Free-text locale such as "A public place"; empty when none was found
    pub location: String,
    pub lines: Vec<Entry>,
}

/// One dialogue paragraph or one stage direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Dialogue { speaker: String, text: String },
    StageDirection { text: String },
}

impl Entry {
    /// Speaker name, or the stage-direction sentinel
    pub fn speaker(&self) -> &str {
        match self {
            Entry::Dialogue { speaker, .. } => speaker,
            Entry::StageDirection { .. } => STAGE_DIRECTION_SPEAKER,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Entry::Dialogue { text, .. } | Entry::StageDirection { text } => text,
        }
    }

    pub fn is_stage_direction(&self) -> bool {
        matches!(self, Entry::StageDirection { .. })
    }
}

// Both variants flatten to {"speaker", "text"}; stage directions use the sentinel speaker
impl Serialize for Entry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Entry", 2)?;
        state.serialize_field("speaker", self.speaker())?;
        state.serialize_field("text", self.text())?;
        state.end()
    }
}

impl Act {
    pub fn new(act_number: u32, act_title: impl Into<String>) -> Self {
        Self {
            act_number,
            act_title: act_title.into(),
            scenes: Vec::new(),
        }
    }
}

impl Scene {
    pub fn new(scene_number: u32, scene_title: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            scene_number,
            scene_title: scene_title.into(),
            location: location.into(),
            lines: Vec::new(),
        }
    }
}

impl PlayDocument {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            acts: Vec::new(),
        }
    }

    pub fn act_count(&self) -> usize {
        self.acts.len()
    }

    pub fn scene_count(&self) -> usize {
        self.acts.iter().map(|act| act.scenes.len()).sum()
    }

    /// Total dialogue and stage-direction entries across all scenes
    pub fn entry_count(&self) -> usize {
        self.acts
            .iter()
            .flat_map(|act| &act.scenes)
            .map(|scene| scene.lines.len())
            .sum()
    }

    /// Serialize with two-space indentation; non-ASCII text is written unescaped
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
