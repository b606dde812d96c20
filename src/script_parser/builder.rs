use tracing::debug;

use super::{Cursor, Transition};
use crate::document::{Act, Entry, PlayDocument, Scene};

/// Applies classified transitions to the in-progress document.
///
/// The open act is always the last act and the open scene is always the last scene of
/// that act; sections are closed implicitly by appending a new one.
#[derive(Debug)]
pub struct DocumentBuilder {
    document: PlayDocument,
    scene_open: bool,
    speaker: Option<String>,
    buffer: Vec<String>,
    discarded: usize,
}

impl DocumentBuilder {
    pub fn new(document: PlayDocument) -> Self {
        Self {
            document,
            scene_open: false,
            speaker: None,
            buffer: Vec::new(),
            discarded: 0,
        }
    }

    pub fn cursor(&self) -> Cursor {
        Cursor {
            act_number: self.document.acts.last().map(|act| act.act_number),
            scene_open: self.scene_open,
            speaker_set: self.speaker.is_some(),
        }
    }

    pub fn current_speaker(&self) -> Option<&str> {
        self.speaker.as_deref()
    }

    fn current_scene(&mut self) -> Option<&mut Scene> {
        if !self.scene_open {
            return None;
        }
        self.document.acts.last_mut().and_then(|act| act.scenes.last_mut())
    }

    /// Turn buffered lines into a dialogue entry for the current speaker.
    /// The speaker itself is left alone; callers clear it when their rule requires.
    pub fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let text = self.buffer.join("\n");
        self.buffer.clear();

        let Some(speaker) = self.speaker.clone() else {
            return;
        };
        match self.current_scene() {
            Some(scene) => scene.lines.push(Entry::Dialogue { speaker, text }),
            None => self.discarded += 1,
        }
    }

    fn push_stage_direction(&mut self, text: String) {
        match self.current_scene() {
            Some(scene) => scene.lines.push(Entry::StageDirection { text }),
            None => self.discarded += 1,
        }
    }

    pub fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::Skip => {}
            Transition::Unclaimed => self.discarded += 1,
            Transition::OpenAct { number, title } => {
                self.flush();
                debug!(act = number, %title, "Opening act");
                self.document.acts.push(Act::new(number, title));
                self.scene_open = false;
                self.speaker = None;
            }
            Transition::OpenScene { number, title, location } => {
                self.flush();
                self.speaker = None;
                match self.document.acts.last_mut() {
                    Some(act) => {
                        debug!(act = act.act_number, scene = number, %location, "Opening scene");
                        act.scenes.push(Scene::new(number, title, location));
                        self.scene_open = true;
                    }
                    None => {
                        debug!(scene = number, "Scene header with no open act");
                        self.discarded += 1;
                    }
                }
            }
            Transition::SetSpeaker(name) => {
                self.flush();
                self.speaker = Some(name);
            }
            Transition::StageDirection(text) => {
                self.flush();
                self.speaker = None;
                self.push_stage_direction(text);
            }
            Transition::Interjection(text) => {
                if !self.buffer.is_empty() {
                    self.flush();
                    self.speaker = None;
                }
                self.push_stage_direction(text);
            }
            Transition::Dialogue(text) => {
                if self.scene_open && self.speaker.is_some() {
                    self.buffer.push(text);
                } else {
                    self.discarded += 1;
                }
            }
        }
    }

    /// Flush any trailing speech and hand back the document with the discarded-line count
    pub fn finish(mut self) -> (PlayDocument, usize) {
        self.flush();
        (self.document, self.discarded)
    }
}
