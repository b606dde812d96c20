// WHY: Line-classification state machine that recovers Act/Scene/speaker structure from
// plain-text play transcripts. Dialects decide what a line means; the builder applies it.

use anyhow::Result;
use regex_automata::meta::Regex;
use tracing::{debug, info};

use crate::document::PlayDocument;

pub mod builder;
pub mod classic;
pub mod inline;

pub use builder::DocumentBuilder;
pub use classic::ClassicDialect;
pub use inline::InlineDialect;

/// Number of leading lines inspected when sniffing a play title
pub const TITLE_SCAN_LINES: usize = 50;

pub const DEFAULT_TITLE: &str = "Unknown Play";
pub const DEFAULT_AUTHOR: &str = "William Shakespeare";

/// Mutation requested by a dialect for one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Line carries no content (blank, front matter, header noise)
    Skip,
    /// Line had content but no rule could place it
    Unclaimed,
    OpenAct { number: u32, title: String },
    OpenScene { number: u32, title: String, location: String },
    SetSpeaker(String),
    StageDirection(String),
    /// Stage direction that leaves a speaker in place until they have spoken
    Interjection(String),
    Dialogue(String),
}

/// Read-only snapshot of builder state consulted by classification rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub act_number: Option<u32>,
    pub scene_open: bool,
    pub speaker_set: bool,
}

impl Cursor {
    pub fn act_open(&self) -> bool {
        self.act_number.is_some()
    }
}

/// Bounded random-access view around the line being classified
#[derive(Debug, Clone, Copy)]
pub struct LineWindow<'a> {
    lines: &'a [String],
    index: usize,
}

impl<'a> LineWindow<'a> {
    pub fn new(lines: &'a [String], index: usize) -> Self {
        Self { lines, index }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Current line with surrounding whitespace removed
    pub fn current(&self) -> &'a str {
        self.lines.get(self.index).map_or("", |line| line.trim())
    }

    pub fn previous(&self) -> Option<&'a str> {
        self.index
            .checked_sub(1)
            .and_then(|i| self.lines.get(i))
            .map(|line| line.trim())
    }

    pub fn next(&self) -> Option<&'a str> {
        self.lines.get(self.index + 1).map(|line| line.trim())
    }

    /// Up to `count` trimmed lines following the current one
    pub fn ahead(&self, count: usize) -> impl Iterator<Item = &'a str> + 'a {
        let lines = self.lines;
        let start = (self.index + 1).min(lines.len());
        let end = (start + count).min(lines.len());
        lines[start..end].iter().map(|line| line.trim())
    }
}

/// A rule set that maps each raw line to builder transitions
pub trait Dialect {
    fn name(&self) -> &'static str;

    /// Classify the line under `window` given the current builder state
    fn classify(&mut self, window: &LineWindow<'_>, cursor: Cursor) -> Vec<Transition>;

    /// Best-effort title detection over the front of the file
    fn sniff_title(&self, lines: &[String]) -> Option<String> {
        sniff_title(lines)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialectKind {
    /// "ACT I" / "SCENE II" headers, period-terminated speaker labels
    Classic,
    /// "Act 1 Scene 2" headers, all-caps speaker lines
    Inline,
}

impl DialectKind {
    /// Pick a dialect by looking for either header style anywhere in the text.
    /// Classic act headers win; inline headers alone select Inline; neither falls back to Classic.
    pub fn detect(lines: &[String]) -> Result<Self> {
        let classic_act = Regex::new(classic::ACT_HEADER_PATTERN)?;
        let inline_header = Regex::new(inline::HEADER_PATTERN)?;

        let mut saw_inline = false;
        for line in lines {
            let line = line.trim();
            if classic_act.is_match(line) {
                return Ok(DialectKind::Classic);
            }
            saw_inline |= inline_header.is_match(line);
        }

        Ok(if saw_inline {
            DialectKind::Inline
        } else {
            DialectKind::Classic
        })
    }

    pub fn build(self) -> Result<Box<dyn Dialect>> {
        Ok(match self {
            DialectKind::Classic => Box::new(ClassicDialect::new()?),
            DialectKind::Inline => Box::new(InlineDialect::new()?),
        })
    }
}

/// Document metadata overrides
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Title to use instead of the sniffed one
    pub title: Option<String>,
    pub author: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            title: None,
            author: DEFAULT_AUTHOR.to_string(),
        }
    }
}

/// Partial-success summary returned beside the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseReport {
    pub dialect: &'static str,
    pub lines_read: usize,
    /// Lines with content that no rule could place in the document
    pub discarded_lines: usize,
}

/// Look for well-known play names in the first lines of a transcript
pub fn sniff_title(lines: &[String]) -> Option<String> {
    for line in lines.iter().take(TITLE_SCAN_LINES) {
        let upper = line.trim().to_uppercase();
        if upper.contains("TEMPEST") && !upper.starts_with("SCENE") {
            return Some("The Tempest".to_string());
        }
        if upper.contains("ROMEO") && upper.contains("JULIET") {
            return Some("Romeo and Juliet".to_string());
        }
    }
    None
}

/// Split text into lines, accepting `\n`, `\r\n` and bare `\r` terminators
pub fn split_lines(text: &str) -> Vec<String> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    normalized.lines().map(str::to_string).collect()
}

/// Run one forward pass of `dialect` over `lines`
pub fn parse_lines(
    lines: &[String],
    dialect: &mut dyn Dialect,
    options: &ParseOptions,
) -> (PlayDocument, ParseReport) {
    let title = options
        .title
        .clone()
        .or_else(|| dialect.sniff_title(lines))
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    let mut builder = DocumentBuilder::new(PlayDocument::new(title, options.author.clone()));

    for index in 0..lines.len() {
        let window = LineWindow::new(lines, index);
        for transition in dialect.classify(&window, builder.cursor()) {
            builder.apply(transition);
        }
    }

    let (document, discarded_lines) = builder.finish();
    let report = ParseReport {
        dialect: dialect.name(),
        lines_read: lines.len(),
        discarded_lines,
    };

    info!(
        dialect = report.dialect,
        lines = report.lines_read,
        acts = document.act_count(),
        scenes = document.scene_count(),
        entries = document.entry_count(),
        discarded = report.discarded_lines,
        "Parsed play script"
    );

    (document, report)
}

/// Parse raw script text with the given dialect, or auto-detect when `kind` is None
pub fn parse_script(
    text: &str,
    kind: Option<DialectKind>,
    options: &ParseOptions,
) -> Result<(PlayDocument, ParseReport)> {
    let lines = split_lines(text);
    let kind = match kind {
        Some(kind) => kind,
        None => {
            let detected = DialectKind::detect(&lines)?;
            debug!(?detected, "Auto-detected script dialect");
            detected
        }
    };
    let mut dialect = kind.build()?;
    Ok(parse_lines(&lines, dialect.as_mut(), options))
}

/// Capture groups of the first match, as borrowed slices of `haystack`
pub(crate) fn capture_groups<'h>(regex: &Regex, haystack: &'h str) -> Option<Vec<Option<&'h str>>> {
    let mut caps = regex.create_captures();
    regex.captures(haystack, &mut caps);
    if !caps.is_match() {
        return None;
    }
    Some(
        (0..caps.group_len())
            .map(|group| caps.get_group(group).map(|span| &haystack[span.range()]))
            .collect(),
    )
}
