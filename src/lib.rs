pub mod document;
pub mod numerals;
pub mod output;
pub mod passage;
pub mod reader;
pub mod script_parser;

// Re-export main types for convenient access
pub use document::{Act, Entry, PlayDocument, Scene, STAGE_DIRECTION_SPEAKER};
pub use numerals::{int_to_roman, roman_to_int};

pub use script_parser::{
    parse_lines, parse_script, Dialect, DialectKind, ParseOptions, ParseReport
};

pub use reader::{read_script_lines, ReaderConfig, ScriptError, ScriptReader};
pub use output::write_document_json;
