use playscript::script_parser::{parse_script, DialectKind, ParseOptions};
use playscript::{Entry, PlayDocument};

#[path = "integration/mod.rs"]
mod test_utils;
use test_utils::{owned_lines, CLASSIC_PLAY};

fn parse_classic(text: &str) -> (PlayDocument, playscript::ParseReport) {
    parse_script(text, Some(DialectKind::Classic), &ParseOptions::default())
        .expect("Classic dialect should build")
}

/// Whole abridged transcript: front matter dropped, two acts with two scenes each
#[test]
fn test_classic_play_structure() {
    let (document, report) = parse_classic(CLASSIC_PLAY);

    assert_eq!(document.title, "Romeo and Juliet");
    assert_eq!(document.author, "William Shakespeare");
    assert_eq!(document.act_count(), 2);
    assert_eq!(document.scene_count(), 4);
    assert_eq!(document.entry_count(), 18);

    let act_numbers: Vec<_> = document.acts.iter().map(|act| act.act_number).collect();
    assert_eq!(act_numbers, vec![1, 2]);
    assert_eq!(document.acts[0].act_title, "ACT I");

    let locations: Vec<_> = document
        .acts
        .iter()
        .flat_map(|act| &act.scenes)
        .map(|scene| scene.location.as_str())
        .collect();
    assert_eq!(
        locations,
        vec![
            "A public place.",
            "A Street.",
            "An open place adjoining Capulet’s Garden.",
            "Capulet’s Garden.",
        ]
    );

    // the two lines after the bracketed direction have no speaker to belong to
    assert_eq!(report.discarded_lines, 2);
}

#[test]
fn test_classic_first_scene_entries_in_order() {
    let (document, _) = parse_classic(CLASSIC_PLAY);
    let scene = &document.acts[0].scenes[0];

    let speakers: Vec<_> = scene.lines.iter().map(Entry::speaker).collect();
    assert_eq!(
        speakers,
        vec![
            "STAGE_DIRECTION",
            "SAMPSON",
            "GREGORY",
            "SAMPSON",
            "GREGORY",
            "STAGE_DIRECTION",
            "ABRAM",
            "SAMPSON",
            "STAGE_DIRECTION",
        ]
    );
    assert_eq!(scene.lines[5].text(), "Enter Abram and Balthasar.");
    assert_eq!(scene.lines[7].text(), "I do bite my thumb, sir.");
    assert_eq!(scene.lines[8].text(), "[_Aside to Gregory._] Is the law of our side if I say ay?");
}

#[test]
fn test_classic_multi_line_speech_is_joined() {
    let (document, _) = parse_classic(CLASSIC_PLAY);
    let scene = &document.acts[0].scenes[1];

    assert_eq!(
        scene.lines[1],
        Entry::Dialogue {
            speaker: "CAPULET".to_string(),
            text: "But Montague is bound as well as I,\n\
                   In penalty alike; and ’tis not hard, I think,\n\
                   For men so old as we to keep the peace;"
                .to_string(),
        }
    );
    assert!(scene.lines[2].is_stage_direction());
}

#[test]
fn test_classic_spec_example() {
    let lines = owned_lines(&[
        "ACT I.",
        "SCENE I.  A public place.",
        "Enter ROMEO.",
        "ROMEO.",
        "But soft, what light.",
    ]);
    let mut dialect = playscript::script_parser::ClassicDialect::new().unwrap();
    let (document, _) = playscript::parse_lines(&lines, &mut dialect, &ParseOptions::default());

    assert_eq!(document.acts.len(), 1);
    assert_eq!(document.acts[0].act_number, 1);
    let scene = &document.acts[0].scenes[0];
    assert_eq!(scene.scene_number, 1);
    assert!(scene.location.starts_with("A public place"));
    assert_eq!(
        scene.lines,
        vec![
            Entry::StageDirection { text: "Enter ROMEO.".to_string() },
            Entry::Dialogue {
                speaker: "ROMEO".to_string(),
                text: "But soft, what light.".to_string(),
            },
        ]
    );
}

#[test]
fn test_classic_front_matter_alone_yields_empty_document() {
    let front_matter = CLASSIC_PLAY
        .split("THE PROLOGUE\n\nEnter Chorus.")
        .next()
        .expect("fixture contains a prologue");
    let (document, report) = parse_classic(front_matter);

    assert!(document.acts.is_empty());
    assert_eq!(report.discarded_lines, 0);
}

#[test]
fn test_classic_windows_line_endings() {
    let crlf = CLASSIC_PLAY.replace('\n', "\r\n");
    let (unix, _) = parse_classic(CLASSIC_PLAY);
    let (windows, _) = parse_classic(&crlf);
    assert_eq!(unix, windows);
}
