// Integration test utilities and common code
// WHY: Centralized utilities avoid duplication across integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Abridged Gutenberg-style transcript: title page, contents, cast list, prologue,
/// then two acts with "ACT I" / "SCENE I." headers
pub const CLASSIC_PLAY: &str = "\
The Project Gutenberg eBook of Romeo and Juliet, by William Shakespeare

THE TRAGEDY OF ROMEO AND JULIET

by William Shakespeare

Contents

THE PROLOGUE.

ACT I
Scene I. A public place.
Scene II. A Street.

ACT II
Scene I. An open place adjoining Capulet’s Garden.
Scene II. Capulet’s Garden.

Dramatis Personæ

ESCALUS, Prince of Verona.
MERCUTIO, kinsman to the Prince, and friend to Romeo.

SCENE. During the greater part of the Play in Verona; once, in the
Fifth Act, at Mantua.

THE PROLOGUE

Enter Chorus.

CHORUS.
Two households, both alike in dignity,
In fair Verona, where we lay our scene,

ACT I

SCENE I. A public place.

Enter Sampson and Gregory armed with swords and bucklers.

SAMPSON.
Gregory, on my word, we’ll not carry coals.

GREGORY.
No, for then we should be colliers.

SAMPSON.
I mean, if we be in choler, we’ll draw.

GREGORY.
Ay, while you live, draw your neck out o’ the collar.

 Enter Abram and Balthasar.

ABRAM.
Do you bite your thumb at us, sir?

SAMPSON.
I do bite my thumb, sir.
[_Aside to Gregory._] Is the law of our side if I say ay?

SCENE II. A Street.

Enter Capulet, Paris and Servant.

CAPULET.
But Montague is bound as well as I,
In penalty alike; and ’tis not hard, I think,
For men so old as we to keep the peace;

 [_Exeunt Capulet and Paris._]

ACT II

SCENE I. An open place adjoining Capulet’s Garden.

 Enter Romeo.

ROMEO.
Can I go forward when my heart is here?
Turn back, dull earth, and find thy centre out.

 [_He climbs the wall and leaps down within it._]

SCENE II. Capulet’s Garden.

 Enter Romeo.

ROMEO.
He jests at scars, that never felt a wound.

 [_Juliet appears above at a window._]

But soft, what light through yonder window breaks?
It is the east, and Juliet is the sun!
";

/// Abridged transcript using "Act 1 Scene 1" headers and bare all-caps speakers
pub const INLINE_PLAY: &str = "\
THE TEMPEST

Characters in the Play
PROSPERO, the right Duke of Milan
MIRANDA, daughter to Prospero

On a ship at sea; a tempestuous noise of thunder and lightning heard.
Act 1 Scene 1
Enter a Shipmaster and a Boatswain.

MASTER
Boatswain!

BOATSWAIN
Here, master. What cheer?

MASTER
Good, speak to th' mariners. Fall to 't yarely,
or we run ourselves aground. Bestir, bestir!
Exit

Act 1 Scene 2
The island. Before Prospero's cell.
Enter Prospero and Miranda.

MIRANDA
If by your art, my dearest father, you have
Put the wild waters in this roar, allay them.

PROSPERO
Be collected.
No more amazement. Tell your piteous heart
There's no harm done.

Act 2 Scene 1
Another part of the island.
Enter Alonso, Sebastian, Antonio, Gonzalo.

GONZALO
Beseech you, sir, be merry.
Exeunt
";

/// Test fixture helper for creating temporary directories with play transcripts
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with temporary directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self { temp_dir, root_path }
    }

    /// Create a transcript file with given content
    pub fn create_script<P: AsRef<Path>>(&self, relative_path: P, content: &str) -> PathBuf {
        let file_path = self.root_path.join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    pub fn path<P: AsRef<Path>>(&self, relative_path: P) -> PathBuf {
        self.root_path.join(relative_path)
    }
}

pub fn owned_lines(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}
