//! Letter text and card configuration.
//!
//! A card file is a JSON object with any subset of the letter fields plus
//! the `photo` and `audio` asset paths:
//!
//! ```json
//! {
//!   "title": "To My Dearest",
//!   "body": "Merry Christmas!\n\nSee you soon.",
//!   "signature": "Peter",
//!   "photo": "us.jpg"
//! }
//! ```
//!
//! Relative asset paths are resolved against the card file's directory.

use std::path::{Path, PathBuf};

use pulldown_cmark::{html, Options, Parser};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CardError, Result};

pub const DEFAULT_PHOTO: &str = "us.jpg";
pub const DEFAULT_AUDIO: &str = "letterbg.mp3";

const DEFAULT_BODY: &str = "Merry Christmas!

We may be miles apart right now, but I hope this still reaches you with all the feelings I packed in it. \
Gusto ko sana magbigay ng something na hindi mawawala. Something that stays there, na satin lang. \
So I made this! Hahaha, I hope you liked it? \
I'm thankful that we met, mahal. That I have a partner like you. Someone that pushes me to be a better version of myself. \
Just know that I'm constantly doing so, para sa'yo. Para satin. \
I wanted to make this to tell you how much you mean to me. You are the best gift I could ever ask for. I love you so much!!";

/// Everything written on the card
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Letter {
    /// Heading above the sealed envelope
    pub title: String,
    /// Opening line of the letter
    pub salutation: String,
    /// Letter body, Markdown
    pub body: String,
    pub closing: String,
    pub signature: String,
    /// Alt text for the photo
    pub photo_alt: String,
    /// Credit line at the bottom of the page
    pub footer: String,
}

impl Default for Letter {
    fn default() -> Self {
        Self {
            title: "To My Dearest, Fiancée".to_string(),
            salutation: "My Dearest, Fiancée".to_string(),
            body: DEFAULT_BODY.to_string(),
            closing: "Your Fiancé,".to_string(),
            signature: "Peter".to_string(),
            photo_alt: "Us".to_string(),
            footer: "Made with Love".to_string(),
        }
    }
}

impl Letter {
    /// Render the Markdown body to HTML
    pub fn body_html(&self) -> String {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_STRIKETHROUGH);

        let parser = Parser::new_ext(&self.body, options);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);
        html_output
    }
}

/// Letter plus the asset files it shows and plays
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    #[serde(flatten)]
    pub letter: Letter,
    /// Photo inside the letter
    pub photo: PathBuf,
    /// Looping background track
    pub audio: PathBuf,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            letter: Letter::default(),
            photo: PathBuf::from(DEFAULT_PHOTO),
            audio: PathBuf::from(DEFAULT_AUDIO),
        }
    }
}

impl CardConfig {
    /// Parse a card file, resolving asset paths against its directory
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CardError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::from_json(&raw).map_err(|source| CardError::Config {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(dir) = path.parent() {
            config.photo = resolve(dir, &config.photo);
            config.audio = resolve(dir, &config.audio);
        }

        debug!(path = %path.display(), "loaded card file");
        Ok(config)
    }

    /// Parse card JSON without touching asset paths
    pub fn from_json(raw: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
