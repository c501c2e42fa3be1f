use std::{fmt, io, path::PathBuf, str::FromStr};

use cardgen::{BackgroundFit, Card, CardText};
use clap::Parser;
use thiserror::*;

#[derive(Parser)]
/// Render a trading card to a PNG file
pub struct Options {
    /// Where to store the rendered card
    #[clap(default_value = "card.png")]
    pub out: PathBuf,
    /// The card frame drawn behind all text
    #[clap(long, short = 'b', default_value = "ucard.png")]
    pub background: PathBuf,
    /// The folder that contains the default font files
    #[clap(long = "fonts", default_value = "fonts")]
    pub fonts_path: PathBuf,
    /// Load a font file for a family, e.g. `mplantin=MPlantin.ttf`
    ///
    /// Replaces the default file of that family.
    #[clap(long = "font")]
    pub fonts: Vec<FontArg>,
    /// A card description (RON)
    #[clap(long, short = 'c')]
    pub card: Option<PathBuf>,
    /// Text passed as command line args
    #[clap(flatten)]
    pub cl_text: TextOverrides,
    /// How to place the background. Valid choices are:
    ///
    /// "natural" (at its own size) and "contain" (scaled to fit the canvas)
    #[clap(default_value_t, long)]
    pub fit: BackgroundFit,
    /// Draw a red frame around the canvas
    #[clap(long)]
    pub debug_border: bool,
    /// Overwrite an existing output file
    #[clap(long, short)]
    pub force: bool,
}

#[derive(Debug, Default, Clone, Parser)]
pub struct TextOverrides {
    /// Title
    #[clap(long)]
    pub title: Option<String>,
    /// Type line
    #[clap(long = "type-line")]
    pub type_line: Option<String>,
    /// Rules text, one line per occurrence
    #[clap(long = "rules")]
    pub rules: Vec<String>,
}

#[derive(Debug, Error)]
pub enum CardFileError {
    #[error("IO Error")]
    Io(#[from] io::Error),
    #[error("Deserialize Error")]
    Ron(#[from] ron::error::Error),
}

impl Options {
    /// The text to draw: card file first, then command line overrides
    pub fn text(&self) -> Result<CardText, CardFileError> {
        let mut text = match &self.card {
            Some(card_path) => {
                let src = std::fs::read_to_string(card_path)?;
                let card: Card = ron::from_str(&src)?;
                CardText::from(&card)
            }
            None => CardText::default(),
        };
        self.cl_text.apply(&mut text);
        Ok(text)
    }
}

impl TextOverrides {
    fn apply(&self, text: &mut CardText) {
        if let Some(title) = &self.title {
            text.title = title.clone();
        }
        if let Some(type_line) = &self.type_line {
            text.type_line = type_line.clone();
        }
        if !self.rules.is_empty() {
            text.rules = self.rules.clone();
        }
    }
}

/// A `family=path` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontArg {
    pub family: String,
    pub path: PathBuf,
}

#[derive(Debug)]
/// Failed to parse a font argument
pub struct FontArgError {}

impl fmt::Display for FontArgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Expected `FAMILY=PATH`, e.g. `goudy=fonts/Goudy.ttf`")
    }
}

impl std::error::Error for FontArgError {}

impl FromStr for FontArg {
    type Err = FontArgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((family, path)) if !family.is_empty() && !path.is_empty() => Ok(Self {
                family: family.to_owned(),
                path: PathBuf::from(path),
            }),
            _ => Err(FontArgError {}),
        }
    }
}
