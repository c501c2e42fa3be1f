//! # The card model
//!
//! A [`Card`] is what a designer writes down, a [`CardText`] is the subset of
//! it that ends up on the canvas.

use std::{fmt, str::FromStr};

use serde::Deserialize;

use crate::error::CostError;

/// The five colors in canonical order
pub const COLORS: [char; 5] = ['W', 'U', 'B', 'R', 'G'];

/// How often a card appears in a booster
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
pub enum Rarity {
    /// `C`
    #[serde(rename = "C")]
    Common,
    /// `U`
    #[serde(rename = "U")]
    Uncommon,
    /// `R`
    #[serde(rename = "R")]
    Rare,
    /// `M`
    #[serde(rename = "M")]
    Mythic,
}

/// A mana cost such as `2WU`
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Cost {
    /// White
    pub w: u32,
    /// Blue
    pub u: u32,
    /// Black
    pub b: u32,
    /// Red
    pub r: u32,
    /// Green
    pub g: u32,
    /// The generic part, if the cost has one (`0` is not the same as none)
    pub generic: Option<u32>,
    /// Colorless mana
    pub colorless: u32,
}

impl Cost {
    /// The number of symbols of the given color
    pub fn count(&self, color: char) -> u32 {
        match color {
            'W' => self.w,
            'U' => self.u,
            'B' => self.b,
            'R' => self.r,
            'G' => self.g,
            _ => 0,
        }
    }

    fn count_mut(&mut self, color: char) -> Option<&mut u32> {
        match color {
            'W' => Some(&mut self.w),
            'U' => Some(&mut self.u),
            'B' => Some(&mut self.b),
            'R' => Some(&mut self.r),
            'G' => Some(&mut self.g),
            _ => None,
        }
    }

    /// Converted mana cost
    ///
    /// ```
    /// use cardgen::Cost;
    /// let cost: Cost = "3GG".parse().unwrap();
    /// assert_eq!(cost.cmc(), 5);
    /// ```
    pub fn cmc(&self) -> u32 {
        let colored: u32 = COLORS.iter().map(|&c| self.count(c)).sum();
        colored + self.generic.unwrap_or(0)
    }

    /// Render the cost in its canonical short form
    pub fn as_string(&self) -> String {
        let mut out = self.generic.map(|g| g.to_string()).unwrap_or_default();
        for c in COLORS {
            for _ in 0..self.count(c) {
                out.push(c);
            }
        }
        out
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

impl FromStr for Cost {
    type Err = CostError;

    /// Parse `<digits><letters>`. Letters outside of WUBRG are accepted but
    /// don't count towards the cost.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let split = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        let (digits, letters) = s.split_at(split);
        if !letters.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CostError::Malformed(s.to_owned()));
        }

        let mut cost = Cost::default();
        if !digits.is_empty() {
            cost.generic = Some(digits.parse().map_err(|_| CostError::Overflow)?);
        }
        for c in letters.chars() {
            if let Some(count) = cost.count_mut(c) {
                *count += 1;
            }
        }
        Ok(cost)
    }
}

impl TryFrom<String> for Cost {
    type Error = CostError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Power or toughness, which is usually a number but may be `*` or `1+*`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Stat {
    /// A plain number
    Number(i32),
    /// Anything else
    Text(String),
}

/// A single card design
#[derive(Debug, Clone, Deserialize)]
pub struct Card {
    /// The card name, also used as the title
    pub name: String,
    /// Set code
    #[serde(default)]
    pub set: String,
    /// Rarity within the set
    #[serde(default = "default_rarity")]
    pub rarity: Rarity,
    /// Whether the type line starts with "Legendary"
    #[serde(default)]
    pub legendary: bool,
    /// Card types, e.g. `["Creature"]`
    #[serde(default)]
    pub types: Vec<String>,
    /// Subtypes, e.g. `["Elf", "Warrior"]`
    #[serde(default)]
    pub subtypes: Vec<String>,
    /// Power, for creatures
    #[serde(default)]
    pub power: Option<Stat>,
    /// Toughness, for creatures
    #[serde(default)]
    pub toughness: Option<Stat>,
    /// Mana cost
    #[serde(default)]
    pub cost: Cost,
    /// Rules text, one paragraph per entry. `~` stands for the card name.
    #[serde(default)]
    pub rules: Vec<String>,
    /// Flavor text
    #[serde(default)]
    pub flavor: String,
}

fn default_rarity() -> Rarity {
    Rarity::Common
}

impl Card {
    /// The rules with every `~` replaced by the card name
    pub fn expand_rules(&self) -> Vec<String> {
        self.rules
            .iter()
            .map(|rule| rule.replace('~', &self.name))
            .collect()
    }

    /// The type line, e.g. `Legendary Creature — Elf Warrior`
    pub fn type_line(&self) -> String {
        let mut line = String::new();
        if self.legendary {
            line.push_str("Legendary ");
        }
        line.push_str(&self.types.join(" "));
        let subtypes: Vec<&str> = self
            .subtypes
            .iter()
            .map(String::as_str)
            .filter(|s| !s.is_empty())
            .collect();
        if !subtypes.is_empty() {
            line.push_str(" — ");
            line.push_str(&subtypes.join(" "));
        }
        line
    }
}

/// The strings that are drawn onto the canvas
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardText {
    /// Drawn with the title layer
    pub title: String,
    /// Drawn with the type layer
    pub type_line: String,
    /// Drawn with the rules layer, one line each
    pub rules: Vec<String>,
}

impl Default for CardText {
    fn default() -> Self {
        Self {
            title: String::new(),
            type_line: "Summon Wall".to_string(),
            rules: vec!["Lorem ipsum.".to_string()],
        }
    }
}

impl From<&Card> for CardText {
    fn from(card: &Card) -> Self {
        Self {
            title: card.name.clone(),
            type_line: card.type_line(),
            rules: card.expand_rules(),
        }
    }
}
