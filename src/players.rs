use crate::consts::NBSP;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount, EnumIter, EnumString};

/// The tracked roster, in display order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumIter,
    EnumString,
    EnumCount,
    Serialize,
    Deserialize,
)]
pub enum Player {
    Pepo,
    Pocho,
    Josh,
    Mene,
}

impl Player {
    /// Normalized lookup key (`"pepo"`, `"pocho"`, ...).
    pub fn key(&self) -> String {
        canonical_key(&self.to_string())
    }

    pub fn from_key(key: &str) -> Option<Player> {
        Player::iter().find(|p| p.key() == key)
    }

    /// Resolves a raw name as written in the chat ("  Pépo ", "MENE").
    pub fn from_name(name: &str) -> Option<Player> {
        Self::from_key(&canonical_key(name))
    }

    pub fn all() -> Vec<Player> {
        Player::iter().collect()
    }
}

/// Folds a player name into its lookup key: lower-case, trimmed,
/// Spanish diacritics removed and every inner space dropped.
pub fn canonical_key(name: &str) -> String {
    name.replace(NBSP, " ")
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(fold_accent)
        .collect()
}

fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' => 'a',
        'é' | 'è' => 'e',
        'í' | 'ì' => 'i',
        'ó' | 'ò' => 'o',
        'ú' | 'ù' | 'ü' => 'u',
        'ñ' => 'n',
        _ => c,
    }
}
