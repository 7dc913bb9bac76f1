use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Heure de début d'un quart Early.
pub const START_EARLY: &str = "06:45";
/// Heure de début d'un quart Middle.
pub const START_MIDDLE: &str = "08:00";
/// Sentinelle pour une ligne dont la classification a échoué.
pub const START_UNKNOWN: &str = "UNKNOWN";

/// Groupe de rotation pris en charge (Gold ou Silver).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RosterKind {
    Gold,
    Silver,
}

impl RosterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RosterKind::Gold => "Gold",
            RosterKind::Silver => "Silver",
        }
    }

    /// Reconnaissance insensible à la casse ("gold", "GOLD", ...).
    pub fn from_word(word: &str) -> Option<Self> {
        if word.eq_ignore_ascii_case("gold") {
            Some(RosterKind::Gold)
        } else if word.eq_ignore_ascii_case("silver") {
            Some(RosterKind::Silver)
        } else {
            None
        }
    }
}

impl fmt::Display for RosterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catégorie de quart assignée à un événement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShiftCategory {
    Early,
    Middle,
}

impl ShiftCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftCategory::Early => "Early",
            ShiftCategory::Middle => "Middle",
        }
    }

    /// Heure de début fixe associée à la catégorie.
    pub fn start_time(&self) -> &'static str {
        match self {
            ShiftCategory::Early => START_EARLY,
            ShiftCategory::Middle => START_MIDDLE,
        }
    }
}

impl fmt::Display for ShiftCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Résultat de classification porté par une ligne acceptée.
///
/// `Anomaly` garde le texte d'erreur visible à la place de la catégorie :
/// la ligne reste acceptée, jamais écartée en silence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShiftOutcome {
    Assigned(ShiftCategory),
    Anomaly(String),
}

impl ShiftOutcome {
    pub fn start_time(&self) -> &'static str {
        match self {
            ShiftOutcome::Assigned(cat) => cat.start_time(),
            ShiftOutcome::Anomaly(_) => START_UNKNOWN,
        }
    }

    /// Valeur affichée dans les exports ("early"/"middle" ou le texte d'anomalie).
    pub fn result_label(&self) -> String {
        match self {
            ShiftOutcome::Assigned(cat) => cat.as_str().to_ascii_lowercase(),
            ShiftOutcome::Anomaly(msg) => msg.clone(),
        }
    }
}

/// Titre validé : groupe + numéro + libellé canonique ("Gold 5").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedTitle {
    pub roster: RosterKind,
    pub number: u32,
    pub clean_label: String,
}

impl ParsedTitle {
    pub fn new(roster: RosterKind, number: u32) -> Self {
        Self {
            roster,
            number,
            clean_label: format!("{roster} {number}"),
        }
    }
}

/// Ligne d'entrée brute : titre + date, plus les colonnes inconnues
/// transportées telles quelles jusqu'aux exports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRow {
    pub raw_title: Option<String>,
    pub raw_date: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extras: Vec<(String, String)>,
}

impl EventRow {
    pub fn new(raw_title: Option<String>, raw_date: Option<String>) -> Self {
        Self {
            raw_title,
            raw_date,
            extras: Vec::new(),
        }
    }
}

/// Ligne acceptée : les trois étapes (titre, date, règle) ont abouti.
/// Immuable une fois construite par le pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcceptedEvent {
    /// Index de la ligne dans le lot d'origine.
    pub source_row: usize,
    pub row: EventRow,
    pub parsed: ParsedTitle,
    pub date: NaiveDate,
    pub outcome: ShiftOutcome,
    pub start_time: String,
}

/// Ligne refusée avec sa raison (liste fermée, voir `parse.rs`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectedEvent {
    pub source_row: usize,
    pub row: EventRow,
    pub reason: String,
}
