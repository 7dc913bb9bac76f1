use crate::model::{RosterKind, ShiftCategory};
use chrono::NaiveDate;
use thiserror::Error;

/// Numéro de jour porté par la date d'ancrage.
pub const ANCHOR_DAY_NUM: i64 = 2;

/// Date d'ancrage du cycle : le 2025-07-01 est le jour 2.
pub fn anchor_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, 1).expect("date d'ancrage valide")
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("Invalid/Unhandled {roster} number {number}")]
    InvalidNumber { roster: RosterKind, number: u32 },
}

/// Numéro de jour (1..=4) d'une date dans le cycle répétitif.
///
/// Purement fonction des jours écoulés depuis l'ancre ; défini pour toute
/// date, avant ou après l'ancre (`rem_euclid` garde le résultat positif).
pub fn day_index(target: NaiveDate) -> u8 {
    let delta = target.signed_duration_since(anchor_date()).num_days();
    ((delta + ANCHOR_DAY_NUM - 1).rem_euclid(4) + 1) as u8
}

/// Catégorie d'un quart pour un numéro de jour déjà calculé.
///
/// Gold tourne réellement avec le cycle (le même numéro bascule
/// Early/Middle selon le jour) ; Silver l'ignore.
pub fn classify(
    roster: RosterKind,
    number: u32,
    day_num: u8,
) -> Result<ShiftCategory, RuleError> {
    match roster {
        RosterKind::Gold => gold_shift(number, day_num),
        RosterKind::Silver => silver_shift(number),
    }
}

/// Variante pratique : calcule le numéro de jour depuis la date.
pub fn classify_on(
    roster: RosterKind,
    number: u32,
    date: NaiveDate,
) -> Result<ShiftCategory, RuleError> {
    classify(roster, number, day_index(date))
}

fn gold_shift(number: u32, day_num: u8) -> Result<ShiftCategory, RuleError> {
    match number {
        1 => Ok(ShiftCategory::Early),
        n if n >= 6 => Ok(ShiftCategory::Middle),
        3 | 5 => Ok(if matches!(day_num, 1 | 3) {
            ShiftCategory::Early
        } else {
            ShiftCategory::Middle
        }),
        2 | 4 => Ok(if matches!(day_num, 1 | 3) {
            ShiftCategory::Middle
        } else {
            ShiftCategory::Early
        }),
        _ => Err(RuleError::InvalidNumber {
            roster: RosterKind::Gold,
            number,
        }),
    }
}

fn silver_shift(number: u32) -> Result<ShiftCategory, RuleError> {
    match number {
        1 => Ok(ShiftCategory::Early),
        n if n >= 2 => Ok(ShiftCategory::Middle),
        _ => Err(RuleError::InvalidNumber {
            roster: RosterKind::Silver,
            number,
        }),
    }
}
