use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

// L'ordre compte : pour les formes numériques ambiguës, mois-premier
// gagne (défaut du parseur de l'application d'origine) ; jour-premier
// n'est tenté qu'ensuite, donc 25/12/2025 passe quand même.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%d/%m/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%m-%d-%Y",
    "%d-%m-%Y",
    "%m/%d/%y",
    "%d.%m.%Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%d %b %Y",
    "%d %B %Y",
];

/// Parse une date depuis les représentations textuelles courantes des
/// exports (Numbers, Outlook, ...).
///
/// Meilleure-chance : `None` pour vide/illisible, jamais une erreur —
/// c'est le pipeline qui transforme l'absence en rejet.
pub fn parse_any_date(raw: Option<&str>) -> Option<NaiveDate> {
    let s = raw?.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = s.parse::<DateTime<Utc>>() {
        return Some(dt.date_naive());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    None
}
