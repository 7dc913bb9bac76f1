use crate::model::{ParsedTitle, RosterKind};
use thiserror::Error;

/// Raisons de rejet d'un titre. Textes figés : ils sortent tels quels
/// dans l'export des lignes refusées.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TitleRejection {
    #[error("Missing event title")]
    Missing,
    /// Réservé aux sources dont les cellules ne sont pas du texte ;
    /// le lecteur CSV ne la produit jamais.
    #[error("Event title is not text")]
    NotText,
    #[error("Empty event title")]
    Empty,
    #[error("Not a Gold/Silver event")]
    NotGoldSilver,
    #[error("Missing 'AM' (expected 'Gold AM #' or 'Silver AM [#]')")]
    MissingAm,
    #[error("Gold format invalid (expected 'Gold AM <number>')")]
    GoldFormat,
    #[error("Gold missing number (expected 'Gold AM <number>')")]
    GoldMissingNumber,
    #[error("Silver format invalid (expected 'Silver AM' or 'Silver AM <number>')")]
    SilverFormat,
    #[error("{roster} number is not an integer: '{text}'")]
    NumberNotInteger { roster: RosterKind, text: String },
    #[error("{roster} number must be positive")]
    NumberNotPositive { roster: RosterKind },
    #[error("Unrecognized title format")]
    Unrecognized,
}

/// Valide un titre brut et en extrait groupe, numéro et libellé canonique.
///
/// Accepte :
///   - `Gold AM <numéro>`
///   - `Silver AM` (numéro 1 implicite)
///   - `Silver AM <numéro>`
///
/// Totale sur toutes les entrées. L'ordre des contrôles détermine la
/// raison rapportée quand plusieurs défauts se recouvrent ; ne pas le
/// réordonner.
pub fn parse_title(raw: Option<&str>) -> Result<ParsedTitle, TitleRejection> {
    let raw = raw.ok_or(TitleRejection::Missing)?;
    let s = raw.trim();
    if s.is_empty() {
        return Err(TitleRejection::Empty);
    }

    if !contains_word(s, "gold") && !contains_word(s, "silver") {
        return Err(TitleRejection::NotGoldSilver);
    }
    if !contains_word(s, "am") {
        return Err(TitleRejection::MissingAm);
    }

    if starts_with_word(s, "gold") {
        return parse_gold(s);
    }
    if starts_with_word(s, "silver") {
        return parse_silver(s);
    }

    // Mot-clé présent mais pas en tête ("Re: Gold AM 3") : rejet voulu,
    // pas de correspondance partielle.
    Err(TitleRejection::Unrecognized)
}

fn parse_gold(s: &str) -> Result<ParsedTitle, TitleRejection> {
    // Le motif Gold exige un numéro : deux tokens seuls sont déjà invalides.
    let number = match match_am_pattern(s, "gold", true) {
        Some(tok) => tok,
        None => return Err(TitleRejection::GoldFormat),
    };
    let Some(text) = number else {
        // Inatteignable tant que le motif exige le numéro. Gardé par prudence.
        return Err(TitleRejection::GoldMissingNumber);
    };
    let number = parse_number(RosterKind::Gold, text)?;
    Ok(ParsedTitle::new(RosterKind::Gold, number))
}

fn parse_silver(s: &str) -> Result<ParsedTitle, TitleRejection> {
    let number = match match_am_pattern(s, "silver", false) {
        Some(tok) => tok,
        None => return Err(TitleRejection::SilverFormat),
    };
    let number = match number {
        None => 1, // "Silver AM" vaut "Silver AM 1"
        Some(text) => parse_number(RosterKind::Silver, text)?,
    };
    Ok(ParsedTitle::new(RosterKind::Silver, number))
}

/// Décompose `<roster> AM [<numéro>]` : tokens séparés par un espace
/// unique, titre entier consommé, numéro en chiffres seulement.
///
/// `None` si le motif strict ne correspond pas ; `Some(None)` si le
/// numéro (optionnel) est omis.
fn match_am_pattern<'a>(
    s: &'a str,
    roster_word: &str,
    number_required: bool,
) -> Option<Option<&'a str>> {
    let mut tokens = s.split(' ');
    let first = tokens.next()?;
    if !first.eq_ignore_ascii_case(roster_word) {
        return None;
    }
    let second = tokens.next()?;
    if !second.eq_ignore_ascii_case("am") {
        return None;
    }
    match tokens.next() {
        None if number_required => None,
        None => Some(None),
        Some(num) => {
            if tokens.next().is_some() {
                return None; // token en trop
            }
            if num.is_empty() || !num.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            Some(Some(num))
        }
    }
}

fn parse_number(roster: RosterKind, text: &str) -> Result<u32, TitleRejection> {
    let number: u32 = text.parse().map_err(|_| TitleRejection::NumberNotInteger {
        roster,
        text: text.to_string(),
    })?;
    if number == 0 {
        return Err(TitleRejection::NumberNotPositive { roster });
    }
    Ok(number)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Vrai si `word` apparaît comme mot entier (frontières non alphanumériques),
/// sans tenir compte de la casse. "golden" ne contient pas "gold".
fn contains_word(haystack: &str, word: &str) -> bool {
    haystack
        .split(|c: char| !is_word_char(c))
        .any(|tok| tok.eq_ignore_ascii_case(word))
}

/// Vrai si le titre commence par `word` suivi d'une frontière de mot.
fn starts_with_word(s: &str, word: &str) -> bool {
    match s.get(..word.len()) {
        Some(head) if head.eq_ignore_ascii_case(word) => s[word.len()..]
            .chars()
            .next()
            .map_or(true, |c| !is_word_char(c)),
        _ => false,
    }
}
