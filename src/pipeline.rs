use crate::dates::parse_any_date;
use crate::model::{AcceptedEvent, EventRow, RejectedEvent, ShiftOutcome};
use crate::parse::parse_title;
use crate::rules;

/// Raison attachée aux lignes dont la date est illisible.
pub const REASON_BAD_DATE: &str = "Date could not be parsed";

/// Les deux partitions ordonnées issues d'un lot.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    pub accepted: Vec<AcceptedEvent>,
    pub rejected: Vec<RejectedEvent>,
}

impl BatchOutcome {
    pub fn total(&self) -> usize {
        self.accepted.len() + self.rejected.len()
    }
}

/// Traite un lot ligne par ligne : titre, date, règle, heure de début.
///
/// Chaque ligne finit dans exactement une des deux partitions, qui
/// conservent l'ordre d'entrée. Aucun état partagé entre lignes ; les
/// échecs restent locaux à la ligne et ne remontent jamais à l'appelant.
pub fn process_rows(rows: Vec<EventRow>) -> BatchOutcome {
    let mut out = BatchOutcome::default();
    for (source_row, row) in rows.into_iter().enumerate() {
        match process_row(source_row, row) {
            Ok(acc) => out.accepted.push(acc),
            Err(rej) => out.rejected.push(rej),
        }
    }
    out
}

// Court-circuite au premier échec : une ligne au titre refusé n'est
// jamais examinée pour sa date.
fn process_row(source_row: usize, row: EventRow) -> Result<AcceptedEvent, RejectedEvent> {
    let parsed = match parse_title(row.raw_title.as_deref()) {
        Ok(p) => p,
        Err(reason) => {
            return Err(RejectedEvent {
                source_row,
                row,
                reason: reason.to_string(),
            })
        }
    };

    let Some(date) = parse_any_date(row.raw_date.as_deref()) else {
        return Err(RejectedEvent {
            source_row,
            row,
            reason: REASON_BAD_DATE.to_string(),
        });
    };

    // Le parseur garantit un numéro >= 1, donc la règle ne devrait pas
    // échouer ici ; si elle échoue quand même, le texte d'erreur reste
    // visible sur la ligne acceptée au lieu de la faire disparaître.
    let day_num = rules::day_index(date);
    let outcome = match rules::classify(parsed.roster, parsed.number, day_num) {
        Ok(cat) => ShiftOutcome::Assigned(cat),
        Err(err) => ShiftOutcome::Anomaly(format!("error: {err}")),
    };
    let start_time = outcome.start_time().to_string();

    Ok(AcceptedEvent {
        source_row,
        row,
        parsed,
        date,
        outcome,
        start_time,
    })
}
