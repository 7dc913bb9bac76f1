use crate::model::{AcceptedEvent, START_UNKNOWN};
use anyhow::{bail, Result};
use chrono::{Duration, NaiveDateTime, NaiveTime};
use uuid::Uuid;

/// Options de rendu du calendrier.
#[derive(Debug, Clone, Copy)]
pub struct IcsOptions {
    /// Durée de chaque événement en minutes (bornes 15..=1440).
    pub duration_minutes: u32,
}

impl Default for IcsOptions {
    fn default() -> Self {
        Self {
            duration_minutes: 60,
        }
    }
}

impl IcsOptions {
    fn validate(&self) -> Result<()> {
        if !(15..=1440).contains(&self.duration_minutes) {
            bail!(
                "duration_minutes must be within 15..=1440 (got {})",
                self.duration_minutes
            );
        }
        Ok(())
    }
}

/// Rend le document VCALENDAR importable dans Outlook.
///
/// Un bloc VEVENT par ligne acceptée, horodatage compact sans fuseau
/// (heure locale naïve). Les lignes portant la sentinelle UNKNOWN sont
/// omises du calendrier mais restent dans l'export CSV.
pub fn build_ics(events: &[AcceptedEvent], opts: &IcsOptions) -> Result<String> {
    opts.validate()?;

    let mut out = String::from(
        "BEGIN:VCALENDAR\nVERSION:2.0\nCALSCALE:GREGORIAN\nPRODID:-//roulement//EN\n",
    );
    for ev in events {
        if ev.start_time == START_UNKNOWN {
            continue;
        }
        // Toute heure illisible se comporte comme la sentinelle.
        let Ok(time) = NaiveTime::parse_from_str(&ev.start_time, "%H:%M") else {
            continue;
        };
        let start_dt = NaiveDateTime::new(ev.date, time);
        let end_dt = start_dt + Duration::minutes(i64::from(opts.duration_minutes));

        out.push_str("BEGIN:VEVENT\n");
        out.push_str(&format!("UID:{}@roulement\n", Uuid::new_v4()));
        out.push_str(&format!("SUMMARY:{}\n", escape_text(&ev.parsed.clean_label)));
        out.push_str(&format!("DTSTART:{}\n", start_dt.format("%Y%m%dT%H%M%S")));
        out.push_str(&format!("DTEND:{}\n", end_dt.format("%Y%m%dT%H%M%S")));
        out.push_str("END:VEVENT\n");
    }
    out.push_str("END:VCALENDAR\n");
    Ok(out)
}

/// Échappement ICS minimal : `\`, retour à la ligne, `,` et `;` sont
/// préfixés d'un antislash.
pub fn escape_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            ',' => out.push_str("\\,"),
            ';' => out.push_str("\\;"),
            _ => out.push(c),
        }
    }
    out
}
