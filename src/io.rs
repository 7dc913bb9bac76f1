use crate::model::{AcceptedEvent, EventRow, RejectedEvent};
use anyhow::{bail, Context, Result};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// En-têtes reconnus pour la colonne titre, par priorité.
pub const TITLE_CANDIDATES: &[&str] = &[
    "event_name",
    "Subject",
    "Title",
    "Event",
    "Name",
    "Summary",
];

/// En-têtes reconnus pour la colonne date, par priorité.
pub const DATE_CANDIDATES: &[&str] = &[
    "event_date",
    "Date",
    "Start Date",
    "Start",
    "Event Date",
    "Start_Date",
    "StartDate",
];

/// Import d'un export CSV avec en-têtes.
///
/// Résolution des colonnes titre/date : override explicite, sinon
/// auto-détection sur les listes de candidats, sinon position (0 / 1).
/// Toutes les autres colonnes sont transportées telles quelles dans
/// `extras` et ressortent dans l'export traité.
pub fn read_events_csv<P: AsRef<Path>>(
    path: P,
    title_col: Option<&str>,
    date_col: Option<&str>,
) -> Result<Vec<EventRow>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(&path)?;
    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.to_string()).collect();
    if headers.is_empty() {
        bail!("empty CSV header");
    }

    let title_idx =
        resolve_column(&headers, title_col, TITLE_CANDIDATES, 0).context("title column")?;
    let date_idx = resolve_column(
        &headers,
        date_col,
        DATE_CANDIDATES,
        1.min(headers.len() - 1),
    )
    .context("date column")?;

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let mut row = EventRow::new(get_cell(&rec, title_idx), get_cell(&rec, date_idx));
        for (idx, value) in rec.iter().enumerate() {
            if idx == title_idx || idx == date_idx {
                continue;
            }
            let header = headers.get(idx).cloned().unwrap_or_default();
            row.extras.push((header, value.to_string()));
        }
        out.push(row);
    }
    Ok(out)
}

/// Première colonne dont l'en-tête correspond exactement à un candidat.
pub fn detect_column(headers: &[String], candidates: &[&str]) -> Option<usize> {
    candidates
        .iter()
        .find_map(|cand| headers.iter().position(|h| h == cand))
}

fn resolve_column(
    headers: &[String],
    override_name: Option<&str>,
    candidates: &[&str],
    fallback: usize,
) -> Result<usize> {
    if let Some(name) = override_name {
        return headers
            .iter()
            .position(|h| h == name)
            .with_context(|| format!("column '{name}' not found in CSV header"));
    }
    Ok(detect_column(headers, candidates).unwrap_or(fallback))
}

// Une cellule vraiment vide vaut absence (titre manquant) ; une cellule
// d'espaces reste du texte et sera refusée comme titre vide.
fn get_cell(rec: &StringRecord, idx: usize) -> Option<String> {
    match rec.get(idx) {
        None | Some("") => None,
        Some(s) => Some(s.to_string()),
    }
}

/// Export CSV des lignes traitées : header
/// `event_name,clean_event,event_date,event_date_parsed,shift_result,start_time`
/// suivi des colonnes d'origine transportées.
pub fn export_processed_csv<P: AsRef<Path>>(path: P, accepted: &[AcceptedEvent]) -> Result<()> {
    let mut w = WriterBuilder::new().from_writer(Vec::new());

    let mut header: Vec<String> = [
        "event_name",
        "clean_event",
        "event_date",
        "event_date_parsed",
        "shift_result",
        "start_time",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    if let Some(first) = accepted.first() {
        header.extend(first.row.extras.iter().map(|(h, _)| h.clone()));
    }
    w.write_record(&header)?;

    for ev in accepted {
        let mut rec: Vec<String> = vec![
            ev.row.raw_title.clone().unwrap_or_default(),
            ev.parsed.clean_label.clone(),
            ev.row.raw_date.clone().unwrap_or_default(),
            ev.date.to_string(),
            ev.outcome.result_label(),
            ev.start_time.clone(),
        ];
        rec.extend(ev.row.extras.iter().map(|(_, v)| v.clone()));
        w.write_record(&rec)?;
    }

    let bytes = w
        .into_inner()
        .map_err(|e| anyhow::anyhow!("flushing csv buffer: {e}"))?;
    write_atomic(path, &bytes)
}

/// Export CSV des lignes refusées : header `event_name,event_date,reason`.
pub fn export_rejected_csv<P: AsRef<Path>>(path: P, rejected: &[RejectedEvent]) -> Result<()> {
    let mut w = WriterBuilder::new().from_writer(Vec::new());
    w.write_record(["event_name", "event_date", "reason"])?;
    for ev in rejected {
        w.write_record([
            ev.row.raw_title.as_deref().unwrap_or(""),
            ev.row.raw_date.as_deref().unwrap_or(""),
            ev.reason.as_str(),
        ])?;
    }
    let bytes = w
        .into_inner()
        .map_err(|e| anyhow::anyhow!("flushing csv buffer: {e}"))?;
    write_atomic(path, &bytes)
}

/// Écriture atomique : fichier temporaire, flush, sync, rename.
pub fn write_atomic<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
    tmp.write_all(bytes)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).with_context(|| "atomic rename")?;
    Ok(())
}
