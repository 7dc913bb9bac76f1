#![forbid(unsafe_code)]
//! Roulement — classement de quarts Gold/Silver sur un cycle de 4 jours.
//!
//! - Titres stricts "Gold AM <n>" / "Silver AM [<n>]" ; raisons de rejet figées.
//! - Cycle ancré au 2025-07-01 (jour 2) ; Gold tourne avec le cycle, Silver non.
//! - Heures locales naïves, pas de fuseau ; CSV en entrée, CSV + ICS en sortie.

pub mod dates;
pub mod ics;
pub mod io;
pub mod model;
pub mod notification;
pub mod parse;
pub mod pipeline;
pub mod rules;

pub use dates::parse_any_date;
pub use ics::{build_ics, escape_text, IcsOptions};
pub use model::{
    AcceptedEvent, EventRow, ParsedTitle, RejectedEvent, RosterKind, ShiftCategory, ShiftOutcome,
    START_EARLY, START_MIDDLE, START_UNKNOWN,
};
pub use notification::{
    prepare_dispatch, Dispatch, DispatchRenderer, MailSettings, Mailer, TextMessage,
};
pub use parse::{parse_title, TitleRejection};
pub use pipeline::{process_rows, BatchOutcome, REASON_BAD_DATE};
pub use rules::{classify, classify_on, day_index, RuleError, ANCHOR_DAY_NUM};
