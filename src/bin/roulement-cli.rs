#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use roulement::{
    dates::parse_any_date,
    ics::{build_ics, IcsOptions},
    io,
    notification::{prepare_dispatch, DispatchRenderer, MailSettings, TextMessage},
    parse::parse_title,
    pipeline::{process_rows, REASON_BAD_DATE},
    rules,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de classement de quarts Gold/Silver (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Traiter un export CSV : classement + exports CSV/ICS
    Process {
        #[arg(long)]
        csv: String,
        /// Colonne titre (auto-détectée sinon)
        #[arg(long)]
        title_col: Option<String>,
        /// Colonne date (auto-détectée sinon)
        #[arg(long)]
        date_col: Option<String>,
        /// CSV des lignes traitées
        #[arg(long)]
        out_csv: Option<String>,
        /// CSV des lignes refusées
        #[arg(long)]
        out_rejected: Option<String>,
        /// Calendrier Outlook (.ics)
        #[arg(long)]
        out_ics: Option<String>,
        /// Durée des événements en minutes (15 à 1440)
        #[arg(long, default_value_t = 60)]
        duration_minutes: u32,
    },

    /// Classer un seul titre à une date donnée
    Classify {
        #[arg(long)]
        title: String,
        #[arg(long)]
        date: String,
    },

    /// Afficher le numéro de jour (1-4) d'une date dans le cycle
    DayNum {
        #[arg(long)]
        date: String,
    },

    /// Préparer le message d'envoi du calendrier (aperçu texte)
    Notify {
        /// Fichier .ics déjà généré
        #[arg(long)]
        ics: String,
        #[arg(long)]
        to: String,
        #[arg(long)]
        server: String,
        #[arg(long, default_value_t = 587)]
        port: u16,
        #[arg(long)]
        from: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        subject: Option<String>,
        /// Fichier de sortie (texte brut)
        #[arg(long)]
        out: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let code = match cli.cmd {
        Commands::Process {
            csv,
            title_col,
            date_col,
            out_csv,
            out_rejected,
            out_ics,
            duration_minutes,
        } => {
            let rows = io::read_events_csv(&csv, title_col.as_deref(), date_col.as_deref())?;
            let total = rows.len();
            let outcome = process_rows(rows);

            // impression compacte
            for ev in &outcome.accepted {
                println!(
                    "{} | {} | {} | {}",
                    ev.parsed.clean_label,
                    ev.date,
                    ev.outcome.result_label(),
                    ev.start_time
                );
            }
            for ev in &outcome.rejected {
                eprintln!(
                    "rejected: {} | {}",
                    ev.row.raw_title.as_deref().unwrap_or("-"),
                    ev.reason
                );
            }
            println!(
                "{} ligne(s) : {} acceptée(s), {} refusée(s)",
                total,
                outcome.accepted.len(),
                outcome.rejected.len()
            );

            if let Some(path) = out_csv {
                io::export_processed_csv(path, &outcome.accepted)?;
            }
            if let Some(path) = out_rejected {
                io::export_rejected_csv(path, &outcome.rejected)?;
            }
            if let Some(path) = out_ics {
                let opts = IcsOptions { duration_minutes };
                let text = build_ics(&outcome.accepted, &opts)?;
                io::write_atomic(path, text.as_bytes())?;
            }

            // Code 2 = WARNING : aucune ligne exploitable
            if outcome.accepted.is_empty() {
                2
            } else {
                0
            }
        }
        Commands::Classify { title, date } => match parse_title(Some(&title)) {
            Err(reason) => {
                eprintln!("rejected: {reason}");
                2
            }
            Ok(parsed) => match parse_any_date(Some(&date)) {
                None => {
                    eprintln!("{REASON_BAD_DATE}: '{date}'");
                    2
                }
                Some(d) => {
                    let day_num = rules::day_index(d);
                    match rules::classify(parsed.roster, parsed.number, day_num) {
                        Ok(cat) => {
                            println!(
                                "{} | {} | jour {} | {} | {}",
                                parsed.clean_label,
                                d,
                                day_num,
                                cat,
                                cat.start_time()
                            );
                            0
                        }
                        Err(err) => {
                            eprintln!("error: {err}");
                            2
                        }
                    }
                }
            },
        },
        Commands::DayNum { date } => match parse_any_date(Some(&date)) {
            Some(d) => {
                println!("{}", rules::day_index(d));
                0
            }
            None => {
                eprintln!("{REASON_BAD_DATE}: '{date}'");
                2
            }
        },
        Commands::Notify {
            ics,
            to,
            server,
            port,
            from,
            password,
            subject,
            out,
        } => {
            let ics_text =
                std::fs::read_to_string(&ics).with_context(|| format!("reading {ics}"))?;
            let settings = MailSettings {
                server,
                port,
                from,
                password,
            };
            let dispatch =
                prepare_dispatch(&settings, &to, subject.as_deref(), None, None, &ics_text)?;
            let renderer = TextMessage;
            io::write_atomic(&out, renderer.render(&settings, &dispatch).as_bytes())?;
            println!(
                "Message prepared for {} (attachment {})",
                dispatch.to, dispatch.attachment_name
            );
            0
        }
    };

    std::process::exit(code);
}
