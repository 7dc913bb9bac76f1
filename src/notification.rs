use anyhow::{bail, Result};

pub const DEFAULT_SUBJECT: &str = "Shift Schedule (Outlook .ics)";
pub const DEFAULT_BODY: &str = "Attached is your shift schedule calendar file.";
pub const DEFAULT_ATTACHMENT_NAME: &str = "shift_schedule.ics";

/// Paramètres de transport fournis par l'appelant.
#[derive(Debug, Clone)]
pub struct MailSettings {
    pub server: String,
    pub port: u16,
    pub from: String,
    pub password: String,
}

impl MailSettings {
    /// Refus d'emblée si un champ requis manque : on ne prépare rien
    /// avec des identifiants incomplets.
    pub fn validate(&self) -> Result<()> {
        if self.server.trim().is_empty() {
            bail!("missing SMTP server");
        }
        if self.port == 0 {
            bail!("invalid SMTP port");
        }
        if self.from.trim().is_empty() {
            bail!("missing sender address");
        }
        if self.password.trim().is_empty() {
            bail!("missing password / app password");
        }
        Ok(())
    }
}

/// Message prêt à partir : destinataire, sujet, corps, pièce jointe.
#[derive(Debug, Clone)]
pub struct Dispatch {
    pub to: String,
    pub subject: String,
    pub body: String,
    pub attachment_name: String,
    pub attachment_text: String,
}

/// Assemble le message sortant après validation des paramètres.
pub fn prepare_dispatch(
    settings: &MailSettings,
    to: &str,
    subject: Option<&str>,
    body: Option<&str>,
    attachment_name: Option<&str>,
    ics_text: &str,
) -> Result<Dispatch> {
    settings.validate()?;
    if to.trim().is_empty() {
        bail!("missing destination address");
    }
    Ok(Dispatch {
        to: to.trim().to_string(),
        subject: subject.unwrap_or(DEFAULT_SUBJECT).to_string(),
        body: body.unwrap_or(DEFAULT_BODY).to_string(),
        attachment_name: attachment_name.unwrap_or(DEFAULT_ATTACHMENT_NAME).to_string(),
        attachment_text: ics_text.to_string(),
    })
}

/// Permet de customiser le rendu du message sortant (aperçu, corps, ...).
pub trait DispatchRenderer {
    fn render(&self, settings: &MailSettings, dispatch: &Dispatch) -> String;
}

/// Aperçu texte plat, façon en-têtes de mail. Le mot de passe n'y
/// figure jamais.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextMessage;

impl DispatchRenderer for TextMessage {
    fn render(&self, settings: &MailSettings, dispatch: &Dispatch) -> String {
        format!(
            "From: {from}\nTo: {to}\nSubject: {subject}\nServer: {server}:{port}\n\n{body}\n\n[attachment: {name} ({len} bytes, text/calendar)]\n",
            from = settings.from,
            to = dispatch.to,
            subject = dispatch.subject,
            server = settings.server,
            port = settings.port,
            body = dispatch.body,
            name = dispatch.attachment_name,
            len = dispatch.attachment_text.len(),
        )
    }
}

/// Siège du transport réel (session chiffrée et authentifiée) : une
/// seule tentative, pas de reprise. L'implémentation appartient au
/// collaborateur extérieur.
pub trait Mailer {
    fn send(&self, settings: &MailSettings, dispatch: &Dispatch) -> Result<()>;
}
