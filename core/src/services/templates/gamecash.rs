//! GameCash French email templates

use chrono::{DateTime, Utc};
use gc_shared::timestamp::format_fr_date;

use super::renderer::{escape_html, MessageRenderer};
use crate::domain::entities::user::User;
use crate::domain::value_objects::RenderedEmail;
use crate::domain::entities::verification_record::VERIFICATION_WINDOW_HOURS;

const DEFAULT_WEBSITE_URL: &str = "https://gamecash.fr";
const SUPPORT_ADDRESS: &str = "support@gamecash.fr";

const STYLE: &str = r#"
    body { font-family: 'Roboto', 'Segoe UI', sans-serif; line-height: 1.6; color: #333; background-color: #f8f9fa; margin: 0; padding: 0; }
    .container { max-width: 600px; margin: 0 auto; padding: 20px; background-color: #ffffff; }
    .header { text-align: center; padding: 20px 0; border-bottom: 4px solid #6200ea; }
    h1 { color: #6200ea; margin: 20px 0; }
    .code { text-align: center; font-size: 42px; font-weight: bold; letter-spacing: 8px; color: #6200ea; margin: 30px 0; padding: 20px; background-color: #f8f9fa; border-radius: 5px; border: 1px dashed #6200ea; }
    .section { background-color: #f0f0ff; padding: 15px; border-radius: 5px; margin: 20px 0; border-left: 4px solid #6200ea; }
    .success { background-color: #e8f5e9; border-left-color: #4caf50; }
    .warning { background-color: #fff8e1; border-left-color: #ffb300; }
    .danger { background-color: #ffebee; border-left-color: #e53935; }
    .message { white-space: pre-wrap; background-color: #ffffff; padding: 10px; border-radius: 5px; }
    .rating { color: #ffb300; font-size: 1.2em; }
    table.items { width: 100%; border-collapse: collapse; }
    table.items td, table.items th { padding: 8px; border-bottom: 1px solid #eee; }
    .button { display: inline-block; padding: 12px 24px; background-color: #6200ea; color: white; text-decoration: none; border-radius: 5px; font-weight: bold; margin-top: 15px; }
    .footer { text-align: center; padding: 20px 0; font-size: 0.9em; color: #777; border-top: 1px solid #eee; }
    table td:first-child { font-weight: bold; padding-right: 12px; }
"#;

/// French templates used by the GameCash storefront
#[derive(Debug, Clone)]
pub struct GameCashTemplates {
    website_url: String,
}

impl Default for GameCashTemplates {
    fn default() -> Self {
        Self::new(DEFAULT_WEBSITE_URL)
    }
}

impl GameCashTemplates {
    pub fn new(website_url: impl Into<String>) -> Self {
        let website_url = website_url.into();
        let website_url = website_url.trim_end_matches('/').to_string();
        Self {
            website_url: if website_url.is_empty() {
                DEFAULT_WEBSITE_URL.to_string()
            } else {
                website_url
            },
        }
    }

    pub fn website_url(&self) -> &str {
        &self.website_url
    }

    pub(super) fn greeting_name(user: &User) -> String {
        match user.display_name.as_deref() {
            Some(name) if !name.trim().is_empty() => escape_html(name),
            _ => "cher utilisateur".to_string(),
        }
    }

    pub(super) fn page(title: &str, heading: &str, body: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>{title} - GameCash</title>
  <style>{style}</style>
</head>
<body>
  <div class="container">
    <div class="header">
      <h1>{heading}</h1>
    </div>
{body}
    <div class="footer">
      <p>© GameCash - Tous droits réservés</p>
      <p>Une question ? Contactez notre support à <a href="mailto:{support}">{support}</a>.</p>
    </div>
  </div>
</body>
</html>
"#,
            title = title,
            style = STYLE,
            heading = heading,
            body = body,
            support = SUPPORT_ADDRESS,
        )
    }
}

impl MessageRenderer for GameCashTemplates {
    fn render_verification(&self, user: &User, code: &str) -> RenderedEmail {
        let body = format!(
            r#"    <div class="section">
      <h2>Bonjour {name},</h2>
      <p>Merci de vous être inscrit sur GameCash. Pour activer votre compte, veuillez saisir le code de vérification ci-dessous sur notre site.</p>
    </div>
    <p style="text-align: center; font-weight: bold;">Votre code de vérification :</p>
    <div class="code">{code}</div>
    <div class="section">
      <h2>Comment vérifier votre compte ?</h2>
      <ol>
        <li>Retournez sur GameCash</li>
        <li>Accédez à la page de vérification de compte</li>
        <li>Saisissez le code à {digits} chiffres ci-dessus</li>
      </ol>
    </div>
    <div class="section warning">
      <p><strong>Important :</strong> ce code est valable pendant {hours} heures. Passé ce délai, vous devrez demander un nouveau code.</p>
      <p>Si vous n'avez pas créé de compte sur GameCash, veuillez ignorer cet email.</p>
    </div>
    <div style="text-align: center;">
      <a href="{url}/verify-account" class="button">Retourner sur GameCash</a>
    </div>
"#,
            name = Self::greeting_name(user),
            code = escape_html(code),
            digits = code.chars().count(),
            hours = VERIFICATION_WINDOW_HOURS,
            url = escape_html(&self.website_url),
        );

        RenderedEmail::new(
            "Vérifiez votre adresse email - GameCash",
            Self::page(
                "Vérification de votre adresse email",
                "Vérification de votre adresse email",
                &body,
            ),
        )
    }

    fn render_confirmation(&self, user: &User, verified_at: DateTime<Utc>) -> RenderedEmail {
        let body = format!(
            r#"    <div class="section success">
      <h2>Félicitations, {name} !</h2>
      <p>Votre adresse email a été vérifiée avec succès et votre compte GameCash est maintenant pleinement actif.</p>
    </div>
    <div class="section">
      <h2>Informations de compte</h2>
      <ul>
        <li><strong>Email :</strong> {email}</li>
        <li><strong>Date d'activation :</strong> {date}</li>
      </ul>
    </div>
    <div style="text-align: center;">
      <a href="{url}" class="button">Accéder à GameCash</a>
    </div>
"#,
            name = Self::greeting_name(user),
            email = escape_html(&user.email),
            date = format_fr_date(&verified_at),
            url = escape_html(&self.website_url),
        );

        RenderedEmail::new(
            "Compte GameCash activé avec succès",
            Self::page("Compte activé", "Votre compte est maintenant actif !", &body),
        )
    }

    fn render_welcome(&self, user: &User) -> RenderedEmail {
        let body = format!(
            r#"    <div class="section">
      <h2>Bonjour {name},</h2>
      <p>Nous sommes ravis de vous accueillir dans la communauté GameCash ! Votre compte a été créé avec succès et vous pouvez dès maintenant profiter de toutes les fonctionnalités de notre plateforme.</p>
    </div>
    <div class="section success">
      <h2>Que faire maintenant ?</h2>
      <ul>
        <li>Complétez votre profil pour une expérience personnalisée</li>
        <li>Parcourez notre catalogue de produits gaming</li>
        <li>Consultez nos dernières promotions</li>
        <li>Partagez vos avis sur vos jeux préférés</li>
      </ul>
    </div>
    <div style="text-align: center;">
      <a href="{url}" class="button">Commencer l'aventure</a>
    </div>
"#,
            name = Self::greeting_name(user),
            url = escape_html(&self.website_url),
        );

        RenderedEmail::new(
            "Bienvenue sur GameCash !",
            Self::page("Bienvenue sur GameCash", "Bienvenue sur GameCash !", &body),
        )
    }

    fn render_admin_new_user(&self, user: &User, verified_at: DateTime<Utc>) -> RenderedEmail {
        let display_name = user
            .display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .map(escape_html)
            .unwrap_or_else(|| "Non spécifié".to_string());
        let phone = user
            .phone
            .as_deref()
            .filter(|phone| !phone.trim().is_empty())
            .map(escape_html)
            .unwrap_or_else(|| "Non spécifié".to_string());

        let body = format!(
            r#"    <div class="section">
      <h2>Informations utilisateur</h2>
      <table>
        <tr><td>Nom :</td><td>{name}</td></tr>
        <tr><td>Email :</td><td>{email}</td></tr>
        <tr><td>Téléphone :</td><td>{phone}</td></tr>
        <tr><td>ID Utilisateur :</td><td>{uid}</td></tr>
        <tr><td>Date d'inscription :</td><td>{registered}</td></tr>
        <tr><td>Date de vérification :</td><td>{verified}</td></tr>
      </table>
    </div>
"#,
            name = display_name,
            email = escape_html(&user.email),
            phone = phone,
            uid = escape_html(&user.id),
            registered = format_fr_date(&user.created_at),
            verified = format_fr_date(&verified_at),
        );

        RenderedEmail::new(
            format!("Nouvel utilisateur inscrit : {}", user.display_label()),
            Self::page("Nouvel utilisateur inscrit", "Nouvel utilisateur inscrit", &body),
        )
    }
}
