//! GameCash French templates for order, review and contact notices

use chrono::{DateTime, Utc};
use gc_shared::timestamp::format_fr_date;

use super::gamecash::GameCashTemplates;
use super::renderer::{escape_html, NoticeRenderer};
use crate::domain::entities::user::User;
use crate::domain::value_objects::RenderedEmail;
use crate::services::notifications::{
    ContactMessage, OrderStatus, OrderStatusNotice, OrderSummary, ReviewNotice, ReviewTarget,
};

const NOT_SPECIFIED: &str = "Non spécifié";

fn euros(amount: f64) -> String {
    format!("{:.2} €", amount)
}

/// Subjects are single header lines
fn one_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn or_not_specified(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => escape_html(v),
        _ => NOT_SPECIFIED.to_string(),
    }
}

/// Full stars, an optional half star, then empty stars up to five
fn stars(rating: f32) -> String {
    let rating = rating.clamp(0.0, 5.0);
    let full = rating.floor() as usize;
    let half = rating.fract() >= 0.5;
    let empty = 5 - rating.ceil() as usize;
    format!(
        "{}{}{}",
        "★".repeat(full),
        if half { "½" } else { "" },
        "☆".repeat(empty)
    )
}

fn items_table(order: &OrderSummary) -> String {
    if order.items.is_empty() {
        return String::new();
    }

    let rows: String = order
        .items
        .iter()
        .map(|item| {
            format!(
                "        <tr><td>{}</td><td style=\"text-align: center;\">{}</td><td style=\"text-align: right;\">{}</td><td style=\"text-align: right;\">{}</td></tr>\n",
                escape_html(&item.name),
                item.quantity,
                euros(item.unit_price),
                euros(item.line_total()),
            )
        })
        .collect();

    format!(
        r#"    <table class="items">
      <tr><th>Article</th><th>Quantité</th><th>Prix unitaire</th><th>Total</th></tr>
{rows}    </table>
"#
    )
}

fn order_details(order: &OrderSummary) -> String {
    let placed = order
        .placed_at
        .as_ref()
        .map(format_fr_date)
        .unwrap_or_else(|| NOT_SPECIFIED.to_string());

    format!(
        r#"    <div class="section">
      <h2>Détails de la commande</h2>
      <p><strong>Numéro de commande :</strong> {reference}</p>
      <p><strong>Date de la commande :</strong> {placed}</p>
      <p><strong>Total :</strong> {total}</p>
    </div>
{items}"#,
        reference = escape_html(&order.reference()),
        placed = placed,
        total = euros(order.total()),
        items = items_table(order),
    )
}

impl NoticeRenderer for GameCashTemplates {
    fn render_order_status(&self, customer: &User, notice: &OrderStatusNotice) -> RenderedEmail {
        let reference = notice.order.reference();

        let (subject, heading, class, text) = match &notice.status {
            OrderStatus::Processing => (
                format!("Votre commande #{} est en cours de traitement", reference),
                "Votre commande est en préparation",
                "section",
                "Bonne nouvelle ! Votre commande est en cours de préparation dans nos entrepôts.".to_string(),
            ),
            OrderStatus::Shipped => {
                let tracking = match notice.tracking_number.as_deref().map(str::trim) {
                    Some(number) if !number.is_empty() => format!(
                        " Votre numéro de suivi : <strong>{}</strong>.",
                        escape_html(number)
                    ),
                    _ => String::new(),
                };
                (
                    format!("Votre commande #{} a été expédiée", reference),
                    "Votre commande a été expédiée",
                    "section",
                    format!("Votre commande a quitté nos entrepôts et est en cours d'acheminement.{}", tracking),
                )
            }
            OrderStatus::Delivered => (
                format!("Votre commande #{} a été livrée", reference),
                "Votre commande a été livrée",
                "section success",
                "Votre commande a été livrée. Nous espérons que vos articles vous plairont !".to_string(),
            ),
            OrderStatus::Cancelled => {
                let reason = match notice.cancel_reason.as_deref().map(str::trim) {
                    Some(reason) if !reason.is_empty() => escape_html(reason),
                    _ => "Commande annulée".to_string(),
                };
                (
                    format!("Votre commande #{} a été annulée", reference),
                    "Votre commande a été annulée",
                    "section danger",
                    format!("Votre commande a été annulée. Motif : {}.", reason),
                )
            }
            status => (
                format!("Mise à jour de votre commande #{}", reference),
                "Mise à jour de votre commande",
                "section",
                format!(
                    "Le statut de votre commande a été mis à jour. <strong>Nouveau statut :</strong> {}",
                    escape_html(status.label_fr())
                ),
            ),
        };

        let body = format!(
            r#"    <p>Bonjour {name},</p>
    <div class="{class}">
      <p>{text}</p>
    </div>
{details}    <p>Nous vous remercions pour votre confiance et restons à votre disposition pour toute question.</p>
    <div style="text-align: center;">
      <a href="{url}/orders" class="button">Suivre mes commandes</a>
    </div>
"#,
            name = Self::greeting_name(customer),
            class = class,
            text = text,
            details = order_details(&notice.order),
            url = escape_html(self.website_url()),
        );

        RenderedEmail::new(one_line(&subject), Self::page(heading, heading, &body))
    }

    fn render_admin_new_order(&self, customer: &User, order: &OrderSummary) -> RenderedEmail {
        let body = format!(
            r#"    <div class="section">
      <h2>Client</h2>
      <table>
        <tr><td>Nom :</td><td>{name}</td></tr>
        <tr><td>Email :</td><td>{email}</td></tr>
        <tr><td>Téléphone :</td><td>{phone}</td></tr>
        <tr><td>ID Utilisateur :</td><td>{uid}</td></tr>
      </table>
    </div>
{details}    <div style="text-align: center;">
      <a href="{url}/admin/orders" class="button">Gérer les commandes</a>
    </div>
"#,
            name = or_not_specified(customer.display_name.as_deref()),
            email = escape_html(&customer.email),
            phone = or_not_specified(customer.phone.as_deref()),
            uid = escape_html(&customer.id),
            details = order_details(order),
            url = escape_html(self.website_url()),
        );

        RenderedEmail::new(
            one_line(&format!(
                "Nouvelle commande #{} de {}",
                order.reference(),
                customer.display_label()
            )),
            Self::page("Nouvelle commande", "Nouvelle commande reçue", &body),
        )
    }

    fn render_admin_new_review(&self, author: &User, review: &ReviewNotice) -> RenderedEmail {
        let (subject_target, kind, target_row) = match &review.target {
            ReviewTarget::Global => (String::new(), "Global", String::new()),
            ReviewTarget::Product { name } => (
                format!("sur le produit {} ", name),
                "Produit",
                format!("      <p><strong>Produit :</strong> {}</p>\n", escape_html(name)),
            ),
            ReviewTarget::Category { name } => (
                format!("sur la catégorie {} ", name),
                "Catégorie",
                format!("      <p><strong>Catégorie :</strong> {}</p>\n", escape_html(name)),
            ),
        };
        let author_name = match author.display_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => "un utilisateur",
        };
        let title = match review.title.as_deref().map(str::trim) {
            Some(title) if !title.is_empty() => {
                format!("      <p><strong>Titre :</strong> {}</p>\n", escape_html(title))
            }
            _ => String::new(),
        };
        let date = review
            .created_at
            .as_ref()
            .map(format_fr_date)
            .unwrap_or_else(|| NOT_SPECIFIED.to_string());

        let body = format!(
            r#"    <div class="section">
      <h2>Avis</h2>
      <p><strong>Note :</strong> <span class="rating">{stars}</span> ({rating}/5)</p>
      <p><strong>Date :</strong> {date}</p>
      <p><strong>Type d'avis :</strong> {kind}</p>
{target}{title}      <p><strong>Commentaire :</strong></p>
      <p class="message">{comment}</p>
    </div>
    <div class="section">
      <h2>Auteur</h2>
      <p><strong>Nom :</strong> {name}</p>
      <p><strong>Email :</strong> {email}</p>
    </div>
    <div style="text-align: center;">
      <a href="{url}/admin/reviews" class="button">Gérer les avis</a>
    </div>
"#,
            stars = stars(review.rating),
            rating = review.rating,
            date = date,
            kind = kind,
            target = target_row,
            title = title,
            comment = escape_html(&review.comment),
            name = or_not_specified(author.display_name.as_deref()),
            email = escape_html(&author.email),
            url = escape_html(self.website_url()),
        );

        RenderedEmail::new(
            one_line(&format!("Nouvel avis {}de {}", subject_target, author_name)),
            Self::page("Nouvel avis", "Nouvel avis client", &body),
        )
    }

    fn render_contact_admin(&self, message: &ContactMessage, received_at: DateTime<Utc>) -> RenderedEmail {
        let email = escape_html(message.email.trim());
        let body = format!(
            r#"    <p style="color: #666; font-size: 0.9em;">Reçu le {received}</p>
    <div class="section">
      <table>
        <tr><td>Nom :</td><td>{name}</td></tr>
        <tr><td>Email :</td><td><a href="mailto:{email}">{email}</a></td></tr>
        <tr><td>Sujet :</td><td>{subject}</td></tr>
      </table>
    </div>
    <div class="section">
      <h2>Message</h2>
      <p class="message">{message}</p>
      <p style="font-size: 0.9em;">Longueur du message : {length} caractères</p>
    </div>
    <div style="text-align: center;">
      <a href="mailto:{email}" class="button">Répondre</a>
    </div>
"#,
            received = received_at.format("%d/%m/%Y %H:%M"),
            name = escape_html(message.name.trim()),
            email = email,
            subject = escape_html(message.subject.trim()),
            message = escape_html(message.message.trim()),
            length = message.message.trim().chars().count(),
        );

        RenderedEmail::new(
            one_line(&format!("Nouveau message de contact: {}", message.subject)),
            Self::page("Nouveau message de contact", "Nouveau message de contact", &body),
        )
    }

    fn render_contact_acknowledgement(&self, message: &ContactMessage) -> RenderedEmail {
        let body = format!(
            r#"    <p>Bonjour {name},</p>
    <div class="section success">
      <p>Nous avons bien reçu votre message et nous vous répondrons dans les plus brefs délais.</p>
    </div>
    <div class="section">
      <h2>Récapitulatif</h2>
      <p><strong>Sujet :</strong> {subject}</p>
      <p class="message">{message}</p>
    </div>
    <div style="text-align: center;">
      <a href="{url}" class="button">Retourner sur GameCash</a>
    </div>
"#,
            name = escape_html(message.name.trim()),
            subject = escape_html(message.subject.trim()),
            message = escape_html(message.message.trim()),
            url = escape_html(self.website_url()),
        );

        RenderedEmail::new(
            "Confirmation de votre message - GameCash",
            Self::page("Message reçu", "Merci pour votre message !", &body),
        )
    }
}
