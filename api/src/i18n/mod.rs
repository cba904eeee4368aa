//! Localized API messages
//!
//! Every message the API returns exists in English and French. The language
//! comes from `Accept-Language`, English when absent or unsupported.

use actix_web::{http::header, HttpRequest};
use gc_shared::Language;

/// Message keys returned in response bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    VerificationSent,
    VerificationResent,
    EmailVerified,
    AccountRegistered,
    AccountPendingResent,
    RegisteredDeliveryFailed,
    AccountVerified,
    WelcomeEmailSent,
    OrderStatusNotified,
    NewOrderNotified,
    NewReviewNotified,
    ContactMessageSent,
    ContactAcknowledgementFailed,
    Unauthorized,
    NotFound,
    UserNotFound,
    InvalidRequest,
    RequiredField,
    InvalidEmail,
    NoVerificationInProgress,
    CodeExpired,
    IncorrectCode,
    TooManyAttempts,
    AlreadyVerified,
    AlreadyRegistered,
    EmailNotVerified,
    DeliveryFailed,
    Internal,
}

impl Message {
    pub fn text(self, lang: Language) -> &'static str {
        let (en, fr) = match self {
            Message::VerificationSent => (
                "Verification email sent",
                "Email de vérification envoyé",
            ),
            Message::VerificationResent => (
                "A new verification email has been sent",
                "Un nouvel email de vérification a été envoyé",
            ),
            Message::EmailVerified => (
                "Email verified successfully",
                "Email vérifié avec succès",
            ),
            Message::AccountRegistered => (
                "Account created, check your inbox for the verification code",
                "Compte créé, consultez votre boîte mail pour le code de vérification",
            ),
            Message::AccountPendingResent => (
                "Account already registered, a new verification code has been sent",
                "Compte déjà enregistré, un nouveau code de vérification a été envoyé",
            ),
            Message::RegisteredDeliveryFailed => (
                "Account created, but the verification email could not be sent. Please request a new code",
                "Compte créé, mais l'email de vérification n'a pas pu être envoyé. Veuillez demander un nouveau code",
            ),
            Message::AccountVerified => (
                "Account verified and activated",
                "Compte vérifié et activé",
            ),
            Message::WelcomeEmailSent => (
                "Welcome email sent",
                "Email de bienvenue envoyé",
            ),
            Message::OrderStatusNotified => (
                "Order status email sent to the customer",
                "Email de statut de commande envoyé au client",
            ),
            Message::NewOrderNotified => (
                "New order notice sent",
                "Notification de nouvelle commande envoyée",
            ),
            Message::NewReviewNotified => (
                "New review notice sent",
                "Notification de nouvel avis envoyée",
            ),
            Message::ContactMessageSent => (
                "Your message has been sent",
                "Votre message a bien été envoyé",
            ),
            Message::ContactAcknowledgementFailed => (
                "Your message has been sent, but the confirmation email could not be delivered",
                "Votre message a bien été envoyé, mais l'email de confirmation n'a pas pu être délivré",
            ),
            Message::Unauthorized => (
                "Missing or invalid API key",
                "Clé API manquante ou invalide",
            ),
            Message::NotFound => (
                "The requested resource was not found",
                "La ressource demandée est introuvable",
            ),
            Message::UserNotFound => ("User not found", "Utilisateur introuvable"),
            Message::InvalidRequest => (
                "Invalid request data",
                "Données de requête invalides",
            ),
            Message::RequiredField => (
                "A required field is missing",
                "Un champ obligatoire est manquant",
            ),
            Message::InvalidEmail => (
                "Invalid email address",
                "Adresse email invalide",
            ),
            Message::NoVerificationInProgress => (
                "No verification in progress for this user",
                "Aucune vérification en cours pour cet utilisateur",
            ),
            Message::CodeExpired => (
                "The verification code has expired. Please request a new one",
                "Le code de vérification a expiré. Veuillez en demander un nouveau",
            ),
            Message::IncorrectCode => (
                "Incorrect verification code",
                "Code de vérification incorrect",
            ),
            Message::TooManyAttempts => (
                "Too many incorrect attempts. Please request a new code",
                "Trop de tentatives incorrectes. Veuillez demander un nouveau code",
            ),
            Message::AlreadyVerified => (
                "Email already verified",
                "Email déjà vérifié",
            ),
            Message::AlreadyRegistered => (
                "An account with this identifier is already registered",
                "Un compte avec cet identifiant est déjà enregistré",
            ),
            Message::EmailNotVerified => (
                "Email not verified yet",
                "Email pas encore vérifié",
            ),
            Message::DeliveryFailed => (
                "Email could not be sent. Please try again later",
                "L'email n'a pas pu être envoyé. Veuillez réessayer plus tard",
            ),
            Message::Internal => (
                "An internal error occurred",
                "Une erreur interne est survenue",
            ),
        };

        match lang {
            Language::English => en,
            Language::French => fr,
        }
    }
}

/// Language preferred by the caller
pub fn request_language(req: &HttpRequest) -> Language {
    req.headers()
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .map(Language::from_accept_language)
        .unwrap_or_default()
}
