//! # contactly-mailer
//!
//! Outbound email delivery for Contactly: an SMTP implementation of the
//! core [`Mailer`](contactly_core::traits::Mailer) trait plus the
//! reset-password message template.

pub mod smtp;
pub mod template;

pub use smtp::SmtpMailer;
pub use template::ResetPasswordEmail;
