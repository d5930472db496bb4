//! HTTP request handlers, organized by domain.

pub mod auth;
pub mod contact;
pub mod health;
