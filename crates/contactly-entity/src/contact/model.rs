//! Contact entity model and query types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;
use uuid::Uuid;

use contactly_core::types::SortOrder;

use super::kind::ContactKind;

/// A contact record owned by a single user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Contact {
    /// Unique contact identifier.
    pub id: Uuid,
    /// The owning user.
    pub user_id: Uuid,
    /// Contact name.
    pub name: String,
    /// Phone number.
    pub phone_number: String,
    /// Email address (optional).
    pub email: Option<String>,
    /// Whether the contact is marked as a favourite.
    pub is_favourite: bool,
    /// Contact category.
    pub contact_type: ContactKind,
    /// Photo URL (optional).
    pub photo: Option<String>,
    /// When the contact was created.
    pub created_at: DateTime<Utc>,
    /// When the contact was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new contact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateContact {
    /// The owning user.
    pub user_id: Uuid,
    /// Contact name.
    pub name: String,
    /// Phone number.
    pub phone_number: String,
    /// Email address (optional).
    pub email: Option<String>,
    /// Favourite flag.
    pub is_favourite: bool,
    /// Contact category.
    pub contact_type: ContactKind,
    /// Photo URL (optional).
    pub photo: Option<String>,
}

/// Partial update for an existing contact. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateContact {
    /// New name.
    pub name: Option<String>,
    /// New phone number.
    pub phone_number: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New favourite flag.
    pub is_favourite: Option<bool>,
    /// New category.
    pub contact_type: Option<ContactKind>,
    /// New photo URL.
    pub photo: Option<String>,
}

/// Whitelisted sortable contact fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ContactSortField {
    /// Sort by name.
    #[default]
    Name,
    /// Sort by phone number.
    PhoneNumber,
    /// Sort by favourite flag.
    IsFavourite,
    /// Sort by contact type.
    ContactType,
    /// Sort by creation time.
    CreatedAt,
}

impl ContactSortField {
    /// Return the column name for this field.
    ///
    /// Only values of this enum ever reach a query string, so the sort
    /// column cannot be attacker-controlled.
    pub fn as_column(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::PhoneNumber => "phone_number",
            Self::IsFavourite => "is_favourite",
            Self::ContactType => "contact_type",
            Self::CreatedAt => "created_at",
        }
    }
}

impl FromStr for ContactSortField {
    type Err = contactly_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "phone_number" => Ok(Self::PhoneNumber),
            "is_favourite" => Ok(Self::IsFavourite),
            "contact_type" => Ok(Self::ContactType),
            "created_at" => Ok(Self::CreatedAt),
            _ => Err(contactly_core::AppError::validation(format!(
                "Invalid sort field: '{s}'"
            ))),
        }
    }
}

/// Sort specification for contact listings.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ContactSort {
    /// Field to sort by.
    pub field: ContactSortField,
    /// Sort direction.
    pub order: SortOrder,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_field_columns() {
        assert_eq!(ContactSortField::Name.as_column(), "name");
        assert_eq!(ContactSortField::CreatedAt.as_column(), "created_at");
    }

    #[test]
    fn test_sort_field_from_str_rejects_unknown() {
        assert!("password_hash".parse::<ContactSortField>().is_err());
        assert_eq!(
            "is_favourite".parse::<ContactSortField>().unwrap(),
            ContactSortField::IsFavourite
        );
    }
}
