//! Query parameters for the contact listing endpoint.

use serde::{Deserialize, Serialize};

use contactly_core::error::AppError;
use contactly_core::types::{PageRequest, SortOrder};
use contactly_entity::contact::{ContactSort, ContactSortField};

/// Pagination and sorting query parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactListParams {
    /// Page number (1-based, default: 1).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page (default: 10, max: 100).
    #[serde(default = "default_per_page")]
    pub per_page: u64,
    /// Sort field name.
    pub sort_by: Option<String>,
    /// Sort direction: "asc" or "desc".
    pub sort_order: Option<String>,
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    10
}

impl ContactListParams {
    /// Converts to a page request and a whitelisted sort specification.
    ///
    /// An unrecognised sort field or direction is a validation error, never
    /// raw SQL input.
    pub fn into_parts(self) -> Result<(PageRequest, ContactSort), AppError> {
        let page = PageRequest::new(self.page, self.per_page);

        let field = match self.sort_by.as_deref() {
            Some(raw) => raw.parse::<ContactSortField>()?,
            None => ContactSortField::default(),
        };
        let order = match self.sort_order.as_deref() {
            Some(raw) => raw.parse::<SortOrder>()?,
            None => SortOrder::default(),
        };

        Ok((page, ContactSort { field, order }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply() {
        let params: ContactListParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.page, 1);
        assert_eq!(params.per_page, 10);

        let (page, sort) = params.into_parts().unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(sort.order, SortOrder::Asc);
        assert_eq!(sort.field, ContactSortField::Name);
    }

    #[test]
    fn test_rejects_unknown_sort_field() {
        let params = ContactListParams {
            page: 1,
            per_page: 10,
            sort_by: Some("password_hash".to_string()),
            sort_order: None,
        };
        assert!(params.into_parts().is_err());
    }
}
