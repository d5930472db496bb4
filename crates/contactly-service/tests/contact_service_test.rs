//! Contact CRUD and pagination tests over the in-memory store.

use std::sync::Arc;

use contactly_core::error::ErrorKind;
use contactly_core::types::{PageRequest, SortOrder};
use contactly_database::memory::MemoryContactStore;
use contactly_entity::contact::{
    ContactKind, ContactSort, ContactSortField, CreateContact, UpdateContact,
};
use contactly_service::ContactService;
use uuid::Uuid;

fn service() -> ContactService {
    ContactService::new(Arc::new(MemoryContactStore::new()))
}

fn new_contact(user_id: Uuid, name: &str) -> CreateContact {
    CreateContact {
        user_id,
        name: name.to_string(),
        phone_number: "+15550001111".to_string(),
        email: None,
        is_favourite: false,
        contact_type: ContactKind::Personal,
        photo: None,
    }
}

#[tokio::test]
async fn test_create_and_get() {
    let service = service();
    let user = Uuid::new_v4();

    let created = service
        .create(new_contact(user, "Bob"))
        .await
        .expect("create");
    let fetched = service.get(user, created.id).await.expect("get");

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, "Bob");
    assert_eq!(fetched.contact_type, ContactKind::Personal);
}

#[tokio::test]
async fn test_get_is_scoped_to_owner() {
    let service = service();
    let owner = Uuid::new_v4();
    let stranger = Uuid::new_v4();

    let created = service
        .create(new_contact(owner, "Bob"))
        .await
        .expect("create");

    let err = service.get(stranger, created.id).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
    assert_eq!(err.message, "Contact not found");
}

#[tokio::test]
async fn test_partial_update_keeps_other_fields() {
    let service = service();
    let user = Uuid::new_v4();
    let created = service
        .create(new_contact(user, "Bob"))
        .await
        .expect("create");

    let updated = service
        .update(
            user,
            created.id,
            UpdateContact {
                is_favourite: Some(true),
                contact_type: Some(ContactKind::Work),
                ..UpdateContact::default()
            },
        )
        .await
        .expect("update");

    assert!(updated.is_favourite);
    assert_eq!(updated.contact_type, ContactKind::Work);
    assert_eq!(updated.name, "Bob");
    assert_eq!(updated.phone_number, created.phone_number);
}

#[tokio::test]
async fn test_update_unknown_contact_is_not_found() {
    let service = service();
    let err = service
        .update(Uuid::new_v4(), Uuid::new_v4(), UpdateContact::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn test_delete_then_get_fails() {
    let service = service();
    let user = Uuid::new_v4();
    let created = service
        .create(new_contact(user, "Bob"))
        .await
        .expect("create");

    service.delete(user, created.id).await.expect("delete");

    let err = service.get(user, created.id).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);

    let err = service.delete(user, created.id).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn test_list_paginates_and_sorts_by_name() {
    let service = service();
    let user = Uuid::new_v4();
    for name in ["Carol", "Alice", "Eve", "Bob", "Dave"] {
        service
            .create(new_contact(user, name))
            .await
            .expect("create");
    }
    // Another user's contacts must not leak into the listing.
    service
        .create(new_contact(Uuid::new_v4(), "Zed"))
        .await
        .expect("create");

    let sort = ContactSort {
        field: ContactSortField::Name,
        order: SortOrder::Asc,
    };

    let page = service
        .list(user, PageRequest::new(1, 2), sort)
        .await
        .expect("list");
    let names: Vec<_> = page.items.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Alice", "Bob"]);
    assert_eq!(page.total_items, 5);
    assert_eq!(page.total_pages, 3);
    assert!(page.has_next);
    assert!(!page.has_previous);

    let page = service
        .list(user, PageRequest::new(3, 2), sort)
        .await
        .expect("list");
    let names: Vec<_> = page.items.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Eve"]);
    assert!(!page.has_next);
    assert!(page.has_previous);
}

#[tokio::test]
async fn test_list_sorts_favourites_first_descending() {
    let service = service();
    let user = Uuid::new_v4();
    service
        .create(new_contact(user, "Plain"))
        .await
        .expect("create");
    let mut favourite = new_contact(user, "Starred");
    favourite.is_favourite = true;
    service.create(favourite).await.expect("create");

    let page = service
        .list(
            user,
            PageRequest::new(1, 10),
            ContactSort {
                field: ContactSortField::IsFavourite,
                order: SortOrder::Desc,
            },
        )
        .await
        .expect("list");

    assert_eq!(page.items[0].name, "Starred");
    assert_eq!(page.items[1].name, "Plain");
}

#[tokio::test]
async fn test_list_empty_page_beyond_end() {
    let service = service();
    let user = Uuid::new_v4();
    service
        .create(new_contact(user, "Bob"))
        .await
        .expect("create");

    let page = service
        .list(user, PageRequest::new(5, 10), ContactSort::default())
        .await
        .expect("list");
    assert!(page.items.is_empty());
    assert_eq!(page.total_items, 1);
}
