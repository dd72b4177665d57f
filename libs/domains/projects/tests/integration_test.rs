//! Integration tests for Projects domain
//!
//! Exercise the service against the in-memory repository and a real moka cache:
//! - Pagination totals
//! - Cache invalidation after writes
//! - Timestamp semantics on create and update

use std::sync::Arc;

use core_cache::{CacheConfig, CacheManager};
use database::PageRequest;
use domain_projects::*;
use test_utils::{TestDataBuilder, assertions::*};

fn service() -> ProjectService<InMemoryProjectRepository> {
    let caches = CacheManager::new(CacheConfig::default());
    ProjectService::without_dependents(
        Arc::new(InMemoryProjectRepository::new()),
        caches.region(PROJECTS_REGION),
    )
}

async fn create(service: &ProjectService<InMemoryProjectRepository>, name: &str) -> Project {
    service
        .create_project(CreateProject { name: name.to_string() })
        .await
        .unwrap()
}

// ============================================================================
// Pagination
// ============================================================================

#[tokio::test]
async fn test_pagination_totals() {
    let service = service();
    let builder = TestDataBuilder::from_test_name("pagination_totals");

    for name in builder.names("project", 10) {
        create(&service, &name).await;
    }

    let first = service.list_projects(PageRequest::new(0, 5)).await.unwrap();
    assert_page_shape(&first, 5, 10, "first page");
    assert!(first.has_next());

    let second = service.list_projects(PageRequest::new(1, 5)).await.unwrap();
    assert_page_shape(&second, 5, 10, "second page");
    assert!(!second.has_next());
    assert_eq!(second.content[0].id, Some(6));

    let beyond = service.list_projects(PageRequest::new(2, 5)).await.unwrap();
    assert_page_shape(&beyond, 0, 10, "page past the end");

    let partial = service.list_projects(PageRequest::new(1, 7)).await.unwrap();
    assert_page_shape(&partial, 3, 10, "partial page");
    assert_eq!(partial.total_pages(), 2);
}

#[tokio::test]
async fn test_default_page_request() {
    let service = service();
    for i in 0..7 {
        create(&service, &format!("p{i}")).await;
    }

    let page = service.list_projects(PageRequest::default()).await.unwrap();
    assert_eq!(page.page, 0);
    assert_eq!(page.size, 5);
    assert_page_shape(&page, 5, 7, "default page");
}

// ============================================================================
// Cache invalidation
// ============================================================================

#[tokio::test]
async fn test_create_invalidates_cached_pages_and_misses() {
    let service = service();

    let empty = service.list_projects(PageRequest::default()).await.unwrap();
    assert!(empty.is_empty());
    assert_none(service.get_project(1).await.unwrap(), "before create");

    let created = create(&service, "Alpha").await;

    let page = service.list_projects(PageRequest::default()).await.unwrap();
    assert_page_shape(&page, 1, 1, "after create");
    let fetched = assert_some(service.get_project(1).await.unwrap(), "after create");
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_update_is_visible_through_cache() {
    let service = service();
    let created = create(&service, "P").await;
    let id = created.id.unwrap();
    service.list_projects(PageRequest::default()).await.unwrap();

    service
        .update_project(id, UpdateProject { name: "Q".into() })
        .await
        .unwrap();

    let page = service.list_projects(PageRequest::default()).await.unwrap();
    assert_eq!(page.content[0].name, "Q");
}

// ============================================================================
// Lifecycle
// ============================================================================

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let service = service();
    let created = create(&service, "P").await;

    let fetched = assert_some(
        service.get_project(created.id.unwrap()).await.unwrap(),
        "created project",
    );

    assert_eq!(fetched.name, "P");
    assert!(fetched.created_at.is_some());
    assert_eq!(fetched.created_at, fetched.updated_at);
}

#[tokio::test]
async fn test_update_bumps_updated_at_only() {
    let service = service();
    let created = create(&service, "P").await;
    let id = created.id.unwrap();

    let updated = assert_some(
        service
            .update_project(id, UpdateProject { name: "Q".into() })
            .await
            .unwrap(),
        "updated project",
    );

    assert_eq!(updated.name, "Q");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > updated.created_at);
}

#[tokio::test]
async fn test_update_missing_project_is_absent() {
    let service = service();
    let missing = TestDataBuilder::from_test_name("update_missing").missing_id();

    let result = service
        .update_project(missing, UpdateProject { name: "Q".into() })
        .await
        .unwrap();
    assert_none(result, "update of missing project");
}

#[tokio::test]
async fn test_delete_then_read() {
    let service = service();
    let id = create(&service, "P").await.id.unwrap();
    assert_some(service.get_project(id).await.unwrap(), "before delete");

    assert!(service.delete_project(id).await.unwrap());

    assert_none(service.get_project(id).await.unwrap(), "after delete");
    assert!(!service.project_exists(id).await.unwrap());
    assert!(!service.delete_project(id).await.unwrap());
}
