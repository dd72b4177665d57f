//! Projects Domain
//!
//! Project lifecycle, paginated listing and the existence check Tasks rely on.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Service   │  ← read-through cache, region eviction on writes, cascade
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory / PostgreSQL)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, inputs, mapper
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use core_cache::CacheManager;
//! use database::PageRequest;
//! use domain_projects::{CreateProject, InMemoryProjectRepository, PROJECTS_REGION, ProjectService};
//!
//! # async fn example() -> domain_projects::ProjectResult<()> {
//! let caches = CacheManager::default();
//! // Nothing is stored under projects here; `domain_tasks::build_services`
//! // wires the task cascade in through `ProjectService::new`.
//! let service = ProjectService::without_dependents(
//!     Arc::new(InMemoryProjectRepository::new()),
//!     caches.region(PROJECTS_REGION),
//! );
//!
//! let project = service.create_project(CreateProject { name: "Alpha".into() }).await?;
//! let page = service.list_projects(PageRequest::default()).await?;
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod entity;
pub mod error;
pub mod mapper;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use cache::{PROJECTS_REGION, ProjectCache, ProjectCacheEntry, ProjectCacheKey};
pub use error::{ProjectError, ProjectResult};
pub use models::{CreateProject, Project, UpdateProject};
pub use postgres::PgProjectRepository;
pub use repository::{InMemoryProjectRepository, ProjectRepository};
pub use service::{ProjectDependents, ProjectService};
