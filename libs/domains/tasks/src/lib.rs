//! Tasks Domain
//!
//! Tasks always belong to a project. Every task write first asks the project
//! service whether the parent exists; a missing parent makes the write a no-op
//! that returns `None`.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐      ┌────────────────┐
//! │ TaskService │ ───▶ │ ProjectService │  ← project_exists gate
//! └──────┬──────┘      └───────┬────────┘
//!        │                     │ delete_project
//! ┌──────▼──────┐      ┌───────▼────────┐
//! │ Repository  │ ◀─── │  TaskCascade   │  ← removes a project's tasks
//! └──────┬──────┘      └────────────────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use core_cache::CacheManager;
//! use domain_projects::{CreateProject, InMemoryProjectRepository};
//! use domain_tasks::{CreateTask, InMemoryTaskRepository, build_services};
//!
//! # async fn example() -> domain_tasks::TaskResult<()> {
//! let services = build_services(
//!     Arc::new(InMemoryProjectRepository::new()),
//!     Arc::new(InMemoryTaskRepository::new()),
//!     &CacheManager::default(),
//! );
//!
//! let project = services.projects.create_project(CreateProject { name: "Alpha".into() }).await?;
//! let project_id = project.id.unwrap_or_default();
//! let task = services
//!     .tasks
//!     .create_task(project_id, CreateTask { description: "first".into() })
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod cascade;
pub mod entity;
pub mod error;
pub mod mapper;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;
pub mod wiring;

pub use cache::{TASKS_REGION, TaskCache, TaskCacheEntry, TaskCacheKey};
pub use cascade::TaskCascade;
pub use error::{TaskError, TaskResult};
pub use models::{CreateTask, Task, UpdateTask};
pub use postgres::PgTaskRepository;
pub use repository::{InMemoryTaskRepository, TaskRepository};
pub use service::TaskService;
pub use wiring::{Services, build_services};
