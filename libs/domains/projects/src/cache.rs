//! Keys and values of the `"projects"` cache region.

use core_cache::CacheRegion;
use database::{Page, PageRequest};
use std::sync::Arc;

use crate::error::{ProjectError, ProjectResult};
use crate::models::Project;

pub const PROJECTS_REGION: &str = "projects";

pub type ProjectCache = Arc<dyn CacheRegion<ProjectCacheKey, ProjectCacheEntry>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectCacheKey {
    Page(PageRequest),
    Project(i64),
}

#[derive(Debug, Clone)]
pub enum ProjectCacheEntry {
    Page(Page<Project>),
    /// `None` records a lookup that found nothing
    Project(Option<Project>),
}

impl ProjectCacheEntry {
    pub fn into_page(self) -> ProjectResult<Page<Project>> {
        match self {
            Self::Page(page) => Ok(page),
            Self::Project(_) => Err(ProjectError::Internal(
                "project cache returned a project for a page key".to_string(),
            )),
        }
    }

    pub fn into_project(self) -> ProjectResult<Option<Project>> {
        match self {
            Self::Project(project) => Ok(project),
            Self::Page(_) => Err(ProjectError::Internal(
                "project cache returned a page for a project key".to_string(),
            )),
        }
    }
}
