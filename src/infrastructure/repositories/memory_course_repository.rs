//! In-Memory Course Repository
//!
//! Process-local course store. Used when `storage.backend = "memory"` and
//! by the HTTP tests. Ids come from a monotonic counter and are never reused.

use std::collections::BTreeMap;
use std::time::Instant;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::{Course, CourseFilter, CoursePatch, CourseRepository, NewCourse};
use crate::infrastructure::metrics;
use crate::shared::error::AppError;

const BACKEND: &str = "memory";

#[derive(Debug, Default)]
struct Store {
    courses: BTreeMap<i64, Course>,
    last_id: i64,
}

/// In-memory course repository.
#[derive(Debug, Default)]
pub struct InMemoryCourseRepository {
    store: RwLock<Store>,
}

impl InMemoryCourseRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    fn backend(&self) -> &'static str {
        BACKEND
    }

    async fn list(&self, filter: &CourseFilter) -> Result<Vec<Course>, AppError> {
        let start = Instant::now();
        let courses = {
            let store = self.store.read();
            match filter.id {
                Some(id) => store
                    .courses
                    .get(&id)
                    .filter(|course| filter.matches(course))
                    .cloned()
                    .into_iter()
                    .collect(),
                None => store
                    .courses
                    .values()
                    .filter(|course| filter.matches(course))
                    .cloned()
                    .collect(),
            }
        };
        metrics::record_store_query("list", BACKEND, start.elapsed().as_secs_f64());

        Ok(courses)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, AppError> {
        let start = Instant::now();
        let course = self.store.read().courses.get(&id).cloned();
        metrics::record_store_query("find_by_id", BACKEND, start.elapsed().as_secs_f64());

        Ok(course)
    }

    async fn create(&self, course: &NewCourse) -> Result<Course, AppError> {
        let start = Instant::now();
        let created = {
            let mut store = self.store.write();
            store.last_id += 1;
            let created = Course {
                id: store.last_id,
                name: course.name.clone(),
            };
            store.courses.insert(created.id, created.clone());
            created
        };
        metrics::record_store_query("create", BACKEND, start.elapsed().as_secs_f64());

        Ok(created)
    }

    async fn update(&self, id: i64, patch: &CoursePatch) -> Result<Option<Course>, AppError> {
        let start = Instant::now();
        let updated = self.store.write().courses.get_mut(&id).map(|course| {
            patch.apply(course);
            course.clone()
        });
        metrics::record_store_query("update", BACKEND, start.elapsed().as_secs_f64());

        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let start = Instant::now();
        let removed = self.store.write().courses.remove(&id).is_some();
        metrics::record_store_query("delete", BACKEND, start.elapsed().as_secs_f64());

        Ok(removed)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
