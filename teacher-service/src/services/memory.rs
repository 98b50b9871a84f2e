use async_trait::async_trait;
use dashmap::DashMap;
use service_core::error::AppError;

use super::store::TeacherStore;
use crate::models::{TeacherDocument, TeacherId, TeacherPatch};

/// Process-local store for tests.
#[derive(Debug, Default)]
pub struct InMemoryTeacherStore {
    teachers: DashMap<TeacherId, TeacherDocument>,
}

impl InMemoryTeacherStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.teachers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teachers.is_empty()
    }
}

#[async_trait]
impl TeacherStore for InMemoryTeacherStore {
    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn insert(&self, mut teacher: TeacherDocument) -> Result<TeacherId, AppError> {
        let id = TeacherId::generate();
        teacher.id = Some(id.object_id());
        self.teachers.insert(id, teacher);
        Ok(id)
    }

    async fn find_all(&self) -> Result<Vec<TeacherDocument>, AppError> {
        let mut teachers: Vec<(TeacherId, TeacherDocument)> = self
            .teachers
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect();
        teachers.sort_by_key(|(id, _)| *id);
        Ok(teachers.into_iter().map(|(_, teacher)| teacher).collect())
    }

    async fn find_by_id(&self, id: &TeacherId) -> Result<Option<TeacherDocument>, AppError> {
        Ok(self.teachers.get(id).map(|entry| entry.value().clone()))
    }

    async fn update_fields(&self, id: &TeacherId, patch: &TeacherPatch) -> Result<bool, AppError> {
        match self.teachers.get_mut(id) {
            Some(mut entry) => {
                patch.apply(entry.value_mut());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &TeacherId) -> Result<bool, AppError> {
        Ok(self.teachers.remove(id).is_some())
    }
}
