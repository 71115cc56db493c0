use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;

use crate::models::{Todo, TodoFields};
use crate::repositories::TodoStore;
use crate::utils::errors::{AppError, Result};

#[derive(Default)]
struct Inner {
    next_id: i64,
    rows: BTreeMap<i64, Todo>,
}

/// In-process store. Ids start at 1 and are never reused, even after a delete.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| AppError::Storage("memory store lock poisoned".into()))
    }
}

#[async_trait(?Send)]
impl TodoStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<Todo>> {
        Ok(self.lock()?.rows.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Todo> {
        self.lock()?
            .rows
            .get(&id)
            .cloned()
            .ok_or(AppError::NotFound(id))
    }

    async fn create(&self, fields: TodoFields) -> Result<Todo> {
        let mut inner = self.lock()?;
        inner.next_id += 1;
        let todo = Todo {
            id: inner.next_id,
            title: fields.title,
            description: fields.description,
            due_date: fields.due_date,
            resolved: false,
            created_at: Utc::now(),
        };
        inner.rows.insert(todo.id, todo.clone());
        Ok(todo)
    }

    async fn update(&self, id: i64, fields: TodoFields) -> Result<Todo> {
        let mut inner = self.lock()?;
        let todo = inner.rows.get_mut(&id).ok_or(AppError::NotFound(id))?;
        todo.title = fields.title;
        todo.description = fields.description;
        todo.due_date = fields.due_date;
        Ok(todo.clone())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.lock()?
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(AppError::NotFound(id))
    }

    async fn toggle(&self, id: i64) -> Result<Todo> {
        let mut inner = self.lock()?;
        let todo = inner.rows.get_mut(&id).ok_or(AppError::NotFound(id))?;
        todo.resolved = !todo.resolved;
        Ok(todo.clone())
    }
}
