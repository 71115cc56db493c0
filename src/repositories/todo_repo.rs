use serde::de::DeserializeOwned;

use crate::models::Todo;
use crate::utils::errors::{AppError, Result};

pub const TABLE: &str = "todos";
pub const LIST_QUERY: &str = "select=*&order=id.asc";

pub fn by_id(id: i64) -> String {
    format!("id=eq.{}", id)
}

pub fn get_query(id: i64) -> String {
    format!("select=*&{}", by_id(id))
}

/// PostgREST always answers with a JSON array of rows.
pub fn rows<T: DeserializeOwned>(json_value: serde_json::Value) -> Result<Vec<T>> {
    match json_value {
        serde_json::Value::Array(arr) => {
            let rows: Vec<T> = serde_json::from_value(serde_json::Value::Array(arr))?;
            Ok(rows)
        }
        _ => Err(AppError::Storage(format!(
            "Expected array, got: {}",
            json_value
        ))),
    }
}

/// The row a filtered get/patch/delete touched; no row means no such id.
pub fn single(id: i64, json_value: serde_json::Value) -> Result<Todo> {
    rows::<Todo>(json_value)?
        .into_iter()
        .next()
        .ok_or(AppError::NotFound(id))
}

#[cfg(target_arch = "wasm32")]
pub use supabase_repo::TodoRepo;

#[cfg(target_arch = "wasm32")]
mod supabase_repo {
    use async_trait::async_trait;

    use super::{by_id, get_query, rows, single, LIST_QUERY, TABLE};
    use crate::db::SupabaseClient;
    use crate::models::{Todo, TodoFields};
    use crate::repositories::TodoStore;
    use crate::utils::errors::{AppError, Result};

    /// Todos persisted in the Supabase `todos` table.
    pub struct TodoRepo {
        db: SupabaseClient,
    }

    impl TodoRepo {
        pub fn new(db: SupabaseClient) -> Self {
            Self { db }
        }
    }

    #[async_trait(?Send)]
    impl TodoStore for TodoRepo {
        async fn list_all(&self) -> Result<Vec<Todo>> {
            let json_value = self.db.get(TABLE, LIST_QUERY).await?;
            rows(json_value)
        }

        async fn get(&self, id: i64) -> Result<Todo> {
            let json_value = self.db.get(TABLE, &get_query(id)).await?;
            single(id, json_value)
        }

        async fn create(&self, fields: TodoFields) -> Result<Todo> {
            let body = serde_json::to_value(&fields)?;
            let json_value = self.db.post(TABLE, body).await?;
            rows::<Todo>(json_value)?
                .into_iter()
                .next()
                .ok_or_else(|| AppError::Storage("No todo returned".into()))
        }

        async fn update(&self, id: i64, fields: TodoFields) -> Result<Todo> {
            let body = serde_json::to_value(&fields)?;
            let json_value = self.db.patch(TABLE, &by_id(id), body).await?;
            single(id, json_value)
        }

        async fn delete(&self, id: i64) -> Result<()> {
            let json_value = self.db.delete(TABLE, &by_id(id)).await?;
            single(id, json_value).map(|_| ())
        }

        /// Read-modify-write; concurrent toggles are last-write-wins.
        async fn toggle(&self, id: i64) -> Result<Todo> {
            let current = self.get(id).await?;
            let body = serde_json::json!({ "resolved": !current.resolved });
            let json_value = self.db.patch(TABLE, &by_id(id), body).await?;
            single(id, json_value)
        }
    }
}
