use http::Method;

use crate::models::TodoForm;
use crate::reply::Outcome;
use crate::repositories::TodoStore;
use crate::utils::errors::{AppError, Result};
use crate::views::{self, Views};

const HOME: &str = "/";

pub async fn list_todos<S: TodoStore>(store: &S, views: &Views, method: &Method) -> Result<Outcome> {
    if *method != Method::GET {
        return Err(AppError::MethodNotAllowed);
    }
    let todos = store.list_all().await?;
    Ok(Outcome::Page {
        template: views::HOME,
        html: views.home(&todos)?,
    })
}

pub async fn create_todo<S: TodoStore>(
    store: &S,
    views: &Views,
    method: &Method,
    body: &str,
) -> Result<Outcome> {
    if *method == Method::GET {
        Ok(Outcome::Page {
            template: views::CREATE,
            html: views.create_form()?,
        })
    } else if *method == Method::POST {
        let fields = TodoForm::parse(body)?.into_fields()?;
        let todo = store.create(fields).await?;
        log::info!("created todo {}", todo.id);
        Ok(Outcome::Redirect(HOME))
    } else {
        Err(AppError::MethodNotAllowed)
    }
}

pub async fn edit_todo<S: TodoStore>(
    store: &S,
    views: &Views,
    method: &Method,
    id: i64,
    body: &str,
) -> Result<Outcome> {
    let todo = store.get(id).await?;
    if *method == Method::GET {
        Ok(Outcome::Page {
            template: views::EDIT,
            html: views.todo_page(views::EDIT, &todo)?,
        })
    } else if *method == Method::POST {
        let fields = TodoForm::parse(body)?.into_fields()?;
        store.update(todo.id, fields).await?;
        log::info!("updated todo {}", todo.id);
        Ok(Outcome::Redirect(HOME))
    } else {
        Err(AppError::MethodNotAllowed)
    }
}

pub async fn delete_todo<S: TodoStore>(
    store: &S,
    views: &Views,
    method: &Method,
    id: i64,
) -> Result<Outcome> {
    let todo = store.get(id).await?;
    if *method == Method::GET {
        Ok(Outcome::Page {
            template: views::DELETE,
            html: views.todo_page(views::DELETE, &todo)?,
        })
    } else if *method == Method::POST {
        store.delete(todo.id).await?;
        log::info!("deleted todo {}", todo.id);
        Ok(Outcome::Redirect(HOME))
    } else {
        Err(AppError::MethodNotAllowed)
    }
}

/// Single-step action posted from the list page; there is no confirmation view.
pub async fn toggle_resolved<S: TodoStore>(store: &S, method: &Method, id: i64) -> Result<Outcome> {
    if *method != Method::POST {
        // Unknown ids still answer 404 rather than 405.
        store.get(id).await?;
        return Err(AppError::MethodNotAllowed);
    }
    let todo = store.toggle(id).await?;
    log::info!("todo {} resolved={}", todo.id, todo.resolved);
    Ok(Outcome::Redirect(HOME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use async_trait::async_trait;

    use crate::models::{Todo, TodoFields};
    use crate::repositories::MemoryStore;

    /// Counts reads so tests can check how many round trips a handler makes.
    #[derive(Default)]
    struct CountingStore {
        inner: MemoryStore,
        gets: Cell<usize>,
    }

    #[async_trait(?Send)]
    impl TodoStore for CountingStore {
        async fn list_all(&self) -> Result<Vec<Todo>> {
            self.inner.list_all().await
        }

        async fn get(&self, id: i64) -> Result<Todo> {
            self.gets.set(self.gets.get() + 1);
            self.inner.get(id).await
        }

        async fn create(&self, fields: TodoFields) -> Result<Todo> {
            self.inner.create(fields).await
        }

        async fn update(&self, id: i64, fields: TodoFields) -> Result<Todo> {
            self.inner.update(id, fields).await
        }

        async fn delete(&self, id: i64) -> Result<()> {
            self.inner.delete(id).await
        }

        async fn toggle(&self, id: i64) -> Result<Todo> {
            self.inner.toggle(id).await
        }
    }

    async fn seeded() -> (MemoryStore, Views, i64) {
        let store = MemoryStore::new();
        let todo = store
            .create(TodoFields {
                title: "Test TODO".into(),
                description: "Test description".into(),
                due_date: chrono::NaiveDate::from_ymd_opt(2026, 10, 25),
            })
            .await
            .unwrap();
        (store, Views::new().unwrap(), todo.id)
    }

    #[tokio::test]
    async fn create_post_redirects_and_stores() {
        let (store, views, _) = seeded().await;
        let outcome = create_todo(
            &store,
            &views,
            &Method::POST,
            "title=New+TODO&description=New+description&due_date=2026-10-23",
        )
        .await
        .unwrap();
        assert_eq!(outcome, Outcome::Redirect("/"));
        let all = store.list_all().await.unwrap();
        assert!(all.iter().any(|t| t.title == "New TODO" && !t.resolved));
    }

    #[tokio::test]
    async fn create_post_with_bad_date_stores_nothing() {
        let (store, views, _) = seeded().await;
        let err = create_todo(&store, &views, &Method::POST, "title=x&due_date=31/12/2026")
            .await
            .unwrap_err();
        assert_eq!(err.status(), 400);
        assert_eq!(store.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn edit_post_with_blank_due_date_clears_it() {
        let (store, views, id) = seeded().await;
        edit_todo(
            &store,
            &views,
            &Method::POST,
            id,
            "title=Updated+TODO&description=Updated+description&due_date=",
        )
        .await
        .unwrap();
        let todo = store.get(id).await.unwrap();
        assert_eq!(todo.title, "Updated TODO");
        assert_eq!(todo.description, "Updated description");
        assert_eq!(todo.due_date, None);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found_for_every_method() {
        let (store, views, _) = seeded().await;
        for method in [Method::GET, Method::POST, Method::PUT] {
            let edit = edit_todo(&store, &views, &method, 9999, "title=x").await;
            assert!(matches!(edit, Err(AppError::NotFound(9999))));
            let delete = delete_todo(&store, &views, &method, 9999).await;
            assert!(matches!(delete, Err(AppError::NotFound(9999))));
            let toggle = toggle_resolved(&store, &method, 9999).await;
            assert!(matches!(toggle, Err(AppError::NotFound(9999))));
        }
    }

    #[tokio::test]
    async fn toggle_requires_post() {
        let (store, _, id) = seeded().await;
        let err = toggle_resolved(&store, &Method::GET, id).await.unwrap_err();
        assert!(matches!(err, AppError::MethodNotAllowed));
        assert!(!store.get(id).await.unwrap().resolved);
    }

    #[tokio::test]
    async fn delete_get_only_confirms() {
        let (store, views, id) = seeded().await;
        let outcome = delete_todo(&store, &views, &Method::GET, id).await.unwrap();
        match outcome {
            Outcome::Page { template, html } => {
                assert_eq!(template, views::DELETE);
                assert!(html.contains("Test TODO"));
            }
            other => panic!("expected confirmation page, got {:?}", other),
        }
        assert!(store.get(id).await.is_ok());
    }

    #[tokio::test]
    async fn toggle_post_does_not_read_first() {
        let store = CountingStore::default();
        let todo = store.create(TodoFields::titled("Buy milk")).await.unwrap();

        let outcome = toggle_resolved(&store, &Method::POST, todo.id).await.unwrap();
        assert_eq!(outcome, Outcome::Redirect("/"));
        assert_eq!(store.gets.get(), 0);
        assert!(store.inner.get(todo.id).await.unwrap().resolved);

        let missing = toggle_resolved(&store, &Method::POST, 9999).await;
        assert!(matches!(missing, Err(AppError::NotFound(9999))));
    }
}
