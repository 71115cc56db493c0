use http::Method;
use matchit::Router;

use crate::handlers::{health, todo_handler};
use crate::reply::{Outcome, Reply};
use crate::repositories::TodoStore;
use crate::utils::config::Settings;
use crate::utils::errors::{AppError, Result};
use crate::views::Views;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Create,
    Edit(i64),
    Delete(i64),
    Toggle(i64),
    Health,
}

#[derive(Clone, Copy)]
enum Endpoint {
    Home,
    Create,
    Edit,
    Delete,
    Toggle,
    Health,
}

pub struct RouteTable {
    router: Router<Endpoint>,
}

impl RouteTable {
    pub fn new() -> Result<Self> {
        let mut router = Router::new();
        router.insert("/", Endpoint::Home)?;
        router.insert("/create", Endpoint::Create)?;
        router.insert("/edit/{id}", Endpoint::Edit)?;
        router.insert("/delete/{id}", Endpoint::Delete)?;
        router.insert("/toggle/{id}", Endpoint::Toggle)?;
        router.insert("/health", Endpoint::Health)?;
        Ok(Self { router })
    }

    /// A single trailing slash is tolerated; `{id}` must be a plain non-negative integer.
    pub fn resolve(&self, path: &str) -> Option<Route> {
        let path = match path.strip_suffix('/') {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => path,
        };
        let matched = self.router.at(path).ok()?;
        let id = || matched.params.get("id").and_then(parse_id);
        let route = match *matched.value {
            Endpoint::Home => Route::Home,
            Endpoint::Create => Route::Create,
            Endpoint::Health => Route::Health,
            Endpoint::Edit => Route::Edit(id()?),
            Endpoint::Delete => Route::Delete(id()?),
            Endpoint::Toggle => Route::Toggle(id()?),
        };
        Some(route)
    }
}

fn parse_id(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Everything a request needs, passed explicitly instead of living in globals.
pub struct App<'a, S> {
    pub store: S,
    pub views: &'a Views,
    pub settings: Settings,
    routes: RouteTable,
}

impl<'a, S: TodoStore> App<'a, S> {
    pub fn new(store: S, views: &'a Views, settings: Settings) -> Result<Self> {
        Ok(Self {
            store,
            views,
            settings,
            routes: RouteTable::new()?,
        })
    }

    /// HEAD is answered like GET with the body dropped.
    pub async fn handle(&self, method: &Method, path: &str, body: &str) -> Reply {
        let head = *method == Method::HEAD;
        let get = Method::GET;
        let method = if head { &get } else { method };
        let mut reply = match self.dispatch(method, path, body).await {
            Ok(reply) => reply,
            Err(err) => self.error_reply(method, path, err),
        };
        if head {
            reply.body.clear();
        }
        reply
    }

    async fn dispatch(&self, method: &Method, path: &str, body: &str) -> Result<Reply> {
        let route = self.routes.resolve(path).ok_or(AppError::NoRoute)?;
        let outcome: Outcome = match route {
            Route::Health => return health::health_check(&self.settings, method),
            Route::Home => todo_handler::list_todos(&self.store, self.views, method).await?,
            Route::Create => {
                todo_handler::create_todo(&self.store, self.views, method, body).await?
            }
            Route::Edit(id) => {
                todo_handler::edit_todo(&self.store, self.views, method, id, body).await?
            }
            Route::Delete(id) => {
                todo_handler::delete_todo(&self.store, self.views, method, id).await?
            }
            Route::Toggle(id) => todo_handler::toggle_resolved(&self.store, method, id).await?,
        };
        Ok(outcome.into())
    }

    fn error_reply(&self, method: &Method, path: &str, err: AppError) -> Reply {
        let status = err.status();
        if status >= 500 {
            log::error!("{} {}: {}", method, path, err);
        } else {
            log::warn!("{} {}: {}", method, path, err);
        }
        match self.views.error(status, &err.public_message()) {
            Ok(html) => Reply::html(status, crate::views::ERROR, html),
            Err(render_err) => {
                log::error!("rendering error page: {}", render_err);
                Reply::text(status, err.public_message())
            }
        }
    }
}
