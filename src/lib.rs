pub mod handlers;
pub mod models;
pub mod reply;
pub mod repositories;
pub mod routes;
pub mod utils;
pub mod views;

#[cfg(target_arch = "wasm32")]
mod db;
#[cfg(target_arch = "wasm32")]
mod middleware;

pub use models::{Todo, TodoFields};
pub use reply::{Outcome, Reply};
pub use repositories::{MemoryStore, TodoStore};
pub use routes::{App, Route, RouteTable};
pub use utils::config::Settings;
pub use utils::errors::AppError;
pub use views::Views;

#[cfg(target_arch = "wasm32")]
mod worker_entry {
    use std::sync::OnceLock;

    use worker::*;

    use crate::db::SupabaseClient;
    use crate::middleware::logging;
    use crate::repositories::TodoRepo;
    use crate::routes::App;
    use crate::utils::context::AppContext;
    use crate::utils::errors::AppError;
    use crate::reply::Reply;
    use crate::views::Views;

    static VIEWS: OnceLock<Views> = OnceLock::new();

    fn views() -> std::result::Result<&'static Views, AppError> {
        if let Some(views) = VIEWS.get() {
            return Ok(views);
        }
        let views = Views::new()?;
        Ok(VIEWS.get_or_init(|| views))
    }

    fn method_of(req: &Request) -> Option<::http::Method> {
        let name = format!("{:?}", req.method()).to_uppercase();
        ::http::Method::from_bytes(name.as_bytes()).ok()
    }

    fn into_response(reply: Reply, base: &Url) -> Result<Response> {
        if let Some(location) = reply.location {
            let url = base
                .join(&location)
                .map_err(|e| Error::RustError(format!("redirect target: {}", e)))?;
            return Response::redirect_with_status(url, reply.status);
        }
        let mut res = Response::ok(reply.body)?.with_status(reply.status);
        res.headers_mut().set("Content-Type", reply.content_type)?;
        Ok(res)
    }

    #[event(start)]
    fn start() {
        console_error_panic_hook::set_once();
    }

    #[event(fetch)]
    async fn fetch(mut req: Request, env: Env, _ctx: Context) -> Result<Response> {
        let app_ctx = match AppContext::new(env) {
            Ok(ctx) => ctx,
            Err(e) => {
                console_error!("[ERROR] {}", e);
                return Response::error("Internal server error", 500);
            }
        };
        logging::init(app_ctx.settings.log_level);
        logging::log_request(&req, &app_ctx.request_id);

        let views = match views() {
            Ok(views) => views,
            Err(e) => {
                log::error!("loading templates: {}", e);
                return Response::error("Internal server error", 500);
            }
        };

        let Some(method) = method_of(&req) else {
            return Response::error("Method not allowed", 405);
        };
        let body = if method == ::http::Method::POST {
            req.text().await?
        } else {
            String::new()
        };

        let store = TodoRepo::new(SupabaseClient::new(&app_ctx.settings));
        let app = match App::new(store, views, app_ctx.settings.clone()) {
            Ok(app) => app,
            Err(e) => {
                log::error!("building route table: {}", e);
                return Response::error("Internal server error", 500);
            }
        };
        let reply = app.handle(&method, &req.path(), &body).await;

        logging::log_response(&app_ctx.request_id, reply.status, app_ctx.elapsed_ms());
        into_response(reply, &req.url()?)
    }
}
