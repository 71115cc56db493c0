use tera::{Context, Tera};

use crate::models::Todo;
use crate::utils::errors::Result;

pub const HOME: &str = "todos/home.html";
pub const CREATE: &str = "todos/create.html";
pub const EDIT: &str = "todos/edit.html";
pub const DELETE: &str = "todos/delete.html";
pub const ERROR: &str = "todos/error.html";

const TEMPLATES: [(&str, &str); 6] = [
    ("todos/base.html", include_str!("../templates/todos/base.html")),
    (HOME, include_str!("../templates/todos/home.html")),
    (CREATE, include_str!("../templates/todos/create.html")),
    (EDIT, include_str!("../templates/todos/edit.html")),
    (DELETE, include_str!("../templates/todos/delete.html")),
    (ERROR, include_str!("../templates/todos/error.html")),
];

pub struct Views {
    tera: Tera,
}

impl Views {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.to_vec())?;
        Ok(Self { tera })
    }

    pub fn home(&self, todos: &[Todo]) -> Result<String> {
        let mut ctx = Context::new();
        ctx.insert("todos", todos);
        Ok(self.tera.render(HOME, &ctx)?)
    }

    pub fn create_form(&self) -> Result<String> {
        Ok(self.tera.render(CREATE, &Context::new())?)
    }

    /// Edit and delete pages both show a single record.
    pub fn todo_page(&self, template: &str, todo: &Todo) -> Result<String> {
        let mut ctx = Context::new();
        ctx.insert("todo", todo);
        Ok(self.tera.render(template, &ctx)?)
    }

    pub fn error(&self, status: u16, message: &str) -> Result<String> {
        let mut ctx = Context::new();
        ctx.insert("status", &status);
        ctx.insert("message", message);
        Ok(self.tera.render(ERROR, &ctx)?)
    }
}
