pub mod health;
pub mod todo_handler;
