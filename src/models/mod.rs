pub mod todo;

pub use todo::{Todo, TodoFields, TodoForm};
