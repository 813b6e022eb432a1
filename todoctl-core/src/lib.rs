pub mod todo;

pub use todo::{ErrorBody, NewTodo, Todo, TodoUpdate};
