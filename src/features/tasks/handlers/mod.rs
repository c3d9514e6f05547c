mod task_handler;

pub use task_handler::{__path_accept_task, accept_task};
