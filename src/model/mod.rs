// File: ./src/model/mod.rs
pub mod dates;
pub mod display;
pub mod item;
pub mod parser;

pub use item::{EventDate, Priority, Task, TaskKind, TaskStatus};
pub use parser::Command;
