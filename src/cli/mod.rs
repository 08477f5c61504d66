//! Interactive terminal front end.
//!
//! A numbered main menu drives six actions (list, search, create, delete,
//! export, import) against a single in-memory store.

pub mod action;
pub mod app;
pub mod console;
mod handlers;
pub mod terminal;

pub use action::Action;
pub use app::App;
pub use console::Console;
pub use terminal::{ctrl_c_interrupts, Interrupts, StdinLines};
