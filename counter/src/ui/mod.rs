//! Terminal presentation of the counter.

pub mod app;
pub mod input;
pub mod terminal;
mod theme;
pub mod view;

pub use app::{run_app, CounterApp};
pub use input::UiCommand;
pub use terminal::{setup_terminal, TerminalGuard};
pub use view::CounterView;
