//! CLI command handlers
//!
//! This module contains the interactive front end: the console abstraction,
//! the login prompt and the main menu loop.

pub mod console;
pub mod login;
pub mod menu;

pub use console::Console;
pub use login::run_login;
pub use menu::{run_menu, MenuCommand};
