//! HTML template rendering handlers for the web pages.

mod login;

pub use login::{LoginScreen, login_handler, render_login_screen};
