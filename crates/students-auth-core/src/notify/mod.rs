//! User-facing notifications.
//!
//! Every login attempt ends in exactly one `Message`. How it reaches the user
//! is up to the `Notifier` the caller injects.

pub mod messages;

pub use messages::{Locale, Message};

/// Displays a message to the user.
pub trait Notifier: Send + Sync {
    fn popup(&self, message: &str);
}

/// Notifier that prints to stderr, for command line use
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn popup(&self, message: &str) {
        eprintln!("{}", message);
    }
}
