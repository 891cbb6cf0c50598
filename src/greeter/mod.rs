// Greeter - formats "Hello, <audience>!" strings

mod types;

pub use types::{Greeting, InvalidGreeting};

use tracing::trace;

/// Who gets greeted when no name is supplied
pub const DEFAULT_AUDIENCE: &str = "World";

const PREFIX: &str = "Hello, ";
const SUFFIX: &str = "!";

/// Returns `"Hello, World!"` for `None` and `"Hello, {name}!"` otherwise.
///
/// The name is used as given, so `Some("")` yields `"Hello, !"`.
pub fn greeting(name: Option<&str>) -> String {
    Greeter.greet(name).into_string()
}

/// Stateless greeting formatter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Greeter;

impl Greeter {
    /// Create a greeter
    pub fn new() -> Self {
        Self
    }

    /// Format a greeting for `name`, falling back to [`DEFAULT_AUDIENCE`]
    pub fn greet(&self, name: Option<&str>) -> Greeting {
        // Log presence only
        trace!(has_name = name.is_some(), "formatting greeting");

        let audience = name.unwrap_or(DEFAULT_AUDIENCE);
        Greeting::new(format!("{PREFIX}{audience}{SUFFIX}"))
    }

    /// Greet the default audience, `"Hello, World!"`
    pub fn greet_world(&self) -> Greeting {
        self.greet(None)
    }

    /// Greet `name`, `"Hello, {name}!"`
    pub fn greet_name(&self, name: &str) -> Greeting {
        self.greet(Some(name))
    }
}
