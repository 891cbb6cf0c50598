//! Greeting formatter
//!
//! Produces `"Hello, World!"` when no name is given and `"Hello, <name>!"`
//! otherwise. Every input is accepted, so nothing here returns a `Result`.
//!
//! ```
//! assert_eq!(hello::greeting(None), "Hello, World!");
//! assert_eq!(hello::greeting(Some("GitHub")), "Hello, GitHub!");
//! ```

mod greeter;

pub use greeter::{greeting, Greeter, Greeting, InvalidGreeting, DEFAULT_AUDIENCE};
