//! # CLI Module
//!
//! User-facing commands dispatched from `main`. Two ways in:
//!
//! - [`serve`] - Runs the login-flow server and performs one
//!   synchronization per authorization code it receives. This is the
//!   normal path: the user logs in through the browser and the sort runs
//!   in the background while the web flow stays responsive.
//! - [`sort`] - Headless single run for an already-obtained authorization
//!   code, useful when the redirect was caught elsewhere.
//!
//! The serve loop is the supervision point of the system: every run's
//! success or failure surfaces here as a log line, never to the browser.

mod serve;
mod sort;

pub use serve::serve;
pub use sort::sort;
