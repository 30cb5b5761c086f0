//! SAGX - a small voice assistant
//!
//! SAGX takes one recognized utterance at a time, maps a handful of phrases to
//! canned actions and answers everything else with a web lookup.
//!
//! ## Supported requests
//!
//! - Weather: "what's the weather in Pune"
//! - Jokes: "tell me a joke", "make me laugh"
//! - To-do list: "add buy milk to my to-do list", "show my todo list", "clear my to do list"
//! - Theme: "turn on dark mode", "activate light mode"
//! - Sites: "open github", "open calculator"
//! - Anything else: instant answer lookup, falling back to a web search
//!
//! The core ([`assistant::Assistant`]) is side-effect free: it returns
//! [`domain::Effect`]s which the adapters in [`output`] carry out.

pub mod assistant;
pub mod config;
pub mod domain;
pub mod intent;
pub mod lookup;
pub mod output;

pub use domain::*;
