//! Core domain types for SAGX

mod effect;
mod session;
mod theme;
mod todo;
mod transcript;

pub use effect::Effect;
pub use session::{Session, SharedSession};
pub use theme::Theme;
pub use todo::TodoList;
pub use transcript::Transcript;
