//! Settings sections of the config file

mod assistant;
mod lookup;
mod output;

pub use assistant::AssistantSettings;
pub use lookup::LookupSettings;
pub use output::{BrowserSettings, SpeechSettings};
