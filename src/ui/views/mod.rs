//! Application views (screens).

mod browser;
mod demo;
mod help;
mod story;

pub use browser::{BrowserAction, StoryBrowser};
pub use demo::{DemoAction, DemoFocus, DemoSection, DemoView};
pub use help::{HelpAction, HelpView};
pub use story::{ActionLog, BadgeRow, StoryContent, StoryView};
