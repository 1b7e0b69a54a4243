mod catalog;
mod messages;

pub use catalog::{Language, Localizer, MessageLookup};
pub use messages::{format_template, Message};
