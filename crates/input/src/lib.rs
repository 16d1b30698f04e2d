//! Input module - decodes terminal key events into game intents.

pub mod map;

pub use map::map_key_event;
