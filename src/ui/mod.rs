//! On-screen controls and input translation

pub mod buttons;
pub mod input;

pub use buttons::{Button, ButtonLabel, ButtonLayout, Rect};
pub use input::{InputEvent, Key, key_command, translate, translate_all};
