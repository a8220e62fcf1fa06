pub mod config;
pub mod core;
pub mod practice;

pub use crate::core::converter::convert;
pub use crate::core::keymap::{jamo_to_key, korean_to_eng};
pub use crate::core::unicode::{decompose, Syllable};
pub use crate::practice::{check_input, Advice, Phase, PracticeQueue, QueueEvent, Session, Status};
