//! Speech capabilities.

pub mod tts;

pub use tts::SpeakCapability;
