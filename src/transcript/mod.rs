//! Transcript acquisition: the upstream source and the adapter that guards it.

pub mod adapter;
pub mod source;

pub use adapter::TranscriptAdapter;
pub use source::{TranscriptSource, YoutubeTranscriptSource};
