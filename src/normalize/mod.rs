//! Legacy label resolution and pipeline token formatting.
//!
//! Older presets and settings files carry free-form labels ("AAC (faac)",
//! "Dolby Pro Logic II", "m4v") that accumulated several spellings over the
//! years. The functions here translate those labels into the canonical enums
//! in [`crate::model`] and format canonical values back into the short
//! tokens the pipeline command surface expects.
//!
//! The `*_from_label` resolvers are total: unrecognized input substitutes a
//! documented per-operation default instead of failing, because legacy
//! callers rely on always getting a usable value. The defaults are exposed
//! as `FALLBACK_*` constants so tests and callers can name them. Callers
//! that want unrecognized input surfaced as an error use the `FromStr`
//! impls instead; both surfaces read the same tables and cannot drift.
//!
//! Matching rules differ per resolver and are kept exactly as the legacy
//! data requires: audio encoder labels match case-sensitively without
//! trimming, mixdown labels are trimmed first, container labels are
//! lower-cased first. See the docs on each function.

pub mod tables;

use std::str::FromStr;
use thiserror::Error;

use crate::model::{AudioEncoder, Mixdown, OutputFormat, VideoEncoder};

/// Default substituted for unrecognized audio encoder labels.
pub const FALLBACK_AUDIO_ENCODER: AudioEncoder = AudioEncoder::Aac;

/// Default substituted for unrecognized mixdown labels ("let the pipeline
/// choose").
pub const FALLBACK_MIXDOWN: Mixdown = Mixdown::Auto;

/// Default substituted for unrecognized container labels.
pub const FALLBACK_OUTPUT_FORMAT: OutputFormat = OutputFormat::Mp4;

/// Token produced for a video encoder missing from the token table.
pub const FALLBACK_VIDEO_TOKEN: &str = "x264";

/// Token produced for a container missing from the token table.
pub const FALLBACK_CONTAINER_TOKEN: &str = "mp4";

fn lookup_alias<T: Copy>(table: &[(&[&str], T)], label: &str) -> Option<T> {
    table
        .iter()
        .find(|(aliases, _)| aliases.contains(&label))
        .map(|&(_, value)| value)
}

/// Resolve a legacy audio encoder label.
///
/// Exact, case-sensitive match against the alias table; the input is not
/// trimmed, so `" MP3 "` does not match and falls back. Unrecognized input
/// resolves to [`FALLBACK_AUDIO_ENCODER`].
pub fn audio_encoder_from_label(label: &str) -> AudioEncoder {
    lookup_alias(tables::AUDIO_ENCODER_ALIASES, label).unwrap_or(FALLBACK_AUDIO_ENCODER)
}

/// Resolve a legacy mixdown label.
///
/// Leading and trailing whitespace is stripped before matching, a leniency
/// for sloppy persisted data that the other resolvers do not share.
/// Unrecognized input resolves to [`FALLBACK_MIXDOWN`].
pub fn mixdown_from_label(label: &str) -> Mixdown {
    lookup_alias(tables::MIXDOWN_ALIASES, label.trim()).unwrap_or(FALLBACK_MIXDOWN)
}

/// Resolve a legacy container label, case-insensitively (no trimming).
/// Unrecognized input resolves to [`FALLBACK_OUTPUT_FORMAT`].
pub fn output_format_from_label(label: &str) -> OutputFormat {
    lookup_alias(tables::OUTPUT_FORMAT_ALIASES, &label.to_lowercase())
        .unwrap_or(FALLBACK_OUTPUT_FORMAT)
}

/// Pipeline token for an audio encoder. Total and injective.
pub fn audio_encoder_token(encoder: AudioEncoder) -> &'static str {
    encoder.short_name()
}

/// Pipeline token for a video encoder, with [`FALLBACK_VIDEO_TOKEN`] for
/// any member missing from the table.
pub fn video_encoder_token(encoder: VideoEncoder) -> &'static str {
    tables::VIDEO_ENCODER_TOKENS
        .iter()
        .find(|&&(candidate, _)| candidate == encoder)
        .map(|&(_, token)| token)
        .unwrap_or(FALLBACK_VIDEO_TOKEN)
}

/// Pipeline token for a container, with [`FALLBACK_CONTAINER_TOKEN`] for
/// any member missing from the table. Mp4 formats as "m4v", not "mp4".
pub fn output_format_token(format: OutputFormat) -> &'static str {
    tables::OUTPUT_FORMAT_TOKENS
        .iter()
        .find(|&&(candidate, _)| candidate == format)
        .map(|&(_, token)| token)
        .unwrap_or(FALLBACK_CONTAINER_TOKEN)
}

/// A label no strict parse rule recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized {kind} label: {label:?}")]
pub struct ParseLabelError {
    kind: &'static str,
    label: String,
}

impl ParseLabelError {
    fn new(kind: &'static str, label: &str) -> Self {
        Self {
            kind,
            label: label.to_string(),
        }
    }
}

// Strict counterparts of the resolvers above. Same tables, same trim/case
// rules per domain; the only difference is that unrecognized input becomes
// an error instead of the fallback value.

impl FromStr for AudioEncoder {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup_alias(tables::AUDIO_ENCODER_ALIASES, s)
            .ok_or_else(|| ParseLabelError::new("audio encoder", s))
    }
}

impl FromStr for Mixdown {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup_alias(tables::MIXDOWN_ALIASES, s.trim())
            .ok_or_else(|| ParseLabelError::new("mixdown", s))
    }
}

impl FromStr for OutputFormat {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup_alias(tables::OUTPUT_FORMAT_ALIASES, &s.to_lowercase())
            .ok_or_else(|| ParseLabelError::new("container", s))
    }
}
