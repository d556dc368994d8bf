//! Canonical identifiers consumed by the transcoding pipeline.
//!
//! The normalization layer in [`crate::normalize`] translates legacy label
//! strings into these enums and back; it never extends them. Each member
//! carries two pieces of string metadata: the short machine token handed to
//! the pipeline command surface (`short_name`) and the preferred human-facing
//! label (`Display`). Serde uses the short-token vocabulary so persisted
//! canonical values match what the pipeline sees.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Audio codec / passthrough selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AudioEncoder {
    /// AAC via the avcodec family (historically also faac / "ffmpeg")
    #[serde(rename = "av_aac")]
    Aac,
    /// AAC via libfdk (historically also CoreAudio on macOS)
    #[serde(rename = "fdk_aac")]
    FdkAac,
    /// HE-AAC via libfdk
    #[serde(rename = "fdk_haac")]
    FdkHeAac,
    #[serde(rename = "mp3")]
    Mp3,
    #[serde(rename = "vorbis")]
    Vorbis,
    #[serde(rename = "ac3")]
    Ac3,
    #[serde(rename = "copy:ac3")]
    Ac3Passthru,
    #[serde(rename = "copy:dts")]
    DtsPassthru,
    #[serde(rename = "copy:dtshd")]
    DtsHdPassthru,
    #[serde(rename = "copy:aac")]
    AacPassthru,
    #[serde(rename = "copy:mp3")]
    Mp3Passthru,
    #[serde(rename = "flac16")]
    Flac16,
    #[serde(rename = "flac24")]
    Flac24,
    #[serde(rename = "copy:truehd")]
    TrueHdPassthru,
    #[serde(rename = "copy:eac3")]
    EAc3Passthru,
    #[serde(rename = "copy:flac")]
    FlacPassthru,
    /// Copy whatever the source stream is, picking the matching passthrough
    #[serde(rename = "copy")]
    AutoPassthru,
}

impl AudioEncoder {
    pub const ALL: &'static [AudioEncoder] = &[
        AudioEncoder::Aac,
        AudioEncoder::FdkAac,
        AudioEncoder::FdkHeAac,
        AudioEncoder::Mp3,
        AudioEncoder::Vorbis,
        AudioEncoder::Ac3,
        AudioEncoder::Ac3Passthru,
        AudioEncoder::DtsPassthru,
        AudioEncoder::DtsHdPassthru,
        AudioEncoder::AacPassthru,
        AudioEncoder::Mp3Passthru,
        AudioEncoder::Flac16,
        AudioEncoder::Flac24,
        AudioEncoder::TrueHdPassthru,
        AudioEncoder::EAc3Passthru,
        AudioEncoder::FlacPassthru,
        AudioEncoder::AutoPassthru,
    ];

    /// Short machine token used on the pipeline command surface.
    /// Injective over the enum: every member has its own token.
    pub fn short_name(&self) -> &'static str {
        match self {
            AudioEncoder::Aac => "av_aac",
            AudioEncoder::FdkAac => "fdk_aac",
            AudioEncoder::FdkHeAac => "fdk_haac",
            AudioEncoder::Mp3 => "mp3",
            AudioEncoder::Vorbis => "vorbis",
            AudioEncoder::Ac3 => "ac3",
            AudioEncoder::Ac3Passthru => "copy:ac3",
            AudioEncoder::DtsPassthru => "copy:dts",
            AudioEncoder::DtsHdPassthru => "copy:dtshd",
            AudioEncoder::AacPassthru => "copy:aac",
            AudioEncoder::Mp3Passthru => "copy:mp3",
            AudioEncoder::Flac16 => "flac16",
            AudioEncoder::Flac24 => "flac24",
            AudioEncoder::TrueHdPassthru => "copy:truehd",
            AudioEncoder::EAc3Passthru => "copy:eac3",
            AudioEncoder::FlacPassthru => "copy:flac",
            AudioEncoder::AutoPassthru => "copy",
        }
    }

    pub fn is_passthru(&self) -> bool {
        matches!(
            self,
            AudioEncoder::Ac3Passthru
                | AudioEncoder::DtsPassthru
                | AudioEncoder::DtsHdPassthru
                | AudioEncoder::AacPassthru
                | AudioEncoder::Mp3Passthru
                | AudioEncoder::TrueHdPassthru
                | AudioEncoder::EAc3Passthru
                | AudioEncoder::FlacPassthru
                | AudioEncoder::AutoPassthru
        )
    }
}

impl fmt::Display for AudioEncoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AudioEncoder::Aac => "AAC (avcodec)",
            AudioEncoder::FdkAac => "AAC (FDK)",
            AudioEncoder::FdkHeAac => "HE-AAC (FDK)",
            AudioEncoder::Mp3 => "MP3",
            AudioEncoder::Vorbis => "Vorbis",
            AudioEncoder::Ac3 => "AC3",
            AudioEncoder::Ac3Passthru => "AC3 Passthru",
            AudioEncoder::DtsPassthru => "DTS Passthru",
            AudioEncoder::DtsHdPassthru => "DTS-HD Passthru",
            AudioEncoder::AacPassthru => "AAC Passthru",
            AudioEncoder::Mp3Passthru => "MP3 Passthru",
            AudioEncoder::Flac16 => "FLAC 16-bit",
            AudioEncoder::Flac24 => "FLAC 24-bit",
            AudioEncoder::TrueHdPassthru => "TrueHD Passthru",
            AudioEncoder::EAc3Passthru => "E-AC3 Passthru",
            AudioEncoder::FlacPassthru => "FLAC Passthru",
            AudioEncoder::AutoPassthru => "Auto Passthru",
        };
        f.write_str(label)
    }
}

/// Channel-layout (mixdown) selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mixdown {
    /// Let the pipeline choose a layout for the source
    #[serde(rename = "auto")]
    Auto,
    #[serde(rename = "mono")]
    Mono,
    #[serde(rename = "stereo")]
    Stereo,
    #[serde(rename = "dpl1")]
    DolbySurround,
    #[serde(rename = "dpl2")]
    DolbyProLogicII,
    #[serde(rename = "5point1")]
    FivePoint1,
    #[serde(rename = "6point1")]
    SixPoint1,
    #[serde(rename = "7point1")]
    SevenPoint1,
    /// 7.1 variant with five front, two rear, and LFE
    #[serde(rename = "5_2_lfe")]
    FiveTwoLfe,
    /// No mixdown, e.g. when the track is passed through
    #[serde(rename = "none")]
    None,
}

impl Mixdown {
    pub const ALL: &'static [Mixdown] = &[
        Mixdown::Auto,
        Mixdown::Mono,
        Mixdown::Stereo,
        Mixdown::DolbySurround,
        Mixdown::DolbyProLogicII,
        Mixdown::FivePoint1,
        Mixdown::SixPoint1,
        Mixdown::SevenPoint1,
        Mixdown::FiveTwoLfe,
        Mixdown::None,
    ];

    /// Short machine token used on the pipeline command surface.
    pub fn short_name(&self) -> &'static str {
        match self {
            Mixdown::Auto => "auto",
            Mixdown::Mono => "mono",
            Mixdown::Stereo => "stereo",
            Mixdown::DolbySurround => "dpl1",
            Mixdown::DolbyProLogicII => "dpl2",
            Mixdown::FivePoint1 => "5point1",
            Mixdown::SixPoint1 => "6point1",
            Mixdown::SevenPoint1 => "7point1",
            Mixdown::FiveTwoLfe => "5_2_lfe",
            Mixdown::None => "none",
        }
    }
}

impl fmt::Display for Mixdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Mixdown::Auto => "Auto",
            Mixdown::Mono => "Mono",
            Mixdown::Stereo => "Stereo",
            Mixdown::DolbySurround => "Dolby Surround",
            Mixdown::DolbyProLogicII => "Dolby Pro Logic II",
            Mixdown::FivePoint1 => "5.1 Channels",
            Mixdown::SixPoint1 => "6.1 Channels",
            Mixdown::SevenPoint1 => "7.1 Channels",
            Mixdown::FiveTwoLfe => "7.1 (5F/2R/LFE)",
            Mixdown::None => "None",
        };
        f.write_str(label)
    }
}

/// Video codec selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VideoEncoder {
    #[serde(rename = "mpeg4")]
    Mpeg4,
    #[serde(rename = "mpeg2")]
    Mpeg2,
    #[serde(rename = "x264")]
    X264,
    #[serde(rename = "qsv_h264")]
    QuickSync,
    #[serde(rename = "theora")]
    Theora,
    #[serde(rename = "x265")]
    X265,
    // Upper case on the wire, unlike every other video token
    #[serde(rename = "VP8")]
    Vp8,
}

impl VideoEncoder {
    pub const ALL: &'static [VideoEncoder] = &[
        VideoEncoder::Mpeg4,
        VideoEncoder::Mpeg2,
        VideoEncoder::X264,
        VideoEncoder::QuickSync,
        VideoEncoder::Theora,
        VideoEncoder::X265,
        VideoEncoder::Vp8,
    ];

    /// Short machine token used on the pipeline command surface.
    pub fn short_name(&self) -> &'static str {
        match self {
            VideoEncoder::Mpeg4 => "mpeg4",
            VideoEncoder::Mpeg2 => "mpeg2",
            VideoEncoder::X264 => "x264",
            VideoEncoder::QuickSync => "qsv_h264",
            VideoEncoder::Theora => "theora",
            VideoEncoder::X265 => "x265",
            VideoEncoder::Vp8 => "VP8",
        }
    }
}

impl fmt::Display for VideoEncoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            VideoEncoder::Mpeg4 => "MPEG-4 (FFmpeg)",
            VideoEncoder::Mpeg2 => "MPEG-2 (FFmpeg)",
            VideoEncoder::X264 => "H.264 (x264)",
            VideoEncoder::QuickSync => "H.264 (Intel QSV)",
            VideoEncoder::Theora => "VP3 (Theora)",
            VideoEncoder::X265 => "H.265 (x265)",
            VideoEncoder::Vp8 => "VP8",
        };
        f.write_str(label)
    }
}

/// Output container selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    #[serde(rename = "m4v")]
    Mp4,
    #[serde(rename = "mkv")]
    Mkv,
}

impl OutputFormat {
    pub const ALL: &'static [OutputFormat] = &[OutputFormat::Mp4, OutputFormat::Mkv];

    /// Short machine token used on the pipeline command surface.
    /// Mp4 intentionally formats as "m4v"; downstream consumers key off it.
    pub fn short_name(&self) -> &'static str {
        match self {
            OutputFormat::Mp4 => "m4v",
            OutputFormat::Mkv => "mkv",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OutputFormat::Mp4 => "MP4",
            OutputFormat::Mkv => "MKV",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn audio_short_names_are_injective() {
        let tokens: HashSet<&str> = AudioEncoder::ALL.iter().map(|e| e.short_name()).collect();
        assert_eq!(tokens.len(), AudioEncoder::ALL.len());
    }

    #[test]
    fn audio_serde_uses_short_tokens() {
        for encoder in AudioEncoder::ALL {
            let json = serde_json::to_string(encoder).unwrap();
            assert_eq!(json, format!("\"{}\"", encoder.short_name()));
            let back: AudioEncoder = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *encoder);
        }
    }

    #[test]
    fn mixdown_serde_uses_short_tokens() {
        for mixdown in Mixdown::ALL {
            let json = serde_json::to_string(mixdown).unwrap();
            assert_eq!(json, format!("\"{}\"", mixdown.short_name()));
            let back: Mixdown = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *mixdown);
        }
    }

    #[test]
    fn passthru_classification() {
        assert!(AudioEncoder::AutoPassthru.is_passthru());
        assert!(AudioEncoder::DtsHdPassthru.is_passthru());
        assert!(!AudioEncoder::Aac.is_passthru());
        assert!(!AudioEncoder::Flac24.is_passthru());
    }

    #[test]
    fn display_labels() {
        assert_eq!(AudioEncoder::Aac.to_string(), "AAC (avcodec)");
        assert_eq!(AudioEncoder::EAc3Passthru.to_string(), "E-AC3 Passthru");
        assert_eq!(Mixdown::FiveTwoLfe.to_string(), "7.1 (5F/2R/LFE)");
        assert_eq!(VideoEncoder::QuickSync.to_string(), "H.264 (Intel QSV)");
        assert_eq!(OutputFormat::Mkv.to_string(), "MKV");
    }
}
