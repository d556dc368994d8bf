//! Static alias and token tables backing the resolvers.
//!
//! Each entry pairs a canonical value with its full historical alias set, so
//! every spelling that ever appeared in persisted presets stays resolvable.
//! The tables are the single source of truth: the lenient resolvers, the
//! strict `FromStr` impls, and the CLI all read the same data.

use crate::model::{AudioEncoder, Mixdown, OutputFormat, VideoEncoder};

/// Legacy audio encoder labels. Matched exactly, case-sensitive, untrimmed.
pub const AUDIO_ENCODER_ALIASES: &[(&[&str], AudioEncoder)] = &[
    (
        &["AAC (faac)", "AAC (ffmpeg)", "AAC (avcodec)"],
        AudioEncoder::Aac,
    ),
    (&["AAC (FDK)", "AAC (CoreAudio)"], AudioEncoder::FdkAac),
    (
        &["HE-AAC (FDK)", "HE-AAC (CoreAudio)", "HE-AAC"],
        AudioEncoder::FdkHeAac,
    ),
    (&["MP3 (lame)", "MP3"], AudioEncoder::Mp3),
    (&["Vorbis (vorbis)", "Vorbis"], AudioEncoder::Vorbis),
    (&["AC3 (ffmpeg)", "AC3"], AudioEncoder::Ac3),
    (&["AC3 Passthru"], AudioEncoder::Ac3Passthru),
    (&["DTS Passthru"], AudioEncoder::DtsPassthru),
    (&["DTS-HD Passthru"], AudioEncoder::DtsHdPassthru),
    (&["AAC Passthru"], AudioEncoder::AacPassthru),
    (&["MP3 Passthru"], AudioEncoder::Mp3Passthru),
    (&["FLAC (ffmpeg)", "FLAC 16-bit"], AudioEncoder::Flac16),
    (&["FLAC (24-bit)", "FLAC 24-bit"], AudioEncoder::Flac24),
    (&["TrueHD Passthru"], AudioEncoder::TrueHdPassthru),
    (&["E-AC3 Passthru"], AudioEncoder::EAc3Passthru),
    (&["FLAC Passthru"], AudioEncoder::FlacPassthru),
    (&["Auto Passthru"], AudioEncoder::AutoPassthru),
];

/// Legacy mixdown labels. The resolver trims the input before matching;
/// "None" and "Passthru" are historical synonyms for the same value.
pub const MIXDOWN_ALIASES: &[(&[&str], Mixdown)] = &[
    (&["Mono"], Mixdown::Mono),
    (&["Stereo"], Mixdown::Stereo),
    (&["Dolby Surround"], Mixdown::DolbySurround),
    (&["Dolby Pro Logic II"], Mixdown::DolbyProLogicII),
    (&["5.1 Channels"], Mixdown::FivePoint1),
    (&["6.1 Channels"], Mixdown::SixPoint1),
    (&["7.1 Channels"], Mixdown::SevenPoint1),
    (&["7.1 (5F/2R/LFE)"], Mixdown::FiveTwoLfe),
    (&["None", "Passthru"], Mixdown::None),
];

/// Container labels, matched after lower-casing the input.
pub const OUTPUT_FORMAT_ALIASES: &[(&[&str], OutputFormat)] = &[
    (&["m4v"], OutputFormat::Mp4),
    (&["mkv"], OutputFormat::Mkv),
];

/// Pipeline tokens for video encoders. The formatter falls back to "x264"
/// for any member missing here, so an enum extension cannot produce an
/// unknown token downstream.
pub const VIDEO_ENCODER_TOKENS: &[(VideoEncoder, &str)] = &[
    (VideoEncoder::Mpeg4, "mpeg4"),
    (VideoEncoder::Mpeg2, "mpeg2"),
    (VideoEncoder::X264, "x264"),
    (VideoEncoder::QuickSync, "qsv_h264"),
    (VideoEncoder::Theora, "theora"),
    (VideoEncoder::X265, "x265"),
    (VideoEncoder::Vp8, "VP8"),
];

/// Pipeline tokens for containers. Note the asymmetry: Mp4 resolves from
/// "m4v" and also formats to "m4v", while the table-miss fallback is "mp4".
pub const OUTPUT_FORMAT_TOKENS: &[(OutputFormat, &str)] = &[
    (OutputFormat::Mp4, "m4v"),
    (OutputFormat::Mkv, "mkv"),
];
