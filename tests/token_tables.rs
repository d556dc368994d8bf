// Snapshot of the token/label vocabulary. A diff here means the pipeline
// surface or the persisted vocabulary changed, which is almost never
// intentional.

use codecmap::model::{AudioEncoder, Mixdown, OutputFormat, VideoEncoder};
use codecmap::normalize::{output_format_token, video_encoder_token};

fn render<T: std::fmt::Display>(members: &[T], token: impl Fn(&T) -> &'static str) -> String {
    members
        .iter()
        .map(|m| format!("{} -> {}", token(m), m))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn audio_encoder_vocabulary() {
    let rendered = render(AudioEncoder::ALL, |e| e.short_name());
    insta::assert_snapshot!(rendered, @r"
    av_aac -> AAC (avcodec)
    fdk_aac -> AAC (FDK)
    fdk_haac -> HE-AAC (FDK)
    mp3 -> MP3
    vorbis -> Vorbis
    ac3 -> AC3
    copy:ac3 -> AC3 Passthru
    copy:dts -> DTS Passthru
    copy:dtshd -> DTS-HD Passthru
    copy:aac -> AAC Passthru
    copy:mp3 -> MP3 Passthru
    flac16 -> FLAC 16-bit
    flac24 -> FLAC 24-bit
    copy:truehd -> TrueHD Passthru
    copy:eac3 -> E-AC3 Passthru
    copy:flac -> FLAC Passthru
    copy -> Auto Passthru
    ");
}

#[test]
fn mixdown_vocabulary() {
    let rendered = render(Mixdown::ALL, |m| m.short_name());
    insta::assert_snapshot!(rendered, @r"
    auto -> Auto
    mono -> Mono
    stereo -> Stereo
    dpl1 -> Dolby Surround
    dpl2 -> Dolby Pro Logic II
    5point1 -> 5.1 Channels
    6point1 -> 6.1 Channels
    7point1 -> 7.1 Channels
    5_2_lfe -> 7.1 (5F/2R/LFE)
    none -> None
    ");
}

#[test]
fn video_encoder_vocabulary() {
    let rendered = render(VideoEncoder::ALL, |e| video_encoder_token(*e));
    insta::assert_snapshot!(rendered, @r"
    mpeg4 -> MPEG-4 (FFmpeg)
    mpeg2 -> MPEG-2 (FFmpeg)
    x264 -> H.264 (x264)
    qsv_h264 -> H.264 (Intel QSV)
    theora -> VP3 (Theora)
    x265 -> H.265 (x265)
    VP8 -> VP8
    ");
}

#[test]
fn container_vocabulary() {
    let rendered = render(OutputFormat::ALL, |f| output_format_token(*f));
    insta::assert_snapshot!(rendered, @r"
    m4v -> MP4
    mkv -> MKV
    ");
}

#[test]
fn audio_encoder_serde_tokens() {
    insta::assert_json_snapshot!(AudioEncoder::ALL, @r#"
    [
      "av_aac",
      "fdk_aac",
      "fdk_haac",
      "mp3",
      "vorbis",
      "ac3",
      "copy:ac3",
      "copy:dts",
      "copy:dtshd",
      "copy:aac",
      "copy:mp3",
      "flac16",
      "flac24",
      "copy:truehd",
      "copy:eac3",
      "copy:flac",
      "copy"
    ]
    "#);
}
