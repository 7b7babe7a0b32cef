//! 媒体格式与扩展名
//!
//! 格式代码和扩展名都是封闭集合，校验通过后只能以 [`MediaTarget`] 的形式存在，
//! 不兼容的组合无法被构造出来。

use std::fmt;
use std::str::FromStr;

/// 格式代码对应的媒体类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatClass {
    /// 仅音频
    AudioOnly,
    /// 仅视频
    VideoOnly,
    /// 音视频合并
    Combined,
}

impl FormatClass {
    /// 该类别允许的扩展名
    pub fn allowed_extensions(self) -> &'static [&'static str] {
        match self {
            FormatClass::AudioOnly => AudioExtension::ALL_NAMES,
            FormatClass::VideoOnly | FormatClass::Combined => VideoExtension::ALL_NAMES,
        }
    }

    /// 是否需要抽取音频（否则合并容器）
    pub fn extracts_audio(self) -> bool {
        matches!(self, FormatClass::AudioOnly)
    }
}

impl fmt::Display for FormatClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormatClass::AudioOnly => "仅音频",
            FormatClass::VideoOnly => "仅视频",
            FormatClass::Combined => "音视频合并",
        };
        f.write_str(name)
    }
}

/// 格式代码
///
/// 每个代码有短别名和全称两种写法，原样保留用户输入的写法用于日志。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MediaFormat {
    class: FormatClass,
    alias: &'static str,
}

impl MediaFormat {
    /// 全部合法别名及其类别
    pub const ALIASES: &'static [(&'static str, FormatClass)] = &[
        ("ba", FormatClass::AudioOnly),
        ("bestaudio", FormatClass::AudioOnly),
        ("bv", FormatClass::VideoOnly),
        ("bestvideo", FormatClass::VideoOnly),
        ("ba+bv", FormatClass::Combined),
        ("bestaudio+bestvideo", FormatClass::Combined),
    ];

    /// 按别名查找
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALIASES
            .iter()
            .find(|(alias, _)| *alias == code)
            .map(|&(alias, class)| Self { class, alias })
    }

    /// 媒体类别
    pub fn class(self) -> FormatClass {
        self.class
    }

    /// 用户写的别名
    pub fn alias(self) -> &'static str {
        self.alias
    }

    /// 传给下载工具的格式选择串
    pub fn selector(self) -> &'static str {
        match self.class {
            FormatClass::AudioOnly => "bestaudio/best",
            FormatClass::VideoOnly => "bestvideo/best",
            FormatClass::Combined => "bestvideo+bestaudio/best",
        }
    }

    /// 所有别名，逗号分隔（用于错误提示）
    pub fn valid_codes() -> String {
        Self::ALIASES
            .iter()
            .map(|(alias, _)| *alias)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for MediaFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.alias)
    }
}

/// 音频扩展名
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioExtension {
    Mp3,
    M4a,
    Aac,
    Opus,
    Wav,
    Flac,
}

impl AudioExtension {
    pub const ALL_NAMES: &'static [&'static str] = &["mp3", "m4a", "aac", "opus", "wav", "flac"];

    pub fn as_str(self) -> &'static str {
        match self {
            AudioExtension::Mp3 => "mp3",
            AudioExtension::M4a => "m4a",
            AudioExtension::Aac => "aac",
            AudioExtension::Opus => "opus",
            AudioExtension::Wav => "wav",
            AudioExtension::Flac => "flac",
        }
    }
}

impl FromStr for AudioExtension {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mp3" => Ok(AudioExtension::Mp3),
            "m4a" => Ok(AudioExtension::M4a),
            "aac" => Ok(AudioExtension::Aac),
            "opus" => Ok(AudioExtension::Opus),
            "wav" => Ok(AudioExtension::Wav),
            "flac" => Ok(AudioExtension::Flac),
            _ => Err(()),
        }
    }
}

/// 视频容器扩展名
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VideoExtension {
    Mp4,
    Mkv,
    Webm,
}

impl VideoExtension {
    pub const ALL_NAMES: &'static [&'static str] = &["mp4", "mkv", "webm"];

    pub fn as_str(self) -> &'static str {
        match self {
            VideoExtension::Mp4 => "mp4",
            VideoExtension::Mkv => "mkv",
            VideoExtension::Webm => "webm",
        }
    }
}

impl FromStr for VideoExtension {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mp4" => Ok(VideoExtension::Mp4),
            "mkv" => Ok(VideoExtension::Mkv),
            "webm" => Ok(VideoExtension::Webm),
            _ => Err(()),
        }
    }
}

/// 输出扩展名
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extension {
    Audio(AudioExtension),
    Video(VideoExtension),
}

impl Extension {
    pub fn as_str(self) -> &'static str {
        match self {
            Extension::Audio(ext) => ext.as_str(),
            Extension::Video(ext) => ext.as_str(),
        }
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 已校验的格式 + 扩展名组合
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaTarget {
    format: MediaFormat,
    extension: Extension,
}

impl MediaTarget {
    /// 组合格式与扩展名，类别不匹配时返回 `None`
    pub fn new(format: MediaFormat, extension: &str) -> Option<Self> {
        let extension = match format.class() {
            FormatClass::AudioOnly => Extension::Audio(extension.parse().ok()?),
            FormatClass::VideoOnly | FormatClass::Combined => {
                Extension::Video(extension.parse().ok()?)
            }
        };
        Some(Self { format, extension })
    }

    pub fn format(&self) -> MediaFormat {
        self.format
    }

    pub fn extension(&self) -> Extension {
        self.extension
    }
}
