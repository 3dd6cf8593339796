use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    #[inline]
    pub fn is_zoomable(self, zoom_videos: bool) -> bool {
        match self {
            MediaKind::Image => true,
            MediaKind::Video => zoom_videos,
        }
    }
}

impl FromStr for MediaKind {
    type Err = MediaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "image" | "img" | "photo" => Ok(MediaKind::Image),
            "video" | "film" => Ok(MediaKind::Video),
            other => Err(MediaError::UnknownKind(other.to_string())),
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Image => f.write_str("image"),
            MediaKind::Video => f.write_str("video"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MediaError {
    #[error("unknown media kind '{0}'")]
    UnknownKind(String),
    #[error("media item has no source")]
    MissingSource,
}

/// One entry of the caller-owned media sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct MediaItem {
    pub kind: MediaKind,
    /// Image URL, or a video locator understood by `embed::VideoSource`.
    pub source: String,
    pub title: String,
}

impl MediaItem {
    pub fn new(kind: MediaKind, source: impl Into<String>, title: impl Into<String>) -> Result<Self, MediaError> {
        let source = source.into();
        if source.trim().is_empty() {
            return Err(MediaError::MissingSource);
        }
        Ok(Self {
            kind,
            source,
            title: title.into(),
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavDirection {
    Previous,
    Next,
}

impl NavDirection {
    #[inline]
    pub fn step(self) -> isize {
        match self {
            NavDirection::Previous => -1,
            NavDirection::Next => 1,
        }
    }
}

/// Wrap-around carousel rule: past the end goes to the first item, before
/// the start goes to the last. Empty collections map to 0.
#[inline]
pub fn wrap_index(target: isize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    if target < 0 {
        count - 1
    } else if target as usize >= count {
        0
    } else {
        target as usize
    }
}
