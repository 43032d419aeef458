/// A YouTube player embedded on a page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoEmbed {
    pub title: String,
    /// `None` renders the "Video unavailable" placeholder.
    pub src: Option<String>,
}

impl VideoEmbed {
    pub fn youtube(video_id: &str, title: &str) -> Self {
        VideoEmbed {
            title: title.to_string(),
            src: youtube_embed_url(video_id),
        }
    }
}

/// Embed URL for a YouTube video id; ids outside `[A-Za-z0-9_-]` are rejected.
pub fn youtube_embed_url(video_id: &str) -> Option<String> {
    let id = video_id.trim();
    let valid = !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    valid.then(|| format!("https://www.youtube.com/embed/{}", id))
}

/// Company videos on the home page.
pub fn home_videos() -> Vec<VideoEmbed> {
    vec![
        VideoEmbed::youtube("vi9Mz5Dqc1c", "Modia Properties Video 1"),
        VideoEmbed::youtube("Y-kI7NXVhfA", "Modia Properties Video 2"),
    ]
}
