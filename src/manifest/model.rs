use serde::Serialize;

/// One manifest entry. Field order is the JSON key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// 1-based position in listing order.
    pub id: u32,
    pub name: String,
    pub singer: String,
    pub cover: String,
    pub music_src: String,
    pub file_name: String,
}

pub type Playlist = Vec<Track>;
