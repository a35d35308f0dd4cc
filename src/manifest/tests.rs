use std::path::{Path, PathBuf};

use super::build::display_name;
use super::write::to_json;
use super::{BuildOptions, Track, build, write};
use crate::config::DEFAULT_FALLBACK_COVER;
use crate::error::Error;
use crate::library::{AudioFile, CoverIndex};

fn audio(dir: &str, name: &str) -> AudioFile {
    AudioFile {
        name: name.to_string(),
        path: PathBuf::from(dir).join(name),
    }
}

fn mp3() -> Vec<String> {
    vec!["mp3".to_string()]
}

fn opts<'a>(exts: &'a [String]) -> BuildOptions<'a> {
    BuildOptions {
        music_dir: Path::new("./music"),
        audio_extensions: exts,
        singer: "Unknown artist",
        fallback_cover: DEFAULT_FALLBACK_COVER,
    }
}

#[test]
fn display_name_strips_audio_extension_case_insensitive() {
    let exts = mp3();
    assert_eq!(display_name("Song One.mp3", &exts), "Song One");
    assert_eq!(display_name("track2.MP3", &exts), "track2");
    assert_eq!(display_name("live.mp3.mp3", &exts), "live.mp3");
    assert_eq!(display_name("cover.png", &exts), "cover.png");
    assert_eq!(display_name(".mp3", &exts), "");
}

#[test]
fn bare_extension_track_joins_bare_extension_cover() {
    let files = vec![audio("./music", ".mp3")];
    let mut covers = CoverIndex::new();
    covers.insert(String::new(), "./music/covers/.png".into());

    let exts = mp3();
    let playlist = build(&files, &covers, &opts(&exts));
    assert_eq!(playlist[0].name, "");
    assert_eq!(playlist[0].cover, "./music/covers/.png");
    assert_eq!(playlist[0].music_src, "./music/.mp3");
}

#[test]
fn build_matches_covers_and_falls_back() {
    let files = vec![
        audio("./music", "Song One.mp3"),
        audio("./music", "track2.MP3"),
    ];
    let mut covers = CoverIndex::new();
    covers.insert("song one".into(), "./music/covers/song one.png".into());

    let exts = mp3();
    let playlist = build(&files, &covers, &opts(&exts));

    assert_eq!(
        playlist,
        vec![
            Track {
                id: 1,
                name: "Song One".into(),
                singer: "Unknown artist".into(),
                cover: "./music/covers/song one.png".into(),
                music_src: "./music/Song One.mp3".into(),
                file_name: "Song One.mp3".into(),
            },
            Track {
                id: 2,
                name: "track2".into(),
                singer: "Unknown artist".into(),
                cover: DEFAULT_FALLBACK_COVER.into(),
                music_src: "./music/track2.MP3".into(),
                file_name: "track2.MP3".into(),
            },
        ]
    );
}

#[test]
fn build_assigns_dense_ids_in_input_order() {
    let files: Vec<AudioFile> = ["z.mp3", "a.mp3", "m.mp3", "b.mp3"]
        .iter()
        .map(|n| audio("./music", n))
        .collect();

    let exts = mp3();
    let playlist = build(&files, &CoverIndex::new(), &opts(&exts));

    let ids: Vec<u32> = playlist.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    let names: Vec<&str> = playlist.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["z", "a", "m", "b"]);
    assert!(playlist.iter().all(|t| t.cover == DEFAULT_FALLBACK_COVER));
}

#[test]
fn build_music_src_uses_configured_dir() {
    let files = vec![audio("/srv/audio", "x.mp3")];
    let exts = mp3();
    let options = BuildOptions {
        music_dir: Path::new("/srv/audio/"),
        ..opts(&exts)
    };

    let playlist = build(&files, &CoverIndex::new(), &options);
    assert_eq!(playlist[0].music_src, "/srv/audio/x.mp3");
}

#[test]
fn build_of_nothing_is_empty() {
    let exts = mp3();
    assert!(build(&[], &CoverIndex::new(), &opts(&exts)).is_empty());
}

#[test]
fn json_uses_camel_case_keys_in_order() {
    let track = Track {
        id: 1,
        name: "Song".into(),
        singer: "S".into(),
        cover: "c".into(),
        music_src: "./music/Song.mp3".into(),
        file_name: "Song.mp3".into(),
    };
    let json = to_json(&[track]).unwrap();
    let expected = r#"[
  {
    "id": 1,
    "name": "Song",
    "singer": "S",
    "cover": "c",
    "musicSrc": "./music/Song.mp3",
    "fileName": "Song.mp3"
  }
]"#;
    assert_eq!(json, expected);
}

#[test]
fn empty_playlist_serializes_to_empty_array() {
    assert_eq!(to_json(&[]).unwrap(), "[]");
}

#[test]
fn write_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("playlist.json");
    std::fs::write(&out, "stale content that is longer than the new manifest").unwrap();

    write(&[], &out).unwrap();
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "[]");
}

#[test]
fn write_into_missing_dir_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("missing").join("playlist.json");

    let err = write(&[], &out).unwrap_err();
    assert!(matches!(err, Error::Write { path, .. } if path == out));
}
