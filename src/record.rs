use std::path::PathBuf;

use base64::{Engine, engine::general_purpose::STANDARD};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::Serialize;

use crate::naming::EmojiName;

/// Bytes that must be escaped in the path component of a `file://` URI.
const PATH_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// An accepted, deduplicated emoji ready to hand to the host.
#[derive(Debug, Clone)]
pub struct StagedRecord {
    /// 1-based insertion ordinal.
    pub index: usize,
    pub name: EmojiName,
    pub path: PathBuf,
    pub bytes: Vec<u8>,
    /// Content digest used for deduplication only.
    pub hash: blake3::Hash,
}

impl StagedRecord {
    /// `label,group,extension`, preserved verbatim for tagging.
    pub fn tags(&self) -> String {
        self.name.tags()
    }

    pub fn mime_type(&self) -> String {
        self.name.mime_type()
    }

    /// `file://` reference to the original file.
    pub fn uri(&self) -> String {
        let path = self.path.to_string_lossy().replace('\\', "/");
        let path = if path.starts_with('/') {
            path
        } else {
            format!("/{path}")
        };
        format!("file://{}", utf8_percent_encode(&path, PATH_ENCODE_SET))
    }

    pub fn to_host_item(&self) -> HostItem {
        HostItem {
            index: self.index,
            tags: self.tags(),
            uri: self.uri(),
            mime: self.mime_type(),
            size: self.bytes.len(),
            data: STANDARD.encode(&self.bytes),
        }
    }
}

/// Serialized form of a [`StagedRecord`] for a picker or clipboard host.
///
/// Carries the three representations a host can choose from: the tag
/// string, a URI for consumers that want the file itself, and the raw
/// image payload (base64) under its MIME type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostItem {
    pub index: usize,
    pub tags: String,
    pub uri: String,
    pub mime: String,
    pub size: usize,
    pub data: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(path: &str, bytes: &[u8]) -> StagedRecord {
        let file_name = path.rsplit('/').next().unwrap();
        StagedRecord {
            index: 1,
            name: EmojiName::parse(file_name).unwrap(),
            path: PathBuf::from(path),
            bytes: bytes.to_vec(),
            hash: blake3::hash(bytes),
        }
    }

    #[test]
    fn uri_is_a_file_url() {
        let r = record("/home/me/emoji/guild.smile.png", b"x");
        assert_eq!(r.uri(), "file:///home/me/emoji/guild.smile.png");
    }

    #[test]
    fn uri_escapes_reserved_bytes() {
        let r = record("/my emoji/#1/guild.smile.png", b"x");
        assert_eq!(r.uri(), "file:///my%20emoji/%231/guild.smile.png");
    }

    #[test]
    fn host_item_carries_all_formats() {
        let r = record("/e/guildB.wave.gif", b"GIF89a");
        let item = r.to_host_item();
        assert_eq!(item.index, 1);
        assert_eq!(item.tags, "wave,guildB,gif");
        assert_eq!(item.mime, "image/gif");
        assert_eq!(item.size, 6);
        assert_eq!(item.data, "R0lGODlh");
        assert_eq!(item.uri, "file:///e/guildB.wave.gif");
    }

    #[test]
    fn host_item_serializes_without_hash() {
        let r = record("/e/g.smile.png", b"x");
        let json = serde_json::to_value(r.to_host_item()).unwrap();
        let keys: Vec<&str> =
            json.as_object().unwrap().keys().map(String::as_str).collect();
        assert!(!keys.contains(&"hash"));
        assert!(keys.contains(&"tags"));
        assert!(keys.contains(&"data"));
    }
}
