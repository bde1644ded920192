use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::error::{FlipbookError, FlipbookResult};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// The complete output artifact: one [`Meta`] plus its clips.
///
/// A document is a pure data model that is:
/// - built through [`crate::DocumentBuilder`] while a script runs
/// - serialized/deserialized via Serde (JSON)
///
/// A run constructs and serializes exactly one document; once serialization
/// begins the document is never mutated again.
pub struct Document {
    /// Top-level descriptive fields plus the clip list.
    pub meta: Meta,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Top-level descriptive fields, the clip list, and the root-clip
/// designation.
pub struct Meta {
    /// Production title.
    pub title: String,
    /// Authoring team name.
    pub team: String,
    /// Production year.
    pub year: i64,
    /// Reference to an audio asset.
    pub audio: String,
    /// Name of the designated entry clip. Last write wins; the name is not
    /// checked against the clips that actually exist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rootclip: Option<String>,
    /// Clips in script invocation order.
    pub clips: Vec<Clip>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// A named animation unit with fixed pixel dimensions, an ordered frame
/// timeline, and an ordered list of sub-clip placements.
pub struct Clip {
    /// Pixel width.
    pub width: i64,
    /// Pixel height.
    pub height: i64,
    /// Clip name, referenced by embeds and the root-clip designation.
    pub name: String,
    /// Frames in script invocation order.
    pub frames: Vec<Frame>,
    /// Sub-clip placements in script invocation order.
    pub embeds: Vec<Embed>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// One timeline entry of a clip.
pub struct Frame {
    /// Pixel values as supplied by the script. Intended length is
    /// width × height, but the count is not enforced.
    pub pixels: Vec<i64>,
    /// Display duration in ticks.
    pub duration: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// A placement of one clip's content inside another.
pub struct Embed {
    /// Name of the embedded clip; not validated for existence.
    pub name: String,
    /// Horizontal placement offset.
    pub x: i64,
    /// Vertical placement offset.
    pub y: i64,
    /// Stacking order.
    pub z: i64,
    /// Time offset in ticks.
    pub t: i64,
}

impl Document {
    /// Parse a document from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> FlipbookResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| FlipbookError::serde(format!("parse document JSON: {e}")))
    }

    /// Parse a document from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FlipbookResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FlipbookError::serde(format!("open document JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Encode the document as compact JSON with a trailing newline.
    pub fn to_json_string(&self) -> FlipbookResult<String> {
        let mut out = serde_json::to_string(self)
            .map_err(|e| FlipbookError::serde(format!("encode document JSON: {e}")))?;
        out.push('\n');
        Ok(out)
    }

    /// Write the document to `path` in one pass, unconditionally overwriting
    /// any prior content.
    pub fn write_to_path(&self, path: impl AsRef<Path>) -> FlipbookResult<()> {
        let path = path.as_ref();
        let out = self.to_json_string()?;
        std::fs::write(path, out).map_err(|e| {
            FlipbookError::serde(format!("write document JSON '{}': {e}", path.display()))
        })?;
        tracing::info!(path = %path.display(), "wrote document");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/model.rs"]
mod tests;
