use crate::document::model::{Clip, Document, Embed, Frame, Meta};
use crate::foundation::error::{FlipbookError, FlipbookResult};

#[derive(Debug, Default)]
/// Builds one [`Document`] over the lifetime of a script run.
///
/// Commands mutate the builder in invocation order and
/// [`DocumentBuilder::finish`] consumes it once the script completes. The
/// clip most recently opened by `beginclip` is the target for frame and
/// embed appends; `endclip` does not close it. Clips form a flat list, not
/// a stack.
pub struct DocumentBuilder {
    meta: Option<Meta>,
    current: Option<usize>,
}

impl DocumentBuilder {
    /// Create a builder with no document state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize the document metadata with an empty clip list.
    ///
    /// Valid exactly once per run; the scalar fields are immutable
    /// afterward.
    pub fn set_meta(
        &mut self,
        title: String,
        team: String,
        year: i64,
        audio: String,
    ) -> FlipbookResult<()> {
        if self.meta.is_some() {
            return Err(FlipbookError::state("meta is already initialized"));
        }
        tracing::debug!(%title, %team, year, %audio, "meta");
        self.meta = Some(Meta {
            title,
            team,
            year,
            audio,
            rootclip: None,
            clips: Vec::new(),
        });
        Ok(())
    }

    /// Append a new empty clip and make it the current clip.
    pub fn begin_clip(&mut self, width: i64, height: i64, name: String) -> FlipbookResult<()> {
        tracing::debug!(width, height, %name, "beginclip");
        let meta = self.meta_mut()?;
        meta.clips.push(Clip {
            width,
            height,
            name,
            frames: Vec::new(),
            embeds: Vec::new(),
        });
        let index = meta.clips.len() - 1;
        self.current = Some(index);
        Ok(())
    }

    /// Signal the end of a clip. The current clip stays current and the
    /// clip list is unaffected; the command is reserved.
    pub fn end_clip(&mut self) {
        tracing::debug!("endclip");
    }

    /// Append a frame to the current clip.
    ///
    /// The pixel sequence is stored as supplied; its length is not checked
    /// against the clip dimensions.
    pub fn add_frame(&mut self, pixels: Vec<i64>, duration: i64) -> FlipbookResult<()> {
        tracing::debug!(pixels = pixels.len(), duration, "frame");
        let clip = self.current_clip_mut()?;
        clip.frames.push(Frame { pixels, duration });
        Ok(())
    }

    /// Append a sub-clip placement to the current clip.
    ///
    /// The embedded name is not checked against the clips that exist.
    pub fn add_embed(&mut self, name: String, x: i64, y: i64, z: i64, t: i64) -> FlipbookResult<()> {
        tracing::debug!(%name, x, y, z, t, "embed");
        let clip = self.current_clip_mut()?;
        clip.embeds.push(Embed { name, x, y, z, t });
        Ok(())
    }

    /// Designate the entry clip. Last write wins; the name is stored even
    /// if no clip by that name exists.
    pub fn set_root_clip(&mut self, name: String) -> FlipbookResult<()> {
        tracing::debug!(%name, "rootclip");
        let meta = self.meta_mut()?;
        meta.rootclip = Some(name);
        Ok(())
    }

    /// Consume the builder and produce the finished document.
    pub fn finish(self) -> FlipbookResult<Document> {
        let meta = self
            .meta
            .ok_or_else(|| FlipbookError::state("script finished without initializing meta"))?;
        Ok(Document { meta })
    }

    fn meta_mut(&mut self) -> FlipbookResult<&mut Meta> {
        self.meta
            .as_mut()
            .ok_or_else(|| FlipbookError::state("meta is not initialized; call meta(...) first"))
    }

    fn current_clip_mut(&mut self) -> FlipbookResult<&mut Clip> {
        let index = self
            .current
            .ok_or_else(|| FlipbookError::state("no clip in progress; call beginclip(...) first"))?;
        self.meta
            .as_mut()
            .and_then(|meta| meta.clips.get_mut(index))
            .ok_or_else(|| FlipbookError::state("no clip in progress; call beginclip(...) first"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/builder.rs"]
mod tests;
