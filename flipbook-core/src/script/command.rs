use crate::document::builder::DocumentBuilder;
use crate::foundation::error::FlipbookResult;

#[derive(Clone, Debug, PartialEq, Eq)]
/// One authoring action, decoded from a script call.
///
/// Script arguments are shape-checked once, at the host boundary
/// ([`crate::ScriptHost`]); by the time a `Command` exists its argument
/// list is fully typed.
pub enum Command {
    /// Initialize the document metadata. Valid exactly once per run.
    SetMeta {
        /// Production title.
        title: String,
        /// Authoring team name.
        team: String,
        /// Production year.
        year: i64,
        /// Reference to an audio asset.
        audio: String,
    },
    /// Open a new clip and make it the target of frame and embed appends.
    BeginClip {
        /// Pixel width.
        width: i64,
        /// Pixel height.
        height: i64,
        /// Clip name.
        name: String,
    },
    /// Reserved end-of-clip signal; has no effect on builder state.
    EndClip,
    /// Append a frame to the current clip.
    AddFrame {
        /// Pixel values in supplied order.
        pixels: Vec<i64>,
        /// Display duration in ticks.
        duration: i64,
    },
    /// Append a sub-clip placement to the current clip.
    AddEmbed {
        /// Name of the embedded clip.
        name: String,
        /// Horizontal placement offset.
        x: i64,
        /// Vertical placement offset.
        y: i64,
        /// Stacking order.
        z: i64,
        /// Time offset in ticks.
        t: i64,
    },
    /// Designate the entry clip. Last write wins.
    SetRootClip {
        /// Entry clip name; existence is not checked.
        name: String,
    },
}

/// Route one decoded command to the builder.
pub fn dispatch(builder: &mut DocumentBuilder, command: Command) -> FlipbookResult<()> {
    match command {
        Command::SetMeta {
            title,
            team,
            year,
            audio,
        } => builder.set_meta(title, team, year, audio),
        Command::BeginClip {
            width,
            height,
            name,
        } => builder.begin_clip(width, height, name),
        Command::EndClip => {
            builder.end_clip();
            Ok(())
        }
        Command::AddFrame { pixels, duration } => builder.add_frame(pixels, duration),
        Command::AddEmbed { name, x, y, z, t } => builder.add_embed(name, x, y, z, t),
        Command::SetRootClip { name } => builder.set_root_clip(name),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/script/command.rs"]
mod tests;
