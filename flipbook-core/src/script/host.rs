use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use rhai::{Array, Dynamic, Engine, EvalAltResult, Map, Position};

use crate::document::builder::DocumentBuilder;
use crate::document::model::Document;
use crate::foundation::error::{FlipbookError, FlipbookResult};
use crate::script::command::{Command, dispatch};

/// Designated scalar field read from each `embed` coordinate record.
const COORD_FIELD: &str = "0";

/// The six script-facing command names, registered before the script runs.
const COMMAND_NAMES: [&str; 6] = ["meta", "beginclip", "endclip", "frame", "embed", "rootclip"];

/// Executes one authoring script against one [`DocumentBuilder`].
///
/// The host embeds a Rhai engine and registers the authoring commands as
/// global functions available for the whole run. The script executes in a
/// single linear pass; each command call is decoded into a [`Command`],
/// shape-checked, and dispatched into the builder before the script
/// proceeds. Running the host consumes it: one script, one document.
pub struct ScriptHost {
    engine: Engine,
    builder: Rc<RefCell<DocumentBuilder>>,
}

impl ScriptHost {
    /// Create a host with a fresh builder and all commands registered.
    pub fn new() -> Self {
        let mut engine = Engine::new();
        engine.set_max_expr_depths(64, 64);
        engine.set_max_call_levels(64);

        let builder = Rc::new(RefCell::new(DocumentBuilder::new()));

        let b = Rc::clone(&builder);
        engine.register_fn("meta", move |fields: Dynamic| {
            let command = decode_meta(fields)?;
            apply(&b, command)
        });

        let b = Rc::clone(&builder);
        engine.register_fn(
            "beginclip",
            move |width: i64, height: i64, name: String| {
                apply(
                    &b,
                    Command::BeginClip {
                        width,
                        height,
                        name,
                    },
                )
            },
        );

        let b = Rc::clone(&builder);
        engine.register_fn("endclip", move || apply(&b, Command::EndClip));

        let b = Rc::clone(&builder);
        engine.register_fn("frame", move |pixels: Dynamic, duration: i64| {
            let command = decode_frame(pixels, duration)?;
            apply(&b, command)
        });

        let b = Rc::clone(&builder);
        engine.register_fn(
            "embed",
            move |name: String, x: Dynamic, y: Dynamic, z: i64, t: i64| {
                let command = decode_embed(name, x, y, z, t)?;
                apply(&b, command)
            },
        );

        let b = Rc::clone(&builder);
        engine.register_fn("rootclip", move |name: String| {
            apply(&b, Command::SetRootClip { name })
        });

        for name in COMMAND_NAMES {
            tracing::debug!(name, "registered command");
        }

        Self { engine, builder }
    }

    /// Load, compile, and execute the script at `path`, producing the
    /// finished document.
    #[tracing::instrument(skip(self))]
    pub fn run_path(self, path: &Path) -> FlipbookResult<Document> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            FlipbookError::load(format!("open or read script '{}': {e}", path.display()))
        })?;
        self.run_source(&source)
    }

    /// Compile and execute script source, producing the finished document.
    ///
    /// Read and parse failures are load errors; any fault raised while the
    /// script executes, including a failed command, is a script error and
    /// aborts the run before anything is serialized.
    pub fn run_source(self, source: &str) -> FlipbookResult<Document> {
        let ast = self
            .engine
            .compile(source)
            .map_err(|e| FlipbookError::load(format!("parse script: {e}")))?;
        self.engine
            .run_ast(&ast)
            .map_err(|e| FlipbookError::script(e.to_string()))?;
        self.builder.take().finish()
    }
}

impl Default for ScriptHost {
    fn default() -> Self {
        Self::new()
    }
}

fn apply(
    builder: &Rc<RefCell<DocumentBuilder>>,
    command: Command,
) -> Result<(), Box<EvalAltResult>> {
    dispatch(&mut builder.borrow_mut(), command).map_err(into_script_error)
}

fn into_script_error(err: FlipbookError) -> Box<EvalAltResult> {
    Box::new(EvalAltResult::ErrorRuntime(
        err.to_string().into(),
        Position::NONE,
    ))
}

fn decode_meta(fields: Dynamic) -> Result<Command, Box<EvalAltResult>> {
    let map = expect_map(fields, "meta", "fields")?;
    Ok(Command::SetMeta {
        title: string_field(&map, "meta", "title")?,
        team: string_field(&map, "meta", "team")?,
        year: int_field(&map, "meta", "year")?,
        audio: string_field(&map, "meta", "audio")?,
    })
}

fn decode_frame(pixels: Dynamic, duration: i64) -> Result<Command, Box<EvalAltResult>> {
    let supplied = pixels.type_name();
    // An array supplies pixels in explicit order; a key-value map supplies
    // them in the map's deterministic iteration order.
    let values: Vec<Dynamic> = if pixels.is_array() {
        pixels.cast::<Array>()
    } else if pixels.is_map() {
        pixels.cast::<Map>().into_values().collect()
    } else {
        return Err(into_script_error(FlipbookError::type_error(format!(
            "frame: argument 'pixels' must be an array or map, got {supplied}"
        ))));
    };

    let mut out = Vec::with_capacity(values.len());
    for value in values {
        let pixel = value.as_int().map_err(|got| {
            into_script_error(FlipbookError::type_error(format!(
                "frame: pixel values must be integers, got {got}"
            )))
        })?;
        out.push(pixel);
    }
    Ok(Command::AddFrame {
        pixels: out,
        duration,
    })
}

fn decode_embed(
    name: String,
    x: Dynamic,
    y: Dynamic,
    z: i64,
    t: i64,
) -> Result<Command, Box<EvalAltResult>> {
    let x = coord_field(x, "x")?;
    let y = coord_field(y, "y")?;
    Ok(Command::AddEmbed { name, x, y, z, t })
}

fn coord_field(value: Dynamic, arg: &str) -> Result<i64, Box<EvalAltResult>> {
    let map = expect_map(value, "embed", arg)?;
    let coord = map.get(COORD_FIELD).ok_or_else(|| {
        into_script_error(FlipbookError::type_error(format!(
            "embed: coordinate '{arg}' is missing field '{COORD_FIELD}'"
        )))
    })?;
    coord.as_int().map_err(|got| {
        into_script_error(FlipbookError::type_error(format!(
            "embed: coordinate '{arg}' field '{COORD_FIELD}' must be an integer, got {got}"
        )))
    })
}

fn expect_map(value: Dynamic, command: &str, arg: &str) -> Result<Map, Box<EvalAltResult>> {
    let supplied = value.type_name();
    value.try_cast::<Map>().ok_or_else(|| {
        into_script_error(FlipbookError::type_error(format!(
            "{command}: argument '{arg}' must be a map, got {supplied}"
        )))
    })
}

fn string_field(map: &Map, command: &str, field: &str) -> Result<String, Box<EvalAltResult>> {
    let value = map.get(field).ok_or_else(|| missing_field(command, field))?;
    value.clone().into_string().map_err(|got| {
        into_script_error(FlipbookError::type_error(format!(
            "{command}: field '{field}' must be a string, got {got}"
        )))
    })
}

fn int_field(map: &Map, command: &str, field: &str) -> Result<i64, Box<EvalAltResult>> {
    let value = map.get(field).ok_or_else(|| missing_field(command, field))?;
    value.as_int().map_err(|got| {
        into_script_error(FlipbookError::type_error(format!(
            "{command}: field '{field}' must be an integer, got {got}"
        )))
    })
}

fn missing_field(command: &str, field: &str) -> Box<EvalAltResult> {
    into_script_error(FlipbookError::type_error(format!(
        "{command}: record is missing field '{field}'"
    )))
}
