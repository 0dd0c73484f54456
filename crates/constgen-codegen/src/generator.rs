use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use constgen_spec::{Document, OutputConfig, Target};

use crate::emitters;
use crate::error::{CodegenError, RenderError};
use crate::sink::Sink;

/// Section comment written before the constants.
pub const CONSTANTS_LABEL: &str = "constants";
/// Section comment written before the enums.
pub const ENUMS_LABEL: &str = "enums";

/// Drive the renderer for `target` over `out`: header, `constants`
/// comment, every constant, `enums` comment, every enum, footer.
pub fn render_target(
    document: &Document,
    target: Target,
    output: &OutputConfig,
    out: &mut dyn Write,
) -> Result<(), RenderError> {
    let label = output.path().display().to_string();
    let mut renderer = emitters::create_renderer(target, Sink::new(out, label), output);

    log::debug!("{target}: header");
    renderer.emit_header()?;

    log::debug!("{target}: {} constant(s)", document.constants().len());
    renderer.emit_comment(CONSTANTS_LABEL, true)?;
    for constant in document.constants() {
        renderer.emit_constant(constant)?;
    }

    log::debug!("{target}: {} enum(s)", document.enums().len());
    renderer.emit_comment(ENUMS_LABEL, true)?;
    for enumeration in document.enums() {
        renderer.emit_enum(enumeration)?;
    }

    renderer.emit_footer()?;
    drop(renderer);

    out.flush().map_err(|source| RenderError::Sink {
        sink: output.path().display().to_string(),
        source,
    })
}

/// Render a configured target into memory.
pub fn render_to_string(document: &Document, target: Target) -> Result<String, CodegenError> {
    let output = document
        .output(target)
        .ok_or(CodegenError::NotConfigured(target))?;
    let mut buf = Vec::new();
    render_target(document, target, output, &mut buf)
        .map_err(|source| CodegenError::Render { target, source })?;
    // Renderers only write `&str`s.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Result of generating one target.
#[derive(Debug)]
pub struct TargetOutcome {
    pub target: Target,
    /// Destination the target was (or would have been) written to
    pub path: PathBuf,
    pub result: Result<(), CodegenError>,
}

impl TargetOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Writes a document's configured targets to disk.
///
/// Targets are independent: each one opens, fills and closes its own file,
/// and a failure in one does not stop the others.
#[derive(Debug, Clone)]
pub struct Generator<'d> {
    document: &'d Document,
    only: Option<Vec<Target>>,
    base_dir: Option<PathBuf>,
}

impl<'d> Generator<'d> {
    pub fn new(document: &'d Document) -> Self {
        Self {
            document,
            only: None,
            base_dir: None,
        }
    }

    /// Restrict generation to `targets`. Each must be configured in the
    /// document.
    pub fn only(mut self, targets: impl IntoIterator<Item = Target>) -> Self {
        self.only = Some(targets.into_iter().collect());
        self
    }

    /// Resolve relative output paths against `dir` instead of the current
    /// working directory.
    pub fn base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Targets to generate with their output config and destination path,
    /// in document order.
    pub fn selected(&self) -> Result<Vec<(Target, &'d OutputConfig, PathBuf)>, CodegenError> {
        if let Some(only) = &self.only {
            if let Some(missing) = only.iter().find(|t| self.document.output(**t).is_none()) {
                return Err(CodegenError::NotConfigured(*missing));
            }
        }

        let document = self.document;
        Ok(document
            .outputs()
            .iter()
            .filter(|(target, _)| self.only.as_ref().map_or(true, |only| only.contains(*target)))
            .map(|(target, output)| {
                let dest = match &self.base_dir {
                    Some(dir) => output.resolve(dir),
                    None => output.path().to_path_buf(),
                };
                (*target, output, dest)
            })
            .collect())
    }

    /// Render every selected target in memory, without touching the disk.
    pub fn preview(&self) -> Result<Vec<(Target, PathBuf, String)>, CodegenError> {
        self.selected()?
            .into_iter()
            .map(|(target, output, dest)| {
                let mut buf = Vec::new();
                render_target(self.document, target, output, &mut buf)
                    .map_err(|source| CodegenError::Render { target, source })?;
                let content = String::from_utf8_lossy(&buf).into_owned();
                Ok((target, dest, content))
            })
            .collect()
    }

    /// Write every selected target. Fails only if the selection itself is
    /// invalid; per-target failures are reported in the outcomes.
    pub fn generate(&self) -> Result<Vec<TargetOutcome>, CodegenError> {
        let outcomes = self
            .selected()?
            .into_iter()
            .map(|(target, output, dest)| {
                let result = write_target(self.document, target, output, &dest);
                match &result {
                    Ok(()) => log::info!("wrote: {}", dest.display()),
                    Err(e) => log::warn!("{e}"),
                }
                TargetOutcome {
                    target,
                    path: dest,
                    result,
                }
            })
            .collect();
        Ok(outcomes)
    }
}

/// Render `target` into `path`, creating missing parent directories. The
/// file is truncated first; a failure part way leaves whatever was written
/// so far.
pub fn write_target(
    document: &Document,
    target: Target,
    output: &OutputConfig,
    path: &Path,
) -> Result<(), CodegenError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_parent(target, parent)?;
    }

    let file = File::create(path).map_err(|source| CodegenError::Open {
        target,
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    render_target(document, target, output, &mut writer)
        .map_err(|source| CodegenError::Render { target, source })
}

fn create_parent(target: Target, parent: &Path) -> Result<(), CodegenError> {
    std::fs::create_dir_all(parent).map_err(|source| CodegenError::CreateDir {
        target,
        path: parent.to_path_buf(),
        source,
    })
}
