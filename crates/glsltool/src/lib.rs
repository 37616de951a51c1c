//! Embeds GLSL shader sources as string constants in generated C++ files.
//!
//! Scans a directory for `<base>.<subtype>.glsl` files and generates three
//! artifacts: a header declaring a shared record type for embedded shader
//! code, a source file instantiating one record per shader, and an externs
//! file so other translation units can reference the instances. Shaders stay
//! in their own syntax-highlighted files but are compiled into the program as
//! constant data, with no runtime file I/O.

mod emit;
mod escape;
mod filename;
mod idents;
mod scan;

use anyhow::Context;
use color_print::ceprintln;
use std::fs;
use std::path::Path;
use thiserror::Error;

pub use emit::{EmissionEngine, GeneratedArtifacts, EMPTY_PLACEHOLDER, EXTERNS_FILENAME, TYPE_NAME};
pub use escape::{escape_source, EscapedSource};
pub use filename::{decode_shader_filename, DecodedName, SHADER_EXTENSION};
pub use idents::{guard_token, instance_name, IdAllocator};
pub use scan::{scan_directory, ShaderUnit};

/// Extension given to the generated source file, replacing the header
/// filename's extension.
pub const SOURCE_EXTENSION: &str = ".cpp";

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Don't print progress to stdout.
    pub quiet: bool,
    /// Name recorded in the generated banner comments.
    pub generator_name: String,
}

#[derive(Error, Debug)]
#[error(transparent)]
pub struct Error(#[from] anyhow::Error);

/// Derives the source-output filename from the header filename by replacing
/// everything from the last `.` with [`SOURCE_EXTENSION`].
///
/// Returns `None` when the header filename has no extension to replace.
fn source_filename(header_name: &str) -> Option<String> {
    let dot = header_name.rfind('.')?;
    Some(format!("{}{}", &header_name[..dot], SOURCE_EXTENSION))
}

/// Scans `dir` for shader sources and writes the generated header, source and
/// externs files into it.
///
/// `header_name` is the output header filename; the source filename is
/// derived from it and the externs file is always [`EXTERNS_FILENAME`].
/// A header filename without an extension is diagnosed but, matching the
/// behavior of the tool this replaces, still completes the run successfully,
/// leaving only an empty header file behind.
pub fn generate_embedded_shaders(
    dir: impl AsRef<Path>,
    header_name: &str,
    options: &GenerateOptions,
) -> Result<(), Error> {
    fn inner(dir: &Path, header_name: &str, options: &GenerateOptions) -> anyhow::Result<()> {
        let header_path = dir.join(header_name);
        fs::File::create(&header_path)
            .with_context(|| format!("failed to create {}", header_path.display()))?;

        let Some(source_name) = source_filename(header_name) else {
            ceprintln!("<r,bold>error:</> invalid output file name: {header_name}");
            return Ok(());
        };

        let units = scan_directory(dir, options.quiet)?;
        if units.is_empty() {
            ceprintln!("<y,bold>warning:</> no files to process");
        }

        let mut engine = EmissionEngine::new(header_name, &source_name, &options.generator_name);
        for unit in &units {
            engine.add_unit(unit);
        }
        let artifacts = engine.finish();

        fs::write(&header_path, artifacts.header)
            .with_context(|| format!("failed to write {}", header_path.display()))?;
        let source_path = dir.join(&source_name);
        fs::write(&source_path, artifacts.source)
            .with_context(|| format!("failed to write {}", source_path.display()))?;
        if let Some(externs) = artifacts.externs {
            let externs_path = dir.join(EXTERNS_FILENAME);
            fs::write(&externs_path, externs)
                .with_context(|| format!("failed to write {}", externs_path.display()))?;
        }

        Ok(())
    }

    inner(dir.as_ref(), header_name, options).map_err(Error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_filename_replaces_the_extension() {
        assert_eq!(source_filename("shaders.h").as_deref(), Some("shaders.cpp"));
        assert_eq!(source_filename("a.b.h").as_deref(), Some("a.b.cpp"));
    }

    #[test]
    fn source_filename_requires_an_extension() {
        assert_eq!(source_filename("shaders"), None);
    }
}
