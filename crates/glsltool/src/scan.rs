//! Directory scanning and shader unit assembly.

use crate::escape::escape_source;
use crate::filename::decode_shader_filename;
use crate::idents::{instance_name, IdAllocator};
use anyhow::Context;
use color_print::{ceprintln, cprintln};
use log::debug;
use std::fs;
use std::path::Path;

/// One matched shader source file and its derived metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderUnit {
    /// Original name as listed by the filesystem.
    pub filename: String,
    /// Part of the filename before the first `.`.
    pub base_name: String,
    /// Part of the filename between the first and last `.` (the stage tag).
    pub subtype: String,
    /// Generated variable name, `UPPER(base) + "_" + subtype`.
    pub instance_name: String,
    /// Comment-stripped, line-escaped literal body.
    pub escaped_text: String,
    /// Character count of the stripped, unescaped text.
    pub true_length: usize,
    /// Unique ascending ID, assigned in discovery order starting at 1.
    pub id: u32,
}

/// Scans a directory (non-recursively) for shader source files.
///
/// Hidden entries (names starting with `.`) and entries without the
/// recognized shader extension are skipped. Files that match but cannot be
/// read are diagnosed and skipped; only the directory enumeration itself can
/// fail the scan. The returned units are in enumeration order, with no sort
/// applied.
pub fn scan_directory(dir: &Path, quiet: bool) -> anyhow::Result<Vec<ShaderUnit>> {
    let mut units = Vec::new();
    let mut ids = IdAllocator::new();

    let entries =
        fs::read_dir(dir).with_context(|| format!("failed to scan directory {}", dir.display()))?;
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to scan directory {}", dir.display()))?;
        let os_name = entry.file_name();
        let Some(filename) = os_name.to_str() else {
            debug!("skipping entry with non-unicode name: {:?}", os_name);
            continue;
        };
        if filename.starts_with('.') {
            // hidden, regardless of platform hidden-file semantics
            continue;
        }
        let Some(decoded) = decode_shader_filename(filename) else {
            continue;
        };

        let text = match fs::read_to_string(entry.path()) {
            Ok(text) => text,
            Err(err) => {
                debug!("read error for {filename}: {err}");
                ceprintln!("<r,bold>warning:</> could not read file <<{filename}>>, skipping");
                continue;
            }
        };

        if !quiet {
            cprintln!("<g,bold>Embedding</> {filename}");
        }

        let escaped = escape_source(&text);
        units.push(ShaderUnit {
            filename: filename.to_string(),
            base_name: decoded.base.to_string(),
            subtype: decoded.subtype.to_string(),
            instance_name: instance_name(decoded.base, decoded.subtype),
            escaped_text: escaped.text,
            true_length: escaped.true_length,
            id: ids.next_id(),
        });
    }

    Ok(units)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn matches_only_shader_files_and_skips_hidden_entries() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.vertex.glsl"), "foo;\n").unwrap();
        fs::write(dir.path().join("a.fragment.glsl"), "bar;\n").unwrap();
        fs::write(dir.path().join(".hidden.vertex.glsl"), "nope;\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "nope\n").unwrap();
        fs::write(dir.path().join("Makefile"), "all:\n").unwrap();
        fs::create_dir(dir.path().join("sub.dir.glsl.d")).unwrap();

        let units = scan_directory(dir.path(), true).unwrap();
        let mut names: Vec<&str> = units.iter().map(|u| u.filename.as_str()).collect();
        names.sort();
        assert_eq!(names, vec!["a.fragment.glsl", "a.vertex.glsl"]);
    }

    #[test]
    fn ids_follow_discovery_order_with_no_gaps() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.vertex.glsl", "b.vertex.glsl", "c.vertex.glsl"] {
            fs::write(dir.path().join(name), "foo;\n").unwrap();
        }

        let units = scan_directory(dir.path(), true).unwrap();
        let ids: Vec<u32> = units.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn unit_metadata_is_derived_from_the_filename_and_contents() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("phong.vertex.glsl"), "// comment\nfoo;\n").unwrap();

        let units = scan_directory(dir.path(), true).unwrap();
        assert_eq!(units.len(), 1);
        let unit = &units[0];
        assert_eq!(unit.base_name, "phong");
        assert_eq!(unit.subtype, "vertex");
        assert_eq!(unit.instance_name, "PHONG_vertex");
        assert_eq!(unit.escaped_text, "\"foo;\\n\"\n");
        assert_eq!(unit.true_length, 5);
        assert_eq!(unit.id, 1);
    }

    #[test]
    fn unreadable_matches_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        // a matching name that is a directory fails to read as a file
        fs::create_dir(dir.path().join("broken.vertex.glsl")).unwrap();
        fs::write(dir.path().join("ok.vertex.glsl"), "foo;\n").unwrap();

        let units = scan_directory(dir.path(), true).unwrap();
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].filename, "ok.vertex.glsl");
        assert_eq!(units[0].id, 1);
    }

    #[test]
    fn empty_directory_yields_no_units() {
        let dir = tempfile::tempdir().unwrap();
        assert!(scan_directory(dir.path(), true).unwrap().is_empty());
    }
}
