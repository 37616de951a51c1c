//! Shader filename decoding.
//!
//! Shader files are named `<base>.<subtype>.glsl`, where the subtype is the
//! shader stage tag (`vertex`, `fragment`, ...). The base name and subtype
//! are delimited by the first and last `.` in the filename.

/// File extension of recognized shader sources.
pub const SHADER_EXTENSION: &str = ".glsl";

/// The parts of a shader filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedName<'a> {
    /// Substring before the first `.`.
    pub base: &'a str,
    /// Substring between the first and last `.`.
    ///
    /// Empty when the filename contains a single `.`.
    pub subtype: &'a str,
}

/// Splits a shader filename into its base name and subtype.
///
/// Returns `None` for filenames without a `.` and for filenames whose final
/// extension is not [`SHADER_EXTENSION`]. Rejection is not an error; the
/// scanner silently skips non-matching entries.
pub fn decode_shader_filename(filename: &str) -> Option<DecodedName<'_>> {
    let first_dot = filename.find('.')?;
    let last_dot = filename.rfind('.')?;
    if &filename[last_dot..] != SHADER_EXTENSION {
        return None;
    }
    let subtype = if first_dot < last_dot {
        &filename[first_dot + 1..last_dot]
    } else {
        ""
    };
    Some(DecodedName {
        base: &filename[..first_dot],
        subtype,
    })
}
