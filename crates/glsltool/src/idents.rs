//! Generated identifiers: include-guard tokens, instance names, shader IDs.

/// Derives the include-guard token for a generated header.
///
/// ASCII letters are uppercased, digits kept, and every other character
/// (including the `.` before the extension) becomes `_`, with one more `_`
/// prepended and appended. Pure function of the output filename, so
/// re-running with the same name yields an identical guard.
pub fn guard_token(output_filename: &str) -> String {
    let mut token = String::with_capacity(output_filename.len() + 2);
    token.push('_');
    for c in output_filename.chars() {
        match c {
            'a'..='z' => token.push(c.to_ascii_uppercase()),
            'A'..='Z' | '0'..='9' => token.push(c),
            _ => token.push('_'),
        }
    }
    token.push('_');
    token
}

/// Derives the variable name for one embedded shader.
///
/// The base name has its ASCII lowercase letters uppercased (everything else,
/// digits and punctuation included, is kept as-is), then `_` and the subtype
/// are appended unchanged.
pub fn instance_name(base: &str, subtype: &str) -> String {
    let mut name = String::with_capacity(base.len() + subtype.len() + 1);
    for c in base.chars() {
        match c {
            'a'..='z' => name.push(c.to_ascii_uppercase()),
            _ => name.push(c),
        }
    }
    name.push('_');
    name.push_str(subtype);
    name
}

/// Issues the unique ascending IDs given to shaders in discovery order.
#[derive(Debug)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        IdAllocator { next: 1 }
    }

    pub fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_token_sanitizes_and_wraps() {
        assert_eq!(guard_token("shaders.h"), "_SHADERS_H_");
        assert_eq!(guard_token("my-shaders2.h"), "_MY_SHADERS2_H_");
        assert_eq!(guard_token("ALL_CAPS.H"), "_ALL_CAPS_H_");
    }

    #[test]
    fn guard_token_is_deterministic() {
        assert_eq!(guard_token("out.h"), guard_token("out.h"));
    }

    #[test]
    fn instance_name_uppercases_only_lowercase_ascii() {
        assert_eq!(instance_name("phong", "vertex"), "PHONG_vertex");
        assert_eq!(instance_name("Blur2x", "fragment"), "BLUR2X_fragment");
        // digits and punctuation pass through, subtype is untouched
        assert_eq!(instance_name("sky-box", "Vertex"), "SKY-BOX_Vertex");
    }

    #[test]
    fn instance_name_with_empty_subtype() {
        assert_eq!(instance_name("noise", ""), "NOISE_");
    }

    #[test]
    fn ids_are_contiguous_from_one() {
        let mut ids = IdAllocator::new();
        let issued: Vec<u32> = (0..5).map(|_| ids.next_id()).collect();
        assert_eq!(issued, vec![1, 2, 3, 4, 5]);
    }
}
