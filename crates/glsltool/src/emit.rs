//! Emission of the generated header, source and externs artifacts.
//!
//! The engine accumulates output in memory; nothing touches the filesystem
//! here. The caller writes the finished bodies out in one go. The byte layout
//! of everything emitted is load-bearing: downstream projects check the
//! generated files in and diff them, so templates must not be reflowed.

use crate::idents::guard_token;
use crate::scan::ShaderUnit;
use std::fmt::Write;

/// Name of the generated record type, via the `SHADER_TYPE_NAME` macro the
/// header defines so consumers can refer to it as well.
pub const TYPE_NAME: &str = "_shader_code";

/// Fixed name of the externs file, always written to the scanned directory.
pub const EXTERNS_FILENAME: &str = "shader_externs.h";

/// Placeholder written to the header and source outputs when no shader files
/// were matched, so the artifacts are created but near-empty.
pub const EMPTY_PLACEHOLDER: &str = " ";

/// The finished bodies of the three output files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifacts {
    pub header: String,
    pub source: String,
    /// `None` when no shader was matched; the externs file is then not
    /// written at all.
    pub externs: Option<String>,
}

/// Accumulates generated output for one run.
///
/// The two one-shot gates (`commented`, `preamble_emitted`) are plain fields
/// so each run, and each test, starts from a fresh engine.
pub struct EmissionEngine {
    header_name: String,
    source_name: String,
    guard: String,
    generator: String,
    header: String,
    source: String,
    commented: bool,
    preamble_emitted: bool,
    filenames: Vec<String>,
    instance_names: Vec<String>,
}

impl EmissionEngine {
    pub fn new(header_name: &str, source_name: &str, generator: &str) -> Self {
        EmissionEngine {
            header_name: header_name.to_string(),
            source_name: source_name.to_string(),
            guard: guard_token(header_name),
            generator: generator.to_string(),
            header: String::new(),
            source: String::new(),
            commented: false,
            preamble_emitted: false,
            filenames: Vec::new(),
            instance_names: Vec::new(),
        }
    }

    /// Appends one shader to the source output, emitting the banner comments
    /// and the header preamble first if this is the first shader of the run.
    pub fn add_unit(&mut self, unit: &ShaderUnit) {
        if !self.commented {
            write_banner(&mut self.header, &self.header_name, &self.generator);
            write_banner(&mut self.source, &self.source_name, &self.generator);
            self.commented = true;
        }

        if !self.preamble_emitted {
            self.write_header_preamble();
            let _ = write!(self.source, "\n#include \"{}\"\n\n", self.header_name);
            self.write_header_guard_close();
            self.preamble_emitted = true;
        }

        let _ = write!(self.source, "/** From file:  {}\n */\n", unit.filename);
        let _ = write!(self.source, "{TYPE_NAME} {}(\n  ", unit.instance_name);
        // continuation indentation after every line of the literal
        for c in unit.escaped_text.chars() {
            self.source.push(c);
            if c == '\n' {
                self.source.push_str("  ");
            }
        }
        let _ = write!(self.source, ",\n  {},\n  {}\n", unit.true_length, unit.id);
        self.source.push_str(");\n\n\n");

        self.filenames.push(unit.filename.clone());
        self.instance_names.push(unit.instance_name.clone());
    }

    /// Finishes the run: appends the file-listing comment to the header and
    /// source, renders the externs body, and returns the artifact bodies.
    ///
    /// If no shader was added, the header and source bodies are the single
    /// placeholder character and no externs body is produced.
    pub fn finish(mut self) -> GeneratedArtifacts {
        if !self.commented {
            return GeneratedArtifacts {
                header: EMPTY_PLACEHOLDER.to_string(),
                source: EMPTY_PLACEHOLDER.to_string(),
                externs: None,
            };
        }

        write_file_listing(&mut self.header, &self.filenames);
        write_file_listing(&mut self.source, &self.filenames);
        self.header.push_str("\n\n");
        self.source.push_str("\n\n");

        let mut externs = String::from(concat!(
            "/** Include at the top of any .cpp files needing access to the uncompiled\n",
            " * shaders.  This isn't the best idea, but it's convenient.  I'll remove this\n",
            " * and do just do it manually later should it become a problem.\n",
            " */\n\n",
        ));
        for name in &self.instance_names {
            let _ = writeln!(externs, "extern SHADER_TYPE_NAME {name};");
        }
        externs.push('\n');

        GeneratedArtifacts {
            header: self.header,
            source: self.source,
            externs: Some(externs),
        }
    }

    /// Include-guard opening, the `SHADER_TYPE_NAME` macro block, the host
    /// library includes and the record type definition.
    fn write_header_preamble(&mut self) {
        let indent = " ".repeat(39);
        let _ = write!(
            self.header,
            concat!(
                "#ifndef  SHADER_TYPE_NAME\n",
                "# define SHADER_TYPE_NAME {type_name} ///< A macro is used for the typename\n",
                "{indent}///< since it is automatically\n",
                "{indent}///< generated by another program.\n",
                "#endif\n\n",
                "#ifndef  {guard}\n",
                "# define {guard}\n\n",
            ),
            type_name = TYPE_NAME,
            indent = indent,
            guard = self.guard,
        );
        self.header.push_str(concat!(
            "#include<GL/glew.h>\n",
            "#include<SDL2/SDL.h>\n",
            "#include<SDL2/SDL_opengl.h>\n",
            "\n",
            "#include<GL/glu.h>\n",
            "#include<GL/freeglut.h>\n\n",
        ));
        let _ = write!(
            self.header,
            concat!(
                "/** Container for shader code.\n",
                " *  Streamlines use of hard-coded shaders in OpenGL by allowing them to be\n",
                " *  in their own files with the use of syntactic highlighting.\n",
                " *\n",
                " */\n",
                "struct {type_name}\n",
                "{{\n",
                "  GLchar* code; ///< Source text.\n",
                "  GLuint  size; ///< Number of characters in the source text.\n",
                "  const GLuint  id; ///< unique ID for each bit of shader code.\n",
                "\n",
                "/** Ctor.  Necessary because structs are stored as constants.\n",
                " *\n",
                " * param c C-string of the shader source code.\n",
                " * param s The number of characters in the shader source.\n",
                " */\n",
                "  {type_name}( GLchar* c, GLuint s, GLuint i ) :\n",
                "    code(c), size(s), id(i)\n",
                "  {{}}\n",
                "\n",
                "}};\n\n",
            ),
            type_name = TYPE_NAME,
        );
    }

    fn write_header_guard_close(&mut self) {
        let _ = write!(self.header, "\n#endif /* {} */\n\n", self.guard);
    }
}

fn write_banner(out: &mut String, filename: &str, generator: &str) {
    let _ = write!(
        out,
        concat!(
            "/**\n",
            " * \\file {filename}\n",
            " * \\author {generator}\n",
            " *\n",
            " *   Auto-generated header file containing code from all shaders",
            "used in this\n",
            " * program.  A list of the files used to generated this file can ",
            "be found at\n",
            " * the bottom of this file.\n",
            " *\n",
            " * file generated by:     {generator}\n",
            " *\n",
            " */\n\n\n\n",
        ),
        filename = filename,
        generator = generator,
    );
}

fn write_file_listing(out: &mut String, filenames: &[String]) {
    out.push_str("//\n// Summary of all files used for generation of this header:\n//\n");
    for filename in filenames {
        let _ = writeln!(out, "// {filename}");
    }
    out.push_str("//\n");
}
