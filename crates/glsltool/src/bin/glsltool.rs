use clap::Parser;
use color_print::ceprintln;

#[derive(Parser, Debug)]
struct Args {
    /// Name of the header file to generate.
    output: Option<String>,
    /// Don't print progress to stdout.
    #[clap(short, long)]
    quiet: bool,
}

fn main() {
    pretty_env_logger::init();
    let args = Args::parse();

    // exit code 1 on a missing argument, so the positional is checked by
    // hand instead of being required
    let Some(output) = args.output else {
        ceprintln!("<r,bold>error:</> missing output filename");
        eprintln!("usage:\n  glsltool [output filename]");
        std::process::exit(1);
    };

    let options = glsltool::GenerateOptions {
        quiet: args.quiet,
        generator_name: std::env::args()
            .next()
            .unwrap_or_else(|| env!("CARGO_BIN_NAME").to_string()),
    };
    match glsltool::generate_embedded_shaders(".", &output, &options) {
        Ok(()) => {}
        Err(err) => {
            ceprintln!("<r,bold>error:</> {err:#}");
            std::process::exit(1);
        }
    }
}
