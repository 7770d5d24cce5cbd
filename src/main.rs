use std::path::PathBuf;

use clap::Parser;

/// Convert an msdf-bmfont-xml .fnt file to the libGDX BMFont text format
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input BMFont (.fnt) XML file
    input: PathBuf,

    /// Output file, defaults to overwriting the input
    output: Option<PathBuf>,

    #[command(flatten)]
    verbosity: clap_verbosity_flag::Verbosity,
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbosity.into())
        .init();

    println!("Input file: {}", args.input.display());
    match bmfont_gdx::convert_file(&args.input, args.output.as_deref()) {
        Ok(output) => println!("Output file: {}", output.display()),
        Err(e) => {
            log::error!("Conversion failed: {}", e);
            std::process::exit(1);
        }
    }
}
