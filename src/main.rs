use anyhow::Result;
use clap::Parser;
use hexicon::icon_gen::{self, Options, DEFAULT_SIZES};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "hexicon",
    about = "Draw the hexagon app icon at a fixed set of sizes"
)]
struct Args {
    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = "public")]
    output: PathBuf,

    /// Icon sizes to generate, written as icon<SIZE>.png.
    #[clap(
        short,
        long,
        value_delimiter = ',',
        value_name = "SIZES",
        default_values_t = DEFAULT_SIZES
    )]
    sizes: Vec<u32>,

    /// Also bundle every size up to 256px into favicon.ico
    #[clap(long)]
    ico: bool,

    /// Also write icons.json with the extension manifest `icons` entries
    #[clap(long)]
    manifest: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();

    icon_gen::generate_icons(&Options {
        output: args.output,
        sizes: args.sizes,
        ico: args.ico,
        manifest: args.manifest,
    })
}
