use anyhow::Result;
use clap::Parser;
use placeholder_icons::icon_gen::{self, DEFAULT_COLOR, DEFAULT_OUTPUT};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "placeholder-icons",
    about = "Generate solid-color placeholder PNG icons"
)]
struct Args {
    /// Output directory. It must already exist.
    #[clap(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// PNG icon sizes to generate, each written as icon{SIZE}.png
    #[clap(
        short,
        long,
        value_delimiter = ',',
        value_name = "SIZES",
        default_value = "16,48,128"
    )]
    sizes: Vec<u32>,

    /// The icon color (CSS color format, must be opaque)
    #[clap(short, long, default_value = DEFAULT_COLOR)]
    color: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    icon_gen::generate_icons(&icon_gen::Args {
        output: args.output,
        sizes: args.sizes,
        color: args.color,
    })?;

    Ok(())
}
