use anyhow::Result;
use clap::Parser;
use memo_icon_gen::icon_gen;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "memo-icon-gen",
    version,
    about = "Draw the memo + calendar app icon and save it as a 1024x1024 PNG"
)]
struct Args {
    /// Output file. Defaults to assets/icon/app_icon.png inside the crate.
    #[clap(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    icon_gen::generate_app_icon(icon_gen::Args {
        output: args.output,
    })
}
