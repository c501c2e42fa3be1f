//! # Card render tool
#![warn(missing_docs)]

mod cli;

use cli::opt::Options;

fn main() -> color_eyre::Result<()> {
    let opt: Options = cli::init()?;
    cli::render::run(&opt)
}
