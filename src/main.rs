use clap::{crate_authors, crate_description, crate_name, crate_version, Arg, ArgAction, Command};
use gzpack::{api, config::CompressConfig};

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> miette::Result<()> {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let is_verbose = matches.get_flag("verbose");

    if is_verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::init();
    }

    api::compress_assets(&CompressConfig::default())?;

    Ok(())
}
