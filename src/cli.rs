use std::path::PathBuf;

use env_logger::Env;
use log::LevelFilter;

/// Set up CLI
pub fn init<T: clap::Parser>() -> color_eyre::Result<T> {
    color_eyre::install()?;
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .format_timestamp(None)
        .parse_env(Env::new().filter("TEXT2IMG_LOG"))
        .init();
    let args = T::parse();
    Ok(args)
}

/// OPTIONS
#[derive(clap::Parser)]
#[clap(version, about)]
pub struct Options {
    /// Path to the font file used for every render
    #[clap(long, default_value = "arial.ttf")]
    pub font: PathBuf,
    /// Font size in pixels
    #[clap(long, default_value_t = 20)]
    pub font_size: u32,
    /// Left/right margin in pixels
    #[clap(long, default_value_t = 10)]
    pub margin: u32,
    /// Initial canvas width in pixels
    #[clap(long, default_value_t = 800)]
    pub width: u32,
    /// Initial canvas height in pixels
    #[clap(long, default_value_t = 600)]
    pub height: u32,
    /// Base name for the numbered output files
    #[clap(long, default_value = "output_image")]
    pub out_base: String,
    /// Render a single entry instead of starting the interactive loop
    #[clap(long)]
    pub text: Option<String>,
    /// Output path for --text. Defaults to "<out-base>_1.jpg"
    #[clap(long, requires = "text")]
    pub out: Option<PathBuf>,
}
