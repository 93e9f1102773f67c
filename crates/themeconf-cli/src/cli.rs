use std::path::PathBuf;

use clap::Parser;
use themeconf::{MergeOptions, CONFIG_FILE_NAME};

#[derive(Debug, Parser)]
#[command(name = "themeconf", version)]
#[command(about = "Merge a theme configuration over the default theme and print it as JSON")]
pub struct Cli {
    /// Directory containing the theme configuration and its images
    pub base_dir: PathBuf,

    /// Name of the configuration file inside BASE_DIR
    #[arg(short, long, env = "THEMECONF_FILE", default_value = CONFIG_FILE_NAME)]
    pub file: String,

    /// Write the JSON to this file instead of stdout
    #[arg(short, long, env = "THEMECONF_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Print the JSON on a single line
    #[arg(long)]
    pub compact: bool,

    /// Log progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn merge_options(&self) -> MergeOptions {
        MergeOptions {
            config_file_name: self.file.clone(),
        }
    }
}
