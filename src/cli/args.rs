// src/cli/args.rs
use clap::Parser;
use std::path::PathBuf;

use crate::reporting::OutputFormat;

#[derive(Parser)]
#[command(name = "dicoup", version, about = "DI-aware coupling analysis over CKJM class metrics")]
pub struct Cli {
    /// Base directory containing one subdirectory per project
    #[arg(long, value_name = "DIR")]
    pub projects: Option<PathBuf>,

    /// Analyzer command to run per project
    #[arg(long, value_name = "CMD")]
    pub command: Option<String>,

    /// File extension to analyze with CKJM
    #[arg(long, short = 'e', value_name = "EXT")]
    pub extension: Option<String>,

    /// Report output path
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}
