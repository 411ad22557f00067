use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "rustyll-jsonld")]
#[command(about = "Generate schema.org JSON-LD structured data for Jekyll-style sites", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Site directory holding _config.yml (defaults to ./)
    #[arg(short, long, value_name = "DIR", global = true)]
    pub source: Option<PathBuf>,

    /// Custom configuration file, may be given more than once
    #[arg(short, long, value_name = "CONFIG_FILE", global = true)]
    pub config: Option<Vec<PathBuf>>,

    /// Override the site url from the configuration
    #[arg(long, value_name = "URL", global = true)]
    pub site_url: Option<String>,

    /// Override the baseurl from the configuration
    #[arg(short, long, value_name = "URL", global = true)]
    pub baseurl: Option<String>,

    /// Print compact JSON instead of pretty-printed
    #[arg(long, default_value_t = false, global = true)]
    pub compact: bool,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false, global = true)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false, global = true)]
    pub debug: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Print structured data for page or post files with front matter
    #[command(alias = "p")]
    Page {
        /// Markdown or HTML files to describe
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        /// Force a layout instead of reading it from front matter
        #[arg(short, long, value_name = "LAYOUT")]
        layout: Option<String>,
    },

    /// Print structured data for a page described on the command line
    #[command(alias = "i")]
    Inline {
        /// Page title
        #[arg(long)]
        title: String,

        /// Site-relative page URL, e.g. /about/
        #[arg(long, value_name = "PATH")]
        url: String,

        /// Page layout
        #[arg(short, long, value_name = "LAYOUT", default_value = "page")]
        layout: String,

        /// Publication date, required for posts
        #[arg(long, value_name = "DATE")]
        date: Option<String>,

        /// Post excerpt
        #[arg(long)]
        excerpt: Option<String>,

        /// Body text used for the word count
        #[arg(long)]
        content: Option<String>,
    },

    /// Print structured data for a sample post, static page and home page
    Sample {},
}
