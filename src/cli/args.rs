use clap::{Parser, Subcommand};

use crate::translation::Language;

#[derive(Parser, Debug)]
#[command(name = "tbox")]
#[command(about = "Terminal translation box powered by the MyMemory API")]
#[command(version)]
pub struct Args {
    /// Text to translate (reads --file or stdin if not provided;
    /// opens the interactive box when stdin is a terminal)
    pub text: Option<String>,

    /// Read the text to translate from a file
    #[arg(short = 'i', long = "file", conflicts_with = "text")]
    pub file: Option<String>,

    /// Source language code (en, fr, es)
    #[arg(short = 'f', long = "from")]
    pub from: Option<Language>,

    /// Target language code (en, fr, es)
    #[arg(short = 't', long = "to")]
    pub to: Option<Language>,

    /// Translation API endpoint URL
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    /// Copy the translation to the clipboard
    #[arg(short = 'c', long)]
    pub copy: bool,

    /// Read the translation aloud
    #[arg(short = 's', long)]
    pub speak: bool,

    /// Suppress status messages
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Show debug logs on stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the interactive translation box
    Interactive {
        /// Source language code (en, fr, es)
        #[arg(short = 'f', long = "from")]
        from: Option<Language>,

        /// Target language code (en, fr, es)
        #[arg(short = 't', long = "to")]
        to: Option<Language>,

        /// Translation API endpoint URL
        #[arg(short = 'e', long)]
        endpoint: Option<String>,
    },
    /// List supported language codes
    Languages,
    /// Configure default languages
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
