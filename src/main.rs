use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;
use std::process::ExitCode;

use tbox_cli::cli::commands::{configure, interactive, translate};
use tbox_cli::cli::{Args, Command, exit_code};
use tbox_cli::config::ResolveOptions;
use tbox_cli::translation::print_languages;
use tbox_cli::{logging, output, ui};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    output::init(output::OutputConfig::from_flags(args.quiet, args.no_color));
    logging::init(args.verbose);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ui::print_error(format!("{err:#}"));
            ExitCode::from(exit_code(&err) as u8)
        }
    }
}

async fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        Some(Command::Interactive { from, to, endpoint }) => {
            interactive::run_interactive(ResolveOptions { from, to, endpoint }).await?;
        }
        None => {
            let resolve = ResolveOptions {
                from: args.from,
                to: args.to,
                endpoint: args.endpoint,
            };

            if args.text.is_none() && args.file.is_none() && std::io::stdin().is_terminal() {
                return interactive::run_interactive(resolve).await;
            }

            let options = translate::TranslateOptions {
                text: args.text,
                file: args.file,
                resolve,
                copy: args.copy,
                speak: args.speak,
            };
            translate::run_translate(options).await?;
        }
    }

    Ok(())
}
