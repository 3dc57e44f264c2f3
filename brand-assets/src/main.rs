//! Brand asset generator
//!
//! Builds the logo variants, app icons, favicon and PWA badges of a site from
//! a single black logo. Every subcommand works with no flags, reading and
//! writing the fixed file names relative to `--dir`.

mod config;
mod pipeline;

use anyhow::Result;
use clap::{Parser, Subcommand};
use config::Config;
use pipeline::Workspace;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "brand-assets",
    version,
    about = "Generate logo variants, icons and favicons from a source logo"
)]
struct Args {
    /// Base directory for all relative input and output paths.
    #[clap(short, long, value_name = "DIR", default_value = ".")]
    dir: PathBuf,

    /// TOML file overriding the built-in defaults.
    #[clap(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
enum Command {
    /// Recolor the dark logo white, keeping transparency.
    WhiteLogo,

    /// Center the logo on light and dark square canvases.
    SquareLogos,

    /// Resize the square logos into the full icon family.
    Icons,

    /// Pack several sizes of the light square logo into favicon.ico.
    Favicon,

    /// Draw the word mark badge icons used by the PWA manifest.
    PwaIcons,

    /// Run every step in dependency order.
    All,

    /// Print the effective configuration as TOML.
    ShowConfig,
}

pub fn init_logger() {
    use std::io::Write;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let ts = cutil::time::local_now("%H:%M:%S");

            writeln!(
                buf,
                "[{} {style}{}{style:#} {} {}] {}",
                ts,
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}

fn run(ws: &Workspace, config: &Config, command: Command) -> Result<()> {
    match command {
        Command::WhiteLogo => {
            pipeline::white_logo(ws, &config.white_logo)?;
        }
        Command::SquareLogos => {
            let out = pipeline::square_logos(ws, &config.square)?;
            log::debug!("light: {}, dark: {}", out.light.display(), out.dark.display());
        }
        Command::Icons => {
            let stats = pipeline::icons(ws, &config.icons)?;
            log::debug!("{} icons, {} bytes", stats.count, stats.total_bytes);
        }
        Command::Favicon => {
            pipeline::favicon(ws, &config.favicon)?;
        }
        Command::PwaIcons => {
            pipeline::pwa_icons(ws, &config.pwa)?;
        }
        Command::All => {
            for step in [
                Command::WhiteLogo,
                Command::SquareLogos,
                Command::Icons,
                Command::Favicon,
                Command::PwaIcons,
            ] {
                log::info!("step {step:?}");
                run(ws, config, step)?;
                println!();
            }
            println!("✅ All assets generated!");
        }
        Command::ShowConfig => {
            print!("{}", config.to_toml()?);
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    init_logger();

    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;
    let ws = Workspace::new(&args.dir);

    log::debug!("{args:?}");
    run(&ws, &config, args.command)
}
