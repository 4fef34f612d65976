//! Command-line front end for building slideshow decks.
//!
//! With no arguments the `basic` profile runs against `./images` and writes
//! `presentation_from_images.pptx`.
//!
//! ```sh
//! picdeck --profile show --images photos --music tracks -o trip.pptx
//! ```

use clap::{Parser, ValueEnum};
use env_logger::Env;
use picdeck::deck::{DeckOverrides, Profile, TitleLayout, build_deck};
use std::path::PathBuf;
use std::process::ExitCode;

/// Build a slideshow presentation from a folder of images
#[derive(Parser, Debug)]
#[command(name = "picdeck", version)]
struct Args {
    /// Preset to start from
    #[arg(long, value_enum)]
    profile: Option<ProfileArg>,

    /// YAML file with settings applied on top of the profile
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Root folder of the image tree
    #[arg(long, value_name = "DIR")]
    images: Option<PathBuf>,

    /// Folder searched for a background track
    #[arg(long, value_name = "DIR", conflicts_with = "no_music")]
    music: Option<PathBuf>,

    /// Do not embed music
    #[arg(long)]
    no_music: bool,

    /// Output .pptx file, overwritten if present
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Advance every slide after this many milliseconds (0 disables)
    #[arg(long, value_name = "MS")]
    advance_ms: Option<u32>,

    /// Layout for folder title slides
    #[arg(long, value_enum)]
    title_layout: Option<TitleLayoutArg>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Profile options for CLI
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ProfileArg {
    /// Images only, 4:3, no transitions
    Basic,
    /// 16:9 with background music and auto-advance
    Show,
}

impl From<ProfileArg> for Profile {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Basic => Profile::Basic,
            ProfileArg::Show => Profile::Show,
        }
    }
}

/// Title slide layout options for CLI
#[derive(Debug, Clone, Copy, ValueEnum)]
enum TitleLayoutArg {
    /// Text in the layout's title placeholder
    TitleOnly,
    /// Bold text box on a blank slide
    Blank,
}

impl From<TitleLayoutArg> for TitleLayout {
    fn from(arg: TitleLayoutArg) -> Self {
        match arg {
            TitleLayoutArg::TitleOnly => TitleLayout::TitleOnly,
            TitleLayoutArg::Blank => TitleLayout::Blank,
        }
    }
}

impl Args {
    fn overrides(&self) -> DeckOverrides {
        DeckOverrides {
            profile: self.profile.map(Into::into),
            images_dir: self.images.clone(),
            music_dir: self.music.clone(),
            no_music: self.no_music,
            output: self.output.clone(),
            advance_after_ms: self.advance_ms,
            title_layout: self.title_layout.map(Into::into),
            ..Default::default()
        }
    }
}

fn run(args: &Args) -> picdeck::Result<()> {
    let file = match &args.config {
        Some(path) => DeckOverrides::load(path)?,
        None => DeckOverrides::default(),
    };
    let config = file.merge(args.overrides()).resolve()?;

    let report = build_deck(&config)?;
    if report.failed_items > 0 {
        log::warn!("{} item(s) were skipped because of errors", report.failed_items);
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        },
    }
}
