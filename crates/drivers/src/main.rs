mod config;
mod logging;
mod ui;

use std::process::ExitCode;

use config::AppConfig;
use wardrobe_adapters::{
    present_catalog, present_outfit, ImageCrateRenderer, RodioAudioCue, SilentAudioCue,
    StdRandomSource, WalkdirCatalogSource,
};
use wardrobe_application::{
    ApplicationService, AudioCue, LoadWardrobeCommand, PickOutfitCommand, RandomSource,
};
use wardrobe_domain::{Category, Wardrobe};

fn main() -> ExitCode {
    logging::init_logging();
    let args: Vec<String> = std::env::args().collect();

    let command = parse_command(&args);
    match run_command(command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CommandError::Usage(msg)) => {
            eprintln!("{msg}");
            print_usage();
            ExitCode::from(2)
        }
        Err(CommandError::Runtime(msg)) => {
            eprintln!("{msg}");
            ExitCode::from(1)
        }
    }
}

fn build_application_service(config: &AppConfig) -> ApplicationService {
    let audio: Box<dyn AudioCue> = if config.sound_enabled {
        Box::new(RodioAudioCue)
    } else {
        Box::new(SilentAudioCue)
    };
    let random: Box<dyn RandomSource> = match config.random_seed {
        Some(seed) => Box::new(StdRandomSource::seeded(seed)),
        None => Box::new(StdRandomSource::from_entropy()),
    };

    ApplicationService::new(
        Box::new(WalkdirCatalogSource),
        Box::new(ImageCrateRenderer),
        audio,
        random,
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Ui,
    List,
    Outfit,
}

#[derive(Debug, Clone)]
enum CommandError {
    Usage(String),
    Runtime(String),
}

fn parse_command(args: &[String]) -> Result<Command, CommandError> {
    if args.len() <= 1 {
        return Ok(Command::Ui);
    }
    if args.len() > 2 {
        return Err(CommandError::Usage(format!(
            "unexpected argument: {}",
            args[2]
        )));
    }

    match args[1].as_str() {
        "ui" => Ok(Command::Ui),
        "list" => Ok(Command::List),
        "outfit" => Ok(Command::Outfit),
        other => Err(CommandError::Usage(format!("unknown command: {other}"))),
    }
}

fn load_wardrobe(
    service: &ApplicationService,
    config: &AppConfig,
) -> Result<Wardrobe, CommandError> {
    service
        .load_wardrobe(LoadWardrobeCommand {
            tops_folder: config.tops_dir.clone(),
            bottoms_folder: config.bottoms_dir.clone(),
        })
        .map_err(|error| CommandError::Runtime(format!("failed to load wardrobe: {error}")))
}

fn run_command(command: Result<Command, CommandError>) -> Result<(), CommandError> {
    let command = command?;
    let config = AppConfig::load().map_err(CommandError::Runtime)?;
    let mut service = build_application_service(&config);
    let mut wardrobe = load_wardrobe(&service, &config)?;

    match command {
        Command::Ui => {
            ui::launch_window(&mut service, wardrobe, &config).map_err(CommandError::Runtime)
        }
        Command::List => {
            for category in Category::ALL {
                for row in present_catalog(wardrobe.sequence(category)) {
                    println!("{row}");
                }
            }
            Ok(())
        }
        Command::Outfit => {
            let outfit = service
                .pick_outfit(&mut wardrobe, PickOutfitCommand)
                .map_err(|error| CommandError::Runtime(format!("outfit failed: {error}")))?;
            println!("{}", present_outfit(&outfit));
            Ok(())
        }
    }
}

fn print_usage() {
    println!("usage:");
    println!("  wardrobe ui");
    println!("  wardrobe list");
    println!("  wardrobe outfit");
}
