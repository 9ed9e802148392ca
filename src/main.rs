//! Kiko Quest entry point
//!
//! Loads settings and the station catalog, then lets the autopilot play a
//! headless session at the target frame rate and reports how it went.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use kiko_quest::audio::{AudioManager, LogAudio};
use kiko_quest::consts::TARGET_FPS;
use kiko_quest::renderer::{Fonts, Starfield, compose};
use kiko_quest::sim::SessionPhase;
use kiko_quest::{App, AppStatus, Autopilot, Catalog, CatalogError, Screen, Settings};

/// Share of quiz answers the demo pilot gets right
const DEMO_ACCURACY: f64 = 0.8;

fn load_catalog(settings: &Settings) -> Result<Catalog, CatalogError> {
    match &settings.catalog_path {
        Some(path) => {
            log::info!("Loading station catalog from {}", path.display());
            Catalog::from_path(path)
        }
        None => Catalog::builtin(),
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Kiko Quest (headless demo) starting...");

    let settings = Settings::load();
    let catalog = match load_catalog(&settings) {
        Ok(catalog) => catalog,
        Err(err) => {
            log::error!("Cannot load station catalog: {err}");
            return ExitCode::FAILURE;
        }
    };
    log::info!(
        "{} stations, {} questions",
        catalog.len(),
        catalog.total_questions()
    );

    let seed = settings.seed.unwrap_or_else(time_seed);
    let mut app = App::new(catalog, seed);
    let mut pilot = Autopilot::new(seed, DEMO_ACCURACY);
    let mut audio = AudioManager::new(LogAudio, &settings);
    let mut starfield = if settings.starfield_enabled() {
        Starfield::default()
    } else {
        Starfield::frozen()
    };
    audio.start_music();

    let frames = u64::from(settings.demo_seconds) * u64::from(TARGET_FPS);
    let mut frame = 0;
    while frame < frames {
        let input = pilot.drive(&app);
        if app.frame(&input) == AppStatus::Quit {
            break;
        }
        let events = app.drain_events();
        audio.handle_frame(&events, app.quiz_open());
        if !matches!(app.screen(), Screen::Rules { .. }) {
            starfield.update();
        }
        frame += 1;

        if app.game().phase() == SessionPhase::Won {
            break;
        }
    }

    let last_frame = compose(&app, &starfield, &Fonts::headless());
    for text in last_frame.iter().filter_map(|cmd| cmd.as_text()) {
        log::info!("screen: {text}");
    }

    let game = app.game();
    log::info!(
        "Demo ended after {:.1}s: {:?}, {}/{} stations, {} correct answers",
        frame as f64 / f64::from(TARGET_FPS),
        game.phase(),
        game.progress.completed_count(),
        game.progress.station_count(),
        game.progress.total_correct()
    );
    ExitCode::SUCCESS
}
