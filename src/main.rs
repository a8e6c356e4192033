use anyhow::{Context, Result};
use clap::Parser;

use accessible_games::cli::Cli;
use accessible_games::logging::{self, LogLevel};
use accessible_games::{InputOutcome, Options, Player, Session};

/// Volume step for the 'v' and 'V' keys, in percent
const VOLUME_STEP: f32 = 10.0;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(LogLevel::from_verbosity(cli.verbose)).context("Failed to install logger")?;
    log::info!("accessible-games {} starting", env!("CARGO_PKG_VERSION"));

    let options = cli.merge_into_options(Options::default())?;
    let mut volume = cli.initial_volume()?.unwrap_or(100.0);

    let mut session = Session::new(options);
    session.load_default().context("Failed to load session")?;

    let mut players = Vec::with_capacity(cli.files.len());
    for file in &cli.files {
        let path = session.resource_path(file);
        let mut player = Player::new(&session, &path)
            .with_context(|| format!("Failed to load {}", path.display()))?;
        player.set_volume(volume)?;
        log::info!("Player {}: {}", players.len() + 1, path.display());
        players.push(player);
    }

    let prompt = cli.prompt.clone().unwrap_or_else(|| {
        format!(
            "{} sounds loaded. Press a number to play.",
            players.len()
        )
    });
    if !session.speak(&prompt) {
        log::warn!("Speech unavailable, continuing without it");
    }

    loop {
        let key = match session.input()? {
            InputOutcome::Key(key) => key,
            InputOutcome::QuitRequested => break,
        };
        log::debug!("Key: {}", key);

        match key.as_str() {
            "return" | "escape" => break,
            "s" => {
                for player in players.iter_mut().filter(|p| p.is_busy()) {
                    player.stop()?;
                }
            }
            "v" | "V" => {
                volume = if key == "v" {
                    (volume - VOLUME_STEP).max(0.0)
                } else {
                    (volume + VOLUME_STEP).min(100.0)
                };
                for player in &mut players {
                    player.set_volume(volume)?;
                }
                session.speak(&format!("volume {}", volume.round()));
            }
            digit => {
                let Some(player) = digit
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|index| players.get_mut(index))
                else {
                    continue;
                };
                toggle(player)?;
            }
        }
    }

    drop(players);
    session.exit()?;
    log::info!("accessible-games exiting");
    Ok(())
}

/// Pause a playing player, otherwise play it
fn toggle(player: &mut Player) -> accessible_games::Result<()> {
    if player.is_busy() && !player.is_paused() {
        player.pause()
    } else {
        player.play()
    }
}
