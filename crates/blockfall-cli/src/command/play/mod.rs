use std::{io, time::Duration};

use blockfall_engine::Game;
use crossterm::{
    event::{DisableFocusChange, EnableFocusChange},
    execute,
};

use crate::{command::play::app::PlayApp, tui::Tui};

mod app;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Milliseconds between gravity steps
    // Zero would make the event loop emit ticks back to back and starve
    // rendering and input, so the flag refuses it outright
    #[clap(long, default_value_t = 300, value_parser = clap::value_parser!(u64).range(1..))]
    tick_interval_ms: u64,
    /// Seed for the piece sequence (random when omitted)
    #[clap(long)]
    seed: Option<u64>,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        tick_interval_ms,
        seed,
    } = arg;

    let game = match seed {
        Some(seed) => Game::with_seed(*seed),
        None => Game::new(),
    };
    let mut app = PlayApp::new(game, Duration::from_millis(*tick_interval_ms));

    // Focus events let the game pause itself when the terminal loses focus
    execute!(io::stdout(), EnableFocusChange)?;
    let result = Tui::new().run(&mut app);
    execute!(io::stdout(), DisableFocusChange)?;
    result
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::command::CommandArgs;

    #[test]
    fn test_tick_interval_defaults_to_300ms() {
        let args = CommandArgs::try_parse_from(["blockfall"]).unwrap();
        assert_eq!(args.play.tick_interval_ms, 300);
        assert_eq!(args.play.seed, None);
    }

    #[test]
    fn test_tick_interval_accepts_positive_values() {
        let args =
            CommandArgs::try_parse_from(["blockfall", "--tick-interval-ms", "120", "--seed", "7"])
                .unwrap();
        assert_eq!(args.play.tick_interval_ms, 120);
        assert_eq!(args.play.seed, Some(7));
    }

    #[test]
    fn test_zero_tick_interval_is_rejected() {
        let result = CommandArgs::try_parse_from(["blockfall", "--tick-interval-ms", "0"]);
        assert!(result.is_err());
    }
}
