use crate::{game::Game, io::Io, setup::Setup};
use anyhow::Error as Anyhow;
use clap::Parser;
use lib::chess::Position;
use std::io::{stdin, stdout};
use tracing::{info, instrument};

/// A game of pawns-only chess between two players sharing the console.
#[derive(Debug, Default, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    /// Game setup, e.g. `(white: Some("Alice"), black: Some("Bob"), exit: "quit")`.
    ///
    /// Player names left out are asked for on the console.
    #[clap(default_value_t)]
    setup: Setup,
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let mut io = Io::new(stdout().lock(), stdin().lock());
        io.send("Pawns-Only Chess")?;

        let game: Game = self.setup.resolve(&mut io)?;
        let outcome = game.play(&mut io, Position::default())?;
        info!(?outcome);

        io.flush()?;
        Ok(())
    }
}
