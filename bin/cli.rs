use crate::applet::Applet;
use anyhow::Error as Anyhow;
use clap::Parser;
use std::io::stderr;
use tracing::{instrument, Level};
use tracing_subscriber::fmt::layer;
use tracing_subscriber::{filter::Targets, prelude::*, registry, util::SubscriberInitExt};

/// Pawns-only chess for two players sharing a terminal.
#[derive(Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// Diagnostics printed to stderr at this level or above.
    ///
    /// Rejected moves are logged at `debug`, individual moves at `trace`.
    #[clap(short, long, global = true)]
    #[cfg_attr(not(debug_assertions), clap(default_value_t = Level::WARN))]
    #[cfg_attr(debug_assertions, clap(default_value_t = Level::INFO))]
    verbosity: Level,

    #[clap(subcommand)]
    applet: Option<Applet>,
}

impl Cli {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let filter = Targets::new()
            .with_target("cli", self.verbosity)
            .with_target("lib", self.verbosity)
            .with_default(Level::WARN);

        let writer = layer()
            .compact()
            .without_time()
            .with_target(false)
            .with_writer(stderr);

        registry().with(filter).with(writer).init();

        self.applet.unwrap_or_default().execute()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_is_played_when_no_applet_is_given() {
        let cli = Cli::try_parse_from(["cli"]).unwrap();
        assert!(cli.applet.is_none());
    }

    #[test]
    fn verbosity_is_accepted_after_the_applet() {
        let cli = Cli::try_parse_from(["cli", "play", "--verbosity", "trace"]).unwrap();
        assert_eq!(cli.verbosity, Level::TRACE);
        assert!(matches!(cli.applet, Some(Applet::Play(_))));
    }

    #[test]
    fn verbosity_must_be_a_level() {
        assert!(Cli::try_parse_from(["cli", "--verbosity", "loud"]).is_err());
    }
}
