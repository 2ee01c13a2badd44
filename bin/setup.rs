use crate::{game::Game, io::Io};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::io::{self, Read, Write};
use std::str::FromStr;

/// The reason why parsing [`Setup`] failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse game setup")]
pub struct ParseSetupError(ron::de::SpannedError);

/// Runtime configuration for a [`Game`].
#[derive(Debug, Display, Clone, Eq, PartialEq, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{}", "ron::ser::to_string(self).unwrap()")]
#[serde(deny_unknown_fields)]
pub struct Setup {
    /// The name of the player with the white pawns.
    #[serde(default)]
    #[cfg_attr(test, strategy(proptest::option::of("[A-Za-z0-9 ]+")))]
    pub white: Option<String>,

    /// The name of the player with the black pawns.
    #[serde(default)]
    #[cfg_attr(test, strategy(proptest::option::of("[A-Za-z0-9 ]+")))]
    pub black: Option<String>,

    /// The keyword that ends the game.
    #[serde(default = "Setup::default_exit")]
    #[cfg_attr(test, strategy("[A-Za-z0-9]+"))]
    pub exit: String,
}

impl Default for Setup {
    fn default() -> Self {
        Setup {
            white: None,
            black: None,
            exit: Setup::default_exit(),
        }
    }
}

impl FromStr for Setup {
    type Err = ParseSetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}

impl Setup {
    fn default_exit() -> String {
        "exit".into()
    }

    /// Builds the [`Game`], asking for the names of players that were left out.
    pub fn resolve<W: Write, R: Read>(self, io: &mut Io<W, R>) -> io::Result<Game> {
        let white = match self.white {
            Some(name) => name,
            None => {
                io.send("First Player's name:")?;
                io.recv()?
            }
        };

        let black = match self.black {
            Some(name) => name,
            None => {
                io.send("Second Player's name:")?;
                io.recv()?
            }
        };

        Ok(Game::new(white, black, self.exit))
    }
}
