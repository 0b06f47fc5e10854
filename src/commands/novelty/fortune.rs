use rand::seq::SliceRandom;

use super::session_rng;
use crate::commands::{Command, CommandContext};
use crate::output::OutputLine;

pub struct FortuneCommand;

const FORTUNES: &[&str] = &[
    "There are two hard things in computer science: cache invalidation, naming things, and off-by-one errors.",
    "Weeks of coding can save you hours of planning.",
    "It works on my machine.",
    "A clean journal is a happy journal.",
    "Premature optimization is the root of all evil.",
    "Any sufficiently advanced bug is indistinguishable from a feature.",
    "Talk is cheap. Show me the code.",
    "The best way to get a project done faster is to start sooner.",
];

impl Command for FortuneCommand {
    fn name(&self) -> &'static str {
        "fortune"
    }

    fn description(&self) -> &'static str {
        "Print a random adage"
    }

    fn usage(&self) -> &'static str {
        "fortune"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Vec<OutputLine> {
        let mut rng = session_rng(ctx);
        let fortune = FORTUNES.choose(&mut rng).copied().unwrap_or_default();
        vec![OutputLine::output(fortune)]
    }
}
