use indexmap::IndexMap;

use crate::commands::{Command, CommandContext};
use crate::output::OutputLine;

pub struct FigletCommand;

const HEIGHT: usize = 5;

lazy_static::lazy_static! {
    static ref FONT: IndexMap<char, [&'static str; HEIGHT]> = IndexMap::from([
        ('A', [" ### ", "#   #", "#####", "#   #", "#   #"]),
        ('B', ["#### ", "#   #", "#### ", "#   #", "#### "]),
        ('C', [" ####", "#    ", "#    ", "#    ", " ####"]),
        ('D', ["#### ", "#   #", "#   #", "#   #", "#### "]),
        ('E', ["#####", "#    ", "#### ", "#    ", "#####"]),
        ('F', ["#####", "#    ", "#### ", "#    ", "#    "]),
        ('G', [" ####", "#    ", "#  ##", "#   #", " ####"]),
        ('H', ["#   #", "#   #", "#####", "#   #", "#   #"]),
        ('I', ["###", " # ", " # ", " # ", "###"]),
        ('J', ["  ###", "   # ", "   # ", "#  # ", " ##  "]),
        ('K', ["#   #", "#  # ", "###  ", "#  # ", "#   #"]),
        ('L', ["#    ", "#    ", "#    ", "#    ", "#####"]),
        ('M', ["#   #", "## ##", "# # #", "#   #", "#   #"]),
        ('N', ["#   #", "##  #", "# # #", "#  ##", "#   #"]),
        ('O', [" ### ", "#   #", "#   #", "#   #", " ### "]),
        ('P', ["#### ", "#   #", "#### ", "#    ", "#    "]),
        ('Q', [" ### ", "#   #", "# # #", "#  # ", " ## #"]),
        ('R', ["#### ", "#   #", "#### ", "#  # ", "#   #"]),
        ('S', [" ####", "#    ", " ### ", "    #", "#### "]),
        ('T', ["#####", "  #  ", "  #  ", "  #  ", "  #  "]),
        ('U', ["#   #", "#   #", "#   #", "#   #", " ### "]),
        ('V', ["#   #", "#   #", "#   #", " # # ", "  #  "]),
        ('W', ["#   #", "#   #", "# # #", "## ##", "#   #"]),
        ('X', ["#   #", " # # ", "  #  ", " # # ", "#   #"]),
        ('Y', ["#   #", " # # ", "  #  ", "  #  ", "  #  "]),
        ('Z', ["#####", "   # ", "  #  ", " #   ", "#####"]),
        ('0', [" ### ", "#  ##", "# # #", "##  #", " ### "]),
        ('1', [" # ", "## ", " # ", " # ", "###"]),
        ('2', [" ### ", "#   #", "  ## ", " #   ", "#####"]),
        ('3', ["#### ", "    #", " ### ", "    #", "#### "]),
        ('4', ["#   #", "#   #", "#####", "    #", "    #"]),
        ('5', ["#####", "#    ", "#### ", "    #", "#### "]),
        ('6', [" ### ", "#    ", "#### ", "#   #", " ### "]),
        ('7', ["#####", "    #", "   # ", "  #  ", "  #  "]),
        ('8', [" ### ", "#   #", " ### ", "#   #", " ### "]),
        ('9', [" ### ", "#   #", " ####", "    #", " ### "]),
        (' ', ["   ", "   ", "   ", "   ", "   "]),
        ('!', ["#", "#", "#", " ", "#"]),
        ('?', [" ### ", "#   #", "  ## ", "     ", "  #  "]),
        ('.', [" ", " ", " ", " ", "#"]),
        ('-', ["    ", "    ", "####", "    ", "    "]),
    ]);
}

/// Banner rows for `text`. Letters are upper-cased; characters outside the
/// font are skipped.
fn render(text: &str) -> Vec<String> {
    let glyphs: Vec<&[&str; HEIGHT]> = text.chars().filter_map(|c| FONT.get(&c.to_ascii_uppercase())).collect();
    (0..HEIGHT)
        .map(|row| {
            let line: Vec<&str> = glyphs.iter().map(|g| g[row]).collect();
            line.join(" ").trim_end().to_string()
        })
        .collect()
}

impl Command for FigletCommand {
    fn name(&self) -> &'static str {
        "figlet"
    }

    fn description(&self) -> &'static str {
        "Print text as a large banner"
    }

    fn usage(&self) -> &'static str {
        "figlet text"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Vec<OutputLine> {
        if ctx.args.is_empty() {
            return vec![OutputLine::error(format!("usage: {}", self.usage()))];
        }
        render(&ctx.args.join(" ")).into_iter().map(OutputLine::output).collect()
    }
}
