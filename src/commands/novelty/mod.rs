//! Novelty Commands
//!
//! Easter eggs that live in the registry's open table rather than the
//! builtin enum, registered at startup the same way a host plugin would be.

mod calc;
mod cowsay;
mod figlet;
mod fortune;
mod matrix;
mod neofetch;
mod snake;
mod sudo;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::registry::CommandRegistry;
use super::types::CommandContext;

pub use calc::CalcCommand;
pub use cowsay::CowsayCommand;
pub use figlet::FigletCommand;
pub use fortune::FortuneCommand;
pub use matrix::MatrixCommand;
pub use neofetch::NeofetchCommand;
pub use snake::SnakeCommand;
pub use sudo::SudoCommand;

pub fn register_novelty(registry: &mut CommandRegistry) {
    registry.register(Box::new(NeofetchCommand));
    registry.register(Box::new(CowsayCommand));
    registry.register(Box::new(MatrixCommand));
    registry.register(Box::new(CalcCommand));
    registry.register(Box::new(FigletCommand));
    registry.register(Box::new(SnakeCommand));
    registry.register(Box::new(FortuneCommand));
    registry.register(Box::new(SudoCommand));
}

/// Randomness seeded from the session clock, so a given moment always
/// produces the same output.
fn session_rng(ctx: &CommandContext<'_>) -> StdRng {
    StdRng::seed_from_u64(ctx.now.timestamp() as u64)
}
