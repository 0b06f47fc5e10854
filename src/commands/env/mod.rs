// src/commands/env/mod.rs
use crate::commands::{Command, CommandContext};
use crate::output::OutputLine;

pub struct EnvCommand;

impl Command for EnvCommand {
    fn name(&self) -> &'static str {
        "env"
    }

    fn description(&self) -> &'static str {
        "Print environment variables"
    }

    fn usage(&self) -> &'static str {
        "env [NAME...]"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Vec<OutputLine> {
        if ctx.wants_help() {
            return vec![OutputLine::output(format!("Usage: {}", self.usage()))];
        }

        // printenv 风格：只打印指定的变量
        if !ctx.args.is_empty() {
            return ctx
                .args
                .iter()
                .filter_map(|name| ctx.env.get(name))
                .map(|value| OutputLine::output(value.clone()))
                .collect();
        }

        ctx.env.iter().map(|(key, value)| OutputLine::output(format!("{}={}", key, value))).collect()
    }
}
