//! npm (simulated)
//!
//! Reads `package.json` from the working directory, falling back to the
//! root, and answers with canned output. Nothing is installed or run.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::commands::{Command, CommandContext};
use crate::output::{OutputKind, OutputLine};

pub struct NpmCommand;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct PackageJson {
    name: String,
    version: String,
    scripts: IndexMap<String, String>,
    dependencies: IndexMap<String, String>,
    dev_dependencies: IndexMap<String, String>,
}

fn load_package(ctx: &CommandContext<'_>) -> Result<PackageJson, OutputLine> {
    let text = ctx
        .read_text("package.json")
        .or_else(|_| ctx.read_text("/package.json"))
        .map_err(|_| OutputLine::error("npm ERR! enoent Could not read package.json: no such file or directory"))?;
    serde_json::from_str(&text).map_err(|e| OutputLine::error(format!("npm ERR! JSON.parse {}", e)))
}

fn run_script(pkg: &PackageJson, script: &str) -> Vec<OutputLine> {
    let Some(command) = pkg.scripts.get(script) else {
        return vec![
            OutputLine::error(format!("npm ERR! Missing script: \"{}\"", script)),
            OutputLine::error("npm ERR! To see a list of scripts, run:"),
            OutputLine::error("npm ERR!   npm run"),
        ];
    };

    let mut out = vec![
        OutputLine::output(format!("> {}@{} {}", pkg.name, pkg.version, script)),
        OutputLine::output(format!("> {}", command)),
        OutputLine::output(""),
    ];
    let tail: &[&str] = if command.contains("test") {
        &[" ✓ src/utils/format.test.ts (3)", "", " Test Files  1 passed (1)", "      Tests  3 passed (3)"]
    } else if command.contains("vite build") {
        &["vite v5.0.0 building for production...", "✓ 42 modules transformed.", "dist/index.html   0.46 kB", "✓ built in 1.21s"]
    } else if command.contains("vite") {
        &["  VITE v5.0.0  ready in 312 ms", "", "  ➜  Local:   http://localhost:5173/"]
    } else {
        &["Done."]
    };
    out.extend(tail.iter().map(|l| OutputLine::output(*l)));
    if let Some(last) = out.last_mut() {
        last.kind = OutputKind::Success;
    }
    out
}

fn list_scripts(pkg: &PackageJson) -> Vec<OutputLine> {
    if pkg.scripts.is_empty() {
        return vec![OutputLine::output(format!("No scripts defined in {}@{}", pkg.name, pkg.version))];
    }
    let mut out = vec![OutputLine::output(format!("Scripts available in {}@{} via `npm run-script`:", pkg.name, pkg.version))];
    for (name, command) in &pkg.scripts {
        out.push(OutputLine::output(format!("  {}", name)));
        out.push(OutputLine::output(format!("    {}", command)));
    }
    out
}

fn list_dependencies(pkg: &PackageJson) -> Vec<OutputLine> {
    let mut out = vec![OutputLine::output(format!("{}@{} /", pkg.name, pkg.version))];
    let all: Vec<(&String, &String)> = pkg.dependencies.iter().chain(pkg.dev_dependencies.iter()).collect();
    for (i, (name, version)) in all.iter().enumerate() {
        let connector = if i + 1 == all.len() { "└──" } else { "├──" };
        out.push(OutputLine::output(format!("{} {}@{}", connector, name, version.trim_start_matches(['^', '~']))));
    }
    out
}

impl Command for NpmCommand {
    fn name(&self) -> &'static str {
        "npm"
    }

    fn description(&self) -> &'static str {
        "Node package manager (simulated)"
    }

    fn usage(&self) -> &'static str {
        "npm <run [script]|ls|install [pkg]|-v>"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Vec<OutputLine> {
        let args: Vec<&str> = ctx.args.iter().map(String::as_str).collect();
        match args.as_slice() {
            ["-v"] | ["--version"] => {
                let version = ctx.env.get("NPM_VERSION").map(String::as_str).unwrap_or("10.2.4");
                vec![OutputLine::output(version)]
            }
            [] | ["help"] | ["--help"] => vec![
                OutputLine::output(format!("Usage: {}", self.usage())),
                OutputLine::output("All commands are simulated; nothing touches the network."),
            ],
            ["run"] | ["run-script"] => match load_package(ctx) {
                Ok(pkg) => list_scripts(&pkg),
                Err(line) => vec![line],
            },
            ["run", script, ..] | ["run-script", script, ..] => match load_package(ctx) {
                Ok(pkg) => run_script(&pkg, script),
                Err(line) => vec![line],
            },
            ["start"] | ["test"] | ["build"] => match load_package(ctx) {
                Ok(pkg) => run_script(&pkg, if args[0] == "start" { "dev" } else { args[0] }),
                Err(line) => vec![line],
            },
            ["ls"] | ["list"] => match load_package(ctx) {
                Ok(pkg) => list_dependencies(&pkg),
                Err(line) => vec![line],
            },
            ["install"] | ["i"] | ["ci"] => vec![
                OutputLine::output(""),
                OutputLine::success("added 142 packages, and audited 143 packages in 2s"),
                OutputLine::output("found 0 vulnerabilities"),
            ],
            ["install", pkg, ..] | ["i", pkg, ..] => vec![
                OutputLine::output(""),
                OutputLine::success(format!("added 1 package ({}), and audited 144 packages in 1s", pkg)),
                OutputLine::output("found 0 vulnerabilities"),
            ],
            [other, ..] => vec![OutputLine::error(format!("Unknown command: \"{}\"", other))],
        }
    }
}
