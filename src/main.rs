use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::rc::Rc;

use folio_shell::fs::seed::load_tree;
use folio_shell::{OutputKind, OutputLine, OutputSink, Shell, ShellConfig, ShellOptions};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "folio-shell")]
#[command(about = "A portfolio terminal over an in-memory file system")]
#[command(version)]
struct Cli {
    /// Run a single line and exit
    #[arg(short = 'c')]
    line: Option<String>,

    /// Shell configuration (TOML)
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Base tree to load (.json, .yaml, .yml or .toml)
    #[arg(long = "tree")]
    tree: Option<PathBuf>,

    /// Initial working directory within the tree
    #[arg(long = "cwd")]
    cwd: Option<String>,

    /// Print each output line as JSON
    #[arg(long = "json")]
    json: bool,
}

/// Writes lines to the terminal as they are appended to the session.
struct TerminalSink {
    json: bool,
}

impl OutputSink for TerminalSink {
    fn emit(&self, kind: OutputKind, text: &str) {
        // The prompt already shows the typed line.
        if kind == OutputKind::Command && !self.json {
            return;
        }
        if self.json {
            match serde_json::to_string(&OutputLine::new(kind, text)) {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("Error: {}", e),
            }
        } else if kind == OutputKind::Error {
            eprintln!("{}", text);
        } else {
            println!("{}", text);
        }
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = match cli.config.as_deref().map(ShellConfig::load).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let tree = match cli.tree.as_deref().map(load_tree).transpose() {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut shell = Shell::new(ShellOptions { config, tree, cwd: cli.cwd, registry: None });
    let _registration = shell.install_sink(Rc::new(TerminalSink { json: cli.json }));

    if let Some(line) = cli.line {
        let produced = shell.execute_command(&line);
        let failed = produced.iter().any(OutputLine::is_error);
        std::process::exit(if failed { 1 } else { 0 });
    }

    let interactive = {
        use std::io::IsTerminal;
        std::io::stdin().is_terminal()
    };
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            let prompt = shell.get_prompt();
            print!("{}@{}:{}$ ", prompt.user, shell.config().hostname, prompt.path);
            let _ = std::io::stdout().flush();
        }
        let Some(Ok(line)) = lines.next() else {
            break;
        };
        if matches!(line.trim(), "exit" | "quit") {
            break;
        }
        shell.execute_command(&line);
        for effect in shell.take_effects() {
            tracing::info!(?effect, "host effect");
        }
    }
}
