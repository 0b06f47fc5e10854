//! Base Tree Seeds
//!
//! The default portfolio tree and loading a base tree from a data file.

use std::path::Path;

use serde::Deserialize;

use super::types::{Entity, File, Folder};
use crate::config::{read_to_string, ConfigError};

/// Either a root folder or a bare list of root entries.
#[derive(Deserialize)]
#[serde(untagged)]
enum TreeSeed {
    Root(Folder),
    Entries(Vec<Entity>),
}

impl From<TreeSeed> for Folder {
    fn from(seed: TreeSeed) -> Self {
        match seed {
            TreeSeed::Root(folder) => folder,
            TreeSeed::Entries(children) => Folder::with_children("", children),
        }
    }
}

/// Load a base tree from `.json`, `.yaml`/`.yml` or `.toml`.
pub fn load_tree(path: &Path) -> Result<Folder, ConfigError> {
    let text = read_to_string(path)?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default().to_ascii_lowercase();
    parse_tree(&text, &ext)
}

pub fn parse_tree(text: &str, format: &str) -> Result<Folder, ConfigError> {
    let seed: TreeSeed = match format {
        "json" => serde_json::from_str(text)?,
        "yaml" | "yml" => serde_yaml::from_str(text)?,
        "toml" => toml::from_str(text)?,
        other => return Err(ConfigError::UnsupportedFormat(other.to_string())),
    };
    Ok(seed.into())
}

fn file(name: &str, content: &str) -> Entity {
    Entity::File(File::new(name, content))
}

fn folder(name: &str, children: Vec<Entity>) -> Entity {
    Entity::Folder(Folder::with_children(name, children))
}

/// Tree shown when the host supplies none.
pub fn default_tree() -> Folder {
    Folder::with_children(
        "",
        vec![
            file(
                "README.md",
                "# Portfolio\n\nWelcome! This terminal runs on an in-memory file system.\n\nTry `ls`, `cat about.md`, `tree` or `help`.\n",
            ),
            file(
                "about.md",
                "# About\n\nSystems programmer who likes parsers, shells and small tools.\nCurrently exploring copy-on-write data structures.\n",
            ),
            file("contact.txt", "email: hello@example.dev\ngithub: github.com/example\n"),
            file(
                "package.json",
                r#"{
  "name": "portfolio",
  "version": "1.0.0",
  "scripts": {
    "dev": "vite",
    "build": "tsc && vite build",
    "test": "vitest run"
  },
  "dependencies": {
    "react": "^18.2.0",
    "react-dom": "^18.2.0"
  },
  "devDependencies": {
    "typescript": "^5.3.3",
    "vite": "^5.0.0"
  }
}
"#,
            ),
            folder(
                "projects",
                vec![
                    file(
                        "terminal.md",
                        "# Terminal\n\nA shell over a virtual file system with aliases, history and autocomplete.\n",
                    ),
                    file("editor.md", "# Editor\n\nA code editor with syntax highlighting and tabs.\n"),
                ],
            ),
            folder(
                "src",
                vec![
                    file(
                        "main.ts",
                        "import { boot } from './boot';\n\n// TODO: lazy-load the editor\nboot(document.getElementById('root'));\n",
                    ),
                    file(
                        "boot.ts",
                        "export function boot(el: HTMLElement | null) {\n  if (!el) throw new Error('missing root');\n  el.dataset.ready = 'true';\n}\n",
                    ),
                    folder(
                        "utils",
                        vec![file(
                            "format.ts",
                            "export const pad = (n: number) => n.toString().padStart(2, '0');\n",
                        )],
                    ),
                ],
            ),
            file(".profile", "export EDITOR=vim\n"),
        ],
    )
}
