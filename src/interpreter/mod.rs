//! Interpreter module
//!
//! Line-level machinery used by the shell session: word splitting and
//! variable expansion, alias expansion, history, the conversational
//! fallback and autocomplete.

pub mod alias_expansion;
pub mod completion;
pub mod fallback;
pub mod history;
pub mod word_expansion;

pub use alias_expansion::expand_alias;
pub use completion::{command_suggestions, file_suggestions, suggest};
pub use history::{History, HistoryDirection};
pub use word_expansion::split_words;
