//! Command/option registry: identity and lookup, no parsing logic.

use std::fmt;

use futures_util::future::BoxFuture;

use crate::error::Error;
use crate::map::ArgvMap;

/// Boxed handler invoked with the entry's attached value and the full
/// parsed map.
pub(crate) type Action = Box<dyn Fn(Option<String>, ArgvMap) -> BoxFuture<'static, ()> + Send + Sync>;

pub(crate) enum Handler {
    /// Built-in: render the help listing.
    Help,
    Action(Action),
}

/// Registration names: a single spelling or an ordered list of aliases.
pub trait Aliases {
    fn into_aliases(self) -> Vec<String>;
}

impl Aliases for &str {
    fn into_aliases(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl Aliases for String {
    fn into_aliases(self) -> Vec<String> {
        vec![self]
    }
}

impl Aliases for &[&str] {
    fn into_aliases(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl<const N: usize> Aliases for [&str; N] {
    fn into_aliases(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl Aliases for Vec<String> {
    fn into_aliases(self) -> Vec<String> {
        self
    }
}

/// Discriminates the two entry flavors. Options carry their precomputed
/// short and long spellings (first and second alias after sorting).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    Command,
    Option {
        short: String,
        long: Option<String>,
    },
}

/// A registered command or option. Immutable once constructed.
pub struct Entry {
    aliases: Vec<String>,
    kind: EntryKind,
    handler: Handler,
    description: String,
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("aliases", &self.aliases)
            .field("kind", &self.kind)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Alias length in the user-facing sense (characters, not bytes).
fn alias_len(alias: &str) -> usize {
    alias.chars().count()
}

/// Option-syntax normalization: bare multi-character names get `--`, bare
/// single-character names get `-`, already-prefixed names pass through.
fn normalize_option_alias(raw: &str) -> String {
    if raw.starts_with('-') {
        raw.to_string()
    } else if alias_len(raw) > 1 {
        format!("--{raw}")
    } else {
        format!("-{raw}")
    }
}

impl Entry {
    /// Command entry; aliases sorted longest-first (stable).
    pub(crate) fn command(mut aliases: Vec<String>, description: String, handler: Handler) -> Self {
        aliases.sort_by(|a, b| alias_len(b).cmp(&alias_len(a)));
        Self {
            aliases,
            kind: EntryKind::Command,
            handler,
            description,
        }
    }

    /// Option entry; aliases normalized to option syntax, then sorted
    /// shortest-first (stable) so index 0 is the canonical short form.
    pub(crate) fn option(aliases: Vec<String>, description: String, handler: Handler) -> Self {
        let mut aliases: Vec<String> = aliases.iter().map(|a| normalize_option_alias(a)).collect();
        aliases.sort_by(|a, b| alias_len(a).cmp(&alias_len(b)));
        let short = aliases.first().cloned().unwrap_or_default();
        let long = aliases.get(1).cloned();
        Self {
            aliases,
            kind: EntryKind::Option { short, long },
            handler,
            description,
        }
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn kind(&self) -> &EntryKind {
        &self.kind
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Exact membership over all aliases.
    pub fn matches(&self, name: &str) -> bool {
        self.aliases.iter().any(|a| a == name)
    }

    /// Canonical map key: an option's short form, a command's first
    /// (longest) alias.
    pub fn canonical(&self) -> &str {
        match &self.kind {
            EntryKind::Option { short, .. } => short,
            EntryKind::Command => self.aliases.first().map(String::as_str).unwrap_or_default(),
        }
    }

    pub(crate) fn handler(&self) -> &Handler {
        &self.handler
    }
}

/// Ordered entry lists, populated at configuration time and immutable
/// during parsing and dispatch. A `-h/--help` option is always present.
pub struct Registry {
    commands: Vec<Entry>,
    options: Vec<Entry>,
}

impl Registry {
    pub(crate) fn new() -> Self {
        let help = Entry::option(
            vec!["-h".to_string(), "--help".to_string()],
            "Print list of commands/options".to_string(),
            Handler::Help,
        );
        Self {
            commands: Vec::new(),
            options: vec![help],
        }
    }

    pub(crate) fn add_command(&mut self, entry: Entry) {
        for alias in entry.aliases() {
            if self.commands.iter().any(|e| e.matches(alias)) {
                tracing::warn!("duplicate command alias `{alias}`; first registration wins");
            }
        }
        self.commands.push(entry);
    }

    pub(crate) fn add_option(&mut self, entry: Entry) {
        for alias in entry.aliases() {
            if self.options.iter().any(|e| e.matches(alias)) {
                tracing::warn!("duplicate option alias `{alias}`; first registration wins");
            }
        }
        self.options.push(entry);
    }

    pub fn commands(&self) -> &[Entry] {
        &self.commands
    }

    pub fn options(&self) -> &[Entry] {
        &self.options
    }

    pub fn is_command(&self, token: &str) -> bool {
        self.commands.iter().any(|e| e.matches(token))
    }

    /// Exact membership over option aliases, ignoring a trailing `=value`
    /// suffix on the token.
    pub fn is_option(&self, token: &str) -> bool {
        let name = token.split_once('=').map_or(token, |(head, _)| head);
        self.options.iter().any(|e| e.matches(name))
    }

    pub fn lookup_command(&self, token: &str) -> Result<&Entry, Error> {
        self.commands
            .iter()
            .find(|e| e.matches(token))
            .ok_or_else(|| Error::CommandNotFound(token.to_string()))
    }

    pub fn lookup_option(&self, token: &str) -> Result<&Entry, Error> {
        self.options
            .iter()
            .find(|e| e.matches(token))
            .ok_or_else(|| Error::OptionNotFound(token.to_string()))
    }
}
