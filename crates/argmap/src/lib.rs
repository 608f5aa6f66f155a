//! Ordered-map argument parsing and command dispatch for small CLIs.
//!
//! Callers register commands and options with async handlers, then hand
//! over a raw argument vector. Parsing is a single left-to-right pass
//! with a lookback of one: each bare token may attach as the value of the
//! most recently matched option or command. The result is an
//! insertion-ordered map from canonical names to optional values, and
//! dispatch walks that map invoking each handler in turn, awaiting one
//! before starting the next.
//!
//! # Example
//!
//! ```no_run
//! use argmap::Cli;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), argmap::Error> {
//!     let cli = Cli::new()
//!         .command("deploy", "Deploy a target", |target, _map| async move {
//!             println!("deploying {}", target.as_deref().unwrap_or("default"));
//!         })
//!         .option(["-v", "--verbose"], "Verbose output", |_, _| async {});
//!
//!     let code = cli.run_env().await?;
//!     std::process::exit(code)
//! }
//! ```
//!
//! Token shapes: `-v` (short), `--verbose` (long), `--out=path` (long with
//! attached value), `-abc` (cluster, expanded to `-a -b -c` before
//! classification), anything else (command or bare value). `=` attachment
//! is recognized for long options only.

mod config;
mod error;
mod help;
mod map;
mod parser;
mod registry;

use std::future::Future;

use futures_util::FutureExt;

pub use config::{Config, OnUnrecognized};
pub use error::{Error, Result};
pub use map::ArgvMap;
pub use registry::{Aliases, Entry, EntryKind, Registry};

use registry::Handler;

/// Process exit status produced by [`Cli::run_with`] callbacks.
pub type ExitCode = i32;

/// The parser/dispatcher: a registry of commands and options plus the
/// configuration that governs classification.
///
/// Registration is fluent; the registry is immutable once parsing starts.
pub struct Cli {
    registry: Registry,
    config: Config,
}

impl Default for Cli {
    fn default() -> Self {
        Self::new()
    }
}

impl Cli {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            registry: Registry::new(),
            config,
        }
    }

    /// Register a command. `names` is a single spelling or a list of
    /// aliases; the longest alias becomes the canonical map key.
    pub fn command<N, F, Fut>(mut self, names: N, description: &str, action: F) -> Self
    where
        N: Aliases,
        F: Fn(Option<String>, ArgvMap) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let aliases = names.into_aliases();
        if aliases.is_empty() {
            tracing::warn!("ignoring command registration with no names");
            return self;
        }
        let handler = Handler::Action(Box::new(move |value, map| action(value, map).boxed()));
        self.registry
            .add_command(Entry::command(aliases, description.to_string(), handler));
        self
    }

    /// Register an option. Bare names are normalized to option syntax
    /// (`v` becomes `-v`, `verbose` becomes `--verbose`); the shortest
    /// alias becomes the canonical map key.
    pub fn option<N, F, Fut>(mut self, names: N, description: &str, action: F) -> Self
    where
        N: Aliases,
        F: Fn(Option<String>, ArgvMap) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let aliases = names.into_aliases();
        if aliases.is_empty() {
            tracing::warn!("ignoring option registration with no names");
            return self;
        }
        let handler = Handler::Action(Box::new(move |value, map| action(value, map).boxed()));
        self.registry
            .add_option(Entry::option(aliases, description.to_string(), handler));
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The rendered help listing (or the configured static override).
    pub fn help_text(&self) -> String {
        match &self.config.help_message {
            Some(text) => text.clone(),
            None => help::listing(&self.registry),
        }
    }

    /// Classify `argv` into the ordered name-to-value map without
    /// dispatching. Unrecognized tokens go through the configured policy.
    pub fn parse<I, S>(&self, argv: I) -> Result<ArgvMap>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let argv: Vec<String> = argv.into_iter().map(Into::into).collect();
        parser::classify(&self.registry, &self.config, argv)
    }

    /// [`parse`](Self::parse) over the live process argument vector,
    /// minus the program name.
    pub fn parse_env(&self) -> Result<ArgvMap> {
        self.parse(std::env::args().skip(1))
    }

    /// Parse, then dispatch every matched entry in map order. Returns
    /// exit code 0 once all handlers have completed.
    pub async fn run<I, S>(&self, argv: I) -> Result<ExitCode>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let map = self.parse(argv)?;
        self.dispatch(&map).await?;
        Ok(0)
    }

    /// Like [`run`](Self::run), but after dispatch hands the full map to
    /// `callback`, whose result becomes the exit code.
    pub async fn run_with<I, S, F, Fut>(&self, argv: I, callback: F) -> Result<ExitCode>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: FnOnce(ArgvMap) -> Fut,
        Fut: Future<Output = ExitCode>,
    {
        let map = self.parse(argv)?;
        self.dispatch(&map).await?;
        Ok(callback(map).await)
    }

    /// [`run`](Self::run) over the live process argument vector, minus
    /// the program name.
    pub async fn run_env(&self) -> Result<ExitCode> {
        self.run(std::env::args().skip(1)).await
    }

    /// Strictly sequential dispatch: each handler's future completes
    /// before the next entry is looked at. Map keys that match neither
    /// list are skipped.
    async fn dispatch(&self, map: &ArgvMap) -> Result<()> {
        tracing::debug!("dispatching {} parsed entries", map.len());
        for (name, value) in map.iter() {
            let entry = if self.registry.is_command(name) {
                self.registry.lookup_command(name)?
            } else if self.registry.is_option(name) {
                self.registry.lookup_option(name)?
            } else {
                continue;
            };
            match entry.handler() {
                Handler::Help => help::show(&self.registry, &self.config, None),
                Handler::Action(action) => action(value.map(str::to_string), map.clone()).await,
            }
        }
        Ok(())
    }
}
