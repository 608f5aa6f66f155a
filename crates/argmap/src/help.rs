//! Help rendering: the `[aliases] <padding> description` listing.

use crate::config::Config;
use crate::registry::Registry;

/// Render one line per entry, commands before options.
///
/// Every line carries the same padding: one space per alias in the
/// largest alias list across all entries.
pub(crate) fn listing(registry: &Registry) -> String {
    let entries = || registry.commands().iter().chain(registry.options());
    let width = entries().map(|e| e.aliases().len()).max().unwrap_or(0);

    let mut out = String::new();
    for entry in entries() {
        out.push_str(&format!(
            "[{}] {} {}\n",
            entry.aliases().join(", "),
            " ".repeat(width),
            entry.description(),
        ));
    }
    out
}

/// Print help to stdout.
///
/// A configured static `help_message` short-circuits everything else,
/// including any diagnostic, and terminates the process with exit code 0.
pub(crate) fn show(registry: &Registry, config: &Config, message: Option<&str>) {
    if let Some(text) = &config.help_message {
        println!("{text}");
        std::process::exit(0);
    }
    if let Some(message) = message {
        println!("{message}");
    }
    print!("{}", listing(registry));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_matches_largest_alias_list() {
        // Only the built-in help entry: two aliases, so two spaces of
        // padding between the bracketed list and the description.
        let registry = Registry::new();
        assert_eq!(
            listing(&registry),
            "[-h, --help]    Print list of commands/options\n"
        );
    }
}
