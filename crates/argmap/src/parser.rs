//! Token classification: combo expansion plus the left-to-right pass.
//!
//! The pass keeps exactly one piece of state, the most recently matched
//! entry that has not yet received a value. A bare token attaches to that
//! entry; anything else that fails classification goes to the configured
//! unrecognized-token policy.

use crate::config::{Config, OnUnrecognized};
use crate::error::Error;
use crate::help;
use crate::map::ArgvMap;
use crate::registry::Registry;

/// Long-form option shape (`--name`).
pub(crate) fn is_long_opt(token: &str) -> bool {
    token.starts_with("--")
}

/// Short-form option shape (`-x`, including clustered `-xyz`).
pub(crate) fn is_short_opt(token: &str) -> bool {
    token.starts_with('-') && !is_long_opt(token)
}

/// Expand clustered short flags: `-abc` becomes `-a`, `-b`, `-c`.
///
/// Purely syntactic; the registry is not consulted.
pub(crate) fn expand_combos(argv: Vec<String>) -> Vec<String> {
    argv.into_iter()
        .flat_map(|arg| {
            if is_short_opt(&arg) && arg.chars().count() > 2 {
                arg.chars().skip(1).map(|c| format!("-{c}")).collect()
            } else {
                vec![arg]
            }
        })
        .collect()
}

/// The single classification pass over an already-collected argument
/// vector. Produces the insertion-ordered map; unrecognized tokens are
/// routed to the policy and never recorded.
pub(crate) fn classify(
    registry: &Registry,
    config: &Config,
    argv: Vec<String>,
) -> Result<ArgvMap, Error> {
    let argv = if config.split_combo_opts {
        expand_combos(argv)
    } else {
        argv
    };
    tracing::debug!("classifying {} tokens", argv.len());

    let mut map = ArgvMap::new();
    // Canonical name of the most recent option/command still awaiting a
    // value. Cleared when a value is consumed, left alone when a token is
    // rejected.
    let mut pending: Option<String> = None;

    for arg in &argv {
        if registry.is_option(arg) {
            if is_long_opt(arg) {
                match arg.split_once('=') {
                    Some((name, value)) => {
                        let key = option_key(registry, config, name)?;
                        map.insert(key, Some(value.to_string()));
                        pending = None;
                    }
                    None => {
                        let key = option_key(registry, config, arg)?;
                        map.insert(key.clone(), None);
                        pending = Some(key);
                    }
                }
            } else {
                // Short form records the literal token, never a converted
                // spelling, and never participates in `=` splitting.
                map.insert(arg.clone(), None);
                pending = Some(arg.clone());
            }
        } else if registry.is_command(arg) {
            let key = if config.argv_convert {
                registry.lookup_command(arg)?.canonical().to_string()
            } else {
                arg.clone()
            };
            map.insert(key.clone(), None);
            pending = Some(key);
        } else if arg.starts_with('-') || pending.is_none() {
            reject(registry, config, arg);
        } else if let Some(name) = pending.take() {
            map.insert(name, Some(arg.clone()));
        }
    }

    Ok(map)
}

fn option_key(registry: &Registry, config: &Config, name: &str) -> Result<String, Error> {
    if config.argv_convert {
        Ok(registry.lookup_option(name)?.canonical().to_string())
    } else {
        Ok(name.to_string())
    }
}

fn reject(registry: &Registry, config: &Config, token: &str) {
    match &config.on_unrecognized {
        OnUnrecognized::Exit => {
            let message = if token.starts_with('-') {
                format!("Unrecognized option \"{token}\"")
            } else {
                format!("Unrecognized command \"{token}\"")
            };
            help::show(registry, config, Some(&message));
            std::process::exit(1);
        }
        OnUnrecognized::Handler(callback) => callback(token),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn short_and_long_shapes() {
        assert!(is_short_opt("-v"));
        assert!(is_short_opt("-abc"));
        assert!(!is_short_opt("--verbose"));
        assert!(is_long_opt("--verbose"));
        assert!(!is_long_opt("-v"));
        assert!(!is_short_opt("verbose"));
    }

    #[test]
    fn clusters_expand_per_character() {
        assert_eq!(
            expand_combos(argv(&["-abc", "in.txt"])),
            argv(&["-a", "-b", "-c", "in.txt"])
        );
    }

    #[test]
    fn expansion_leaves_plain_tokens_alone() {
        assert_eq!(
            expand_combos(argv(&["-a", "--long", "-", "value"])),
            argv(&["-a", "--long", "-", "value"])
        );
    }

    #[test]
    fn expansion_is_idempotent() {
        let once = expand_combos(argv(&["-xyz"]));
        assert_eq!(expand_combos(once.clone()), once);
    }

    #[test]
    fn expansion_does_not_consult_registration() {
        // Any 2+ character short-shaped token splits, registered or not.
        assert_eq!(expand_combos(argv(&["-zq"])), argv(&["-z", "-q"]));
    }
}
