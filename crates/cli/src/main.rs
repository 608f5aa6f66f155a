//! Demo greeting CLI: exercises argmap registration, parsing, dispatch
//! and exit-code plumbing end to end.

use anyhow::Result;
use argmap::{ArgvMap, Cli};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    init_tracing();
    let cli = build_cli();

    let code = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(cli.run_with(std::env::args().skip(1), |map| async move {
            if map.is_empty() {
                eprintln!("nothing to do; try --help");
                2
            } else {
                0
            }
        }))?;
    std::process::exit(code)
}

fn build_cli() -> Cli {
    Cli::new()
        .command(["greet", "hi"], "Greet someone by name", |value, map| {
            async move {
                tracing::debug!("executing greet command");
                for line in greeting_lines("Hello", value.as_deref(), &map) {
                    println!("{line}");
                }
            }
        })
        .command("bye", "Say goodbye", |value, map| {
            async move {
                tracing::debug!("executing bye command");
                for line in greeting_lines("Goodbye", value.as_deref(), &map) {
                    println!("{line}");
                }
            }
        })
        .option(["-n", "--name"], "Name to address", |_, _| async {})
        .option(["-l", "--loud"], "Uppercase the output", |_, _| async {})
        .option(
            ["-c", "--count"],
            "Repeat the greeting COUNT times",
            |value, _| async move {
                if let Some(raw) = value {
                    if raw.parse::<usize>().is_err() {
                        tracing::warn!("ignoring invalid --count value `{raw}`");
                    }
                }
            },
        )
}

/// The rendered greeting, repeated per `--count`. The addressee comes from
/// the command's attached value, falling back to `--name`, then "world".
fn greeting_lines(salutation: &str, value: Option<&str>, map: &ArgvMap) -> Vec<String> {
    let name = value.or_else(|| map.value_of("-n")).unwrap_or("world");
    let mut line = format!("{salutation}, {name}!");
    if map.contains("-l") {
        line = line.to_uppercase();
    }
    let count = map
        .value_of("-c")
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(1);
    vec![line; count]
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attached_value_beats_name_option() {
        let cli = build_cli();
        let map = cli.parse(["greet", "Ada", "--name", "Grace"]).unwrap();
        assert_eq!(
            greeting_lines("Hello", map.value_of("greet"), &map),
            ["Hello, Ada!"]
        );
    }

    #[test]
    fn loud_and_count_shape_the_output() {
        let cli = build_cli();
        let map = cli
            .parse(["greet", "-l", "-c", "2", "--name", "Ada"])
            .unwrap();
        assert_eq!(
            greeting_lines("Hello", map.value_of("greet"), &map),
            ["HELLO, ADA!", "HELLO, ADA!"]
        );
    }

    #[test]
    fn invalid_count_falls_back_to_one() {
        let cli = build_cli();
        let map = cli.parse(["greet", "--count=soon"]).unwrap();
        assert_eq!(greeting_lines("Hello", None, &map).len(), 1);
    }
}
