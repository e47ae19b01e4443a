use std::path::PathBuf;

mod replay;

use anyhow::{bail, Result};
use calc_core::DisplayFormat;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Replays keypad input without opening a window.
#[derive(Parser, Debug)]
#[command(name = "keypad-cli")]
struct Args {
    /// Key script, e.g. "12+3*2=". Digits and `.`, `+ - * / x`, `=`, `<` delete, `c` clear.
    #[arg(long, conflicts_with = "actions")]
    keys: Option<String>,
    /// JSON file holding an array of actions.
    #[arg(long)]
    actions: Option<PathBuf>,
    /// Fail on unrecognized keys instead of skipping them.
    #[arg(long)]
    strict: bool,
    /// Thousands separator used when rendering operands.
    #[arg(long, default_value_t = ',')]
    separator: char,
    /// Print the display after every action, not just the last one.
    #[arg(long)]
    trace: bool,
    /// Emit frames as JSON lines.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let actions = match (&args.keys, &args.actions) {
        (Some(keys), _) => replay::actions_from_keys(keys, args.strict)?,
        (None, Some(path)) => replay::actions_from_file(path)?,
        (None, None) => bail!("pass either --keys or --actions"),
    };
    tracing::debug!(count = actions.len(), "replaying actions");

    let format = DisplayFormat {
        group_separator: args.separator,
    };
    let session = replay::replay(&actions, &format);

    tracing::debug!(
        current = %session.state.current_operand,
        pending = session.state.operation.is_some(),
        "replay finished"
    );

    let frames: Vec<&replay::Frame> = if args.trace {
        session.frames.iter().collect()
    } else {
        session.final_frame().into_iter().collect()
    };

    for frame in frames {
        if args.json {
            println!("{}", serde_json::to_string(frame)?);
            continue;
        }
        if args.trace {
            println!("[{}]", frame.action.unwrap_or("start"));
        }
        println!("{}", frame.previous);
        println!("{}", frame.current);
    }

    Ok(())
}
