use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use heap_window::{max_sliding_window_with, Strategy};
use tracing_subscriber::EnvFilter;

const DEMO_INPUT: [i64; 8] = [9, 10, 9, -7, -4, 8, 2, -6];
const DEMO_WINDOW: usize = 5;

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
enum StrategyArg {
    RootOnly,
    #[default]
    Lazy,
    Deque,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::RootOnly => Strategy::RootOnly,
            StrategyArg::Lazy => Strategy::Lazy,
            StrategyArg::Deque => Strategy::Deque,
        }
    }
}

/// Prints the maximum of every window of `WINDOW` consecutive values.
///
/// Without arguments the built-in sequence 9 10 9 -7 -4 8 2 -6 is used with a
/// window of 5.
#[derive(Parser, Debug)]
#[command(name = "heap-window")]
struct Cli {
    #[arg(short, long, env = "HEAP_WINDOW_STRATEGY", value_enum, default_value_t)]
    strategy: StrategyArg,

    #[arg(allow_negative_numbers = true)]
    window: Option<usize>,

    #[arg(allow_negative_numbers = true)]
    nums: Vec<i64>,
}

impl Cli {
    fn input(&self) -> Result<(usize, Vec<i64>)> {
        match self.window {
            None => Ok((DEMO_WINDOW, DEMO_INPUT.to_vec())),
            Some(_) if self.nums.is_empty() => bail!("a window size needs a sequence of values"),
            Some(window) => Ok((window, self.nums.clone())),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let (window, nums) = cli.input()?;
    let maxima = max_sliding_window_with(&nums, window, cli.strategy.into())?;
    println!("{:?}", maxima);
    Ok(())
}
