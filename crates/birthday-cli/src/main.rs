//! `birthday` CLI — explore the birthday paradox from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Generate one group of 23 birthdays and check it for a match
//! birthday sample --people 23
//!
//! # Estimate the probability with 100,000 Monte Carlo trials
//! birthday simulate --people 23
//!
//! # Reproducible run with a fixed seed, machine-readable output
//! birthday simulate --people 23 --trials 50000 --seed 42 --json
//!
//! # Interactive session (prompts for the group size)
//! birthday
//! ```

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use birthday_core::{
    find_shared_birthday, generate_birthdays, run_simulation, DayOfYear, GroupSize,
    DEFAULT_TRIALS, MAX_GROUP_SIZE,
};
use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(
    name = "birthday",
    version,
    about = "Birthday paradox Monte Carlo simulator"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one random birthday set and report any shared birthday
    Sample {
        /// Number of people in the group (1-100)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=100))]
        people: u32,
        /// Seed for the random generator (omit for a fresh run each time)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run the Monte Carlo simulation and estimate the match probability
    Simulate {
        /// Number of people in the group (1-100)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=100))]
        people: u32,
        /// Number of independent trials to run
        #[arg(long, default_value_t = DEFAULT_TRIALS)]
        trials: u64,
        /// Seed for the random generator (omit for a fresh run each time)
        #[arg(long)]
        seed: Option<u64>,
        /// Print the summary as JSON (suppresses progress output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Sample { people, seed }) => {
            let mut rng = make_rng(seed);
            let group = GroupSize::new(people)?;
            print_sample(&mut rng, group);
        }
        Some(Commands::Simulate {
            people,
            trials,
            seed,
            json,
        }) => {
            let mut rng = make_rng(seed);
            let group = GroupSize::new(people)?;

            let summary = if json {
                run_simulation(&mut rng, group, trials, |_| {})
            } else {
                let summary = run_simulation(&mut rng, group, trials, |i| {
                    println!("{} simulations run...", i);
                });
                println!("{} simulations run.", trials);
                println!();
                summary
            };

            if json {
                let rendered = serde_json::to_string_pretty(&summary)
                    .context("Failed to serialize simulation summary")?;
                println!("{}", rendered);
            } else {
                print_summary(people, &summary);
            }
        }
        None => interactive_session()?,
    }

    Ok(())
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    }
}

/// Generate one birthday set, print it, and report the single-trial outcome.
fn print_sample(rng: &mut SmallRng, group: GroupSize) {
    let birthdays = generate_birthdays(rng, group.get() as usize);

    println!("Here are {} birthdays:", birthdays.len());
    let formatted: Vec<String> = birthdays.iter().map(DayOfYear::to_string).collect();
    println!("{}", formatted.join(", "));
    println!();

    match find_shared_birthday(&birthdays) {
        Some(day) => println!("In this group, multiple people have a birthday on {}.", day),
        None => println!("In this group, there are no matching birthdays."),
    }
}

fn print_summary(people: u32, summary: &birthday_core::SimulationSummary) {
    println!(
        "Out of {} simulations of {} people, there was a matching",
        summary.trials, people
    );
    println!("birthday in that group {} times.", summary.matches);
    println!(
        "This means that {} people have a {:.2}% chance of having",
        people, summary.probability_percent
    );
    println!("a matching birthday in their group.");
}

/// The original interactive flow: prompt for a group size, show one sample
/// group, then run the full simulation with progress output.
fn interactive_session() -> Result<()> {
    println!(
        "Birthday Paradox Simulator

The birthday paradox shows us that in a group of N people, the odds
that two of them have matching birthdays is surprisingly large.
This program runs a Monte Carlo simulation (repeated random trials)
to explore this concept.

(It's not actually a paradox, just a surprising result.)
"
    );

    let group = prompt_group_size()?;
    println!();

    let mut rng = SmallRng::from_entropy();
    print_sample(&mut rng, group);
    println!();

    println!(
        "Generating {} random birthdays {} times...",
        group.get(),
        DEFAULT_TRIALS
    );
    print!("Press Enter to begin...");
    io::stdout().flush().context("Failed to flush stdout")?;
    let mut pause = String::new();
    io::stdin()
        .lock()
        .read_line(&mut pause)
        .context("Failed to read from stdin")?;

    let summary = run_simulation(&mut rng, group, DEFAULT_TRIALS, |i| {
        println!("{} simulations run...", i);
    });
    println!("{} simulations run.", DEFAULT_TRIALS);
    println!();

    print_summary(group.get(), &summary);
    println!("That's probably more than you would think!");

    Ok(())
}

/// Keep asking until the user enters a group size in 1..=100.
fn prompt_group_size() -> Result<GroupSize> {
    let stdin = io::stdin();
    loop {
        println!(
            "How many birthdays shall I generate? (Max {})",
            MAX_GROUP_SIZE
        );
        print!("> ");
        io::stdout().flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        let bytes = stdin
            .lock()
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        if bytes == 0 {
            bail!("stdin closed before a valid group size was entered");
        }

        if let Ok(size) = line.trim().parse::<u32>() {
            if let Ok(group) = GroupSize::new(size) {
                return Ok(group);
            }
        }
    }
}
