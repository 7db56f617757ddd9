use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use maqam53::{note_name, Band, BandMappings, GeneratedScale, IntervalTable, ROOT_FREQUENCY};

/// Explore 53-TET maqam scales and their keyboard layout
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List all maqams in the catalog with their interval patterns
    List,
    /// Print the generated frequency scale for a maqam
    Show {
        /// Maqam name (see `list`)
        maqam: String,

        /// Root octave offset from 110 Hz
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        root_offset: i32,
    },
    /// Print the keyboard layout for a maqam
    Keys {
        /// Maqam name (see `list`)
        maqam: String,

        /// Root octave offset from 110 Hz
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        root_offset: i32,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Commands::List => {
            for name in IntervalTable::names() {
                let steps = IntervalTable::lookup(name).unwrap_or(&[]);
                let pattern: Vec<String> = steps.iter().map(|s| s.to_string()).collect();
                println!("{:<22} {}", name, pattern.join("-"));
            }
        }
        Commands::Show { maqam, root_offset } => {
            let scale = build_scale(&maqam, root_offset)?;
            for (i, &freq) in scale.frequencies.iter().enumerate() {
                println!("{:>3}  {:>10.3} Hz  {}", i, freq, note_name(freq));
            }
        }
        Commands::Keys { maqam, root_offset } => {
            let scale = build_scale(&maqam, root_offset)?;
            let steps = IntervalTable::lookup(&maqam).unwrap_or(&[]);
            let mappings = BandMappings::derive(&scale, steps.len() + 1);

            for (label, band) in [
                ("up", Band::Up),
                ("base", Band::Base),
                ("down", Band::Down),
            ] {
                println!("[{}]", label);
                for m in mappings.band(band) {
                    match m.frequency {
                        Some(freq) => {
                            println!("  {}  {:<7} {:>10.3} Hz", m.key, m.label, freq)
                        }
                        None => println!("  {}  (unmapped)", m.key),
                    }
                }
            }
        }
    }

    Ok(())
}

fn build_scale(maqam: &str, root_offset: i32) -> Result<GeneratedScale> {
    let Some(steps) = IntervalTable::lookup(maqam) else {
        bail!(
            "unknown maqam \"{}\" (run `maqam53 list` for the catalog)",
            maqam
        );
    };
    let root = ROOT_FREQUENCY * 2f64.powi(root_offset);
    Ok(GeneratedScale::build(steps, root)?)
}
