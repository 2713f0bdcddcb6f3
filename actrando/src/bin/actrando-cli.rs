use actrando::patch::{check_rom, make_rom, Rom};
use actrando::randomize::randomize;
use actrando::settings::{BossRushType, InitialLives, MarahnaPath, RandomizerSettings};
use actrando::spoiler_log::{spoiler_text, SpoilerLog};
use actrando_game::GameData;
use anyhow::{bail, ensure, Result};
use clap::Parser;
use rand::{RngCore, SeedableRng};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(version = actrando::VERSION)]
struct Args {
    /// Unheadered US ActRaiser ROM image
    rom: Option<PathBuf>,

    /// Number that determines the shuffle
    #[arg(short, long)]
    seed: Option<usize>,

    /// Draw a hidden seed and keep the spoiler out of reach
    #[arg(short, long, conflicts_with_all = ["seed", "spoiler_log"])]
    race: bool,

    /// Print the run after generating
    #[arg(short = 'l', long)]
    spoiler_log: bool,

    /// Generate and report without reading or writing a ROM
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Where to write the patched ROM (default: derived from the input name)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Start with 10 lives instead of 5
    #[arg(short = 'E', long, group = "lives")]
    extra_lives: bool,

    /// Lives never decrease
    #[arg(short = 'U', long, group = "lives")]
    unlimited_lives: bool,

    /// Count deaths upward instead of lives downward
    #[arg(short = 'D', long, group = "lives")]
    death_count: bool,

    /// Full sword power from the start
    #[arg(short = 'Z', long)]
    zantetsuken: bool,

    /// Marahna II takes the left exit
    #[arg(short = 'L', long, group = "path")]
    left: bool,

    /// Marahna II takes the right exit
    #[arg(short = 'R', long, group = "path")]
    right: bool,

    /// Keep the Death Heim rematches in one block
    #[arg(short = 'C', long, group = "policy")]
    consecutive: bool,

    /// Sprinkle the Death Heim rematches through the run
    #[arg(short = 'S', long, group = "policy")]
    scattered: bool,
}

fn build_settings(args: &Args) -> RandomizerSettings {
    let initial_lives = if args.extra_lives {
        Some(InitialLives::Extra)
    } else if args.unlimited_lives {
        Some(InitialLives::Unlimited)
    } else if args.death_count {
        Some(InitialLives::DeathCount)
    } else {
        None
    };
    let marahna_path = if args.left {
        Some(MarahnaPath::Left)
    } else if args.right {
        Some(MarahnaPath::Right)
    } else {
        None
    };
    let boss_rush_type = if args.consecutive {
        Some(BossRushType::Consecutive)
    } else if args.scattered {
        Some(BossRushType::Scattered)
    } else {
        None
    };
    RandomizerSettings {
        initial_lives,
        zantetsuken: args.zantetsuken,
        marahna_path,
        boss_rush_type,
    }
}

fn derived_output_path(
    input: &Path,
    seed_text: &str,
    flags: &str,
    include_hash: bool,
    hash: &str,
) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut name = format!("{stem}_{seed_text}");
    if !flags.is_empty() {
        name.push('_');
        name.push_str(flags);
    }
    if include_hash {
        name.push('_');
        name.push_str(hash);
    }
    if let Some(ext) = input.extension() {
        name.push('.');
        name.push_str(&ext.to_string_lossy());
    }
    input.with_file_name(name)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = Args::parse();
    let settings = build_settings(&args);
    let raw_seed = match args.seed {
        Some(s) => s,
        None => rand::rngs::StdRng::from_entropy().next_u64() as usize,
    };
    // The seed is 32 bits no matter how it was chosen.
    let seed = raw_seed & 0xFFFFFFFF;

    let game_data = GameData::new()?;
    let randomization = randomize(seed, &settings)?;
    let flags = settings.flag_string();

    println!("Version: {}", actrando::VERSION);
    if args.race {
        println!("Seed: (race seed)");
    } else {
        println!("Seed: {seed}");
    }
    println!(
        "Flags: {}",
        if flags.is_empty() { "-" } else { flags.as_str() }
    );
    println!("Hash: {}", randomization.hash);
    if args.spoiler_log {
        print!("{}", spoiler_text(&randomization));
    }

    if args.dry_run {
        return Ok(());
    }
    let rom_path = match &args.rom {
        Some(path) => path,
        None => bail!("an input ROM is required unless --dry-run is given"),
    };

    let seed_text = if args.race {
        "RACE!".to_string()
    } else {
        seed.to_string()
    };
    let title = if flags.is_empty() {
        seed_text.clone()
    } else {
        format!("{seed_text} -{flags}")
    };

    let base_rom = Rom::load(rom_path)?;
    check_rom(&base_rom)?;
    let output_rom = make_rom(&base_rom, &settings, &randomization, &game_data, &title)?;

    let output_path = match &args.output {
        Some(path) => path.clone(),
        None => {
            let name_seed = if args.race { "RACE" } else { &seed_text };
            derived_output_path(rom_path, name_seed, &flags, args.race, &randomization.hash)
        }
    };
    ensure!(
        !output_path.exists(),
        "refusing to overwrite {}",
        output_path.display()
    );
    println!("Writing output ROM to {}", output_path.display());
    output_rom.save(&output_path)?;

    if args.spoiler_log {
        let spoiler_path = output_path.with_extension("spoiler.json");
        println!("Writing spoiler log to {}", spoiler_path.display());
        SpoilerLog::new(&randomization, &game_data).save(&spoiler_path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn arg_parser_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn version_flag_reports_the_build_version() {
        assert_eq!(Args::command().get_version(), Some(actrando::VERSION));
    }

    #[test]
    fn lives_help_names_the_displayed_count() {
        let cmd = Args::command();
        let help = cmd
            .get_arguments()
            .find(|arg| arg.get_id().as_str() == "extra_lives")
            .and_then(|arg| arg.get_help())
            .map(|help| help.to_string())
            .unwrap_or_default();
        assert_eq!(help, "Start with 10 lives instead of 5");
    }
}
