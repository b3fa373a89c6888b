//! Beam tuning harness: grid-run beam parameter combinations over sampled
//! letter sets and report success rates and solve times.

use anyhow::{bail, Context, Result};
use banana_solver::{
    BeamSearch, BeamWeights, Board, Dictionary, LetterBag, ENGLISH_TILE_COUNTS,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::env;
use std::fmt::Write as _;
use std::process;
use std::str::FromStr;
use std::time::Instant;

const USAGE: &str = "\
Usage: experiment --words FILE [options]

Options:
  --words FILE               wordfile, one or more words per line (required)
  --letters STRING           fixed letters to place
  --random-letters N         draw N letters per sample instead
  --samples K                number of random letter samples (default 1)
  --seed N                   seed for random draws (0 = from entropy)
  --beam-size LIST           comma separated beam widths (default 100)
  --max-depth LIST           comma separated depth limits (default 0)
  --remaining-weight LIST    weights for remaining letters (default -2)
  --density-weight LIST      weights for board density (default 1)
  --word-length-weight LIST  weights for average word length (default 1)
  --constraints-weight LIST  weights for constraint count (default -1)
  --rarity-weight LIST       weights for letter rarity (default 1.5)
";

struct Args {
    words: String,
    letters: String,
    random_letters: usize,
    samples: usize,
    seed: u64,
    beam_sizes: Vec<usize>,
    max_depths: Vec<usize>,
    remaining_weights: Vec<f32>,
    density_weights: Vec<f32>,
    word_length_weights: Vec<f32>,
    constraints_weights: Vec<f32>,
    rarity_weights: Vec<f32>,
}

fn next_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next()
        .with_context(|| format!("missing value for {}", flag))
}

fn parse_list<T: FromStr>(value: &str, flag: &str) -> Result<Vec<T>> {
    value
        .split(',')
        .map(|item| {
            item.trim()
                .parse()
                .ok()
                .with_context(|| format!("{} has a malformed entry {:?}", flag, item))
        })
        .collect()
}

fn parse_args() -> Result<Args> {
    let mut parsed = Args {
        words: String::new(),
        letters: String::new(),
        random_letters: 0,
        samples: 1,
        seed: 0,
        beam_sizes: vec![100],
        max_depths: vec![0],
        remaining_weights: vec![-2.0],
        density_weights: vec![1.0],
        word_length_weights: vec![1.0],
        constraints_weights: vec![-1.0],
        rarity_weights: vec![1.5],
    };
    let mut args = env::args().skip(1);
    while let Some(flag) = args.next() {
        let flag = flag.as_str();
        match flag {
            "--words" => parsed.words = next_value(&mut args, flag)?,
            "--letters" => parsed.letters = next_value(&mut args, flag)?,
            "--random-letters" => {
                parsed.random_letters = next_value(&mut args, flag)?
                    .parse()
                    .context("--random-letters expects a number")?;
            }
            "--samples" => {
                parsed.samples = next_value(&mut args, flag)?
                    .parse()
                    .context("--samples expects a number")?;
            }
            "--seed" => {
                parsed.seed = next_value(&mut args, flag)?
                    .parse()
                    .context("--seed expects a number")?;
            }
            "--beam-size" => parsed.beam_sizes = parse_list(&next_value(&mut args, flag)?, flag)?,
            "--max-depth" => parsed.max_depths = parse_list(&next_value(&mut args, flag)?, flag)?,
            "--remaining-weight" => {
                parsed.remaining_weights = parse_list(&next_value(&mut args, flag)?, flag)?;
            }
            "--density-weight" => {
                parsed.density_weights = parse_list(&next_value(&mut args, flag)?, flag)?;
            }
            "--word-length-weight" => {
                parsed.word_length_weights = parse_list(&next_value(&mut args, flag)?, flag)?;
            }
            "--constraints-weight" => {
                parsed.constraints_weights = parse_list(&next_value(&mut args, flag)?, flag)?;
            }
            "--rarity-weight" => {
                parsed.rarity_weights = parse_list(&next_value(&mut args, flag)?, flag)?;
            }
            "--help" | "-h" => {
                print!("{}", USAGE);
                process::exit(0);
            }
            _ => bail!("unknown option {}\n{}", flag, USAGE),
        }
    }
    if parsed.words.is_empty() {
        bail!("--words is required\n{}", USAGE);
    }
    if parsed.letters.is_empty() && parsed.random_letters == 0 {
        bail!("either --letters or --random-letters is required\n{}", USAGE);
    }
    if parsed.samples == 0 {
        bail!("--samples must be at least 1\n{}", USAGE);
    }
    Ok(parsed)
}

fn letter_samples(args: &Args) -> Result<Vec<LetterBag>> {
    if args.random_letters == 0 {
        return Ok(vec![args.letters.parse()?]);
    }
    let pool: Vec<char> = ENGLISH_TILE_COUNTS
        .iter()
        .flat_map(|&(letter, count)| std::iter::repeat(letter).take(count))
        .collect();
    if args.random_letters > pool.len() {
        bail!("--random-letters takes at most {} letters", pool.len());
    }
    let mut rng = if args.seed == 0 {
        StdRng::from_entropy()
    } else {
        StdRng::seed_from_u64(args.seed)
    };
    let mut samples = Vec::new();
    for _ in 0..args.samples {
        let mut pool = pool.clone();
        pool.shuffle(&mut rng);
        let letters: String = pool.into_iter().take(args.random_letters).collect();
        samples.push(letters.parse()?);
    }
    Ok(samples)
}

struct Trial {
    beam_size: usize,
    max_depth: usize,
    weights: BeamWeights,
    successes: usize,
    samples: usize,
    total_time: f64,
}

fn weight_grid(args: &Args) -> Vec<BeamWeights> {
    let mut grid = Vec::new();
    for &remaining_letters in &args.remaining_weights {
        for &board_density in &args.density_weights {
            for &average_word_length in &args.word_length_weights {
                for &constraint_count in &args.constraints_weights {
                    for &letter_rarity in &args.rarity_weights {
                        grid.push(BeamWeights {
                            remaining_letters,
                            board_density,
                            average_word_length,
                            constraint_count,
                            letter_rarity,
                        });
                    }
                }
            }
        }
    }
    grid
}

fn format_weights(weights: &BeamWeights) -> String {
    let mut s = String::new();
    let _ = write!(
        s,
        "{:+.1}/{:+.1}/{:+.1}/{:+.1}/{:+.1}",
        weights.remaining_letters,
        weights.board_density,
        weights.average_word_length,
        weights.constraint_count,
        weights.letter_rarity,
    );
    s
}

fn run() -> Result<()> {
    let args = parse_args()?;
    let dictionary = Dictionary::from_file(&args.words)?;
    let samples = letter_samples(&args)?;
    println!("{}", dictionary);
    for letters in &samples {
        println!("letters: {}", letters);
    }

    let mut trials = Vec::new();
    for &beam_size in &args.beam_sizes {
        for &max_depth in &args.max_depths {
            for weights in weight_grid(&args) {
                let search = BeamSearch::new(&dictionary)
                    .with_beam_size(beam_size)
                    .with_max_depth(max_depth)
                    .with_weights(weights);
                let mut trial = Trial {
                    beam_size,
                    max_depth,
                    weights,
                    successes: 0,
                    samples: samples.len(),
                    total_time: 0.0,
                };
                for letters in &samples {
                    let t0 = Instant::now();
                    let result = search.search(&Board::new(), letters);
                    trial.total_time += t0.elapsed().as_secs_f64();
                    if result.is_ok() {
                        trial.successes += 1;
                    }
                }
                trials.push(trial);
            }
        }
    }

    println!(
        "{:>9} {:>9} {:>26} {:>9} {:>10}",
        "beam_size", "max_depth", "weights", "success", "avg_time"
    );
    for trial in &trials {
        println!(
            "{:>9} {:>9} {:>26} {:>8.0}% {:>9.2}s",
            trial.beam_size,
            trial.max_depth,
            format_weights(&trial.weights),
            trial.successes as f64 / trial.samples as f64 * 100.0,
            trial.total_time / trial.samples as f64,
        );
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        process::exit(2);
    }
}
