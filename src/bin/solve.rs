//! Command line solver: build a connected board from a wordfile and a bag of
//! letters.

use anyhow::{bail, Context, Result};
use banana_solver::{
    BeamSearch, Board, Dfs, Dictionary, Error, LetterBag, ENGLISH_TILE_COUNTS,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::env;
use std::process;

const USAGE: &str = "\
Usage: solve --words FILE [options]

Options:
  --words FILE        wordfile, one or more words per line (required)
  --letters STRING    letters to place, e.g. CABAD
  --random-letters N  draw N letters from the english tile distribution
  --seed N            seed for --random-letters (0 = from entropy)
  --start STRING      starting board, multiline
  --search KIND       dfs or beam (default dfs)
  --beam-size N       beam width (default 100)
  --max-depth N       beam depth limit, 0 = unbounded (default 0)
";

struct Args {
    words: String,
    letters: String,
    random_letters: usize,
    seed: u64,
    start: String,
    search: String,
    beam_size: usize,
    max_depth: usize,
}

fn next_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next()
        .with_context(|| format!("missing value for {}", flag))
}

fn parse_args() -> Result<Args> {
    let mut parsed = Args {
        words: String::new(),
        letters: String::new(),
        random_letters: 0,
        seed: 0,
        start: String::new(),
        search: String::from("dfs"),
        beam_size: 100,
        max_depth: 0,
    };
    let mut args = env::args().skip(1);
    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--words" => parsed.words = next_value(&mut args, &flag)?,
            "--letters" => parsed.letters = next_value(&mut args, &flag)?,
            "--random-letters" => {
                parsed.random_letters = next_value(&mut args, &flag)?
                    .parse()
                    .context("--random-letters expects a number")?;
            }
            "--seed" => {
                parsed.seed = next_value(&mut args, &flag)?
                    .parse()
                    .context("--seed expects a number")?;
            }
            "--start" => parsed.start = next_value(&mut args, &flag)?,
            "--search" => parsed.search = next_value(&mut args, &flag)?,
            "--beam-size" => {
                parsed.beam_size = next_value(&mut args, &flag)?
                    .parse()
                    .context("--beam-size expects a number")?;
            }
            "--max-depth" => {
                parsed.max_depth = next_value(&mut args, &flag)?
                    .parse()
                    .context("--max-depth expects a number")?;
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
    Ok(parsed)
}

/// Shuffle the full english tile set and take the first `n` letters.
fn random_letters(n: usize, seed: u64) -> Result<String> {
    let mut pool: Vec<char> = ENGLISH_TILE_COUNTS
        .iter()
        .flat_map(|&(letter, count)| std::iter::repeat(letter).take(count))
        .collect();
    if n > pool.len() {
        bail!("--random-letters takes at most {} letters", pool.len());
    }
    let mut rng = if seed == 0 {
        StdRng::from_entropy()
    } else {
        StdRng::seed_from_u64(seed)
    };
    pool.shuffle(&mut rng);
    Ok(pool.into_iter().take(n).collect())
}

fn run() -> Result<Board> {
    let args = parse_args()?;
    let dictionary = Dictionary::from_file(&args.words)?;
    let letters: LetterBag = if args.random_letters > 0 {
        let letters = random_letters(args.random_letters, args.seed)?;
        eprintln!("letters: {}", letters);
        letters.parse()?
    } else {
        args.letters.parse()?
    };
    let start: Board = args.start.parse()?;
    let board = match args.search.as_str() {
        "dfs" => Dfs::new(&dictionary).search(&start, &letters)?,
        "beam" => BeamSearch::new(&dictionary)
            .with_beam_size(args.beam_size)
            .with_max_depth(args.max_depth)
            .search(&start, &letters)?,
        kind => bail!("unknown search kind {:?} (expected dfs or beam)", kind),
    };
    Ok(board)
}

fn main() {
    match run() {
        Ok(board) => print!("{}", board),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            let search_failed = matches!(
                err.downcast_ref::<Error>(),
                Some(Error::NoSolution) | Some(Error::DepthLimitReached(_))
            );
            process::exit(if search_failed { 1 } else { 2 });
        }
    }
}
