//! Wordle Autoplay CLI
//!
//! Menu-driven text game, plus one-shot commands for solving, hinting and
//! benchmarking.

use clap::{Parser, Subcommand};
use log::error;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use wordle_autoplay::session::{demonstrate, Session};
use wordle_autoplay::solver::benchmark_guess_distribution;
use wordle_autoplay::{
    filter_candidates, parse_hint, ConstraintState, Corpus, GameConfig, WordleError,
    DEFAULT_WORD_LENGTH,
};

#[derive(Parser, Debug)]
#[command(name = "wordle-autoplay", version, about = "Play Wordle, or watch it play itself")]
struct Cli {
    /// Word list to use instead of the built-in dictionary, one word per line
    #[arg(long, global = true)]
    words: Option<PathBuf>,

    /// Number of letters per word
    #[arg(long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Seed for secret and guess selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Pause between automated guesses, in milliseconds
    #[arg(long, global = true)]
    delay_ms: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Let the solver find the given secret word
    Solve { secret: String },
    /// Show letter frequencies and worked examples of the engine
    Demo,
    /// Solve every word of the list and print the guess distribution
    Bench,
    /// List the words consistent with feedback from another game,
    /// given as guess:pattern pairs such as crane:gybbb
    Hint {
        #[arg(required = true)]
        feedback: Vec<String>,
    },
}

const SPIN_FRAMES: &str = "|/-\\";
const SPIN_INTERVAL: Duration = Duration::from_millis(100);

/// Progress indicator on stderr while a long computation runs. It stops
/// and clears its line when dropped.
struct Spinner {
    halt: Option<Sender<()>>,
    worker: Option<JoinHandle<()>>,
}

impl Spinner {
    fn start(label: &'static str) -> Self {
        let (halt, halted) = mpsc::channel::<()>();
        let worker = thread::spawn(move || {
            let mut err = io::stderr().lock();
            for frame in SPIN_FRAMES.chars().cycle() {
                let _ = write!(err, "\r{} {}", label, frame);
                let _ = err.flush();
                // any message or a dropped sender ends the animation
                if !matches!(halted.recv_timeout(SPIN_INTERVAL), Err(RecvTimeoutError::Timeout)) {
                    break;
                }
            }
            let _ = write!(err, "\r{:width$}\r", "", width = label.len() + 2);
            let _ = err.flush();
        });
        Self {
            halt: Some(halt),
            worker: Some(worker),
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.halt.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

fn load_corpus(cli: &Cli, config: &GameConfig) -> Result<Corpus, WordleError> {
    match &cli.words {
        Some(path) => Corpus::load(path, config.word_length),
        None => Corpus::embedded(config.word_length),
    }
}

fn run_solve(corpus: &Corpus, config: GameConfig, secret: &str) -> Result<(), WordleError> {
    let secret = secret.to_lowercase();
    if !corpus.contains(&secret) {
        return Err(WordleError::InvalidInput(format!(
            "'{}' is not in the word list",
            secret
        )));
    }

    let stdin = io::stdin();
    let mut session = Session::new(corpus, config, stdin.lock(), io::stdout());
    session.autoplay(&secret)?.into_result()?;
    Ok(())
}

fn run_bench(corpus: &Corpus) -> Result<(), WordleError> {
    println!("Running benchmark on all {} words...", corpus.len());

    let start = Instant::now();
    let distribution = {
        let _spinner = Spinner::start("Solving");
        benchmark_guess_distribution(corpus)?
    };
    let elapsed = start.elapsed();

    let total: usize = distribution.iter().map(|(_, c)| c).sum();
    let solved: Vec<_> = distribution.iter().filter(|(g, _)| *g > 0).collect();
    let total_guesses: usize = solved.iter().map(|(g, c)| g * c).sum();
    let total_solved: usize = solved.iter().map(|(_, c)| c).sum();

    println!("Guess distribution:");
    for (guesses, count) in &solved {
        let pct = *count as f64 / total as f64 * 100.0;
        let bar = "█".repeat((*count * 40 / total).max(1));
        println!("  {:>2} guesses: {:>5} ({:>5.1}%) {}", guesses, count, pct, bar);
    }
    println!();
    if total_solved > 0 {
        println!(
            "Average guesses: {:.3}",
            total_guesses as f64 / total_solved as f64
        );
    }
    println!("Total words: {}", total);
    println!("Time elapsed: {:.2?}", elapsed);

    let exhausted = total - total_solved;
    if exhausted > 0 {
        println!("Rounds that ran out of candidates: {}", exhausted);
    }
    Ok(())
}

fn run_hint(corpus: &Corpus, feedback: &[String]) -> Result<(), WordleError> {
    let mut state = ConstraintState::new();
    for pair in feedback {
        let (guess, score) = parse_hint(pair, corpus.word_length())?;
        println!("{} {}", guess.to_uppercase(), score.to_emoji_string());
        state.record(&guess, &score)?;
    }

    let remaining = filter_candidates(corpus.words(), &state);
    println!();
    println!("Remaining possibilities: {}", remaining.len());
    for (i, word) in remaining.iter().enumerate() {
        if i > 0 && i % 10 == 0 {
            println!();
        }
        print!("{:>8}", word.to_uppercase());
    }
    println!();
    Ok(())
}

fn run(cli: Cli) -> Result<(), WordleError> {
    let mut config = GameConfig {
        word_length: cli.length,
        seed: cli.seed,
        ..GameConfig::default()
    };
    let corpus = load_corpus(&cli, &config)?;

    match &cli.command {
        None => {
            if let Some(ms) = cli.delay_ms {
                config.delay = Duration::from_millis(ms);
            }
            let stdin = io::stdin();
            Session::new(&corpus, config, stdin.lock(), io::stdout()).run()
        }
        Some(Command::Solve { secret }) => {
            config.delay = Duration::from_millis(cli.delay_ms.unwrap_or(0));
            run_solve(&corpus, config, secret)
        }
        Some(Command::Demo) => demonstrate(&corpus, &mut io::stdout()),
        Some(Command::Bench) => run_bench(&corpus),
        Some(Command::Hint { feedback }) => run_hint(&corpus, feedback),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
