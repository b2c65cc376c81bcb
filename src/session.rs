//! Menu-driven session tying the modes together.

use crate::config::GameConfig;
use crate::constraints::{find_matched_words, MatchMode, Matched, Positions};
use crate::corpus::Corpus;
use crate::error::Result;
use crate::feedback::check;
use crate::game::{is_quit, play_interactive, prompt, Control};
use crate::ranker::{find_words_with_letters, LetterFrequencies};
use crate::solver::{Picker, RandomPicker, RoundReport, Round};
use std::collections::BTreeMap;
use std::io::{BufRead, Write};
use std::thread;

const MENU_TEXT: &str = "Type:\n\"1\" for auto game,\n\"2\" for interactive game,\n\"3\" for wordle functions demonstration or\n\"Quit\" or \"q\" to exit";

/// A text session reading commands from `input` and writing to `out`.
pub struct Session<'c, R, W> {
    corpus: &'c Corpus,
    config: GameConfig,
    picker: RandomPicker,
    input: R,
    out: W,
}

impl<'c, R: BufRead, W: Write> Session<'c, R, W> {
    pub fn new(corpus: &'c Corpus, config: GameConfig, input: R, out: W) -> Self {
        let picker = match config.seed {
            Some(seed) => RandomPicker::seeded(seed),
            None => RandomPicker::new(),
        };
        Self {
            corpus,
            config,
            picker,
            input,
            out,
        }
    }

    /// Run the menu until the player quits or input ends.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.out, "*** Welcome to the text-based Wordle game. ***\n")?;
        writeln!(self.out, "I have guessed a secret word. Can you find it?")?;

        loop {
            let secret = self.next_secret();
            if self.menu(&secret)? == Control::Quit {
                return Ok(());
            }
        }
    }

    fn next_secret(&mut self) -> String {
        self.picker
            .pick(self.corpus.words())
            .unwrap_or_default()
            .to_string()
    }

    fn menu(&mut self, secret: &str) -> Result<Control> {
        loop {
            writeln!(self.out, "{}", MENU_TEXT)?;
            let choice = match prompt(&mut self.input, &mut self.out, "Enter your choice: ")? {
                Some(choice) => choice,
                None => return Ok(Control::Quit),
            };
            if is_quit(&choice) {
                writeln!(self.out, "Bye!")?;
                return Ok(Control::Quit);
            }
            match choice.as_str() {
                "1" => {
                    writeln!(self.out, "Wordle running in autoplay mode!")?;
                    writeln!(self.out, "{}", "~".repeat(33))?;
                    self.autoplay(secret)?;
                    return Ok(Control::Done);
                }
                "2" => {
                    writeln!(
                        self.out,
                        "Challenge accepted! Can you guess the Secret Word?    [type \"quit\" or \"q\" to Quit]"
                    )?;
                    writeln!(self.out, "{}", "~".repeat(70))?;
                    return play_interactive(self.corpus, secret, &mut self.input, &mut self.out);
                }
                "3" => {
                    writeln!(self.out, "{}", "~".repeat(20))?;
                    demonstrate(self.corpus, &mut self.out)?;
                    return Ok(Control::Done);
                }
                _ => writeln!(self.out, "Invalid input")?,
            }
        }
    }

    /// Let the solver play one round against `secret`, printing each guess.
    pub fn autoplay(&mut self, secret: &str) -> Result<RoundReport> {
        let delay = self.config.delay;
        let out = &mut self.out;
        let mut write_result = Ok(());
        let report = Round::new(self.corpus, secret)?.play(&mut self.picker, |n, guess, score| {
            if write_result.is_err() {
                return;
            }
            if n > 1 {
                write_result = writeln!(out);
            }
            if !delay.is_zero() {
                thread::sleep(delay);
            }
            if write_result.is_ok() {
                write_result = writeln!(out, "Trying: {}\n-> {}", guess, score);
            }
        })?;
        write_result?;
        print_report(&report, &mut self.out)?;
        Ok(report)
    }
}

/// Print the final line of an autoplay round
pub fn print_report<W: Write>(report: &RoundReport, out: &mut W) -> Result<()> {
    if report.is_found() {
        writeln!(out, "found in {} tries\n", report.guess_count())?;
    } else {
        writeln!(out, "No suitable words found. Exiting game.")?;
    }
    Ok(())
}

fn positions(entries: Vec<(char, Vec<usize>)>) -> BTreeMap<char, Positions> {
    entries
        .into_iter()
        .map(|(c, ps)| (c, ps.into_iter().collect()))
        .collect()
}

fn show_match(matched: Option<Matched>) -> String {
    match matched {
        Some(Matched::Word(word)) => word,
        Some(Matched::List(words)) => format!("{:?}", words),
        None => "None".to_string(),
    }
}

/// Walk through the engine's building blocks on the loaded corpus.
pub fn demonstrate<W: Write>(corpus: &Corpus, out: &mut W) -> Result<()> {
    let words = corpus.words();

    for (letter, count) in LetterFrequencies::from_words(words).ranked() {
        writeln!(out, "{}: {}", letter, count)?;
    }
    writeln!(out)?;

    writeln!(
        out,
        "{:?}",
        find_words_with_letters(&["and", "din", "aid", "dan"], &['a', 'd', 'n'])
    )?;
    writeln!(
        out,
        "{:?}",
        find_words_with_letters(words, &['s', 'e', 'a', 'o', 'r'])
    )?;
    writeln!(out)?;

    for (secret, guess) in [("level", "sofas"), ("store", "crazy"), ("crane", "raise")] {
        writeln!(out, "{}", check(secret, guess)?)?;
    }
    writeln!(out)?;

    let examples = [
        show_match(find_matched_words(
            &["batch", "ozone"],
            &['a', 'b', 'c', 'd'],
            &positions(vec![('n', vec![2]), ('z', vec![2, 3])]),
            &positions(vec![('o', vec![0, 2]), ('e', vec![4])]),
            MatchMode::Word,
        )),
        show_match(find_matched_words(
            words,
            &['i', 'o', 'u', 'l', 'd', 'w', 't'],
            &positions(vec![('s', vec![1, 2]), ('p', vec![3])]),
            &positions(vec![('s', vec![0]), ('a', vec![2])]),
            MatchMode::Word,
        )),
        show_match(find_matched_words(
            words,
            &['m'],
            &positions(vec![('p', vec![2, 3]), ('d', vec![0])]),
            &positions(vec![('a', vec![1, 4])]),
            MatchMode::Word,
        )),
        show_match(find_matched_words(
            words,
            &['a', 'e', 'i', 'o', 'u', 'y', 'r', 'w', 't'],
            &BTreeMap::new(),
            &BTreeMap::new(),
            MatchMode::Word,
        )),
    ];
    for example in examples {
        writeln!(out, "{}", example)?;
    }
    writeln!(out)?;
    Ok(())
}
