use wordle_autoplay::solver::{benchmark_guess_distribution, solve_for_target, RoundState};
use wordle_autoplay::{Corpus, FirstPicker, RandomPicker, Round, RoundOutcome, WordleError};

fn get_test_words() -> Corpus {
    Corpus::new(
        vec![
            "crane".to_string(),
            "slate".to_string(),
            "trace".to_string(),
            "crate".to_string(),
            "raise".to_string(),
            "arise".to_string(),
            "stare".to_string(),
            "roast".to_string(),
            "toast".to_string(),
            "beast".to_string(),
        ],
        5,
    )
    .unwrap()
}

#[test]
fn test_round_starts_seeding_with_full_corpus() {
    let corpus = get_test_words();
    let round = Round::new(&corpus, "crate").unwrap();
    assert_eq!(round.state(), &RoundState::Seeding);
    assert_eq!(round.candidates().len(), corpus.len());
    assert!(round.constraints().is_empty());
}

#[test]
fn test_seeding_picks_corpus_word() {
    let corpus = get_test_words();
    let mut round = Round::new(&corpus, "crate").unwrap();
    assert!(round.step(&mut FirstPicker).unwrap().is_none());
    match round.state() {
        RoundState::Guessing { guess } => assert!(corpus.contains(guess)),
        other => panic!("unexpected state {:?}", other),
    }
}

#[test]
fn test_seeding_falls_back_to_full_corpus() {
    // no three-letter word holds the four distinct letters of this list
    let corpus = Corpus::new(
        vec!["and".into(), "din".into(), "aid".into(), "dan".into()],
        3,
    )
    .unwrap();
    let mut round = Round::new(&corpus, "aid").unwrap();
    round.step(&mut FirstPicker).unwrap();
    assert_eq!(
        round.state(),
        &RoundState::Guessing {
            guess: "and".to_string()
        }
    );

    let report = Round::new(&corpus, "aid")
        .unwrap()
        .play(&mut FirstPicker, |_, _, _| {})
        .unwrap();
    assert!(report.is_found());
}

#[test]
fn test_candidates_shrink_and_keep_secret() {
    let corpus = Corpus::embedded(5).unwrap();
    let mut round = Round::new(&corpus, "ozone").unwrap();
    let mut last = round.candidates().len();

    while !round.is_finished() {
        round.step(&mut FirstPicker).unwrap();
        assert!(round.candidates().len() <= last);
        assert!(round.candidates().contains(&"ozone".to_string()));
        last = round.candidates().len();
    }
    assert!(matches!(round.state(), RoundState::Found { .. }));
}

#[test]
fn test_solve_for_target() {
    let corpus = get_test_words();
    let report = solve_for_target(&corpus, "crate", &mut FirstPicker).unwrap();

    assert_eq!(report.outcome, RoundOutcome::Found);
    assert!(report.guess_count() <= corpus.len());

    let (final_guess, final_score) = report.history.last().unwrap();
    assert!(final_score.is_win());
    assert_eq!(final_guess, "crate");
}

#[test]
fn test_solve_various_targets() {
    let corpus = get_test_words();

    for target in corpus.words() {
        let report = solve_for_target(&corpus, target, &mut FirstPicker).unwrap();

        assert!(report.is_found(), "Didn't win for target: {}", target);
        assert!(
            report.guess_count() <= corpus.len(),
            "Too many guesses for target: {}",
            target
        );
        let (final_guess, _) = report.history.last().unwrap();
        assert_eq!(final_guess, target, "Final guess doesn't match target: {}", target);
    }
}

#[test]
fn test_deterministic_picker_is_reproducible() {
    let corpus = Corpus::embedded(5).unwrap();
    let a = solve_for_target(&corpus, "ozone", &mut FirstPicker).unwrap();
    let b = solve_for_target(&corpus, "ozone", &mut FirstPicker).unwrap();
    assert_eq!(a.history, b.history);
}

#[test]
fn test_seeded_random_picker() {
    let corpus = Corpus::embedded(5).unwrap();
    let a = solve_for_target(&corpus, "quick", &mut RandomPicker::seeded(7)).unwrap();
    let b = solve_for_target(&corpus, "quick", &mut RandomPicker::seeded(7)).unwrap();
    assert!(a.is_found());
    assert_eq!(a.history, b.history);
}

#[test]
fn test_with_full_dictionary() {
    let corpus = Corpus::embedded(5).unwrap();
    for target in ["crane", "quick", "level", "geese"] {
        assert!(corpus.contains(target), "{} missing from the dictionary", target);
        let report = solve_for_target(&corpus, target, &mut RandomPicker::new()).unwrap();
        assert!(report.is_found(), "Didn't win for target: {}", target);
        assert!(report.guess_count() <= corpus.len());
    }
}

#[test]
fn test_secret_outside_corpus_exhausts() {
    let corpus = get_test_words();
    let report = solve_for_target(&corpus, "zzzzz", &mut FirstPicker).unwrap();
    assert_eq!(report.outcome, RoundOutcome::Exhausted);
    assert!(report.guess_count() >= 1);

    let guesses = report.guess_count();
    match report.into_result() {
        Err(WordleError::Exhausted { guesses: n }) => assert_eq!(n, guesses),
        other => panic!("expected an exhausted error, got {:?}", other),
    }
}

#[test]
fn test_found_round_into_result() {
    let corpus = get_test_words();
    let report = solve_for_target(&corpus, "crate", &mut FirstPicker).unwrap();
    assert!(report.into_result().is_ok());
}

#[test]
fn test_secret_of_wrong_shape_rejected() {
    let corpus = get_test_words();
    for secret in ["cranes", "cran", "cr4ne", "hélo", ""] {
        assert!(
            matches!(Round::new(&corpus, secret), Err(WordleError::InvalidInput(_))),
            "{:?} accepted",
            secret
        );
        assert!(matches!(
            solve_for_target(&corpus, secret, &mut FirstPicker),
            Err(WordleError::InvalidInput(_))
        ));
    }
}

#[test]
fn test_uppercase_secret_is_lowered() {
    let corpus = get_test_words();
    let report = solve_for_target(&corpus, "CRATE", &mut FirstPicker).unwrap();
    assert!(report.is_found());
    assert_eq!(report.secret, "crate");
}

#[test]
fn test_play_reports_each_guess() {
    let corpus = get_test_words();
    let mut seen = Vec::new();
    let report = Round::new(&corpus, "toast")
        .unwrap()
        .play(&mut FirstPicker, |n, guess, score| {
            seen.push((n, guess.to_string(), score.clone()))
        })
        .unwrap();

    assert_eq!(seen.len(), report.guess_count());
    for (i, (n, guess, score)) in seen.iter().enumerate() {
        assert_eq!(*n, i + 1);
        assert_eq!(&report.history[i], &(guess.clone(), score.clone()));
    }
}

#[test]
fn test_finished_round_stays_finished() {
    let corpus = get_test_words();
    let mut round = Round::new(&corpus, "beast").unwrap();
    while !round.is_finished() {
        round.step(&mut FirstPicker).unwrap();
    }
    let state = round.state().clone();
    assert!(round.step(&mut FirstPicker).unwrap().is_none());
    assert_eq!(round.state(), &state);
}

#[test]
fn test_benchmark_distribution() {
    let corpus = get_test_words();
    let distribution = benchmark_guess_distribution(&corpus).unwrap();

    let total: usize = distribution.iter().map(|(_, c)| c).sum();
    assert_eq!(total, corpus.len());
    assert!(distribution.iter().all(|(guesses, _)| *guesses > 0));
}
