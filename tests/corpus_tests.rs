use std::fs;
use wordle_autoplay::validate::GuessValidator;
use wordle_autoplay::{Corpus, ValidationError, WordleError};

#[test]
fn test_embedded_dictionary() {
    let corpus = Corpus::embedded(5).unwrap();
    assert!(corpus.len() > 100);
    assert!(corpus.words().iter().all(|w| w.len() == 5));
    assert!(corpus.contains("crane"));
    assert!(corpus.contains("CRANE"));
    assert!(!corpus.contains("zzzzz"));
}

#[test]
fn test_parse_trims_and_skips_blank_lines() {
    let corpus = Corpus::parse("  crane\n\nSLATE \r\n", 5).unwrap();
    assert_eq!(corpus.words(), &["crane".to_string(), "slate".to_string()]);
}

#[test]
fn test_wrong_length_names_the_line() {
    let err = Corpus::parse("crane\ncranes\n", 5).unwrap_err();
    match err {
        WordleError::InvalidInput(msg) => {
            assert!(msg.contains("line 2"), "{}", msg);
            assert!(msg.contains("cranes"), "{}", msg);
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_non_letters_rejected() {
    assert!(matches!(
        Corpus::parse("cr4ne\n", 5),
        Err(WordleError::InvalidInput(_))
    ));
    assert!(matches!(
        Corpus::parse("cr-ne\n", 5),
        Err(WordleError::InvalidInput(_))
    ));
}

#[test]
fn test_empty_list_rejected() {
    assert!(matches!(
        Corpus::parse("\n\n", 5),
        Err(WordleError::InvalidInput(_))
    ));
}

#[test]
fn test_other_word_lengths() {
    let corpus = Corpus::new(vec!["and".into(), "din".into()], 3).unwrap();
    assert_eq!(corpus.word_length(), 3);
    assert_eq!(corpus.len(), 2);
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("wordle-autoplay-{}.txt", std::process::id()));
    fs::write(&path, "crane\nslate\n").unwrap();
    let corpus = Corpus::load(&path, 5).unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(corpus.len(), 2);
}

#[test]
fn test_load_missing_file() {
    let err = Corpus::load("/nonexistent/wordle-autoplay/words.txt", 5).unwrap_err();
    assert!(matches!(err, WordleError::Io(_)));
}

fn small_corpus() -> Corpus {
    Corpus::new(vec!["crane".into(), "slate".into()], 5).unwrap()
}

fn rejection(validator: &GuessValidator, input: &str) -> ValidationError {
    match validator.validate(input) {
        Err(WordleError::Validation(rule)) => rule,
        other => panic!("expected a validation error for {:?}, got {:?}", input, other),
    }
}

#[test]
fn test_validator_accepts_known_word() {
    let corpus = small_corpus();
    let validator = GuessValidator::new(&corpus);
    assert_eq!(validator.validate("Crane").unwrap(), "crane");
}

#[test]
fn test_validator_rules() {
    let corpus = small_corpus();
    let validator = GuessValidator::new(&corpus);

    assert_eq!(rejection(&validator, ""), ValidationError::Empty);
    assert_eq!(
        rejection(&validator, "cranes"),
        ValidationError::WrongLength {
            word: "cranes".into(),
            expected: 5
        }
    );
    assert_eq!(
        rejection(&validator, "cr4ne"),
        ValidationError::ContainsDigits("cr4ne".into())
    );
    assert_eq!(
        rejection(&validator, "cr@ne"),
        ValidationError::ContainsSymbols("cr@ne".into())
    );
    assert_eq!(
        rejection(&validator, "zzzzz"),
        ValidationError::NotInCorpus("zzzzz".into())
    );
}

#[test]
fn test_validation_error_message_passes_through() {
    let corpus = small_corpus();
    let err = GuessValidator::new(&corpus).validate("zzzzz").unwrap_err();
    assert_eq!(err.to_string(), "zzzzz is not in the list of accepted words!");
}

#[test]
fn test_validation_messages() {
    assert_eq!(ValidationError::Empty.to_string(), "You have not entered a word!");
    assert_eq!(
        ValidationError::WrongLength {
            word: "abc".into(),
            expected: 5
        }
        .to_string(),
        "abc is not 5 letters long!"
    );
}
