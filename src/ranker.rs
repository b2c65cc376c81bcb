//! Letter frequency ranking, used to seed the solver's first guess.

/// Letter counts over a corpus, kept in order of first occurrence.
#[derive(Debug, Clone, Default)]
pub struct LetterFrequencies {
    counts: Vec<(char, usize)>,
}

impl LetterFrequencies {
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        let mut counts: Vec<(char, usize)> = Vec::new();
        for word in words {
            for c in word.as_ref().chars() {
                match counts.iter_mut().find(|(letter, _)| *letter == c) {
                    Some((_, count)) => *count += 1,
                    None => counts.push((c, 1)),
                }
            }
        }
        Self { counts }
    }

    pub fn count(&self, letter: char) -> usize {
        self.counts
            .iter()
            .find(|(c, _)| *c == letter)
            .map_or(0, |&(_, count)| count)
    }

    /// Letters with their counts, most frequent first. Equal counts keep
    /// the order in which the letters were first seen.
    pub fn ranked(&self) -> Vec<(char, usize)> {
        let mut ranked = self.counts.clone();
        // stable
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    pub fn top(&self, n: usize) -> Vec<char> {
        self.ranked().into_iter().take(n).map(|(c, _)| c).collect()
    }
}

/// Letters of the corpus, most frequent first.
pub fn rank_letters<S: AsRef<str>>(words: &[S]) -> Vec<char> {
    LetterFrequencies::from_words(words)
        .ranked()
        .into_iter()
        .map(|(c, _)| c)
        .collect()
}

/// Find all words containing every one of the given letters, in corpus
/// order. For `['and', 'din', 'aid', 'dan']` and `['a', 'd', 'n']` this is
/// `['and', 'dan']`.
pub fn find_words_with_letters<S: AsRef<str>>(words: &[S], letters: &[char]) -> Vec<String> {
    words
        .iter()
        .map(AsRef::as_ref)
        .filter(|word| letters.iter().all(|&letter| word.contains(letter)))
        .map(str::to_string)
        .collect()
}
