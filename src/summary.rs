use std::cmp::Ordering;
use std::fmt;

use serde::{Serialize, Serializer};
use simple_error::SimpleError;

use crate::types::*;

///The letter-count summary of a word: index i holds the number of occurrences of letter 'a'+i.
///All anagrams of a word share the same summary, so it is the key of the anagram index.
#[derive(Clone,Copy,PartialEq,Eq,Hash,Debug)]
pub struct Summary([LetterCount; ALPHABET_SIZE]);

///Trait for objects that can be summarized (string-like)
pub trait Summarizable {
    fn summary(&self) -> Result<Summary, SimpleError>;
}

impl Summarizable for str {
    ///Compute the letter-count summary of a word.
    ///The word must be non-empty and consist of lowercase ASCII letters only
    fn summary(&self) -> Result<Summary, SimpleError> {
        if self.is_empty() {
            return Err(SimpleError::new("cannot summarize an empty word"));
        }
        let mut counts = [0 as LetterCount; ALPHABET_SIZE];
        for c in self.chars() {
            if !c.is_ascii_lowercase() {
                return Err(SimpleError::new(format!("cannot summarize '{}': '{}' is not a letter between a and z", self, c)));
            }
            let count = &mut counts[(c as u8 - b'a') as usize];
            *count = count.checked_add(1).ok_or_else(|| {
                SimpleError::new(format!("cannot summarize word of length {}: letter '{}' occurs more than {} times", self.len(), c, LetterCount::MAX))
            })?;
        }
        Ok(Summary(counts))
    }
}

impl Summary {
    ///Computes the summary for a word, see `Summarizable::summary()`
    ///
    /// # Examples
    ///
    /// ```
    /// # use anatree::*;
    /// let eat = Summary::from_word("eat").unwrap();
    /// assert_eq!(eat, Summary::from_word("tea").unwrap());
    /// assert_eq!(eat.count('e'), 1);
    /// assert_eq!(eat.to_string(), "a1e1t1");
    /// ```
    pub fn from_word(word: &str) -> Result<Summary, SimpleError> {
        word.summary()
    }

    pub fn from_counts(counts: [LetterCount; ALPHABET_SIZE]) -> Summary {
        Summary(counts)
    }

    /// The summary of the empty word, all counts zero.
    /// This is the lowest possible summary.
    pub fn empty() -> Summary {
        Summary([0; ALPHABET_SIZE])
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|count| *count == 0)
    }

    pub fn counts(&self) -> &[LetterCount; ALPHABET_SIZE] {
        &self.0
    }

    ///Number of occurrences of a letter, 0 for anything that is not a lowercase ASCII letter
    pub fn count(&self, letter: char) -> LetterCount {
        if letter.is_ascii_lowercase() {
            self.0[(letter as u8 - b'a') as usize]
        } else {
            0
        }
    }

    ///Computes the number of characters in the summarized word
    pub fn char_count(&self) -> usize {
        self.0.iter().map(|count| *count as usize).sum()
    }
}

///Compares two summaries letter by letter, from 'a' to 'z'.
///The first letter at which the counts differ decides, by the sign of their difference.
///This is the order of the anagram index; it is total but has no relation to the
///alphabetical order of the words themselves.
pub fn compare_summaries(left: &Summary, right: &Summary) -> Ordering {
    for (l, r) in left.0.iter().zip(right.0.iter()) {
        if l != r {
            return (*l as i32 - *r as i32).cmp(&0);
        }
    }
    Ordering::Equal
}

impl Ord for Summary {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_summaries(self, other)
    }
}

impl PartialOrd for Summary {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

///Compact notation: every letter that occurs followed by its count (a1e1t1), `-` for the empty summary
impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        for (i, count) in self.0.iter().enumerate() {
            if *count > 0 {
                write!(f, "{}{}", (b'a' + i as u8) as char, count)?;
            }
        }
        Ok(())
    }
}

impl Serialize for Summary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
