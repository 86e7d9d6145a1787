use crate::*;

pub const TEXT: &str = "The tea was served at eight; we ate, and the cat sat on a tan mat. \
Nat said the rats on the star would not listen, silent as stone, though the \
notes of the tones were heard. A vile evil lives in the veil, Live it!";

///Every anagram group in `TEXT`, in index order, words in the order they occur in the text
pub const TEXT_GROUPS: &[&[&str]] = &[
   &["stone","notes","tones"],
   &["vile","evil","veil","live"],
   &["listen","silent"],
   &["rats","star"],
   &["tan","nat"],
   &["tea","ate"],
];

///Number of words (tokens) in `TEXT`
pub const TEXT_TOKENS: usize = 46;

///Number of distinct words in `TEXT`
pub const TEXT_DISTINCT_WORDS: usize = 38;

///Number of distinct summaries in `TEXT`
pub const TEXT_SUMMARIES: usize = 29;

pub fn get_test_words() -> Vec<String> {
    Words::new(TEXT.as_bytes()).map(|word| word.expect("reading from memory")).collect()
}

///Words whose summaries strictly increase with every step (`side`^3 - 1 words); inserting
///them in order degenerates the tree into a single chain of right children
pub fn get_chain_words(side: usize) -> Vec<String> {
    let mut words = Vec::with_capacity(side * side * side);
    for a in 0..side {
        for b in 0..side {
            for c in 0..side {
                if a + b + c > 0 {
                    words.push(format!("{}{}{}", "a".repeat(a), "b".repeat(b), "c".repeat(c)));
                }
            }
        }
    }
    words
}

///Groups of an index as owned strings, sorted so they can be compared regardless of tree order
pub fn sorted_groups(index: &AnagramIndex) -> Vec<Vec<String>> {
    let mut groups: Vec<Vec<String>> = index.groups().map(|group| {
        let mut words = group.to_vec();
        words.sort();
        words
    }).collect();
    groups.sort();
    groups
}
