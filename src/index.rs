use serde::Serialize;

use crate::types::*;
use crate::summary::Summary;

///A node in the anagram index: one distinct summary and all distinct words that produced it
#[derive(Clone,Debug)]
pub struct TreeNode {
    pub(crate) summary: Summary,
    ///Distinct words in order of first appearance, never empty
    pub(crate) words: Vec<String>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl TreeNode {
    pub(crate) fn new(summary: Summary, word: String) -> Self {
        TreeNode {
            summary,
            words: vec!(word),
            left: None,
            right: None,
        }
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    ///Appends the word unless it is already present, returns whether it was appended
    pub(crate) fn add_word(&mut self, word: &str) -> bool {
        if self.words.iter().any(|existing| existing == word) {
            false
        } else {
            self.words.push(word.to_string());
            true
        }
    }

    pub fn group(&self) -> AnagramGroup<'_> {
        AnagramGroup {
            summary: &self.summary,
            words: &self.words,
        }
    }
}

///A reported set of words that are anagrams of one another
#[derive(Clone,Copy,Debug,PartialEq,Serialize)]
pub struct AnagramGroup<'a> {
    pub summary: &'a Summary,
    pub words: &'a [String],
}

impl AnagramGroup<'_> {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    ///The words as owned strings, mostly a convenience for comparisons
    pub fn to_vec(&self) -> Vec<String> {
        self.words.to_vec()
    }
}
