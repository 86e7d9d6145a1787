extern crate rayon;
extern crate simple_error;

use std::cmp::Ordering;
use std::fs::File;
use std::io::{self,BufReader,Read};
use rayon::prelude::*;
use simple_error::SimpleError;

pub mod types;
pub mod summary;
pub mod index;
pub mod iterators;
pub mod words;
pub mod report;
pub mod test;


pub use crate::types::*;
pub use crate::summary::*;
pub use crate::index::*;
pub use crate::iterators::*;
pub use crate::words::*;
pub use crate::report::*;


/// Groups words into anagram classes.
///
/// This is a binary search tree keyed on the letter-count summary of words (see
/// `compare_summaries()` for the order). Every node holds the distinct words that
/// share its summary, in the order they were first inserted. Nodes are kept in an
/// arena and refer to their children by index.
///
/// # Examples
///
/// ```
/// # use anatree::*;
/// let mut index = AnagramIndex::default();
/// for word in ["eat", "tea", "tan", "ate", "nat", "bat"] {
///     index.insert(word).unwrap();
/// }
/// let groups: Vec<Vec<String>> = index.groups().map(|group| group.to_vec()).collect();
/// assert_eq!(groups, vec!(vec!("tan","nat"), vec!("eat","tea","ate")));
/// ```
pub struct AnagramIndex {
    ///All nodes in insertion order, the tree is formed by the child links
    nodes: Vec<TreeNode>,

    root: Option<NodeId>,

    ///Number of distinct words over all nodes
    word_count: usize,

    pub params: IndexParameters,

    pub debug: bool
}

impl Default for AnagramIndex {
    fn default() -> Self {
        AnagramIndex::new(IndexParameters::default(), false)
    }
}

impl AnagramIndex {
    pub fn new(params: IndexParameters, debug: bool) -> AnagramIndex {
        AnagramIndex {
            nodes: Vec::new(),
            root: None,
            word_count: 0,
            params,
            debug,
        }
    }

    ///Builds an index with default parameters from a list of words
    pub fn from_words<I,S>(words: I) -> Result<AnagramIndex, SimpleError> where I: IntoIterator<Item=S>, S: AsRef<str> {
        let mut index = AnagramIndex::default();
        for word in words {
            index.insert(word.as_ref())?;
        }
        Ok(index)
    }

    ///Number of nodes, i.e. the number of distinct summaries
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    ///Number of distinct words in the index
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn root(&self) -> Option<&TreeNode> {
        self.root.map(|id| &self.nodes[id])
    }

    ///Resolves a node by its ID
    pub fn node(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id)
    }

    /// Insert a word into the index.
    /// The word must consist of lowercase letters a-z only, anything else
    /// is rejected with an error and leaves the index untouched.
    pub fn insert(&mut self, word: &str) -> Result<InsertResult, SimpleError> {
        let summary = Summary::from_word(word)?;
        Ok(self.insert_summarized(summary, word))
    }

    ///Insert a word for which the summary has already been computed
    fn insert_summarized(&mut self, summary: Summary, word: &str) -> InsertResult {
        let mut current = match self.root {
            Some(root) => root,
            None => {
                self.root = Some(self.push_node(summary, word));
                if self.debug {
                    eprintln!("   -- Summary={} Word={} (root)", summary, word);
                }
                return InsertResult::NewNode;
            }
        };
        loop {
            let ordering = compare_summaries(&summary, &self.nodes[current].summary);
            let next = match ordering {
                Ordering::Less => self.nodes[current].left,
                Ordering::Greater => self.nodes[current].right,
                Ordering::Equal => {
                    let result = if self.nodes[current].add_word(word) {
                        self.word_count += 1;
                        InsertResult::Appended
                    } else {
                        InsertResult::Duplicate
                    };
                    if self.debug {
                        eprintln!("   -- Summary={} Word={} ({:?})", summary, word, result);
                    }
                    return result;
                }
            };
            match next {
                Some(child) => current = child,
                None => {
                    let id = self.push_node(summary, word);
                    if ordering == Ordering::Less {
                        self.nodes[current].left = Some(id);
                    } else {
                        self.nodes[current].right = Some(id);
                    }
                    if self.debug {
                        eprintln!("   -- Summary={} Word={} (new node {})", summary, word, id);
                    }
                    return InsertResult::NewNode;
                }
            }
        }
    }

    fn push_node(&mut self, summary: Summary, word: &str) -> NodeId {
        self.nodes.push(TreeNode::new(summary, word.to_string()));
        self.word_count += 1;
        self.nodes.len() - 1
    }

    ///Finds the node for a summary
    pub fn get(&self, summary: &Summary) -> Option<&TreeNode> {
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.nodes[id];
            current = match compare_summaries(summary, &node.summary) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(node),
            };
        }
        None
    }

    ///Get all words in the index that are anagrams of the given word (including the word itself, if present)
    pub fn anagrams_of(&self, word: &str) -> Result<&[String], SimpleError> {
        let summary = word.summary()?;
        Ok(self.get(&summary).map(|node| node.words()).unwrap_or(&[]))
    }

    ///Tests if the index has a specific word
    pub fn contains(&self, word: &str) -> bool {
        match self.anagrams_of(word) {
            Ok(words) => words.iter().any(|existing| existing == word),
            Err(_) => false,
        }
    }

    ///Height of the tree, in nodes along the longest path from the root (0 when empty)
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(NodeId,usize)> = self.root.into_iter().map(|id| (id, 1)).collect();
        while let Some((id, depth)) = stack.pop() {
            if depth > max_depth {
                max_depth = depth;
            }
            let node = &self.nodes[id];
            stack.extend(node.left.into_iter().chain(node.right).map(|child| (child, depth + 1)));
        }
        max_depth
    }

    ///Iterate over all nodes in order of ascending summary
    pub fn nodes(&self) -> InOrderIterator<'_> {
        InOrderIterator::new(&self.nodes, self.root)
    }

    ///Iterate over all anagram groups that have at least `params.min_group_size` words, in order of ascending summary
    pub fn groups(&self) -> GroupIterator<'_> {
        self.groups_with_min_size(self.params.min_group_size)
    }

    ///Iterate over all anagram groups that have at least `min_size` words (a minimum of 0 is treated as 1)
    pub fn groups_with_min_size(&self, min_size: usize) -> GroupIterator<'_> {
        GroupIterator::new(self.nodes(), min_size.max(1))
    }

    ///Tokenizes the input and inserts all words as they are read.
    ///Returns the number of tokens read.
    pub fn add_words(&mut self, reader: impl Read) -> Result<usize, io::Error> {
        let mut count = 0;
        for word in Words::new(reader) {
            let word = word?;
            self.insert(&word).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            count += 1;
        }
        Ok(count)
    }

    /// Computes the summaries of all words in parallel, and then
    /// inserts them one by one in the order given. Returns the number of words that were new to the index.
    /// If any word is malformed, nothing is inserted.
    pub fn extend_parallel(&mut self, words: &[String]) -> Result<usize, SimpleError> {
        if self.debug {
            eprintln!("(computing summaries for {} words)", words.len());
        }
        let summaries: Vec<Summary> = words.par_iter().map(|word| word.summary()).collect::<Result<_,_>>()?;
        let mut added = 0;
        for (summary, word) in summaries.into_iter().zip(words.iter()) {
            if self.insert_summarized(summary, word).is_new_word() {
                added += 1;
            }
        }
        Ok(added)
    }

    ///Reads all words from the input into the index.
    ///Streams word by word if `params.single_thread` is set, otherwise tokenizes everything first
    ///and computes the summaries in parallel. Returns the number of tokens read.
    pub fn load_words(&mut self, reader: impl Read) -> Result<usize, io::Error> {
        let count = if self.params.single_thread {
            self.add_words(reader)?
        } else {
            let words = Words::new(reader).collect::<Result<Vec<String>,io::Error>>()?;
            self.extend_parallel(&words).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            words.len()
        };
        if self.debug {
            eprintln!(" - Read {} words, index has {} distinct words over {} summaries", count, self.word_count, self.nodes.len());
        }
        Ok(count)
    }

    ///Read words from a text file, see `load_words()`
    pub fn read_words(&mut self, filename: &str) -> Result<usize, io::Error> {
        if self.debug {
            eprintln!("Reading words from {}...", filename);
        }
        let f = File::open(filename)?;
        self.load_words(BufReader::new(f))
    }
}
