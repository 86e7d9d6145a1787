///Number of letters in the alphabet we summarize over ('a' to 'z')
pub const ALPHABET_SIZE: usize = 26;

///Occurrence count of a single letter within a word
pub type LetterCount = u16;

///Index of a node in the arena of the anagram index, carries no further meaning
pub type NodeId = usize;

///Outcome of inserting a word into the index
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum InsertResult {
    ///The summary was new, a new leaf node was created for it
    NewNode,
    ///The summary existed, the word was appended to its word list
    Appended,
    ///The word was already present, nothing changed
    Duplicate,
}

impl InsertResult {
    ///Did the insertion add a word that wasn't there before?
    pub fn is_new_word(&self) -> bool {
        match self {
            Self::NewNode | Self::Appended => true,
            Self::Duplicate => false,
        }
    }
}

#[derive(Clone,Debug,PartialEq)]
pub struct IndexParameters {
    /// Minimum number of distinct words a summary needs before it is reported as a group. Set to 1 to report every word, including those without anagrams.
    pub min_group_size: usize,

    /// Tokenize and insert on a single thread, instead of computing summaries in parallel
    /// before insertion (lowers resource use, the resulting index is identical)
    pub single_thread: bool,
}

impl Default for IndexParameters {
    fn default() -> Self {
        Self {
            min_group_size: 2,
            single_thread: false,
        }
    }
}

impl IndexParameters {
    pub fn with_min_group_size(mut self, size: usize) -> Self {
        self.min_group_size = size;
        self
    }
    pub fn with_single_thread(mut self) -> Self {
        self.single_thread = true;
        self
    }
}
