use std::fs::File;
use std::io::{self, BufReader, Bytes, Read};

/// Reads words from a byte stream. A word is the longest contiguous
/// run of ASCII letters, it is returned in lower case. Any other byte
/// (including those of non-ASCII UTF-8 sequences) separates words.
///
/// Read errors are passed on as `Err` items.
///
/// # Examples
///
/// ```
/// # use anatree::*;
/// let words: Vec<String> = Words::new("Don't panic!".as_bytes()).map(|w| w.unwrap()).collect();
/// assert_eq!(words, vec!("don", "t", "panic"));
/// ```
pub struct Words<R: Read> {
    bytes: Bytes<R>,
}

impl<R: Read> Words<R> {
    pub fn new(reader: R) -> Self {
        Words {
            bytes: reader.bytes(),
        }
    }
}

impl Words<BufReader<File>> {
    ///Read words from the file at the given path
    pub fn open(filename: &str) -> Result<Self, io::Error> {
        let f = File::open(filename)?;
        Ok(Words::new(BufReader::new(f)))
    }
}

impl<R: Read> Iterator for Words<R> {
    type Item = Result<String, io::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut word = String::new();
        loop {
            match self.bytes.next() {
                Some(Ok(byte)) if byte.is_ascii_alphabetic() => {
                    word.push(byte.to_ascii_lowercase() as char);
                },
                Some(Ok(_)) => {
                    if !word.is_empty() {
                        return Some(Ok(word));
                    }
                },
                Some(Err(e)) => {
                    return Some(Err(e));
                },
                None => {
                    return if word.is_empty() {
                        None
                    } else {
                        Some(Ok(word))
                    };
                }
            }
        }
    }
}
