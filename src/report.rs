use std::io::{self, Write};

use crate::index::*;

///Writes the groups as plain text: the words of each group on a single line,
///separated by spaces, with an empty line between groups and a trailing empty line
pub fn write_groups_text<'a>(writer: &mut impl Write, groups: impl Iterator<Item=AnagramGroup<'a>>) -> Result<(), io::Error> {
    for (i, group) in groups.enumerate() {
        if i > 0 {
            writeln!(writer)?;
        }
        writeln!(writer, "{}", group.words.join(" "))?;
    }
    writeln!(writer)?;
    Ok(())
}

///Writes the groups as a JSON array, each group an object with a `summary` and `words` key
pub fn write_groups_json<'a>(writer: &mut impl Write, groups: impl Iterator<Item=AnagramGroup<'a>>) -> Result<(), io::Error> {
    let groups: Vec<AnagramGroup> = groups.collect();
    serde_json::to_writer_pretty(&mut *writer, &groups)?;
    writeln!(writer)?;
    Ok(())
}

///Writes all nodes as tab separated values, the summary in the first column and the words in the following columns
pub fn write_index_tsv<'a>(writer: &mut impl Write, nodes: impl Iterator<Item=&'a TreeNode>) -> Result<(), io::Error> {
    for node in nodes {
        write!(writer, "{}", node.summary())?;
        for word in node.words() {
            write!(writer, "\t{}", word)?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AnagramIndex;

    fn output(index: &AnagramIndex) -> String {
        let mut buffer: Vec<u8> = Vec::new();
        write_groups_text(&mut buffer, index.groups()).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn text_blank_line_between_groups() {
        let index = AnagramIndex::from_words(&["eat", "tea", "tan", "ate", "nat", "bat"]).unwrap();
        //a1n1t1 sorts before a1e1t1: the counts first differ at 'e'
        assert_eq!(output(&index), "tan nat\n\neat tea ate\n\n");
    }

    #[test]
    fn text_without_groups() {
        let index = AnagramIndex::from_words(&["cat", "dog"]).unwrap();
        assert_eq!(output(&index), "\n");
    }

    #[test]
    fn json_groups() {
        let index = AnagramIndex::from_words(&["listen", "silent", "cat"]).unwrap();
        let mut buffer: Vec<u8> = Vec::new();
        write_groups_json(&mut buffer, index.groups()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value, serde_json::json!([
            { "summary": "e1i1l1n1s1t1", "words": ["listen", "silent"] }
        ]));
    }

    #[test]
    fn index_tsv_includes_singletons() {
        let index = AnagramIndex::from_words(&["ab", "ba", "c"]).unwrap();
        let mut buffer: Vec<u8> = Vec::new();
        write_index_tsv(&mut buffer, index.nodes()).unwrap();
        //c has no a's so it sorts first
        assert_eq!(String::from_utf8(buffer).unwrap(), "c1\tc\na1b1\tab\tba\n");
    }
}
