//! Operation: sort blocks of lines that each start at a `|` line, such as
//! the arms of a pattern match.

/// Split `input` into blocks. A block starts at every line whose trimmed
/// text begins with `|`; lines before the first such line form a leading
/// block, which is empty when the input starts with a delimiter.
///
/// Line terminators are kept, so concatenating the blocks restores the input.
pub fn split_blocks(input: &str) -> Vec<String> {
    let mut blocks = vec![String::new()];
    for line in input.split_inclusive('\n') {
        if line.trim().starts_with('|') {
            blocks.push(String::new());
        }
        if let Some(current) = blocks.last_mut() {
            current.push_str(line);
        }
    }
    blocks
}

/// Sort the blocks of `input` by their full text and join them back.
pub fn sort_blocks(input: &str) -> String {
    let mut blocks = split_blocks(input);
    blocks.sort();
    blocks.concat()
}
