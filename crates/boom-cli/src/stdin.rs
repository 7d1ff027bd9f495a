// crates/boom-cli/src/stdin.rs - Reading the confirmation answer
//
// Destructive commands ask one question and read one line. There is no
// timeout; a closed or empty stdin answers "", which declines.

use anyhow::Result;
use std::io::{self, BufRead};

/// Read one line from stdin without its line ending
pub fn read_answer() -> Result<String> {
    read_answer_from(io::stdin().lock())
}

fn read_answer_from(mut reader: impl BufRead) -> Result<String> {
    let mut buffer = String::new();
    reader.read_line(&mut buffer)?;
    Ok(buffer.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_first_line_only() {
        let answer = read_answer_from("yes\nno\n".as_bytes()).unwrap();
        assert_eq!(answer, "yes");
    }

    #[test]
    fn test_keeps_inner_whitespace() {
        // Only the line ending is stripped; " y" must still decline
        let answer = read_answer_from(" y\r\n".as_bytes()).unwrap();
        assert_eq!(answer, " y");
    }

    #[test]
    fn test_eof_is_empty_answer() {
        assert_eq!(read_answer_from("".as_bytes()).unwrap(), "");
    }
}
