use crate::chunk::split_into_chunks;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(markdown: &str, chunk_bytes: usize) -> Result<CmdResult> {
    let chunks = split_into_chunks(markdown, chunk_bytes);

    let mut result = CmdResult::default();
    if chunks.is_empty() {
        result.add_message(CmdMessage::info("No content to split."));
        return Ok(result);
    }

    let largest = chunks.iter().map(|c| c.len()).max().unwrap_or(0);
    result.add_message(CmdMessage::info(format!(
        "{} chunk(s), largest is {} bytes",
        chunks.len(),
        largest
    )));
    Ok(result.with_chunks(chunks))
}
