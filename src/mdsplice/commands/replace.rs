use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::section::replace_section;

pub fn run(markdown: &str, heading: &str, replacement: &str) -> Result<CmdResult> {
    let updated = replace_section(markdown, heading, replacement)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Replaced section: {} ({} bytes)",
        heading.trim(),
        updated.len()
    )));
    Ok(result.with_output(updated))
}
