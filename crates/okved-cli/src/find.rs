use std::io::{self, Write};

use anyhow::Result;
use okved_core::{find_match, MatchResult, MatchResultDto, NormalizedPhone};
use okved_registry::RegistrySource;
use serde::Serialize;
use tracing::debug;

pub fn find_okved(source: &dyn RegistrySource, raw_phone: &str) -> Result<MatchResult> {
    let phone = NormalizedPhone::parse(raw_phone)?;
    let entries = source.fetch()?;
    debug!(source = source.source_name(), entries = entries.len(), "registry loaded");
    let result = find_match(phone.as_str(), &entries)?;
    Ok(result)
}

pub fn print_result(result: &MatchResult) -> Result<()> {
    print_json(&MatchResultDto::from(result))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
