//! Line-driven browsing session.
//!
//! Each input line is one user interaction: it calls exactly one engine
//! setter and the resulting projection is rendered immediately.

use std::io::{self, BufRead, Write};

use pubs_core::FilterEngine;
use pubs_model::SortOrder;
use tracing::debug;

use crate::render::TableSink;

pub const HELP: &str = "\
commands:
  search <text>     show publications containing <text>
  clear             clear the search
  filter <category> show one category (\"all\" for every category)
  sort <order>      year-desc, year-asc or default
  reset             restore the default view
  show              render the current view again
  help              print this help
  quit              leave the session";

/// A parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Search(String),
    Clear,
    Filter(String),
    Sort(SortOrder),
    Reset,
    Show,
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<BrowseCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };
    let command = match verb.to_ascii_lowercase().as_str() {
        "search" | "s" => {
            if rest.is_empty() {
                BrowseCommand::Clear
            } else {
                BrowseCommand::Search(rest.to_string())
            }
        }
        "clear" => BrowseCommand::Clear,
        "filter" | "f" => {
            if rest.is_empty() {
                return Err("filter needs a category or \"all\"".to_string());
            }
            BrowseCommand::Filter(rest.to_string())
        }
        "sort" => BrowseCommand::Sort(rest.parse::<SortOrder>().map_err(|e| e.to_string())?),
        "reset" => BrowseCommand::Reset,
        "show" => BrowseCommand::Show,
        "help" | "?" => BrowseCommand::Help,
        "quit" | "exit" | "q" => BrowseCommand::Quit,
        other => return Err(format!("unknown command: {other}")),
    };
    Ok(Some(command))
}

/// Run a session until `quit` or end of input.
///
/// The initial view is rendered before the first line is read. Invalid
/// lines print a hint and leave the view state untouched.
pub fn run_session<R, W>(engine: &mut FilterEngine<'_>, input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    engine.apply_to(&mut TableSink::new(&mut output))?;
    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                writeln!(output, "{message} (type \"help\" for commands)")?;
                continue;
            }
        };
        debug!(?command, "browse command");
        match command {
            BrowseCommand::Search(term) => {
                engine.set_search_term(&term);
            }
            BrowseCommand::Clear => {
                engine.set_search_term("");
            }
            BrowseCommand::Filter(filter) => {
                engine.set_filter(filter.as_str());
            }
            BrowseCommand::Sort(sort) => {
                engine.set_sort(sort);
            }
            BrowseCommand::Reset => {
                engine.reset();
            }
            BrowseCommand::Show => {}
            BrowseCommand::Help => {
                writeln!(output, "{HELP}")?;
                continue;
            }
            BrowseCommand::Quit => break,
        }
        engine.apply_to(&mut TableSink::new(&mut output))?;
    }
    output.flush()
}
