use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::query::{self, SearchCondition};
use crate::store::DataStore;

/// Runs a condition query over the library. Conditions come straight from
/// user input; the engine never rejects an operand.
pub fn run<S: DataStore>(
    store: &S,
    include: &[SearchCondition],
    exclude: &[SearchCondition],
) -> Result<CmdResult> {
    let library = store.load_library()?;
    let matched: Vec<_> = query::evaluate(&library.items, include, exclude)
        .into_iter()
        .cloned()
        .collect();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("{} item(s) matched", matched.len())));
    result.listed_items = matched;
    Ok(result)
}
