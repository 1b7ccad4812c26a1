use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFilter {
    All,
    /// Only items flagged as gone from the remote source.
    Orphans,
}

pub fn run<S: DataStore>(store: &S, filter: ListFilter) -> Result<CmdResult> {
    let library = store.load_library()?;

    let listed = match filter {
        ListFilter::All => library.items.clone(),
        ListFilter::Orphans => library.orphans().cloned().collect(),
    };

    let mut result = CmdResult::default().with_listed_items(listed);
    result.last_sync = library.last_sync;
    Ok(result)
}
