use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StashError};
use crate::query::{SearchCondition, SearchTemplate};
use crate::store::DataStore;

/// Saves the given condition lists under a name. Template ids are generated
/// and unique; names are free-form and may repeat.
pub fn save<S: DataStore>(
    store: &mut S,
    name: &str,
    include: Vec<SearchCondition>,
    exclude: Vec<SearchCondition>,
) -> Result<CmdResult> {
    let name = name.trim();
    if name.is_empty() {
        return Err(StashError::Api("Template name cannot be empty".into()));
    }

    let template = SearchTemplate::new(name, include, exclude);
    let mut templates = store.load_templates()?;
    templates.push(template.clone());
    store.save_templates(&templates)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Saved template '{}' ({})",
        template.name, template.id
    )));
    result.templates.push(template);
    Ok(result)
}

pub fn list<S: DataStore>(store: &S) -> Result<CmdResult> {
    let templates = store.load_templates()?;
    Ok(CmdResult::default().with_templates(templates))
}

pub fn get<S: DataStore>(store: &S, id: &str) -> Result<SearchTemplate> {
    store
        .load_templates()?
        .into_iter()
        .find(|t| t.id == id)
        .ok_or_else(|| StashError::TemplateNotFound(id.to_string()))
}

pub fn delete<S: DataStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let mut templates = store.load_templates()?;
    let before = templates.len();
    templates.retain(|t| t.id != id);
    if templates.len() == before {
        return Err(StashError::TemplateNotFound(id.to_string()));
    }
    store.save_templates(&templates)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Deleted template {}", id)));
    Ok(result)
}
