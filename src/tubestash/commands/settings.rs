use crate::commands::{CmdMessage, CmdResult};
use crate::config::RetentionPolicy;
use crate::error::Result;
use crate::store::DataStore;

pub fn show<S: DataStore>(store: &S) -> Result<CmdResult> {
    let settings = store.load_settings()?;
    Ok(CmdResult::default().with_settings(settings))
}

pub fn set_retention_policy<S: DataStore>(
    store: &mut S,
    policy: RetentionPolicy,
) -> Result<CmdResult> {
    let mut settings = store.load_settings()?;
    settings.retention_policy = policy;
    store.save_settings(&settings)?;

    let mut result = CmdResult::default().with_settings(settings);
    result.add_message(CmdMessage::success(format!(
        "retention-policy = {}",
        policy
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn show_defaults() {
        let fx = StoreFixture::new();
        let result = show(&fx.store).unwrap();
        assert_eq!(
            result.settings.unwrap().retention_policy,
            RetentionPolicy::Ask
        );
    }

    #[test]
    fn set_persists() {
        let mut fx = StoreFixture::new();
        set_retention_policy(&mut fx.store, RetentionPolicy::Delete).unwrap();
        let result = show(&fx.store).unwrap();
        assert_eq!(
            result.settings.unwrap().retention_policy,
            RetentionPolicy::Delete
        );
    }
}
