use crate::commands::helpers::require_item_mut;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StashError};
use crate::store::DataStore;

/// Sets or clears an item's rating. `Some(n)` must be within 1..=5.
pub fn run<S: DataStore>(store: &mut S, video_id: &str, rating: Option<u8>) -> Result<CmdResult> {
    if let Some(n) = rating {
        if !(1..=5).contains(&n) {
            return Err(StashError::InvalidRating(n));
        }
    }

    let mut library = store.load_library()?;
    let item = require_item_mut(&mut library, video_id)?;
    item.rating = rating;
    let item = item.clone();
    store.save_library(&library)?;

    let mut result = CmdResult::default();
    match rating {
        Some(n) => result.add_message(CmdMessage::success(format!(
            "Rated {} {}/5",
            item.title, n
        ))),
        None => result.add_message(CmdMessage::success(format!(
            "Cleared rating for {}",
            item.title
        ))),
    }
    result.affected_items.push(item);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::DataStore;

    #[test]
    fn sets_and_clears_rating() {
        let mut fx = StoreFixture::new().with_item("a");

        run(&mut fx.store, "a", Some(4)).unwrap();
        assert_eq!(
            fx.store.load_library().unwrap().get("a").unwrap().rating,
            Some(4)
        );

        run(&mut fx.store, "a", None).unwrap();
        assert_eq!(fx.store.load_library().unwrap().get("a").unwrap().rating, None);
    }

    #[test]
    fn rejects_out_of_range() {
        let mut fx = StoreFixture::new().with_item("a");
        assert!(matches!(
            run(&mut fx.store, "a", Some(0)),
            Err(StashError::InvalidRating(0))
        ));
        assert!(matches!(
            run(&mut fx.store, "a", Some(6)),
            Err(StashError::InvalidRating(6))
        ));
        // Library untouched.
        assert_eq!(fx.store.load_library().unwrap().get("a").unwrap().rating, None);
    }

    #[test]
    fn unknown_item_is_an_error() {
        let mut fx = StoreFixture::new();
        assert!(matches!(
            run(&mut fx.store, "nope", Some(3)),
            Err(StashError::ItemNotFound(_))
        ));
    }
}
