//! Cross-backend reconciliation.
//!
//! Library views are seeded from the catalog side: every catalog item comes
//! back annotated with the ids of its local counterpart when one exists.
//! Local items with no catalog counterpart are not surfaced by this pass.

use std::collections::HashMap;

use medley_model::{attr, CanonicalItem, ItemKind, MatchKey, MatchedItem};

/// Annotate each catalog item with cross-references to its local
/// counterpart.
///
/// Match identity is the normalized (title, subtitle) pair: deliberately
/// coarse, with no fuzzy comparison. When several local records share a key,
/// the first one in iteration order wins; duplicate titles therefore all
/// match the same arbitrary local record. That is the documented contract,
/// not a defect.
///
/// Output preserves the catalog input's length and order. Unmatched items
/// carry empty-string references, never omitted fields.
pub fn reconcile(catalog_items: Vec<CanonicalItem>, local_items: &[CanonicalItem]) -> Vec<MatchedItem> {
    let mut by_key: HashMap<MatchKey, &CanonicalItem> = HashMap::with_capacity(local_items.len());
    for item in local_items {
        // First record encountered wins; later duplicates are ignored.
        by_key.entry(MatchKey::of(item)).or_insert(item);
    }

    catalog_items
        .into_iter()
        .map(|item| match by_key.get(&MatchKey::of(&item)) {
            Some(local) => annotate(item, local),
            None => MatchedItem::unmatched(item),
        })
        .collect()
}

/// Copy the local id plus the kind-appropriate parent id onto the output:
/// a song's album, an album's artist. Other kinds get the local id alone.
fn annotate(item: CanonicalItem, local: &CanonicalItem) -> MatchedItem {
    let mut matched = MatchedItem::unmatched(item);
    matched.local_id = local.id.clone();
    match matched.item.kind {
        ItemKind::Song => {
            matched.album_id = local.extra.get(attr::ALBUM_ID).cloned().unwrap_or_default();
        }
        ItemKind::Album => {
            matched.artist_id = local.extra.get(attr::ARTIST_ID).cloned().unwrap_or_default();
        }
        _ => {}
    }
    matched
}
