//! Pure name matching of reference-list items against user text.
//!
//! Every function takes the lower-cased utterance and returns the first
//! matching item with a usable id. Lists are scanned in API order.

use wa_catalog::{LookupItem, LookupKind};

/// `(phrase in text, canonical color name)`.
const COLOR_SYNONYMS: [(&str, &str); 4] = [
    ("gold", "vàng"),
    ("vàng gold", "vàng"),
    ("màu gold", "vàng"),
    ("mạ vàng", "vàng"),
];

fn usable(item: &LookupItem) -> bool {
    item.id.as_ref().is_some_and(|id| id.is_present())
}

fn lower_name(item: &LookupItem) -> String {
    item.name_or_empty().to_lowercase()
}

/// First item whose lower-cased name occurs in `text`, or whose canonical
/// name is reached through a synonym present in `text`.
pub fn find_first_match<'a>(
    items: &'a [LookupItem],
    text: &str,
    synonyms: &[(&str, &str)],
) -> Option<&'a LookupItem> {
    items.iter().filter(|it| usable(it)).find(|it| {
        let name = lower_name(it);
        !name.is_empty()
            && (text.contains(&name)
                || synonyms
                    .iter()
                    .any(|(syn, canon)| *canon == name && text.contains(syn)))
    })
}

pub fn match_color<'a>(items: &'a [LookupItem], text: &str) -> Option<&'a LookupItem> {
    find_first_match(items, text, &COLOR_SYNONYMS).or_else(|| {
        if !(text.contains("gold") || text.contains("mạ vàng")) {
            return None;
        }
        items.iter().filter(|it| usable(it)).find(|it| {
            let n = lower_name(it);
            n.contains("vàng") || n.contains("gold")
        })
    })
}

pub fn match_movement_type<'a>(items: &'a [LookupItem], text: &str) -> Option<&'a LookupItem> {
    find_first_match(items, text, &[]).or_else(|| {
        let quartz = text.contains("quartz");
        let automatic = text.contains("automatic");
        items.iter().filter(|it| usable(it)).find(|it| {
            let n = lower_name(it);
            (quartz && (n.contains("quartz") || n.contains("máy pin")))
                || (automatic && (n.contains("automatic") || n.contains("máy cơ")))
        })
    })
}

/// Strap names need explicit strap context (`dây da`, `da dây`) so that
/// `đồng` in `đồng hồ` never selects a copper strap.
pub fn match_strap_material<'a>(items: &'a [LookupItem], text: &str) -> Option<&'a LookupItem> {
    items.iter().filter(|it| usable(it)).find(|it| {
        let n = lower_name(it);
        if n.is_empty() {
            return false;
        }
        if n == "đồng" {
            return text.contains("dây đồng");
        }
        text.contains(&format!("dây {n}"))
            || text.contains(&format!("{n} dây"))
            || ((n == "kim loại" || n == "thép") && text.contains("kim loại"))
    })
}

/// Dispatch to the matcher for `kind`.
pub fn match_kind<'a>(
    kind: LookupKind,
    items: &'a [LookupItem],
    text: &str,
) -> Option<&'a LookupItem> {
    match kind {
        LookupKind::Brand | LookupKind::Category => find_first_match(items, text, &[]),
        LookupKind::Color => match_color(items, text),
        LookupKind::MovementType => match_movement_type(items, text),
        LookupKind::StrapMaterial => match_strap_material(items, text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(names: &[(i64, &str)]) -> Vec<LookupItem> {
        names.iter().map(|(id, n)| LookupItem::new(*id, n)).collect()
    }

    #[test]
    fn brand_name_is_a_case_insensitive_substring() {
        let brands = items(&[(1, "Casio"), (2, "Orient")]);
        let hit = match_kind(LookupKind::Brand, &brands, "đồng hồ orient nam");
        assert_eq!(hit.and_then(|b| b.name.as_deref()), Some("Orient"));
    }

    #[test]
    fn first_item_in_api_order_wins() {
        let cats = items(&[(1, "Đồng hồ"), (2, "Đồng hồ nam")]);
        let hit = match_kind(LookupKind::Category, &cats, "đồng hồ nam");
        assert_eq!(hit.and_then(|c| c.id.clone()), Some(1.into()));
    }

    #[test]
    fn items_without_id_are_skipped() {
        let list = vec![
            LookupItem {
                id: None,
                name: Some("Casio".into()),
            },
            LookupItem::new(0, "Casio"),
        ];
        assert!(match_kind(LookupKind::Brand, &list, "casio").is_none());
    }

    #[test]
    fn gold_synonyms_reach_vang() {
        let colors = items(&[(1, "Đen"), (2, "Vàng")]);
        let hit = match_color(&colors, "đồng hồ mạ vàng");
        assert_eq!(hit.and_then(|c| c.id.clone()), Some(2.into()));
    }

    #[test]
    fn gold_heuristic_picks_first_gold_like_color() {
        let colors = items(&[(1, "Đen"), (3, "Vàng hồng"), (4, "Gold")]);
        let hit = match_color(&colors, "màu gold đẹp");
        assert_eq!(hit.and_then(|c| c.id.clone()), Some(4.into()));
        let colors = items(&[(1, "Đen"), (3, "Vàng hồng")]);
        let hit = match_color(&colors, "mẫu gold");
        assert_eq!(hit.and_then(|c| c.id.clone()), Some(3.into()));
    }

    #[test]
    fn quartz_and_automatic_map_to_vietnamese_names() {
        let mts = items(&[(1, "Máy cơ"), (2, "Máy pin")]);
        assert_eq!(
            match_movement_type(&mts, "đồng hồ quartz").and_then(|m| m.id.clone()),
            Some(2.into())
        );
        assert_eq!(
            match_movement_type(&mts, "automatic").and_then(|m| m.id.clone()),
            Some(1.into())
        );
        assert!(match_movement_type(&mts, "solar").is_none());
    }

    #[test]
    fn strap_needs_day_context() {
        let straps = items(&[(1, "Da"), (2, "Đồng"), (3, "Thép")]);
        assert!(match_strap_material(&straps, "đồng hồ da bò").is_none());
        assert_eq!(
            match_strap_material(&straps, "đồng hồ dây da").and_then(|s| s.id.clone()),
            Some(1.into())
        );
    }

    #[test]
    fn copper_only_with_day_dong() {
        let straps = items(&[(2, "Đồng")]);
        assert!(match_strap_material(&straps, "đồng hồ đồng dây").is_none());
        assert!(match_strap_material(&straps, "đồng hồ nam").is_none());
        assert!(match_strap_material(&straps, "mua dây đồng").is_some());
    }

    #[test]
    fn kim_loai_matches_steel() {
        let straps = items(&[(1, "Da"), (3, "Thép")]);
        assert_eq!(
            match_strap_material(&straps, "dây bằng kim loại").and_then(|s| s.id.clone()),
            Some(3.into())
        );
    }
}
