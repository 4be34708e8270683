//! Turns names in the utterance into catalog ids by fetching each reference
//! list and running the matcher for its kind.

use std::sync::Arc;

use wa_catalog::{CatalogProvider, EntityId, LookupKind};
use wa_domain::trace::TraceEvent;
use wa_extract::matching::match_kind;
use wa_extract::LookupError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntity {
    pub id: EntityId,
    pub name: String,
}

pub type Resolution = std::result::Result<ResolvedEntity, LookupError>;

/// One resolution per reference list. Any `Err` means "not filtered".
#[derive(Debug)]
pub struct ResolvedEntities {
    pub brand: Resolution,
    pub category: Resolution,
    pub color: Resolution,
    pub movement_type: Resolution,
    pub strap_material: Resolution,
}

impl ResolvedEntities {
    pub fn none() -> Self {
        Self {
            brand: Err(LookupError::NoMatch),
            category: Err(LookupError::NoMatch),
            color: Err(LookupError::NoMatch),
            movement_type: Err(LookupError::NoMatch),
            strap_material: Err(LookupError::NoMatch),
        }
    }

    pub fn get(&self, kind: LookupKind) -> Option<&ResolvedEntity> {
        let slot = match kind {
            LookupKind::Brand => &self.brand,
            LookupKind::Category => &self.category,
            LookupKind::Color => &self.color,
            LookupKind::MovementType => &self.movement_type,
            LookupKind::StrapMaterial => &self.strap_material,
        };
        slot.as_ref().ok()
    }

    fn slot_mut(&mut self, kind: LookupKind) -> &mut Resolution {
        match kind {
            LookupKind::Brand => &mut self.brand,
            LookupKind::Category => &mut self.category,
            LookupKind::Color => &mut self.color,
            LookupKind::MovementType => &mut self.movement_type,
            LookupKind::StrapMaterial => &mut self.strap_material,
        }
    }

    pub fn any_resolved(&self) -> bool {
        LookupKind::ALL.iter().any(|k| self.get(*k).is_some())
    }
}

pub struct LookupResolver {
    catalog: Arc<dyn CatalogProvider>,
}

impl LookupResolver {
    pub fn new(catalog: Arc<dyn CatalogProvider>) -> Self {
        Self { catalog }
    }

    /// Fetch the `kind` list and match it against `text` (lower-cased).
    /// A failed fetch only costs this one entity.
    pub async fn resolve(&self, kind: LookupKind, text: &str, token: Option<&str>) -> Resolution {
        let result = match self.catalog.list(kind, token).await {
            Err(e) => {
                tracing::warn!(kind = %kind, error = %e, "lookup list unavailable");
                Err(LookupError::Fetch(e))
            }
            Ok(items) => match match_kind(kind, &items, text) {
                Some(item) => match &item.id {
                    Some(id) => Ok(ResolvedEntity {
                        id: id.clone(),
                        name: item.name_or_empty().to_owned(),
                    }),
                    None => Err(LookupError::NoMatch),
                },
                None => Err(LookupError::NoMatch),
            },
        };

        TraceEvent::LookupResolved {
            kind: kind.as_str().to_owned(),
            matched: result.is_ok(),
            fetch_failed: matches!(result, Err(LookupError::Fetch(_))),
        }
        .emit();

        result
    }

    /// Resolve every reference list, one after another.
    pub async fn resolve_all(&self, text: &str, token: Option<&str>) -> ResolvedEntities {
        let mut out = ResolvedEntities::none();
        for kind in LookupKind::ALL {
            *out.slot_mut(kind) = self.resolve(kind, text, token).await;
        }
        out
    }

    /// Reverse lookup: the display name of `id` in the `kind` list. Ids are
    /// compared in their rendered form since the API mixes numbers and strings.
    pub async fn name_by_id(&self, kind: LookupKind, id: &str, token: Option<&str>) -> Option<String> {
        match self.catalog.list(kind, token).await {
            Ok(items) => items
                .into_iter()
                .find(|it| it.id.as_ref().is_some_and(|i| i.to_string() == id))
                .and_then(|it| it.name),
            Err(e) => {
                tracing::debug!(kind = %kind, error = %e, "name lookup skipped");
                None
            }
        }
    }
}
