//! `wa-actions`: the dialogue actions of the watch shop and the machinery
//! behind product search.
//!
//! A turn flows through [`Extractor`](wa_extract::Extractor) ->
//! [`LookupResolver`] -> [`FilterComposer`] -> one catalog call ->
//! [`cards`] -> [`fallback`]. Actions are looked up by name in an
//! [`ActionRegistry`] and write their replies to a [`Dispatcher`].

pub mod actions;
pub mod cards;
pub mod compose;
pub mod context;
pub mod fallback;
pub mod format;
pub mod message;
pub mod registry;
pub mod request;
pub mod resolver;

pub use cards::{Card, OrderCard, PromotionCard};
pub use compose::{FilterComposer, SearchPlan};
pub use context::{Action, ActionContext};
pub use message::{BotMessage, Button, CustomPayload, Dispatcher};
pub use registry::{build_default_registry, ActionRegistry, UnknownAction};
pub use request::{ActionRequest, MetadataFilter};
pub use resolver::{LookupResolver, ResolvedEntities, ResolvedEntity};
