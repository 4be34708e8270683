//! Reference-list browsing: one button per brand, category, color,
//! movement type or strap material.

use async_trait::async_trait;
use serde_json::{json, Map, Value};

use wa_catalog::{LookupItem, LookupKind};

use crate::context::{Action, ActionContext};
use crate::message::{Button, Dispatcher};
use crate::request::ActionRequest;

struct ListDef {
    action: &'static str,
    kind: LookupKind,
    heading: &'static str,
    empty: &'static str,
    apology: &'static str,
    /// Button payload is `{prefix} {name}`.
    payload_prefix: &'static str,
    lowercase_payload: bool,
    metadata_key: &'static str,
    /// `(title, payload)` shown without a token or when the catalog is down.
    samples: &'static [(&'static str, &'static str)],
}

static BRANDS: ListDef = ListDef {
    action: "action_show_brands",
    kind: LookupKind::Brand,
    heading: "Đây là các thương hiệu có sẵn:",
    empty: "Hiện tại chưa có thương hiệu nào.",
    apology: "Có lỗi xảy ra khi tải thông tin thương hiệu.",
    payload_prefix: "tôi muốn xem đồng hồ thương hiệu",
    lowercase_payload: false,
    metadata_key: "brand_id",
    samples: &[
        ("ROLEX", "tôi muốn xem sản phẩm thương hiệu ROLEX"),
        ("DIOR", "tôi muốn xem sản phẩm thương hiệu DIOR"),
    ],
};

static CATEGORIES: ListDef = ListDef {
    action: "action_show_categories",
    kind: LookupKind::Category,
    heading: "Đây là các phân loại sản phẩm có sẵn:",
    empty: "Hiện tại chưa có phân loại sản phẩm nào.",
    apology: "Có lỗi xảy ra khi tải thông tin phân loại sản phẩm.",
    payload_prefix: "tôi muốn xem đồng hồ danh mục",
    lowercase_payload: false,
    metadata_key: "category_id",
    samples: &[
        ("Khải", "tôi muốn xem sản phẩm phân loại Khải"),
        ("Olympia12", "tôi muốn xem sản phẩm phân loại Olympia12"),
        ("Đồng hồ nam", "tôi muốn xem sản phẩm phân loại Đồng hồ nam"),
        ("Đồng hồ nữ", "tôi muốn xem sản phẩm phân loại Đồng hồ nữ"),
    ],
};

static COLORS: ListDef = ListDef {
    action: "action_show_colors",
    kind: LookupKind::Color,
    heading: "Đây là các màu sắc có sẵn:",
    empty: "Hiện tại chưa có màu sắc nào.",
    apology: "Có lỗi xảy ra khi tải thông tin màu sắc.",
    payload_prefix: "tôi muốn xem đồng hồ màu",
    lowercase_payload: true,
    metadata_key: "color_id",
    samples: &[
        ("Màu đen", "tôi muốn xem sản phẩm màu đen"),
        ("Màu trắng", "tôi muốn xem sản phẩm màu trắng"),
        ("Màu vàng", "tôi muốn xem sản phẩm màu vàng"),
        ("Màu bạc", "tôi muốn xem sản phẩm màu bạc"),
        ("Màu xanh", "tôi muốn xem sản phẩm màu xanh"),
    ],
};

static MOVEMENT_TYPES: ListDef = ListDef {
    action: "action_show_movement_types",
    kind: LookupKind::MovementType,
    heading: "Đây là các loại máy có sẵn:",
    empty: "Hiện tại chưa có loại máy nào.",
    apology: "Có lỗi xảy ra khi tải thông tin loại máy.",
    payload_prefix: "tôi muốn xem đồng hồ loại máy",
    lowercase_payload: true,
    metadata_key: "movement_type_id",
    samples: &[
        ("Máy pin", "tôi muốn xem sản phẩm loại máy pin"),
        ("Máy cơ", "tôi muốn xem sản phẩm loại máy cơ"),
    ],
};

// Strap buttons still carry the legacy `material_id`; the filter path
// accepts both keys.
static STRAP_MATERIALS: ListDef = ListDef {
    action: "action_show_strap_materials",
    kind: LookupKind::StrapMaterial,
    heading: "Đây là các chất liệu dây đeo có sẵn:",
    empty: "Hiện tại chưa có chất liệu dây đeo nào.",
    apology: "Có lỗi xảy ra khi tải thông tin chất liệu dây đeo.",
    payload_prefix: "tôi muốn xem đồng hồ dây",
    lowercase_payload: true,
    metadata_key: "material_id",
    samples: &[
        ("Sắt", "tôi muốn xem sản phẩm chất liệu sắt"),
        ("Kim Cương", "tôi muốn xem sản phẩm chất liệu kim cương"),
    ],
};

/// Shows one reference list as filter buttons.
pub struct ShowCatalogList {
    def: &'static ListDef,
}

impl ShowCatalogList {
    pub fn brands() -> Self {
        Self { def: &BRANDS }
    }

    pub fn categories() -> Self {
        Self { def: &CATEGORIES }
    }

    pub fn colors() -> Self {
        Self { def: &COLORS }
    }

    pub fn movement_types() -> Self {
        Self { def: &MOVEMENT_TYPES }
    }

    pub fn strap_materials() -> Self {
        Self { def: &STRAP_MATERIALS }
    }

    pub fn all() -> Vec<Self> {
        vec![
            Self::brands(),
            Self::categories(),
            Self::colors(),
            Self::movement_types(),
            Self::strap_materials(),
        ]
    }

    fn samples(&self, out: &mut Dispatcher) {
        let buttons = self
            .def
            .samples
            .iter()
            .map(|(title, payload)| Button::plain(*title, *payload))
            .collect();
        out.buttons(self.def.heading, buttons);
    }

    fn button(&self, item: LookupItem) -> Button {
        let name = item.name.unwrap_or_default();
        let shown = if self.def.lowercase_payload {
            name.to_lowercase()
        } else {
            name.clone()
        };
        let id = item.id.map(|id| json!(id)).unwrap_or(Value::String(String::new()));
        let mut metadata = Map::new();
        metadata.insert(self.def.metadata_key.to_owned(), id.clone());
        metadata.insert("intent".into(), json!("filter_products"));
        Button {
            payload: format!("{} {shown}", self.def.payload_prefix),
            title: name,
            metadata: Some(Value::Object(metadata)),
            id: Some(id),
        }
    }
}

#[async_trait]
impl Action for ShowCatalogList {
    fn name(&self) -> &'static str {
        self.def.action
    }

    async fn run(&self, ctx: &ActionContext, req: &ActionRequest, out: &mut Dispatcher) {
        let Some(token) = req.token() else {
            self.samples(out);
            return;
        };

        match ctx.catalog.list(self.def.kind, Some(token)).await {
            Ok(items) if items.is_empty() => out.text(self.def.empty),
            Ok(items) => {
                let buttons = items.into_iter().map(|it| self.button(it)).collect();
                out.buttons(self.def.heading, buttons);
            }
            Err(e) if e.is_network() => {
                tracing::warn!(action = self.def.action, error = %e, "catalog down, showing samples");
                self.samples(out);
            }
            Err(e) => {
                tracing::error!(action = self.def.action, error = %e, "list action failed");
                out.text(self.def.apology);
            }
        }
    }
}
