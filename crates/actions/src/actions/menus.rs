//! Static quick-reply menus. The payloads are phrased so the search action's
//! price and rating parsers understand them when clicked.

use async_trait::async_trait;

use crate::context::{Action, ActionContext};
use crate::message::{Button, Dispatcher};
use crate::request::ActionRequest;

const PRICE_BUTTONS: [(&str, &str); 5] = [
    ("Dưới 1 triệu", "tôi muốn mua đồng hồ giá dưới 1 triệu"),
    ("1-3 triệu", "tôi muốn mua đồng hồ giá từ 1 triệu đến 3 triệu"),
    ("3-7 triệu", "tôi muốn mua đồng hồ giá từ 3 triệu đến 7 triệu"),
    ("7-15 triệu", "tôi muốn mua đồng hồ giá từ 7 triệu đến 15 triệu"),
    ("Trên 15 triệu", "tôi muốn mua đồng hồ giá trên 15 triệu"),
];

pub struct ShowPriceMenu;

#[async_trait]
impl Action for ShowPriceMenu {
    fn name(&self) -> &'static str {
        "action_show_price"
    }

    async fn run(&self, _ctx: &ActionContext, _req: &ActionRequest, out: &mut Dispatcher) {
        let buttons = PRICE_BUTTONS
            .iter()
            .map(|(title, payload)| Button::plain(*title, *payload))
            .collect();
        out.buttons("Chọn khoảng giá bạn muốn xem:", buttons);
    }
}

pub struct ShowRatingMenu;

impl ShowRatingMenu {
    fn buttons() -> Vec<Button> {
        (0..=5u8)
            .map(|n| {
                let title = if n == 0 {
                    "Chưa đánh giá".to_owned()
                } else {
                    format!("Trên {n} sao")
                };
                Button::plain(title, format!("tôi muốn mua đồng hồ từ {n} sao trở lên"))
            })
            .collect()
    }
}

#[async_trait]
impl Action for ShowRatingMenu {
    fn name(&self) -> &'static str {
        "action_show_product_reviews"
    }

    async fn run(&self, _ctx: &ActionContext, _req: &ActionRequest, out: &mut Dispatcher) {
        out.buttons("Chọn mức đánh giá bạn muốn xem:", Self::buttons());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_menu_starts_with_unrated() {
        let b = ShowRatingMenu::buttons();
        assert_eq!(b.len(), 6);
        assert_eq!(b[0].title, "Chưa đánh giá");
        assert_eq!(b[0].payload, "tôi muốn mua đồng hồ từ 0 sao trở lên");
        assert_eq!(b[5].title, "Trên 5 sao");
    }
}
