//! Keyword scans: gender, style words and "vague" shopping phrases.

use serde::Serialize;

pub const STYLE_TOKENS: [&str; 6] = ["cổ điển", "classic", "vintage", "retro", "thể thao", "hiện đại"];

pub const VAGUE_KEYWORDS: [&str; 16] = [
    "giá rẻ",
    "rẻ",
    "rẻ nhất",
    "giá tốt",
    "giá tốt nhất",
    "hợp lý",
    "hợp lý nhất",
    "giá bình dân",
    "giá phải chăng",
    "vừa túi tiền",
    "đáng mua",
    "nên mua",
    "tốt nhất",
    "hot nhất",
    "bán chạy nhất",
    "được yêu thích nhất",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Value the search API expects in `gender__in`.
    pub fn code(self) -> &'static str {
        match self {
            Gender::Male => "0",
            Gender::Female => "1",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "nam",
            Gender::Female => "nữ",
        }
    }
}

/// `nam`/`nữ` as a word start. Female wins when both appear.
pub fn detect_gender(text: &str) -> Option<Gender> {
    let padded = format!(" {text}");
    if padded.contains(" nữ") {
        Some(Gender::Female)
    } else if padded.contains(" nam") {
        Some(Gender::Male)
    } else {
        None
    }
}

/// Style words present in the text, in canonical order.
pub fn style_tokens(text: &str) -> Vec<&'static str> {
    STYLE_TOKENS.into_iter().filter(|t| text.contains(t)).collect()
}

pub fn is_vague(text: &str) -> bool {
    VAGUE_KEYWORDS.iter().any(|k| text.contains(k))
}
