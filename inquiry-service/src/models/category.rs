//! Closed category set used by the classification flow.

use serde::{Deserialize, Serialize};

/// Inquiry category. Labels are the Japanese strings stored in `Category`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "質問")]
    Question,
    #[serde(rename = "改善要望")]
    ImprovementRequest,
    #[serde(rename = "ポジティブな感想")]
    PositiveFeedback,
    #[serde(rename = "ネガティブな感想")]
    NegativeFeedback,
    #[serde(rename = "その他")]
    Other,
}

impl Category {
    /// Match priority. Earlier entries win when the model output names several.
    pub const PRIORITY: [Category; 5] = [
        Category::Question,
        Category::ImprovementRequest,
        Category::PositiveFeedback,
        Category::NegativeFeedback,
        Category::Other,
    ];

    /// Used when no label appears in the output.
    pub const CATCH_ALL: Category = Category::Other;

    pub fn label(self) -> &'static str {
        match self {
            Category::Question => "質問",
            Category::ImprovementRequest => "改善要望",
            Category::PositiveFeedback => "ポジティブな感想",
            Category::NegativeFeedback => "ネガティブな感想",
            Category::Other => "その他",
        }
    }

    /// Pick the category named in free-form model output.
    ///
    /// The output is trimmed and scanned for each label as a substring, in
    /// [`Category::PRIORITY`] order. Surrounding text is tolerated; nothing
    /// matching falls back to [`Category::CATCH_ALL`].
    pub fn from_output(output: &str) -> Category {
        let output = output.trim();
        Self::PRIORITY
            .into_iter()
            .find(|category| output.contains(category.label()))
            .unwrap_or(Self::CATCH_ALL)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Successful classification result returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub id: String,
    pub category: Category,
}
