//! Prompt templates sent to the generation service.

use crate::models::Category;

/// Wrap an inquiry in the classification instructions.
///
/// The prompt lists every label in priority order and asks for exactly one
/// label in Japanese.
pub fn classification_prompt(review_text: &str) -> String {
    let labels: String = Category::PRIORITY
        .iter()
        .map(|category| format!("「{}」", category.label()))
        .collect();

    format!(
        "\n以下の問い合わせ内容を、次のカテゴリのいずれかに分類してください：\n\
         {labels}\n\
         \n\
         問い合わせ内容：\n\
         「{review_text}」\n\
         \n\
         カテゴリ名だけを日本語で1つ出力してください。\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_names_all_categories() {
        let prompt = classification_prompt("テスト");
        assert!(prompt.contains("「質問」「改善要望」「ポジティブな感想」「ネガティブな感想」「その他」"));
    }

    #[test]
    fn test_prompt_embeds_review_text() {
        let prompt = classification_prompt("製品の使い方が分かりません");
        assert!(prompt.contains("問い合わせ内容：\n「製品の使い方が分かりません」\n"));
        assert!(prompt.ends_with("カテゴリ名だけを日本語で1つ出力してください。\n"));
    }
}
