//! Prompt templates for field extraction

use crate::types::ChatMessage;

/// Prompt builder for extraction requests
pub struct PromptBuilder;

impl PromptBuilder {
    /// Build the extraction prompt with the document text embedded verbatim
    pub fn build_extraction_prompt(text: &str) -> String {
        format!(
            "Extract the name, document number, and expiration date from the following text:\n\n{text}",
            text = text
        )
    }

    /// Build the message list sent to the hosted model
    pub fn extraction_messages(text: &str) -> Vec<ChatMessage> {
        vec![ChatMessage::user(Self::build_extraction_prompt(text))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;

    #[test]
    fn test_single_user_message() {
        let messages = PromptBuilder::extraction_messages("JANE DOE ID 12345");
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, Role::User);
        assert_eq!(
            messages[0].content,
            "Extract the name, document number, and expiration date from the following text:\n\nJANE DOE ID 12345"
        );
    }

    #[test]
    fn test_text_embedded_verbatim() {
        let text = "  line one\n{braces} and \"quotes\"\n";
        let prompt = PromptBuilder::build_extraction_prompt(text);
        assert!(prompt.ends_with(text));
    }
}
