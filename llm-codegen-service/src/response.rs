//! Chat completion response payloads and shape validation.
//!
//! Wire types keep `message`/`content` optional so that structurally odd
//! provider payloads decode instead of failing at the transport layer; the
//! shape check happens explicitly in [`completion_text`].

use serde::Deserialize;

use crate::error_handler::{CodegenError, Result};

/// Minimal response for `/v1/chat/completions`.
#[derive(Debug, Default, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChatChoice {
    #[serde(default)]
    pub message: Option<ChatMessageOut>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChatMessageOut {
    #[serde(default)]
    pub content: Option<String>,
}

/// Extracts the completion text from the first choice.
///
/// The text is returned untrimmed; whitespace normalization is the caller's
/// concern.
///
/// # Errors
/// Returns [`CodegenError::EmptyCompletion`] when the choice list is empty,
/// the first choice has no message, the message has no content, or the
/// content is whitespace-only.
pub fn completion_text(resp: ChatCompletionResponse) -> Result<String> {
    resp.choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or(CodegenError::EmptyCompletion)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_content(content: Option<&str>) -> ChatCompletionResponse {
        ChatCompletionResponse {
            choices: vec![ChatChoice {
                message: Some(ChatMessageOut {
                    content: content.map(str::to_string),
                }),
            }],
        }
    }

    #[test]
    fn returns_text_untrimmed() {
        let resp = with_content(Some("  /* file: index.html */\n<h1>Hi</h1>\n"));
        assert_eq!(
            completion_text(resp).unwrap(),
            "  /* file: index.html */\n<h1>Hi</h1>\n"
        );
    }

    #[test]
    fn rejects_empty_choice_list() {
        let resp = ChatCompletionResponse { choices: vec![] };
        assert!(matches!(
            completion_text(resp),
            Err(CodegenError::EmptyCompletion)
        ));
    }

    #[test]
    fn rejects_choice_without_message() {
        let resp = ChatCompletionResponse {
            choices: vec![ChatChoice { message: None }],
        };
        assert!(matches!(
            completion_text(resp),
            Err(CodegenError::EmptyCompletion)
        ));
    }

    #[test]
    fn rejects_message_without_content() {
        assert!(matches!(
            completion_text(with_content(None)),
            Err(CodegenError::EmptyCompletion)
        ));
    }

    #[test]
    fn rejects_whitespace_only_content() {
        assert!(matches!(
            completion_text(with_content(Some("   \n\t"))),
            Err(CodegenError::EmptyCompletion)
        ));
    }

    #[test]
    fn only_first_choice_counts() {
        let resp = ChatCompletionResponse {
            choices: vec![
                ChatChoice { message: None },
                ChatChoice {
                    message: Some(ChatMessageOut {
                        content: Some("ignored".into()),
                    }),
                },
            ],
        };
        assert!(matches!(
            completion_text(resp),
            Err(CodegenError::EmptyCompletion)
        ));
    }

    #[test]
    fn decodes_partial_payloads() {
        let resp: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices":[{"message":{}}]}"#).unwrap();
        assert!(matches!(
            completion_text(resp),
            Err(CodegenError::EmptyCompletion)
        ));
    }
}
