use crate::llm::PromptPart;
use crate::models::{Message, Role};

/// Fixed instructional preamble. Gemini has no system role, so this is
/// prepended to the newest user message instead of travelling as a
/// separate system entry. The language rule is prompt-level only; the
/// service never inspects or enforces the reply language.
pub const SYSTEM_INSTRUCTIONS: &str = "\
You are an informational guide about Saudi National Day. Focus on the 95th \
anniversary on September 23, 2025, a public holiday commemorating the 1932 \
unification under King Abdulaziz. Always answer concisely, clearly, and \
helpfully. Reflect the theme \"Pride in Our Nature\" when relevant.

Important rule: If the user asks a question in Arabic, respond in Arabic. If \
the question is in English, respond in English. Do not switch languages \
unnecessarily.";

/// Assemble the outbound payload: the preamble plus the new message as the
/// leading entry, then the history in its original order, roles and content
/// untouched. Shared by the HTTP service and the CLI.
pub fn build_prompt(new_message: &Message, history: &[Message]) -> Vec<PromptPart> {
    let mut parts = Vec::with_capacity(history.len() + 1);

    parts.push(PromptPart {
        role: Role::User,
        text: format!("{}\n\n{}", SYSTEM_INSTRUCTIONS, new_message.content),
    });

    for msg in history {
        parts.push(PromptPart {
            role: msg.role,
            text: msg.content.clone(),
        });
    }

    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_msg(content: &str) -> Message {
        Message {
            role: Role::User,
            content: content.to_string(),
            timestamp: None,
        }
    }

    fn assistant_msg(content: &str) -> Message {
        Message {
            role: Role::Assistant,
            content: content.to_string(),
            timestamp: Some("2025-09-23T00:00:00Z".to_string()),
        }
    }

    #[test]
    fn preamble_is_prepended_to_new_message() {
        let parts = build_prompt(&user_msg("When is it?"), &[]);
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].role, Role::User);
        assert!(parts[0].text.starts_with(SYSTEM_INSTRUCTIONS));
        assert!(parts[0].text.ends_with("When is it?"));
    }

    #[test]
    fn preamble_entry_stays_separate_from_history() {
        let history = vec![user_msg("earlier question"), assistant_msg("earlier answer")];
        let parts = build_prompt(&user_msg("follow-up"), &history);

        assert_eq!(parts.len(), 3);
        // The history entries never absorb the preamble.
        assert!(!parts[1].text.contains(SYSTEM_INSTRUCTIONS));
        assert!(!parts[2].text.contains(SYSTEM_INSTRUCTIONS));
    }

    #[test]
    fn history_is_forwarded_in_order_and_verbatim() {
        let history = vec![
            user_msg("first"),
            assistant_msg("second"),
            user_msg("first"),
        ];
        let parts = build_prompt(&user_msg("new"), &history);

        assert_eq!(parts.len(), 4);
        assert_eq!(parts[1].role, Role::User);
        assert_eq!(parts[1].text, "first");
        assert_eq!(parts[2].role, Role::Assistant);
        assert_eq!(parts[2].text, "second");
        // Duplicates survive; no deduplication happens.
        assert_eq!(parts[3].text, "first");
    }
}
