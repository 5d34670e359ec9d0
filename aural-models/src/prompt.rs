//! Prompt rendering for single-prompt completion servers.
//!
//! `/api/generate` takes one prompt string, so a conversation is flattened
//! into a `System:` preamble followed by `User:` / `Assistant:` segments.

use tracing::warn;

use crate::providers::{Message, Role};

/// Separator between rendered segments.
const SEGMENT_SEPARATOR: &str = "\n\n";

/// Flatten a conversation into a single prompt string.
///
/// A leading system message becomes the preamble. Later system messages are
/// dropped so the preamble appears exactly once.
pub fn render_prompt(messages: &[Message]) -> String {
    let mut segments: Vec<String> = Vec::with_capacity(messages.len());

    let turns = match messages.split_first() {
        Some((first, rest)) if first.role == Role::System => {
            segments.push(format!("System: {}", first.content));
            rest
        }
        _ => messages,
    };

    for message in turns {
        match message.role {
            Role::User => segments.push(format!("User: {}", message.content)),
            Role::Assistant => segments.push(format!("Assistant: {}", message.content)),
            Role::System => {
                warn!("dropping non-leading system message from prompt");
            }
        }
    }

    segments.join(SEGMENT_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labeled_segments(prompt: &str) -> Vec<&str> {
        prompt
            .split(SEGMENT_SEPARATOR)
            .filter(|s| s.starts_with("User: ") || s.starts_with("Assistant: "))
            .collect()
    }

    #[test]
    fn system_preamble_appears_once_before_turns() {
        let messages = vec![
            Message::system("You build accessible components."),
            Message::user("Plan a button."),
            Message::assistant("1. Use a native button element."),
            Message::user("Now build it."),
        ];

        let prompt = render_prompt(&messages);

        assert!(prompt.starts_with("System: You build accessible components."));
        assert_eq!(prompt.matches("System: ").count(), 1);
        assert_eq!(
            labeled_segments(&prompt),
            vec![
                "User: Plan a button.",
                "Assistant: 1. Use a native button element.",
                "User: Now build it.",
            ]
        );
    }

    #[test]
    fn turns_without_system_message_render_in_order() {
        let messages = vec![Message::user("first"), Message::assistant("second")];
        assert_eq!(render_prompt(&messages), "User: first\n\nAssistant: second");
    }

    #[test]
    fn later_system_messages_are_dropped() {
        let messages = vec![
            Message::system("primary"),
            Message::user("hi"),
            Message::system("stray"),
        ];

        let prompt = render_prompt(&messages);

        assert_eq!(prompt, "System: primary\n\nUser: hi");
        assert!(!prompt.contains("stray"));
    }

    #[test]
    fn empty_conversation_renders_empty_prompt() {
        assert_eq!(render_prompt(&[]), "");
    }

    #[test]
    fn segment_count_matches_turn_count() {
        let mut messages = vec![Message::system("sys")];
        for i in 0..7 {
            if i % 2 == 0 {
                messages.push(Message::user(format!("u{i}")));
            } else {
                messages.push(Message::assistant(format!("a{i}")));
            }
        }

        let prompt = render_prompt(&messages);
        let segments = labeled_segments(&prompt);

        assert_eq!(segments.len(), 7);
        assert_eq!(segments[0], "User: u0");
        assert_eq!(segments[6], "User: u6");
    }
}
