//! Terminal rendering of the message list.

use agora_shared::{protocol::MessageDto, time::timestamp_to_rfc3339};

/// Formats fetched state for the terminal.
pub struct MessageFormatter;

impl MessageFormatter {
    pub fn format_message(message: &MessageDto) -> String {
        format!(
            "[{}] {}: {}\n",
            timestamp_to_rfc3339(message.created_at),
            message.author_id,
            message.content
        )
    }

    /// Render the full list with a separator line, replacing whatever was
    /// shown before. The list is always printed as received; ordering is
    /// the server's job.
    pub fn format_message_list(messages: &[MessageDto]) -> String {
        let mut out = String::from("---- messages ----\n");
        if messages.is_empty() {
            out.push_str("(no messages)\n");
        } else {
            for message in messages {
                out.push_str(&Self::format_message(message));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(id: i64, author: &str, content: &str) -> MessageDto {
        MessageDto {
            id,
            author_id: author.to_string(),
            content: content.to_string(),
            created_at: 1672531200000,
        }
    }

    #[test]
    fn test_format_message_includes_author_and_content() {
        // given:
        let msg = message(1, "alice", "hello");

        // when:
        let formatted = MessageFormatter::format_message(&msg);

        // then:
        assert!(formatted.contains("alice: hello"));
        assert!(formatted.contains("2023-01-01T00:00:00"));
    }

    #[test]
    fn test_format_message_list_preserves_order() {
        // given:
        let messages = vec![message(1, "alice", "first"), message(2, "bob", "second")];

        // when:
        let formatted = MessageFormatter::format_message_list(&messages);

        // then:
        let first = formatted.find("first").unwrap();
        let second = formatted.find("second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_format_empty_list_shows_placeholder() {
        // given / when:
        let formatted = MessageFormatter::format_message_list(&[]);

        // then:
        assert!(formatted.contains("(no messages)"));
    }
}
