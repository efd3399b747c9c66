//! Conversion logic between domain entities and wire DTOs.

use agora_shared::protocol::MessageDto;

use crate::domain::ChatMessage;

impl From<ChatMessage> for MessageDto {
    fn from(model: ChatMessage) -> Self {
        Self {
            id: model.id,
            author_id: model.author_id.into_string(),
            content: model.content.into_string(),
            created_at: model.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AuthorId, MessageContent};

    #[test]
    fn test_chat_message_converts_to_dto() {
        // given:
        let message = ChatMessage {
            id: 7,
            author_id: AuthorId::new("alice".to_string()).unwrap(),
            content: MessageContent::new("hello".to_string()).unwrap(),
            created_at: 1672531200000,
        };

        // when:
        let dto: MessageDto = message.into();

        // then:
        assert_eq!(dto.id, 7);
        assert_eq!(dto.author_id, "alice");
        assert_eq!(dto.content, "hello");
        assert_eq!(dto.created_at, 1672531200000);
    }
}
