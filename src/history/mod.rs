use log::info;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use crate::models::chat::{ ChatMessage, Conversation, Role };

/// Process-lifetime transcript storage. Conversations are created lazily
/// on first reference, seeded with the configured system prompt and an
/// assistant greeting. Each conversation sits behind its own lock so a
/// request turn can hold it across the upstream call and appends for one
/// conversation never interleave. No eviction, no size cap.
pub struct TranscriptStore {
    seed_system: String,
    seed_greeting: String,
    conversations: Mutex<HashMap<i64, Arc<Mutex<Conversation>>>>,
}

impl TranscriptStore {
    pub fn new(seed_system: String, seed_greeting: String) -> Self {
        Self {
            seed_system,
            seed_greeting,
            conversations: Mutex::new(HashMap::new()),
        }
    }

    pub async fn get_or_create(&self, id: i64) -> Arc<Mutex<Conversation>> {
        let mut map = self.conversations.lock().await;
        map.entry(id)
            .or_insert_with(|| {
                info!("Seeding new conversation {}", id);
                Arc::new(
                    Mutex::new(Conversation {
                        id,
                        messages: vec![
                            ChatMessage::new(Role::System, self.seed_system.clone()),
                            ChatMessage::new(Role::Assistant, self.seed_greeting.clone())
                        ],
                    })
                )
            })
            .clone()
    }

    pub async fn append(&self, id: i64, message: ChatMessage) {
        let conversation = self.get_or_create(id).await;
        let mut guard = conversation.lock().await;
        guard.messages.push(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> TranscriptStore {
        TranscriptStore::new(
            "You are a helpful assistant.".to_string(),
            "Hello! How can I help you today?".to_string()
        )
    }

    #[tokio::test]
    async fn unseen_conversation_is_seeded_with_system_and_greeting() {
        let store = store();
        let conversation = store.get_or_create(7).await;
        let guard = conversation.lock().await;
        assert_eq!(guard.id, 7);
        assert_eq!(guard.messages.len(), 2);
        assert_eq!(guard.messages[0].role, Role::System);
        assert_eq!(guard.messages[0].content, "You are a helpful assistant.");
        assert_eq!(guard.messages[1].role, Role::Assistant);
        assert_eq!(guard.messages[1].content, "Hello! How can I help you today?");
    }

    #[tokio::test]
    async fn get_or_create_is_idempotent() {
        let store = store();
        let first = store.get_or_create(3).await;
        let second = store.get_or_create(3).await;
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.lock().await.messages.len(), 2);
    }

    #[tokio::test]
    async fn append_preserves_order_and_grows_by_one() {
        let store = store();
        store.get_or_create(7).await;
        store.append(7, ChatMessage::new(Role::User, "Hi")).await;

        let conversation = store.get_or_create(7).await;
        let guard = conversation.lock().await;
        assert_eq!(guard.messages.len(), 3);
        assert_eq!(guard.messages[2].role, Role::User);
        assert_eq!(guard.messages[2].content, "Hi");
    }
}
