//! Conversation-turn to provider-message mapping

use crate::llm::ProviderMessage;
use crate::llm::ProviderRole;
use crate::rag::ChatMessage;

/// Map a conversation turn into the provider's three-way role taxonomy.
///
/// Comparison is case-insensitive. Unrecognized roles degrade to the user
/// role rather than erroring.
pub fn map_message(message: &ChatMessage) -> ProviderMessage {
    let role = if message.role.eq_ignore_ascii_case("system") {
        ProviderRole::System
    } else if message.role.eq_ignore_ascii_case("assistant") {
        ProviderRole::Assistant
    } else {
        ProviderRole::User
    };

    ProviderMessage::new(role, message.content.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(role: &str, content: &str) -> ChatMessage {
        ChatMessage {
            role: role.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_known_roles_map_directly() {
        assert_eq!(map_message(&turn("system", "x")).role, ProviderRole::System);
        assert_eq!(
            map_message(&turn("assistant", "x")).role,
            ProviderRole::Assistant
        );
        assert_eq!(map_message(&turn("user", "x")).role, ProviderRole::User);
    }

    #[test]
    fn test_role_comparison_is_case_insensitive() {
        assert_eq!(map_message(&turn("SYSTEM", "x")).role, ProviderRole::System);
        assert_eq!(
            map_message(&turn("Assistant", "x")).role,
            ProviderRole::Assistant
        );
        assert_eq!(map_message(&turn("UsEr", "x")).role, ProviderRole::User);
    }

    #[test]
    fn test_unknown_roles_default_to_user() {
        assert_eq!(map_message(&turn("tool", "x")).role, ProviderRole::User);
        assert_eq!(map_message(&turn("asistant", "x")).role, ProviderRole::User);
        assert_eq!(map_message(&turn("", "x")).role, ProviderRole::User);
    }

    #[test]
    fn test_content_passes_through_unchanged() {
        let mapped = map_message(&turn("assistant", "  spaced  content  "));
        assert_eq!(mapped.content, "  spaced  content  ");
    }

    #[test]
    fn test_mapping_is_deterministic() {
        let message = turn("weird-role", "hello");
        assert_eq!(map_message(&message), map_message(&message));
    }
}
