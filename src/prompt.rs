use crate::models::chat::{ ContextMessage, Conversation };

/// Renders a server-held transcript as a single completion prompt:
/// every turn as "Role: content", then the trailing cue the model
/// continues from.
pub fn render_session_prompt(conversation: &Conversation) -> String {
    let mut prompt = String::new();
    for msg in &conversation.messages {
        prompt.push_str(&format!("{}: {}\n", msg.role, msg.content));
    }
    prompt.push_str("Assistant:");
    prompt
}

/// Renders a stateless chat request as a single completion prompt:
/// persona block, client-supplied history, then the new user turn.
/// A missing persona or empty history renders as an empty section.
pub fn render_context_prompt(
    persona: Option<&str>,
    history: &[ContextMessage],
    message: &str
) -> String {
    let history_block = history
        .iter()
        .map(|m| format!("{}: {}", m.role.as_str(), m.content))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "[Character Setting]\n{}\n\n[Conversation History]\n{}\n\n[Current User Input]\nUser: {}\nAssistant:",
        persona.unwrap_or(""),
        history_block,
        message
    )
}
