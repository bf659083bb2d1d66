use stepwise_core::provider::ChatMessage;

/// Fixed instruction sent with every generation request. The parser relies
/// on the numbered-list shape this asks for.
pub const SYSTEM_PROMPT: &str = "You are a task breakdown assistant. Given a main task, \
break it down into 4-6 clear, actionable subtasks. Return only the subtasks as a \
numbered list, nothing else.";

/// Build the two-message breakdown prompt for a task description.
pub fn breakdown_messages(task: &str) -> Vec<ChatMessage> {
    vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(task)]
}
