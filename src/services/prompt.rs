use crate::message::{HistoryTurn, TurnRole};

/// Persona directive prepended to every prompt. Whitespace is significant.
pub const PREAMBLE: &str = "
You are 'Pathfinder', a Skill Gap Diagnostic Tool. \n\
Your goal is to find missing prerequisites in a user's knowledge.
1. Ask 1-2 diagnostic questions.
2. Identify a specific 'Weak Conceptual Link'.
3. Explain why this gap prevents them from reaching their advanced goal.
";

pub const USER_LABEL: &str = "User Message: ";

/// Build the single prompt string sent to the completion provider.
///
/// Layout is the preamble, a blank line, then `User Message: ` and the message
/// verbatim. A non-empty `history` adds a transcript block between the two.
pub fn compose_prompt(message: &str, history: &[HistoryTurn]) -> String {
    let mut prompt = String::with_capacity(PREAMBLE.len() + USER_LABEL.len() + message.len() + 2);
    prompt.push_str(PREAMBLE);
    prompt.push_str("\n\n");

    if !history.is_empty() {
        prompt.push_str("Conversation so far:\n");
        for turn in history {
            let speaker = match turn.role {
                TurnRole::User => "User",
                TurnRole::Model => "Pathfinder",
            };
            prompt.push_str(speaker);
            prompt.push_str(": ");
            prompt.push_str(&turn.text);
            prompt.push('\n');
        }
        prompt.push('\n');
    }

    prompt.push_str(USER_LABEL);
    prompt.push_str(message);
    prompt
}
