use crate::profile;

/// System instruction for the portfolio chat widget. Rebuilt per request so
/// it always reflects the current profile data.
pub fn system_instruction() -> String {
    format!(
        "You are the AI assistant embedded in a personal portfolio website. \
         Answer questions about the owner's experience, projects, and tech \
         stack using only the facts below. Keep replies short and concrete. \
         If a question is unrelated to the portfolio, politely steer the \
         visitor back or suggest the contact form.\n\n{}",
        profile::portfolio_context()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instruction_embeds_portfolio_facts() {
        let instruction = system_instruction();
        assert!(instruction.contains("portfolio website"));
        assert!(instruction.contains("Nikunja Sarma"));
    }
}
