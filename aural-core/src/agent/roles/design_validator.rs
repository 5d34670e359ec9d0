use crate::agent::{Agent, Task, WorkflowContext};

/// Checks design-token usage
pub struct DesignValidator<'a> {
    agent: &'a mut Agent,
}

impl<'a> DesignValidator<'a> {
    pub fn new(agent: &'a mut Agent) -> Self {
        Self { agent }
    }

    pub async fn validate_tokens(&mut self, context: &WorkflowContext) -> Task {
        let description = "Check the listed files and the review above for design-token \
             violations: hard-coded colors, spacing, font sizes, radii, and durations. List \
             each violation with the token that should replace it.";
        self.agent.execute(description, context).await
    }
}
