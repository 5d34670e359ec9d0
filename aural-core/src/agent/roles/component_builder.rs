use crate::agent::{Agent, Task, WorkflowContext};

/// Generates and refactors component source
pub struct ComponentBuilder<'a> {
    agent: &'a mut Agent,
}

impl<'a> ComponentBuilder<'a> {
    pub fn new(agent: &'a mut Agent) -> Self {
        Self { agent }
    }

    /// Write the component following the plan in the context
    pub async fn build_component(&mut self, context: &WorkflowContext) -> Task {
        let kind = context.component_type.as_deref().unwrap_or("UI");
        let description = format!(
            "Build the `{}` {kind} component following the plan. Produce the stylesheet, \
             the JavaScript behavior, and a minimal HTML usage example.",
            context.component_label()
        );
        self.agent.execute(&description, context).await
    }

    /// Rework existing component files to match current conventions
    pub async fn refactor_component(&mut self, context: &WorkflowContext, goal: &str) -> Task {
        let description = format!(
            "Refactor the `{}` component in the listed files. Goal: {goal}. Keep its public \
             class names and events stable.",
            context.component_label()
        );
        self.agent.execute(&description, context).await
    }
}
