use crate::agent::{Agent, Task, WorkflowContext};

/// Plans, validates, and reviews design-system work
pub struct Orchestrator<'a> {
    agent: &'a mut Agent,
}

impl<'a> Orchestrator<'a> {
    pub fn new(agent: &'a mut Agent) -> Self {
        Self { agent }
    }

    /// Break a new component into implementation steps
    pub async fn plan_component(&mut self, context: &WorkflowContext) -> Task {
        let description = format!(
            "Create an implementation plan for the `{}` component. List the files to create, \
             the design tokens it depends on, its variants and states, the keyboard and \
             screen reader behavior it needs, and the order in which to build it.",
            context.component_label()
        );
        self.agent.execute(&description, context).await
    }

    /// Check the generated component against the plan and requirements
    pub async fn validate_component(&mut self, context: &WorkflowContext) -> Task {
        let description = format!(
            "Validate the generated `{}` component against the plan, the stated \
             requirements, and the accessibility audit. Say whether it is ready to merge, \
             then list any blocking issues and follow-up work.",
            context.component_label()
        );
        self.agent.execute(&description, context).await
    }

    /// Review the design system as a whole
    pub async fn review_design_system(&mut self, context: &WorkflowContext) -> Task {
        let description = "Review the design system at the given path. Summarize its \
             component inventory, point out inconsistencies between components, and propose \
             the three highest-impact improvements.";
        self.agent.execute(description, context).await
    }
}
