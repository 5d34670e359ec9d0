use crate::agent::{Agent, Task, WorkflowContext};

/// Audits components for accessibility issues
pub struct AccessibilityAuditor<'a> {
    agent: &'a mut Agent,
}

impl<'a> AccessibilityAuditor<'a> {
    pub fn new(agent: &'a mut Agent) -> Self {
        Self { agent }
    }

    pub async fn audit_component(&mut self, context: &WorkflowContext) -> Task {
        let description = format!(
            "Audit the `{}` component for WCAG 2.2 AA conformance. Group findings by \
             severity and cite the success criterion for each one.",
            context.component_label()
        );
        self.agent.execute(&description, context).await
    }

    /// Turn the audit findings into concrete code changes
    pub async fn suggest_fixes(&mut self, context: &WorkflowContext) -> Task {
        let description = format!(
            "Propose code changes that resolve the accessibility findings for the `{}` \
             component, most severe first. Show each change as a before/after snippet.",
            context.component_label()
        );
        self.agent.execute(&description, context).await
    }
}
