//! Agent registry
//!
//! The AgentRegistry is responsible for:
//! - Building one [`Agent`] per wired role at startup
//! - Lookup by name or through typed role accessors
//! - Producing default workflow contexts

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use aural_models::CompletionBackend;
use tracing::{debug, info};

use super::base::Agent;
use super::context::{ContextOverrides, WorkflowContext};
use super::roles::{
    AccessibilityAuditor, AgentRole, ComponentBuilder, DesignValidator, Orchestrator,
};
use crate::error::AgentError;

/// Design-system directory, relative to the project root
pub const DEFAULT_DESIGN_SYSTEM_PATH: &str = "design-system";

/// Registry-wide settings applied to every agent
#[derive(Debug, Clone, PartialEq)]
pub struct AgentDefaults {
    /// Model for every role; the backend's default when `None`
    pub model: Option<String>,
    /// Design-system path relative to the project root
    pub design_system_path: PathBuf,
}

impl Default for AgentDefaults {
    fn default() -> Self {
        Self {
            model: None,
            design_system_path: PathBuf::from(DEFAULT_DESIGN_SYSTEM_PATH),
        }
    }
}

/// Registry holding one agent per wired role
pub struct AgentRegistry {
    agents: BTreeMap<AgentRole, Agent>,
    design_system_path: PathBuf,
}

impl AgentRegistry {
    /// Build every wired role against `backend`
    pub fn new(
        backend: Arc<dyn CompletionBackend>,
        defaults: AgentDefaults,
    ) -> Result<Self, AgentError> {
        let model = defaults
            .model
            .unwrap_or_else(|| backend.default_model().to_string());

        let mut agents = BTreeMap::new();
        for role in AgentRole::ALL {
            let Some(config) = role.config(&model) else {
                debug!(role = %role, "role not wired; skipping");
                continue;
            };
            let agent = Agent::new(Arc::new(config?), backend.clone());
            agents.insert(role, agent);
        }
        info!(backend = backend.name(), model = %model, agents = agents.len(), "agent registry ready");

        Ok(Self {
            agents,
            design_system_path: defaults.design_system_path,
        })
    }

    /// Agent registered under `name`; `None` for unknown or unwired roles
    pub fn get_agent(&mut self, name: &str) -> Option<&mut Agent> {
        let role = name.parse::<AgentRole>().ok()?;
        self.agents.get_mut(&role)
    }

    /// Agent for `role`
    pub fn agent(&mut self, role: AgentRole) -> Option<&mut Agent> {
        self.agents.get_mut(&role)
    }

    /// Wired roles, in declaration order
    pub fn roles(&self) -> Vec<AgentRole> {
        self.agents.keys().copied().collect()
    }

    pub fn orchestrator(&mut self) -> Option<Orchestrator<'_>> {
        self.agent(AgentRole::Orchestrator).map(Orchestrator::new)
    }

    pub fn component_builder(&mut self) -> Option<ComponentBuilder<'_>> {
        self.agent(AgentRole::ComponentBuilder)
            .map(ComponentBuilder::new)
    }

    pub fn accessibility_auditor(&mut self) -> Option<AccessibilityAuditor<'_>> {
        self.agent(AgentRole::AccessibilityAuditor)
            .map(AccessibilityAuditor::new)
    }

    pub fn design_validator(&mut self) -> Option<DesignValidator<'_>> {
        self.agent(AgentRole::DesignValidator)
            .map(DesignValidator::new)
    }

    /// Clear the history of every agent
    pub fn reset_all(&mut self) {
        for agent in self.agents.values_mut() {
            agent.reset_history();
        }
    }

    /// Default context rooted at the current directory, merged with `overrides`
    pub fn create_context(&self, overrides: ContextOverrides) -> WorkflowContext {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        self.create_context_in(&cwd, overrides)
    }

    /// Default context rooted at `cwd`, merged with `overrides`
    pub fn create_context_in(&self, cwd: &Path, overrides: ContextOverrides) -> WorkflowContext {
        let project_root = overrides.project_root.unwrap_or_else(|| cwd.to_path_buf());
        let design_system_path = overrides
            .design_system_path
            .unwrap_or_else(|| project_root.join(&self.design_system_path));

        WorkflowContext {
            project_root,
            design_system_path,
            component_name: overrides.component_name,
            component_type: overrides.component_type,
            requirements: overrides.requirements,
            existing_files: overrides.existing_files.unwrap_or_default(),
            tasks: Vec::new(),
        }
    }
}

impl std::fmt::Debug for AgentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentRegistry")
            .field("roles", &self.roles())
            .field("design_system_path", &self.design_system_path)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockBackend;

    fn registry() -> AgentRegistry {
        AgentRegistry::new(Arc::new(MockBackend::new()), AgentDefaults::default()).unwrap()
    }

    // ===== Lookup Tests =====

    #[test]
    fn registry_builds_every_wired_role() {
        let registry = registry();
        assert_eq!(
            registry.roles(),
            vec![
                AgentRole::Orchestrator,
                AgentRole::ComponentBuilder,
                AgentRole::AccessibilityAuditor,
                AgentRole::DesignValidator,
            ]
        );
    }

    #[test]
    fn get_agent_finds_wired_roles_by_name() {
        let mut registry = registry();
        let agent = registry.get_agent("component-builder").unwrap();
        assert_eq!(agent.name(), "component-builder");
    }

    #[test]
    fn get_agent_returns_none_for_unwired_role() {
        let mut registry = registry();
        assert!(registry.get_agent("documentation-writer").is_none());
        assert!(registry.get_agent("theme-designer").is_none());
    }

    #[test]
    fn get_agent_returns_none_for_unknown_name() {
        let mut registry = registry();
        assert!(registry.get_agent("copywriter").is_none());
    }

    #[test]
    fn typed_accessors_are_available() {
        let mut registry = registry();
        assert!(registry.orchestrator().is_some());
        assert!(registry.component_builder().is_some());
        assert!(registry.accessibility_auditor().is_some());
        assert!(registry.design_validator().is_some());
    }

    #[test]
    fn agents_use_backend_default_model() {
        let mut registry = registry();
        let agent = registry.get_agent("orchestrator").unwrap();
        assert_eq!(agent.config().model(), "mock-model");
    }

    #[test]
    fn agents_use_configured_model() {
        let defaults = AgentDefaults {
            model: Some("codellama".into()),
            ..AgentDefaults::default()
        };
        let mut registry = AgentRegistry::new(Arc::new(MockBackend::new()), defaults).unwrap();
        let agent = registry.get_agent("design-validator").unwrap();
        assert_eq!(agent.config().model(), "codellama");
    }

    // ===== Context Tests =====

    #[test]
    fn create_context_uses_cwd_and_relative_design_system() {
        let registry = registry();
        let ctx = registry.create_context_in(Path::new("/work/app"), ContextOverrides::default());

        assert_eq!(ctx.project_root, PathBuf::from("/work/app"));
        assert_eq!(
            ctx.design_system_path,
            PathBuf::from("/work/app/design-system")
        );
        assert!(ctx.component_name.is_none());
        assert!(ctx.existing_files.is_empty());
        assert!(ctx.tasks.is_empty());
    }

    #[test]
    fn create_context_applies_overrides() {
        let registry = registry();
        let overrides = ContextOverrides::default()
            .component("Tooltip")
            .component_type("overlay")
            .requirements("Dismiss on Escape")
            .existing_files(vec![PathBuf::from("tooltip.css")])
            .design_system_path("/shared/tokens");

        let ctx = registry.create_context_in(Path::new("/work/app"), overrides);

        assert_eq!(ctx.component_name.as_deref(), Some("Tooltip"));
        assert_eq!(ctx.component_type.as_deref(), Some("overlay"));
        assert_eq!(ctx.requirements.as_deref(), Some("Dismiss on Escape"));
        assert_eq!(ctx.existing_files, vec![PathBuf::from("tooltip.css")]);
        assert_eq!(ctx.design_system_path, PathBuf::from("/shared/tokens"));
    }

    #[test]
    fn design_system_follows_overridden_project_root() {
        let registry = registry();
        let ctx = registry.create_context_in(
            Path::new("/work/app"),
            ContextOverrides::default().project_root("/elsewhere"),
        );
        assert_eq!(
            ctx.design_system_path,
            PathBuf::from("/elsewhere/design-system")
        );
    }

    // ===== History Tests =====

    #[tokio::test]
    async fn reset_all_clears_every_history() {
        let backend = Arc::new(MockBackend::new());
        backend.queue_text("plan");
        let mut registry =
            AgentRegistry::new(backend.clone(), AgentDefaults::default()).unwrap();
        let ctx = registry.create_context_in(Path::new("/work"), ContextOverrides::default());

        registry
            .orchestrator()
            .unwrap()
            .plan_component(&ctx)
            .await;
        assert_eq!(registry.get_agent("orchestrator").unwrap().history().len(), 2);

        registry.reset_all();
        assert!(registry.get_agent("orchestrator").unwrap().history().is_empty());
    }
}
