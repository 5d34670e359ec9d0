//! Agent roles and their specialized wrappers
//!
//! Each wrapper borrows an [`Agent`](super::Agent) and only builds task
//! descriptions; execution always goes through `Agent::execute`.

mod accessibility_auditor;
mod component_builder;
mod design_validator;
mod orchestrator;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use accessibility_auditor::AccessibilityAuditor;
pub use component_builder::ComponentBuilder;
pub use design_validator::DesignValidator;
pub use orchestrator::Orchestrator;

use super::types::AgentConfig;
use crate::error::AgentError;

/// Every declared agent role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgentRole {
    Orchestrator,
    ComponentBuilder,
    AccessibilityAuditor,
    DesignValidator,
    DocumentationWriter,
    ThemeDesigner,
}

impl AgentRole {
    pub const ALL: [AgentRole; 6] = [
        AgentRole::Orchestrator,
        AgentRole::ComponentBuilder,
        AgentRole::AccessibilityAuditor,
        AgentRole::DesignValidator,
        AgentRole::DocumentationWriter,
        AgentRole::ThemeDesigner,
    ];

    /// Registry key
    pub fn name(self) -> &'static str {
        match self {
            AgentRole::Orchestrator => "orchestrator",
            AgentRole::ComponentBuilder => "component-builder",
            AgentRole::AccessibilityAuditor => "accessibility-auditor",
            AgentRole::DesignValidator => "design-validator",
            AgentRole::DocumentationWriter => "documentation-writer",
            AgentRole::ThemeDesigner => "theme-designer",
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            AgentRole::Orchestrator => "Orchestrator",
            AgentRole::ComponentBuilder => "Component Builder",
            AgentRole::AccessibilityAuditor => "Accessibility Auditor",
            AgentRole::DesignValidator => "Design Token Validator",
            AgentRole::DocumentationWriter => "Documentation Writer",
            AgentRole::ThemeDesigner => "Theme Designer",
        }
    }

    /// Whether an implementation exists for this role
    pub fn is_wired(self) -> bool {
        self.profile().is_some()
    }

    /// Configuration for this role using `model`, if the role is wired
    pub fn config(self, model: &str) -> Option<Result<AgentConfig, AgentError>> {
        let profile = self.profile()?;
        Some(
            AgentConfig::builder(self.name())
                .role(self.label())
                .model(model)
                .system_prompt(profile.system_prompt)
                .temperature(profile.temperature)
                .max_tokens(profile.max_tokens)
                .build(),
        )
    }

    fn profile(self) -> Option<RoleProfile> {
        match self {
            AgentRole::Orchestrator => Some(RoleProfile {
                system_prompt: ORCHESTRATOR_PROMPT,
                temperature: 0.3,
                max_tokens: 2048,
            }),
            AgentRole::ComponentBuilder => Some(RoleProfile {
                system_prompt: COMPONENT_BUILDER_PROMPT,
                temperature: 0.2,
                max_tokens: 4096,
            }),
            AgentRole::AccessibilityAuditor => Some(RoleProfile {
                system_prompt: ACCESSIBILITY_AUDITOR_PROMPT,
                temperature: 0.1,
                max_tokens: 2048,
            }),
            AgentRole::DesignValidator => Some(RoleProfile {
                system_prompt: DESIGN_VALIDATOR_PROMPT,
                temperature: 0.1,
                max_tokens: 1536,
            }),
            AgentRole::DocumentationWriter | AgentRole::ThemeDesigner => None,
        }
    }
}

impl std::fmt::Display for AgentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AgentRole {
    type Err = AgentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AgentRole::ALL
            .into_iter()
            .find(|role| role.name() == s)
            .ok_or_else(|| AgentError::UnknownRole(s.to_string()))
    }
}

/// Per-role generation parameters
struct RoleProfile {
    system_prompt: &'static str,
    temperature: f32,
    max_tokens: u32,
}

const ORCHESTRATOR_PROMPT: &str = "You are the lead engineer of the Aural UI design system. \
You break component work into concrete, ordered steps, keep every decision consistent with \
the existing design tokens and component conventions, and review finished work against the \
original requirements. Answer in Markdown with short sections and numbered steps.";

const COMPONENT_BUILDER_PROMPT: &str = "You build Aural UI components as framework-agnostic \
HTML, CSS custom properties, and vanilla JavaScript. Use design tokens instead of literal \
values, semantic elements before ARIA, and BEM-style class names prefixed with `aural-`. \
Return complete files in fenced code blocks, each preceded by its relative path.";

const ACCESSIBILITY_AUDITOR_PROMPT: &str = "You are an accessibility specialist auditing UI \
components against WCAG 2.2 AA. Check keyboard operation, focus management, names and roles, \
contrast, motion, and screen reader announcements. Report each issue with its success \
criterion, severity (critical, serious, moderate, minor), and a concrete fix.";

const DESIGN_VALIDATOR_PROMPT: &str = "You validate design-system consistency. Check that \
components use the published design tokens for color, spacing, typography, radius, and \
motion, flag hard-coded values and naming drift, and list each finding with the token that \
should be used instead.";
