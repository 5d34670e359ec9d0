//! Interactive main menu, shown when no subcommand is given.

use anyhow::Result;

use super::audit::{self, AuditArgs};
use super::component::{self, ComponentArgs};
use super::models;
use super::prompts::{choose, print_header};
use super::review::{self, ReviewArgs};
use crate::app::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    CreateComponent,
    Audit,
    Review,
    ListModels,
    Health,
    Exit,
}

impl MenuItem {
    const ALL: [MenuItem; 6] = [
        MenuItem::CreateComponent,
        MenuItem::Audit,
        MenuItem::Review,
        MenuItem::ListModels,
        MenuItem::Health,
        MenuItem::Exit,
    ];

    fn label(self) -> &'static str {
        match self {
            MenuItem::CreateComponent => "Create a new component",
            MenuItem::Audit => "Audit a component for accessibility",
            MenuItem::Review => "Review the design system",
            MenuItem::ListModels => "List installed models",
            MenuItem::Health => "Check Ollama connection",
            MenuItem::Exit => "Exit",
        }
    }
}

pub async fn run(app: &App) -> Result<()> {
    print_header("Aural Agents");

    let labels: Vec<&str> = MenuItem::ALL.iter().map(|item| item.label()).collect();
    let selected = MenuItem::ALL[choose("What would you like to do?", &labels)?];

    match selected {
        MenuItem::CreateComponent => component::run(ComponentArgs::default(), app).await,
        MenuItem::Audit => audit::run(AuditArgs::default(), app).await,
        MenuItem::Review => review::run(ReviewArgs::default(), app).await,
        MenuItem::ListModels => models::list_models(app).await,
        MenuItem::Health => models::check_health(app).await,
        MenuItem::Exit => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_item_has_a_distinct_label() {
        let mut labels: Vec<_> = MenuItem::ALL.iter().map(|i| i.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), MenuItem::ALL.len());
    }

    #[test]
    fn exit_is_last() {
        assert_eq!(MenuItem::ALL.last(), Some(&MenuItem::Exit));
    }
}
