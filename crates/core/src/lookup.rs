//! Id → display-name indexes for resolving foreign-key id lists.
//!
//! Indexes are built once per request from the fetched collections and
//! passed down by reference. Lookups never fail: an unknown id resolves to
//! the caller's placeholder label.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{Person, Project};

/// Placeholder for a task whose assignee cannot be resolved.
pub const UNASSIGNED: &str = "Unassigned";

/// Placeholder for an unresolvable project or credit.
pub const NOT_AVAILABLE: &str = "N/A";

/// Borrowed id → name map.
#[derive(Debug, Default)]
pub struct NameIndex<'a> {
    names: HashMap<&'a str, &'a str>,
}

impl<'a> NameIndex<'a> {
    /// Index cast and crew together; crew wins when an id appears in both.
    pub fn people(cast: &'a [Person], crew: &'a [Person]) -> Self {
        let names = cast
            .iter()
            .chain(crew.iter())
            .map(|p| (p.id.as_str(), p.name.as_str()))
            .collect();
        Self { names }
    }

    pub fn projects(projects: &'a [Project]) -> Self {
        let names = projects
            .iter()
            .map(|p| (p.id.as_str(), p.title.as_str()))
            .collect();
        Self { names }
    }

    pub fn get(&self, id: &str) -> Option<&'a str> {
        self.names.get(id).copied()
    }

    /// Resolve an optional id, falling back to `placeholder`.
    pub fn resolve_or(&self, id: Option<&str>, placeholder: &'a str) -> &'a str {
        id.and_then(|id| self.get(id)).unwrap_or(placeholder)
    }
}

/// A resolved cast or crew credit on a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credit {
    pub id: String,
    pub name: String,
    pub role: String,
}

/// Resolve a project's id list against a people collection, keeping the
/// id-list order. Unknown ids become `N/A` credits.
pub fn resolve_credits(ids: &[String], people: &[Person]) -> Vec<Credit> {
    let by_id: HashMap<&str, &Person> = people.iter().map(|p| (p.id.as_str(), p)).collect();
    ids.iter()
        .map(|id| match by_id.get(id.as_str()) {
            Some(person) => Credit {
                id: id.clone(),
                name: person.name.clone(),
                role: person.role.clone(),
            },
            None => Credit {
                id: id.clone(),
                name: NOT_AVAILABLE.to_string(),
                role: String::new(),
            },
        })
        .collect()
}
