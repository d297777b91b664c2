//! View models for the public marketing page.
//!
//! Each builder is a pure function over already-fetched collections. The
//! API crate serializes the results as-is.

use std::collections::HashMap;

use serde::Serialize;

use crate::lookup::{resolve_credits, Credit, NameIndex, NOT_AVAILABLE};
use crate::models::{
    AboutContent, ContactInfo, Department, DepartmentCrew, DepartmentRole, Person, Project,
    SiteSettings,
};
use crate::pricing::PricingSection;
use crate::progress::{PhaseView, ProjectProgress};
use crate::settings::{decode_links, FooterLink, SocialLink};
use crate::types::DocId;

/// Shown in the modal when a project has no phase breakdown.
pub const PHASES_NOT_DETAILED: &str = "Production phases have not been detailed yet.";

// ---------------------------------------------------------------------------
// Hero
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct HeroView {
    pub site_name: String,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub video_url: Option<String>,
}

pub fn hero(settings: &SiteSettings) -> HeroView {
    HeroView {
        site_name: settings.site_name.clone(),
        title: settings.hero_title.clone(),
        subtitle: settings.hero_subtitle.clone(),
        video_url: settings.hero_video_url.clone(),
    }
}

// ---------------------------------------------------------------------------
// About
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct TeamMember {
    pub id: DocId,
    pub name: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DepartmentView {
    pub id: DocId,
    pub name: String,
    pub roles: Vec<String>,
    pub members: Vec<TeamMember>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AboutSection {
    pub heading: String,
    pub body: String,
    pub image_url: Option<String>,
    pub mission: Option<String>,
    pub departments: Vec<DepartmentView>,
    pub contact: Option<ContactInfo>,
}

/// Everything the about section is built from.
#[derive(Debug, Clone, Copy)]
pub struct AboutInputs<'a> {
    pub content: Option<&'a AboutContent>,
    pub departments: &'a [Department],
    pub roles: &'a [DepartmentRole],
    pub department_crew: &'a [DepartmentCrew],
    pub crew: &'a [Person],
    pub contact: Option<&'a ContactInfo>,
}

/// Build the about section.
///
/// Departments are ordered by their `order` attribute (unordered ones last,
/// collection order otherwise). A member's role is the department role named
/// by the join document, falling back to the crew member's own role.
pub fn about_section(inputs: AboutInputs<'_>) -> AboutSection {
    let crew_names = NameIndex::people(&[], inputs.crew);
    let crew_roles: HashMap<&str, &str> = inputs
        .crew
        .iter()
        .map(|p| (p.id.as_str(), p.role.as_str()))
        .collect();
    let role_names: HashMap<&str, &str> = inputs
        .roles
        .iter()
        .map(|r| (r.id.as_str(), r.role_name.as_str()))
        .collect();

    let mut departments: Vec<&Department> = inputs.departments.iter().collect();
    departments.sort_by_key(|d| d.order.unwrap_or(i32::MAX));

    let departments = departments
        .into_iter()
        .map(|dept| DepartmentView {
            id: dept.id.clone(),
            name: dept.name.clone(),
            roles: inputs
                .roles
                .iter()
                .filter(|r| r.department_id == dept.id)
                .map(|r| r.role_name.clone())
                .collect(),
            members: inputs
                .department_crew
                .iter()
                .filter(|m| m.department_id == dept.id)
                .map(|m| {
                    let role = m
                        .role_id
                        .as_deref()
                        .and_then(|id| role_names.get(id).copied())
                        .or_else(|| crew_roles.get(m.crew_member_id.as_str()).copied())
                        .unwrap_or_default();
                    TeamMember {
                        id: m.crew_member_id.clone(),
                        name: crew_names
                            .resolve_or(Some(m.crew_member_id.as_str()), NOT_AVAILABLE)
                            .to_string(),
                        role: role.to_string(),
                    }
                })
                .collect(),
        })
        .collect();

    let (heading, body, image_url, mission) = match inputs.content {
        Some(c) => (
            c.heading.clone(),
            c.body.clone(),
            c.image_url.clone(),
            c.mission.clone(),
        ),
        None => Default::default(),
    };

    AboutSection {
        heading,
        body,
        image_url,
        mission,
        departments,
        contact: inputs.contact.cloned(),
    }
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct ProjectCard {
    pub id: DocId,
    pub title: String,
    pub description: String,
    pub poster_url: Option<String>,
    pub release_year: Option<i32>,
    pub project_type: String,
    pub status: String,
}

pub fn project_card(project: &Project) -> ProjectCard {
    ProjectCard {
        id: project.id.clone(),
        title: project.title.clone(),
        description: project.description.clone(),
        poster_url: project.poster_url.clone(),
        release_year: project.release_year,
        project_type: project.project_type.clone(),
        status: project.status.clone(),
    }
}

pub fn project_cards(projects: &[Project]) -> Vec<ProjectCard> {
    projects.iter().map(project_card).collect()
}

/// The project modal's content.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub card: ProjectCard,
    pub synopsis: Option<String>,
    pub runtime: Option<u32>,
    pub genres: Vec<String>,
    pub trailer_url: Option<String>,
    pub cast: Vec<Credit>,
    pub crew: Vec<Credit>,
    pub progress: ProjectProgress,
    pub phases: Vec<PhaseView>,
    /// Set when `phases` is empty.
    pub phases_note: Option<&'static str>,
}

pub fn project_detail(
    project: &Project,
    cast: &[Person],
    crew: &[Person],
    progress: ProjectProgress,
    phases: Vec<PhaseView>,
) -> ProjectDetail {
    let phases_note = phases.is_empty().then_some(PHASES_NOT_DETAILED);
    ProjectDetail {
        card: project_card(project),
        synopsis: project.synopsis.clone(),
        runtime: project.runtime,
        genres: project.genres.clone(),
        trailer_url: project.trailer_url.clone(),
        cast: resolve_credits(&project.cast_ids, cast),
        crew: resolve_credits(&project.crew_ids, crew),
        progress,
        phases,
        phases_note,
    }
}

// ---------------------------------------------------------------------------
// Footer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct FooterView {
    pub site_name: String,
    pub text: Option<String>,
    pub social_links: Vec<SocialLink>,
    pub footer_links: Vec<FooterLink>,
    pub contact: Option<ContactInfo>,
}

pub fn footer(settings: &SiteSettings, contact: Option<&ContactInfo>) -> FooterView {
    FooterView {
        site_name: settings.site_name.clone(),
        text: settings.footer_text.clone(),
        social_links: decode_links(settings.social_links.as_ref()),
        footer_links: decode_links(settings.footer_links.as_ref()),
        contact: contact.cloned(),
    }
}

// ---------------------------------------------------------------------------
// Whole page
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct HomePage {
    pub hero: HeroView,
    pub about: AboutSection,
    pub projects: Vec<ProjectCard>,
    /// Absent when there are no pricing tiers.
    pub pricing: Option<PricingSection>,
    pub footer: FooterView,
}
