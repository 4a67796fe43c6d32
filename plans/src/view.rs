//! Pure transform from a generated plan to what the results panel shows.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser client renders `PlanView` with thin Leptos markup and the CLI
//! prints it as text, so every formatting and visibility decision lives here
//! where it can be tested without a document.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::types::{Milestone, Resource, StudyPlanResult};

/// Display model for one generated plan.
#[derive(Clone, Debug, PartialEq)]
pub struct PlanView {
    pub title: String,
    pub subtitle: String,
    pub summary: String,
    pub objectives: Vec<String>,
    pub concepts: Vec<String>,
    pub prerequisites: Vec<String>,
    pub milestones: Vec<MilestoneView>,
    pub resources: Vec<ResourceView>,
    pub recommendations: Option<String>,
}

/// Display model for one milestone card.
#[derive(Clone, Debug, PartialEq)]
pub struct MilestoneView {
    pub title: String,
    pub week_label: Option<String>,
    pub description: String,
    pub hours_label: String,
    pub tasks: Vec<String>,
}

/// Display model for one resource row.
#[derive(Clone, Debug, PartialEq)]
pub struct ResourceView {
    pub icon: ResourceIcon,
    pub title: String,
    /// Present only when the resource has a non-empty URL.
    pub link: Option<String>,
    pub kind_label: String,
    pub description: String,
}

/// Icon shown next to a resource, chosen from its free-form type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResourceIcon {
    Book,
    Video,
    Course,
    Article,
    Document,
    Tool,
    Community,
    #[default]
    Default,
}

impl ResourceIcon {
    /// Keyword checks run in order; the first substring hit wins.
    const KEYWORDS: [(&'static str, Self); 7] = [
        ("book", Self::Book),
        ("video", Self::Video),
        ("course", Self::Course),
        ("article", Self::Article),
        ("document", Self::Document),
        ("tool", Self::Tool),
        ("community", Self::Community),
    ];

    /// Pick an icon by case-insensitive substring match on the type label.
    #[must_use]
    pub fn for_kind(kind: Option<&str>) -> Self {
        let Some(kind) = kind else {
            return Self::Default;
        };
        let kind = kind.to_lowercase();
        Self::KEYWORDS
            .iter()
            .find(|(keyword, _)| kind.contains(keyword))
            .map_or(Self::Default, |(_, icon)| *icon)
    }

    /// Font Awesome class for this icon.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Book => "fa-book",
            Self::Video => "fa-video",
            Self::Course => "fa-graduation-cap",
            Self::Article => "fa-newspaper",
            Self::Document | Self::Default => "fa-file-alt",
            Self::Tool => "fa-tools",
            Self::Community => "fa-users",
        }
    }

    /// Single-glyph stand-in for terminals.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Book => "[book]",
            Self::Video => "[video]",
            Self::Course => "[course]",
            Self::Article => "[article]",
            Self::Document | Self::Default => "[doc]",
            Self::Tool => "[tool]",
            Self::Community => "[community]",
        }
    }
}

impl PlanView {
    /// Build the display model for a plan.
    #[must_use]
    pub fn from_result(result: &StudyPlanResult) -> Self {
        Self {
            title: format!("Study Plan: {}", result.topic),
            subtitle: format!("{}-week study roadmap", result.duration_weeks),
            summary: result.summary.clone(),
            objectives: result.learning_objectives.clone(),
            concepts: result.key_concepts.clone(),
            prerequisites: result.prerequisites.clone(),
            milestones: result.milestones.iter().map(MilestoneView::from_milestone).collect(),
            resources: result.resources.iter().map(ResourceView::from_resource).collect(),
            recommendations: result
                .recommendations
                .as_deref()
                .map(str::trim)
                .filter(|text| !text.is_empty())
                .map(str::to_owned),
        }
    }

    #[must_use]
    pub fn show_resources(&self) -> bool {
        !self.resources.is_empty()
    }

    #[must_use]
    pub fn show_recommendations(&self) -> bool {
        self.recommendations.is_some()
    }

    #[must_use]
    pub fn show_prerequisites(&self) -> bool {
        !self.prerequisites.is_empty()
    }

    /// Plain-text rendering used by the CLI.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = format!("{}\n{}\n\n{}\n", self.title, self.subtitle, self.summary);
        push_list(&mut out, "Prerequisites", &self.prerequisites);
        push_list(&mut out, "Learning objectives", &self.objectives);
        push_list(&mut out, "Key concepts", &self.concepts);

        if !self.milestones.is_empty() {
            out.push_str("\nMilestones\n");
            for milestone in &self.milestones {
                match &milestone.week_label {
                    Some(week) => out.push_str(&format!("\n  {week}: {}\n", milestone.title)),
                    None => out.push_str(&format!("\n  {}\n", milestone.title)),
                }
                out.push_str(&format!("  {}\n  {}\n", milestone.description, milestone.hours_label));
                for task in &milestone.tasks {
                    out.push_str(&format!("    - {task}\n"));
                }
            }
        }

        if self.show_resources() {
            out.push_str("\nResources\n");
            for resource in &self.resources {
                out.push_str(&format!("  {} {}", resource.icon.glyph(), resource.title));
                if !resource.kind_label.is_empty() {
                    out.push_str(&format!(" ({})", resource.kind_label));
                }
                out.push('\n');
                if let Some(link) = &resource.link {
                    out.push_str(&format!("    {link}\n"));
                }
                if !resource.description.is_empty() {
                    out.push_str(&format!("    {}\n", resource.description));
                }
            }
        }

        if let Some(recommendations) = &self.recommendations {
            out.push_str(&format!("\nRecommendations\n  {recommendations}\n"));
        }
        out
    }
}

impl MilestoneView {
    fn from_milestone(milestone: &Milestone) -> Self {
        Self {
            title: milestone.title.clone(),
            week_label: milestone.week.map(|week| format!("Week {week}")),
            description: milestone.description.clone(),
            hours_label: format!("Estimated time: {} hours", format_hours(milestone.estimated_hours)),
            tasks: milestone.tasks.clone(),
        }
    }
}

impl ResourceView {
    fn from_resource(resource: &Resource) -> Self {
        Self {
            icon: ResourceIcon::for_kind(resource.kind.as_deref()),
            title: resource.title.clone(),
            link: resource.url.clone().filter(|url| !url.trim().is_empty()),
            kind_label: resource.kind.clone().unwrap_or_default(),
            description: resource.description.clone().unwrap_or_default(),
        }
    }
}

/// Render hours the way a JS number prints: `6`, `1.5`.
#[must_use]
pub fn format_hours(hours: f64) -> String {
    if hours.fract() == 0.0 && hours.is_finite() {
        format!("{hours:.0}")
    } else {
        hours.to_string()
    }
}

fn push_list(out: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push_str(&format!("\n{heading}\n"));
    for item in items {
        out.push_str(&format!("  - {item}\n"));
    }
}
