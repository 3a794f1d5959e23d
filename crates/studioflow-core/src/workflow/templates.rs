//! Static workflow content: direction sets, deliverable catalogs and the
//! markdown bodies attached to seeded steps.

use crate::models::{Project, ProjectCategory, StepOption};

/// A catalog entry offered by the deliverable-selection step.
#[derive(Debug, Clone, Copy)]
pub struct CatalogItem {
    pub key: &'static str,
    pub title: &'static str,
    pub cost: u64,
    pub phase: &'static str,
    pub justification: &'static str,
}

impl CatalogItem {
    pub fn to_option(self) -> StepOption {
        StepOption::new(self.key, self.title)
            .with_description(self.justification)
            .with_cost(self.cost)
            .with_phase(self.phase)
    }
}

const BRAND_CATALOG: &[CatalogItem] = &[
    CatalogItem {
        key: "brand_strategy",
        title: "Brand Strategy Document",
        cost: 800,
        phase: "Foundation",
        justification: "Defines core DNA and market positioning.",
    },
    CatalogItem {
        key: "visual_brief",
        title: "Visual Identity Brief",
        cost: 600,
        phase: "Foundation",
        justification: "Translates strategy into visual direction for designers.",
    },
    CatalogItem {
        key: "competitor_audit",
        title: "Competitor Audit Report",
        cost: 500,
        phase: "Foundation",
        justification: "Identifies whitespace opportunities in the market.",
    },
    CatalogItem {
        key: "logo_system",
        title: "Logo & Identity System",
        cost: 1500,
        phase: "Design",
        justification: "Core asset for brand recognition across all touchpoints.",
    },
    CatalogItem {
        key: "brand_guidelines",
        title: "Brand Guidelines",
        cost: 1000,
        phase: "Design",
        justification: "Keeps future brand applications consistent.",
    },
    CatalogItem {
        key: "visual_templates",
        title: "Key Visual Templates",
        cost: 700,
        phase: "Design",
        justification: "Ready-to-use assets for social and presentations.",
    },
    CatalogItem {
        key: "website",
        title: "Website Design & Development",
        cost: 2500,
        phase: "Production",
        justification: "Primary digital storefront and conversion engine.",
    },
    CatalogItem {
        key: "social_kit",
        title: "Social Media Kit",
        cost: 800,
        phase: "Production",
        justification: "Launch content to build initial traction.",
    },
    CatalogItem {
        key: "launch_collateral",
        title: "Launch Collateral",
        cost: 600,
        phase: "Production",
        justification: "Physical and digital assets for the launch campaign.",
    },
];

const DIGITAL_CATALOG: &[CatalogItem] = &[
    CatalogItem {
        key: "ux_research",
        title: "UX Research & Personas",
        cost: 900,
        phase: "Foundation",
        justification: "Grounds the product in observed user behaviour.",
    },
    CatalogItem {
        key: "information_architecture",
        title: "Information Architecture",
        cost: 700,
        phase: "Foundation",
        justification: "Structures content so users find what they need.",
    },
    CatalogItem {
        key: "ui_design",
        title: "UI Design",
        cost: 1800,
        phase: "Design",
        justification: "High-fidelity screens for every key journey.",
    },
    CatalogItem {
        key: "design_system",
        title: "Design System",
        cost: 1200,
        phase: "Design",
        justification: "Reusable components that keep the product coherent.",
    },
    CatalogItem {
        key: "website",
        title: "Website Design & Development",
        cost: 2500,
        phase: "Production",
        justification: "Primary digital storefront and conversion engine.",
    },
    CatalogItem {
        key: "cms_setup",
        title: "CMS Setup & Training",
        cost: 900,
        phase: "Production",
        justification: "Lets the team publish without developer help.",
    },
    CatalogItem {
        key: "analytics",
        title: "Analytics & Tracking Plan",
        cost: 500,
        phase: "Production",
        justification: "Measures whether the launch meets its goals.",
    },
];

const CAMPAIGN_CATALOG: &[CatalogItem] = &[
    CatalogItem {
        key: "campaign_concept",
        title: "Campaign Concept",
        cost: 1000,
        phase: "Foundation",
        justification: "The single idea every execution hangs from.",
    },
    CatalogItem {
        key: "media_plan",
        title: "Media Plan",
        cost: 700,
        phase: "Foundation",
        justification: "Puts spend where the audience actually is.",
    },
    CatalogItem {
        key: "key_visuals",
        title: "Key Visuals",
        cost: 1200,
        phase: "Design",
        justification: "Hero imagery that carries the concept across channels.",
    },
    CatalogItem {
        key: "video_spot",
        title: "Video Spot",
        cost: 3000,
        phase: "Production",
        justification: "Highest-reach format for the launch window.",
    },
    CatalogItem {
        key: "social_kit",
        title: "Social Media Kit",
        cost: 800,
        phase: "Production",
        justification: "Launch content to build initial traction.",
    },
    CatalogItem {
        key: "launch_collateral",
        title: "Launch Collateral",
        cost: 600,
        phase: "Production",
        justification: "Physical and digital assets for the launch campaign.",
    },
];

/// Deliverable catalog for a project category.
pub fn catalog(category: ProjectCategory) -> &'static [CatalogItem] {
    match category {
        ProjectCategory::Brand => BRAND_CATALOG,
        ProjectCategory::Digital => DIGITAL_CATALOG,
        ProjectCategory::Campaign => CAMPAIGN_CATALOG,
    }
}

/// The three strategic directions offered for a project category.
pub fn directions(category: ProjectCategory) -> Vec<StepOption> {
    let raw: [(&str, &str, &str); 3] = match category {
        ProjectCategory::Brand => [
            (
                "A",
                "Quiet Confidence",
                "Understated, premium positioning built on craft and restraint.",
            ),
            (
                "B",
                "Bold Challenger",
                "Loud, contrarian voice that picks a fight with category norms.",
            ),
            (
                "C",
                "Warm Community",
                "Approachable brand that grows through belonging and word of mouth.",
            ),
        ],
        ProjectCategory::Digital => [
            (
                "A",
                "Utility First",
                "Fastest path to the user's goal; the interface gets out of the way.",
            ),
            (
                "B",
                "Immersive Experience",
                "Rich, story-led journeys that reward exploration.",
            ),
            (
                "C",
                "Platform Play",
                "Modular product that invites integrations and repeat use.",
            ),
        ],
        ProjectCategory::Campaign => [
            (
                "A",
                "Cultural Moment",
                "Ride a live conversation with a timely, shareable idea.",
            ),
            (
                "B",
                "Product Hero",
                "Put the product centre stage with a crisp proof-led message.",
            ),
            (
                "C",
                "Founder Story",
                "Sell the why through the people behind the work.",
            ),
        ],
    };

    raw.into_iter()
        .map(|(key, title, description)| StepOption::new(key, title).with_description(description))
        .collect()
}

/// Approve/reject options offered by approval gates.
pub fn approval_options(approve_title: &str, reject_title: &str) -> Vec<StepOption> {
    vec![
        StepOption::new("approve", approve_title),
        StepOption::new("reject", reject_title),
    ]
}

/// Format whole dollars with thousands separators, e.g. `$12,500`.
pub fn dollars(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

pub fn brief_body(project: &Project) -> String {
    format!(
        "Welcome to **{}**. Before I can begin strategic analysis, I need to understand what \
         we're building.\n\nDescribe the project in your own words: the vision, the audience, \
         what makes it different. Raw intent is more useful than polished language.",
        project.name
    )
}

pub fn direction_body(project: &Project) -> String {
    format!(
        "Based on the brief, I've mapped the positioning options for **{}**. Here are 3 \
         distinct strategic directions, each leading to a different brand architecture and \
         visual language. Choose the one that resonates most with your vision.",
        project.name
    )
}

pub fn strategy_review_body(project: &Project) -> String {
    format!(
        "## Strategy Review for {}\n\nThe chosen direction has been expanded into positioning, \
         pillars and design principles. Approve to move into production planning, or reject to \
         flag it for revision.",
        project.name
    )
}

/// Body of the deliverable-selection step, describing the preselected scope.
pub fn deliverables_body(options: &[StepOption], budget: Option<u64>) -> String {
    let selected: Vec<&StepOption> = options.iter().filter(|o| o.is_selected()).collect();
    let total: u64 = selected.iter().filter_map(|o| o.cost).sum();

    let (budget_line, note) = match budget {
        Some(budget) => {
            let remaining = budget as i64 - total as i64;
            let line = format!(
                "**Budget:** {} · **Estimated scope cost:** {} · **Remaining:** {}",
                dollars(budget as i64),
                dollars(total as i64),
                dollars(remaining)
            );
            let note = if remaining > 500 {
                "Budget has room. You could add custom deliverables or increase scope."
            } else {
                "Scope fits your budget. Review and adjust as needed."
            };
            (line, note)
        }
        None => (
            "**Budget:** Not set, showing full recommended scope.".to_string(),
            "No budget set. All deliverables are included. Set a budget to enable cost tracking.",
        ),
    };

    let mut table =
        String::from("| Item | Cost | Phase | Rationale |\n| :--- | :--- | :--- | :--- |\n");
    for option in &selected {
        table.push_str(&format!(
            "| **{}** | {} | {} | {} |\n",
            option.title,
            dollars(option.cost.unwrap_or(0) as i64),
            option.phase.as_deref().unwrap_or("-"),
            option.description.as_deref().unwrap_or("")
        ));
    }

    format!(
        "Based on the approved strategy and a budget analysis, here is the proposed scope:\n\n\
         {budget_line}\n\n### Recommended Scope\n{table}\n{note}\n\n\
         Select the deliverables to commit. Add custom items as a comma-separated list."
    )
}

pub fn visual_direction_body(project: &Project) -> String {
    format!(
        "Moodboards, type pairings and a colour system for **{}** are ready. Approve the visual \
         direction to begin production, or reject to request another round.",
        project.name
    )
}

pub fn production_body(project: &Project) -> String {
    format!(
        "Production for **{}** is underway. Committed deliverables are tracked on the project; \
         acknowledge to hand over to budget governance.",
        project.name
    )
}

pub fn budget_placeholder_body() -> String {
    "Budget allocation will be confirmed once deliverables are selected.".to_string()
}

/// CFO summary written when deliverables are committed.
///
/// `items` pairs each deliverable title with its cost; custom entries carry
/// `None`.
pub fn budget_summary_body(items: &[(String, Option<u64>)], budget: Option<u64>) -> String {
    let total: u64 = items.iter().filter_map(|(_, cost)| *cost).sum();
    let lines: Vec<String> = items
        .iter()
        .map(|(title, cost)| match cost {
            Some(cost) => format!("- {title} ({})", dollars(*cost as i64)),
            None => format!("- {title} (custom)"),
        })
        .collect();

    let mut body = format!(
        "**Deliverables Confirmed**: {} items locked in.\n\n{}\n\n---\n\n**Total estimated cost:** {}\n",
        items.len(),
        lines.join("\n"),
        dollars(total as i64)
    );

    match budget {
        Some(budget) => {
            let remaining = budget as i64 - total as i64;
            let margin = remaining as f64 / budget as f64 * 100.0;
            body.push_str(&format!(
                "**Project budget:** {}\n**Remaining budget:** {}\n**Projected margin:** {margin:.0}%\n\n",
                dollars(budget as i64),
                dollars(remaining)
            ));
            if remaining >= 0 {
                body.push_str("✅ Budget allocation approved. Design phase begins.");
            } else {
                body.push_str(&format!(
                    "⚠️ Scope exceeds budget by {}. Consider adjusting scope or increasing budget.",
                    dollars(-remaining)
                ));
            }
        }
        None => {
            body.push_str(
                "**Project budget:** Not set\n**Remaining budget:** N/A\n**Projected margin:** N/A\n",
            );
        }
    }

    body
}
