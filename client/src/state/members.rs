//! Member recommendation and discovery state.
//!
//! Live recommendations and the loading flag are mutually exclusive: the
//! list is cleared the moment a fetch begins, so the strip never shows a
//! stale set next to a spinner. The static preview dataset for the Discover
//! page lives here too, along with the local text filter over it.

#[cfg(test)]
#[path = "members_test.rs"]
mod members_test;

use crate::net::types::Member;

#[derive(Clone, Debug, Default)]
pub struct MembersState {
    /// Latest recommendation set, replaced wholesale per fetch.
    pub recommended: Vec<Member>,
    pub loading: bool,
    /// Member shown in the detail overlay, if any.
    pub selected: Option<Member>,
}

impl MembersState {
    /// A recommendation fetch is starting: clear the previous set.
    pub fn begin_loading(&mut self) {
        self.recommended = Vec::new();
        self.loading = true;
    }

    /// Replace the set with fresh results.
    pub fn apply_results(&mut self, members: Vec<Member>) {
        self.recommended = members;
        self.loading = false;
    }

    /// The fetch failed: empty set, no user-visible error.
    pub fn fail(&mut self) {
        self.recommended = Vec::new();
        self.loading = false;
    }

    /// The recommendation strip renders while loading or non-empty.
    #[must_use]
    pub fn show_strip(&self) -> bool {
        self.loading || !self.recommended.is_empty()
    }
}

// =============================================================
// DISCOVER PAGE
// =============================================================

/// Case-insensitive substring filter with OR semantics across name, bio,
/// interests, goals, location, and experience. A blank query matches all.
#[must_use]
pub fn filter_members(members: &[Member], query: &str) -> Vec<Member> {
    let query = query.to_lowercase();
    members
        .iter()
        .filter(|m| {
            m.name.to_lowercase().contains(&query)
                || m.bio.to_lowercase().contains(&query)
                || m.interests.iter().any(|i| i.to_lowercase().contains(&query))
                || m.goals.iter().any(|g| g.to_lowercase().contains(&query))
                || m.location.to_lowercase().contains(&query)
                || m.experience.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

/// Static preview dataset shown on the Discover page, separate from live
/// recommendations.
#[must_use]
pub fn sample_members() -> Vec<Member> {
    let entry = |id: &str,
                 name: &str,
                 initials: &str,
                 interests: &[&str],
                 goals: &[&str],
                 bio: &str,
                 match_score: f64,
                 discord_handle: &str,
                 location: &str,
                 experience: &str| Member {
        id: id.to_owned(),
        name: name.to_owned(),
        avatar: format!("/placeholder.svg?height=40&width=40&text={initials}"),
        interests: interests.iter().map(|s| (*s).to_owned()).collect(),
        goals: goals.iter().map(|s| (*s).to_owned()).collect(),
        bio: bio.to_owned(),
        match_score,
        discord_handle: discord_handle.to_owned(),
        location: location.to_owned(),
        experience: experience.to_owned(),
    };

    vec![
        entry(
            "preview-1",
            "Sarah Chen",
            "SC",
            &["React", "TypeScript", "UI/UX Design", "Startups"],
            &["Build SaaS products", "Find co-founder"],
            "Full-stack developer building productivity apps. Looking for technical co-founder for my next venture.",
            95.0,
            "@sarahchen#1234",
            "San Francisco, CA",
            "5+ years in tech",
        ),
        entry(
            "preview-2",
            "Marcus Johnson",
            "MJ",
            &["Entrepreneurship", "AI", "Product Management", "Growth Hacking"],
            &["Scale startup", "Network with founders", "Learn about AI"],
            "Serial entrepreneur, currently building AI-powered marketing tools. Happy to mentor early-stage founders.",
            92.0,
            "@marcusj#5678",
            "Austin, TX",
            "10+ years entrepreneurship",
        ),
        entry(
            "preview-3",
            "Elena Rodriguez",
            "ER",
            &["Design Systems", "User Research", "Accessibility", "Figma"],
            &["Lead design team", "Improve accessibility", "Mentor designers"],
            "Senior UX Designer with 8 years experience. Passionate about inclusive design and building design systems.",
            88.0,
            "@elenadesign#9012",
            "New York, NY",
            "8+ years design",
        ),
        entry(
            "preview-4",
            "David Kim",
            "DK",
            &["Machine Learning", "Python", "Data Science", "Open Source"],
            &["Contribute to AI research", "Build ML products", "Teach others"],
            "Data scientist and ML engineer. Love working on computer vision projects and contributing to open source.",
            85.0,
            "@davidml#3456",
            "Seattle, WA",
            "6+ years ML/AI",
        ),
        entry(
            "preview-5",
            "Priya Patel",
            "PP",
            &["Product Strategy", "User Analytics", "B2B SaaS", "Team Leadership"],
            &["Become VP of Product", "Launch successful product", "Build great teams"],
            "Product manager at a fast-growing SaaS company. Focused on user-driven product development and team growth.",
            90.0,
            "@priyapm#7890",
            "Boston, MA",
            "7+ years product",
        ),
    ]
}
