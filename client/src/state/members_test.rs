use super::*;

fn member(id: &str) -> Member {
    Member {
        id: id.to_owned(),
        name: id.to_owned(),
        avatar: String::new(),
        interests: Vec::new(),
        goals: Vec::new(),
        bio: String::new(),
        match_score: 75.0,
        discord_handle: format!("@{id}#0000"),
        location: String::new(),
        experience: String::new(),
    }
}

// =============================================================
// recommendation lifecycle
// =============================================================

#[test]
fn begin_loading_clears_previous_set() {
    let mut state = MembersState::default();
    state.apply_results(vec![member("a"), member("b")]);

    state.begin_loading();
    assert!(state.recommended.is_empty());
    assert!(state.loading);
}

#[test]
fn apply_results_replaces_wholesale() {
    let mut state = MembersState::default();
    state.apply_results(vec![member("a")]);
    state.begin_loading();
    state.apply_results(vec![member("b"), member("c")]);

    let ids: Vec<&str> = state.recommended.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "c"]);
    assert!(!state.loading);
}

#[test]
fn fail_empties_silently() {
    let mut state = MembersState::default();
    state.apply_results(vec![member("a")]);
    state.begin_loading();
    state.fail();

    assert!(state.recommended.is_empty());
    assert!(!state.loading);
}

#[test]
fn strip_shows_while_loading_or_populated() {
    let mut state = MembersState::default();
    assert!(!state.show_strip());

    state.begin_loading();
    assert!(state.show_strip());

    state.apply_results(vec![member("a")]);
    assert!(state.show_strip());

    state.fail();
    assert!(!state.show_strip());
}

// =============================================================
// discover filter
// =============================================================

#[test]
fn filter_is_case_insensitive_on_name() {
    let hits = filter_members(&sample_members(), "sArAh");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "preview-1");
}

#[test]
fn filter_unions_across_fields() {
    let members = sample_members();

    // interests
    assert!(filter_members(&members, "machine learning").iter().any(|m| m.id == "preview-4"));
    // goals
    assert!(filter_members(&members, "find co-founder").iter().any(|m| m.id == "preview-1"));
    // location
    assert!(filter_members(&members, "austin").iter().any(|m| m.id == "preview-2"));
    // experience
    assert!(filter_members(&members, "8+ years design").iter().any(|m| m.id == "preview-3"));
    // bio
    assert!(filter_members(&members, "inclusive design").iter().any(|m| m.id == "preview-3"));
}

#[test]
fn blank_query_matches_everyone() {
    assert_eq!(filter_members(&sample_members(), "").len(), 5);
}

#[test]
fn unmatched_query_returns_empty() {
    assert!(filter_members(&sample_members(), "underwater basket weaving").is_empty());
}
