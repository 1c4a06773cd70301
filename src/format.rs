use crate::domain::payload::{nested_scalar, scalar, str_field};
use crate::domain::{Event, EventKind};

/// Stands in for any payload field that is absent or has the wrong shape.
pub const PLACEHOLDER: &str = "<unknown>";

pub fn format_event(event: &Event) -> String {
    let repo = &event.repo.name;
    let p = &event.payload;
    let or_placeholder = |v: Option<String>| v.unwrap_or_else(|| PLACEHOLDER.to_string());

    match &event.kind {
        EventKind::Push => format!(
            "Pushed {} commit(s) to {}",
            or_placeholder(scalar(p, "distinct_size")),
            repo
        ),
        EventKind::Watch => format!("Starred {}", repo),
        EventKind::Fork => format!("Forked {}", repo),
        EventKind::Create => describe_ref("Created", event),
        EventKind::Delete => describe_ref("Deleted", event),
        EventKind::PullRequest => format!(
            "{} pull request #{} in {}",
            action(event),
            or_placeholder(nested_scalar(p, "pull_request", "number")),
            repo
        ),
        EventKind::Release => format!(
            "{} release {} in {}",
            action(event),
            or_placeholder(nested_scalar(p, "release", "tag_name")),
            repo
        ),
        EventKind::Issue => format!("{} issue in {}", action(event), repo),
        EventKind::Other(tag) => format!("{} in {}", tag, repo),
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_event(self))
    }
}

// Create and Delete share a shape; a repository ref has no name worth printing.
fn describe_ref(verb: &str, event: &Event) -> String {
    let p = &event.payload;
    let ref_type = scalar(p, "ref_type").unwrap_or_else(|| PLACEHOLDER.to_string());
    if str_field(p, "ref_type") == Some("repository") {
        format!("{} {} {}", verb, ref_type, event.repo.name)
    } else {
        let name = scalar(p, "ref").unwrap_or_else(|| PLACEHOLDER.to_string());
        format!("{} {} {} in {}", verb, ref_type, name, event.repo.name)
    }
}

fn action(event: &Event) -> String {
    match str_field(&event.payload, "action") {
        Some(action) => titlecase(action),
        None => PLACEHOLDER.to_string(),
    }
}

/// Uppercases the first letter of every whitespace-separated word.
pub fn titlecase(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if at_word_start && !c.is_whitespace() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = c.is_whitespace();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event(kind: EventKind, payload: serde_json::Value) -> Event {
        Event::new(kind, "octo/repo").with_payload(payload)
    }

    #[test]
    fn push_counts_distinct_commits() {
        let e = event(EventKind::Push, json!({ "distinct_size": 3 }));
        assert_eq!(format_event(&e), "Pushed 3 commit(s) to octo/repo");
    }

    #[test]
    fn watch_and_fork() {
        assert_eq!(format_event(&event(EventKind::Watch, json!({}))), "Starred octo/repo");
        assert_eq!(format_event(&event(EventKind::Fork, json!({}))), "Forked octo/repo");
    }

    #[test]
    fn unrecognized_type_uses_raw_tag() {
        let e = event(EventKind::from_tag("SponsorshipEvent"), json!({}));
        assert_eq!(format_event(&e), "SponsorshipEvent in octo/repo");
    }

    #[test]
    fn repository_refs_omit_the_ref_name() {
        let payload = json!({ "ref_type": "repository", "ref": "should-not-appear" });
        assert_eq!(
            format_event(&event(EventKind::Create, payload.clone())),
            "Created repository octo/repo"
        );
        assert_eq!(
            format_event(&event(EventKind::Delete, payload)),
            "Deleted repository octo/repo"
        );
    }

    #[test]
    fn branch_refs_include_the_ref_name() {
        let payload = json!({ "ref_type": "branch", "ref": "main" });
        assert_eq!(
            format_event(&event(EventKind::Create, payload.clone())),
            "Created branch main in octo/repo"
        );
        assert_eq!(
            format_event(&event(EventKind::Delete, payload)),
            "Deleted branch main in octo/repo"
        );
    }

    #[test]
    fn actions_are_titlecased() {
        let pr = event(
            EventKind::PullRequest,
            json!({ "action": "opened", "pull_request": { "number": 12 } }),
        );
        assert_eq!(format_event(&pr), "Opened pull request #12 in octo/repo");

        let release = event(
            EventKind::Release,
            json!({ "action": "published", "release": { "tag_name": "v1.2.0" } }),
        );
        assert_eq!(format_event(&release), "Published release v1.2.0 in octo/repo");

        let issue = event(EventKind::Issue, json!({ "action": "closed" }));
        assert_eq!(format_event(&issue), "Closed issue in octo/repo");
    }

    #[test]
    fn missing_fields_fall_back_to_placeholder() {
        assert_eq!(
            format_event(&event(EventKind::Push, json!({}))),
            "Pushed <unknown> commit(s) to octo/repo"
        );
        assert_eq!(
            format_event(&event(EventKind::PullRequest, json!({ "action": "closed" }))),
            "Closed pull request #<unknown> in octo/repo"
        );
        assert_eq!(
            format_event(&event(EventKind::Release, json!({ "release": "v1" }))),
            "<unknown> release <unknown> in octo/repo"
        );
        assert_eq!(
            format_event(&event(EventKind::Issue, json!({ "action": 5 }))),
            "<unknown> issue in octo/repo"
        );
        assert_eq!(
            format_event(&event(EventKind::Create, json!({ "ref_type": "tag" }))),
            "Created tag <unknown> in octo/repo"
        );
    }

    #[test]
    fn display_matches_format_event() {
        let e = event(EventKind::Issue, json!({ "action": "reopened" }));
        assert_eq!(e.to_string(), format_event(&e));
    }

    #[test]
    fn titlecase_words() {
        assert_eq!(titlecase("opened"), "Opened");
        assert_eq!(titlecase("ready for review"), "Ready For Review");
        assert_eq!(titlecase("  two  spaces"), "  Two  Spaces");
        assert_eq!(titlecase(""), "");
    }
}
