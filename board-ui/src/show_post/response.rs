use dioxus::prelude::*;
use shared_types::{PostResponse, PostStatus};

use super::logic::{format_date, text_paragraphs};

/// The block shows for any non-open status, and for open posts only when
/// staff have responded.
pub fn should_show_response(status: PostStatus, response: Option<&PostResponse>) -> bool {
    status != PostStatus::Open || response.is_some()
}

pub fn duplicate_notice(status: PostStatus, response: Option<&PostResponse>) -> Option<String> {
    if status != PostStatus::Duplicate {
        return None;
    }
    response
        .and_then(|r| r.original.as_ref())
        .map(|original| format!("Merged into #{}: {}", original.number, original.title))
}

#[component]
pub fn ShowPostResponse(status: PostStatus, response: Option<PostResponse>) -> Element {
    if !should_show_response(status, response.as_ref()) {
        return rsx! {};
    }

    let notice = duplicate_notice(status, response.as_ref());
    let paragraphs = response
        .as_ref()
        .and_then(|r| r.text.as_deref())
        .map(text_paragraphs)
        .unwrap_or_default();
    let responder = response
        .as_ref()
        .map(|r| format!("{} · {}", r.user.name, format_date(&r.responded_on)));
    let status_class = format!("status-badge status--{}", status.slug());

    rsx! {
        div {
            class: "post-response",
            div {
                class: "post-response-header",
                span { class: "{status_class}", "{status.title()}" }
                if let Some(responder) = responder {
                    span { class: "info", "{responder}" }
                }
            }
            if let Some(notice) = notice {
                div { class: "post-response-duplicate", "{notice}" }
            }
            for (idx, paragraph) in paragraphs.into_iter().enumerate() {
                p { key: "{idx}", class: "post-response-text", "{paragraph}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use shared_types::{OriginalPost, User, UserRole};

    fn response(original: Option<OriginalPost>) -> PostResponse {
        PostResponse {
            text: Some("We are on it".to_string()),
            responded_on: Utc.with_ymd_and_hms(2026, 4, 2, 12, 0, 0).unwrap(),
            user: User {
                id: 1,
                name: "Staff".to_string(),
                role: UserRole::Administrator,
                avatar_url: None,
            },
            original,
        }
    }

    #[test]
    fn open_posts_show_response_only_when_answered() {
        assert!(!should_show_response(PostStatus::Open, None));
        assert!(should_show_response(PostStatus::Open, Some(&response(None))));
    }

    #[test]
    fn non_open_status_shows_even_without_response() {
        assert!(should_show_response(PostStatus::Planned, None));
        assert!(should_show_response(PostStatus::Declined, None));
        assert!(should_show_response(PostStatus::Started, Some(&response(None))));
    }

    #[test]
    fn duplicate_notice_names_original() {
        let original = OriginalPost {
            number: 12,
            title: "Dark mode".to_string(),
            slug: "dark-mode".to_string(),
            status: PostStatus::Planned,
        };
        let resp = response(Some(original));
        assert_eq!(
            duplicate_notice(PostStatus::Duplicate, Some(&resp)).as_deref(),
            Some("Merged into #12: Dark mode")
        );
        assert_eq!(duplicate_notice(PostStatus::Completed, Some(&resp)), None);
    }
}
