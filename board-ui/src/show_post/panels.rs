//! Side panels of the show-post page.
//!
//! Each panel only reads the post (and sibling data) handed down by the page;
//! none of them write back into the page's state.

use dioxus::prelude::*;
use shared_types::{Comment, Post, Session, Tag};

use super::logic::{format_date, text_paragraphs};

#[component]
pub fn VoteCounter(post: Post) -> Element {
    let class = if post.has_voted {
        "vote-counter voted"
    } else {
        "vote-counter"
    };

    rsx! {
        div {
            class: "{class}",
            span { class: "vote-arrow", "▲" }
            span { class: "vote-count", "{post.votes_count}" }
        }
    }
}

/// Tags assigned to the post, in board order
pub fn assigned_tags<'a>(post: &Post, tags: &'a [Tag]) -> Vec<&'a Tag> {
    tags.iter()
        .filter(|tag| post.tags.iter().any(|slug| slug == &tag.slug))
        .collect()
}

#[component]
pub fn TagsPanel(post: Post, tags: Vec<Tag>) -> Element {
    let session = use_context::<Session>();
    let assigned: Vec<Tag> = assigned_tags(&post, &tags).into_iter().cloned().collect();

    if assigned.is_empty() && !session.can_manage_posts() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "tags-panel",
            span { class: "subtitle", "Tags" }
            if assigned.is_empty() {
                span { class: "info", "None yet" }
            }
            ul {
                class: "tag-list",
                for tag in assigned {
                    li {
                        key: "{tag.id}",
                        class: "tag",
                        style: "border-color: #{tag.color};",
                        "{tag.name}"
                    }
                }
            }
        }
    }
}

pub fn subscription_text(subscribed: bool) -> &'static str {
    if subscribed {
        "You're receiving notifications about activity on this post."
    } else {
        "You'll not receive any notification about this post."
    }
}

#[component]
pub fn NotificationsPanel(post: Post, subscribed: bool) -> Element {
    let session = use_context::<Session>();
    if !session.is_authenticated {
        return rsx! {};
    }

    rsx! {
        div {
            class: "notifications-panel",
            "data-post": "{post.number}",
            span { class: "subtitle", "Notifications" }
            span { class: "info", {subscription_text(subscribed)} }
        }
    }
}

/// Moderation shares the edit gate: authenticated collaborators and admins.
pub fn moderation_visible(session: &Session) -> bool {
    session.can_manage_posts()
}

#[component]
pub fn ModerationPanel(post: Post) -> Element {
    let session = use_context::<Session>();
    if !moderation_visible(&session) {
        return rsx! {};
    }

    rsx! {
        div {
            class: "moderation-panel",
            span { class: "subtitle", "Moderation" }
            span { class: "info", "#{post.number} · {post.status.title()}" }
        }
    }
}

/// Entry point of the response-authoring form. Shows the current response
/// next to the control; submitting responses is handled by the form itself.
#[component]
pub fn ResponseForm(post: Post) -> Element {
    let mut expanded = use_signal(|| false);
    let current = post
        .response
        .as_ref()
        .and_then(|r| r.text.clone())
        .unwrap_or_default();

    rsx! {
        div {
            class: "response-form",
            button {
                class: "respond",
                onclick: move |_| {
                    let next = !expanded();
                    expanded.set(next);
                },
                "Respond"
            }
            if expanded() {
                div {
                    class: "response-form-body",
                    span { class: "info", "Current status: {post.status.title()}" }
                    if !current.is_empty() {
                        p { "{current}" }
                    }
                }
            }
        }
    }
}

pub fn discussion_title(count: usize) -> String {
    match count {
        0 => "Discussion".to_string(),
        n => format!("Discussion ({n})"),
    }
}

#[component]
pub fn DiscussionPanel(post: Post, comments: Vec<Comment>) -> Element {
    let title = discussion_title(comments.len());

    rsx! {
        div {
            class: "discussion-panel",
            "data-post": "{post.number}",
            span { class: "subtitle", "{title}" }
            for comment in comments {
                CommentItem { key: "{comment.id}", comment: comment.clone() }
            }
        }
    }
}

#[component]
fn CommentItem(comment: Comment) -> Element {
    let created = format_date(&comment.created_on);
    let paragraphs = text_paragraphs(&comment.content);

    rsx! {
        div {
            class: "comment",
            div {
                class: "comment-meta",
                strong { "{comment.user.name}" }
                span { class: "info", " · {created}" }
                if comment.edited_on.is_some() {
                    span { class: "info", " · edited" }
                }
            }
            for (idx, paragraph) in paragraphs.into_iter().enumerate() {
                p { key: "{idx}", "{paragraph}" }
            }
        }
    }
}
