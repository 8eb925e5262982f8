//! Show-post page component
//!
//! Owns the working copy of the post and the edit state. A successful save
//! replaces the working copy with the committed post and hands it to
//! `on_post_updated`; panels only ever receive read-only copies.

use dioxus::prelude::*;
use shared_types::{Comment, Post, Session, Tag};

use crate::api::update_post;
use crate::interop::{page_title, set_document_title};

use super::logic::{
    description_paragraphs, field_messages, format_date, general_messages, visible_actions,
};
use super::panels::{
    DiscussionPanel, ModerationPanel, NotificationsPanel, ResponseForm, TagsPanel, VoteCounter,
};
use super::response::ShowPostResponse;
use super::styles::SHOW_POST_STYLES;
use super::types::{ButtonAction, EditState, TITLE_MAX_CHARS};

#[component]
pub fn ShowPostPage(
    post: Post,
    subscribed: bool,
    comments: Vec<Comment>,
    tags: Vec<Tag>,
    on_post_updated: Option<EventHandler<Post>>,
) -> Element {
    let session = use_context::<Session>();
    let mut current_post = use_signal(|| post.clone());
    let mut edit = use_signal(EditState::default);

    let save = use_callback(move |_: ()| {
        let post = current_post.read().clone();
        let Some(update) = edit.write().begin_save(&post) else {
            return;
        };
        dioxus_logger::tracing::info!("Saving post #{}", update.number);

        spawn(async move {
            let result = update_post(&update).await;
            if let Err(failure) = &result {
                dioxus_logger::tracing::warn!(
                    "Post #{} update rejected: {}",
                    update.number,
                    failure
                );
            }

            let post = current_post.read().clone();
            let committed = edit.write().finish_save(&post, result);
            if let Some(committed) = committed {
                dioxus_logger::tracing::info!("Post #{} updated", committed.number);
                set_document_title(&page_title(committed.number, &committed.title));
                current_post.set(committed.clone());
                if let Some(handler) = on_post_updated {
                    handler.call(committed);
                }
            }
        });
    });

    let session_for_actions = session.clone();
    let on_action = use_callback(move |action: ButtonAction| match action {
        ButtonAction::Edit => {
            let post = current_post.read().clone();
            edit.write().start_edit(&post, &session_for_actions);
        }
        ButtonAction::Cancel => {
            edit.write().cancel_edit();
        }
        ButtonAction::Save => save.call(()),
    });

    let state = edit.read().clone();
    let post = current_post.read().clone();
    let actions = visible_actions(&session, &state);
    let edit_mode = state.is_edit_mode();
    let saving = state.is_saving();
    let general_errors = general_messages(state.error());
    let title_errors = field_messages(state.error(), "title");
    let description_errors = field_messages(state.error(), "description");
    let title_has_error = !title_errors.is_empty();
    let description_has_error = !description_errors.is_empty();
    let created_on = format_date(&post.created_on);
    let description = description_paragraphs(&post);
    let description_class = if post.description_text().trim().is_empty() {
        "description empty"
    } else {
        "description"
    };

    rsx! {
        style { {SHOW_POST_STYLES} }

        div {
            id: "p-show-post",
            class: "page container",

            div {
                class: "header-col",

                div {
                    class: "post-header-row",
                    VoteCounter { post: post.clone() }

                    div {
                        class: "post-header",
                        if edit_mode {
                            div {
                                class: if title_has_error { "post-form has-error" } else { "post-form" },
                                FormErrors { messages: general_errors }
                                input {
                                    r#type: "text",
                                    name: "title",
                                    maxlength: "{TITLE_MAX_CHARS}",
                                    value: "{state.new_title()}",
                                    disabled: saving,
                                    oninput: move |e: FormEvent| {
                                        edit.write().set_new_title(&e.value());
                                    },
                                }
                                FormErrors { messages: title_errors }
                            }
                        } else {
                            h1 { "{post.title}" }
                        }

                        span {
                            class: "info",
                            "Shared {created_on} by {post.user.name}"
                        }
                    }
                }

                span { class: "subtitle", "Description" }
                if edit_mode {
                    div {
                        class: if description_has_error { "post-form has-error" } else { "post-form" },
                        textarea {
                            name: "description",
                            value: "{state.new_description()}",
                            disabled: saving,
                            oninput: move |e: FormEvent| {
                                edit.write().set_new_description(&e.value());
                            },
                        }
                        FormErrors { messages: description_errors }
                    }
                } else {
                    div {
                        class: "{description_class}",
                        for (idx, paragraph) in description.into_iter().enumerate() {
                            p { key: "{idx}", "{paragraph}" }
                        }
                    }
                }

                ShowPostResponse { status: post.status, response: post.response.clone() }
            }

            div {
                class: "action-col",

                if !actions.is_empty() {
                    span { class: "subtitle", "Actions" }
                    ul {
                        class: "post-actions",
                        for action in actions {
                            li {
                                key: "{action.class_name()}",
                                {match action.button() {
                                    Some(button) => rsx! {
                                        button {
                                            class: "{action.class_name()}",
                                            disabled: !action.is_enabled(),
                                            onclick: move |_| on_action.call(button),
                                            "{action.label()}"
                                        }
                                    },
                                    None => rsx! {
                                        ResponseForm { post: post.clone() }
                                    },
                                }}
                            }
                        }
                    }
                }

                TagsPanel { post: post.clone(), tags: tags.clone() }
                NotificationsPanel { post: post.clone(), subscribed }
                ModerationPanel { post: post.clone() }
            }

            DiscussionPanel { post: post.clone(), comments: comments.clone() }
        }
    }
}

#[component]
fn FormErrors(messages: Vec<String>) -> Element {
    if messages.is_empty() {
        return rsx! {};
    }

    rsx! {
        ul {
            class: "form-errors",
            for (idx, message) in messages.into_iter().enumerate() {
                li { key: "{idx}", "{message}" }
            }
        }
    }
}
