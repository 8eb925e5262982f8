//! Show-post pure logic: no RSX, no signals

use chrono::{DateTime, Utc};
use shared_types::{Failure, Post, Session, UpdatePost};

use super::types::{EditPhase, EditState, PostAction, NO_DESCRIPTION, TITLE_MAX_CHARS};

impl EditState {
    /// Enter edit mode, seeding the scratch fields from the post as it is now.
    ///
    /// Returns false (and changes nothing) unless the viewer is an
    /// authenticated collaborator and the view is currently read-only.
    pub fn start_edit(&mut self, post: &Post, session: &Session) -> bool {
        if !session.can_manage_posts() || self.phase != EditPhase::Viewing {
            return false;
        }

        self.new_title = post.title.clone();
        self.new_description = post.description_text().to_string();
        self.error = None;
        self.phase = EditPhase::Editing;
        true
    }

    /// Leave edit mode discarding scratch edits. Ignored while a save is pending.
    pub fn cancel_edit(&mut self) -> bool {
        if self.phase != EditPhase::Editing {
            return false;
        }
        *self = EditState::default();
        true
    }

    pub fn set_new_title(&mut self, value: &str) {
        if self.phase == EditPhase::Editing {
            self.new_title = clamp_title(value);
        }
    }

    pub fn set_new_description(&mut self, value: &str) {
        if self.phase == EditPhase::Editing {
            self.new_description = value.to_string();
        }
    }

    /// Move to `Saving` and hand back the request to send.
    ///
    /// Returns `None` when not editing, which also rejects a second save
    /// while one is in flight.
    pub fn begin_save(&mut self, post: &Post) -> Option<UpdatePost> {
        if self.phase != EditPhase::Editing {
            return None;
        }

        let update = UpdatePost {
            number: post.number,
            title: self.new_title.clone(),
            description: self.new_description.clone(),
        };
        self.phase = EditPhase::Saving(update.clone());
        Some(update)
    }

    /// Apply the outcome of the pending save.
    ///
    /// On success the edit state resets and the committed post (carrying the
    /// values that were sent) is returned. On failure the error is kept and the
    /// view goes back to `Editing`. Results arriving outside `Saving` are dropped.
    pub fn finish_save(&mut self, post: &Post, result: Result<(), Failure>) -> Option<Post> {
        let update = match std::mem::take(&mut self.phase) {
            EditPhase::Saving(update) => update,
            other => {
                self.phase = other;
                return None;
            }
        };

        match result {
            Ok(()) => {
                *self = EditState::default();
                Some(post.with_content(update.title, update.description))
            }
            Err(failure) => {
                self.error = Some(failure);
                self.phase = EditPhase::Editing;
                None
            }
        }
    }
}

/// Cap a title at `TITLE_MAX_CHARS` UTF-16 code units, the unit a
/// `maxlength` input counts. Never splits a character.
pub fn clamp_title(value: &str) -> String {
    let mut units = 0;
    value
        .chars()
        .take_while(|c| {
            units += c.len_utf16();
            units <= TITLE_MAX_CHARS
        })
        .collect()
}

/// Controls for the actions region. Empty unless the viewer may manage posts.
pub fn visible_actions(session: &Session, state: &EditState) -> Vec<PostAction> {
    if !session.can_manage_posts() {
        return Vec::new();
    }

    match state.phase() {
        EditPhase::Viewing => vec![PostAction::Edit, PostAction::Respond],
        EditPhase::Editing => vec![
            PostAction::Save { enabled: true },
            PostAction::Cancel { enabled: true },
        ],
        EditPhase::Saving(_) => vec![
            PostAction::Save { enabled: false },
            PostAction::Cancel { enabled: false },
        ],
    }
}

/// Paragraphs for the "simple" multi-line style: one per non-blank line.
pub fn text_paragraphs(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn description_paragraphs(post: &Post) -> Vec<String> {
    let paragraphs = text_paragraphs(post.description_text());
    if paragraphs.is_empty() {
        vec![NO_DESCRIPTION.to_string()]
    } else {
        paragraphs
    }
}

pub fn field_messages(error: Option<&Failure>, field: &str) -> Vec<String> {
    error
        .map(|f| f.messages_for(field).map(str::to_string).collect())
        .unwrap_or_default()
}

pub fn general_messages(error: Option<&Failure>) -> Vec<String> {
    error
        .map(|f| f.general_messages().map(str::to_string).collect())
        .unwrap_or_default()
}

pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use shared_types::{SessionUser, User, UserRole};

    fn post() -> Post {
        Post {
            id: 1,
            number: 42,
            slug: "old".to_string(),
            title: "Old".to_string(),
            description: Some("A".to_string()),
            created_on: Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap(),
            user: User {
                id: 9,
                name: "Sansa".to_string(),
                role: UserRole::Visitor,
                avatar_url: None,
            },
            status: Default::default(),
            response: None,
            votes_count: 0,
            has_voted: false,
            tags: Vec::new(),
        }
    }

    fn collaborator() -> Session {
        Session::signed_in(SessionUser {
            id: 2,
            name: "Arya".to_string(),
            email: None,
            role: UserRole::Collaborator,
            is_collaborator: false,
        })
    }

    #[test]
    fn start_edit_requires_collaborator() {
        let mut state = EditState::default();
        assert!(!state.start_edit(&post(), &Session::anonymous()));
        assert!(!state.is_edit_mode());
        assert!(state.start_edit(&post(), &collaborator()));
        assert_eq!(state.phase(), &EditPhase::Editing);
        assert_eq!(state.new_title(), "Old");
        assert_eq!(state.new_description(), "A");
    }

    #[test]
    fn field_edits_ignored_outside_edit_mode() {
        let mut state = EditState::default();
        state.set_new_title("New");
        state.set_new_description("B");
        assert_eq!(state.new_title(), "");
        assert_eq!(state.new_description(), "");
    }

    #[test]
    fn title_is_capped_at_max_chars() {
        let mut state = EditState::default();
        state.start_edit(&post(), &collaborator());
        state.set_new_title(&"é".repeat(150));
        assert_eq!(state.new_title().chars().count(), TITLE_MAX_CHARS);
        assert_eq!(clamp_title("short"), "short");
    }

    #[test]
    fn title_cap_counts_utf16_units() {
        let clamped = clamp_title(&"😀".repeat(60));
        assert_eq!(clamped.chars().count(), 50);
        assert_eq!(clamped.encode_utf16().count(), TITLE_MAX_CHARS);

        // a surrogate pair straddling the limit is dropped whole
        let straddling = format!("{}😀", "a".repeat(99));
        assert_eq!(clamp_title(&straddling), "a".repeat(99));
    }

    #[test]
    fn second_save_rejected_while_in_flight() {
        let mut state = EditState::default();
        state.start_edit(&post(), &collaborator());
        assert!(state.begin_save(&post()).is_some());
        assert!(state.begin_save(&post()).is_none());
        assert!(!state.cancel_edit());
        state.set_new_title("Changed while saving");
        assert_eq!(state.new_title(), "Old");
    }

    #[test]
    fn stale_result_is_dropped() {
        let mut state = EditState::default();
        assert_eq!(state.finish_save(&post(), Ok(())), None);
        assert_eq!(state, EditState::default());
    }

    #[test]
    fn actions_follow_phase() {
        let mut state = EditState::default();
        let session = collaborator();
        assert_eq!(
            visible_actions(&session, &state),
            vec![PostAction::Edit, PostAction::Respond]
        );
        assert!(visible_actions(&Session::anonymous(), &state).is_empty());

        state.start_edit(&post(), &session);
        assert_eq!(
            visible_actions(&session, &state),
            vec![
                PostAction::Save { enabled: true },
                PostAction::Cancel { enabled: true }
            ]
        );

        state.begin_save(&post());
        let actions = visible_actions(&session, &state);
        assert!(actions.iter().all(|a| !a.is_enabled()));
        assert_eq!(actions[0].label(), "Saving...");
    }

    #[test]
    fn empty_description_uses_placeholder() {
        let mut p = post();
        p.description = None;
        assert_eq!(description_paragraphs(&p), vec![NO_DESCRIPTION.to_string()]);
        p.description = Some("  \n ".to_string());
        assert_eq!(description_paragraphs(&p), vec![NO_DESCRIPTION.to_string()]);
        p.description = Some("first\n\n second ".to_string());
        assert_eq!(description_paragraphs(&p), vec!["first", "second"]);
    }

    #[test]
    fn date_format_is_compact() {
        assert_eq!(format_date(&post().created_on), "Mar 1, 2026");
    }
}
