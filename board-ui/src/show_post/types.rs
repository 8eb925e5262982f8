//! Show-post data types

use shared_types::{Failure, UpdatePost};

/// Longest title the title input accepts, in UTF-16 code units
pub const TITLE_MAX_CHARS: usize = 100;

/// Shown in place of an empty description
pub const NO_DESCRIPTION: &str = "No description provided.";

/// Where the post view is in its view/edit cycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditPhase {
    /// Static title and description
    #[default]
    Viewing,
    /// Inputs bound to the scratch title/description
    Editing,
    /// Update request in flight; holds exactly what was sent
    Saving(UpdatePost),
}

/// View-local edit state. Scratch values never touch the post until the
/// server confirms the update.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditState {
    pub(crate) phase: EditPhase,
    pub(crate) new_title: String,
    pub(crate) new_description: String,
    pub(crate) error: Option<Failure>,
}

impl EditState {
    pub fn phase(&self) -> &EditPhase {
        &self.phase
    }

    pub fn new_title(&self) -> &str {
        &self.new_title
    }

    pub fn new_description(&self) -> &str {
        &self.new_description
    }

    pub fn error(&self) -> Option<&Failure> {
        self.error.as_ref()
    }

    /// True while the inputs are shown, including while a save is pending.
    pub fn is_edit_mode(&self) -> bool {
        !matches!(self.phase, EditPhase::Viewing)
    }

    pub fn is_saving(&self) -> bool {
        matches!(self.phase, EditPhase::Saving(_))
    }
}

/// Controls offered in the actions region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostAction {
    Edit,
    Respond,
    Save { enabled: bool },
    Cancel { enabled: bool },
}

impl PostAction {
    pub fn label(self) -> &'static str {
        match self {
            PostAction::Edit => "Edit",
            PostAction::Respond => "Respond",
            PostAction::Save { enabled: true } => "Save",
            PostAction::Save { enabled: false } => "Saving...",
            PostAction::Cancel { .. } => "Cancel",
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            PostAction::Edit => "edit",
            PostAction::Respond => "respond",
            PostAction::Save { .. } => "save",
            PostAction::Cancel { .. } => "cancel",
        }
    }

    pub fn is_enabled(self) -> bool {
        match self {
            PostAction::Edit | PostAction::Respond => true,
            PostAction::Save { enabled } | PostAction::Cancel { enabled } => enabled,
        }
    }

    /// Click target for plain button actions. `Respond` renders its own form.
    pub fn button(self) -> Option<ButtonAction> {
        match self {
            PostAction::Edit => Some(ButtonAction::Edit),
            PostAction::Save { .. } => Some(ButtonAction::Save),
            PostAction::Cancel { .. } => Some(ButtonAction::Cancel),
            PostAction::Respond => None,
        }
    }
}

/// What a clicked action button asks the page to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    Edit,
    Save,
    Cancel,
}
