//! Element identifiers of the login and admin dashboard markup, and the
//! state of the inline error display.

/// Container toggled between [`ERROR_VISIBLE_CLASS`] and [`ERROR_HIDDEN_CLASS`].
pub const ERROR_CONTAINER_ID: &str = "error-cntr";
/// Text node inside the error container.
pub const ERROR_MESSAGE_ID: &str = "error-msg";
pub const ERROR_VISIBLE_CLASS: &str = "err_visible";
pub const ERROR_HIDDEN_CLASS: &str = "err_invisible";

/// Input fields read at submit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    LoginName,
    Password,
    CurrentPassword,
    NewPassword,
    RepeatPassword,
    DbUrl,
}

impl FieldId {
    pub fn id(self) -> &'static str {
        match self {
            Self::LoginName => "login-name",
            Self::Password => "passwd",
            Self::CurrentPassword => "passwd-curr",
            Self::NewPassword => "passwd-new",
            Self::RepeatPassword => "passwd-repeat",
            Self::DbUrl => "db-url",
        }
    }
}

/// Submit controls, one per form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    Login,
    ChangePassword,
    ChangeDbUrl,
}

impl ControlId {
    pub fn id(self) -> &'static str {
        match self {
            Self::Login => "btn_login",
            Self::ChangePassword => "passwd-submit",
            Self::ChangeDbUrl => "db-url-submit",
        }
    }

    /// Inputs belonging to the form this control submits.
    pub fn fields(self) -> &'static [FieldId] {
        match self {
            Self::Login => &[FieldId::LoginName, FieldId::Password],
            Self::ChangePassword => &[
                FieldId::CurrentPassword,
                FieldId::NewPassword,
                FieldId::RepeatPassword,
            ],
            Self::ChangeDbUrl => &[FieldId::DbUrl],
        }
    }
}

/// Inline error display: hidden, or visible with a message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ErrorDisplayState {
    #[default]
    Hidden,
    Visible(String),
}

impl ErrorDisplayState {
    pub fn from_message(message: Option<&str>) -> Self {
        match message {
            Some(text) => Self::Visible(text.to_owned()),
            None => Self::Hidden,
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Visible(_))
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Visible(text) => Some(text),
            Self::Hidden => None,
        }
    }
}
