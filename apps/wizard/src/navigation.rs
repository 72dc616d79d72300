use serde::Serialize;

/// Screens the wizards can hand control to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    JobPosting,
    Chat,
}

impl Screen {
    pub fn path(self) -> &'static str {
        match self {
            Screen::JobPosting => "/job-posting",
            Screen::Chat => "/chat",
        }
    }
}

/// How the router should move after a wizard finishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Transition {
    /// Replace the current screen; `name` is shown by the destination only.
    Replace { screen: Screen, name: Option<String> },
    /// Pop back to the previous screen.
    Back,
}

impl Transition {
    pub fn replace(screen: Screen) -> Self {
        Transition::Replace { screen, name: None }
    }

    pub fn back() -> Self {
        Transition::Back
    }

    /// Attaches the submitter's display name. No-op for `Back`.
    pub fn with_name(self, display_name: impl Into<String>) -> Self {
        match self {
            Transition::Replace { screen, .. } => Transition::Replace {
                screen,
                name: Some(display_name.into()),
            },
            Transition::Back => Transition::Back,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Transition::Replace { name, .. } => name.as_deref(),
            Transition::Back => None,
        }
    }
}
