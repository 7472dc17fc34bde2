mod modal_overlay;
pub use modal_overlay::{ConfirmDialog, ModalOverlay};

mod home;
pub use home::HomeView;

mod not_found;
pub use not_found::NotFoundView;

mod onboarding;
pub use onboarding::{LoginView, RegisterView, ValidateView};

mod clients;
pub use clients::ClientsView;

mod projects;
pub use projects::ProjectsView;

mod project_detail;
pub use project_detail::ProjectDetailView;

mod delivery_notes_panel;
pub use delivery_notes_panel::DeliveryNotesPanel;

mod delivery_notes;
pub use delivery_notes::DeliveryNotesView;

/// State of the inline create/edit form on a list page.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Editor<T> {
    Closed,
    Create,
    Edit(T),
}

impl<T> Editor<T> {
    pub(crate) fn is_open(&self) -> bool {
        !matches!(self, Editor::Closed)
    }
}

/// The id to switch to when a route or prop id differs from the loaded one.
pub(crate) fn changed_id(loaded: &str, incoming: &str) -> Option<String> {
    (loaded != incoming).then(|| incoming.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changed_id_only_on_difference() {
        assert_eq!(changed_id("p1", "p1"), None);
        assert_eq!(changed_id("p1", "p2").as_deref(), Some("p2"));
    }

    #[test]
    fn test_editor_open_states() {
        assert!(!Editor::<()>::Closed.is_open());
        assert!(Editor::<()>::Create.is_open());
        assert!(Editor::Edit(1).is_open());
    }
}
