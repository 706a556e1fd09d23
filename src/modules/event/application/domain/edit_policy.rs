use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EditDenied {
    #[error("Authentication required")]
    Unauthorized,

    #[error("Only the event creator may modify this event")]
    Forbidden,
}

/// Who may create and modify events.
///
/// Creators always may edit their own events. Events without a recorded
/// creator, and anonymous creation, are only open when
/// `allow_anonymous_edit` is set.
#[derive(Debug, Clone, Copy, Default)]
pub struct EditPolicy {
    allow_anonymous_edit: bool,
}

impl EditPolicy {
    pub fn new(allow_anonymous_edit: bool) -> Self {
        Self {
            allow_anonymous_edit,
        }
    }

    pub fn allows_anonymous_edit(&self) -> bool {
        self.allow_anonymous_edit
    }

    pub fn authorize_create(&self, requester: Option<UserId>) -> Result<(), EditDenied> {
        match requester {
            Some(_) => Ok(()),
            None if self.allow_anonymous_edit => Ok(()),
            None => Err(EditDenied::Unauthorized),
        }
    }

    pub fn authorize_edit(
        &self,
        created_by: Option<UserId>,
        requester: Option<UserId>,
    ) -> Result<(), EditDenied> {
        match (created_by, requester) {
            (Some(creator), Some(caller)) if creator == caller => Ok(()),
            (None, _) if self.allow_anonymous_edit => Ok(()),
            (_, None) => Err(EditDenied::Unauthorized),
            (_, Some(_)) => Err(EditDenied::Forbidden),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn user() -> UserId {
        UserId::from(Uuid::new_v4())
    }

    #[test]
    fn creator_may_edit() {
        let creator = user();
        for policy in [EditPolicy::new(false), EditPolicy::new(true)] {
            assert_eq!(policy.authorize_edit(Some(creator), Some(creator)), Ok(()));
        }
    }

    #[test]
    fn other_user_is_forbidden_and_anonymous_is_unauthorized() {
        let creator = user();
        for policy in [EditPolicy::new(false), EditPolicy::new(true)] {
            assert_eq!(
                policy.authorize_edit(Some(creator), Some(user())),
                Err(EditDenied::Forbidden)
            );
            assert_eq!(
                policy.authorize_edit(Some(creator), None),
                Err(EditDenied::Unauthorized)
            );
        }
    }

    #[test]
    fn default_creator_events_open_only_when_enabled() {
        let open = EditPolicy::new(true);
        assert_eq!(open.authorize_edit(None, None), Ok(()));
        assert_eq!(open.authorize_edit(None, Some(user())), Ok(()));

        let closed = EditPolicy::default();
        assert_eq!(
            closed.authorize_edit(None, None),
            Err(EditDenied::Unauthorized)
        );
        assert_eq!(
            closed.authorize_edit(None, Some(user())),
            Err(EditDenied::Forbidden)
        );
    }

    #[test]
    fn anonymous_create_requires_flag() {
        assert_eq!(EditPolicy::new(true).authorize_create(None), Ok(()));
        assert_eq!(
            EditPolicy::new(false).authorize_create(None),
            Err(EditDenied::Unauthorized)
        );
        assert_eq!(EditPolicy::new(false).authorize_create(Some(user())), Ok(()));
    }
}
