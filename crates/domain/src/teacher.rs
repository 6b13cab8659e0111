use crate::{
    member::{Member, Profile},
    shared::entity::{Entity, ID},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Teacher {
    pub id: ID,
    pub profile: Profile,
    /// Subject taught, e.g. "Mathematics"
    pub subject: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Teacher {
    pub fn new(profile: Profile, now: i64) -> Self {
        Self {
            id: Default::default(),
            profile,
            subject: None,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Entity for Teacher {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl Member for Teacher {
    fn profile(&self) -> &Profile {
        &self.profile
    }

    fn profile_mut(&mut self) -> &mut Profile {
        &mut self.profile
    }

    fn touch(&mut self, now: i64) {
        self.updated_at = now;
    }
}
