use crate::{
    member::{Member, Profile},
    shared::entity::{Entity, ID},
};

/// Non-teaching employee of the school
#[derive(Debug, Clone, PartialEq)]
pub struct Staff {
    pub id: ID,
    pub profile: Profile,
    pub position: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Staff {
    pub fn new(profile: Profile, now: i64) -> Self {
        Self {
            id: Default::default(),
            profile,
            position: None,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Entity for Staff {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl Member for Staff {
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
