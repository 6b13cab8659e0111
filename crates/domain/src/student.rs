use crate::{
    member::{Member, Profile},
    shared::entity::{Entity, ID},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: ID,
    pub profile: Profile,
    pub date_of_birth: Option<String>,
    pub class_name: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Student {
    pub fn new(profile: Profile, now: i64) -> Self {
        Self {
            id: Default::default(),
            profile,
            date_of_birth: None,
            class_name: None,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Entity for Student {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl Member for Student {
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
