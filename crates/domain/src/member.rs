use crate::shared::entity::Entity;

/// Contact details shared by every person kept on the school roster.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Profile {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub gender: Option<String>,
    /// Url of the uploaded picture on the media host
    pub avatar: Option<String>,
}

impl Profile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// A person on the roster: `Student`, `Teacher` or `Staff`.
pub trait Member: Entity {
    fn profile(&self) -> &Profile;
    fn profile_mut(&mut self) -> &mut Profile;
    /// Millis timestamp of the last modification
    fn touch(&mut self, now: i64);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_names_are_not_names() {
        assert!(Profile::new("Ada").has_name());
        assert!(!Profile::new("").has_name());
        assert!(!Profile::new("   ").has_name());
    }
}
