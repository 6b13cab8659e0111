use campus_domain::{Profile, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct MemberPathParams {
    pub id: ID,
}

/// Profile fields of a create or update body. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl ProfileInput {
    pub fn apply(self, profile: &mut Profile) {
        if let Some(name) = self.name {
            profile.name = name;
        }
        if self.email.is_some() {
            profile.email = self.email;
        }
        if self.phone.is_some() {
            profile.phone = self.phone;
        }
        if self.address.is_some() {
            profile.address = self.address;
        }
        if self.gender.is_some() {
            profile.gender = self.gender;
        }
        if self.avatar.is_some() {
            profile.avatar = self.avatar;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentInput {
    #[serde(flatten)]
    pub profile: ProfileInput,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherInput {
    #[serde(flatten)]
    pub profile: ProfileInput,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffInput {
    #[serde(flatten)]
    pub profile: ProfileInput,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_input_only_touches_given_fields() {
        let mut profile = Profile::new("Ada");
        profile.email = Some("ada@school.test".into());

        let input: StudentInput =
            serde_json::from_str(r#"{"phone":"555-0100","className":"5A"}"#).unwrap();
        assert_eq!(input.class_name.as_deref(), Some("5A"));
        input.profile.apply(&mut profile);

        assert_eq!(profile.name, "Ada");
        assert_eq!(profile.email.as_deref(), Some("ada@school.test"));
        assert_eq!(profile.phone.as_deref(), Some("555-0100"));
    }

    #[test]
    fn unset_fields_are_not_serialized() {
        let input = TeacherInput {
            subject: Some("Physics".into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&input).unwrap(),
            r#"{"subject":"Physics"}"#
        );
    }
}
