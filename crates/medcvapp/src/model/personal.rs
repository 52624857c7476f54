use serde::{Deserialize, Serialize};

use super::options::{resolve_other, ProfessionalIdType};
use super::patch::{blank_fields, flexible_bool, set};

/// The singleton header block of a resume. It has no id; there is exactly one per resume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalDetails {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub organization: String,
    pub id_type: Option<ProfessionalIdType>,
    pub id_type_other: String,
    pub id_number: String,
    pub has_accredited_id: bool,
    pub accredited_org: String,
    pub accredited_id_number: String,
    pub address: String,
    pub country_code: String,
    pub phone: String,
    pub email: String,
    pub social_profile: String,
}

impl PersonalDetails {
    pub fn apply(&mut self, patch: &PersonalDetailsPatch) {
        set(&mut self.first_name, &patch.first_name);
        set(&mut self.middle_name, &patch.middle_name);
        set(&mut self.last_name, &patch.last_name);
        set(&mut self.organization, &patch.organization);
        if let Some(id_type) = patch.id_type {
            self.id_type = Some(id_type);
        }
        set(&mut self.id_type_other, &patch.id_type_other);
        set(&mut self.id_number, &patch.id_number);
        if let Some(flag) = patch.has_accredited_id {
            self.has_accredited_id = flag;
        }
        set(&mut self.accredited_org, &patch.accredited_org);
        set(&mut self.accredited_id_number, &patch.accredited_id_number);
        set(&mut self.address, &patch.address);
        set(&mut self.country_code, &patch.country_code);
        set(&mut self.phone, &patch.phone);
        set(&mut self.email, &patch.email);
        set(&mut self.social_profile, &patch.social_profile);
    }

    /// First, middle and last name joined by single spaces, skipping blanks.
    pub fn full_name(&self) -> String {
        [&self.first_name, &self.middle_name, &self.last_name]
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn missing_required(&self) -> Vec<&'static str> {
        blank_fields(&[
            ("firstName", self.first_name.as_str()),
            ("lastName", self.last_name.as_str()),
        ])
    }

    /// Id type as it should be displayed, with the free-text override applied.
    pub fn id_type_display(&self) -> Option<&str> {
        self.id_type
            .map(|t| resolve_other(t.as_str(), &self.id_type_other))
    }

    pub fn shows_id_type_other(&self) -> bool {
        self.id_type == Some(ProfessionalIdType::Other)
    }

    /// Whether the accreditation org/number inputs are offered at all.
    pub fn shows_accreditation_fields(&self) -> bool {
        self.has_accredited_id
    }

    /// Accreditation org and number, only when the flag is set and both are filled in.
    pub fn accreditation(&self) -> Option<(&str, &str)> {
        let org = self.accredited_org.trim();
        let number = self.accredited_id_number.trim();
        if self.has_accredited_id && !org.is_empty() && !number.is_empty() {
            Some((org, number))
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PersonalDetailsPatch {
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub organization: Option<String>,
    pub id_type: Option<ProfessionalIdType>,
    pub id_type_other: Option<String>,
    pub id_number: Option<String>,
    #[serde(default, deserialize_with = "flexible_bool")]
    pub has_accredited_id: Option<bool>,
    pub accredited_org: Option<String>,
    pub accredited_id_number: Option<String>,
    pub address: Option<String>,
    pub country_code: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub social_profile: Option<String>,
}

impl PersonalDetailsPatch {
    pub fn from_field(field: &str, value: &str) -> crate::error::Result<Self> {
        super::patch::from_field("personal details", field, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResumeError;

    fn doctor() -> PersonalDetails {
        PersonalDetails {
            first_name: "Asha".into(),
            last_name: "Rao".into(),
            ..Default::default()
        }
    }

    #[test]
    fn patch_only_touches_named_fields() {
        let mut details = doctor();
        let patch = PersonalDetailsPatch {
            organization: Some("City Hospital".into()),
            ..Default::default()
        };
        details.apply(&patch);
        assert_eq!(details.organization, "City Hospital");
        assert_eq!(details.first_name, "Asha");
        assert_eq!(details.last_name, "Rao");
    }

    #[test]
    fn full_name_skips_blank_middle_name() {
        let mut details = doctor();
        assert_eq!(details.full_name(), "Asha Rao");
        details.middle_name = "K".into();
        assert_eq!(details.full_name(), "Asha K Rao");
    }

    #[test]
    fn accreditation_needs_flag_org_and_number() {
        let mut details = doctor();
        details.accredited_org = "JCI".into();
        details.accredited_id_number = "A-1".into();
        assert_eq!(details.accreditation(), None);

        details.has_accredited_id = true;
        assert_eq!(details.accreditation(), Some(("JCI", "A-1")));

        details.accredited_org.clear();
        assert_eq!(details.accreditation(), None);
        assert!(details.shows_accreditation_fields());
    }

    #[test]
    fn id_type_other_override_is_displayed() {
        let mut details = doctor();
        details.id_type = Some(ProfessionalIdType::Other);
        assert_eq!(details.id_type_display(), Some("Other"));
        details.id_type_other = "AHPRA".into();
        assert_eq!(details.id_type_display(), Some("AHPRA"));
        assert!(details.shows_id_type_other());
    }

    #[test]
    fn field_patches_parse_bools_and_enums() {
        let patch = PersonalDetailsPatch::from_field("hasAccreditedId", "yes").unwrap();
        assert_eq!(patch.has_accredited_id, Some(true));

        let patch = PersonalDetailsPatch::from_field("idType", "plab").unwrap();
        assert_eq!(patch.id_type, Some(ProfessionalIdType::Plab));
    }

    #[test]
    fn unknown_personal_field_is_rejected() {
        match PersonalDetailsPatch::from_field("nickname", "Ash") {
            Err(ResumeError::UnknownField { field, .. }) => assert_eq!(field, "nickname"),
            other => panic!("Expected UnknownField, got {:?}", other),
        }
    }

    #[test]
    fn missing_required_names_first_and_last() {
        assert_eq!(
            PersonalDetails::default().missing_required(),
            vec!["firstName", "lastName"]
        );
        assert!(doctor().missing_required().is_empty());
    }
}
