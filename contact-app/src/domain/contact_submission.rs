use super::ContactField;
use serde::Serialize;

/// Raw field values exactly as the user typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company_name: String,
    pub service_interested: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Email => &self.email,
            ContactField::CompanyName => &self.company_name,
            ContactField::ServiceInterested => &self.service_interested,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::FirstName => &mut self.first_name,
            ContactField::LastName => &mut self.last_name,
            ContactField::Email => &mut self.email,
            ContactField::CompanyName => &mut self.company_name,
            ContactField::ServiceInterested => &mut self.service_interested,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A draft that passed every field rule. Only the validator builds one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    first_name: String,
    last_name: String,
    email: String,
    company_name: String,
    service_interested: String,
    message: String,
}

impl ContactSubmission {
    pub(crate) fn from_valid_draft(draft: ContactDraft) -> Self {
        Self {
            first_name: draft.first_name,
            last_name: draft.last_name,
            email: draft.email,
            company_name: draft.company_name,
            service_interested: draft.service_interested,
            message: draft.message,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn service_interested(&self) -> &str {
        &self.service_interested
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_set_and_get_by_field() {
        let mut draft = ContactDraft::default();
        for field in ContactField::ALL {
            draft.set(field, format!("value of {}", field));
        }
        for field in ContactField::ALL {
            assert_eq!(draft.get(field), format!("value of {}", field));
        }

        draft.clear();
        assert_eq!(draft, ContactDraft::default());
    }

    #[test]
    fn test_submission_serializes_with_field_names() {
        let submission = ContactSubmission::from_valid_draft(ContactDraft {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@x.com".to_string(),
            company_name: "Acme".to_string(),
            service_interested: "Consulting".to_string(),
            message: "I need help with my servers.".to_string(),
        });

        let value = serde_json::to_value(&submission).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        let mut expected: Vec<&str> = ContactField::ALL.iter().map(|f| f.name()).collect();
        expected.sort_unstable();

        assert_eq!(keys, expected);
        assert_eq!(object["serviceInterested"], "Consulting");
    }
}
