/// One named input of the contact form, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    CompanyName,
    ServiceInterested,
    Message,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    TextArea,
}

impl ContactField {
    pub const ALL: [ContactField; 6] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::CompanyName,
        Self::ServiceInterested,
        Self::Message,
    ];

    /// Key used in the JSON body and as the input `name`.
    pub fn name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::CompanyName => "companyName",
            Self::ServiceInterested => "serviceInterested",
            Self::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Email => "Email address",
            Self::CompanyName => "Company name",
            Self::ServiceInterested => "Service Interested in",
            Self::Message => "Tell me a bit more about it",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::FirstName => "Enter your first name",
            Self::LastName => "Enter your last name",
            Self::Email => "Enter email e.g. sabs@gmail.com",
            Self::CompanyName => "Enter your Company name",
            Self::ServiceInterested => "E.g. Software development",
            Self::Message => "Start typing here....",
        }
    }

    pub fn input_kind(self) -> InputKind {
        match self {
            Self::Email => InputKind::Email,
            Self::Message => InputKind::TextArea,
            _ => InputKind::Text,
        }
    }
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
