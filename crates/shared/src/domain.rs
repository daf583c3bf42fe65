use serde::{Deserialize, Serialize};

/// A fixed choice offered by one of the enumerated form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionItem {
    pub label: &'static str,
    pub value: &'static str,
}

pub const EVENT_OPTIONS: [OptionItem; 2] = [
    OptionItem {
        label: "The Human Algorithm",
        value: "The Human Algorithm",
    },
    OptionItem {
        label: "Generative AI",
        value: "Generative AI",
    },
];

pub const COLLEGE_OPTIONS: [OptionItem; 5] = [
    OptionItem {
        label: "CBSA",
        value: "CBSA",
    },
    OptionItem {
        label: "CCT",
        value: "CCT",
    },
    OptionItem {
        label: "CEC",
        value: "CEC",
    },
    OptionItem {
        label: "COE",
        value: "COE",
    },
    OptionItem {
        label: "Other",
        value: "Other",
    },
];

pub const YEAR_OPTIONS: [OptionItem; 4] = [
    OptionItem {
        label: "1st Year",
        value: "1st Year",
    },
    OptionItem {
        label: "2nd Year",
        value: "2nd Year",
    },
    OptionItem {
        label: "3rd Year",
        value: "3rd Year",
    },
    OptionItem {
        label: "4th Year",
        value: "4th Year",
    },
];

/// Looks up the display label for a stored value within one option set.
pub fn label_for(options: &[OptionItem], value: &str) -> Option<&'static str> {
    options
        .iter()
        .find(|option| option.value == value)
        .map(|option| option.label)
}

/// Typed address of one registration form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Event,
    Name,
    RollNumber,
    Email,
    MobileNumber,
    Branch,
    College,
    Year,
    Message,
}

impl FormField {
    /// Declaration order; both wire encoders walk fields in this order.
    pub const ALL: [FormField; 9] = [
        FormField::Event,
        FormField::Name,
        FormField::RollNumber,
        FormField::Email,
        FormField::MobileNumber,
        FormField::Branch,
        FormField::College,
        FormField::Year,
        FormField::Message,
    ];

    pub fn wire_key(self) -> &'static str {
        match self {
            FormField::Event => "event",
            FormField::Name => "name",
            FormField::RollNumber => "roll_number",
            FormField::Email => "email",
            FormField::MobileNumber => "mobile_number",
            FormField::Branch => "branch",
            FormField::College => "college",
            FormField::Year => "year",
            FormField::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Event => "Event Name",
            FormField::Name => "Full Name",
            FormField::RollNumber => "Roll No.",
            FormField::Email => "Email",
            FormField::MobileNumber => "Phone",
            FormField::Branch => "Branch",
            FormField::College => "College",
            FormField::Year => "Year",
            FormField::Message => "Questions (Optional)",
        }
    }

    /// Every field except the free-form message is required.
    pub fn is_required(self) -> bool {
        !matches!(self, FormField::Message)
    }
}

/// The complete registration form mapping. Empty string means unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub event: String,
    pub name: String,
    pub roll_number: String,
    pub email: String,
    pub mobile_number: String,
    pub branch: String,
    pub college: String,
    pub year: String,
    pub message: String,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Event => &self.event,
            FormField::Name => &self.name,
            FormField::RollNumber => &self.roll_number,
            FormField::Email => &self.email,
            FormField::MobileNumber => &self.mobile_number,
            FormField::Branch => &self.branch,
            FormField::College => &self.college,
            FormField::Year => &self.year,
            FormField::Message => &self.message,
        }
    }

    /// Replaces one field's value. No validation happens here; gating is a
    /// submit-time concern.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Event => &mut self.event,
            FormField::Name => &mut self.name,
            FormField::RollNumber => &mut self.roll_number,
            FormField::Email => &mut self.email,
            FormField::MobileNumber => &mut self.mobile_number,
            FormField::Branch => &mut self.branch,
            FormField::College => &mut self.college,
            FormField::Year => &mut self.year,
            FormField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// All `(wire_key, value)` pairs in declaration order.
    pub fn entries(&self) -> [(&'static str, &str); 9] {
        [
            ("event", &self.event),
            ("name", &self.name),
            ("roll_number", &self.roll_number),
            ("email", &self.email),
            ("mobile_number", &self.mobile_number),
            ("branch", &self.branch),
            ("college", &self.college),
            ("year", &self.year),
            ("message", &self.message),
        ]
    }

    /// First required field that is still empty, if any.
    pub fn first_missing_required(&self) -> Option<FormField> {
        FormField::ALL
            .into_iter()
            .find(|field| field.is_required() && self.value(*field).is_empty())
    }

    /// Resets every field to the unset (empty string) state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
