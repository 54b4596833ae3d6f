use serde::Serialize;

/// The closed set of fields the wizard collects. Keying updates by this enum
/// instead of free-form field names makes unknown keys unrepresentable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    Email,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
        }
    }
}

/// The values collected across all steps. Every field is always present,
/// starts empty, and is only ever replaced, never removed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl FormRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Email => self.email = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Field, FormRecord};

    #[test]
    fn updates_are_non_destructive() {
        let mut form = FormRecord::new();
        form.set(Field::FirstName, "Alice".to_string());
        form.set(Field::LastName, "Smith".to_string());

        assert_eq!(
            form,
            FormRecord {
                first_name: "Alice".to_string(),
                last_name: "Smith".to_string(),
                email: String::new(),
            }
        );
    }

    #[test]
    fn updates_are_idempotent() {
        let mut once = FormRecord::new();
        once.set(Field::Email, "a@b.com".to_string());

        let mut twice = FormRecord::new();
        twice.set(Field::Email, "a@b.com".to_string());
        twice.set(Field::Email, "a@b.com".to_string());

        assert_eq!(once, twice);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let mut form = FormRecord::new();
        form.set(Field::FirstName, "A".to_string());

        let json = serde_json::to_value(&form).expect("record should serialize");
        assert_eq!(json["firstName"], "A");
        assert_eq!(json["lastName"], "");
        assert_eq!(json["email"], "");
    }
}
