use crate::core::form::Field;

/// One screen of the wizard. Each step collects exactly one field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    FirstName,
    LastName,
    Email,
}

impl Step {
    pub fn all() -> &'static [Step] {
        &[Self::FirstName, Self::LastName, Self::Email]
    }

    /// 1-indexed position for display.
    pub fn number(self) -> usize {
        match self {
            Self::FirstName => 1,
            Self::LastName => 2,
            Self::Email => 3,
        }
    }

    pub fn total() -> usize {
        Self::all().len()
    }

    pub fn field(self) -> Field {
        match self {
            Self::FirstName => Field::FirstName,
            Self::LastName => Field::LastName,
            Self::Email => Field::Email,
        }
    }

    pub fn next(self) -> Option<Self> {
        match self {
            Self::FirstName => Some(Self::LastName),
            Self::LastName => Some(Self::Email),
            Self::Email => None,
        }
    }

    pub fn prev(self) -> Option<Self> {
        match self {
            Self::FirstName => None,
            Self::LastName => Some(Self::FirstName),
            Self::Email => Some(Self::LastName),
        }
    }
}
