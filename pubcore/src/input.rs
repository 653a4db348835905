use std::fmt;

/// A numeric form field as edited.
///
/// A form filled from an entity holds the number, while the dialog's input
/// keeps whatever was typed, partial text such as `-` included.  The text
/// is only read as a number when the request is built; anything that is not
/// an integer reads as 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NumberInput {
    Value(i64),
    Text(String),
}

impl Default for NumberInput {
    fn default() -> Self {
        NumberInput::Value(0)
    }
}

impl From<i64> for NumberInput {
    fn from(value: i64) -> Self {
        NumberInput::Value(value)
    }
}

impl NumberInput {
    pub fn value(&self) -> i64 {
        match self {
            NumberInput::Value(value) => *value,
            NumberInput::Text(text) => text.trim().parse().unwrap_or(0),
        }
    }
}

impl fmt::Display for NumberInput {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NumberInput::Value(value) => write!(f, "{value}"),
            NumberInput::Text(text) => f.write_str(text),
        }
    }
}
