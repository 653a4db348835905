/// Message shown by the confirmation dialog unless a view supplies its own.
pub const DEFAULT_CONFIRM_MESSAGE: &str = "Are you sure?";

/// The two ways out of a confirmation dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmChoice {
    Accept,
    Reject,
}

impl ConfirmChoice {
    /// Interpret a typed answer; anything but an explicit yes rejects.
    pub fn from_answer(answer: &str) -> Self {
        match answer.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => ConfirmChoice::Accept,
            _ => ConfirmChoice::Reject,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers() {
        assert_eq!(ConfirmChoice::from_answer("y\n"), ConfirmChoice::Accept);
        assert_eq!(ConfirmChoice::from_answer(" YES "), ConfirmChoice::Accept);
        assert_eq!(ConfirmChoice::from_answer(""), ConfirmChoice::Reject);
        assert_eq!(ConfirmChoice::from_answer("nope"), ConfirmChoice::Reject);
    }
}
