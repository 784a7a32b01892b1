use crate::{CoreError, CoreResult};

/// Rules a record breaks, in the order they were checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations(Vec<String>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` when `condition` does not hold.
    pub fn check(mut self, condition: bool, message: impl Into<String>) -> Self {
        if !condition {
            self.0.push(message.into());
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn messages(&self) -> &[String] {
        &self.0
    }

    /// Only the violations that `before` did not already have.
    pub fn introduced_since(self, before: &Violations) -> Self {
        Self(self.0.into_iter().filter(|m| !before.0.contains(m)).collect())
    }

    pub fn into_result(self) -> CoreResult<()> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(CoreError::ValidationError(self.0.join("; ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_collects_every_failure() {
        let violations = Violations::new()
            .check(true, "never recorded")
            .check(false, "title is required")
            .check(false, "price is negative");

        assert_eq!(violations.messages(), ["title is required", "price is negative"]);
        match violations.into_result() {
            Err(CoreError::ValidationError(msg)) => assert_eq!(msg, "title is required; price is negative"),
            other => panic!("expected validation error, got {:?}", other),
        }
        assert!(Violations::new().into_result().is_ok());
    }

    #[test]
    fn test_introduced_since_ignores_existing_failures() {
        let before = Violations::new().check(false, "title is required");
        let after = Violations::new()
            .check(false, "title is required")
            .check(false, "rating out of range");

        let introduced = after.introduced_since(&before);
        assert_eq!(introduced.messages(), ["rating out of range"]);
        assert!(before.clone().introduced_since(&before).is_empty());
    }
}
