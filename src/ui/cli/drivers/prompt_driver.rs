use anyhow::Result;
use inquire::InquireError;

pub trait PromptDriver {
    fn ask_bool(&self, title: &str, help: &str, default: bool) -> Result<bool>;
    fn ask_select(
        &self,
        title: &str,
        help: &str,
        options: &[&'static str],
        default: &str,
    ) -> Result<String>;
    fn ask_f64(&self, title: &str, help: &str, default: f64) -> Result<f64>;
    fn ask_i64(&self, title: &str, help: &str, default: i64, min: i64, max: i64) -> Result<i64>;
}

impl<T: PromptDriver + ?Sized> PromptDriver for &T {
    fn ask_bool(&self, title: &str, help: &str, default: bool) -> Result<bool> {
        (**self).ask_bool(title, help, default)
    }

    fn ask_select(
        &self,
        title: &str,
        help: &str,
        options: &[&'static str],
        default: &str,
    ) -> Result<String> {
        (**self).ask_select(title, help, options, default)
    }

    fn ask_f64(&self, title: &str, help: &str, default: f64) -> Result<f64> {
        (**self).ask_f64(title, help, default)
    }

    fn ask_i64(&self, title: &str, help: &str, default: i64, min: i64, max: i64) -> Result<i64> {
        (**self).ask_i64(title, help, default, min, max)
    }
}

/// True when the user backed out of a prompt (Esc or Ctrl-C).
pub fn is_cancellation(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<InquireError>(),
        Some(InquireError::OperationCanceled | InquireError::OperationInterrupted)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancellation_is_recognised_through_anyhow() {
        assert!(is_cancellation(&InquireError::OperationCanceled.into()));
        assert!(is_cancellation(&InquireError::OperationInterrupted.into()));
        assert!(!is_cancellation(&anyhow::anyhow!("boom")));
    }
}
