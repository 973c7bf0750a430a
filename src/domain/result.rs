//! Result type alias for censor

use super::errors::CensorError;

/// Result type alias for censor operations
///
/// # Examples
///
/// ```
/// use censor::domain::result::Result;
/// use censor::domain::errors::CensorError;
///
/// fn failing_function() -> Result<()> {
///     Err(CensorError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, CensorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }
}
