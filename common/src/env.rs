use anyhow::{Context, Result};

pub fn get_env_usize(key: &str) -> Result<Option<usize>> {
    match std::env::var(key) {
        Ok(value) => value
            .trim()
            .parse::<usize>()
            .map(Some)
            .with_context(|| format!("{} must be a valid number, got {:?}", key, value)),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_env_is_none() {
        let value = get_env_usize("COMMON_TEST_ENV_THAT_IS_NEVER_SET").unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn test_env_is_parsed() {
        std::env::set_var("COMMON_TEST_ENV_USIZE", " 7 ");
        assert_eq!(get_env_usize("COMMON_TEST_ENV_USIZE").unwrap(), Some(7));
    }

    #[test]
    fn test_env_not_a_number_is_error() {
        std::env::set_var("COMMON_TEST_ENV_BAD_USIZE", "seven");
        assert!(get_env_usize("COMMON_TEST_ENV_BAD_USIZE").is_err());
    }
}
