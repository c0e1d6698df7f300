// Copyright 2024 Contributors to the Extension Manifest Tools project.
// SPDX-License-Identifier: MIT

//! General-purpose utilities used throughout the extman-tool crate.

use crate::error::{Error, Result, ToolErrorKind};

use log::debug;

/// Utility to get a string value either from a command-line option or a named environment variable.
///
/// The command-line option wins when it is given. A value that is empty, from either source, is
/// treated the same as a value that has not been given at all.
pub fn get_config_from_command_or_env(
    config_option: &Option<String>,
    env_var_name: &str,
    purpose: &str,
) -> Result<String> {
    let opt = match config_option {
        Some(o) => o.clone(),
        None => {
            // The option isn't on the command-line, so examine the environment variable instead
            debug!("No {} on the command-line, reading `{}`", purpose, env_var_name);
            std::env::var(env_var_name).unwrap_or_default()
        }
    };

    if opt.is_empty() {
        println!(
            "No {} specified. Please specify on the command-line or by setting the `{}` environment variable.",
            purpose, env_var_name
        );
        return Err(Error::ToolError(ToolErrorKind::MissingConfiguration(
            env_var_name.to_string(),
        )));
    }

    Ok(opt)
}

#[cfg(test)]
mod tests {
    use super::get_config_from_command_or_env;
    use crate::error::{Error, ToolErrorKind};

    #[test]
    fn command_line_option_wins() {
        std::env::set_var("EXTMAN_TEST_OPTION_WINS", "from-env");
        let value = get_config_from_command_or_env(
            &Some("from-command".to_string()),
            "EXTMAN_TEST_OPTION_WINS",
            "test value",
        )
        .unwrap();
        assert_eq!(value, "from-command");
    }

    #[test]
    fn falls_back_to_environment() {
        std::env::set_var("EXTMAN_TEST_FALLBACK", "from-env");
        let value =
            get_config_from_command_or_env(&None, "EXTMAN_TEST_FALLBACK", "test value").unwrap();
        assert_eq!(value, "from-env");
    }

    #[test]
    fn unset_variable_is_missing_configuration() {
        std::env::remove_var("EXTMAN_TEST_UNSET");
        let result = get_config_from_command_or_env(&None, "EXTMAN_TEST_UNSET", "test value");
        match result {
            Err(Error::ToolError(ToolErrorKind::MissingConfiguration(name))) => {
                assert_eq!(name, "EXTMAN_TEST_UNSET")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn empty_values_are_missing_configuration() {
        std::env::set_var("EXTMAN_TEST_EMPTY", "");
        assert!(get_config_from_command_or_env(&None, "EXTMAN_TEST_EMPTY", "test value").is_err());
        assert!(get_config_from_command_or_env(
            &Some(String::new()),
            "EXTMAN_TEST_EMPTY",
            "test value"
        )
        .is_err());
    }
}
