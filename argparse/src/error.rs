#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A token was requested after the input ran out.
    #[error("not enough arguments")]
    ExhaustedInput,

    #[error("no such option {0}")]
    UnknownOption(String),

    /// A token could not be converted, or was outside a choice set.
    #[error("invalid value {token:?}: expected {expected}")]
    ValueFormat { token: String, expected: String },

    /// `--name=value` given to an option that consumed no value.
    #[error("option {option} does not take the value {value:?}")]
    UnwantedValue { option: String, value: String },

    /// `--name=value` where the option takes a variable number of values and
    /// refused this one because it starts like an option.
    #[error("value {value:?} for {option} looks like an option")]
    OptionLikeValue { option: String, value: String },

    /// Mistake in the parser setup, not in the command line.
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("help requested")]
    HelpRequested,
}

impl Error {
    /// True for errors caused by the command line the user typed.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Error::ExhaustedInput
                | Error::UnknownOption(_)
                | Error::ValueFormat { .. }
                | Error::UnwantedValue { .. }
                | Error::OptionLikeValue { .. }
        )
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_errors_are_distinguished_from_setup_errors() {
        assert!(Error::ExhaustedInput.is_user_error());
        assert!(Error::UnknownOption("-t".into()).is_user_error());
        assert!(Error::ValueFormat {
            token: "x".into(),
            expected: "i32".into()
        }
        .is_user_error());

        let config = Error::Configuration("invalid destination field: Nope".into());
        assert!(!config.is_user_error());
        assert!(config.is_configuration());

        assert!(!Error::HelpRequested.is_user_error());
        assert!(!Error::HelpRequested.is_configuration());
    }

    #[test]
    fn messages() {
        assert_eq!(
            Error::UnknownOption("--truc".into()).to_string(),
            "no such option --truc"
        );
        assert_eq!(
            Error::ValueFormat {
                token: "abc".into(),
                expected: "u8".into()
            }
            .to_string(),
            "invalid value \"abc\": expected u8"
        );
        assert_eq!(
            Error::OptionLikeValue {
                option: "--tags".into(),
                value: "-x".into()
            }
            .to_string(),
            "value \"-x\" for --tags looks like an option"
        );
    }
}
