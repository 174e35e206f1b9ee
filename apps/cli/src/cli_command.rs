use mcamp_core::{AppError, AppResult};
use mcamp_domain::ProfileAttributes;

pub const USAGE: &str = "usage: mcamp-cli profile [name=value ...] | mcamp-cli track <broadlog_id> <delivery_id> <action>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Profile {
        attributes: ProfileAttributes,
    },
    Track {
        broadlog_id: String,
        delivery_id: String,
        action: String,
    },
}

impl CliCommand {
    pub fn parse(arguments: impl IntoIterator<Item = String>) -> AppResult<Self> {
        let mut arguments = arguments.into_iter();
        let command = arguments
            .next()
            .ok_or_else(|| AppError::Validation(USAGE.to_owned()))?;

        match command.as_str() {
            "profile" => {
                let attributes = arguments
                    .map(|argument| parse_attribute(argument.as_str()))
                    .collect::<AppResult<ProfileAttributes>>()?;
                Ok(Self::Profile { attributes })
            }
            "track" => {
                let values: Vec<String> = arguments.collect();
                match <[String; 3]>::try_from(values) {
                    Ok([broadlog_id, delivery_id, action]) => Ok(Self::Track {
                        broadlog_id,
                        delivery_id,
                        action,
                    }),
                    Err(values) => Err(AppError::Validation(format!(
                        "track expects 3 arguments, got {}; {USAGE}",
                        values.len()
                    ))),
                }
            }
            other => Err(AppError::Validation(format!(
                "unknown command '{other}'; {USAGE}"
            ))),
        }
    }
}

fn parse_attribute(argument: &str) -> AppResult<(String, String)> {
    match argument.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_owned(), value.to_owned()))
        }
        _ => Err(AppError::Validation(format!(
            "invalid attribute '{argument}', expected name=value"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use mcamp_core::AppResult;

    use super::CliCommand;

    fn arguments(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_owned()).collect()
    }

    #[test]
    fn profile_collects_attributes() -> AppResult<()> {
        let command = CliCommand::parse(arguments(&["profile", "locale=en_US", "note=a=b"]))?;

        let CliCommand::Profile { attributes } = command else {
            panic!("expected profile command");
        };
        assert_eq!(attributes.get("locale"), Some("en_US"));
        assert_eq!(attributes.get("note"), Some("a=b"));
        Ok(())
    }

    #[test]
    fn track_requires_exactly_three_values() -> AppResult<()> {
        let command = CliCommand::parse(arguments(&["track", "111", "222", "click"]))?;
        assert_eq!(
            command,
            CliCommand::Track {
                broadlog_id: "111".to_owned(),
                delivery_id: "222".to_owned(),
                action: "click".to_owned(),
            }
        );

        assert!(CliCommand::parse(arguments(&["track", "111", "222"])).is_err());
        Ok(())
    }

    #[test]
    fn malformed_input_is_rejected() {
        assert!(CliCommand::parse(arguments(&[])).is_err());
        assert!(CliCommand::parse(arguments(&["subscribe"])).is_err());
        assert!(CliCommand::parse(arguments(&["profile", "=value"])).is_err());
        assert!(CliCommand::parse(arguments(&["profile", "novalue"])).is_err());
    }
}
