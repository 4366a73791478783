use std::str::FromStr;

use shared::domain::{AddressField, UnknownField};
use thiserror::Error;

pub const USAGE: &str = "\
commands:
  set <street|city|state|zip> <value...>   edit a form field
  submit                                   validate and add the address
  delete <index>                           remove the row at index
  list                                     show the address table
  show                                     show the form and its errors
  clear                                    discard the draft
  help                                     this text
  quit                                     exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set { field: AddressField, value: String },
    Submit,
    Delete { index: usize },
    List,
    Show,
    Clear,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error(transparent)]
    Field(#[from] UnknownField),
    #[error("'{0}' is not a row index")]
    BadIndex(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map(|(verb, rest)| (verb, rest.trim_start()))
            .unwrap_or((line, ""));

        match verb.to_ascii_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "set" => {
                let (name, value) = rest
                    .split_once(char::is_whitespace)
                    .map(|(name, value)| (name, value.trim_start()))
                    .unwrap_or((rest, ""));
                if name.is_empty() {
                    return Err(CommandError::Usage("set <field> <value...>"));
                }
                Ok(Command::Set {
                    field: name.parse()?,
                    value: value.to_string(),
                })
            }
            "submit" => Ok(Command::Submit),
            "delete" | "rm" => {
                if rest.is_empty() {
                    return Err(CommandError::Usage("delete <index>"));
                }
                rest.parse()
                    .map(|index| Command::Delete { index })
                    .map_err(|_| CommandError::BadIndex(rest.to_string()))
            }
            "list" | "ls" => Ok(Command::List),
            "show" => Ok(Command::Show),
            "clear" => Ok(Command::Clear),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_keeps_inner_spaces_of_value() {
        assert_eq!(
            "set street 1 Main St".parse::<Command>(),
            Ok(Command::Set {
                field: AddressField::Street,
                value: "1 Main St".to_string(),
            })
        );
    }

    #[test]
    fn set_without_value_clears_field() {
        assert_eq!(
            "set zip".parse::<Command>(),
            Ok(Command::Set {
                field: AddressField::Zip,
                value: String::new(),
            })
        );
    }

    #[test]
    fn set_rejects_unknown_field() {
        assert_eq!(
            "set country US".parse::<Command>(),
            Err(CommandError::Field(UnknownField("country".to_string())))
        );
        assert_eq!(
            "set".parse::<Command>(),
            Err(CommandError::Usage("set <field> <value...>"))
        );
    }

    #[test]
    fn delete_needs_a_non_negative_index() {
        assert_eq!("delete 2".parse::<Command>(), Ok(Command::Delete { index: 2 }));
        assert_eq!(
            "delete -1".parse::<Command>(),
            Err(CommandError::BadIndex("-1".to_string()))
        );
        assert_eq!(
            "delete".parse::<Command>(),
            Err(CommandError::Usage("delete <index>"))
        );
    }

    #[test]
    fn verbs_are_case_insensitive_and_trimmed() {
        assert_eq!("  SUBMIT ".parse::<Command>(), Ok(Command::Submit));
        assert_eq!("Quit".parse::<Command>(), Ok(Command::Quit));
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "frobnicate".parse::<Command>(),
            Err(CommandError::Unknown("frobnicate".to_string()))
        );
    }
}
