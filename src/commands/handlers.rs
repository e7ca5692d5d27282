//! Command handlers.
//!
//! Runs a parsed [`Command`] against a [`ContactService`] and turns the
//! outcome, success or error, into the text shown to the user.

use super::parser::{usage, Command, VERBS};
use crate::domain::{field, Birthday, ContactName, ValidationError};
use crate::error::{BookError, CommandError, CommandResult};
use crate::services::ContactService;
use tracing::{debug, warn};

pub const GREETING: &str = "How can I help you?:";
pub const FAREWELL: &str = "Good Bye!";
pub const UNKNOWN_COMMAND: &str = "Unknown command. Try again.";
pub const LISTING_DONE: &str = "There is all records in dictionary";

/// What the read-eval loop should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print a message and read the next command.
    Message(String),

    /// List the book, `page_size` records at a time.
    Listing { page_size: Option<usize> },

    /// Save the book and stop.
    Exit,
}

impl Reply {
    fn message(text: impl Into<String>) -> Self {
        Self::Message(text.into())
    }
}

/// Execute `command`, rendering failures as user-facing messages.
pub fn execute<S: ContactService>(service: &mut S, command: Command) -> Reply {
    match dispatch(service, command) {
        Ok(reply) => reply,
        Err(err) => {
            debug!(error = %err, "Command failed");
            Reply::Message(error_message(&err))
        }
    }
}

fn dispatch<S: ContactService>(service: &mut S, command: Command) -> CommandResult<Reply> {
    let reply = match command {
        Command::Hello => Reply::message(GREETING),
        Command::Help => Reply::Message(help_text()),
        Command::Exit => Reply::Exit,
        Command::Unknown(verb) => {
            if !verb.is_empty() {
                warn!(verb = %verb, "Unknown command");
            }
            Reply::message(UNKNOWN_COMMAND)
        }
        Command::Add {
            name,
            phone,
            birthday,
        } => {
            // An unreadable birthday is dropped rather than failing the add
            let birthday = birthday.and_then(|raw| Birthday::parse(&raw).ok());
            let record = service.add_contact(&name, &phone, birthday)?;
            let birthday = record
                .birthday()
                .map_or_else(|| "None".to_string(), |b| b.to_string());
            Reply::Message(format!(
                "Add name = {}, phone = {}, birthday = {}",
                record.name(),
                phone,
                birthday
            ))
        }
        Command::AddBirthday { name, date } => {
            let birthday = Birthday::parse(&date)?;
            service.set_birthday(&name, birthday)?;
            Reply::Message(format!("{}'s birthday added {}", display_name(&name), date))
        }
        Command::AddPhone { name, phone } => {
            service.add_phone(&name, &phone)?;
            Reply::Message(format!(
                "{}'s phone added another one {}",
                display_name(&name),
                phone
            ))
        }
        Command::Change { name, old, new } => {
            Reply::Message(service.change_phone(&name, &old, &new)?)
        }
        Command::DaysToBirthday { name } => {
            let days = service.days_to_birthday(&name)?;
            Reply::Message(format!(
                "{} days to {}'s birthday",
                days,
                display_name(&name)
            ))
        }
        Command::Delete { name } => {
            let deleted = service.delete_contact(&name)?;
            Reply::Message(format!(
                "Record with name {} deleted.",
                deleted.capitalized()
            ))
        }
        Command::Find { name } => Reply::Message(service.find_contact(&name)?.to_string()),
        Command::FindPhone { name, phone } => match service.find_phone(&name, &phone)? {
            Some(found) => Reply::Message(found.to_string()),
            None => Reply::Message(format!("Phone {} not found.", phone)),
        },
        Command::Phone { name } => {
            let record = service.find_contact(&name)?;
            Reply::Message(format!(
                "{} has {} phone number.",
                record.name().capitalized(),
                field::join(record.phones(), "; ")
            ))
        }
        Command::RemovePhone { name, phone } => {
            service.remove_phone(&name, &phone)?;
            Reply::Message(format!("{} deleted.", phone))
        }
        Command::ShowAll { page_size } => Reply::Listing { page_size },
    };
    Ok(reply)
}

/// Capitalized form of a raw name as typed by the user.
fn display_name(raw: &str) -> String {
    ContactName::new(raw)
        .map(|name| name.capitalized())
        .unwrap_or_else(|_| raw.to_string())
}

/// Map an error to the text shown to the user; each kind gets its own.
pub fn error_message(err: &CommandError) -> String {
    match err {
        CommandError::MissingArguments { command, .. } => format!(
            "Not enough params. Usage: {}",
            usage(command).unwrap_or(*command)
        ),
        CommandError::InvalidArgument(detail) => format!("Invalid argument: {}", detail),
        CommandError::Book(err) => match err {
            BookError::Validation(ValidationError::InvalidPhone(_)) => {
                "The phone number must contains only 10 digit.".to_string()
            }
            BookError::Validation(ValidationError::InvalidDate(_))
            | BookError::MissingBirthday(_) => "Birthday date error".to_string(),
            BookError::Validation(ValidationError::EmptyName) => {
                "The name cannot be empty.".to_string()
            }
            BookError::ContactNotFound(_) => {
                "This name doesn't have in the dictionary.".to_string()
            }
            BookError::PhoneNotFound(_) => {
                "This phone number doesn't exist in the dictionary.".to_string()
            }
            BookError::Duplicate(_) => {
                "This name is already in the dictionary. Use 'add_phone' to append new phone."
                    .to_string()
            }
        },
    }
}

/// The `help` listing, one verb per line.
pub fn help_text() -> String {
    let mut text = String::from("Use next commands:");
    for verb in VERBS {
        text.push_str(&format!("\n    {} - {}", verb.usage, verb.summary));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ContactServiceImpl;

    fn run(service: &mut ContactServiceImpl, line: &str) -> Reply {
        match Command::parse(line) {
            Ok(command) => execute(service, command),
            Err(err) => Reply::Message(error_message(&err)),
        }
    }

    fn text(reply: Reply) -> String {
        match reply {
            Reply::Message(text) => text,
            other => panic!("Expected a message, got: {:?}", other),
        }
    }

    #[test]
    fn test_add_and_duplicate() {
        let mut service = ContactServiceImpl::default();
        assert_eq!(
            text(run(&mut service, "add Alice 1234567890")),
            "Add name = alice, phone = 1234567890, birthday = None"
        );
        assert_eq!(
            text(run(&mut service, "add alice 0987654321")),
            "This name is already in the dictionary. Use 'add_phone' to append new phone."
        );
    }

    #[test]
    fn test_add_with_birthday() {
        let mut service = ContactServiceImpl::default();
        assert_eq!(
            text(run(&mut service, "add bob 1234567890 15/03/1990")),
            "Add name = bob, phone = 1234567890, birthday = 1990-03-15"
        );
        // Unreadable birthday is ignored
        assert_eq!(
            text(run(&mut service, "add carol 1234567890 someday")),
            "Add name = carol, phone = 1234567890, birthday = None"
        );
    }

    #[test]
    fn test_error_kinds_have_distinct_messages() {
        let mut service = ContactServiceImpl::default();
        run(&mut service, "add alice 1234567890");

        let invalid_phone = text(run(&mut service, "add_phone alice 12"));
        let unknown_name = text(run(&mut service, "find bob"));
        let unknown_phone = text(run(&mut service, "remove_phone alice 0000000000"));
        let no_birthday = text(run(&mut service, "days_to_birthday alice"));
        let missing_args = text(run(&mut service, "add alice"));

        assert_eq!(invalid_phone, "The phone number must contains only 10 digit.");
        assert_eq!(unknown_name, "This name doesn't have in the dictionary.");
        assert_eq!(
            unknown_phone,
            "This phone number doesn't exist in the dictionary."
        );
        assert_eq!(no_birthday, "Birthday date error");
        assert_eq!(
            missing_args,
            "Not enough params. Usage: add 'name' 'phone' ['dd/mm/yyyy']"
        );
    }

    #[test]
    fn test_phone_commands() {
        let mut service = ContactServiceImpl::default();
        run(&mut service, "add alice 1234567890");

        assert_eq!(
            text(run(&mut service, "add_phone alice 0987654321")),
            "Alice's phone added another one 0987654321"
        );
        assert_eq!(
            text(run(&mut service, "change alice 1234567890 1112223333")),
            "Phone 1234567890 changed to phone 1112223333"
        );
        assert_eq!(
            text(run(&mut service, "phone alice")),
            "Alice has 1112223333; 0987654321 phone number."
        );
        assert_eq!(
            text(run(&mut service, "find_phone alice 0987654321")),
            "0987654321"
        );
        assert_eq!(
            text(run(&mut service, "find_phone alice 1234567890")),
            "Phone 1234567890 not found."
        );
        assert_eq!(
            text(run(&mut service, "remove_phone alice 0987654321")),
            "0987654321 deleted."
        );
    }

    #[test]
    fn test_birthday_commands() {
        let mut service = ContactServiceImpl::default();
        run(&mut service, "add alice 1234567890");

        assert_eq!(
            text(run(&mut service, "add_b alice 31/02/1990")),
            "Birthday date error"
        );
        assert_eq!(
            text(run(&mut service, "add_b alice 15/03/1990")),
            "Alice's birthday added 15/03/1990"
        );
        let reply = text(run(&mut service, "days_to_birthday ALICE"));
        assert!(reply.ends_with(" days to Alice's birthday"), "{}", reply);
    }

    #[test]
    fn test_find_and_delete() {
        let mut service = ContactServiceImpl::default();
        run(&mut service, "add alice 1234567890");

        assert_eq!(
            text(run(&mut service, "find Alice")),
            "Contact name: alice, phones: 1234567890, birthday: "
        );
        assert_eq!(
            text(run(&mut service, "delete ALICE")),
            "Record with name Alice deleted."
        );
        assert_eq!(
            text(run(&mut service, "delete alice")),
            "This name doesn't have in the dictionary."
        );
    }

    #[test]
    fn test_control_commands() {
        let mut service = ContactServiceImpl::default();
        assert_eq!(text(run(&mut service, "hello")), GREETING);
        assert_eq!(text(run(&mut service, "frobnicate")), UNKNOWN_COMMAND);
        assert_eq!(run(&mut service, "exit"), Reply::Exit);
        assert_eq!(
            run(&mut service, "show_all 2"),
            Reply::Listing { page_size: Some(2) }
        );
        assert_eq!(
            text(run(&mut service, "show_all x")),
            "Invalid argument: page size must be a non-negative number, got: x"
        );
    }

    #[test]
    fn test_help_lists_every_verb() {
        let help = help_text();
        assert!(help.starts_with("Use next commands:"));
        for verb in VERBS {
            assert!(help.contains(verb.usage), "missing {}", verb.name);
        }
    }
}
