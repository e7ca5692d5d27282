//! Turns one line of user input into a [`Command`].

use crate::error::{CommandError, CommandResult};

/// A command verb with its usage line, as listed by `help`.
pub struct Verb {
    pub name: &'static str,
    pub usage: &'static str,
    pub summary: &'static str,
}

/// Every verb the dispatcher understands.
pub const VERBS: &[Verb] = &[
    Verb {
        name: "add",
        usage: "add 'name' 'phone' ['dd/mm/yyyy']",
        summary: "add name and phone number (and optionally a birthday) to the dictionary",
    },
    Verb {
        name: "add_b",
        usage: "add_b 'name' 'dd/mm/yyyy'",
        summary: "add birthday date to the name in dictionary",
    },
    Verb {
        name: "add_phone",
        usage: "add_phone 'name' 'phone'",
        summary: "add phone number to the name in dictionary",
    },
    Verb {
        name: "change",
        usage: "change 'name' 'old_phone' 'new_phone'",
        summary: "change phone number in this name",
    },
    Verb {
        name: "days_to_birthday",
        usage: "days_to_birthday 'name'",
        summary: "return number days to birthday",
    },
    Verb {
        name: "delete",
        usage: "delete 'name'",
        summary: "delete name and phones from the dictionary",
    },
    Verb {
        name: "find",
        usage: "find 'name'",
        summary: "find info by name",
    },
    Verb {
        name: "find_phone",
        usage: "find_phone 'name' 'phone'",
        summary: "find phone for name in the dictionary",
    },
    Verb {
        name: "phone",
        usage: "phone 'name'",
        summary: "show phone numbers for this name",
    },
    Verb {
        name: "remove_phone",
        usage: "remove_phone 'name' 'phone'",
        summary: "remove phone for this name",
    },
    Verb {
        name: "show_all",
        usage: "show_all ['N']",
        summary: "show all records, or N records at a time",
    },
    Verb {
        name: "hello",
        usage: "hello",
        summary: "greeting",
    },
    Verb {
        name: "help",
        usage: "help",
        summary: "show this help",
    },
    Verb {
        name: "exit",
        usage: "exit",
        summary: "save and exit",
    },
];

/// Usage line for a verb, if it exists.
pub fn usage(verb: &str) -> Option<&'static str> {
    VERBS.iter().find(|v| v.name == verb).map(|v| v.usage)
}

/// A parsed command with its positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    Add {
        name: String,
        phone: String,
        birthday: Option<String>,
    },
    AddBirthday {
        name: String,
        date: String,
    },
    AddPhone {
        name: String,
        phone: String,
    },
    Change {
        name: String,
        old: String,
        new: String,
    },
    DaysToBirthday {
        name: String,
    },
    Delete {
        name: String,
    },
    Find {
        name: String,
    },
    FindPhone {
        name: String,
        phone: String,
    },
    Phone {
        name: String,
    },
    RemovePhone {
        name: String,
        phone: String,
    },
    ShowAll {
        page_size: Option<usize>,
    },
    Exit,
    Unknown(String),
}

impl Command {
    /// Parse a line: the first word is the verb (any case), the rest are
    /// whitespace-separated positional arguments. Extra arguments are ignored.
    ///
    /// # Errors
    ///
    /// - `CommandError::MissingArguments` if the verb needs more arguments
    /// - `CommandError::InvalidArgument` if `show_all` gets a non-numeric size
    pub fn parse(line: &str) -> CommandResult<Self> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(Self::Unknown(String::new()));
        };
        let verb = verb.to_lowercase();
        let args: Vec<&str> = words.collect();

        let command = match verb.as_str() {
            "hello" => Self::Hello,
            "help" => Self::Help,
            "exit" => Self::Exit,
            "add" => {
                let [name, phone] = take::<2>("add", &args)?;
                Self::Add {
                    name,
                    phone,
                    birthday: args.get(2).map(|s| s.to_string()),
                }
            }
            "add_b" => {
                let [name, date] = take::<2>("add_b", &args)?;
                Self::AddBirthday { name, date }
            }
            "add_phone" => {
                let [name, phone] = take::<2>("add_phone", &args)?;
                Self::AddPhone { name, phone }
            }
            "change" => {
                let [name, old, new] = take::<3>("change", &args)?;
                Self::Change { name, old, new }
            }
            "days_to_birthday" => {
                let [name] = take::<1>("days_to_birthday", &args)?;
                Self::DaysToBirthday { name }
            }
            "delete" => {
                let [name] = take::<1>("delete", &args)?;
                Self::Delete { name }
            }
            "find" => {
                let [name] = take::<1>("find", &args)?;
                Self::Find { name }
            }
            "find_phone" => {
                let [name, phone] = take::<2>("find_phone", &args)?;
                Self::FindPhone { name, phone }
            }
            "phone" => {
                let [name] = take::<1>("phone", &args)?;
                Self::Phone { name }
            }
            "remove_phone" => {
                let [name, phone] = take::<2>("remove_phone", &args)?;
                Self::RemovePhone { name, phone }
            }
            "show_all" => {
                let page_size = args
                    .first()
                    .map(|raw| {
                        raw.parse::<usize>().map_err(|_| {
                            CommandError::InvalidArgument(format!(
                                "page size must be a non-negative number, got: {}",
                                raw
                            ))
                        })
                    })
                    .transpose()?;
                Self::ShowAll { page_size }
            }
            _ => Self::Unknown(verb),
        };
        Ok(command)
    }
}

/// Take the first `N` arguments of `command`, or report how many are missing.
fn take<const N: usize>(command: &'static str, args: &[&str]) -> CommandResult<[String; N]> {
    if args.len() < N {
        return Err(CommandError::MissingArguments {
            command,
            expected: N,
            given: args.len(),
        });
    }
    Ok(std::array::from_fn(|i| args[i].to_string()))
}
