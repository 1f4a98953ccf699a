pub mod utils;

/// A console command, one per input line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    List,
    /// raw `field=value; ...` arguments, parsed against the active record kind by the handler
    Add(String),
    Edit(u64),
    Set { field: String, value: String },
    Commit,
    Cancel,
    Delete(u64),
    Reload,
    Quit,
}

pub const HELP_TEXT: &str = "\
Commands:
  list                              show all records
  add <field>=<value>[; ...]        create a record
  edit <id>                         start editing a record
  set <field> <value>               change a field of the record being edited
  commit                            save the edited record
  cancel                            discard the edit
  delete <id>                       delete a record
  reload                            re-read the file
  help                              show this help
  quit                              exit";

fn parse_id(arg: &str, usage: &str) -> Result<u64, String> {
    if arg.is_empty() {
        return Err(format!("Usage: {}", usage));
    }
    arg.parse::<u64>()
        .map_err(|_| format!("'{}' is not a valid ID", arg))
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    let command = match name.to_lowercase().as_str() {
        "help" | "?" => Command::Help,
        "list" | "ls" => Command::List,
        "add" => {
            if rest.is_empty() {
                return Err("Usage: add <field>=<value>[; <field>=<value> ...]".to_string());
            }
            Command::Add(rest.to_string())
        }
        "edit" => Command::Edit(parse_id(rest, "edit <id>")?),
        "set" => {
            let (field, value) = match rest.split_once(char::is_whitespace) {
                Some((field, value)) => (field, value.trim()),
                None => (rest, ""),
            };
            if field.is_empty() {
                return Err("Usage: set <field> <value>".to_string());
            }
            Command::Set {
                field: field.to_string(),
                value: value.to_string(),
            }
        }
        "commit" | "save" => Command::Commit,
        "cancel" => Command::Cancel,
        "delete" | "rm" => Command::Delete(parse_id(rest, "delete <id>")?),
        "reload" => Command::Reload,
        "quit" | "exit" => Command::Quit,
        _ => return Err(format!("Command not recognized: {}", name)),
    };
    Ok(Some(command))
}
