use std::str::FromStr;

use business::domain::product::validation::ProductField;
use business::domain::product::value_objects::ProductId;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CommandError {
    #[error("Unknown command `{0}`. Type `help` to list commands.")]
    Unknown(String),
    #[error("Usage: {0}")]
    Usage(&'static str),
    #[error("`{0}` is not a product id")]
    InvalidId(String),
    #[error("`{0}` is not a form field (name, description, price, status, image)")]
    InvalidField(String),
}

/// One line of operator input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    List,
    Search(String),
    Add,
    View(ProductId),
    Edit(Option<ProductId>),
    Delete(ProductId),
    Refresh(ProductId),
    Set(ProductField, String),
    Image(String),
    ClearImage,
    Submit,
    Cancel,
    Close,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  list                     show the product list
  search [text]            filter the list by name (no text clears the filter)
  add                      open the create form
  view <id>                open a product
  edit [id]                edit a product (the open one when no id is given)
  delete <id>              delete a product after confirmation
  refresh <id>             reload one product from the server
  set <field> <value>      fill a form field (name, description, price, status, image)
  image <path-or-url>      attach an image file or URL to the open form
  clear-image              remove the image from the open form
  submit                   validate and save the open form
  cancel                   discard the open form
  close                    close the open dialog
  help                     show this help
  quit                     leave";

impl Command {
    /// Parses a line of input. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "list" | "ls" => Command::List,
            "search" | "find" => Command::Search(rest.to_string()),
            "add" | "new" => Command::Add,
            "view" | "show" => Command::View(parse_id(rest, "view <id>")?),
            "edit" if rest.is_empty() => Command::Edit(None),
            "edit" => Command::Edit(Some(parse_id(rest, "edit [id]")?)),
            "delete" | "rm" => Command::Delete(parse_id(rest, "delete <id>")?),
            "refresh" => Command::Refresh(parse_id(rest, "refresh <id>")?),
            "set" => {
                let (field, value) = rest
                    .split_once(char::is_whitespace)
                    .map(|(field, value)| (field, value.trim()))
                    .unwrap_or((rest, ""));
                if field.is_empty() {
                    return Err(CommandError::Usage("set <field> <value>"));
                }
                let field = ProductField::from_str(field)
                    .map_err(|_| CommandError::InvalidField(field.to_string()))?;
                Command::Set(field, value.to_string())
            }
            "image" if rest.is_empty() => return Err(CommandError::Usage("image <path-or-url>")),
            "image" => Command::Image(rest.to_string()),
            "clear-image" => Command::ClearImage,
            "submit" | "save" => Command::Submit,
            "cancel" => Command::Cancel,
            "close" => Command::Close,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(Some(command))
    }
}

fn parse_id(raw: &str, usage: &'static str) -> Result<ProductId, CommandError> {
    if raw.is_empty() {
        return Err(CommandError::Usage(usage));
    }
    raw.parse::<ProductId>()
        .map_err(|_| CommandError::InvalidId(raw.to_string()))
}
