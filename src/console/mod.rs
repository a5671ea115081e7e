//! Line-oriented terminal front end.
//!
//! Each command stands in for a click on the catalog page: the search
//! button, the add button, a row's View/Edit/Delete button, or the form's
//! save button. Request failures are only logged, as on the page.

use std::cell::RefCell;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::catalog::{Catalog, Confirm, RowAction};
use crate::form::FormFields;
use crate::render::ActionKind;
use crate::search::SearchFilters;

const HELP: &str = "\
Commands:
  list           reload all products
  search         filter by name and price range
  add            open an empty product form
  view <id>      open the form on a product
  edit <id>      same as view
  delete <id>    delete a product after confirmation
  form           reopen the current form after a failed save
  cancel         close the form
  html           print the table body markup
  help           show this text
  quit           leave

At a field prompt, enter keeps the shown value and `-` clears it.";

/// Something the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    List,
    Search,
    Add,
    Row(RowAction),
    Form,
    Cancel,
    Html,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Err("Type `help` for a list of commands.".to_string());
        };

        let command = match name {
            "list" => Command::List,
            "search" => Command::Search,
            "add" => Command::Add,
            "form" => Command::Form,
            "cancel" => Command::Cancel,
            "html" => Command::Html,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            "view" | "edit" | "delete" => {
                let id = words.next().unwrap_or_default();
                match RowAction::from_trigger(name, id) {
                    Some(action) => Command::Row(action),
                    None => return Err(format!("Usage: {} <id>", name)),
                }
            }
            other => return Err(format!("Unknown command `{}`. Type `help`.", other)),
        };
        Ok(command)
    }
}

/// Prompting wrapper around an input and an output stream.
pub struct Terminal<R, W> {
    input: RefCell<R>,
    output: RefCell<W>,
}

impl Terminal<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: RefCell::new(input),
            output: RefCell::new(output),
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output.into_inner()
    }

    fn say(&self, text: &str) {
        let mut out = self.output.borrow_mut();
        let _ = writeln!(out, "{}", text);
        let _ = out.flush();
    }

    fn ask(&self, text: &str) {
        let mut out = self.output.borrow_mut();
        let _ = write!(out, "{}", text);
        let _ = out.flush();
    }

    /// Next line without its terminator, or `None` at end of input.
    fn read_line(&self) -> Option<String> {
        let mut line = String::new();
        match self.input.borrow_mut().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }

    /// Ask for a field value. An empty answer keeps `current`, `-` clears it.
    fn prompt(&self, label: &str, current: &str) -> Option<String> {
        if current.is_empty() {
            self.ask(&format!("{}: ", label));
        } else {
            self.ask(&format!("{} [{}]: ", label, current));
        }
        let answer = self.read_line()?;
        match answer.as_str() {
            "" => Some(current.to_string()),
            "-" => Some(String::new()),
            _ => Some(answer),
        }
    }
}

impl<R: BufRead, W: Write> Confirm for Terminal<R, W> {
    fn confirm(&self, message: &str) -> bool {
        self.ask(&format!("{} [y/N] ", message));
        matches!(
            self.read_line().map(|a| a.trim().to_ascii_lowercase()).as_deref(),
            Some("y") | Some("yes")
        )
    }
}

/// Read and execute commands until `quit` or end of input.
pub async fn run<R: BufRead, W: Write>(catalog: &Catalog, terminal: &Terminal<R, W>) {
    let mut filters = SearchFilters::default();

    loop {
        terminal.ask("catalog> ");
        let Some(line) = terminal.read_line() else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                terminal.say(&message);
                continue;
            }
        };

        match command {
            Command::List => {
                let _ = catalog.refresh("").await;
                print_table(catalog, terminal);
            }
            Command::Search => {
                let Some(next) = prompt_filters(terminal, &filters) else {
                    break;
                };
                filters = next;
                let _ = catalog.search(&filters).await;
                print_table(catalog, terminal);
            }
            Command::Add => {
                catalog.open_for_create();
                fill_and_submit(catalog, terminal).await;
            }
            Command::Row(action) => {
                let dispatched = catalog.dispatch(action, terminal).await;
                if action.kind == ActionKind::Delete {
                    print_table(catalog, terminal);
                } else if dispatched.is_ok() {
                    fill_and_submit(catalog, terminal).await;
                }
            }
            Command::Form => {
                if catalog.form().is_open() {
                    fill_and_submit(catalog, terminal).await;
                } else {
                    terminal.say("No form is open.");
                }
            }
            Command::Cancel => catalog.close_form(),
            Command::Html => terminal.say(catalog.table_html().trim_end()),
            Command::Help => terminal.say(HELP),
            Command::Quit => break,
        }
    }
}

fn prompt_filters<R: BufRead, W: Write>(
    terminal: &Terminal<R, W>,
    current: &SearchFilters,
) -> Option<SearchFilters> {
    Some(SearchFilters::new(
        terminal.prompt("Name", &current.name)?,
        terminal.prompt("Min price", &current.min_price)?,
        terminal.prompt("Max price", &current.max_price)?,
    ))
}

fn prompt_fields<R: BufRead, W: Write>(
    terminal: &Terminal<R, W>,
    current: &FormFields,
) -> Option<FormFields> {
    Some(FormFields {
        name: terminal.prompt("Name", &current.name)?,
        price: terminal.prompt("Price", &current.price)?,
        discount_price: terminal.prompt("Discount price", &current.discount_price)?,
        category: terminal.prompt("Category", &current.category)?,
        status: terminal.prompt("Status", &current.status)?,
        description: terminal.prompt("Description", &current.description)?,
        image_url: terminal.prompt("Image URL", &current.image_url)?,
    })
}

async fn fill_and_submit<R: BufRead, W: Write>(catalog: &Catalog, terminal: &Terminal<R, W>) {
    let form = catalog.form();
    match form.editing_id() {
        Some(id) => terminal.say(&format!("Editing product {}", id)),
        None => terminal.say("New product"),
    }

    let Some(fields) = prompt_fields(terminal, &form.fields) else {
        catalog.close_form();
        return;
    };
    catalog.update_form(|current| *current = fields);

    if catalog.submit().await.is_ok() {
        print_table(catalog, terminal);
    } else {
        terminal.say("Not saved. Type `form` to try again or `cancel` to discard.");
    }
}

fn print_table<R: BufRead, W: Write>(catalog: &Catalog, terminal: &Terminal<R, W>) {
    let products = catalog.products();
    if products.is_empty() {
        terminal.say("(no products)");
        return;
    }

    terminal.say(&format!(
        "{:>5}  {:<24}  {:>10}  {:>10}  {:<14}  {}",
        "ID", "Name", "Price", "Discount", "Category", "Status"
    ));
    for product in &products {
        terminal.say(&product.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("list"), Ok(Command::List));
        assert_eq!(Command::parse("  search "), Ok(Command::Search));
        assert_eq!(
            Command::parse("edit 5"),
            Ok(Command::Row(RowAction::new(ActionKind::Edit, 5)))
        );
        assert_eq!(
            Command::parse("delete 12"),
            Ok(Command::Row(RowAction::new(ActionKind::Delete, 12)))
        );
        assert_eq!(Command::parse("exit"), Ok(Command::Quit));
        assert!(Command::parse("view").is_err());
        assert!(Command::parse("view x").is_err());
        assert!(Command::parse("frobnicate").is_err());
    }

    #[test]
    fn test_confirm_accepts_only_yes() {
        let cases = [
            ("y\n", true),
            ("YES\n", true),
            ("n\n", false),
            ("\n", false),
            ("", false),
        ];
        for (answer, expected) in cases {
            let terminal = Terminal::new(Cursor::new(answer.as_bytes().to_vec()), Vec::new());
            assert_eq!(terminal.confirm("Sure?"), expected, "answer {:?}", answer);
            let output = String::from_utf8(terminal.into_output()).unwrap();
            assert_eq!(output, "Sure? [y/N] ");
        }
    }

    #[test]
    fn test_prompt_keeps_current_value_on_empty_answer() {
        let terminal = Terminal::new(Cursor::new(b"\nHat\n-\n".to_vec()), Vec::new());
        assert_eq!(terminal.prompt("Name", "Mug"), Some("Mug".to_string()));
        assert_eq!(terminal.prompt("Name", "Mug"), Some("Hat".to_string()));
        assert_eq!(terminal.prompt("Name", "Mug"), Some(String::new()));
        assert_eq!(terminal.prompt("Name", ""), None);

        let output = String::from_utf8(terminal.into_output()).unwrap();
        assert_eq!(output, "Name [Mug]: Name [Mug]: Name [Mug]: Name: ");
    }
}
