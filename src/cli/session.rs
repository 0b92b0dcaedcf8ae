//! Line-oriented input loop for the interactive menu.

use crate::cli::menu::MenuRenderer;
use crate::services::{Command, DirectoryService, MenuChoice, Outcome};
use std::io::{self, BufRead, Write};

/// An interactive session reading choices from `input` and writing to `output`.
///
/// The session ends on choice `0` or when input is exhausted.
pub struct Session<R, W> {
    input: R,
    output: W,
    renderer: MenuRenderer,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, renderer: MenuRenderer) -> Self {
        Self {
            input,
            output,
            renderer,
        }
    }

    /// Consume the session and hand back its writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Read one line without its trailing newline. `None` means end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    fn ask(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", self.renderer.prompt(label))?;
        self.output.flush()?;
        self.read_line()
    }

    /// Prompt for the arguments of `choice`.
    ///
    /// Returns `Ok(None)` if input ran out. An edit of an unknown name is
    /// reported before the new values are requested.
    fn build_command<S: DirectoryService + ?Sized>(
        &mut self,
        choice: MenuChoice,
        service: &S,
    ) -> io::Result<Option<Command>> {
        let command = match choice {
            MenuChoice::Exit => Command::Exit,
            MenuChoice::View => Command::View,
            MenuChoice::Sort => Command::Sort,
            MenuChoice::Undo => Command::Undo,
            MenuChoice::Report => Command::Report,
            MenuChoice::Search => {
                let Some(query) = self.ask("\nEnter search query: ")? else {
                    return Ok(None);
                };
                Command::Search { query }
            }
            MenuChoice::Add => {
                let Some(name) = self.ask("\nEnter name: ")? else {
                    return Ok(None);
                };
                let Some(phone) = self.ask("Enter phone number: ")? else {
                    return Ok(None);
                };
                Command::Add { name, phone }
            }
            MenuChoice::Edit => {
                let Some(name) = self.ask("\nEnter the name of the contact to update: ")? else {
                    return Ok(None);
                };
                if service.find(&name).is_none() {
                    // Let the service report NotFound without asking for new values.
                    return Ok(Some(Command::Edit {
                        name,
                        new_name: String::new(),
                        new_phone: String::new(),
                    }));
                }
                let Some(new_name) = self.ask("\nEnter new name: ")? else {
                    return Ok(None);
                };
                let Some(new_phone) = self.ask("Enter new phone number: ")? else {
                    return Ok(None);
                };
                Command::Edit {
                    name,
                    new_name,
                    new_phone,
                }
            }
            MenuChoice::Delete => {
                let Some(name) = self.ask("\nEnter the name of the contact to delete: ")? else {
                    return Ok(None);
                };
                Command::Delete { name }
            }
        };
        Ok(Some(command))
    }

    /// Run the menu loop against `service` until exit or end of input.
    pub fn run<S: DirectoryService + ?Sized>(&mut self, service: &mut S) -> io::Result<()> {
        loop {
            write!(self.output, "{}", self.renderer.menu())?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                tracing::debug!("Input closed, ending session");
                break;
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                tracing::debug!(input = %line, "Invalid menu choice");
                write!(self.output, "{}", self.renderer.invalid_choice())?;
                continue;
            };

            let Some(command) = self.build_command(choice, service)? else {
                tracing::debug!("Input closed mid-command, ending session");
                break;
            };

            let text = match service.execute(command) {
                Ok(outcome) => {
                    let text = self.renderer.outcome(&outcome);
                    if outcome == Outcome::Exit {
                        write!(self.output, "{}", text)?;
                        break;
                    }
                    text
                }
                Err(e) => self.renderer.error(&e),
            };
            write!(self.output, "{}", text)?;
        }

        self.output.flush()
    }
}
