//! The interactive read-eval loop.

use super::handlers::{self, Reply, FAREWELL, LISTING_DONE};
use super::parser::Command;
use crate::repositories::ContactRepository;
use crate::services::ContactService;
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use tracing::{debug, info, warn};

/// Prompt printed before every command.
pub const PROMPT: &str = "Enter user name and phone number or 'help' for help: ";

/// Prompt printed between pages of a paged listing.
pub const PAGE_PROMPT: &str = "Press Enter for next records";

/// One interactive session: a service holding the book and the repository
/// the book is written back to when the session ends.
pub struct Session<S, R> {
    service: S,
    repository: R,
}

impl<S: ContactService, R: ContactRepository> Session<S, R> {
    pub fn new(service: S, repository: R) -> Self {
        Self {
            service,
            repository,
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Read commands from `input` until `exit` or end of input, writing
    /// replies to `output`. The book is saved when the loop ends, however
    /// it ends.
    ///
    /// # Errors
    ///
    /// Fails if the terminal cannot be read or written, or if the final
    /// save fails. A terminal failure is reported only after the book was
    /// saved, and a failed save is never swallowed.
    pub fn run<I: BufRead, O: Write>(&mut self, input: &mut I, output: &mut O) -> Result<()> {
        let outcome = self.read_eval(input, output);
        if let Err(e) = &outcome {
            warn!(error = %e, "Session interrupted, saving before exit");
        }

        self.save()?;
        outcome.context("terminal I/O failed")?;
        writeln!(output, "{}", FAREWELL)?;
        Ok(())
    }

    fn read_eval<I: BufRead, O: Write>(&mut self, input: &mut I, output: &mut O) -> Result<()> {
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            let Some(line) = read_line(input)? else {
                debug!("End of input");
                writeln!(output)?;
                return Ok(());
            };

            let reply = match Command::parse(&line) {
                Ok(command) => handlers::execute(&mut self.service, command),
                Err(err) => Reply::Message(handlers::error_message(&err)),
            };

            match reply {
                Reply::Message(text) => writeln!(output, "{}", text)?,
                Reply::Listing { page_size } => self.list(page_size, input, output)?,
                Reply::Exit => return Ok(()),
            }
        }
    }

    /// Write the book page by page, waiting for a line between pages.
    fn list<I: BufRead, O: Write>(
        &self,
        page_size: Option<usize>,
        input: &mut I,
        output: &mut O,
    ) -> Result<()> {
        let Some(size) = page_size.filter(|&n| n > 0) else {
            writeln!(output, "{}", self.service.book())?;
            return Ok(());
        };

        for page in self.service.pages(Some(size)) {
            for record in page {
                writeln!(output, "{}", record)?;
            }
            write!(output, "{}", PAGE_PROMPT)?;
            output.flush()?;

            if read_line(input)?.is_none() {
                writeln!(output)?;
                break;
            }
        }
        writeln!(output, "{}", LISTING_DONE)?;
        Ok(())
    }

    /// Persist the book through the repository.
    pub fn save(&self) -> Result<()> {
        let book = self.service.book();
        self.repository
            .save(book)
            .context("failed to save the address book")?;
        info!(records = book.len(), "Address book saved");
        Ok(())
    }
}

/// Read one line, `None` at end of input. Bytes that are not valid UTF-8
/// are replaced rather than ending the session.
fn read_line<I: BufRead>(input: &mut I) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}
