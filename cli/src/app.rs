//! The interactive session: read a command, apply it to the controller,
//! redraw.
//!
//! Commands are handled one at a time, so nothing new can be triggered while
//! the controller is busy.

use std::io::Write;

use study_core::{DraftField, Outcome, SubjectController, Transport, ValidationError};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tracing::debug;

use crate::command::{self, Command, ParseError, HELP};
use crate::render::render;

enum Flow {
    Redraw,
    Stay,
    Quit,
}

/// Run until `quit` or end of input.
pub async fn run_session<T, R, W>(controller: &mut SubjectController<T>, input: R, out: &mut W) -> anyhow::Result<()>
where
    T: Transport,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    controller.initialize().await;
    write!(out, "{}", render(controller.state()))?;

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let command = match command::parse(&line) {
            Ok(command) => command,
            Err(ParseError::Empty) => continue,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };
        debug!(?command, "dispatching");
        match dispatch(controller, command, &mut lines, out).await? {
            Flow::Redraw => write!(out, "{}", render(controller.state()))?,
            Flow::Stay => {}
            Flow::Quit => break,
        }
    }
    Ok(())
}

async fn dispatch<T, R, W>(
    controller: &mut SubjectController<T>,
    command: Command,
    lines: &mut Lines<R>,
    out: &mut W,
) -> anyhow::Result<Flow>
where
    T: Transport,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    match command {
        Command::List => {
            controller.refresh().await;
        }
        Command::Show => {}
        Command::Name(name) => controller.update_draft_field(DraftField::Name(name)),
        Command::Date(date) => controller.update_draft_field(DraftField::ExamDate(date)),
        Command::Difficulty(d) => controller.update_draft_field(DraftField::Difficulty(d)),
        Command::ChapterAdd => controller.add_draft_chapter_slot(),
        Command::ChapterSet(index, text) => {
            if !controller.update_draft_chapter(index, text) {
                writeln!(out, "no chapter {}", index + 1)?;
                return Ok(Flow::Stay);
            }
        }
        Command::ChapterRemove(index) => {
            if controller.remove_draft_chapter(index).is_none() {
                writeln!(out, "no chapter {}", index + 1)?;
                return Ok(Flow::Stay);
            }
        }
        Command::Submit => {
            if let Outcome::Rejected(reason) = controller.submit_draft().await {
                writeln!(out, "{} ({reason})", ValidationError::PROMPT)?;
                return Ok(Flow::Stay);
            }
        }
        Command::Delete(index) => {
            let Some(subject) = controller.subjects().get(index) else {
                writeln!(out, "no subject {}", index + 1)?;
                return Ok(Flow::Stay);
            };
            let id = subject.id().clone();
            write!(out, "Are you sure you want to delete this subject? [y/N] ")?;
            out.flush()?;
            let answer = lines.next_line().await?.unwrap_or_default();
            let confirmed = matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes");
            if controller.remove_subject(&id, |_| confirmed).await == Outcome::Declined {
                return Ok(Flow::Stay);
            }
        }
        Command::Help => {
            writeln!(out, "{HELP}")?;
            return Ok(Flow::Stay);
        }
        Command::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Redraw)
}
