use std::io::{BufRead, Write};

use mindcheck_core::models::report::Report;
use mindcheck_session::CheckupSession;
use mindcheck_session::error::SessionError;
use mindcheck_session::state::{SessionState, Snapshot};

const INTRO: &str = "\
Mental Wellness Check-up

This short check-up uses the PHQ-9, GAD-7 and WHO-5 questionnaires to look at
mood, anxiety and overall wellbeing over the last two weeks. It has 21 quick
questions and takes 5-10 minutes. Nothing you enter is stored.

Answer with the option number. Enter b to go back, q to quit.";

enum Input {
    Choice(usize),
    Back,
    Quit,
    Other,
}

fn parse_input(line: &str) -> Input {
    match line.trim() {
        "q" | "quit" => Input::Quit,
        "b" | "back" => Input::Back,
        other => other.parse().map(Input::Choice).unwrap_or(Input::Other),
    }
}

/// Run a checkup over `input`/`output`.
///
/// Returns `None` when the user quits (or input ends) before the last
/// item: no report exists for an abandoned checkup.
pub fn run_checkup(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> eyre::Result<Option<Report>> {
    let mut session = CheckupSession::new();
    let mut line = String::new();

    loop {
        let snapshot = session.current_state();
        match snapshot.state {
            SessionState::Complete => break,
            SessionState::Intro => {
                writeln!(output, "{INTRO}\n\nPress Enter to start.")?;
            }
            SessionState::Answering { .. } => print_question(output, &snapshot)?,
        }
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            session.abandon();
            return Ok(None);
        }

        let result = match (snapshot.state, parse_input(&line)) {
            (_, Input::Quit) => {
                session.abandon();
                return Ok(None);
            }
            (_, Input::Back) => session.go_back(),
            (SessionState::Intro, _) => session.start(),
            (_, Input::Choice(n)) if n >= 1 => match u8::try_from(n - 1) {
                Ok(value) => session.answer(value),
                Err(_) => {
                    writeln!(output, "Please choose 1-{}.", snapshot.option_labels.len())?;
                    continue;
                }
            },
            (_, Input::Choice(_) | Input::Other) => {
                writeln!(output, "Please choose 1-{}.", snapshot.option_labels.len())?;
                continue;
            }
        };

        match result {
            Ok(_) => {}
            Err(SessionError::InvalidResponse(_)) => {
                writeln!(output, "Please choose 1-{}.", snapshot.option_labels.len())?;
            }
            Err(e) => return Err(e.into()),
        }
    }

    let report = session.complete_session()?.clone();
    Ok(Some(report))
}

fn print_question(output: &mut impl Write, snapshot: &Snapshot) -> eyre::Result<()> {
    writeln!(output)?;
    if let (Some(title), Some(stem)) = (&snapshot.title, &snapshot.stem) {
        writeln!(output, "{title}: {stem}")?;
    }
    if let (Some(position), Some(count)) = (snapshot.position, snapshot.item_count) {
        writeln!(output, "Question {position} of {count}")?;
    }
    if let Some(prompt) = &snapshot.prompt {
        writeln!(output, "\n  {prompt}\n")?;
    }
    for (i, label) in snapshot.option_labels.iter().enumerate() {
        let marker = if snapshot.current_answer == Some(i as u8) {
            "*"
        } else {
            " "
        };
        writeln!(output, " {marker}{}) {label}", i + 1)?;
    }
    write!(output, "> ")?;
    Ok(())
}
