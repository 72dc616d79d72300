//! Line-based terminal front end for the wizards.
//!
//! Each step prompts its fields in order (Enter keeps the current value, `-`
//! clears it), then asks whether to go on, go back, edit again or quit.

use std::fmt::Display;
use std::io::{BufRead, Write};

use anyhow::Result;

use career_wizard::form::{
    Advance, FormField, FormRecord, JobPostingRecord, ResumeRecord, Wizard,
};
use career_wizard::navigation::Transition;
use career_wizard::state::AppState;
use career_wizard::submit::{submit_job_posting, submit_resume};

const PROGRESS_WIDTH: usize = 20;

pub struct Console<I, O> {
    input: I,
    output: O,
}

enum Outcome {
    Ready,
    Quit,
}

impl<I: BufRead, O: Write> Console<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// `None` on end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.prompt(&format!("{question} [y/N] "))?;
        Ok(matches!(
            answer.as_deref().map(str::trim),
            Some("y" | "Y" | "yes")
        ))
    }

    fn show_header<R: FormRecord>(&mut self, wizard: &Wizard<R>) -> Result<()> {
        let step = wizard.step();
        let filled = (wizard.progress() / 100.0 * PROGRESS_WIDTH as f64).round() as usize;
        let indicator: Vec<String> = wizard
            .step_states()
            .iter()
            .map(|s| match (s.active, s.completed) {
                (true, _) => format!("[{}]", s.label),
                (_, true) => format!("✓ {}", s.label),
                _ => s.label.to_string(),
            })
            .collect();

        self.say("")?;
        self.say(indicator.join("  >  "))?;
        self.say(format!(
            "{} {}  ({}/{})  [{}{}] {:.0}%",
            step.icon,
            step.label,
            wizard.current_step() + 1,
            wizard.steps().len(),
            "#".repeat(filled),
            "-".repeat(PROGRESS_WIDTH - filled),
            wizard.progress()
        ))
    }

    /// Prompts one field. Returns `false` on end of input.
    fn edit_field<R: FormRecord>(&mut self, wizard: &mut Wizard<R>, field: R::Field) -> Result<bool> {
        let marker = if wizard.is_required(field) { " *" } else { "" };
        let current = wizard.record().get(field).to_string();

        if let Some(choices) = field.choices() {
            let options: Vec<String> = choices
                .iter()
                .enumerate()
                .map(|(i, c)| format!("{}) {}", i + 1, c.label))
                .collect();
            self.say(format!("  {}{marker}: {}", field.label(), options.join("  ")))?;
        }

        let shown = field.choice_label(&current).unwrap_or(current.as_str());
        let Some(answer) = self.prompt(&format!("  {}{marker} [{shown}]: ", field.label()))? else {
            return Ok(false);
        };
        let answer = answer.trim();

        match (answer, field.choices()) {
            ("", _) => wizard.blur(field),
            ("-", _) => {
                wizard.update(field, "");
                wizard.blur(field);
            }
            (_, Some(choices)) => {
                let value = answer
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| choices.get(i))
                    .map(|c| c.value)
                    .unwrap_or(answer);
                if let Err(e) = wizard.select(field, value) {
                    self.say(format!("    ! {e}"))?;
                }
            }
            (_, None) => {
                wizard.update(field, answer);
                wizard.blur(field);
            }
        }

        if let Some(err) = wizard.visible_error(field) {
            self.say(format!("    ! {err}"))?;
        }
        Ok(true)
    }

    fn show_errors<R: FormRecord>(&mut self, wizard: &Wizard<R>) -> Result<()> {
        self.say("Please fix the following before continuing:")?;
        for (field, err) in wizard.errors() {
            self.say(format!("  - {}: {err}", field.label()))?;
        }
        Ok(())
    }

    fn show_preview<R: FormRecord>(&mut self, wizard: &Wizard<R>) -> Result<()> {
        self.say("")?;
        self.say("Final review")?;
        for row in wizard.preview() {
            self.say(format!("  {:<26}{}", row.label, row.value))?;
        }
        Ok(())
    }

    /// Walks the steps until the last one validates (`Ready`) or the user quits.
    fn fill_steps<R: FormRecord>(&mut self, wizard: &mut Wizard<R>) -> Result<Outcome> {
        loop {
            self.show_header(wizard)?;
            for &field in wizard.step().fields {
                if !self.edit_field(wizard, field)? {
                    return Ok(Outcome::Quit);
                }
            }

            let forward = if wizard.is_last_step() { "[s]ave" } else { "[n]ext" };
            let ready = if wizard.can_advance() { "" } else { " (required fields missing)" };
            let Some(command) =
                self.prompt(&format!("{forward}{ready}, [b]ack, [e]dit, [q]uit: "))?
            else {
                return Ok(Outcome::Quit);
            };

            match command.trim() {
                "q" => return Ok(Outcome::Quit),
                "b" => {
                    wizard.retreat();
                }
                "n" | "s" | "" => match wizard.advance() {
                    Advance::Complete => return Ok(Outcome::Ready),
                    Advance::Moved { .. } => {}
                    Advance::Blocked { .. } => self.show_errors(wizard)?,
                },
                _ => {}
            }
        }
    }
}

/// Runs the resume wizard: hydrate, fill, review, save.
/// A failed save is reported and may be retried.
pub async fn run_resume<I: BufRead, O: Write>(
    state: &AppState,
    console: &mut Console<I, O>,
) -> Result<Option<Transition>> {
    let mut wizard = Wizard::<ResumeRecord>::new();
    if wizard.hydrate_from(state.store.as_ref()).await {
        console.say("Loaded your saved resume.")?;
    }

    while let Outcome::Ready = console.fill_steps(&mut wizard)? {
        console.show_preview(&wizard)?;
        if !console.confirm("Save this resume?")? {
            continue;
        }
        loop {
            match submit_resume(&mut wizard, state.store.as_ref()).await {
                Ok(transition) => return Ok(Some(transition)),
                Err(e) => {
                    console.say(format!("Could not save the resume: {e}"))?;
                    if !console.confirm("Retry?")? {
                        break;
                    }
                }
            }
        }
    }
    Ok(None)
}

pub fn run_job_posting<I: BufRead, O: Write>(
    console: &mut Console<I, O>,
) -> Result<Option<Transition>> {
    let mut wizard = Wizard::<JobPostingRecord>::new();
    while let Outcome::Ready = console.fill_steps(&mut wizard)? {
        match submit_job_posting(&mut wizard) {
            Ok(transition) => return Ok(Some(transition)),
            Err(e) => console.say(format!("Could not submit: {e}"))?,
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::sync::Arc;

    use career_wizard::config::{Config, FormKind};
    use career_wizard::navigation::Screen;
    use career_wizard::persistence::load_snapshot;
    use career_wizard::storage::MemoryStore;

    fn console(script: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn memory_state() -> AppState {
        let config = Config {
            store_path: "unused.json".into(),
            form: FormKind::Resume,
            rust_log: "info".into(),
        };
        AppState::with_store(config, Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_job_posting_script_submits() {
        let script = "Acme\nEngineer\nBusan\n2026.10 ~ 2026.11\nn\n\
                      Rust\nCurious\nTokio\nn\n\
                      Build services\ns\n";
        let mut c = console(script);
        let transition = run_job_posting(&mut c).unwrap();
        assert_eq!(transition, Some(Transition::Back));
    }

    #[test]
    fn test_blank_required_field_blocks_next() {
        // second pass fills the missing field, then quits
        let script = "Acme\n\nBusan\nsoon\nn\n\nEngineer\n\n\nq\n";
        let mut c = console(script);
        assert_eq!(run_job_posting(&mut c).unwrap(), None);
        let out = String::from_utf8(c.output).unwrap();
        assert!(out.contains("Please fix the following"));
        assert!(out.contains("Job title: This field is required"));
    }

    #[test]
    fn test_end_of_input_quits() {
        let mut c = console("Acme\n");
        assert_eq!(run_job_posting(&mut c).unwrap(), None);
    }

    #[tokio::test]
    async fn test_resume_script_saves_and_hands_off() {
        let state = memory_state();
        let script = "Kim\nkim@test.com\nSeoul\n1\n1990\n010-1234-5678\n\nn\n\
                      SNU\nCS\n2008 ~ 2012\n1\n\nn\n\
                      Backend developer\nNew grad\n\nn\n\
                      Seoul\n40M\n\n\ns\ny\n";
        let mut c = console(script);
        let transition = run_resume(&state, &mut c).await.unwrap();
        assert_eq!(
            transition,
            Some(Transition::replace(Screen::Chat).with_name("Kim"))
        );

        let saved: Option<ResumeRecord> = load_snapshot(state.store.as_ref()).await.unwrap();
        let saved = saved.unwrap();
        assert_eq!(saved.gender, "male");
        assert_eq!(saved.attendance_status, "graduated");
        assert_eq!(saved.mobile, "010-1234-5678");
        assert!(saved.employment_type.is_empty());
    }
}
