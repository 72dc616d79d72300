//! Final actions of each wizard.
//!
//! Both run the last step's validation first. The resume is saved and hands
//! off to the chat screen; the job posting is only logged and pops back.

use tracing::{error, info};

use crate::errors::WizardError;
use crate::form::job_posting::JobPostingRecord;
use crate::form::resume::ResumeRecord;
use crate::form::schema::{FormField, FormRecord};
use crate::form::wizard::{Advance, Wizard};
use crate::navigation::{Screen, Transition};
use crate::storage::KeyValueStore;

/// Fails unless the wizard is on its last step and that step validates.
pub fn ensure_submittable<R: FormRecord>(wizard: &mut Wizard<R>) -> Result<(), WizardError> {
    if !wizard.is_last_step() {
        return Err(WizardError::NotAtFinalStep {
            current: wizard.current_step() + 1,
            total: wizard.steps().len(),
        });
    }
    match wizard.advance() {
        Advance::Blocked { invalid } => Err(WizardError::StepIncomplete(
            invalid.into_iter().map(|f| f.name().to_string()).collect(),
        )),
        Advance::Complete | Advance::Moved { .. } => Ok(()),
    }
}

/// Saves the resume and returns the hand-off to the chat screen.
///
/// A failed write is logged and returned; the caller stays on the form.
pub async fn submit_resume(
    wizard: &mut Wizard<ResumeRecord>,
    store: &dyn KeyValueStore,
) -> Result<Transition, WizardError> {
    ensure_submittable(wizard)?;

    if let Err(e) = wizard.persist(store).await {
        error!(error = %e, "failed to save resume");
        return Err(e);
    }

    let name = wizard.record().name.clone();
    info!(name = %name, "resume saved");
    Ok(Transition::replace(Screen::Chat).with_name(name))
}

/// Logs the job posting and returns to the previous screen.
pub fn submit_job_posting(wizard: &mut Wizard<JobPostingRecord>) -> Result<Transition, WizardError> {
    ensure_submittable(wizard)?;

    let payload = serde_json::to_string(wizard.record())?;
    info!(posting = %payload, "job posting submitted");
    Ok(Transition::back())
}
