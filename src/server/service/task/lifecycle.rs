//! Task status transitions.
//!
//! Status moves one step at a time: `Pendente` to `Em Andamento` to `Concluída`. A
//! completed task can be reopened back to `Em Andamento`. Anything else is rejected.

use chrono::NaiveDate;
use entity::sea_orm_active_enums::{TaskStatus, TaskStatus::*};
use sea_orm::ActiveEnum;

use crate::server::error::{validation::ValidationError, Error};

/// Kind of a permitted status change, each gated by a different permission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Moving the task forward, allowed to whoever can progress it
    Progress,
    /// Taking a completed task back to in progress, allowed to whoever can edit it
    Reopen,
}

/// Classify a status change.
///
/// # Returns
/// - `Ok(None)` - Status is unchanged
/// - `Ok(Some(Transition))` - Permitted change
/// - `Err(Error::ValidationError)` - Change is not permitted
pub fn classify(from: TaskStatus, to: TaskStatus) -> Result<Option<Transition>, Error> {
    match (from, to) {
        (from, to) if from == to => Ok(None),
        (Pending, InProgress) | (InProgress, Completed) => Ok(Some(Transition::Progress)),
        (Completed, InProgress) => Ok(Some(Transition::Reopen)),
        (from, to) => Err(ValidationError::InvalidTaskTransition {
            from: from.to_value(),
            to: to.to_value(),
        }
        .into()),
    }
}

/// Completion date that goes with a status: today when completed, none otherwise.
pub fn completion_date_for(status: TaskStatus, today: NaiveDate) -> Option<NaiveDate> {
    (status == Completed).then_some(today)
}
