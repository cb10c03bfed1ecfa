//! The per-conversation slot-filling session.

use serde::{Deserialize, Serialize};

use crate::calculation::calculate;
use crate::config::RateTable;
use crate::error::{EngineError, EngineResult};
use crate::models::{CompensationRequest, Estimate};

/// The states of the slot-filling dialogue, in required order.
///
/// A session moves strictly forward through the four questions; the driver
/// must not ask for the next datum until the current one is resolved, and
/// must not invoke the calculator before [`SlotState::ReadyToInvoke`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotState {
    /// Waiting for the disability rating.
    AwaitingRating,
    /// Waiting for the dependent-spouse answer.
    AwaitingSpouseStatus,
    /// Waiting for the dependent-children count.
    AwaitingChildrenCount,
    /// Waiting for the dependent-parents count.
    AwaitingParentsCount,
    /// All slots filled; the calculator may be invoked exactly once.
    ReadyToInvoke,
    /// The calculator has been invoked successfully.
    Completed,
}

impl SlotState {
    /// The slot name used in out-of-order error messages.
    fn slot_name(self) -> &'static str {
        match self {
            Self::AwaitingRating => "rating",
            Self::AwaitingSpouseStatus => "spouse_status",
            Self::AwaitingChildrenCount => "children_count",
            Self::AwaitingParentsCount => "parents_count",
            Self::ReadyToInvoke => "ready_to_invoke",
            Self::Completed => "completed",
        }
    }
}

/// One conversation's slot-filling state.
///
/// Each active chat session owns an independent `EstimatorSession`; no state
/// is shared across conversations. The session enforces the question order,
/// holds the collected slots, and runs exactly one calculation once ready.
/// After a calculation error it resets to [`SlotState::AwaitingRating`] so
/// the user can retry; the driver never guesses missing data.
///
/// # Example
///
/// ```
/// use comp_engine::config::RateTable;
/// use comp_engine::protocol::{EstimatorSession, SlotState};
///
/// let table = RateTable::builtin().unwrap();
/// let mut session = EstimatorSession::new();
///
/// assert_eq!(session.prompt(), Some("What is your VA disability rating?"));
/// session.provide_rating(70).unwrap();
/// session.provide_spouse_status(true).unwrap();
/// session.provide_children_count(2).unwrap();
/// session.provide_parents_count(0).unwrap();
/// assert_eq!(session.state(), SlotState::ReadyToInvoke);
///
/// let estimate = session.invoke(&table).unwrap();
/// assert_eq!(estimate.final_amount.to_string(), "2016.28");
/// assert_eq!(session.state(), SlotState::Completed);
/// ```
#[derive(Debug, Clone)]
pub struct EstimatorSession {
    state: SlotState,
    rating: Option<i64>,
    has_spouse: Option<bool>,
    children_count: Option<u32>,
    parents_count: Option<u32>,
    spouse_needs_aid: bool,
}

impl EstimatorSession {
    /// Creates a fresh session awaiting the rating.
    pub fn new() -> Self {
        Self {
            state: SlotState::AwaitingRating,
            rating: None,
            has_spouse: None,
            children_count: None,
            parents_count: None,
            spouse_needs_aid: false,
        }
    }

    /// Returns the current dialogue state.
    pub fn state(&self) -> SlotState {
        self.state
    }

    /// Returns the scripted question for the slot currently awaited, or
    /// `None` once all slots are filled.
    pub fn prompt(&self) -> Option<&'static str> {
        match self.state {
            SlotState::AwaitingRating => Some("What is your VA disability rating?"),
            SlotState::AwaitingSpouseStatus => Some("Do you have a dependent spouse?"),
            SlotState::AwaitingChildrenCount => {
                Some("How many dependent children do you have?")
            }
            SlotState::AwaitingParentsCount => Some("How many dependent parents do you have?"),
            SlotState::ReadyToInvoke | SlotState::Completed => None,
        }
    }

    /// Records the disability rating. Valid only in the first state.
    ///
    /// The rating is stored as extracted; validation happens at calculation
    /// time so an invalid rating surfaces as the user-facing
    /// `InvalidRating` message, not as a protocol error.
    pub fn provide_rating(&mut self, rating: i64) -> EngineResult<()> {
        self.expect(SlotState::AwaitingRating)?;
        self.rating = Some(rating);
        self.state = SlotState::AwaitingSpouseStatus;
        Ok(())
    }

    /// Records whether the veteran has a dependent spouse.
    pub fn provide_spouse_status(&mut self, has_spouse: bool) -> EngineResult<()> {
        self.expect(SlotState::AwaitingSpouseStatus)?;
        self.has_spouse = Some(has_spouse);
        self.state = SlotState::AwaitingChildrenCount;
        Ok(())
    }

    /// Records the number of dependent children.
    pub fn provide_children_count(&mut self, count: u32) -> EngineResult<()> {
        self.expect(SlotState::AwaitingChildrenCount)?;
        self.children_count = Some(count);
        self.state = SlotState::AwaitingParentsCount;
        Ok(())
    }

    /// Records the number of dependent parents and readies the session.
    pub fn provide_parents_count(&mut self, count: u32) -> EngineResult<()> {
        self.expect(SlotState::AwaitingParentsCount)?;
        self.parents_count = Some(count);
        self.state = SlotState::ReadyToInvoke;
        Ok(())
    }

    /// Records that the spouse qualifies for Aid and Attendance.
    ///
    /// Out-of-band: accepted in any state, only if the user spontaneously
    /// raises it, and never blocks the dialogue. Defaults to false.
    pub fn note_spouse_aid(&mut self, needs_aid: bool) {
        self.spouse_needs_aid = needs_aid;
    }

    /// Runs the calculation once all slots are filled.
    ///
    /// Valid only in [`SlotState::ReadyToInvoke`]; any earlier state is a
    /// [`EngineError::SessionNotReady`] protocol error. On success the
    /// session transitions to [`SlotState::Completed`] so the calculator
    /// cannot be invoked twice. On a calculation error the session resets
    /// to [`SlotState::AwaitingRating`] and the error (whose `Display` is
    /// the full user-facing response) is returned.
    pub fn invoke(&mut self, table: &RateTable) -> EngineResult<Estimate> {
        if self.state != SlotState::ReadyToInvoke {
            return Err(EngineError::SessionNotReady {
                state: self.state.slot_name().to_string(),
            });
        }

        let request = self.request()?;
        match calculate(&request, table) {
            Ok(estimate) => {
                self.state = SlotState::Completed;
                Ok(estimate)
            }
            Err(error) => {
                self.reset();
                Err(error)
            }
        }
    }

    /// Clears all slots and returns to the first question.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Assembles the request from the filled slots.
    fn request(&self) -> EngineResult<CompensationRequest> {
        let not_ready = || EngineError::SessionNotReady {
            state: self.state.slot_name().to_string(),
        };
        Ok(CompensationRequest {
            rating: self.rating.ok_or_else(not_ready)?,
            has_spouse: self.has_spouse.ok_or_else(not_ready)?,
            children_count: self.children_count.ok_or_else(not_ready)?,
            parents_count: self.parents_count.ok_or_else(not_ready)?,
            spouse_needs_aid: self.spouse_needs_aid,
        })
    }

    /// Rejects a slot provided while a different one is awaited.
    fn expect(&self, slot: SlotState) -> EngineResult<()> {
        if self.state != slot {
            return Err(EngineError::SlotOutOfOrder {
                expected: self.state.slot_name().to_string(),
                got: slot.slot_name().to_string(),
            });
        }
        Ok(())
    }
}

impl Default for EstimatorSession {
    fn default() -> Self {
        Self::new()
    }
}
