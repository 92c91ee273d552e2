use chrono::{ DateTime, TimeDelta, Utc };
use dashmap::{ mapref::entry::Entry, DashMap };
use std::fmt;
use twilight_model::id::{ marker::UserMarker, Id };

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InviteOutcome {
	Accepted,
	Rejected {
		remaining: TimeDelta
	}
}

impl InviteOutcome {
	pub fn is_accepted(&self) -> bool {
		matches!(self, Self::Accepted)
	}
}

/// Time left on a cooldown, displayed as whole minutes and seconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Remaining(pub TimeDelta);

impl fmt::Display for Remaining {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let seconds = self.0.num_seconds().max(0);
		write!(f, "{}m {}s", seconds / 60, seconds % 60)
	}
}

/// Admits at most one invite request per user per cooldown window.
///
/// The check and the write for a user happen under the same map entry lock, so two
/// concurrent presses from one user can never both be admitted.
pub struct InviteCooldownGate {
	window: TimeDelta,
	last_requests: DashMap<Id<UserMarker>, DateTime<Utc>>
}

impl InviteCooldownGate {
	pub fn new(window: TimeDelta) -> Self {
		Self {
			window,
			last_requests: DashMap::new()
		}
	}

	pub fn window(&self) -> TimeDelta {
		self.window
	}

	pub fn request_invite(&self, user_id: Id<UserMarker>, now: DateTime<Utc>) -> InviteOutcome {
		match self.last_requests.entry(user_id) {
			Entry::Occupied(mut entry) => {
				// a clock that went backwards counts as no time having passed
				let elapsed = (now - *entry.get()).max(TimeDelta::zero());
				if elapsed < self.window {
					return InviteOutcome::Rejected {
						remaining: self.window - elapsed
					};
				}
				entry.insert(now);
			},
			Entry::Vacant(entry) => {
				entry.insert(now);
			}
		}

		InviteOutcome::Accepted
	}

	/// Drops users whose window has elapsed. Their next request is admitted either way.
	pub fn sweep(&self, now: DateTime<Utc>) -> usize {
		let before = self.last_requests.len();
		self.last_requests.retain(|_, last_request| now - *last_request < self.window);

		before.saturating_sub(self.last_requests.len())
	}

	pub fn close(&self) -> usize {
		let count = self.last_requests.len();
		self.last_requests.clear();

		count
	}

	pub fn len(&self) -> usize {
		self.last_requests.len()
	}

	pub fn is_empty(&self) -> bool {
		self.last_requests.is_empty()
	}
}
