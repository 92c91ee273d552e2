use bovary_cache::Cache;
use std::{
	sync::atomic::{ AtomicU64, Ordering },
	time::Duration
};
use twilight_http::Client;

use crate::{ config::Config, invite::InviteCooldownGate };

const UNKNOWN_LATENCY: u64 = u64::MAX;

/// Everything event and interaction handlers share for the lifetime of the process.
pub struct Context {
	pub client: Client,
	pub cache: Cache,
	pub invite_gate: InviteCooldownGate,
	latency_millis: AtomicU64
}

impl Context {
	pub fn new(config: &Config, cache: Cache) -> Self {
		Self {
			client: Client::new(config.discord_token.clone()),
			cache,
			invite_gate: InviteCooldownGate::new(config.invite_cooldown),
			latency_millis: AtomicU64::new(UNKNOWN_LATENCY)
		}
	}

	pub fn set_latency(&self, latency: Duration) {
		let millis = u64::try_from(latency.as_millis()).unwrap_or(UNKNOWN_LATENCY - 1);
		self.latency_millis.store(millis, Ordering::Relaxed);
	}

	/// Average heartbeat latency, once the shard has measured one.
	pub fn latency(&self) -> Option<Duration> {
		match self.latency_millis.load(Ordering::Relaxed) {
			UNKNOWN_LATENCY => None,
			millis => Some(Duration::from_millis(millis))
		}
	}

	pub fn latency_text(&self) -> String {
		self.latency().map_or_else(|| "unknown".into(), |x| format!("{}ms", x.as_millis()))
	}
}
