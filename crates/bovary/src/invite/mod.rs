pub mod gate;
pub use gate::{ InviteCooldownGate, InviteOutcome, Remaining };

pub mod notify;
pub use notify::{ notify_staff, DiscordStaffNotifier };
