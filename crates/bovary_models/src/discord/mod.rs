pub mod message;
pub use message::MessageModel;
