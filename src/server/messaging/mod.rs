/// Messaging module: notification payloads, delivery boundary, and snap builders.

pub mod messages;
pub mod remote_point;
pub mod snap_service;
