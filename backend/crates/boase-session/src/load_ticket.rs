use uuid::Uuid;

/// Captured at the start of an async operation; results are only applied if
/// the epoch and identity still match when they arrive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub epoch: u64,
    pub user_id: Uuid,
}
