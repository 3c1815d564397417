pub mod interview;
pub mod resume;

use serde::Deserialize;
use uuid::Uuid;

/// Owner of the records being read or changed. Carried explicitly on every
/// request in place of an authenticated session.
#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}
