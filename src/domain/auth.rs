//! Identity of a signed-in dashboard user.

use serde::{Deserialize, Serialize};

/// User established by the external sign-in flow.
///
/// The dashboard only checks for presence of a user; it never verifies
/// credentials itself.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub uid: String,
    pub name: String,
    pub email: String,
}
