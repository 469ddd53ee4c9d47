use crate::types::{HostFlags, HostId};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Host {
    pub host_id: HostId,
    /// Technical name of the host (`host`).
    pub hostname: String,
    /// Visible name of the host (`name`).
    pub display_name: String,
    /// Raw `flags` value, see [`Host::origin`].
    pub flags: i64,
}

impl Host {
    pub fn origin(&self) -> HostFlags {
        HostFlags::from(self.flags)
    }
}
