//! User and group name lookup with numeric fallback

use std::collections::HashMap;

/// Caches uid/gid to name lookups for the lifetime of a report.
#[derive(Debug, Default)]
pub struct OwnerCache {
    users: HashMap<u32, String>,
    groups: HashMap<u32, String>,
}

impl OwnerCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the user `uid`, or the id itself if it has no name.
    pub fn user_name(&mut self, uid: u32) -> String {
        self.users
            .entry(uid)
            .or_insert_with(|| lookup_user(uid).unwrap_or_else(|| uid.to_string()))
            .clone()
    }

    /// Name of the group `gid`, or the id itself if it has no name.
    pub fn group_name(&mut self, gid: u32) -> String {
        self.groups
            .entry(gid)
            .or_insert_with(|| lookup_group(gid).unwrap_or_else(|| gid.to_string()))
            .clone()
    }
}

#[cfg(unix)]
fn lookup_user(uid: u32) -> Option<String> {
    use nix::unistd::{Uid, User};
    match User::from_uid(Uid::from_raw(uid)) {
        Ok(user) => user.map(|u| u.name),
        Err(e) => {
            log::debug!("user lookup for uid {uid} failed: {e}");
            None
        }
    }
}

#[cfg(unix)]
fn lookup_group(gid: u32) -> Option<String> {
    use nix::unistd::{Gid, Group};
    match Group::from_gid(Gid::from_raw(gid)) {
        Ok(group) => group.map(|g| g.name),
        Err(e) => {
            log::debug!("group lookup for gid {gid} failed: {e}");
            None
        }
    }
}

#[cfg(not(unix))]
fn lookup_user(_uid: u32) -> Option<String> {
    None
}

#[cfg(not(unix))]
fn lookup_group(_gid: u32) -> Option<String> {
    None
}
