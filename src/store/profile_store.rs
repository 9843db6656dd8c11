use anyhow::Result;
use tracing::{info, warn};

use crate::profile::{ProfilePatch, UserProfile};
use crate::store::json_store::JsonStore;
use crate::store::schema::{self, Decoded, PROFILE_KEY};

/// Owns the single profile record: the in-memory copy and, when a data
/// directory is available, its persisted form.
pub struct ProfileStore {
    backend: Option<JsonStore>,
    current: Option<UserProfile>,
}

impl ProfileStore {
    pub fn new(backend: Option<JsonStore>) -> Self {
        Self {
            backend,
            current: None,
        }
    }

    /// Store with no persistence. Everything still works for the session.
    pub fn in_memory() -> Self {
        Self::new(None)
    }

    pub fn current(&self) -> Option<&UserProfile> {
        self.current.as_ref()
    }

    /// Read the persisted record. Anything unreadable is treated as absent.
    pub fn load(&mut self) -> Option<&UserProfile> {
        let backend = self.backend.as_ref()?;
        let raw = match backend.read(PROFILE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, "could not read stored profile");
                return None;
            }
        };

        match schema::decode(&raw) {
            Ok(Decoded::Current(profile)) => {
                info!(role = ?profile.user_type, "restored stored profile");
                self.current = Some(profile);
            }
            Ok(Decoded::Upgraded(profile)) => {
                info!(role = ?profile.user_type, "upgraded legacy profile record");
                self.current = Some(profile);
                if let Err(e) = self.persist() {
                    warn!(error = %e, "could not rewrite upgraded profile");
                }
            }
            Err(e) => {
                warn!(error = %e, "ignoring stored profile");
                return None;
            }
        }
        self.current.as_ref()
    }

    /// Replace the in-memory profile without writing it out.
    pub fn set(&mut self, profile: UserProfile) {
        self.current = Some(profile);
    }

    /// Replace the profile and persist it.
    pub fn save(&mut self, profile: UserProfile) -> Result<()> {
        self.current = Some(profile);
        self.persist()
    }

    /// Write the current profile out. Overwrites whatever was stored.
    pub fn persist(&self) -> Result<()> {
        let (Some(backend), Some(profile)) = (&self.backend, &self.current) else {
            return Ok(());
        };
        backend.write(PROFILE_KEY, &schema::encode(profile)?)?;
        Ok(())
    }

    /// Merge `patch` into the current profile. Returns false when there is no
    /// profile to patch.
    pub fn patch(&mut self, patch: &ProfilePatch) -> bool {
        match self.current.as_mut() {
            Some(profile) => {
                patch.apply(profile);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) -> Result<()> {
        self.current = None;
        if let Some(ref backend) = self.backend {
            backend.remove(PROFILE_KEY)?;
        }
        Ok(())
    }
}
