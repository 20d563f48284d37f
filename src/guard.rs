//! Keeps `log.showSignature` off while bumptag reads history
//!
//! Signature verification output would otherwise be interleaved with the
//! `git log` text the resolver parses. The guard lifecycle:
//!
//! ```text
//! arm()  -- save local value, force "false" -->  armed
//! armed  -- disarm() | Drop | interrupt     -->  restored (exactly once)
//! ```

use crate::error::{BumptagError, Result};
use crate::git::{ConfigScope, VersionControl};
use crate::ui;
use std::sync::{Arc, Once};
use tracing::{debug, warn};

/// Repository setting that makes `git log` verify and print signatures
pub const SHOW_SIGNATURE_KEY: &str = "log.showSignature";

/// Exit status used when an interrupt arrives while the guard is armed
pub const INTERRUPTED_EXIT_CODE: i32 = 42;

/// Disables signature display for its lifetime and restores it afterwards
pub struct SignatureGuard<V: VersionControl + ?Sized> {
    vcs: Arc<V>,
    saved: Option<String>,
    restore: Once,
}

impl<V: VersionControl + ?Sized> SignatureGuard<V> {
    /// Save the current local value and switch signature display off.
    ///
    /// A failed read counts as "not set". A failed write aborts with a
    /// [BumptagError::Config] before anything else happens.
    pub fn arm(vcs: Arc<V>) -> Result<Self> {
        let saved = match vcs.config_get(SHOW_SIGNATURE_KEY, ConfigScope::Local) {
            Ok(value) => value.filter(|v| !v.is_empty()),
            Err(e) => {
                debug!(error = %e, "could not read {}; treating it as unset", SHOW_SIGNATURE_KEY);
                None
            }
        };
        vcs.config_set_local(SHOW_SIGNATURE_KEY, "false")
            .map_err(|e| BumptagError::config(format!("cannot disable {}: {}", SHOW_SIGNATURE_KEY, e)))?;
        debug!(saved = ?saved, "signature display disabled");

        Ok(SignatureGuard {
            vcs,
            saved,
            restore: Once::new(),
        })
    }

    /// The local value that will be restored (`None` = key gets unset)
    pub fn saved(&self) -> Option<&str> {
        self.saved.as_deref()
    }

    /// Put the saved value back.
    ///
    /// Only the first call does any work, whichever path gets here first;
    /// later calls return `Ok(())`.
    pub fn disarm(&self) -> Result<()> {
        let mut outcome = Ok(());
        self.restore.call_once(|| {
            outcome = restore_setting(self.vcs.as_ref(), self.saved.as_deref());
        });
        outcome
    }

    /// Restore the setting once `outcome` is known and combine both results.
    ///
    /// A failed restore is returned when `outcome` succeeded. When `outcome`
    /// already failed, the restore failure is reported to the user and the
    /// original error is returned.
    pub fn finish<T, E>(&self, outcome: std::result::Result<T, E>) -> std::result::Result<T, E>
    where
        E: From<BumptagError>,
    {
        let restored = self.disarm();
        match (outcome, restored) {
            (Ok(value), Ok(())) => Ok(value),
            (Ok(_), Err(e)) => Err(E::from(e)),
            (Err(e), Ok(())) => Err(e),
            (Err(e), Err(restore_error)) => {
                ui::display_error(&restore_error.to_string());
                Err(e)
            }
        }
    }
}

impl<V: VersionControl + ?Sized> Drop for SignatureGuard<V> {
    fn drop(&mut self) {
        if let Err(e) = self.disarm() {
            warn!(error = %e, "failed to restore {}", SHOW_SIGNATURE_KEY);
        }
    }
}

fn restore_setting<V: VersionControl + ?Sized>(vcs: &V, saved: Option<&str>) -> Result<()> {
    let restored = match saved {
        Some(value) => vcs.config_set_local(SHOW_SIGNATURE_KEY, value),
        None => vcs.config_unset_local(SHOW_SIGNATURE_KEY),
    };
    restored.map_err(|e| BumptagError::config(format!("cannot restore {}: {}", SHOW_SIGNATURE_KEY, e)))?;
    debug!(saved = ?saved, "signature display restored");
    Ok(())
}
