use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const AUTH_DIR: &str = "vibecheck";
const SESSION_FILE: &str = "session.json";

/// Signed-in account, as reported by the identity endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub github_username: Option<String>,
}

/// Bearer token plus the profile it belongs to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub user: UserProfile,
}

/// Persistent session storage in the user config directory.
///
/// Identity is an explicit handle: whoever needs the current user receives a
/// `Session` loaded from here, there is no ambient global state. `save` is
/// the subscribe step of the lifecycle, `clear` the teardown.
pub struct AuthStore {
    path: PathBuf,
}

impl AuthStore {
    pub fn open() -> Result<Self> {
        let dir = dirs::config_dir()
            .ok_or_else(|| anyhow!("No user config directory"))?
            .join(AUTH_DIR);
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
        Ok(Self {
            path: dir.join(SESSION_FILE),
        })
    }

    pub fn load(&self) -> Result<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let session = serde_json::from_str(&content)
            .with_context(|| format!("Malformed session at {}", self.path.display()))?;
        Ok(Some(session))
    }

    pub fn save(&self, session: &Session) -> Result<()> {
        std::fs::write(&self.path, serde_json::to_string_pretty(session)?)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }

    /// Remove the stored session. Returns whether one existed.
    pub fn clear(&self) -> Result<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        std::fs::remove_file(&self.path)
            .with_context(|| format!("Failed to remove {}", self.path.display()))?;
        Ok(true)
    }
}
