use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::encryption;
use crate::errors::AppError;
use crate::models::user::Identity;

/// Record yang dipersist ke disk. Token dan identity sengaja satu record
/// supaya ditulis atomik bersama (temp file + rename).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SessionRecord {
    /// Bearer token, terenkripsi at rest
    token: Option<String>,
    identity: Option<Identity>,
}

#[derive(Debug, Default)]
struct SessionState {
    token: Option<String>,
    identity: Option<Identity>,
}

/// Penyimpanan sesi yang bertahan lintas restart aplikasi.
///
/// `is_authenticated` hanya cek kehadiran token — validitas dan expiry
/// adalah urusan server (ditandai lewat response 401).
pub struct SessionStore {
    path: PathBuf,
    state: Mutex<SessionState>,
}

impl SessionStore {
    /// Buka session store dari file. File rusak atau tidak ada
    /// diperlakukan sebagai "belum login", tidak pernah error.
    pub fn open(path: &Path) -> Self {
        let state = Self::load(path).unwrap_or_default();
        Self {
            path: path.to_path_buf(),
            state: Mutex::new(state),
        }
    }

    fn load(path: &Path) -> Option<SessionState> {
        let raw = fs::read_to_string(path).ok()?;
        let record: SessionRecord = serde_json::from_str(&raw).ok()?;

        // Token yang gagal didekripsi (key berubah, file disalin dari mesin
        // lain) dianggap tidak ada.
        let token = record
            .token
            .as_deref()
            .and_then(|t| encryption::decrypt(t).ok());

        Some(SessionState {
            identity: if token.is_some() { record.identity } else { None },
            token,
        })
    }

    /// Token saat ini, kalau ada.
    pub fn token(&self) -> Option<String> {
        self.state.lock().ok().and_then(|s| s.token.clone())
    }

    /// Simpan token apa adanya (tanpa validasi bentuk).
    pub fn set_token(&self, token: &str) -> Result<(), AppError> {
        {
            let mut state = self.lock_state()?;
            state.token = Some(token.to_string());
        }
        self.persist()
    }

    /// Identity yang di-cache, kalau ada. Gagal baca = absent.
    pub fn identity(&self) -> Option<Identity> {
        self.state.lock().ok().and_then(|s| s.identity.clone())
    }

    /// Simpan identity apa adanya.
    pub fn set_identity(&self, identity: Identity) -> Result<(), AppError> {
        {
            let mut state = self.lock_state()?;
            state.identity = Some(identity);
        }
        self.persist()
    }

    /// Hapus token dan identity sekaligus. Idempotent.
    pub fn clear(&self) -> Result<(), AppError> {
        {
            let mut state = self.lock_state()?;
            state.token = None;
            state.identity = None;
        }
        self.persist()
    }

    /// True iff token ada. Murni presence check.
    pub fn is_authenticated(&self) -> bool {
        self.state.lock().map(|s| s.token.is_some()).unwrap_or(false)
    }

    fn lock_state(&self) -> Result<std::sync::MutexGuard<'_, SessionState>, AppError> {
        self.state.lock().map_err(|_| {
            AppError::Storage(std::io::Error::new(ErrorKind::Other, "session lock poisoned"))
        })
    }

    /// Tulis record ke disk secara atomik: temp file lalu rename.
    fn persist(&self) -> Result<(), AppError> {
        let record = {
            let state = self.lock_state()?;
            SessionRecord {
                token: match state.token.as_deref() {
                    Some(t) => Some(encryption::encrypt(t).map_err(AppError::Encryption)?),
                    None => None,
                },
                identity: state.identity.clone(),
            }
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let payload = serde_json::to_string_pretty(&record)
            .map_err(|e| AppError::Storage(std::io::Error::new(ErrorKind::InvalidData, e)))?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, payload)?;
        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }
}
