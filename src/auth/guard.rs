use std::sync::Arc;

use crate::auth::session::SessionStore;
use crate::log_debug;
use crate::models::user::Role;
use crate::routes::{Navigator, Surface};

/// Gate di entry point halaman terproteksi.
///
/// Keputusan murni dari state SessionStore; satu-satunya side effect
/// adalah redirect lewat Navigator. Tidak ada network call.
pub struct AuthGuard {
    session: Arc<SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl AuthGuard {
    pub fn new(session: Arc<SessionStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self { session, navigator }
    }

    /// Cek akses halaman. `allowed_roles = None` berarti cukup login saja.
    ///
    /// - Belum login → redirect ke Login, false.
    /// - Role tidak diizinkan → redirect ke dashboard milik role itu
    ///   (role tidak dikenal → Home), false.
    /// - Selain itu → true, halaman lanjut render.
    pub fn require_auth(&self, allowed_roles: Option<&[Role]>) -> bool {
        if !self.session.is_authenticated() {
            self.navigator.go_to(Surface::Login);
            return false;
        }

        if let Some(allowed) = allowed_roles {
            let role = self.session.identity().map(|i| i.role);
            let permitted = role.map(|r| allowed.contains(&r)).unwrap_or(false);
            if !permitted {
                log_debug!(
                    "GUARD",
                    "Role not permitted for page",
                    serde_json::json!({ "role": role.map(|r| r.as_str()) })
                );
                self.navigator.go_to(Surface::dashboard_for(role));
                return false;
            }
        }

        true
    }
}
