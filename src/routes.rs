use crate::models::user::Role;

/// Halaman tujuan redirect di shell UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Login,
    InvestorDashboard,
    BusinessDashboard,
    AdminPanel,
    Home,
}

impl Surface {
    /// Page path di frontend untuk surface ini.
    pub fn path(&self) -> &'static str {
        match self {
            Surface::Login => "/login.html",
            Surface::InvestorDashboard => "/investor-dashboard.html",
            Surface::BusinessDashboard => "/business-dashboard.html",
            Surface::AdminPanel => "/admin.html",
            Surface::Home => "/index.html",
        }
    }

    /// Dashboard milik sebuah role; role tidak dikenal diarahkan ke Home.
    pub fn dashboard_for(role: Option<Role>) -> Surface {
        match role {
            Some(Role::Investor) => Surface::InvestorDashboard,
            Some(Role::BusinessOwner) => Surface::BusinessDashboard,
            Some(Role::Admin) => Surface::AdminPanel,
            Some(Role::Unknown) | None => Surface::Home,
        }
    }
}

/// Seam untuk side effect navigasi. Shell UI (webview/window) yang
/// mengimplementasikan redirect sesungguhnya.
pub trait Navigator: Send + Sync {
    fn go_to(&self, surface: Surface);
}

/// Navigator yang hanya mencatat tujuan — untuk mode headless dan test.
#[derive(Default)]
pub struct RecordingNavigator {
    visited: std::sync::Mutex<Vec<Surface>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<Surface> {
        self.visited.lock().map(|v| v.clone()).unwrap_or_default()
    }

    pub fn last(&self) -> Option<Surface> {
        self.visited().last().copied()
    }
}

impl Navigator for RecordingNavigator {
    fn go_to(&self, surface: Surface) {
        if let Ok(mut v) = self.visited.lock() {
            v.push(surface);
        }
    }
}
