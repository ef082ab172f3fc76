//! Client-side route surface.
//!
//! A fixed set of path-based screens plus the authentication gate: the sign-in
//! and sign-up screens are public, every other known path requires a session,
//! and unmatched paths redirect to sign-in.

/// Every screen the dashboard can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Employees,
    Departments,
    Attendance,
    Performance,
    Projects,
    CurrentProjects,
    CompletedProjects,
    ProjectTemplates,
    Clients,
    ActiveClients,
    Leads,
    Contracts,
    Finance,
    Revenue,
    Expenses,
    Invoices,
    FinanceReports,
    Calendar,
    Messages,
    Reports,
    ReportsOverview,
    HrReports,
    ProjectReports,
    ExportReports,
    Settings,
    Help,
    Profile,
    SignIn,
    SignUp,
}

impl Screen {
    /// Parse a path into a screen.  Trailing slashes are ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };

        let screen = match path {
            "/" => Screen::Dashboard,
            "/employees" => Screen::Employees,
            "/employees/departments" => Screen::Departments,
            "/employees/attendance" => Screen::Attendance,
            "/employees/performance" => Screen::Performance,
            "/projects" => Screen::Projects,
            "/projects/current" => Screen::CurrentProjects,
            "/projects/completed" => Screen::CompletedProjects,
            "/projects/templates" => Screen::ProjectTemplates,
            "/clients" => Screen::Clients,
            "/clients/active" => Screen::ActiveClients,
            "/clients/leads" => Screen::Leads,
            "/clients/contracts" => Screen::Contracts,
            "/finance" => Screen::Finance,
            "/finance/revenue" => Screen::Revenue,
            "/finance/expenses" => Screen::Expenses,
            "/finance/invoices" => Screen::Invoices,
            "/finance/reports" => Screen::FinanceReports,
            "/calendar" => Screen::Calendar,
            "/messages" => Screen::Messages,
            "/reports" => Screen::Reports,
            "/reports/overview" => Screen::ReportsOverview,
            "/reports/hr" => Screen::HrReports,
            "/reports/projects" => Screen::ProjectReports,
            "/reports/export" => Screen::ExportReports,
            "/settings" => Screen::Settings,
            "/help" => Screen::Help,
            "/profile" => Screen::Profile,
            "/signin" => Screen::SignIn,
            "/signup" => Screen::SignUp,
            _ => return None,
        };
        Some(screen)
    }

    /// Whether the screen is reachable without a session.
    pub fn is_public(&self) -> bool {
        matches!(self, Screen::SignIn | Screen::SignUp)
    }
}

/// Outcome of routing a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Show(Screen),
    RedirectToSignIn,
}

/// Route `path` under the authentication gate.
pub fn resolve(path: &str, authenticated: bool) -> Resolution {
    match Screen::from_path(path) {
        Some(screen) if screen.is_public() || authenticated => Resolution::Show(screen),
        Some(_) => Resolution::RedirectToSignIn,
        None => Resolution::RedirectToSignIn,
    }
}
