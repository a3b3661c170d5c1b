pub mod dashboard;
pub mod login;

pub use dashboard::AdminDashboardPage;
pub use login::AdminLoginPage;
