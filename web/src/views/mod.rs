mod shell;
pub use shell::Shell;

mod login;
pub use login::Login;

pub use ui::views::DashboardView as Dashboard;
pub use ui::views::IntegrationsView as Integrations;
pub use ui::views::SchedulesView as Schedules;
pub use ui::views::ScrapersView as Scrapers;
