//! Page components, one per route.

mod ad_account;
mod auth;
mod campaign_schedule;
mod device_log;
mod not_found;
mod organizations;
mod screens;

pub use ad_account::{AdAccountPage, AdAccountPageProps};
pub use auth::{ForgotPasswordPage, LoginPage, LoginPageProps};
pub use campaign_schedule::{CampaignSchedulePage, CampaignSchedulePageProps};
pub use device_log::{DeviceLogPage, DeviceLogPageProps};
pub use not_found::NotFoundPage;
pub use organizations::{OrganizationsPage, OrganizationsPageProps};
pub use screens::{ScreensPage, ScreensPageProps};
