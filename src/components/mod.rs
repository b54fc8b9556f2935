mod admin_support_dialog;
mod header;
mod private_dns_dialog;
mod private_dns_preference;
mod status_bar;

pub use admin_support_dialog::AdminSupportDialog;
pub use header::Header;
pub use private_dns_dialog::PrivateDnsDialogView;
pub use private_dns_preference::PrivateDnsPreference;
pub use status_bar::StatusBar;
