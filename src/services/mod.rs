pub mod google;
pub mod mrsu;

pub use google::GoogleOAuthClient;
pub use mrsu::MrsuClient;
