pub mod change_password;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod manage_product;
pub mod my_profile;
pub mod register;
pub mod system;

pub use change_password::*;
pub use dashboard::*;
pub use home::*;
pub use login::*;
pub use manage_product::*;
pub use my_profile::*;
pub use register::*;
pub use system::*;
