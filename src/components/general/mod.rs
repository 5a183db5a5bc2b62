pub mod status;
pub mod toast;
pub mod user_form;
pub mod user_list;

#[allow(unused_imports)]
pub use status::*;
#[allow(unused_imports)]
pub use toast::*;
#[allow(unused_imports)]
pub use user_form::*;
#[allow(unused_imports)]
pub use user_list::*;
