pub mod err_const;
pub mod lind_platform_const;

pub use err_const::*;
pub use lind_platform_const::*;
