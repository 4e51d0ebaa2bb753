//! Exported entry points, one `__lind_posix_<operation>` per catalog entry.
//!
//! Each symbol forwards its arguments unchanged to [`Platform`], the
//! implementation chosen for this build, and returns its encoded result. The
//! managed runtime binds to these names.
#![allow(clippy::missing_safety_doc)]

use crate::ops::PosixOps;
use crate::Platform;
use sysdefs::data::*;

macro_rules! export_posix_entries {
    ($($(#[$meta:meta])* $name:ident($($arg:ident: $ty:ty),*) -> $ret:ty;)*) => {
        paste::paste! {
            $(
                $(#[$meta])*
                #[no_mangle]
                pub unsafe extern "C" fn [<__lind_posix_ $name>]($($arg: $ty),*) -> $ret {
                    unsafe { <Platform as PosixOps>::$name($($arg),*) }
                }
            )*
        }
    };
}

for_each_posix_op!(export_posix_entries);
