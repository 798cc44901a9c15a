mod cbc;
mod cfb;
mod util;

pub use cbc::{cbc_core_dec, cbc_core_enc};
pub use cfb::{cfb_core_dec, cfb_core_enc};
