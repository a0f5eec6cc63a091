pub mod access;
pub mod check_dep;
pub mod closure;
pub mod digest;
pub mod lookup;
pub mod validate;
pub mod visible;
