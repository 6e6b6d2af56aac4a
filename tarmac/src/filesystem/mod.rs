#[cfg(native)]
pub mod native;
#[cfg(native)]
pub type FileSystem = native::FileSystem;

#[cfg(web)]
pub mod web;
#[cfg(web)]
pub type FileSystem = web::FileSystem;
