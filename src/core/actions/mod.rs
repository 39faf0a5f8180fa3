pub mod arithmetic;
pub mod convert;
pub mod format;
pub mod measure;
