pub(crate) mod batch;
pub(crate) mod dispute;
pub(crate) mod event;
pub(crate) mod key;
