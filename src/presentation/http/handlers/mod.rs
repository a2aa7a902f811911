pub mod fallback;
pub mod info;
pub mod population;
pub mod root;
pub mod status;
