pub mod element;
pub mod intake;
pub mod navbar;
pub mod provider;
pub mod selection;
