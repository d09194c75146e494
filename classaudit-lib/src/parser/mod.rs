pub mod elements;
pub mod html;
pub mod links;
