pub mod enumerate;
