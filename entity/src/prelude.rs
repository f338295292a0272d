pub use super::songs::Entity as Songs;
