use crate::core::domain::Identifiable;

pub mod model;

pub trait Book: Identifiable {
    fn isbn(&self) -> &str;
}

// The holder of an isbn blocks every other book, including one that is not saved yet.
pub(crate) fn isbn_held_by_other(holder: &dyn Book, target: Option<&dyn Book>) -> bool {
    holder.id() != target.and_then(|b| b.id())
}
