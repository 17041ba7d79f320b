pub mod model;

use crate::core::domain::Identifiable;
use crate::core::ledger::LoanState;

pub trait Book: Identifiable {
    fn state(&self, library_reader_id: i64) -> LoanState;
    fn is_on_shelf(&self, library_reader_id: i64) -> bool {
        self.state(library_reader_id) == LoanState::OnShelf
    }
}
