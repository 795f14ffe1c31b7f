pub mod assessments;
pub mod core;
pub mod marks;
pub mod modules;
pub mod students;

use std::io::Write;

use crate::model::module::ModuleList;
use crate::storage::Storage;
use crate::ui::Ui;

/// Persistence is best-effort: the in-memory model already holds the change,
/// so a failed save is reported and the session continues.
pub(crate) fn persist<W: Write>(storage: &Storage, modules: &ModuleList, ui: &mut Ui<W>) {
    if let Err(e) = storage.save(modules) {
        tracing::warn!("failed to save data: {e:#}");
        ui.print_message(&format!("Warning: failed to save data: {e:#}"));
    }
}
