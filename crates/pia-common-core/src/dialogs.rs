//! Confirmation dialogs.

/// Opens modal dialogs by id.
///
/// Dialogs run their own confirm/cancel flow; opening never fails.
pub trait ModalService: Send + Sync {
    fn open(&self, dialog_id: &str);
}
