//! RecordForm - modal editing one draft
//!
//! The form is visible exactly while it is mounted; there is no internal
//! open flag. Its working copy is seeded once from the draft it was mounted
//! with and never re-synchronized afterwards.

use txboard_core::DraftRecord;
use txboard_utils::escape_html;

/// (field name, label, placeholder) for each input, in display order
const INPUTS: [(&str, &str, &str); 3] = [
    ("full_names", "Full Names", "Enter Full Names"),
    ("practice_number", "Practice Number", "Enter Practice Number"),
    ("notes", "Notes", "Enter Notes"),
];

/// What the form reports back to its owner
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Save was pressed; carries the working copy at that moment
    Save(DraftRecord),
    /// The modal chrome was dismissed
    Close,
}

#[derive(Debug, Clone)]
pub struct RecordForm {
    working: DraftRecord,
}

impl RecordForm {
    /// Mount a form seeded from `draft`
    pub fn new(draft: &DraftRecord) -> Self {
        Self {
            working: draft.clone(),
        }
    }

    /// Set one field of the working copy; unknown names are merged as-is
    pub fn field_changed(&mut self, name: &str, value: impl Into<String>) {
        self.working.set_field(name, value);
    }

    /// Hand the working copy to the owner. The form stays mounted.
    pub fn save(&self) -> FormEvent {
        FormEvent::Save(self.working.clone())
    }

    pub fn dismiss(&self) -> FormEvent {
        FormEvent::Close
    }

    pub fn working_copy(&self) -> &DraftRecord {
        &self.working
    }

    /// Render the modal
    pub fn render(&self) -> String {
        let inputs: String = INPUTS
            .iter()
            .map(|(name, label, placeholder)| {
                let value = self.working.field(name).unwrap_or_default();
                format!(
                    r#"<div class='form-group'>
                        <label for='{name}'>{label}</label>
                        <input type='text' class='form-control' id='{name}' name='{name}' value='{value}' placeholder='{placeholder}'
                            hx-post='/form/field' hx-trigger='input changed delay:250ms' hx-swap='none'>
                    </div>"#,
                    name = name,
                    label = label,
                    value = escape_html(value),
                    placeholder = placeholder,
                )
            })
            .collect();

        format!(
            r#"<div class='modal d-block' tabindex='-1' role='dialog' style='background: rgba(0,0,0,0.5)'>
    <div class='modal-dialog' role='document'>
        <div class='modal-content'>
            <div class='modal-header'>
                <h5 class='modal-title'>Transaction Data</h5>
                <button type='button' class='close' aria-label='Close'
                    hx-post='/form/close' hx-target='#form-slot' hx-swap='innerHTML'>&times;</button>
            </div>
            <div class='modal-body'>
                <form id='record-form' onsubmit='return false'>{}</form>
            </div>
            <div class='modal-footer'>
                <button type='button' class='btn btn-success'
                    hx-post='/form/save' hx-include='#record-form' hx-target='#form-slot' hx-swap='innerHTML'>Save</button>
            </div>
        </div>
    </div>
</div>"#,
            inputs
        )
    }
}
