// menu.rs

use crate::error::CalcError;
use crate::operation::OperationKind;
use itertools::Itertools;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Selection {
    Compute(OperationKind),
    ViewHistory,
    Exit,
}

static ENTRIES: [(Selection, &str); 8] = [
    (Selection::Compute(OperationKind::Add), "Add"),
    (Selection::Compute(OperationKind::Subtract), "Subtract"),
    (Selection::Compute(OperationKind::Multiply), "Multiply"),
    (Selection::Compute(OperationKind::Divide), "Divide"),
    (Selection::Compute(OperationKind::Power), "Power"),
    (Selection::Compute(OperationKind::SquareRoot), "Square Root"),
    (Selection::ViewHistory, "View History"),
    (Selection::Exit, "Exit"),
];

impl Selection {
    /// Options are numbered from 1 in menu order.
    pub fn from_number(n: i32) -> Result<Self, CalcError> {
        usize::try_from(n)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| ENTRIES.get(i))
            .map(|(selection, _)| *selection)
            .ok_or(CalcError::InvalidSelection(n))
    }
}

pub fn render_menu() -> String {
    let options = ENTRIES
        .iter()
        .enumerate()
        .map(|(i, (_, label))| format!("{}. {}", i + 1, label))
        .join("\n");
    format!("\nSelect a math operation:\n{}", options)
}
