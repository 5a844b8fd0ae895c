/* Which slice of the chart is emphasized.

Two independent channels drive it: the pointer hovering a slice (or a legend entry) and an explicit click on a legend entry.
Hover wins while it lasts, the click selection is what remains once the pointer leaves.
Indices are positions in the current slice list, the caller keeps them in range.
*/
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    hover_index: Option<usize>,
    click_index: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_hover_enter(&mut self, index: usize) {
        self.hover_index = Some(index);
    }

    pub fn on_hover_exit(&mut self) {
        self.hover_index = None;
    }

    /* Clicking the selected entry again deselects it */
    pub fn on_activate(&mut self, index: usize) {
        if self.click_index == Some(index) {
            self.click_index = None;
        } else {
            self.click_index = Some(index);
        }
    }

    pub fn active_index(&self) -> Option<usize> {
        self.hover_index.or(self.click_index)
    }

    pub fn hover_index(&self) -> Option<usize> {
        self.hover_index
    }

    pub fn click_index(&self) -> Option<usize> {
        self.click_index
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
