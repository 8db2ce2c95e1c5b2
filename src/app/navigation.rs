use super::AppState;

impl AppState {
    pub fn move_column(&mut self, delta: isize) {
        let width = self.table.width();
        if width == 0 {
            return;
        }

        let new_col = self.selected_col.saturating_add_signed(delta).min(width - 1);
        self.selected_col = new_col;
        self.ensure_column_visible(new_col);
    }

    pub fn scroll_rows(&mut self, delta: isize) {
        let max_start = self
            .table
            .data_row_count()
            .saturating_sub(self.visible_rows.max(1));
        self.start_row = self.start_row.saturating_add_signed(delta).min(max_start);
    }

    pub fn jump_to_first_column(&mut self) {
        self.selected_col = 0;
        self.ensure_column_visible(0);
    }

    pub fn jump_to_last_column(&mut self) {
        let last = self.table.width().saturating_sub(1);
        self.selected_col = last;
        self.ensure_column_visible(last);
    }

    pub fn ensure_column_visible(&mut self, column: usize) {
        if column < self.start_col {
            self.start_col = column;
        } else if column >= self.start_col + self.visible_cols.max(1) {
            self.start_col = column + 1 - self.visible_cols.max(1);
        }
    }
}
