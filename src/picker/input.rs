// Masked keyboard editing
// Cell-by-cell field editing over a parsed format template

use crate::services::mask::MaskFormat;
use crate::utils::format_token::FormatToken;

/// Keyboard editing state for one text field.
///
/// The field text always has the template's exact width; editing rewrites
/// one cell at a time. A provisional digit buffer accumulates keystrokes
/// for the active cell and flushes when the cell is full or further digits
/// could not stay in range.
#[derive(Debug, Clone)]
pub struct MaskedInput {
    mask: MaskFormat,
    text: Vec<char>,
    active: Option<usize>,
    buffer: String,
    default_year: u32,
}

impl MaskedInput {
    pub fn new(mask: MaskFormat, default_year: u32) -> Self {
        let text: Vec<char> = mask.template().chars().collect();
        let active = mask.mask_cell_indices().first().copied();
        MaskedInput {
            mask,
            text,
            active,
            buffer: String::new(),
            default_year,
        }
    }

    pub fn mask(&self) -> &MaskFormat {
        &self.mask
    }

    pub fn text(&self) -> String {
        self.text.iter().collect()
    }

    /// The text span of the active cell, for selection highlighting.
    pub fn active_span(&self) -> Option<(usize, usize)> {
        let cell = &self.mask.cells()[self.active?];
        Some((cell.text_start, cell.text_end))
    }

    /// Replace the whole field text. Text that does not fit the template
    /// resets the field to the placeholder; the caller treats that as a
    /// recoverable mismatch, not an error.
    pub fn set_text(&mut self, text: &str) -> bool {
        self.buffer.clear();
        if self.mask.match_text(text) {
            self.text = text.chars().collect();
            true
        } else {
            self.text = self.mask.template().chars().collect();
            false
        }
    }

    /// Move the active cell to the one under a caret position.
    pub fn focus_at(&mut self, caret: usize) {
        self.buffer.clear();
        if let Some(index) = self.mask.cell_index_at(caret) {
            self.active = Some(index);
        }
    }

    pub fn move_left(&mut self) {
        self.shift_active(-1);
    }

    pub fn move_right(&mut self) {
        self.shift_active(1);
    }

    fn shift_active(&mut self, dir: i32) {
        self.buffer.clear();
        let order = self.mask.mask_cell_indices();
        let Some(active) = self.active else { return };
        let Some(pos) = order.iter().position(|&i| i == active) else {
            return;
        };
        let next = pos as i32 + dir;
        if next >= 0 && (next as usize) < order.len() {
            self.active = Some(order[next as usize]);
        }
    }

    fn write_cell(&mut self, index: usize, content: &str) {
        let cell = &self.mask.cells()[index];
        let chars: Vec<char> = content.chars().collect();
        let width = cell.text_width();
        for (offset, slot) in (cell.text_start..cell.text_end).enumerate() {
            // right-align, zero-pad on the left
            let from_right = width - offset;
            self.text[slot] = if chars.len() >= from_right {
                chars[chars.len() - from_right]
            } else {
                '0'
            };
        }
    }

    fn cell_number(&self, index: usize) -> Option<u32> {
        let cell = &self.mask.cells()[index];
        let slice: String = self.text[cell.text_start..cell.text_end].iter().collect();
        slice.parse().ok()
    }

    fn meridiem_text(token: FormatToken, pm: bool) -> &'static str {
        match (token, pm) {
            (FormatToken::MeridiemLower, false) => "am",
            (FormatToken::MeridiemLower, true) => "pm",
            (_, false) => "AM",
            (_, true) => "PM",
        }
    }

    fn set_meridiem(&mut self, index: usize, token: FormatToken, pm: bool) {
        let cell = &self.mask.cells()[index];
        let label = Self::meridiem_text(token, pm);
        let chars: Vec<char> = label.chars().collect();
        for (offset, slot) in (cell.text_start..cell.text_end).enumerate() {
            self.text[slot] = chars[offset];
        }
    }

    fn is_pm(&self, index: usize) -> bool {
        let cell = &self.mask.cells()[index];
        self.text[cell.text_start].to_ascii_uppercase() == 'P'
    }

    /// Type one digit into the active cell. The cell auto-advances when it
    /// is full, or earlier when another digit could no longer fit the
    /// cell's numeric range (typing 5 into a month cell yields 05 and
    /// moves on).
    pub fn input_digit(&mut self, digit: u32) {
        let Some(index) = self.active else { return };
        let Some(token) = self.mask.cells()[index].token else {
            return;
        };
        if matches!(
            token,
            FormatToken::MeridiemUpper | FormatToken::MeridiemLower
        ) {
            return;
        }
        let width = token.edit_width();
        self.buffer.push_str(&digit.to_string());
        if self.buffer.len() > width {
            self.buffer = digit.to_string();
        }
        let number: u32 = self.buffer.parse().unwrap_or(0);
        self.write_cell(index, &self.buffer.clone());
        let full = self.buffer.len() == width;
        let overflow = match token.range() {
            Some((_, hi)) => number * 10 > hi,
            None => false,
        };
        if full || overflow {
            self.move_right();
        }
    }

    /// Type a meridiem letter into the active cell when it is a meridiem
    /// cell; other letters are ignored.
    pub fn input_letter(&mut self, letter: char) {
        let Some(index) = self.active else { return };
        let Some(token) = self.mask.cells()[index].token else {
            return;
        };
        if !matches!(
            token,
            FormatToken::MeridiemUpper | FormatToken::MeridiemLower
        ) {
            return;
        }
        match letter.to_ascii_lowercase() {
            'a' => self.set_meridiem(index, token, false),
            'p' => self.set_meridiem(index, token, true),
            _ => return,
        }
        self.move_right();
    }

    /// Step the active cell up or down. Bounded cells wrap around their
    /// numeric range; year cells step without wrapping and start from the
    /// default year when the cell is not numeric yet.
    pub fn step(&mut self, dir: i32) {
        let Some(index) = self.active else { return };
        let Some(token) = self.mask.cells()[index].token else {
            return;
        };
        self.buffer.clear();
        match token {
            FormatToken::MeridiemUpper | FormatToken::MeridiemLower => {
                let pm = self.is_pm(index);
                self.set_meridiem(index, token, !pm);
            }
            FormatToken::Year => {
                let current = self.cell_number(index).unwrap_or(self.default_year);
                let next = if dir >= 0 {
                    current.saturating_add(dir as u32)
                } else {
                    current.saturating_sub(dir.unsigned_abs())
                };
                self.write_cell(index, &format!("{next:04}"));
            }
            _ => {
                let (lo, hi) = token.range().unwrap_or((0, 9));
                let span = (hi - lo + 1) as i64;
                let current = self.cell_number(index).unwrap_or(lo) as i64;
                let next = lo as i64 + (current - lo as i64 + dir as i64).rem_euclid(span);
                let width = token.edit_width();
                self.write_cell(index, &format!("{next:0width$}"));
            }
        }
    }

    /// Blank the active cell back to its placeholder. Never auto-advances,
    /// so repeated backspaces stay put.
    pub fn backspace(&mut self) {
        self.buffer.clear();
        let Some(index) = self.active else { return };
        let cell = &self.mask.cells()[index];
        if cell.token.is_none() {
            return;
        }
        let letter = cell.text.chars().next().unwrap_or('?');
        let (start, end) = (cell.text_start, cell.text_end);
        for slot in start..end {
            self.text[slot] = letter;
        }
    }
}
