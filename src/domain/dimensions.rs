//! Terminal size entity.

/// Terminal size as reported by the dimension query.
///
/// Sampled fresh before every frame and never cached across frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalDimensions {
    pub rows: u16,
    pub cols: u16,
}

impl TerminalDimensions {
    /// Create dimensions from rows and columns
    pub fn new(rows: u16, cols: u16) -> Self {
        Self { rows, cols }
    }

    /// Width available between the two border characters
    pub fn inner_width(&self) -> usize {
        (self.cols as usize).saturating_sub(2)
    }

    /// Frame height period: content is grown to a multiple of this
    pub fn page_height(&self) -> usize {
        (self.rows as usize).saturating_sub(1).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inner_width_saturates() {
        assert_eq!(TerminalDimensions::new(24, 80).inner_width(), 78);
        assert_eq!(TerminalDimensions::new(24, 1).inner_width(), 0);
        assert_eq!(TerminalDimensions::new(24, 0).inner_width(), 0);
    }

    #[test]
    fn test_page_height_never_zero() {
        assert_eq!(TerminalDimensions::new(24, 80).page_height(), 23);
        assert_eq!(TerminalDimensions::new(1, 80).page_height(), 1);
        assert_eq!(TerminalDimensions::new(0, 80).page_height(), 1);
    }
}
