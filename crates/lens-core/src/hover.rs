use crate::error::LensError;

/// Which link (and therefore which image) is under the pointer.
#[derive(Clone, Debug)]
pub struct HoverState {
    index: Option<usize>,
    len: usize,
}

impl HoverState {
    pub fn new(link_count: usize) -> Self {
        Self {
            index: None,
            len: link_count,
        }
    }

    #[inline]
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// `-1` when nothing is hovered, for JS consumers.
    pub fn as_i32(&self) -> i32 {
        self.index.map_or(-1, |i| i as i32)
    }

    pub fn link_count(&self) -> usize {
        self.len
    }

    pub fn set_hovered(&mut self, index: usize) -> Result<(), LensError> {
        if index >= self.len {
            return Err(LensError::HoverOutOfRange {
                index,
                len: self.len,
            });
        }
        self.index = Some(index);
        Ok(())
    }

    pub fn clear_hovered(&mut self) {
        self.index = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_clear() {
        let mut h = HoverState::new(7);
        assert_eq!(h.as_i32(), -1);
        h.set_hovered(2).unwrap();
        assert_eq!(h.index(), Some(2));
        assert_eq!(h.as_i32(), 2);
        h.clear_hovered();
        assert_eq!(h.index(), None);
        assert_eq!(h.as_i32(), -1);
    }

    #[test]
    fn out_of_range_keeps_current_index() {
        let mut h = HoverState::new(3);
        h.set_hovered(1).unwrap();
        assert_eq!(
            h.set_hovered(3),
            Err(LensError::HoverOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(h.index(), Some(1));
    }
}
