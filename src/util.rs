use crate::consts;
use enum_map::Enum;
use ratatui::layout::{Flex, Layout, Rect, Size};

/// Navigation over the variants of a field-less enum, in declaration order
pub(crate) trait EnumExt: Enum + Sized {
    fn min() -> Self {
        Self::from_usize(0)
    }

    fn max() -> Self {
        Self::from_usize(Self::LENGTH - 1)
    }

    fn next(self) -> Option<Self> {
        let i = self.into_usize() + 1;
        (i < Self::LENGTH).then(|| Self::from_usize(i))
    }

    fn prev(self) -> Option<Self> {
        self.into_usize().checked_sub(1).map(Self::from_usize)
    }

    fn iter() -> impl Iterator<Item = Self> {
        (0..Self::LENGTH).map(Self::from_usize)
    }
}

impl<T: Enum> EnumExt for T {}

/// Return a rectangle of the given size centered within `area`, shrunk to fit
/// if `area` is too small
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [area] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(area);
    area
}

pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    center_rect(buffer_area, consts::DISPLAY_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
    enum Abc {
        A,
        B,
        C,
    }

    #[test]
    fn enum_ext() {
        assert_eq!(Abc::min(), Abc::A);
        assert_eq!(Abc::max(), Abc::C);
        assert_eq!(Abc::A.next(), Some(Abc::B));
        assert_eq!(Abc::C.next(), None);
        assert_eq!(Abc::A.prev(), None);
        assert_eq!(Abc::C.prev(), Some(Abc::B));
        assert_eq!(Abc::iter().collect::<Vec<_>>(), [Abc::A, Abc::B, Abc::C]);
    }

    #[rstest]
    #[case(Rect::new(0, 0, 80, 24), Size::new(20, 6), Rect::new(30, 9, 20, 6))]
    #[case(Rect::new(10, 5, 20, 6), Size::new(20, 6), Rect::new(10, 5, 20, 6))]
    fn test_center_rect(#[case] area: Rect, #[case] size: Size, #[case] r: Rect) {
        assert_eq!(center_rect(area, size), r);
    }
}
