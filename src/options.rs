//! Display toggles for [`LineFormatter`](crate::LineFormatter).

bitflags::bitflags! {
    /// Independently combinable sections and styling switches.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FormatOptions: u32 {
        /// Wrap sections in `<color>`, `<b>` and `<i>` markup.
        const RICH_TEXT    = 1 << 0;
        const TIME         = 1 << 1;
        const THREAD       = 1 << 2;
        const TAG_CATEGORY = 1 << 3;
        const TAG_NAME     = 1 << 4;
        /// Severity code and numeric level.
        const SEVERITY     = 1 << 5;

        /// Both halves of the tag.
        const TAGS = Self::TAG_CATEGORY.bits() | Self::TAG_NAME.bits();
    }
}

impl FormatOptions {
    /// Whether any part of the tag section is shown.
    pub fn shows_tag(self) -> bool {
        self.intersects(Self::TAGS)
    }
}
