/// Freshness of a derived matrix relative to the inputs it was built from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub(crate) enum CacheState {
    #[default]
    Dirty,
    Clean,
}

impl CacheState {
    #[inline]
    pub(crate) fn is_dirty(self) -> bool {
        self == CacheState::Dirty
    }
}
